//! Page Replacement Policy Tests.
//!
//! Verifies victim selection and bookkeeping for FIFO, LRU, Optimal and Clock,
//! both through the engine (golden histories on the textbook reference
//! string) and on the policy types in isolation.

use pagesim_core::common::FrameSet;
use pagesim_core::policies::{
    ClockPolicy, FifoPolicy, LruPolicy, OptimalPolicy, PolicySnapshot, PolicyState,
    ReplacementPolicy,
};
use pagesim_core::{Algorithm, ReferenceSequence};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{BELADY, TEXTBOOK, evictions, faults, frame_trace, run};

// ══════════════════════════════════════════════════════════
// 1. Golden fault counts
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(Algorithm::Fifo, 15)]
#[case(Algorithm::Lru, 12)]
#[case(Algorithm::Optimal, 9)]
#[case(Algorithm::Clock, 14)]
fn textbook_three_frames(#[case] algorithm: Algorithm, #[case] expected: usize) {
    assert_eq!(faults(TEXTBOOK, 3, algorithm), expected);
}

#[rstest]
#[case(Algorithm::Fifo, 3, 9)]
#[case(Algorithm::Fifo, 4, 10)]
#[case(Algorithm::Lru, 3, 10)]
#[case(Algorithm::Lru, 4, 8)]
#[case(Algorithm::Optimal, 3, 7)]
#[case(Algorithm::Optimal, 4, 6)]
#[case(Algorithm::Clock, 3, 9)]
#[case(Algorithm::Clock, 4, 10)]
fn belady_string(#[case] algorithm: Algorithm, #[case] frames: usize, #[case] expected: usize) {
    assert_eq!(faults(BELADY, frames, algorithm), expected);
}

#[test]
fn fifo_exhibits_belady_anomaly() {
    assert!(faults(BELADY, 4, Algorithm::Fifo) > faults(BELADY, 3, Algorithm::Fifo));
}

// ══════════════════════════════════════════════════════════
// 2. FIFO
// ══════════════════════════════════════════════════════════

#[test]
fn fifo_textbook_history() {
    let sim = run(TEXTBOOK, 3, Algorithm::Fifo);
    let history = sim.history();
    assert_eq!(
        evictions(history),
        vec![
            None,
            None,
            None,
            Some(7),
            None,
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(0),
            Some(4),
            None,
            None,
            Some(2),
            Some(3),
            None,
            None,
            Some(0),
            Some(1),
            Some(2),
        ]
    );
    assert_eq!(history[5].frames, vec![2, 3, 1]);
    assert_eq!(history[19].frames, vec![7, 0, 1]);
    assert_eq!(
        history[5].policy,
        PolicySnapshot::Fifo {
            queue: vec![1, 2, 3]
        }
    );
}

#[test]
fn fifo_hits_do_not_reorder_queue() {
    let mut fifo = FifoPolicy::new();
    for page in [1, 2, 3] {
        fifo.record_access(page, false);
    }
    fifo.record_access(1, true);
    assert_eq!(fifo.queue().collect::<Vec<_>>(), vec![1, 2, 3]);

    let mut frames = FrameSet::new(3);
    for page in [1, 2, 3] {
        let _ = frames.push(page);
    }
    assert_eq!(fifo.select_victim(&frames, 4), 0);
    assert_eq!(fifo.queue().collect::<Vec<_>>(), vec![2, 3]);
}

// ══════════════════════════════════════════════════════════
// 3. LRU
// ══════════════════════════════════════════════════════════

#[test]
fn lru_textbook_history() {
    let sim = run(TEXTBOOK, 3, Algorithm::Lru);
    let history = sim.history();
    assert_eq!(
        frame_trace(&history[..8]),
        vec![
            vec![7],
            vec![7, 0],
            vec![7, 0, 1],
            vec![2, 0, 1],
            vec![2, 0, 1],
            vec![2, 0, 3],
            vec![2, 0, 3],
            vec![4, 0, 3],
        ]
    );
    assert_eq!(history[19].frames, vec![1, 0, 7]);
    assert_eq!(
        history[4].policy,
        PolicySnapshot::Lru {
            recency: vec![1, 2, 0]
        }
    );
}

#[test]
fn lru_hit_moves_page_to_most_recent_end() {
    let mut lru = LruPolicy::new();
    for page in [1, 2, 3] {
        lru.record_access(page, false);
    }
    lru.record_access(1, true);
    assert_eq!(lru.recency().collect::<Vec<_>>(), vec![2, 3, 1]);

    let mut frames = FrameSet::new(3);
    for page in [1, 2, 3] {
        let _ = frames.push(page);
    }
    assert_eq!(lru.select_victim(&frames, 4), 1);
}

// ══════════════════════════════════════════════════════════
// 4. Optimal
// ══════════════════════════════════════════════════════════

#[test]
fn optimal_textbook_history() {
    let sim = run(TEXTBOOK, 3, Algorithm::Optimal);
    let history = sim.history();
    assert_eq!(history[7].evicted, Some(0));
    assert_eq!(history[7].frames, vec![2, 4, 3]);
    assert_eq!(
        history[7].policy,
        PolicySnapshot::Optimal {
            next_use: vec![Some(8), None, Some(9)]
        }
    );
    assert_eq!(history[19].frames, vec![7, 0, 1]);
}

#[test]
fn optimal_tie_break_prefers_first_slot() {
    // After 1,2,3 every resident page is never used again; slot 0 loses.
    let refs = ReferenceSequence::new(vec![1, 2, 3, 4, 5]);
    let mut policy = OptimalPolicy::new(&refs);
    let mut frames = FrameSet::new(3);
    for page in [1, 2, 3] {
        let _ = frames.push(page);
    }
    assert_eq!(policy.select_victim(&frames, 3), 0);
}

#[test]
fn optimal_tie_break_among_infinite_follows_slot_order() {
    // Page 1 recurs; 2 and 3 never do. The first of those (slot 1) goes.
    let sim = run("1,2,3,4,1", 3, Algorithm::Optimal);
    assert_eq!(sim.history()[3].evicted, Some(2));
    assert_eq!(sim.history()[3].frames, vec![1, 4, 3]);
}

#[test]
fn optimal_index_is_untouched_by_simulation() {
    let refs = ReferenceSequence::new(vec![1, 2, 1, 3, 1]);
    let state = PolicyState::new(Algorithm::Optimal, 2, &refs);
    let PolicyState::Optimal(policy) = &state else {
        panic!("expected optimal state");
    };
    let before = policy.index().clone();

    let mut sim = pagesim_core::Simulator::new(refs, 2, Algorithm::Optimal).unwrap();
    let _ = sim.simulate();
    let PolicyState::Optimal(after) = sim.policy() else {
        panic!("expected optimal state");
    };
    assert_eq!(after.index(), &before);
    assert_eq!(after.index().occurrences(1), &[0, 2, 4]);
}

// ══════════════════════════════════════════════════════════
// 5. Clock
// ══════════════════════════════════════════════════════════

#[test]
fn clock_textbook_history() {
    let sim = run(TEXTBOOK, 3, Algorithm::Clock);
    let history = sim.history();
    assert_eq!(history[3].evicted, Some(7));
    assert_eq!(
        history[3].policy,
        PolicySnapshot::Clock {
            reference_bits: vec![true, false, false],
            hand: 1
        }
    );
    assert_eq!(history[5].evicted, Some(1));
    assert_eq!(history[5].frames, vec![2, 0, 3]);
    assert_eq!(
        history[10].policy,
        PolicySnapshot::Clock {
            reference_bits: vec![false, false, true],
            hand: 0
        }
    );
    assert_eq!(history[19].frames, vec![0, 7, 1]);
}

#[test]
fn clock_without_hits_matches_fifo() {
    // No page repeats inside the window, so every bit is set at each fault.
    let text = "1,2,3,4,5,6,7,8,9";
    let clock = run(text, 3, Algorithm::Clock);
    let fifo = run(text, 3, Algorithm::Fifo);
    assert_eq!(evictions(clock.history()), evictions(fifo.history()));
    assert_eq!(frame_trace(clock.history()), frame_trace(fifo.history()));
}

#[test]
fn clock_first_unset_bit_from_hand_is_victim() {
    let mut frames = FrameSet::new(3);
    for page in [10, 20, 30] {
        let _ = frames.push(page);
    }
    let mut clock = ClockPolicy::new(3);
    // No access recorded: every bit starts clear, so insertion order decides.
    assert_eq!(clock.select_victim(&frames, 3), 0);
    assert_eq!(clock.hand(), 1);
    assert_eq!(clock.select_victim(&frames, 4), 1);
    assert_eq!(clock.select_victim(&frames, 5), 2);
    assert_eq!(clock.hand(), 0);
}

#[test]
fn clock_hit_sets_reference_bit() {
    let mut clock = ClockPolicy::new(2);
    assert!(!clock.reference_bit(5));
    clock.record_access(5, true);
    assert!(clock.reference_bit(5));
}

// ══════════════════════════════════════════════════════════
// 6. Policy state dispatch
// ══════════════════════════════════════════════════════════

#[test]
fn policy_state_matches_algorithm() {
    let refs = ReferenceSequence::new(vec![1, 2]);
    for algorithm in Algorithm::ALL {
        assert_eq!(PolicyState::new(algorithm, 2, &refs).algorithm(), algorithm);
    }
}

#[test]
fn reset_clears_bookkeeping() {
    let refs = ReferenceSequence::new(vec![1, 2]);
    let mut state = PolicyState::new(Algorithm::Clock, 2, &refs);
    state.record_access(1, false);
    state.reset();
    let frames = FrameSet::new(2);
    assert_eq!(
        state.snapshot(&frames, 0),
        PolicySnapshot::Clock {
            reference_bits: vec![],
            hand: 0
        }
    );
}
