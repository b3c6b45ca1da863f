//! Property Tests.
//!
//! Invariants that must hold for every reference string, frame count and
//! algorithm, checked over generated inputs.

use std::collections::BTreeSet;

use pagesim_core::policies::PolicySnapshot;
use pagesim_core::{Algorithm, ReferenceSequence, Simulator};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn references() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..8, 0..60)
}

fn simulate(pages: &[i64], frames: usize, algorithm: Algorithm) -> Simulator {
    let mut sim = Simulator::new(ReferenceSequence::new(pages.to_vec()), frames, algorithm)
        .expect("valid configuration");
    let _ = sim.simulate();
    sim
}

proptest! {
    #[test]
    fn counts_cover_every_reference(
        pages in references(),
        frames in 1usize..6,
        algorithm in algorithm(),
    ) {
        let sim = simulate(&pages, frames, algorithm);
        let stats = sim.statistics();
        prop_assert_eq!(stats.hit_count + stats.fault_count, pages.len());
        prop_assert_eq!(stats.total_references, pages.len());
        prop_assert_eq!(sim.history().len(), pages.len());
        prop_assert_eq!(
            sim.history().iter().filter(|r| r.hit).count(),
            stats.hit_count
        );
    }

    #[test]
    fn frames_never_exceed_capacity(
        pages in references(),
        frames in 1usize..6,
        algorithm in algorithm(),
    ) {
        let sim = simulate(&pages, frames, algorithm);
        for record in sim.history() {
            prop_assert!(record.frames.len() <= frames);
            prop_assert!(record.frames.contains(&record.page));
            let distinct: BTreeSet<_> = record.frames.iter().collect();
            prop_assert_eq!(distinct.len(), record.frames.len());
        }
    }

    #[test]
    fn evictions_only_on_full_faults(
        pages in references(),
        frames in 1usize..6,
        algorithm in algorithm(),
    ) {
        let sim = simulate(&pages, frames, algorithm);
        let mut previous: Vec<i64> = Vec::new();
        for record in sim.history() {
            match record.evicted {
                Some(victim) => {
                    prop_assert!(!record.hit);
                    prop_assert_eq!(previous.len(), frames);
                    prop_assert!(previous.contains(&victim));
                    prop_assert!(!record.frames.contains(&victim));
                }
                None if !record.hit => prop_assert!(previous.len() < frames),
                None => prop_assert_eq!(&previous, &record.frames),
            }
            previous.clone_from(&record.frames);
        }
    }

    #[test]
    fn optimal_is_never_beaten(
        pages in references(),
        frames in 1usize..6,
    ) {
        let optimal = simulate(&pages, frames, Algorithm::Optimal).statistics().fault_count;
        for other in [Algorithm::Fifo, Algorithm::Lru, Algorithm::Clock] {
            let faults = simulate(&pages, frames, other).statistics().fault_count;
            prop_assert!(optimal <= faults, "{} beat optimal: {} < {}", other, faults, optimal);
        }
    }

    #[test]
    fn faults_at_least_distinct_pages(
        pages in references(),
        frames in 1usize..6,
        algorithm in algorithm(),
    ) {
        let sim = simulate(&pages, frames, algorithm);
        prop_assert!(sim.statistics().fault_count >= sim.references().distinct_pages());
    }

    #[test]
    fn lru_and_optimal_never_fault_more_with_more_frames(
        pages in references(),
        frames in 1usize..5,
    ) {
        for algorithm in [Algorithm::Lru, Algorithm::Optimal] {
            let smaller = simulate(&pages, frames, algorithm).statistics().fault_count;
            let larger = simulate(&pages, frames + 1, algorithm).statistics().fault_count;
            prop_assert!(larger <= smaller);
        }
    }

    #[test]
    fn snapshots_describe_resident_pages(
        pages in references(),
        frames in 1usize..6,
        algorithm in algorithm(),
    ) {
        let sim = simulate(&pages, frames, algorithm);
        for record in sim.history() {
            let resident: BTreeSet<i64> = record.frames.iter().copied().collect();
            match &record.policy {
                PolicySnapshot::Fifo { queue } => {
                    prop_assert_eq!(queue.iter().copied().collect::<BTreeSet<_>>(), resident);
                }
                PolicySnapshot::Lru { recency } => {
                    prop_assert_eq!(recency.iter().copied().collect::<BTreeSet<_>>(), resident);
                    prop_assert_eq!(recency.last(), Some(&record.page));
                }
                PolicySnapshot::Optimal { next_use } => {
                    prop_assert_eq!(next_use.len(), record.frames.len());
                    for (slot, next) in next_use.iter().enumerate() {
                        if let Some(position) = next {
                            prop_assert!(*position > record.step);
                            prop_assert_eq!(pages[*position], record.frames[slot]);
                        }
                    }
                }
                PolicySnapshot::Clock { reference_bits, hand } => {
                    prop_assert_eq!(reference_bits.len(), record.frames.len());
                    prop_assert!(*hand < frames);
                    let slot = record.slot().expect("referenced page is resident");
                    prop_assert!(reference_bits[slot]);
                }
            }
        }
    }

    #[test]
    fn replay_is_deterministic(
        pages in references(),
        frames in 1usize..6,
        algorithm in algorithm(),
    ) {
        let mut sim = simulate(&pages, frames, algorithm);
        let first = sim.history().to_vec();
        let trace = sim.execution_trace();
        let second = sim.simulate().to_vec();
        prop_assert_eq!(first, second);
        prop_assert_eq!(trace, sim.execution_trace());
    }
}
