//! Step processor: owns the frame set, the policy state and the history.
//!
//! For each reference the processor:
//! 1. **Classifies** it as a hit (page resident) or a fault.
//! 2. **Places** a faulting page in a free frame, or overwrites the policy's victim.
//! 3. **Updates** the policy with the access.
//! 4. **Records** an immutable [`StepRecord`] with value copies of the frames and policy.
//!
//! A simulator is single-use state for one configuration. Independent
//! instances share nothing and may run on different threads.

use tracing::{debug, info};

use super::history::StepRecord;
use super::trace::ExecutionTrace;
use crate::common::error::Result;
use crate::common::{FrameSet, PageId};
use crate::config::{self, Algorithm, SimConfig};
use crate::policies::{PolicyState, ReplacementPolicy};
use crate::reference::{ReferenceInput, ReferenceSequence};
use crate::stats::Statistics;

/// Page-replacement simulation engine for one run.
#[derive(Debug, Clone)]
pub struct Simulator {
    references: ReferenceSequence,
    frames: FrameSet,
    policy: PolicyState,
    history: Vec<StepRecord>,
    fault_count: usize,
    hit_count: usize,
}

impl Simulator {
    /// Creates a simulator for an already-parsed reference string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`](crate::SimError::InvalidConfiguration)
    /// if `frames` is zero.
    pub fn new(references: ReferenceSequence, frames: usize, algorithm: Algorithm) -> Result<Self> {
        config::validate_frames(frames)?;
        let policy = PolicyState::new(algorithm, frames, &references);
        Ok(Self {
            history: Vec::with_capacity(references.len()),
            frames: FrameSet::new(frames),
            references,
            policy,
            fault_count: 0,
            hit_count: 0,
        })
    }

    /// Creates a simulator from raw caller input and a textual algorithm selector.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`](crate::SimError::Parse) for a malformed
    /// reference token, and
    /// [`SimError::InvalidConfiguration`](crate::SimError::InvalidConfiguration)
    /// for a zero frame count or an unknown selector.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesim_core::{Simulator, SimError};
    ///
    /// let sim = Simulator::from_input(&"1 2 3".into(), 3, "LRU").unwrap();
    /// assert_eq!(sim.references().len(), 3);
    ///
    /// let err = Simulator::from_input(&"1 2 3".into(), 3, "random").unwrap_err();
    /// assert!(matches!(err, SimError::InvalidConfiguration(_)));
    /// ```
    pub fn from_input(input: &ReferenceInput, frames: usize, selector: &str) -> Result<Self> {
        let references = input.resolve()?;
        let algorithm = selector.parse::<Algorithm>()?;
        Self::new(references, frames, algorithm)
    }

    /// Creates a simulator from a deserialized configuration.
    ///
    /// # Errors
    ///
    /// As for [`Simulator::from_input`].
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.references.resolve()?, config.frames, config.algorithm)
    }

    /// Algorithm being simulated.
    #[inline]
    pub const fn algorithm(&self) -> Algorithm {
        self.policy.algorithm()
    }

    /// Configured number of frames.
    #[inline]
    pub const fn frame_count(&self) -> usize {
        self.frames.capacity()
    }

    /// The full reference string.
    #[inline]
    pub const fn references(&self) -> &ReferenceSequence {
        &self.references
    }

    /// Current frame contents.
    #[inline]
    pub const fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Current policy state.
    #[inline]
    pub const fn policy(&self) -> &PolicyState {
        &self.policy
    }

    /// Records of every reference processed so far.
    #[inline]
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Returns `true` once every reference has been processed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.history.len() == self.references.len()
    }

    /// Processes the next reference.
    ///
    /// Returns the new record, or `None` when the sequence is exhausted.
    pub fn step(&mut self) -> Option<&StepRecord> {
        let step = self.history.len();
        let page = self.references.get(step)?;
        let hit = self.frames.contains(page);
        let evicted = if hit {
            self.hit_count += 1;
            None
        } else {
            self.fault_count += 1;
            self.place(page, step)
        };
        self.policy.record_access(page, hit);

        debug!(step, page, hit, ?evicted, "reference processed");

        self.history.push(StepRecord {
            step,
            page,
            hit,
            evicted,
            frames: self.frames.pages().to_vec(),
            policy: self.policy.snapshot(&self.frames, step),
        });

        if self.is_complete() {
            info!(
                algorithm = %self.algorithm(),
                frames = self.frame_count(),
                faults = self.fault_count,
                hits = self.hit_count,
                "simulation complete"
            );
        }
        self.history.last()
    }

    /// Runs every remaining reference and returns the full history.
    ///
    /// Calling this on a completed run replays it from the start, producing an
    /// identical history.
    pub fn simulate(&mut self) -> &[StepRecord] {
        if self.is_complete() {
            self.reset();
        }
        while self.step().is_some() {}
        &self.history
    }

    /// Discards all progress so the next step starts at reference 0.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.policy.reset();
        self.history.clear();
        self.fault_count = 0;
        self.hit_count = 0;
    }

    /// Statistics over the references processed so far.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_counts(self.fault_count, self.hit_count)
    }

    /// Human-readable report of the run; see [`ExecutionTrace`].
    pub fn execution_trace(&self) -> String {
        ExecutionTrace::new(self).to_string()
    }

    /// Puts a faulting page into a frame, returning the evicted page if any.
    fn place(&mut self, page: PageId, step: usize) -> Option<PageId> {
        if self.frames.is_full() {
            let slot = self.policy.select_victim(&self.frames, step);
            Some(self.frames.replace(slot, page))
        } else {
            let _ = self.frames.push(page);
            None
        }
    }
}
