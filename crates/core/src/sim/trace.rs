//! Execution trace rendering.
//!
//! Produces the plain-text report of a run: the configuration, the reference
//! string, the statistics block and one line per processed reference. The
//! report is a convenience view for terminals and logs, not a stable
//! machine-readable format; consumers that need structure read the
//! [`StepRecord`](super::StepRecord)s directly.

use std::fmt;

use super::simulator::Simulator;

const RULE_HEAVY: &str = "==========================================================";
const RULE_LIGHT: &str = "----------------------------------------------------------";

/// Display adapter rendering the execution trace of a [`Simulator`].
///
/// # Examples
///
/// ```
/// use pagesim_core::{Algorithm, Simulator};
///
/// let mut sim = Simulator::new(vec![1, 2, 1].into(), 2, Algorithm::Lru).unwrap();
/// let _ = sim.simulate();
/// let trace = sim.execution_trace();
/// assert!(trace.contains("algorithm                LRU"));
/// assert!(trace.contains("step    3  page 1      HIT    [1, 2]"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExecutionTrace<'a> {
    sim: &'a Simulator,
}

impl<'a> ExecutionTrace<'a> {
    /// Wraps `sim` for rendering.
    pub const fn new(sim: &'a Simulator) -> Self {
        Self { sim }
    }
}

impl fmt::Display for ExecutionTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sim = self.sim;
        let capacity = sim.frame_count();
        // Slots past the reference count can never fill.
        let shown_slots = capacity.min(sim.references().len());

        writeln!(f, "{RULE_HEAVY}")?;
        writeln!(f, "PAGE REPLACEMENT TRACE")?;
        writeln!(f, "{RULE_HEAVY}")?;
        writeln!(f, "algorithm                {}", sim.algorithm())?;
        writeln!(f, "frames                   {capacity}")?;
        writeln!(f, "reference_sequence       {}", sim.references())?;
        writeln!(f, "{RULE_LIGHT}")?;
        writeln!(f, "STATISTICS")?;
        writeln!(f, "{}", sim.statistics())?;
        writeln!(f, "{RULE_LIGHT}")?;
        writeln!(f, "STEPS")?;
        for record in sim.history() {
            let outcome = if record.hit { "HIT" } else { "FAULT" };
            write!(
                f,
                "  step {:>4}  page {:<6} {:<6} [",
                record.step + 1,
                record.page,
                outcome
            )?;
            for slot in 0..shown_slots {
                if slot > 0 {
                    f.write_str(", ")?;
                }
                match record.frames.get(slot) {
                    Some(page) => write!(f, "{page}")?,
                    None => f.write_str("-")?,
                }
            }
            f.write_str("]")?;
            if let Some(victim) = record.evicted {
                write!(f, "  evicted {victim}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{RULE_HEAVY}")
    }
}
