//! Simulation statistics.
//!
//! This module derives aggregate metrics from a run's hit and fault counters:
//! 1. **Counts:** Faults, hits and total references processed.
//! 2. **Ratios:** Hit and fault ratios as percentages rounded to two decimals.
//!
//! Statistics are recomputed on demand; nothing beyond the two counters is
//! stored per run.

use std::fmt;

use serde::Serialize;

/// Aggregate results of a (possibly partial) simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    /// Number of references that missed.
    pub fault_count: usize,
    /// Number of references that hit.
    pub hit_count: usize,
    /// `fault_count + hit_count`.
    pub total_references: usize,
    /// `hit_count / total_references` as a percentage, two decimals; 0 when empty.
    pub hit_ratio_percent: f64,
    /// `fault_count / total_references` as a percentage, two decimals; 0 when empty.
    pub fault_ratio_percent: f64,
}

impl Statistics {
    /// Builds the statistics for the given counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesim_core::stats::Statistics;
    ///
    /// let stats = Statistics::from_counts(12, 8);
    /// assert_eq!(stats.total_references, 20);
    /// assert_eq!(stats.hit_ratio_percent, 40.0);
    ///
    /// let empty = Statistics::from_counts(0, 0);
    /// assert_eq!(empty.hit_ratio_percent, 0.0);
    /// ```
    pub fn from_counts(fault_count: usize, hit_count: usize) -> Self {
        let total_references = fault_count + hit_count;
        Self {
            fault_count,
            hit_count,
            total_references,
            hit_ratio_percent: percent(hit_count, total_references),
            fault_ratio_percent: percent(fault_count, total_references),
        }
    }
}

impl fmt::Display for Statistics {
    /// Renders the statistics block shared by the execution trace and the CLI.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  page_faults            {}", self.fault_count)?;
        writeln!(f, "  page_hits              {}", self.hit_count)?;
        writeln!(f, "  total_references       {}", self.total_references)?;
        writeln!(f, "  hit_ratio              {:.2}%", self.hit_ratio_percent)?;
        write!(f, "  fault_ratio            {:.2}%", self.fault_ratio_percent)
    }
}

/// `part / total` as a percentage rounded to two decimals; 0 if `total` is 0.
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = part as f64 / total as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}
