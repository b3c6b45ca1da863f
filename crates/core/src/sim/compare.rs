//! Cross-algorithm comparison and fault curves.
//!
//! Two experiments built on top of the step processor:
//! 1. **Comparison:** Every algorithm on the same reference string and frame count.
//! 2. **Fault curve:** One algorithm across a range of frame counts, exposing
//!    Belady's anomaly wherever the fault count rises with more frames.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::simulator::Simulator;
use crate::common::error::Result;
use crate::config::{self, Algorithm};
use crate::reference::ReferenceSequence;
use crate::stats::Statistics;

/// Result of one algorithm in a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// The algorithm simulated.
    pub algorithm: Algorithm,
    /// Its statistics over the whole reference string.
    pub statistics: Statistics,
}

/// All algorithms run on one reference string and frame count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Frame count used for every run.
    pub frames: usize,
    /// Length of the reference string.
    pub references: usize,
    /// One row per algorithm, in [`Algorithm::ALL`] order.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Statistics of `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> Option<&Statistics> {
        self.rows
            .iter()
            .find(|row| row.algorithm == algorithm)
            .map(|row| &row.statistics)
    }

    /// Row with the fewest faults; ties go to the earlier algorithm.
    pub fn best(&self) -> Option<&ComparisonRow> {
        self.rows.iter().reduce(|best, row| {
            if row.statistics.fault_count < best.statistics.fault_count {
                row
            } else {
                best
            }
        })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "frames: {}  references: {}",
            self.frames, self.references
        )?;
        writeln!(
            f,
            "  {:<10} {:>8} {:>8} {:>10}",
            "algorithm", "faults", "hits", "hit_ratio"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:<10} {:>8} {:>8} {:>9.2}%",
                row.algorithm.label(),
                row.statistics.fault_count,
                row.statistics.hit_count,
                row.statistics.hit_ratio_percent
            )?;
        }
        Ok(())
    }
}

/// Runs every algorithm on `references` with `frames` frames.
///
/// # Errors
///
/// Returns an invalid-configuration error if `frames` is zero.
///
/// # Examples
///
/// ```
/// use pagesim_core::sim::compare;
/// use pagesim_core::{Algorithm, ReferenceSequence};
///
/// let refs: ReferenceSequence = "7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1".parse().unwrap();
/// let table = compare(&refs, 3).unwrap();
/// assert_eq!(table.get(Algorithm::Optimal).unwrap().fault_count, 9);
/// assert_eq!(table.best().unwrap().algorithm, Algorithm::Optimal);
/// ```
pub fn compare(references: &ReferenceSequence, frames: usize) -> Result<Comparison> {
    config::validate_frames(frames)?;
    let rows = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            run(references, frames, algorithm).map(|statistics| ComparisonRow {
                algorithm,
                statistics,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Comparison {
        frames,
        references: references.len(),
        rows,
    })
}

/// Fault count of one algorithm at one frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaultPoint {
    /// Frame count.
    pub frames: usize,
    /// Faults over the whole reference string.
    pub faults: usize,
}

/// Fault counts of one algorithm across increasing frame counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultCurve {
    /// The algorithm simulated.
    pub algorithm: Algorithm,
    /// One point per frame count, ascending.
    pub points: Vec<FaultPoint>,
}

impl FaultCurve {
    /// Frame counts that fault more than the next smaller frame count.
    ///
    /// Non-empty only for policies subject to Belady's anomaly.
    pub fn anomalies(&self) -> Vec<usize> {
        self.points
            .windows(2)
            .filter(|pair| pair[1].faults > pair[0].faults)
            .map(|pair| pair[1].frames)
            .collect()
    }
}

impl fmt::Display for FaultCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "algorithm: {}", self.algorithm)?;
        writeln!(f, "  {:>6} {:>8}", "frames", "faults")?;
        for point in &self.points {
            writeln!(f, "  {:>6} {:>8}", point.frames, point.faults)?;
        }
        let anomalies = self.anomalies();
        if !anomalies.is_empty() {
            writeln!(f, "  belady anomaly at frames: {anomalies:?}")?;
        }
        Ok(())
    }
}

/// Simulates `algorithm` on `references` for every frame count in `frames`.
///
/// # Errors
///
/// Returns an invalid-configuration error if the range includes zero.
///
/// # Examples
///
/// ```
/// use pagesim_core::sim::fault_curve;
/// use pagesim_core::{Algorithm, ReferenceSequence};
///
/// let refs: ReferenceSequence = "1,2,3,4,1,2,5,1,2,3,4,5".parse().unwrap();
/// let curve = fault_curve(&refs, Algorithm::Fifo, 1..=5).unwrap();
/// assert_eq!(curve.anomalies(), vec![4]);
/// ```
pub fn fault_curve(
    references: &ReferenceSequence,
    algorithm: Algorithm,
    frames: RangeInclusive<usize>,
) -> Result<FaultCurve> {
    let points = frames
        .map(|count| {
            run(references, count, algorithm).map(|statistics| FaultPoint {
                frames: count,
                faults: statistics.fault_count,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FaultCurve { algorithm, points })
}

/// Runs one complete simulation and returns its statistics.
fn run(references: &ReferenceSequence, frames: usize, algorithm: Algorithm) -> Result<Statistics> {
    let mut sim = Simulator::new(references.clone(), frames, algorithm)?;
    let _ = sim.simulate();
    Ok(sim.statistics())
}
