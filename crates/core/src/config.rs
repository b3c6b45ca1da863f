//! Configuration for a simulation run.
//!
//! This module defines the parameters that select and size a run. It provides:
//! 1. **Defaults:** Baseline frame count and random-generation parameters.
//! 2. **Algorithm selector:** The four supported replacement policies.
//! 3. **Run configuration:** [`SimConfig`], deserializable from JSON so front ends
//!    (CLI config files, the wasm bridge) share one format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;
use crate::reference::ReferenceInput;

/// Default configuration constants.
pub mod defaults {
    /// Frame count used when a configuration does not name one.
    pub const FRAMES: usize = 3;

    /// Smallest usable frame count.
    pub const MIN_FRAMES: usize = 1;

    /// Number of references drawn by the random generator when unspecified.
    pub const RANDOM_LENGTH: usize = 20;

    /// Pages are drawn from `0..RANDOM_PAGE_RANGE` by the random generator.
    pub const RANDOM_PAGE_RANGE: u32 = 10;

    /// Seed for the random generator (any non-zero value).
    pub const RANDOM_SEED: u64 = 123_456_789;
}

/// Page-replacement algorithm selector.
///
/// Parsing is case-insensitive; serialized names are lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-In, First-Out: evicts the page loaded earliest.
    #[default]
    #[serde(alias = "FIFO", alias = "Fifo")]
    Fifo,
    /// Least Recently Used: evicts the page accessed least recently.
    #[serde(alias = "LRU", alias = "Lru")]
    Lru,
    /// Belady's optimal (MIN): evicts the page used furthest in the future.
    #[serde(alias = "OPTIMAL", alias = "Optimal")]
    Optimal,
    /// Clock (second chance): FIFO ring with a per-page reference bit.
    #[serde(alias = "CLOCK", alias = "Clock")]
    Clock,
}

impl Algorithm {
    /// Every supported algorithm, in presentation order.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::Lru, Self::Optimal, Self::Clock];

    /// Lower-case selector accepted by [`FromStr`].
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
            Self::Optimal => "optimal",
            Self::Clock => "clock",
        }
    }

    /// Display label used in traces and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Optimal => "Optimal",
            Self::Clock => "Clock",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|alg| alg.selector().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(wanted.to_string()))
    }
}

/// Complete description of one simulation run.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Algorithm, SimConfig};
///
/// let json = r#"{
///     "frames": 4,
///     "algorithm": "clock",
///     "references": "1 2 3 4 1 2 5"
/// }"#;
///
/// let config = SimConfig::from_json(json).unwrap();
/// assert_eq!(config.frames, 4);
/// assert_eq!(config.algorithm, Algorithm::Clock);
/// ```
///
/// Missing fields fall back to the defaults:
///
/// ```
/// use pagesim_core::config::{Algorithm, SimConfig};
///
/// let config = SimConfig::from_json(r#"{ "references": [7, 0, 1] }"#).unwrap();
/// assert_eq!(config.frames, 3);
/// assert_eq!(config.algorithm, Algorithm::Fifo);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of physical frames.
    #[serde(default = "SimConfig::default_frames")]
    pub frames: usize,

    /// Replacement policy to simulate.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Reference string, as text or as an array.
    #[serde(default)]
    pub references: ReferenceInput,
}

impl SimConfig {
    /// Returns the default frame count.
    const fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Deserializes a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks the parameters that cannot be expressed in the type system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_frames(self.frames)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: defaults::FRAMES,
            algorithm: Algorithm::default(),
            references: ReferenceInput::default(),
        }
    }
}

/// Rejects frame counts below [`defaults::MIN_FRAMES`].
pub fn validate_frames(frames: usize) -> Result<(), ConfigError> {
    if frames < defaults::MIN_FRAMES {
        return Err(ConfigError::InvalidFrameCount(frames));
    }
    Ok(())
}
