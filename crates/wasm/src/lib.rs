//! WebAssembly bridge for browser renderers.
//!
//! Wraps [`Simulator`] in a `wasm-bindgen` class. Structured results (step
//! history, statistics, comparisons) cross the boundary as JSON strings so the
//! JavaScript side can `JSON.parse` them without generated bindings for every
//! engine type. Engine errors surface as thrown `Error` objects.

use pagesim_core::sim::compare;
use pagesim_core::{ReferenceSequence, SimConfig, Simulator};
use wasm_bindgen::prelude::*;

/// One simulation run, driven from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasmSimulation {
    inner: Simulator,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Creates a run from a reference string, frame count and algorithm name.
    ///
    /// # Errors
    ///
    /// Throws if a reference token is not an integer, `frames` is zero, or the
    /// algorithm name is not one of `fifo`, `lru`, `optimal`, `clock`.
    #[wasm_bindgen(constructor)]
    pub fn new(references: &str, frames: usize, algorithm: &str) -> Result<Self, JsError> {
        let inner = Simulator::from_input(&references.into(), frames, algorithm)?;
        Ok(Self { inner })
    }

    /// Creates a run from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Throws if the document does not deserialize or fails validation.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Self, JsError> {
        let config = SimConfig::from_json(json)?;
        let inner = Simulator::from_config(&config)?;
        Ok(Self { inner })
    }

    /// Runs to completion and returns the step history as a JSON array.
    ///
    /// Calling this again on a finished run replays it from the start.
    ///
    /// # Errors
    ///
    /// Throws if the history cannot be encoded.
    pub fn simulate(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.inner.simulate())?)
    }

    /// Processes one reference and returns its step record as JSON, or
    /// `undefined` once every reference has been processed.
    ///
    /// # Errors
    ///
    /// Throws if the record cannot be encoded.
    pub fn step(&mut self) -> Result<Option<String>, JsError> {
        Ok(self.inner.step().map(serde_json::to_string).transpose()?)
    }

    /// Rewinds to the first reference.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Summary statistics of the steps processed so far, as JSON.
    ///
    /// # Errors
    ///
    /// Throws if the statistics cannot be encoded.
    pub fn statistics(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.statistics())?)
    }

    /// Human-readable execution trace.
    pub fn trace(&self) -> String {
        self.inner.execution_trace()
    }

    /// Display name of the simulated algorithm.
    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String {
        self.inner.algorithm().label().to_string()
    }

    /// Number of physical frames.
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> usize {
        self.inner.frame_count()
    }

    /// Parsed reference string.
    #[wasm_bindgen(getter)]
    pub fn references(&self) -> Vec<i64> {
        self.inner.references().pages().to_vec()
    }

    /// Returns `true` once every reference has been processed.
    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }
}

/// Runs every algorithm on `references` and returns the comparison as JSON.
///
/// # Errors
///
/// Throws if the references do not parse or `frames` is zero.
#[wasm_bindgen(js_name = compareAlgorithms)]
pub fn compare_algorithms(references: &str, frames: usize) -> Result<String, JsError> {
    let references = ReferenceSequence::parse(references)?;
    Ok(serde_json::to_string(&compare(&references, frames)?)?)
}
