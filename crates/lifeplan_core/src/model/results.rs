//! Monte Carlo simulation results
//!
//! Ephemeral output of a stochastic run; never persisted.

use serde::{Deserialize, Serialize};

/// Percentile summary plus the full set of generated paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// 95th percentile terminal value.
    pub best_case: f64,
    /// 50th percentile terminal value.
    pub expected: f64,
    /// 5th percentile terminal value.
    pub worst_case: f64,
    /// Every generated path; each starts with the principal and has one
    /// entry per simulated year after that.
    pub paths: Vec<Vec<f64>>,
}

impl SimulationResult {
    /// Terminal value of every path, in generation order.
    #[must_use]
    pub fn terminal_values(&self) -> Vec<f64> {
        self.paths
            .iter()
            .filter_map(|p| p.last().copied())
            .collect()
    }
}
