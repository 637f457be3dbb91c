//! Stochastic terminal-value simulation
//!
//! Generates many independent paths under a log-normal growth model
//! seeded by the asset's expected annual rate, then extracts percentile
//! outcomes from the sorted terminal values. Volatility is a fixed
//! modeling constant, not derived from historical data.
//!
//! All randomness flows through a caller-supplied `Rng`, so runs are
//! reproducible under test; `monte_carlo_simulate` is the seeded
//! convenience driver (rayon-parallel batches with the `parallel`
//! feature).

use rand::{Rng, SeedableRng, rngs::SmallRng};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::SimulationError;
use crate::model::{Asset, SimulationResult};

/// Annualized volatility used for every simulated asset.
pub const VOLATILITY: f64 = 0.15;

/// Default number of simulated paths.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Percentiles reported as best / expected / worst case.
pub const BEST_CASE_PERCENTILE: f64 = 0.95;
pub const EXPECTED_PERCENTILE: f64 = 0.50;
pub const WORST_CASE_PERCENTILE: f64 = 0.05;

/// Inputs for one Monte Carlo run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub initial_amount: f64,
    /// Expected annual rate from the asset's capital-gain model.
    pub annual_rate: f64,
    /// Simulation horizon in years, > 0.
    pub years: u32,
    /// Number of independent paths, > 0.
    pub iterations: usize,
}

impl SimulationParams {
    /// Parameters with the default iteration count.
    #[must_use]
    pub fn new(initial_amount: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            initial_amount,
            annual_rate,
            years,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Override the iteration count.
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Parameters for an asset: its principal and expected annual rate.
    ///
    /// The simulator reads nothing else from the asset — in particular
    /// it neither consumes nor produces yearly performance records.
    #[must_use]
    pub fn for_asset(asset: &Asset, years: u32) -> Self {
        Self::new(
            asset.initial_amount,
            asset.returns.capital_gain.annual_rate,
            years,
        )
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if self.years == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "years",
                value: 0,
            });
        }
        if self.iterations == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "iterations",
                value: 0,
            });
        }
        if !self.initial_amount.is_finite() {
            return Err(SimulationError::NonFiniteInput {
                name: "initial_amount",
                value: self.initial_amount,
            });
        }
        if !self.annual_rate.is_finite() {
            return Err(SimulationError::NonFiniteInput {
                name: "annual_rate",
                value: self.annual_rate,
            });
        }
        Ok(())
    }
}

/// Draw one standard-normal variate via the Box-Muller transform.
///
/// Uses two independent uniform draws; the first is shifted into (0, 1]
/// so the log never sees zero.
pub fn box_muller<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Generate a single path: principal followed by one value per year.
fn generate_path<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> Vec<f64> {
    let drift = params.annual_rate - 0.5 * VOLATILITY * VOLATILITY;
    let mut path = Vec::with_capacity(params.years as usize + 1);
    let mut value = params.initial_amount;
    path.push(value);

    for _ in 0..params.years {
        let z = box_muller(rng);
        let random_return = (drift + VOLATILITY * z).exp() - 1.0;
        value *= 1.0 + random_return;
        path.push(value);
    }

    path
}

/// Index-based percentile from an ascending-sorted slice.
///
/// `floor(len * p)`, clamped to the last index so small sample counts
/// cannot read past the end.
#[must_use]
pub fn percentile_at(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let index = ((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1);
    sorted[index]
}

fn summarize(paths: Vec<Vec<f64>>) -> SimulationResult {
    let mut finals: Vec<f64> = paths.iter().filter_map(|p| p.last().copied()).collect();
    finals.sort_by(f64::total_cmp);

    SimulationResult {
        best_case: percentile_at(&finals, BEST_CASE_PERCENTILE),
        expected: percentile_at(&finals, EXPECTED_PERCENTILE),
        worst_case: percentile_at(&finals, WORST_CASE_PERCENTILE),
        paths,
    }
}

/// Run the simulation with a caller-supplied random source.
///
/// Deterministic for a given `rng` state; re-runs are independent and
/// idempotent.
pub fn simulate_terminal_values<R: Rng + ?Sized>(
    params: &SimulationParams,
    rng: &mut R,
) -> Result<SimulationResult, SimulationError> {
    params.validate()?;

    let paths: Vec<Vec<f64>> = (0..params.iterations)
        .map(|_| generate_path(params, rng))
        .collect();

    Ok(summarize(paths))
}

/// Seeded convenience driver.
///
/// Paths are generated in batches, each batch with its own `SmallRng`
/// derived from `seed` and the batch index, so results are identical
/// with and without the `parallel` feature.
pub fn monte_carlo_simulate(
    params: &SimulationParams,
    seed: u64,
) -> Result<SimulationResult, SimulationError> {
    const MAX_BATCH_SIZE: usize = 100;

    params.validate()?;

    let num_batches = params.iterations.div_ceil(MAX_BATCH_SIZE);
    let batch = |i: usize| {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        let batch_size = if i == num_batches - 1 {
            params.iterations - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };
        (0..batch_size)
            .map(|_| generate_path(params, &mut rng))
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let paths: Vec<Vec<f64>> = (0..num_batches).into_par_iter().flat_map(batch).collect();

    #[cfg(not(feature = "parallel"))]
    let paths: Vec<Vec<f64>> = (0..num_batches).flat_map(batch).collect();

    Ok(summarize(paths))
}
