//! Life-plan asset projection library
//!
//! This crate is the projection engine behind a multi-year personal
//! finance planner. Given an asset's principal, date range, and return
//! model it deterministically projects year-by-year valuation, capital
//! gains, and dividend cash flows across the asset's lifetime, merges
//! user-entered actual results back into individual years, and runs a
//! log-normal Monte Carlo simulation of terminal value. It supports:
//! - Period-compounded capital gains (yearly, monthly, daily)
//! - Scheduled dividend payments (yearly, quarterly, monthly) with
//!   optional reinvestment
//! - Full-horizon projection with an exact year-to-year chain invariant
//! - Reconciliation of projected years against actual results
//! - Seeded, reproducible Monte Carlo percentile outcomes
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic asset setup:
//!
//! ```ignore
//! use lifeplan_core::config::AssetBuilder;
//! use lifeplan_core::model::{CompoundingFrequency, PaymentFrequency};
//! use lifeplan_core::store::AssetStore;
//!
//! let mut store = AssetStore::new();
//! let id = store.create(
//!     AssetBuilder::new("Index fund")
//!         .category("Investments")
//!         .amount(100_000.0)
//!         .start(2024, 1, 1)
//!         .capital_gain(0.05, CompoundingFrequency::Yearly)
//!         .income_gain(0.02, PaymentFrequency::Quarterly, true)
//!         .build(),
//! )?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dividends;
pub mod error;
pub mod growth;
pub mod monte_carlo;
pub mod projection;
pub mod reconcile;
pub mod store;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AssetBuilder, AssetDefinition};
pub use store::AssetStore;
