//! Configuration builders
//!
//! Fluent DSL for assembling asset payloads ergonomically.

mod asset_builder;

pub use asset_builder::{AssetBuilder, AssetDefinition};
