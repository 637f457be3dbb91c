//! Unique identifiers for plan entities
//!
//! Each entity type gets its own ID newtype to prevent mixing up
//! different kinds of identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for an Asset within a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u32);
