//! Store change events
//!
//! Every committed mutation of the asset store is announced as a
//! `StoreEvent` after the write completes. This replaces implicit
//! property observation: consumers that need change notification
//! subscribe to the owning store instead of watching records.

use serde::{Deserialize, Serialize};

use super::ids::AssetId;

/// A committed change to the asset store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    /// An asset was created with a freshly projected sequence
    AssetCreated { asset_id: AssetId },

    /// An asset was edited; its entire sequence was discarded and
    /// recomputed
    AssetUpdated { asset_id: AssetId },

    /// Actual results were merged into one year's record
    AssetReconciled { asset_id: AssetId, year: i16 },

    /// An asset was removed
    AssetDeleted { asset_id: AssetId },
}

impl StoreEvent {
    /// The asset this event concerns.
    #[must_use]
    pub fn asset_id(&self) -> AssetId {
        match self {
            StoreEvent::AssetCreated { asset_id }
            | StoreEvent::AssetUpdated { asset_id }
            | StoreEvent::AssetReconciled { asset_id, .. }
            | StoreEvent::AssetDeleted { asset_id } => *asset_id,
        }
    }

    /// Whether this event invalidates cached projection reads.
    #[must_use]
    pub fn is_projection_change(&self) -> bool {
        matches!(
            self,
            StoreEvent::AssetCreated { .. } | StoreEvent::AssetUpdated { .. }
        )
    }
}
