//! Asset store
//!
//! Plain records held in an explicit ordered collection, keyed by id.
//! Mutation happens only through the documented operations below —
//! create, update, reconcile, remove — and each committed write is
//! announced to subscribers as an explicit [`StoreEvent`] rather than
//! through implicit property observation.
//!
//! Any edit touching the principal, return model, or date range fully
//! discards and recomputes the projection sequence. This is a
//! deliberate consistency rule, not an optimization target: an edited
//! asset never mixes old and new projection math, so there is no
//! incremental-patch path. Reconciliation is the one in-place patch,
//! and it must not run concurrently with a recomputation of the same
//! asset; callers share the store under a single writer.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::AssetDefinition;
use crate::error::StoreError;
use crate::model::{ActualPerformance, Asset, AssetId, StoreEvent};
use crate::projection::project_lifetime;
use crate::reconcile::reconcile_actuals;

type Listener = Box<dyn Fn(&StoreEvent)>;

/// Ordered collection of assets with post-commit change notification
#[derive(Default)]
pub struct AssetStore {
    assets: BTreeMap<AssetId, Asset>,
    next_id: u32,
    listeners: Vec<Listener>,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked after every committed write.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: StoreEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Create an asset with a freshly projected sequence.
    pub fn create(&mut self, def: AssetDefinition) -> Result<AssetId, StoreError> {
        let yearly_performance = project_lifetime(
            def.initial_amount,
            def.start_date,
            def.maturity_date,
            &def.returns,
        )?;

        let asset_id = AssetId(self.next_id);
        self.next_id += 1;

        self.assets.insert(
            asset_id,
            Asset {
                asset_id,
                name: def.name,
                category: def.category,
                initial_amount: def.initial_amount,
                start_date: def.start_date,
                maturity_date: def.maturity_date,
                returns: def.returns,
                yearly_performance,
            },
        );

        self.emit(StoreEvent::AssetCreated { asset_id });
        Ok(asset_id)
    }

    /// Replace an asset's definition, discarding and recomputing its
    /// entire projection sequence.
    ///
    /// Validation runs before anything is touched, so a failed update
    /// leaves the stored asset exactly as it was.
    pub fn update(&mut self, asset_id: AssetId, def: AssetDefinition) -> Result<(), StoreError> {
        if !self.assets.contains_key(&asset_id) {
            return Err(StoreError::AssetNotFound(asset_id));
        }

        let yearly_performance = project_lifetime(
            def.initial_amount,
            def.start_date,
            def.maturity_date,
            &def.returns,
        )?;

        self.assets.insert(
            asset_id,
            Asset {
                asset_id,
                name: def.name,
                category: def.category,
                initial_amount: def.initial_amount,
                start_date: def.start_date,
                maturity_date: def.maturity_date,
                returns: def.returns,
                yearly_performance,
            },
        );

        self.emit(StoreEvent::AssetUpdated { asset_id });
        Ok(())
    }

    /// Merge actual results into one year of an asset's sequence.
    ///
    /// A year with no record is a silent no-op (no event emitted); a
    /// missing asset is an error.
    pub fn reconcile(
        &mut self,
        asset_id: AssetId,
        year: i16,
        actuals: ActualPerformance,
    ) -> Result<(), StoreError> {
        let asset = self
            .assets
            .get_mut(&asset_id)
            .ok_or(StoreError::AssetNotFound(asset_id))?;

        if reconcile_actuals(asset, year, actuals) {
            self.emit(StoreEvent::AssetReconciled { asset_id, year });
        }
        Ok(())
    }

    /// Remove an asset, returning it if it existed.
    pub fn remove(&mut self, asset_id: AssetId) -> Option<Asset> {
        let removed = self.assets.remove(&asset_id);
        if removed.is_some() {
            self.emit(StoreEvent::AssetDeleted { asset_id });
        }
        removed
    }

    /// Restore a previously persisted asset without re-projection.
    ///
    /// The rehydrated sequence is trusted as computed; loading never
    /// silently triggers a recompute, and no change event is emitted.
    pub fn insert_rehydrated(&mut self, asset: Asset) {
        self.next_id = self.next_id.max(asset.asset_id.0 + 1);
        self.assets.insert(asset.asset_id, asset);
    }

    #[must_use]
    pub fn get(&self, asset_id: AssetId) -> Option<&Asset> {
        self.assets.get(&asset_id)
    }

    /// Assets in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetStore")
            .field("assets", &self.assets)
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
