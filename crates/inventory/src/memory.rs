//! In-memory stock room.
//!
//! Intended for tests/dev and as a template for storage adapters. Not
//! optimized for performance.

use std::sync::RwLock;

use careforge_core::{DomainError, DomainResult};

use crate::item::InventoryItemId;
use crate::stock::InventoryStock;
use crate::store::StockStore;

/// In-memory [`StockStore`].
#[derive(Debug, Default)]
pub struct InMemoryStockRoom {
    inner: RwLock<Vec<InventoryStock>>,
}

impl InMemoryStockRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new or updated lot; an existing entry with the same id is
    /// replaced (this is how accepted deductions land).
    pub fn insert_lot(&self, lot: InventoryStock) {
        if let Ok(mut lots) = self.inner.write() {
            lots.retain(|l| l.id_typed() != lot.id_typed());
            lots.push(lot);
        }
    }
}

impl StockStore for InMemoryStockRoom {
    fn lots_for_item(&self, item_id: InventoryItemId) -> DomainResult<Vec<InventoryStock>> {
        let lots = self
            .inner
            .read()
            .map_err(|_| DomainError::invariant("stock room lock poisoned"))?;
        let mut matching: Vec<InventoryStock> = lots
            .iter()
            .filter(|l| l.item_id() == item_id)
            .cloned()
            .collect();
        // Expiry-ascending, no-expiry lots last, per the port contract.
        matching.sort_by_key(|l| (l.expiration_date().is_none(), l.expiration_date()));
        Ok(matching)
    }
}
