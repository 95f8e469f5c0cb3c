use careforge_core::DomainResult;

use crate::item::InventoryItemId;
use crate::stock::InventoryStock;

/// Store port: read-only stock lookups the consumption engine depends on.
///
/// Implemented by the storage adapter; [`crate::memory::InMemoryStockRoom`]
/// backs tests. Lots should come back ordered by expiration date ascending
/// with no-expiry lots last; the engine re-sorts defensively, so the contract
/// is about efficiency, not correctness.
pub trait StockStore {
    fn lots_for_item(&self, item_id: InventoryItemId) -> DomainResult<Vec<InventoryStock>>;
}

impl<S: StockStore + ?Sized> StockStore for &S {
    fn lots_for_item(&self, item_id: InventoryItemId) -> DomainResult<Vec<InventoryStock>> {
        (**self).lots_for_item(item_id)
    }
}
