//! Reorder and expiry alerting.
//!
//! Pure queries over caller-supplied snapshots; no store port involved.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::item::{InventoryItem, InventoryItemId};
use crate::stock::InventoryStock;

/// Items whose total on-hand quantity has fallen to or below their reorder
/// level. Items with no stock rows count as zero on hand.
pub fn reorder_alerts<'a>(
    items: &'a [InventoryItem],
    stocks_by_item: &HashMap<InventoryItemId, Vec<InventoryStock>>,
) -> Vec<&'a InventoryItem> {
    items
        .iter()
        .filter(|item| {
            let on_hand: i64 = stocks_by_item
                .get(&item.id_typed())
                .map(|lots| lots.iter().map(InventoryStock::quantity_on_hand).sum())
                .unwrap_or(0);
            on_hand <= item.reorder_level()
        })
        .collect()
}

/// Lots expiring within `horizon_days` of `as_of`, already-expired included.
///
/// Lots without an expiration date never alert.
pub fn expiry_alerts<'a>(
    stocks: &'a [InventoryStock],
    as_of: NaiveDate,
    horizon_days: i64,
) -> Vec<&'a InventoryStock> {
    stocks
        .iter()
        .filter(|lot| match lot.expiration_date() {
            Some(expiry) => (expiry - as_of).num_days() <= horizon_days,
            None => false,
        })
        .collect()
}
