//! Stock movement decisions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_core::{Accepted, DomainError, DomainResult, validate};

use crate::events::{InventoryEvent, StockConsumed, StockReceived};
use crate::item::InventoryItemId;
use crate::stock::{InventoryStock, StockId};
use crate::store::StockStore;

/// Command: ConsumeStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumeStock {
    pub item_id: InventoryItemId,
    pub quantity: i64,
    pub occurred_at: NaiveDateTime,
}

/// Command: ReceiveStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveStock {
    pub stock_id: StockId,
    pub quantity: i64,
    pub occurred_at: NaiveDateTime,
}

/// One lot's share of an accepted consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotDeduction {
    pub stock_id: StockId,
    pub quantity: i64,
}

/// Accepted consumption: the updated lots plus the per-lot deductions the
/// caller persists atomically, all of them or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockConsumption {
    pub deductions: Vec<LotDeduction>,
    pub updated_lots: Vec<InventoryStock>,
}

/// Consume `quantity` of an item across its lots, soonest expiry first.
///
/// Lots without an expiry are drained last. If the item's total on-hand
/// quantity cannot cover the request, nothing is proposed and the caller
/// gets `InsufficientStock`.
pub fn consume_stock<S: StockStore>(
    store: &S,
    cmd: ConsumeStock,
) -> DomainResult<Accepted<StockConsumption, InventoryEvent>> {
    validate::positive("quantity", cmd.quantity)?;

    let mut lots = store.lots_for_item(cmd.item_id)?;
    // FIFO by expiry; the store promises this order but re-sorting keeps the
    // decision correct against any adapter.
    lots.sort_by_key(|lot| (lot.expiration_date().is_none(), lot.expiration_date()));

    let available: i64 = lots.iter().map(InventoryStock::quantity_on_hand).sum();
    if available < cmd.quantity {
        return Err(DomainError::insufficient_stock(cmd.quantity, available));
    }

    let mut remaining = cmd.quantity;
    let mut deductions = Vec::new();
    let mut updated_lots = Vec::new();
    for lot in &lots {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(lot.quantity_on_hand());
        if take == 0 {
            continue;
        }
        deductions.push(LotDeduction {
            stock_id: lot.id_typed(),
            quantity: take,
        });
        updated_lots.push(lot.deducted(take)?);
        remaining -= take;
    }

    Ok(Accepted::new(
        StockConsumption {
            deductions: deductions.clone(),
            updated_lots,
        },
        InventoryEvent::StockConsumed(StockConsumed {
            item_id: cmd.item_id,
            deductions,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

/// Add a delivery to an existing lot.
pub fn receive_stock(
    lot: &InventoryStock,
    cmd: ReceiveStock,
) -> DomainResult<Accepted<InventoryStock, InventoryEvent>> {
    if lot.id_typed() != cmd.stock_id {
        return Err(DomainError::invariant("stock_id mismatch"));
    }
    let updated = lot.restocked(cmd.quantity)?;

    Ok(Accepted::new(
        updated,
        InventoryEvent::StockReceived(StockReceived {
            stock_id: cmd.stock_id,
            item_id: lot.item_id(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStockRoom;
    use careforge_core::EntityId;
    use careforge_registry::SupplierId;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock() -> NaiveDateTime {
        date(2026, 2, 1).and_hms_opt(12, 0, 0).unwrap()
    }

    fn lot(
        item_id: InventoryItemId,
        quantity: i64,
        expiry: Option<NaiveDate>,
    ) -> InventoryStock {
        InventoryStock::new(
            StockId::new(EntityId::new()),
            item_id,
            SupplierId::new(EntityId::new()),
            "main-store".to_string(),
            quantity,
            expiry,
        )
        .unwrap()
    }

    fn consume(quantity: i64, item_id: InventoryItemId) -> ConsumeStock {
        ConsumeStock {
            item_id,
            quantity,
            occurred_at: clock(),
        }
    }

    #[test]
    fn consumption_drains_soonest_expiry_first() {
        let item = InventoryItemId::new(EntityId::new());
        let near = lot(item, 5, Some(date(2026, 3, 1)));
        let far = lot(item, 10, Some(date(2026, 4, 1)));

        let room = InMemoryStockRoom::new();
        // Inserted out of order on purpose.
        room.insert_lot(far.clone());
        room.insert_lot(near.clone());

        let accepted = consume_stock(&room, consume(8, item)).unwrap();
        let consumption = accepted.record;

        assert_eq!(consumption.deductions.len(), 2);
        assert_eq!(consumption.deductions[0].stock_id, near.id_typed());
        assert_eq!(consumption.deductions[0].quantity, 5);
        assert_eq!(consumption.deductions[1].stock_id, far.id_typed());
        assert_eq!(consumption.deductions[1].quantity, 3);

        assert_eq!(consumption.updated_lots[0].quantity_on_hand(), 0);
        assert_eq!(consumption.updated_lots[1].quantity_on_hand(), 7);
    }

    #[test]
    fn lots_without_expiry_are_drained_last() {
        let item = InventoryItemId::new(EntityId::new());
        let undated = lot(item, 10, None);
        let dated = lot(item, 4, Some(date(2026, 3, 1)));

        let room = InMemoryStockRoom::new();
        room.insert_lot(undated.clone());
        room.insert_lot(dated.clone());

        let accepted = consume_stock(&room, consume(6, item)).unwrap();
        assert_eq!(accepted.record.deductions[0].stock_id, dated.id_typed());
        assert_eq!(accepted.record.deductions[0].quantity, 4);
        assert_eq!(accepted.record.deductions[1].stock_id, undated.id_typed());
        assert_eq!(accepted.record.deductions[1].quantity, 2);
    }

    #[test]
    fn consumption_is_all_or_nothing() {
        let item = InventoryItemId::new(EntityId::new());
        let room = InMemoryStockRoom::new();
        room.insert_lot(lot(item, 5, Some(date(2026, 3, 1))));
        room.insert_lot(lot(item, 2, None));

        let err = consume_stock(&room, consume(8, item)).unwrap_err();
        match err {
            DomainError::InsufficientStock {
                requested,
                available,
            } => {
                assert_eq!(requested, 8);
                assert_eq!(available, 7);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
    }

    #[test]
    fn consumption_rejects_non_positive_quantities() {
        let item = InventoryItemId::new(EntityId::new());
        let room = InMemoryStockRoom::new();
        room.insert_lot(lot(item, 5, None));

        assert!(consume_stock(&room, consume(0, item)).is_err());
        assert!(consume_stock(&room, consume(-2, item)).is_err());
    }

    #[test]
    fn empty_lots_are_skipped() {
        let item = InventoryItemId::new(EntityId::new());
        let room = InMemoryStockRoom::new();
        room.insert_lot(lot(item, 0, Some(date(2026, 2, 10))));
        room.insert_lot(lot(item, 6, Some(date(2026, 3, 1))));

        let accepted = consume_stock(&room, consume(6, item)).unwrap();
        assert_eq!(accepted.record.deductions.len(), 1);
        assert_eq!(accepted.record.deductions[0].quantity, 6);
    }

    #[test]
    fn receive_stock_tops_up_a_lot() {
        let item = InventoryItemId::new(EntityId::new());
        let existing = lot(item, 3, None);

        let accepted = receive_stock(
            &existing,
            ReceiveStock {
                stock_id: existing.id_typed(),
                quantity: 9,
                occurred_at: clock(),
            },
        )
        .unwrap();
        assert_eq!(accepted.record.quantity_on_hand(), 12);
        assert!(matches!(
            accepted.events[0],
            InventoryEvent::StockReceived(_)
        ));
    }

    #[test]
    fn receive_stock_rejects_id_mismatch() {
        let item = InventoryItemId::new(EntityId::new());
        let existing = lot(item, 3, None);

        let err = receive_stock(
            &existing,
            ReceiveStock {
                stock_id: StockId::new(EntityId::new()),
                quantity: 1,
                occurred_at: clock(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an accepted consumption's deductions sum to the
            /// request and never drive a lot negative; a rejected one
            /// proposes nothing.
            #[test]
            fn all_or_nothing(
                quantities in proptest::collection::vec(0i64..50, 1..8),
                requested in 1i64..400,
            ) {
                let item = InventoryItemId::new(EntityId::new());
                let room = InMemoryStockRoom::new();
                for (i, q) in quantities.iter().enumerate() {
                    let expiry = date(2026, 3, 1) + chrono::Duration::days(i as i64);
                    room.insert_lot(lot(item, *q, Some(expiry)));
                }
                let available: i64 = quantities.iter().sum();

                match consume_stock(&room, consume(requested, item)) {
                    Ok(accepted) => {
                        prop_assert!(available >= requested);
                        let total: i64 =
                            accepted.record.deductions.iter().map(|d| d.quantity).sum();
                        prop_assert_eq!(total, requested);
                        for updated in &accepted.record.updated_lots {
                            prop_assert!(updated.quantity_on_hand() >= 0);
                        }
                    }
                    Err(DomainError::InsufficientStock { .. }) => {
                        prop_assert!(available < requested);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                }
            }
        }
    }
}
