use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_events::DomainEvent;

use crate::engine::LotDeduction;
use crate::item::InventoryItemId;
use crate::stock::StockId;

/// Event: StockConsumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockConsumed {
    pub item_id: InventoryItemId,
    /// Per-lot shares, soonest expiry first; they sum to the requested
    /// quantity.
    pub deductions: Vec<LotDeduction>,
    pub occurred_at: NaiveDateTime,
}

/// Event: StockReceived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReceived {
    pub stock_id: StockId,
    pub item_id: InventoryItemId,
    pub quantity: i64,
    pub occurred_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    StockConsumed(StockConsumed),
    StockReceived(StockReceived),
}

impl DomainEvent for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::StockConsumed(_) => "inventory.stock.consumed",
            InventoryEvent::StockReceived(_) => "inventory.stock.received",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> NaiveDateTime {
        match self {
            InventoryEvent::StockConsumed(e) => e.occurred_at,
            InventoryEvent::StockReceived(e) => e.occurred_at,
        }
    }
}
