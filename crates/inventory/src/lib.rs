//! `careforge-inventory` — medical supplies.
//!
//! Stock is held in lots (one row per delivery, with an optional expiry);
//! consumption drains lots soonest-expiry-first and is all-or-nothing so the
//! caller can commit the proposed deductions atomically. Reorder and expiry
//! alerting are pure queries over supplied data.

pub mod alerts;
pub mod engine;
pub mod events;
pub mod item;
pub mod memory;
pub mod stock;
pub mod store;

pub use alerts::{expiry_alerts, reorder_alerts};
pub use engine::{ConsumeStock, LotDeduction, ReceiveStock, StockConsumption, consume_stock, receive_stock};
pub use events::InventoryEvent;
pub use item::{InventoryItem, InventoryItemId};
pub use memory::InMemoryStockRoom;
pub use stock::{InventoryStock, StockId};
pub use store::StockStore;
