use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use careforge_core::{DomainError, DomainResult, Entity, entity_id, validate};
use careforge_registry::SupplierId;

use crate::item::InventoryItemId;

entity_id!(
    /// Stock lot identifier.
    pub struct StockId
);

/// One lot of an item: a delivery sitting at a location, with an optional
/// expiry. Quantity is mutated in place by consumption and restock decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStock {
    id: StockId,
    item_id: InventoryItemId,
    supplier_id: SupplierId,
    location: String,
    quantity_on_hand: i64,
    expiration_date: Option<NaiveDate>,
}

impl InventoryStock {
    pub fn new(
        id: StockId,
        item_id: InventoryItemId,
        supplier_id: SupplierId,
        location: String,
        quantity_on_hand: i64,
        expiration_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        validate::non_negative("quantity_on_hand", quantity_on_hand)?;
        Ok(Self {
            id,
            item_id,
            supplier_id,
            location,
            quantity_on_hand,
            expiration_date,
        })
    }

    pub fn id_typed(&self) -> StockId {
        self.id
    }

    pub fn item_id(&self) -> InventoryItemId {
        self.item_id
    }

    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn quantity_on_hand(&self) -> i64 {
        self.quantity_on_hand
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }

    /// The lot with `quantity` removed. A deduction can never drive the lot
    /// negative; the consumption engine sizes it first.
    pub fn deducted(&self, quantity: i64) -> DomainResult<InventoryStock> {
        validate::positive("quantity", quantity)?;
        if quantity > self.quantity_on_hand {
            return Err(DomainError::invariant(format!(
                "deduction {quantity} exceeds lot quantity {}",
                self.quantity_on_hand
            )));
        }
        Ok(InventoryStock {
            quantity_on_hand: self.quantity_on_hand - quantity,
            ..self.clone()
        })
    }

    /// The lot with `quantity` added.
    pub fn restocked(&self, quantity: i64) -> DomainResult<InventoryStock> {
        validate::positive("quantity", quantity)?;
        Ok(InventoryStock {
            quantity_on_hand: self.quantity_on_hand + quantity,
            ..self.clone()
        })
    }
}

impl Entity for InventoryStock {
    type Id = StockId;

    fn id(&self) -> &StockId {
        &self.id
    }
}
