use serde::{Deserialize, Serialize};

use careforge_core::{DomainResult, Entity, entity_id, validate};

entity_id!(
    /// Inventory item identifier.
    pub struct InventoryItemId
);

/// A stockable supply (catalog entry, not the stock itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: InventoryItemId,
    name: String,
    category: String,
    unit_of_measure: String,
    reorder_level: i64,
}

impl InventoryItem {
    pub fn new(
        id: InventoryItemId,
        name: String,
        category: String,
        unit_of_measure: String,
        reorder_level: i64,
    ) -> DomainResult<Self> {
        validate::non_empty("name", &name)?;
        validate::non_negative("reorder_level", reorder_level)?;
        Ok(Self {
            id,
            name,
            category,
            unit_of_measure,
            reorder_level,
        })
    }

    pub fn id_typed(&self) -> InventoryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_of_measure(&self) -> &str {
        &self.unit_of_measure
    }

    /// Total on-hand at or below this level triggers a reorder alert.
    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &InventoryItemId {
        &self.id
    }
}
