use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};

use crate::contact::ContactInfo;

entity_id!(
    /// Supplier identifier.
    pub struct SupplierId
);

/// Directory entry: an inventory supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    /// Unique across the directory.
    pub name: String,
    pub contact: ContactInfo,
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &SupplierId {
        &self.id
    }
}
