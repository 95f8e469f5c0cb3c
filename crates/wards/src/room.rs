use serde::{Deserialize, Serialize};

use careforge_core::{DomainResult, Entity, entity_id, validate};

entity_id!(
    /// Room identifier.
    pub struct RoomId
);

/// Room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    General,
    Private,
    Icu,
    Emergency,
    Operating,
}

/// A ward room with a fixed bed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    room_number: String,
    room_type: RoomType,
    capacity: u32,
}

impl Room {
    /// Build a room; the number must be non-blank and capacity at least one.
    pub fn new(
        id: RoomId,
        room_number: String,
        room_type: RoomType,
        capacity: u32,
    ) -> DomainResult<Self> {
        validate::non_empty("room_number", &room_number)?;
        validate::positive("capacity", i64::from(capacity))?;
        Ok(Self {
            id,
            room_number,
            room_type,
            capacity,
        })
    }

    pub fn id_typed(&self) -> RoomId {
        self.id
    }

    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> &RoomId {
        &self.id
    }
}
