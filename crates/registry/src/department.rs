use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};

entity_id!(
    /// Department identifier.
    pub struct DepartmentId
);

/// Directory entry: a hospital department.
///
/// Departments own no child lifecycle; doctors and nurses merely reference
/// them and may be reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    /// Unique across the directory.
    pub name: String,
    pub floor_number: i32,
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &DepartmentId {
        &self.id
    }
}
