use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};

use crate::department::DepartmentId;

entity_id!(
    /// Nurse identifier.
    pub struct NurseId
);

/// Shift pattern a nurse works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
    Rotating,
}

/// Directory entry: a nurse assigned to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    pub id: NurseId,
    pub full_name: String,
    pub department_id: DepartmentId,
    pub shift: ShiftType,
}

impl Entity for Nurse {
    type Id = NurseId;

    fn id(&self) -> &NurseId {
        &self.id
    }
}
