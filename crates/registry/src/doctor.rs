use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};

use crate::department::DepartmentId;

entity_id!(
    /// Doctor identifier.
    pub struct DoctorId
);

/// Directory entry: a practicing doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub full_name: String,
    pub specialty: String,
    /// Medical license number; unique across the directory.
    pub license_number: String,
    /// Doctors may be unassigned and can be moved between departments.
    pub department_id: Option<DepartmentId>,
    pub hire_date: NaiveDate,
}

impl Entity for Doctor {
    type Id = DoctorId;

    fn id(&self) -> &DoctorId {
        &self.id
    }
}
