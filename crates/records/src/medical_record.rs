use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};
use careforge_registry::PatientId;

entity_id!(
    /// Medical record identifier.
    pub struct MedicalRecordId
);

/// One entry in a patient's chart.
///
/// Immutable after creation: corrections are new entries, never edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: MedicalRecordId,
    pub patient_id: PatientId,
    pub diagnosis: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

impl Entity for MedicalRecord {
    type Id = MedicalRecordId;

    fn id(&self) -> &MedicalRecordId {
        &self.id
    }
}
