use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};
use careforge_registry::{DoctorId, PatientId};

entity_id!(
    /// Prescription identifier.
    pub struct PrescriptionId
);

/// A medication order issued by a doctor for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub medication_name: String,
    pub dosage: String,
    pub issued_date: NaiveDate,
    /// Always strictly after `issued_date`.
    pub expiry_date: NaiveDate,
}

impl Entity for Prescription {
    type Id = PrescriptionId;

    fn id(&self) -> &PrescriptionId {
        &self.id
    }
}
