use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_events::DomainEvent;
use careforge_registry::{DoctorId, PatientId};

use crate::medical_record::MedicalRecordId;
use crate::prescription::PrescriptionId;

/// Event: PrescriptionIssued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionIssued {
    pub prescription_id: PrescriptionId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub medication_name: String,
    pub occurred_at: NaiveDateTime,
}

/// Event: MedicalRecordOpened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecordOpened {
    pub record_id: MedicalRecordId,
    pub patient_id: PatientId,
    pub occurred_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClinicalEvent {
    PrescriptionIssued(PrescriptionIssued),
    MedicalRecordOpened(MedicalRecordOpened),
}

impl DomainEvent for ClinicalEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ClinicalEvent::PrescriptionIssued(_) => "records.prescription.issued",
            ClinicalEvent::MedicalRecordOpened(_) => "records.medical_record.opened",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> NaiveDateTime {
        match self {
            ClinicalEvent::PrescriptionIssued(e) => e.occurred_at,
            ClinicalEvent::MedicalRecordOpened(e) => e.occurred_at,
        }
    }
}
