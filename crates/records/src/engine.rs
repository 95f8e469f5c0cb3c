//! Clinical entry decisions.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use careforge_core::{Accepted, DomainError, DomainResult, validate};
use careforge_registry::{DoctorId, PatientId};

use crate::events::{ClinicalEvent, MedicalRecordOpened, PrescriptionIssued};
use crate::medical_record::{MedicalRecord, MedicalRecordId};
use crate::prescription::{Prescription, PrescriptionId};
use crate::store::ClinicalStore;

/// Command: IssuePrescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePrescription {
    pub prescription_id: PrescriptionId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub medication_name: String,
    pub dosage: String,
    pub issued_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub occurred_at: NaiveDateTime,
}

/// Command: OpenMedicalRecord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenMedicalRecord {
    pub record_id: MedicalRecordId,
    pub patient_id: PatientId,
    pub diagnosis: String,
    pub notes: String,
    pub occurred_at: NaiveDateTime,
}

pub fn issue_prescription<S: ClinicalStore>(
    store: &S,
    cmd: IssuePrescription,
) -> DomainResult<Accepted<Prescription, ClinicalEvent>> {
    validate::non_empty("medication_name", &cmd.medication_name)?;
    validate::non_empty("dosage", &cmd.dosage)?;
    validate::strictly_after(
        "expiry_date",
        cmd.expiry_date,
        "issued_date",
        cmd.issued_date,
    )?;

    if !store.patient_exists(cmd.patient_id)? {
        return Err(DomainError::not_found());
    }
    if !store.doctor_exists(cmd.doctor_id)? {
        return Err(DomainError::not_found());
    }

    let prescription = Prescription {
        id: cmd.prescription_id,
        patient_id: cmd.patient_id,
        doctor_id: cmd.doctor_id,
        medication_name: cmd.medication_name.clone(),
        dosage: cmd.dosage,
        issued_date: cmd.issued_date,
        expiry_date: cmd.expiry_date,
    };

    Ok(Accepted::new(
        prescription,
        ClinicalEvent::PrescriptionIssued(PrescriptionIssued {
            prescription_id: cmd.prescription_id,
            patient_id: cmd.patient_id,
            doctor_id: cmd.doctor_id,
            medication_name: cmd.medication_name,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

pub fn open_medical_record<S: ClinicalStore>(
    store: &S,
    cmd: OpenMedicalRecord,
) -> DomainResult<Accepted<MedicalRecord, ClinicalEvent>> {
    validate::non_empty("diagnosis", &cmd.diagnosis)?;
    if !store.patient_exists(cmd.patient_id)? {
        return Err(DomainError::not_found());
    }

    let record = MedicalRecord {
        id: cmd.record_id,
        patient_id: cmd.patient_id,
        diagnosis: cmd.diagnosis,
        notes: cmd.notes,
        created_at: cmd.occurred_at,
    };

    Ok(Accepted::new(
        record,
        ClinicalEvent::MedicalRecordOpened(MedicalRecordOpened {
            record_id: cmd.record_id,
            patient_id: cmd.patient_id,
            occurred_at: cmd.occurred_at,
        }),
    ))
}
