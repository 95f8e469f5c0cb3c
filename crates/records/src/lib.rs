//! `careforge-records` — the clinical paper trail.
//!
//! Prescriptions and medical records. Medical records are append-only: the
//! engine defines no update or delete decision for them, and prescriptions
//! carry their validity window at issue time.

pub mod engine;
pub mod events;
pub mod medical_record;
pub mod memory;
pub mod prescription;
pub mod store;

pub use engine::{IssuePrescription, OpenMedicalRecord, issue_prescription, open_medical_record};
pub use events::ClinicalEvent;
pub use medical_record::{MedicalRecord, MedicalRecordId};
pub use memory::InMemoryClinicalIndex;
pub use prescription::{Prescription, PrescriptionId};
pub use store::ClinicalStore;
