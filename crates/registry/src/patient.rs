use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use careforge_core::{Entity, entity_id};

use crate::contact::ContactInfo;

entity_id!(
    /// Patient identifier.
    pub struct PatientId
);

/// Administrative gender marker as captured at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Directory entry: a registered patient.
///
/// The patient is the aggregation root for admissions, appointments,
/// prescriptions and medical records, but those live in their own subsystems
/// and reference back by `PatientId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    /// National identity number; unique across the directory when present.
    pub national_id: Option<String>,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<Gender>,
    pub contact: ContactInfo,
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> &PatientId {
        &self.id
    }
}
