use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use careforge_events::DomainEvent;
use careforge_registry::PatientId;

use crate::admission::AdmissionId;
use crate::room::{RoomId, RoomType};

/// Event: RoomRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRegistered {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
    pub capacity: u32,
    pub occurred_at: NaiveDateTime,
}

/// Event: PatientAdmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientAdmitted {
    pub admission_id: AdmissionId,
    pub patient_id: PatientId,
    pub room_id: RoomId,
    pub admission_date: NaiveDate,
    pub occurred_at: NaiveDateTime,
}

/// Event: PatientDischarged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDischarged {
    pub admission_id: AdmissionId,
    pub patient_id: PatientId,
    pub room_id: RoomId,
    pub discharge_date: NaiveDate,
    pub occurred_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WardEvent {
    RoomRegistered(RoomRegistered),
    PatientAdmitted(PatientAdmitted),
    PatientDischarged(PatientDischarged),
}

impl DomainEvent for WardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WardEvent::RoomRegistered(_) => "wards.room.registered",
            WardEvent::PatientAdmitted(_) => "wards.admission.admitted",
            WardEvent::PatientDischarged(_) => "wards.admission.discharged",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> NaiveDateTime {
        match self {
            WardEvent::RoomRegistered(e) => e.occurred_at,
            WardEvent::PatientAdmitted(e) => e.occurred_at,
            WardEvent::PatientDischarged(e) => e.occurred_at,
        }
    }
}
