use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use careforge_core::{DomainError, DomainResult, Entity, entity_id, validate};
use careforge_registry::PatientId;

use crate::room::RoomId;

entity_id!(
    /// Admission identifier.
    pub struct AdmissionId
);

/// A patient's continuous occupancy of a room between admission and
/// discharge. `discharge_date = None` means currently admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    id: AdmissionId,
    patient_id: PatientId,
    room_id: RoomId,
    admission_date: NaiveDate,
    discharge_date: Option<NaiveDate>,
}

impl Admission {
    /// A fresh admission starts out current (no discharge date).
    pub fn new(
        id: AdmissionId,
        patient_id: PatientId,
        room_id: RoomId,
        admission_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            patient_id,
            room_id,
            admission_date,
            discharge_date: None,
        }
    }

    pub fn id_typed(&self) -> AdmissionId {
        self.id
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn admission_date(&self) -> NaiveDate {
        self.admission_date
    }

    pub fn discharge_date(&self) -> Option<NaiveDate> {
        self.discharge_date
    }

    /// Whether the patient is still in the room.
    pub fn is_current(&self) -> bool {
        self.discharge_date.is_none()
    }

    /// Lifecycle step: the same admission, discharged on `date`.
    ///
    /// Discharge is terminal; a second call reports the existing discharge
    /// rather than recording another one.
    pub fn discharged(&self, date: NaiveDate) -> DomainResult<Admission> {
        if let Some(existing) = self.discharge_date {
            return Err(DomainError::terminal(format!(
                "admission already discharged on {existing}"
            )));
        }
        validate::not_before("discharge_date", date, "admission_date", self.admission_date)?;
        Ok(Admission {
            discharge_date: Some(date),
            ..self.clone()
        })
    }
}

impl Entity for Admission {
    type Id = AdmissionId;

    fn id(&self) -> &AdmissionId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careforge_core::EntityId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn admission() -> Admission {
        Admission::new(
            AdmissionId::new(EntityId::new()),
            PatientId::new(EntityId::new()),
            RoomId::new(EntityId::new()),
            date(2026, 5, 1),
        )
    }

    #[test]
    fn new_admission_is_current() {
        assert!(admission().is_current());
    }

    #[test]
    fn discharge_sets_the_date_once() {
        let discharged = admission().discharged(date(2026, 5, 4)).unwrap();
        assert!(!discharged.is_current());
        assert_eq!(discharged.discharge_date(), Some(date(2026, 5, 4)));

        let err = discharged.discharged(date(2026, 5, 5)).unwrap_err();
        assert!(matches!(err, DomainError::AlreadyInTerminalState(_)));
    }

    #[test]
    fn same_day_discharge_is_allowed() {
        assert!(admission().discharged(date(2026, 5, 1)).is_ok());
    }

    #[test]
    fn discharge_cannot_precede_admission() {
        let err = admission().discharged(date(2026, 4, 30)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
