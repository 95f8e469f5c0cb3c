use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_core::{DomainError, DomainResult, Entity, entity_id};
use careforge_registry::{DoctorId, PatientId};

entity_id!(
    /// Appointment identifier.
    pub struct AppointmentId
);

/// Appointment status lifecycle.
///
/// `Scheduled → Confirmed → Completed`, with `Cancelled` and `NoShow` reachable
/// from either non-terminal state. `Completed`, `Cancelled` and `NoShow` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::NoShow)
    }

    /// Whether a transition from `self` to `to` is allowed.
    ///
    /// Cancellation is always permitted before completion; completion requires
    /// prior confirmation.
    pub fn can_transition_to(self, to: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, to),
            (Scheduled, Confirmed)
                | (Scheduled, Cancelled)
                | (Scheduled, NoShow)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
        )
    }

    /// Whether the appointment still occupies its calendar slot.
    ///
    /// Only cancellation releases the slot.
    pub fn still_booked(self) -> bool {
        self != Self::Cancelled
    }
}

/// A doctor/patient appointment at an exact instant.
///
/// There is no duration model: two appointments conflict only when their
/// `scheduled_at` instants are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    scheduled_at: NaiveDateTime,
    status: AppointmentStatus,
}

impl Appointment {
    /// A freshly booked appointment starts out `Scheduled`.
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            scheduled_at,
            status: AppointmentStatus::Scheduled,
        }
    }

    pub fn id_typed(&self) -> AppointmentId {
        self.id
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Status-machine step: the same appointment in its new state.
    pub fn with_status(&self, to: AppointmentStatus) -> DomainResult<Appointment> {
        if !self.status.can_transition_to(to) {
            return Err(DomainError::terminal(format!(
                "appointment cannot move from {:?} to {to:?}",
                self.status
            )));
        }
        Ok(Appointment {
            status: to,
            ..self.clone()
        })
    }
}

impl Entity for Appointment {
    type Id = AppointmentId;

    fn id(&self) -> &AppointmentId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careforge_core::EntityId;
    use chrono::NaiveDate;

    fn appointment() -> Appointment {
        let at = NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        Appointment::new(
            AppointmentId::new(EntityId::new()),
            PatientId::new(EntityId::new()),
            DoctorId::new(EntityId::new()),
            at,
        )
    }

    #[test]
    fn new_appointment_is_scheduled() {
        assert_eq!(appointment().status(), AppointmentStatus::Scheduled);
    }

    #[test]
    fn scheduled_confirms_then_completes() {
        let confirmed = appointment()
            .with_status(AppointmentStatus::Confirmed)
            .unwrap();
        let completed = confirmed.with_status(AppointmentStatus::Completed).unwrap();
        assert_eq!(completed.status(), AppointmentStatus::Completed);
    }

    #[test]
    fn scheduled_cannot_complete_without_confirmation() {
        let err = appointment()
            .with_status(AppointmentStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyInTerminalState(_)));
    }

    #[test]
    fn cancellation_is_allowed_from_both_open_states() {
        assert!(
            appointment()
                .with_status(AppointmentStatus::Cancelled)
                .is_ok()
        );

        let confirmed = appointment()
            .with_status(AppointmentStatus::Confirmed)
            .unwrap();
        assert!(confirmed.with_status(AppointmentStatus::Cancelled).is_ok());
    }

    #[test]
    fn no_show_is_reachable_from_both_open_states() {
        assert!(appointment().with_status(AppointmentStatus::NoShow).is_ok());

        let confirmed = appointment()
            .with_status(AppointmentStatus::Confirmed)
            .unwrap();
        assert!(confirmed.with_status(AppointmentStatus::NoShow).is_ok());
    }

    #[test]
    fn terminal_states_admit_no_transition() {
        for terminal in [
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            for next in [
                AppointmentStatus::Scheduled,
                AppointmentStatus::Confirmed,
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ] {
                assert!(!terminal.can_transition_to(next), "{terminal:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn only_cancellation_releases_the_slot() {
        assert!(AppointmentStatus::Scheduled.still_booked());
        assert!(AppointmentStatus::Confirmed.still_booked());
        assert!(AppointmentStatus::Completed.still_booked());
        assert!(AppointmentStatus::NoShow.still_booked());
        assert!(!AppointmentStatus::Cancelled.still_booked());
    }

    #[test]
    fn with_status_does_not_mutate_the_original() {
        let original = appointment();
        let _ = original.with_status(AppointmentStatus::Confirmed).unwrap();
        assert_eq!(original.status(), AppointmentStatus::Scheduled);
    }
}
