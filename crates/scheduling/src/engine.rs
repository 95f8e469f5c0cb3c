//! Scheduling decisions.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use careforge_core::{Accepted, DomainError, DomainResult};
use careforge_registry::{DoctorId, PatientId};

use crate::appointment::{Appointment, AppointmentId, AppointmentStatus};
use crate::config::WorkingHours;
use crate::events::{AppointmentEvent, AppointmentScheduled, AppointmentStatusChanged};
use crate::store::AppointmentStore;

/// Command: ScheduleAppointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAppointment {
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    /// Requested instant; slot granularity is whatever precision the caller
    /// books at.
    pub at: NaiveDateTime,
    /// Caller-supplied clock; `at` must lie strictly after it.
    pub occurred_at: NaiveDateTime,
}

/// Scheduling decision engine.
///
/// Pure over the snapshot behind the store; the caller persists accepted
/// records and events in its own transaction.
pub struct Scheduler<S> {
    store: S,
    hours: WorkingHours,
}

impl<S: AppointmentStore> Scheduler<S> {
    pub fn new(store: S) -> Self {
        Self::with_hours(store, WorkingHours::default())
    }

    pub fn with_hours(store: S, hours: WorkingHours) -> Self {
        Self { store, hours }
    }

    pub fn hours(&self) -> WorkingHours {
        self.hours
    }

    /// Book a new appointment.
    ///
    /// Rejects instants that are not in the future, fall outside working
    /// hours, or collide exactly with another non-cancelled, non-no-show
    /// appointment of the same doctor.
    pub fn schedule(
        &self,
        cmd: ScheduleAppointment,
    ) -> DomainResult<Accepted<Appointment, AppointmentEvent>> {
        if cmd.at <= cmd.occurred_at {
            return Err(DomainError::validation(
                "scheduled_at must be in the future",
            ));
        }
        if !self.hours.contains(cmd.at.time()) {
            return Err(DomainError::validation(format!(
                "scheduled_at {} is outside working hours",
                cmd.at.time()
            )));
        }

        let same_day = self
            .store
            .appointments_for_doctor_on(cmd.doctor_id, cmd.at.date())?;
        // No-shows release the instant for rebooking, as cancellations do.
        let clash = same_day.iter().any(|a| {
            a.scheduled_at() == cmd.at
                && !matches!(
                    a.status(),
                    AppointmentStatus::Cancelled | AppointmentStatus::NoShow
                )
        });
        if clash {
            return Err(DomainError::conflict(format!(
                "doctor already booked at {}",
                cmd.at
            )));
        }

        let appointment =
            Appointment::new(cmd.appointment_id, cmd.patient_id, cmd.doctor_id, cmd.at);

        Ok(Accepted::new(
            appointment,
            AppointmentEvent::Scheduled(AppointmentScheduled {
                appointment_id: cmd.appointment_id,
                patient_id: cmd.patient_id,
                doctor_id: cmd.doctor_id,
                scheduled_at: cmd.at,
                occurred_at: cmd.occurred_at,
            }),
        ))
    }

    /// Move an appointment through its status machine.
    pub fn update_status(
        &self,
        appointment: &Appointment,
        to: AppointmentStatus,
        occurred_at: NaiveDateTime,
    ) -> DomainResult<Accepted<Appointment, AppointmentEvent>> {
        let from = appointment.status();
        let updated = appointment.with_status(to)?;

        Ok(Accepted::new(
            updated,
            AppointmentEvent::StatusChanged(AppointmentStatusChanged {
                appointment_id: appointment.id_typed(),
                from,
                to,
                occurred_at,
            }),
        ))
    }

    /// Enumerate the doctor's free candidate instants on `date`.
    ///
    /// Lazy and restartable: a pure function of the snapshot plus parameters.
    /// Instants booked with any status other than `Cancelled` are excluded.
    pub fn available_slots(
        &self,
        doctor_id: DoctorId,
        date: NaiveDate,
        granularity: Duration,
    ) -> DomainResult<AvailableSlots> {
        if granularity <= Duration::zero() {
            return Err(DomainError::validation("slot granularity must be positive"));
        }

        let booked: HashSet<NaiveDateTime> = self
            .store
            .appointments_for_doctor_on(doctor_id, date)?
            .into_iter()
            .filter(|a| a.status().still_booked())
            .map(|a| a.scheduled_at())
            .collect();

        Ok(AvailableSlots {
            next: date.and_time(self.hours.start()),
            end: date.and_time(self.hours.end()),
            step: granularity,
            booked,
        })
    }
}

/// Lazy enumeration of free slots within one day's working hours.
#[derive(Debug, Clone)]
pub struct AvailableSlots {
    next: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
    booked: HashSet<NaiveDateTime>,
}

impl Iterator for AvailableSlots {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        while self.next < self.end {
            let candidate = self.next;
            self.next = candidate + self.step;
            if !self.booked.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}
