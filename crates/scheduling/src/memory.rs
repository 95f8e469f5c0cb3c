//! In-memory appointment book.
//!
//! Intended for tests/dev and as a template for storage adapters. Not
//! optimized for performance.

use std::sync::RwLock;

use chrono::NaiveDate;

use careforge_core::{DomainError, DomainResult};
use careforge_registry::DoctorId;

use crate::appointment::Appointment;
use crate::store::AppointmentStore;

/// In-memory [`AppointmentStore`].
#[derive(Debug, Default)]
pub struct InMemoryAppointments {
    inner: RwLock<Vec<Appointment>>,
}

impl InMemoryAppointments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted appointment, as the caller's persistence step would.
    /// An existing entry with the same id is replaced.
    pub fn insert(&self, appointment: Appointment) {
        if let Ok(mut book) = self.inner.write() {
            book.retain(|a| a.id_typed() != appointment.id_typed());
            book.push(appointment);
        }
    }
}

impl AppointmentStore for InMemoryAppointments {
    fn appointments_for_doctor_on(
        &self,
        doctor_id: DoctorId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Appointment>> {
        let book = self
            .inner
            .read()
            .map_err(|_| DomainError::invariant("appointment book lock poisoned"))?;
        Ok(book
            .iter()
            .filter(|a| a.doctor_id() == doctor_id && a.scheduled_at().date() == date)
            .cloned()
            .collect())
    }
}
