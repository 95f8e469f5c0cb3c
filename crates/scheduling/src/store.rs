use chrono::NaiveDate;

use careforge_core::DomainResult;
use careforge_registry::DoctorId;

use crate::appointment::Appointment;

/// Store port: read-only appointment lookups the scheduler depends on.
///
/// Implemented by the storage adapter; [`crate::memory::InMemoryAppointments`]
/// backs tests. Reads must be at least snapshot-isolated relative to the write
/// that commits an accepted decision, otherwise two concurrent bookings for
/// the same doctor can both pass the conflict check.
pub trait AppointmentStore {
    /// All of the doctor's appointments whose `scheduled_at` falls on `date`,
    /// regardless of status.
    fn appointments_for_doctor_on(
        &self,
        doctor_id: DoctorId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Appointment>>;
}

impl<S: AppointmentStore + ?Sized> AppointmentStore for &S {
    fn appointments_for_doctor_on(
        &self,
        doctor_id: DoctorId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Appointment>> {
        (**self).appointments_for_doctor_on(doctor_id, date)
    }
}
