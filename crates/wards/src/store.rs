use careforge_core::DomainResult;
use careforge_registry::PatientId;

use crate::admission::Admission;
use crate::room::RoomId;

/// Store port: read-only ward lookups the admission decisions depend on.
///
/// Implemented by the storage adapter; [`crate::memory::InMemoryWard`] backs
/// tests. Reads must be at least snapshot-isolated relative to the write that
/// commits an accepted decision, otherwise two concurrent admissions into the
/// same room can both pass the capacity check.
pub trait AdmissionStore {
    /// The patient's current (non-discharged) admission, if any. At most one
    /// can exist.
    fn current_admission_for_patient(
        &self,
        patient_id: PatientId,
    ) -> DomainResult<Option<Admission>>;

    /// Count of the room's admissions with no discharge date.
    fn current_occupancy(&self, room_id: RoomId) -> DomainResult<u32>;

    fn room_number_taken(&self, room_number: &str) -> DomainResult<bool>;
}

impl<S: AdmissionStore + ?Sized> AdmissionStore for &S {
    fn current_admission_for_patient(
        &self,
        patient_id: PatientId,
    ) -> DomainResult<Option<Admission>> {
        (**self).current_admission_for_patient(patient_id)
    }

    fn current_occupancy(&self, room_id: RoomId) -> DomainResult<u32> {
        (**self).current_occupancy(room_id)
    }

    fn room_number_taken(&self, room_number: &str) -> DomainResult<bool> {
        (**self).room_number_taken(room_number)
    }
}
