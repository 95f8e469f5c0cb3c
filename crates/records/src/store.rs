use careforge_core::DomainResult;
use careforge_registry::{DoctorId, PatientId};

/// Store port: referential checks for clinical entries.
///
/// Implemented by the storage adapter;
/// [`crate::memory::InMemoryClinicalIndex`] backs tests.
pub trait ClinicalStore {
    fn patient_exists(&self, id: PatientId) -> DomainResult<bool>;

    fn doctor_exists(&self, id: DoctorId) -> DomainResult<bool>;
}

impl<S: ClinicalStore + ?Sized> ClinicalStore for &S {
    fn patient_exists(&self, id: PatientId) -> DomainResult<bool> {
        (**self).patient_exists(id)
    }

    fn doctor_exists(&self, id: DoctorId) -> DomainResult<bool> {
        (**self).doctor_exists(id)
    }
}
