//! In-memory clinical index.
//!
//! Intended for tests/dev and as a template for storage adapters.

use std::collections::HashSet;
use std::sync::RwLock;

use careforge_core::{DomainError, DomainResult};
use careforge_registry::{DoctorId, PatientId};

use crate::store::ClinicalStore;

#[derive(Debug, Default)]
struct ClinicalIndexState {
    patients: HashSet<PatientId>,
    doctors: HashSet<DoctorId>,
}

/// In-memory [`ClinicalStore`].
#[derive(Debug, Default)]
pub struct InMemoryClinicalIndex {
    inner: RwLock<ClinicalIndexState>,
}

impl InMemoryClinicalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_patient(&self, id: PatientId) {
        if let Ok(mut state) = self.inner.write() {
            state.patients.insert(id);
        }
    }

    pub fn insert_doctor(&self, id: DoctorId) {
        if let Ok(mut state) = self.inner.write() {
            state.doctors.insert(id);
        }
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, ClinicalIndexState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invariant("clinical index lock poisoned"))
    }
}

impl ClinicalStore for InMemoryClinicalIndex {
    fn patient_exists(&self, id: PatientId) -> DomainResult<bool> {
        Ok(self.read()?.patients.contains(&id))
    }

    fn doctor_exists(&self, id: DoctorId) -> DomainResult<bool> {
        Ok(self.read()?.doctors.contains(&id))
    }
}
