//! In-memory ward register.
//!
//! Intended for tests/dev and as a template for storage adapters. Not
//! optimized for performance.

use std::sync::RwLock;

use careforge_core::{DomainError, DomainResult};
use careforge_registry::PatientId;

use crate::admission::Admission;
use crate::room::{Room, RoomId};
use crate::store::AdmissionStore;

#[derive(Debug, Default)]
struct WardState {
    rooms: Vec<Room>,
    admissions: Vec<Admission>,
}

/// In-memory [`AdmissionStore`].
#[derive(Debug, Default)]
pub struct InMemoryWard {
    inner: RwLock<WardState>,
}

impl InMemoryWard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted room, as the caller's persistence step would.
    pub fn insert_room(&self, room: Room) {
        if let Ok(mut state) = self.inner.write() {
            state.rooms.push(room);
        }
    }

    /// Record a new or updated admission; an existing entry with the same id
    /// is replaced (this is how a discharge lands).
    pub fn upsert_admission(&self, admission: Admission) {
        if let Ok(mut state) = self.inner.write() {
            state
                .admissions
                .retain(|a| a.id_typed() != admission.id_typed());
            state.admissions.push(admission);
        }
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, WardState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invariant("ward lock poisoned"))
    }
}

impl AdmissionStore for InMemoryWard {
    fn current_admission_for_patient(
        &self,
        patient_id: PatientId,
    ) -> DomainResult<Option<Admission>> {
        Ok(self
            .read()?
            .admissions
            .iter()
            .find(|a| a.patient_id() == patient_id && a.is_current())
            .cloned())
    }

    fn current_occupancy(&self, room_id: RoomId) -> DomainResult<u32> {
        let count = self
            .read()?
            .admissions
            .iter()
            .filter(|a| a.room_id() == room_id && a.is_current())
            .count();
        Ok(count as u32)
    }

    fn room_number_taken(&self, room_number: &str) -> DomainResult<bool> {
        Ok(self
            .read()?
            .rooms
            .iter()
            .any(|r| r.room_number() == room_number))
    }
}
