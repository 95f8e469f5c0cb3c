//! In-memory directory index.
//!
//! Intended for tests/dev and as a template for storage adapters. Not
//! optimized for performance.

use std::collections::HashSet;
use std::sync::RwLock;

use careforge_core::{DomainError, DomainResult};

use crate::department::{Department, DepartmentId};
use crate::doctor::Doctor;
use crate::patient::Patient;
use crate::store::DirectoryStore;
use crate::supplier::Supplier;

#[derive(Debug, Default)]
struct DirectoryIndex {
    national_ids: HashSet<String>,
    license_numbers: HashSet<String>,
    department_names: HashSet<String>,
    supplier_names: HashSet<String>,
    departments: HashSet<DepartmentId>,
}

/// In-memory [`DirectoryStore`].
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    inner: RwLock<DirectoryIndex>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted patient, as the caller's persistence step would.
    pub fn insert_patient(&self, patient: &Patient) {
        if let (Ok(mut index), Some(national_id)) = (self.inner.write(), &patient.national_id) {
            index.national_ids.insert(national_id.clone());
        }
    }

    pub fn insert_doctor(&self, doctor: &Doctor) {
        if let Ok(mut index) = self.inner.write() {
            index.license_numbers.insert(doctor.license_number.clone());
        }
    }

    pub fn insert_department(&self, department: &Department) {
        if let Ok(mut index) = self.inner.write() {
            index.department_names.insert(department.name.clone());
            index.departments.insert(department.id);
        }
    }

    pub fn insert_supplier(&self, supplier: &Supplier) {
        if let Ok(mut index) = self.inner.write() {
            index.supplier_names.insert(supplier.name.clone());
        }
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, DirectoryIndex>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invariant("directory lock poisoned"))
    }
}

impl DirectoryStore for InMemoryDirectory {
    fn national_id_taken(&self, national_id: &str) -> DomainResult<bool> {
        Ok(self.read()?.national_ids.contains(national_id))
    }

    fn license_number_taken(&self, license_number: &str) -> DomainResult<bool> {
        Ok(self.read()?.license_numbers.contains(license_number))
    }

    fn department_name_taken(&self, name: &str) -> DomainResult<bool> {
        Ok(self.read()?.department_names.contains(name))
    }

    fn supplier_name_taken(&self, name: &str) -> DomainResult<bool> {
        Ok(self.read()?.supplier_names.contains(name))
    }

    fn department_exists(&self, id: DepartmentId) -> DomainResult<bool> {
        Ok(self.read()?.departments.contains(&id))
    }
}
