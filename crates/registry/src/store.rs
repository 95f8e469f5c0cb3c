use careforge_core::DomainResult;

use crate::department::DepartmentId;

/// Store port: read-only directory lookups the registration decisions need.
///
/// Implemented by the storage adapter; [`crate::memory::InMemoryDirectory`]
/// backs tests. Reads must be at least snapshot-isolated relative to the write
/// that commits an accepted decision, otherwise two concurrent registrations
/// can both pass a uniqueness check against a stale snapshot.
pub trait DirectoryStore {
    fn national_id_taken(&self, national_id: &str) -> DomainResult<bool>;

    fn license_number_taken(&self, license_number: &str) -> DomainResult<bool>;

    fn department_name_taken(&self, name: &str) -> DomainResult<bool>;

    fn supplier_name_taken(&self, name: &str) -> DomainResult<bool>;

    fn department_exists(&self, id: DepartmentId) -> DomainResult<bool>;
}
