//! `careforge-registry` — the hospital directory.
//!
//! Patients, doctors, nurses, departments and suppliers, plus the registration
//! decisions that guard their natural-key uniqueness and date invariants.
//! Clinical and resource subsystems reference these entities by id only;
//! "reverse" collections (a doctor's appointments, a patient's admissions) are
//! queries against the owning subsystem, never stored relations.

pub mod contact;
pub mod department;
pub mod doctor;
pub mod events;
pub mod memory;
pub mod nurse;
pub mod patient;
pub mod register;
pub mod store;
pub mod supplier;

pub use contact::ContactInfo;
pub use department::{Department, DepartmentId};
pub use doctor::{Doctor, DoctorId};
pub use events::RegistryEvent;
pub use memory::InMemoryDirectory;
pub use nurse::{Nurse, NurseId, ShiftType};
pub use patient::{Gender, Patient, PatientId};
pub use register::{
    CreateDepartment, ReassignDoctor, RegisterDoctor, RegisterNurse, RegisterPatient,
    RegisterSupplier, create_department, reassign_doctor, register_doctor, register_nurse,
    register_patient, register_supplier,
};
pub use store::DirectoryStore;
pub use supplier::{Supplier, SupplierId};
