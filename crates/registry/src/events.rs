use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_events::DomainEvent;

use crate::department::DepartmentId;
use crate::doctor::DoctorId;
use crate::nurse::NurseId;
use crate::patient::PatientId;
use crate::supplier::SupplierId;

/// Event: PatientRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistered {
    pub patient_id: PatientId,
    pub full_name: String,
    pub occurred_at: NaiveDateTime,
}

/// Event: DoctorRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRegistered {
    pub doctor_id: DoctorId,
    pub license_number: String,
    pub department_id: Option<DepartmentId>,
    pub occurred_at: NaiveDateTime,
}

/// Event: DoctorReassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorReassigned {
    pub doctor_id: DoctorId,
    /// New assignment; `None` clears the department.
    pub department_id: Option<DepartmentId>,
    pub occurred_at: NaiveDateTime,
}

/// Event: NurseRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseRegistered {
    pub nurse_id: NurseId,
    pub department_id: DepartmentId,
    pub occurred_at: NaiveDateTime,
}

/// Event: DepartmentCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCreated {
    pub department_id: DepartmentId,
    pub name: String,
    pub occurred_at: NaiveDateTime,
}

/// Event: SupplierRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRegistered {
    pub supplier_id: SupplierId,
    pub name: String,
    pub occurred_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    PatientRegistered(PatientRegistered),
    DoctorRegistered(DoctorRegistered),
    DoctorReassigned(DoctorReassigned),
    NurseRegistered(NurseRegistered),
    DepartmentCreated(DepartmentCreated),
    SupplierRegistered(SupplierRegistered),
}

impl DomainEvent for RegistryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RegistryEvent::PatientRegistered(_) => "registry.patient.registered",
            RegistryEvent::DoctorRegistered(_) => "registry.doctor.registered",
            RegistryEvent::DoctorReassigned(_) => "registry.doctor.reassigned",
            RegistryEvent::NurseRegistered(_) => "registry.nurse.registered",
            RegistryEvent::DepartmentCreated(_) => "registry.department.created",
            RegistryEvent::SupplierRegistered(_) => "registry.supplier.registered",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> NaiveDateTime {
        match self {
            RegistryEvent::PatientRegistered(e) => e.occurred_at,
            RegistryEvent::DoctorRegistered(e) => e.occurred_at,
            RegistryEvent::DoctorReassigned(e) => e.occurred_at,
            RegistryEvent::NurseRegistered(e) => e.occurred_at,
            RegistryEvent::DepartmentCreated(e) => e.occurred_at,
            RegistryEvent::SupplierRegistered(e) => e.occurred_at,
        }
    }
}
