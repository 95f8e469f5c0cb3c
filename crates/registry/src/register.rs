//! Registration decisions.
//!
//! Each function validates a command against the current directory snapshot
//! (through [`DirectoryStore`]) and returns the accepted record plus its event,
//! or a typed rejection. The caller persists accepted records; the engine
//! never writes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use careforge_core::{Accepted, DomainError, DomainResult, validate};

use crate::contact::ContactInfo;
use crate::department::{Department, DepartmentId};
use crate::doctor::{Doctor, DoctorId};
use crate::events::{
    DepartmentCreated, DoctorReassigned, DoctorRegistered, NurseRegistered, PatientRegistered,
    RegistryEvent, SupplierRegistered,
};
use crate::nurse::{Nurse, NurseId, ShiftType};
use crate::patient::{Gender, Patient, PatientId};
use crate::store::DirectoryStore;
use crate::supplier::{Supplier, SupplierId};

/// Command: RegisterPatient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPatient {
    pub patient_id: PatientId,
    pub national_id: Option<String>,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<Gender>,
    pub contact: Option<ContactInfo>,
    /// Caller-supplied clock; also bounds `date_of_birth`.
    pub occurred_at: NaiveDateTime,
}

/// Command: RegisterDoctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDoctor {
    pub doctor_id: DoctorId,
    pub full_name: String,
    pub specialty: String,
    pub license_number: String,
    pub department_id: Option<DepartmentId>,
    pub hire_date: NaiveDate,
    pub occurred_at: NaiveDateTime,
}

/// Command: ReassignDoctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignDoctor {
    pub doctor_id: DoctorId,
    /// Target department; `None` leaves the doctor unassigned.
    pub department_id: Option<DepartmentId>,
    pub occurred_at: NaiveDateTime,
}

/// Command: RegisterNurse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterNurse {
    pub nurse_id: NurseId,
    pub full_name: String,
    pub department_id: DepartmentId,
    pub shift: ShiftType,
    pub occurred_at: NaiveDateTime,
}

/// Command: CreateDepartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub department_id: DepartmentId,
    pub name: String,
    pub floor_number: i32,
    pub occurred_at: NaiveDateTime,
}

/// Command: RegisterSupplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSupplier {
    pub supplier_id: SupplierId,
    pub name: String,
    pub contact: Option<ContactInfo>,
    pub occurred_at: NaiveDateTime,
}

pub fn register_patient<S: DirectoryStore>(
    store: &S,
    cmd: RegisterPatient,
) -> DomainResult<Accepted<Patient, RegistryEvent>> {
    validate::non_empty("full_name", &cmd.full_name)?;
    validate::not_in_future("date_of_birth", cmd.date_of_birth, cmd.occurred_at.date())?;

    if let Some(national_id) = &cmd.national_id {
        validate::non_empty("national_id", national_id)?;
        if store.national_id_taken(national_id)? {
            return Err(DomainError::conflict("national_id already registered"));
        }
    }

    let patient = Patient {
        id: cmd.patient_id,
        national_id: cmd.national_id,
        full_name: cmd.full_name.clone(),
        date_of_birth: cmd.date_of_birth,
        gender: cmd.gender,
        contact: cmd.contact.unwrap_or_default(),
    };

    Ok(Accepted::new(
        patient,
        RegistryEvent::PatientRegistered(PatientRegistered {
            patient_id: cmd.patient_id,
            full_name: cmd.full_name,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

pub fn register_doctor<S: DirectoryStore>(
    store: &S,
    cmd: RegisterDoctor,
) -> DomainResult<Accepted<Doctor, RegistryEvent>> {
    validate::non_empty("full_name", &cmd.full_name)?;
    validate::non_empty("license_number", &cmd.license_number)?;
    validate::not_in_future("hire_date", cmd.hire_date, cmd.occurred_at.date())?;

    if store.license_number_taken(&cmd.license_number)? {
        return Err(DomainError::conflict("license_number already registered"));
    }
    ensure_department(store, cmd.department_id)?;

    let doctor = Doctor {
        id: cmd.doctor_id,
        full_name: cmd.full_name,
        specialty: cmd.specialty,
        license_number: cmd.license_number.clone(),
        department_id: cmd.department_id,
        hire_date: cmd.hire_date,
    };

    Ok(Accepted::new(
        doctor,
        RegistryEvent::DoctorRegistered(DoctorRegistered {
            doctor_id: cmd.doctor_id,
            license_number: cmd.license_number,
            department_id: cmd.department_id,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

/// Move a doctor to another department (or clear the assignment).
///
/// The caller passes the doctor's current snapshot; only the target
/// department's existence is checked against the store.
pub fn reassign_doctor<S: DirectoryStore>(
    store: &S,
    doctor: &Doctor,
    cmd: ReassignDoctor,
) -> DomainResult<Accepted<Doctor, RegistryEvent>> {
    if doctor.id != cmd.doctor_id {
        return Err(DomainError::invariant("doctor_id mismatch"));
    }
    ensure_department(store, cmd.department_id)?;

    let updated = Doctor {
        department_id: cmd.department_id,
        ..doctor.clone()
    };

    Ok(Accepted::new(
        updated,
        RegistryEvent::DoctorReassigned(DoctorReassigned {
            doctor_id: cmd.doctor_id,
            department_id: cmd.department_id,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

pub fn register_nurse<S: DirectoryStore>(
    store: &S,
    cmd: RegisterNurse,
) -> DomainResult<Accepted<Nurse, RegistryEvent>> {
    validate::non_empty("full_name", &cmd.full_name)?;
    ensure_department(store, Some(cmd.department_id))?;

    let nurse = Nurse {
        id: cmd.nurse_id,
        full_name: cmd.full_name,
        department_id: cmd.department_id,
        shift: cmd.shift,
    };

    Ok(Accepted::new(
        nurse,
        RegistryEvent::NurseRegistered(NurseRegistered {
            nurse_id: cmd.nurse_id,
            department_id: cmd.department_id,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

pub fn create_department<S: DirectoryStore>(
    store: &S,
    cmd: CreateDepartment,
) -> DomainResult<Accepted<Department, RegistryEvent>> {
    validate::non_empty("name", &cmd.name)?;
    if store.department_name_taken(&cmd.name)? {
        return Err(DomainError::conflict("department name already in use"));
    }

    let department = Department {
        id: cmd.department_id,
        name: cmd.name.clone(),
        floor_number: cmd.floor_number,
    };

    Ok(Accepted::new(
        department,
        RegistryEvent::DepartmentCreated(DepartmentCreated {
            department_id: cmd.department_id,
            name: cmd.name,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

pub fn register_supplier<S: DirectoryStore>(
    store: &S,
    cmd: RegisterSupplier,
) -> DomainResult<Accepted<Supplier, RegistryEvent>> {
    validate::non_empty("name", &cmd.name)?;
    if store.supplier_name_taken(&cmd.name)? {
        return Err(DomainError::conflict("supplier name already in use"));
    }

    let supplier = Supplier {
        id: cmd.supplier_id,
        name: cmd.name.clone(),
        contact: cmd.contact.unwrap_or_default(),
    };

    Ok(Accepted::new(
        supplier,
        RegistryEvent::SupplierRegistered(SupplierRegistered {
            supplier_id: cmd.supplier_id,
            name: cmd.name,
            occurred_at: cmd.occurred_at,
        }),
    ))
}

fn ensure_department<S: DirectoryStore>(
    store: &S,
    department_id: Option<DepartmentId>,
) -> DomainResult<()> {
    if let Some(id) = department_id {
        if !store.department_exists(id)? {
            return Err(DomainError::not_found());
        }
    }
    Ok(())
}
