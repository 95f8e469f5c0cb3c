use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use careforge_events::DomainEvent;
use careforge_registry::{DoctorId, PatientId};

use crate::appointment::{AppointmentId, AppointmentStatus};

/// Event: AppointmentScheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentScheduled {
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub scheduled_at: NaiveDateTime,
    pub occurred_at: NaiveDateTime,
}

/// Event: AppointmentStatusChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentStatusChanged {
    pub appointment_id: AppointmentId,
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
    pub occurred_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentEvent {
    Scheduled(AppointmentScheduled),
    StatusChanged(AppointmentStatusChanged),
}

impl DomainEvent for AppointmentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AppointmentEvent::Scheduled(_) => "scheduling.appointment.scheduled",
            AppointmentEvent::StatusChanged(_) => "scheduling.appointment.status_changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> NaiveDateTime {
        match self {
            AppointmentEvent::Scheduled(e) => e.occurred_at,
            AppointmentEvent::StatusChanged(e) => e.occurred_at,
        }
    }
}
