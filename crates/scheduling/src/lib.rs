//! `careforge-scheduling` — appointment booking.
//!
//! Conflict detection, available-slot enumeration and the appointment status
//! lifecycle. Decisions are pure over the snapshot behind the store port; the
//! caller commits accepted records inside a serializable transaction or under
//! a per-doctor advisory lock.

pub mod appointment;
pub mod config;
pub mod engine;
pub mod events;
pub mod memory;
pub mod store;

pub use appointment::{Appointment, AppointmentId, AppointmentStatus};
pub use config::WorkingHours;
pub use engine::{AvailableSlots, ScheduleAppointment, Scheduler};
pub use events::AppointmentEvent;
pub use memory::InMemoryAppointments;
pub use store::AppointmentStore;
