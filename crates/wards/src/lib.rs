//! `careforge-wards` — rooms and admissions.
//!
//! Room registration, the admission/discharge lifecycle, occupancy against
//! capacity, and length-of-stay statistics. Decisions are pure over the
//! snapshot behind the store port; the caller commits accepted records inside
//! a serializable transaction or under a per-room advisory lock.

pub mod admission;
pub mod engine;
pub mod events;
pub mod memory;
pub mod room;
pub mod stay;
pub mod store;

pub use admission::{Admission, AdmissionId};
pub use engine::{AdmitPatient, DischargePatient, RegisterRoom, admit_patient, discharge_patient, register_room, room_availability};
pub use events::WardEvent;
pub use memory::InMemoryWard;
pub use room::{Room, RoomId, RoomType};
pub use stay::{average_length_of_stay, length_of_stay};
pub use store::AdmissionStore;
