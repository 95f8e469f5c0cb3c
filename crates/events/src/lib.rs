//! Domain events describing accepted decisions.

pub mod event;

pub use event::DomainEvent;
