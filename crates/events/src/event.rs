use chrono::NaiveDateTime;

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
///
/// Engine operations return events next to the updated records; the caller
/// persists both in the same transaction and may republish the events.
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "scheduling.appointment.scheduled").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the decision was taken: clinic-local business time, always
    /// supplied by the caller (the engine never reads a wall clock).
    fn occurred_at(&self) -> NaiveDateTime;
}
