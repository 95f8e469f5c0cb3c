//! Accepted decision outcome.

/// The result of an accepted engine decision.
///
/// `record` is the new or updated state for the caller to persist; `events`
/// are the immutable facts describing what was decided, stamped with the
/// caller-supplied clock. Both must be committed in the caller's transaction
/// (or neither).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted<T, E> {
    pub record: T,
    pub events: Vec<E>,
}

impl<T, E> Accepted<T, E> {
    /// Accepted decision with a single event (the common case).
    pub fn new(record: T, event: E) -> Self {
        Self {
            record,
            events: vec![event],
        }
    }

    pub fn with_events(record: T, events: Vec<E>) -> Self {
        Self { record, events }
    }
}
