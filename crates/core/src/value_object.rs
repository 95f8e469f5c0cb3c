//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are the same value. To "modify" one, build a new
/// one. `ContactInfo` and `WorkingHours` are values; `Patient` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
