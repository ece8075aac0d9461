//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are the same value. "Modifying" one
/// means building a new one. `ContactDetails`, `BillingTerms` and the tax
/// breakdown types are value objects; `Client` or `Invoice` are entities.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
