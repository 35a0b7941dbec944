//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute values:
/// `Money { cents: 189900 }` is the same amount wherever it appears, and a
/// cart line key `(product, size, color)` is equal to any other key with the
/// same fields. To "modify" one, build a new one.
///
/// The bounds capture the minimum contract: cheap to copy, compared by value,
/// debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
