//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. `Money`, buyer
/// details and the document theme are value objects: two buyers with the same
/// name and tax id are the same buyer as far as an invoice is concerned.
///
/// ```ignore
/// let a = Money::from_kopecks(100_00);
/// let b = Money::from_rubles(100.0)?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
