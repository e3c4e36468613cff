//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are interchangeable. They are immutable; "changing" one means building a
/// new instance, which is where validation runs.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Weight(f64);
///
/// impl ValueObject for Weight {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
