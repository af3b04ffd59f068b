//! Tolerances used when comparing floating-point values.

/// Absolute tolerance for equality of [`Tuple`](crate::Tuple),
/// [`Matrix`](crate::Matrix) and [`Transform`](crate::Transform) values.
pub const EPSILON: f64 = 1e-5;

/// Absolute tolerance for equality of [`Color`](crate::Color) values.
pub const COLOR_EPSILON: f64 = 1e-3;
