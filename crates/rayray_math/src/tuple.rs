//! Homogeneous tuples.

use crate::{consts::EPSILON, error::MathError};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4-component homogeneous tuple `(x, y, z, w)`.
///
/// Points and vectors share this type and are told apart only by `w`: points
/// are created with `w = 1` and vectors with `w = 0`. Arithmetic acts on all
/// four components, so the difference of two points is a vector and a point
/// plus a vector is a point without any special casing.
///
/// Equality is approximate, with absolute tolerance [`EPSILON`].
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Tuple {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Tuple {
    /// Creates a new tuple with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (`w = 1`) with the given coordinates.
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a vector (`w = 0`) with the given components.
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a tuple with all zeros (the zero vector).
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Whether `w` is exactly 1.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Whether `w` is exactly 0.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// The components as an array in `[x, y, z, w]` order.
    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    /// Computes the square of the Euclidean norm over all four components.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Computes the Euclidean norm over all four components.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the tuple divided by its magnitude.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if the magnitude is zero.
    pub fn normalized(&self) -> Result<Self, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::DivisionByZero {
                operation: "tuple normalization",
            });
        }
        Ok(self.mapped(|component| component / magnitude))
    }

    /// Computes the dot product over all four components.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the cross product of the xyz parts. `w` is ignored and the
    /// result is always a vector.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplies every component, including `w`, by the given scalar.
    #[inline]
    pub fn scaled(&self, scalar: f64) -> Self {
        self.mapped(|component| component * scalar)
    }

    /// Divides every component, including `w`, by the given scalar.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if `scalar` is zero.
    pub fn divided_by(&self, scalar: f64) -> Result<Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero {
                operation: "tuple division",
            });
        }
        Ok(self.mapped(|component| component / scalar))
    }

    /// Returns a tuple with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl From<[f64; 4]> for Tuple {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Tuple> for [f64; 4] {
    #[inline]
    fn from(tuple: Tuple) -> Self {
        *tuple.as_array()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl_binop!(Add, add, Tuple, Tuple, Tuple, |a, b| {
    Tuple::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Tuple, Tuple, Tuple, |a, b| {
    Tuple::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Tuple, f64, Tuple, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f64, Tuple, Tuple, |a, b| { b.scaled(*a) });

// Panics on a zero divisor, `Tuple::divided_by` reports it as an error instead.
impl_binop!(Div, div, Tuple, f64, Tuple, |a, b| {
    match a.divided_by(*b) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{err}"),
    }
});

impl_unary_op!(Neg, neg, Tuple, Tuple, |val| { val.mapped(|c| -c) });

impl_abs_diff_eq!(Tuple, EPSILON, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Tuple, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl_tolerant_partial_eq!(Tuple);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn tuple_with_unit_w_is_point() {
        let tuple = Tuple::new(4.3, -4.2, 3.1, 1.0);

        assert_eq!(tuple.x(), 4.3);
        assert_eq!(tuple.y(), -4.2);
        assert_eq!(tuple.z(), 3.1);
        assert_eq!(tuple.w(), 1.0);
        assert!(tuple.is_point());
        assert!(!tuple.is_vector());
    }

    #[test]
    fn tuple_with_zero_w_is_vector() {
        let tuple = Tuple::new(4.3, -4.2, 3.1, 0.0);

        assert!(tuple.is_vector());
        assert!(!tuple.is_point());
    }

    #[test]
    fn point_and_vector_constructors_set_w() {
        assert_eq!(Tuple::point(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 1.0));
        assert_eq!(Tuple::vector(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 0.0));
    }

    #[test]
    fn adding_vector_to_point_gives_point() {
        let sum = Tuple::point(3.0, -2.0, 5.0) + Tuple::vector(-2.0, 3.0, 1.0);

        assert_eq!(sum, Tuple::point(1.0, 1.0, 6.0));
        assert!(sum.is_point());
    }

    #[test]
    fn subtracting_points_gives_vector() {
        let difference = Tuple::point(3.0, 2.0, 1.0) - Tuple::point(5.0, 6.0, 7.0);

        assert_eq!(difference, Tuple::vector(-2.0, -4.0, -6.0));
        assert!(difference.is_vector());
    }

    #[test]
    fn subtracting_vector_from_point_gives_point() {
        let difference = Tuple::point(3.0, 2.0, 1.0) - Tuple::vector(5.0, 6.0, 7.0);

        assert_eq!(difference, Tuple::point(-2.0, -4.0, -6.0));
    }

    #[test]
    fn negating_tuple_negates_all_components() {
        assert_eq!(
            -Tuple::new(1.0, -2.0, 3.0, -4.0),
            Tuple::new(-1.0, 2.0, -3.0, 4.0)
        );
    }

    #[test]
    fn multiplying_tuple_by_scalar_scales_all_components() {
        let tuple = Tuple::new(1.0, -2.0, 3.0, -4.0);

        assert_eq!(tuple * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(0.5 * &tuple, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn dividing_tuple_by_scalar_divides_all_components() {
        let tuple = Tuple::new(1.0, -2.0, 3.0, -4.0);

        assert_eq!(tuple / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(
            tuple.divided_by(2.0).unwrap(),
            Tuple::new(0.5, -1.0, 1.5, -2.0)
        );
    }

    #[test]
    fn dividing_tuple_by_zero_fails() {
        let result = Tuple::new(1.0, 2.0, 3.0, 4.0).divided_by(0.0);

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    #[should_panic]
    fn dividing_tuple_by_zero_with_operator_panics() {
        let _ = Tuple::vector(1.0, 2.0, 3.0) / 0.0;
    }

    #[test]
    fn computing_magnitude_works() {
        assert_eq!(Tuple::vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple::vector(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert_abs_diff_eq!(
            Tuple::vector(1.0, 2.0, 3.0).magnitude(),
            14.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Tuple::vector(-1.0, -2.0, -3.0).magnitude(),
            14.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn magnitude_includes_w() {
        assert_abs_diff_eq!(
            Tuple::point(0.0, 0.0, 0.0).magnitude(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn normalizing_vector_works() {
        assert_eq!(
            Tuple::vector(4.0, 0.0, 0.0).normalized().unwrap(),
            Tuple::vector(1.0, 0.0, 0.0)
        );

        let sqrt_14 = 14.0_f64.sqrt();
        assert_eq!(
            Tuple::vector(1.0, 2.0, 3.0).normalized().unwrap(),
            Tuple::vector(1.0 / sqrt_14, 2.0 / sqrt_14, 3.0 / sqrt_14)
        );
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        let result = Tuple::zeros().normalized();

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn computing_dot_product_works() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);

        assert_eq!(a.dot(&b), 20.0);
    }

    #[test]
    fn computing_cross_product_works() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);

        assert_eq!(a.cross(&b), Tuple::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a), Tuple::vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn cross_product_of_points_is_vector() {
        let cross = Tuple::point(1.0, 2.0, 3.0).cross(&Tuple::point(2.0, 3.0, 4.0));

        assert!(cross.is_vector());
    }

    #[test]
    fn equality_tolerates_rounding_error() {
        let a = Tuple::point(0.1 + 0.2, 1.0, 1.0);
        let b = Tuple::point(0.3, 1.0, 1.0);

        assert_eq!(a, b);
        assert_ne!(a, Tuple::point(0.3001, 1.0, 1.0));
    }

    #[test]
    fn converting_between_tuple_and_array_works() {
        let tuple = Tuple::from([1.0, 2.0, 3.0, 4.0]);

        assert_eq!(tuple.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(<[f64; 4]>::from(tuple), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn displaying_tuple_lists_components() {
        assert_eq!(Tuple::point(1.0, -2.5, 3.0).to_string(), "(1, -2.5, 3, 1)");
    }

    prop_compose! {
        fn vector_strategy(max_component: f64)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Tuple {
            Tuple::vector(x, y, z)
        }
    }

    proptest! {
        #[test]
        fn cross_product_anticommutes(a in vector_strategy(1e2), b in vector_strategy(1e2)) {
            prop_assert!(a.cross(&b).abs_diff_eq(&-b.cross(&a), 1e-9));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector_has_unit_magnitude(vector in vector_strategy(1e3)) {
            prop_assume!(vector.magnitude() > 1e-6);
            let normalized = vector.normalized().unwrap();
            prop_assert!(normalized.magnitude().abs_diff_eq(&1.0, EPSILON));
        }
    }
}
