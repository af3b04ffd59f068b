//! Colors.

use crate::{consts::COLOR_EPSILON, error::MathError};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

/// An RGB color with floating-point channels.
///
/// Channels are not clamped, so intermediate results of lighting computations
/// may lie outside `[0, 1]`. Equality is approximate, with the coarser
/// tolerance [`COLOR_EPSILON`].
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub const fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// The channels as an array in `[r, g, b]` order.
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    /// Multiplies each channel by the corresponding channel of another color.
    #[inline]
    pub fn hadamard_product(&self, other: &Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    #[inline]
    pub fn scaled(&self, scalar: f64) -> Self {
        self.mapped(|channel| channel * scalar)
    }

    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if `scalar` is zero.
    pub fn divided_by(&self, scalar: f64) -> Result<Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero {
                operation: "color division",
            });
        }
        Ok(self.mapped(|channel| channel / scalar))
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.r * self.r + self.g * self.g + self.b * self.b).sqrt()
    }

    /// # Errors
    /// Returns [`MathError::DivisionByZero`] for black.
    pub fn normalized(&self) -> Result<Self, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::DivisionByZero {
                operation: "color normalization",
            });
        }
        Ok(self.mapped(|channel| channel / magnitude))
    }

    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl_binop!(Add, add, Color, Color, Color, |a, b| {
    Color::new(a.r + b.r, a.g + b.g, a.b + b.b)
});

impl_binop!(Sub, sub, Color, Color, Color, |a, b| {
    Color::new(a.r - b.r, a.g - b.g, a.b - b.b)
});

impl_binop!(Mul, mul, Color, Color, Color, |a, b| {
    a.hadamard_product(b)
});

impl_binop!(Mul, mul, Color, f64, Color, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f64, Color, Color, |a, b| { b.scaled(*a) });

impl_unary_op!(Neg, neg, Color, Color, |val| { val.mapped(|c| -c) });

impl_abs_diff_eq!(Color, COLOR_EPSILON, |a, b, epsilon| {
    a.r.abs_diff_eq(&b.r, epsilon)
        && a.g.abs_diff_eq(&b.g, epsilon)
        && a.b.abs_diff_eq(&b.b, epsilon)
});

impl_relative_eq!(Color, |a, b, epsilon, max_relative| {
    a.r.relative_eq(&b.r, epsilon, max_relative)
        && a.g.relative_eq(&b.g, epsilon, max_relative)
        && a.b.relative_eq(&b.b, epsilon, max_relative)
});

impl_tolerant_partial_eq!(Color);
