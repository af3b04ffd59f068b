//! Affine transforms.

use crate::{consts::EPSILON, error::MathError, matrix::Matrix, tuple::Tuple};
use approx::{AbsDiffEq, RelativeEq};

/// An affine transform backed by a 4x4 homogeneous matrix.
///
/// Applying a transform to a [`Tuple`] multiplies the matrix with the tuple
/// as a column, so translations move points but leave vectors unchanged.
/// Transforms compose by matrix multiplication: `b * a` applies `a` first and
/// then `b`.
///
/// The inverse is not cached, every call to [`Self::inverted`] runs the full
/// cofactor computation.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Matrix", into = "Matrix")
)]
#[derive(Clone, Debug)]
pub struct Transform {
    matrix: Matrix,
}

impl Transform {
    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::from_matrix_unchecked(Matrix::identity(4))
    }

    /// Creates a translation by the x-, y- and z-components of the given
    /// tuple. The w-component is ignored.
    pub fn translation(offset: &Tuple) -> Self {
        Self::from_matrix_unchecked(Matrix::new([
            [1.0, 0.0, 0.0, offset.x()],
            [0.0, 1.0, 0.0, offset.y()],
            [0.0, 0.0, 1.0, offset.z()],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Creates a scaling along the coordinate axes by the x-, y- and
    /// z-components of the given tuple. The w-component is ignored.
    pub fn scaling(factors: &Tuple) -> Self {
        Self::from_matrix_unchecked(Matrix::new([
            [factors.x(), 0.0, 0.0, 0.0],
            [0.0, factors.y(), 0.0, 0.0],
            [0.0, 0.0, factors.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Creates a reflection across the `x = 0` plane, negating the
    /// x-coordinate.
    pub fn reflection() -> Self {
        Self::scaling(&Tuple::vector(-1.0, 1.0, 1.0))
    }

    /// Creates a transform from the given homogeneous matrix.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix is not 4x4.
    pub fn from_matrix(matrix: Matrix) -> Result<Self, MathError> {
        if matrix.height() != 4 || matrix.width() != 4 {
            return Err(MathError::dimension_mismatch(
                "transform construction",
                format!(
                    "expected a 4x4 matrix, got {}x{}",
                    matrix.height(),
                    matrix.width()
                ),
            ));
        }
        Ok(Self::from_matrix_unchecked(matrix))
    }

    /// The homogeneous matrix of the transform.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Consumes the transform and returns its homogeneous matrix.
    #[inline]
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Whether the transform can be inverted.
    pub fn is_invertible(&self) -> bool {
        self.matrix.is_invertible()
    }

    /// Computes the inverse of this transform.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the transform is degenerate,
    /// for example a scaling with a zero factor.
    pub fn inverted(&self) -> Result<Self, MathError> {
        Ok(Self::from_matrix_unchecked(self.matrix.inverted()?))
    }

    /// Applies the transform to the given point or vector.
    #[inline]
    pub fn transform_tuple(&self, tuple: &Tuple) -> Tuple {
        self.matrix.mul_tuple_unchecked(tuple)
    }

    /// Returns the transform that applies this transform first and then
    /// `next`.
    #[inline]
    pub fn then(&self, next: &Self) -> Self {
        next * self
    }

    fn from_matrix_unchecked(matrix: Matrix) -> Self {
        Self { matrix }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<Matrix> for Transform {
    type Error = MathError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        Self::from_matrix(matrix)
    }
}

impl From<Transform> for Matrix {
    fn from(transform: Transform) -> Self {
        transform.into_matrix()
    }
}

impl_binop!(Mul, mul, Transform, Transform, Transform, |a, b| {
    Transform::from_matrix_unchecked(a.matrix.mul_matrix_unchecked(&b.matrix))
});

impl_binop!(Mul, mul, Transform, Tuple, Tuple, |a, b| {
    a.transform_tuple(b)
});

impl_abs_diff_eq!(Transform, EPSILON, |a, b, epsilon| {
    a.matrix.abs_diff_eq(&b.matrix, epsilon)
});

impl_relative_eq!(Transform, |a, b, epsilon, max_relative| {
    a.matrix.relative_eq(&b.matrix, epsilon, max_relative)
});

impl_tolerant_partial_eq!(Transform);
