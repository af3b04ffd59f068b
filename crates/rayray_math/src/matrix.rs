//! Matrices.

use crate::{consts::EPSILON, error::MathError, tuple::Tuple};
use approx::{AbsDiffEq, RelativeEq};

/// A dense matrix of arbitrary shape, stored row by row.
///
/// Matrices are immutable values: every operation produces a new matrix. The
/// determinant, cofactor and inverse operations work for square matrices of
/// any order by recursive cofactor expansion along the first row.
///
/// Equality is approximate, with absolute tolerance [`EPSILON`]. Matrices of
/// different shapes are never equal.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
#[derive(Clone, Debug)]
pub struct Matrix {
    height: usize,
    width: usize,
    elements: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a literal array of rows.
    #[inline]
    pub fn new<const W: usize, const H: usize>(rows: [[f64; W]; H]) -> Self {
        const { assert!(W > 0 && H > 0, "matrix must have at least one row and column") };
        Self {
            height: H,
            width: W,
            elements: rows.into_iter().flatten().collect(),
        }
    }

    /// Creates a matrix from the given rows.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if there are no rows, if the
    /// rows are empty or if they do not all have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MathError> {
        let Some(first_row) = rows.first() else {
            return Err(MathError::dimension_mismatch(
                "matrix construction",
                "no rows given",
            ));
        };
        let width = first_row.as_ref().len();
        if width == 0 {
            return Err(MathError::dimension_mismatch(
                "matrix construction",
                "rows are empty",
            ));
        }

        let mut elements = Vec::with_capacity(rows.len() * width);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MathError::dimension_mismatch(
                    "matrix construction",
                    format!(
                        "row {row_idx} has {} elements, expected {width}",
                        row.len()
                    ),
                ));
            }
            elements.extend_from_slice(row);
        }

        Ok(Self {
            height: rows.len(),
            width,
            elements,
        })
    }

    /// Creates a matrix of the given shape with all zeros.
    ///
    /// # Panics
    /// If `height` or `width` is zero.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self::from_fn(height, width, |_, _| 0.0)
    }

    /// Creates the identity matrix of the given order.
    ///
    /// # Panics
    /// If `order` is zero.
    pub fn identity(order: usize) -> Self {
        Self::from_fn(order, order, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Creates a matrix of the given shape where the element at row `i` and
    /// column `j` is `f(i, j)`.
    ///
    /// # Panics
    /// If `height` or `width` is zero.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        assert!(
            height > 0 && width > 0,
            "matrix must have at least one row and column"
        );
        let elements = (0..height)
            .flat_map(|i| (0..width).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self {
            height,
            width,
            elements,
        }
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f64 {
        self.elements[self.linear_index(i, j)]
    }

    /// Returns the element at row `i` and column `j`, or [`None`] if the
    /// indices are outside the matrix.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.height && j < self.width).then(|| self.elements[i * self.width + j])
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// If `i` is outside the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.height, "row index out of bounds");
        &self.elements[i * self.width..(i + 1) * self.width]
    }

    /// Returns an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.elements.chunks_exact(self.width)
    }

    /// Returns the transpose of this matrix.
    pub fn transposed(&self) -> Self {
        Self::from_fn(self.width, self.height, |i, j| self.element(j, i))
    }

    /// Returns a copy of this matrix with the given row and column removed.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix has only one row
    /// or one column, since the result would be empty.
    ///
    /// # Panics
    /// If `row` or `column` is outside the matrix.
    pub fn submatrix(&self, row: usize, column: usize) -> Result<Self, MathError> {
        assert!(
            row < self.height && column < self.width,
            "index out of bounds"
        );
        if self.height < 2 || self.width < 2 {
            return Err(MathError::dimension_mismatch(
                "submatrix extraction",
                format!(
                    "cannot remove a row and column from a {}x{} matrix",
                    self.height, self.width
                ),
            ));
        }
        Ok(self.submatrix_unchecked(row, column))
    }

    /// Computes the determinant of the submatrix obtained by removing the
    /// given row and column.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix is not square or
    /// has order 1.
    ///
    /// # Panics
    /// If `row` or `column` is outside the matrix.
    pub fn minor(&self, row: usize, column: usize) -> Result<f64, MathError> {
        self.require_square("minor")?;
        Ok(self.submatrix(row, column)?.determinant_unchecked())
    }

    /// Computes the minor for the given row and column, negated when
    /// `row + column` is odd.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix is not square or
    /// has order 1.
    ///
    /// # Panics
    /// If `row` or `column` is outside the matrix.
    pub fn cofactor(&self, row: usize, column: usize) -> Result<f64, MathError> {
        let minor = self.minor(row, column)?;
        Ok(Self::signed_minor(minor, row, column))
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix is not square.
    pub fn determinant(&self) -> Result<f64, MathError> {
        self.require_square("determinant")?;
        Ok(self.determinant_unchecked())
    }

    /// Whether the matrix is square with a non-zero determinant.
    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.determinant_unchecked() != 0.0
    }

    /// Computes the inverse of this matrix as the transposed cofactor matrix
    /// divided by the determinant.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix is not square,
    /// and [`MathError::SingularMatrix`] if its determinant is zero.
    pub fn inverted(&self) -> Result<Self, MathError> {
        self.require_square("matrix inversion")?;
        log::trace!("Inverting {0}x{0} matrix", self.height);

        let determinant = self.determinant_unchecked();
        if determinant == 0.0 {
            log::debug!(
                "Rejected inversion of singular {0}x{0} matrix",
                self.height
            );
            return Err(MathError::SingularMatrix);
        }

        if self.height == 1 {
            return Ok(Self::new([[determinant.recip()]]));
        }

        // Element (i, j) of the inverse is the cofactor at (j, i)
        Ok(Self::from_fn(self.height, self.width, |i, j| {
            self.cofactor_unchecked(j, i) / determinant
        }))
    }

    /// Computes the matrix product `self * other`.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the width of this matrix
    /// differs from the height of `other`.
    pub fn mul_matrix(&self, other: &Self) -> Result<Self, MathError> {
        if self.width != other.height {
            return Err(MathError::dimension_mismatch(
                "matrix multiplication",
                format!(
                    "cannot multiply {}x{} matrix by {}x{} matrix",
                    self.height, self.width, other.height, other.width
                ),
            ));
        }
        Ok(self.mul_matrix_unchecked(other))
    }

    /// Computes the product of this matrix with the given tuple treated as a
    /// 4x1 column.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the matrix is not 4x4.
    pub fn mul_tuple(&self, tuple: &Tuple) -> Result<Tuple, MathError> {
        if self.height != 4 || self.width != 4 {
            return Err(MathError::dimension_mismatch(
                "matrix-tuple multiplication",
                format!(
                    "cannot multiply {}x{} matrix by 4-component tuple",
                    self.height, self.width
                ),
            ));
        }
        Ok(self.mul_tuple_unchecked(tuple))
    }

    /// Returns the rows of the matrix as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub(crate) fn mul_matrix_unchecked(&self, other: &Self) -> Self {
        Self::from_fn(self.height, other.width, |i, j| {
            (0..self.width)
                .map(|k| self.element(i, k) * other.element(k, j))
                .sum()
        })
    }

    pub(crate) fn mul_tuple_unchecked(&self, tuple: &Tuple) -> Tuple {
        let column = tuple.as_array();
        let mut result = [0.0; 4];
        for (i, row) in self.rows().enumerate() {
            result[i] = row.iter().zip(column).map(|(a, b)| a * b).sum();
        }
        Tuple::from(result)
    }

    fn require_square(&self, operation: &'static str) -> Result<(), MathError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MathError::dimension_mismatch(
                operation,
                format!(
                    "requires a square matrix, got {}x{}",
                    self.height, self.width
                ),
            ))
        }
    }

    fn linear_index(&self, i: usize, j: usize) -> usize {
        assert!(i < self.height && j < self.width, "index out of bounds");
        i * self.width + j
    }

    fn submatrix_unchecked(&self, row: usize, column: usize) -> Self {
        Self::from_fn(self.height - 1, self.width - 1, |i, j| {
            let source_i = if i < row { i } else { i + 1 };
            let source_j = if j < column { j } else { j + 1 };
            self.element(source_i, source_j)
        })
    }

    fn cofactor_unchecked(&self, row: usize, column: usize) -> f64 {
        let minor = self
            .submatrix_unchecked(row, column)
            .determinant_unchecked();
        Self::signed_minor(minor, row, column)
    }

    fn signed_minor(minor: f64, row: usize, column: usize) -> f64 {
        if (row + column) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    // Assumes a square matrix. Recursion depth equals the order.
    fn determinant_unchecked(&self) -> f64 {
        match self.height {
            1 => self.elements[0],
            2 => self.elements[0] * self.elements[3] - self.elements[1] * self.elements[2],
            _ => (0..self.width)
                .map(|column| self.element(0, column) * self.cofactor_unchecked(0, column))
                .sum(),
        }
    }
}

impl<const W: usize, const H: usize> From<[[f64; W]; H]> for Matrix {
    fn from(rows: [[f64; W]; H]) -> Self {
        Self::new(rows)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MathError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.elements[self.linear_index(i, j)]
    }
}

// The operators panic on incompatible shapes, the `mul_*` methods report them
// as errors instead.
impl_binop!(Mul, mul, Matrix, Matrix, Matrix, |a, b| {
    match a.mul_matrix(b) {
        Ok(product) => product,
        Err(err) => panic!("{err}"),
    }
});

impl_binop!(Mul, mul, Matrix, Tuple, Tuple, |a, b| {
    match a.mul_tuple(b) {
        Ok(product) => product,
        Err(err) => panic!("{err}"),
    }
});

impl_abs_diff_eq!(Matrix, EPSILON, |a, b, epsilon| {
    a.height == b.height
        && a.width == b.width
        && a
            .elements
            .iter()
            .zip(&b.elements)
            .all(|(ea, eb)| ea.abs_diff_eq(eb, epsilon))
});

impl_relative_eq!(Matrix, |a, b, epsilon, max_relative| {
    a.height == b.height
        && a.width == b.width
        && a
            .elements
            .iter()
            .zip(&b.elements)
            .all(|(ea, eb)| ea.relative_eq(eb, epsilon, max_relative))
});

impl_tolerant_partial_eq!(Matrix);
