//! Dense matrix helpers for the normal equations
//!
//! All functions are pure: they borrow their operands and return freshly allocated matrices.
//! Shapes are validated up front, so a returned error never leaves a partially computed result
//! behind.
use ndarray::{s, Array2, ArrayBase, Axis, Data, Ix1, Ix2};

use crate::dataset::Float;
use crate::error::{Error, Result};

mod inverse;

pub use inverse::{default_pivot_tolerance, invert, invert_with_tolerance};

/// Build a matrix from a sequence of equally sized rows
///
/// Fails with [`Error::Shape`] if there are no rows, if the rows are empty or if any row differs
/// in length from the first one.
///
/// ```rust
/// use linreg::linalg::from_rows;
///
/// let x = from_rows(&[vec![1., 2.], vec![3., 4.]]).unwrap();
/// assert_eq!(x.dim(), (2, 2));
/// assert!(from_rows(&[vec![1., 2.], vec![3.]]).is_err());
/// ```
pub fn from_rows<F: Float, R: AsRef<[F]>>(rows: &[R]) -> Result<Array2<F>> {
    let ncols = match rows.first() {
        Some(row) => row.as_ref().len(),
        None => return Err(Error::Shape("matrix has no rows".to_string())),
    };
    if ncols == 0 {
        return Err(Error::Shape("matrix has no columns".to_string()));
    }

    let mut values = Vec::with_capacity(rows.len() * ncols);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != ncols {
            return Err(Error::Shape(format!(
                "row {} has {} values, expected {}",
                i,
                row.len(),
                ncols
            )));
        }
        values.extend_from_slice(row);
    }

    Ok(Array2::from_shape_vec((rows.len(), ncols), values)?)
}

/// Reshape a vector of length `m` into an `m x 1` column matrix
pub fn column<F: Float, D: Data<Elem = F>>(v: &ArrayBase<D, Ix1>) -> Array2<F> {
    v.to_owned().insert_axis(Axis(1))
}

/// Transpose an `m x n` matrix into an `n x m` matrix
///
/// Fails with [`Error::Shape`] if either dimension is zero.
pub fn transpose<F: Float, D: Data<Elem = F>>(m: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
    if m.is_empty() {
        return Err(Error::Shape(format!(
            "cannot transpose an empty {}x{} matrix",
            m.nrows(),
            m.ncols()
        )));
    }

    Ok(m.t().as_standard_layout().into_owned())
}

/// Multiply a `p x q` matrix with a `q x r` matrix
///
/// Fails with [`Error::DimensionMismatch`] if the number of columns of `a` differs from the
/// number of rows of `b`.
pub fn multiply<F, D1, D2>(a: &ArrayBase<D1, Ix2>, b: &ArrayBase<D2, Ix2>) -> Result<Array2<F>>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    if a.ncols() != b.nrows() {
        return Err(Error::DimensionMismatch {
            expected: a.ncols(),
            found: b.nrows(),
        });
    }

    Ok(a.dot(b))
}

/// Prepend a column of ones to a feature matrix
///
/// The result has one more column than `x`; the original columns are shifted right by one and
/// the row order is preserved. Calling this twice adds two bias columns.
pub fn add_bias_column<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix2>) -> Array2<F> {
    let (nrows, ncols) = x.dim();
    let mut augmented = Array2::ones((nrows, ncols + 1));
    augmented.slice_mut(s![.., 1..]).assign(x);

    augmented
}
