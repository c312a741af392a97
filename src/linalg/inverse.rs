//! Matrix inversion by Gauss-Jordan elimination with partial pivoting
use std::cmp::Ordering;

use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::dataset::Float;
use crate::error::{Error, Result};

/// Relative pivot tolerance used by [`invert`] for an `n x n` matrix
pub fn default_pivot_tolerance<F: Float>(n: usize) -> F {
    F::cast(1000) * F::cast(n) * F::epsilon()
}

/// Invert a square matrix
///
/// Uses [`default_pivot_tolerance`], see [`invert_with_tolerance`] for the error conditions.
///
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use linreg::linalg::{invert, multiply};
/// use ndarray::{array, Array2};
///
/// let m = array![[4., 7.], [2., 6.]];
/// let inv = invert(&m).unwrap();
/// let eye = multiply(&m, &inv).unwrap();
/// assert_abs_diff_eq!(eye, Array2::<f64>::eye(2), epsilon = 1e-12);
/// ```
pub fn invert<F: Float, D: Data<Elem = F>>(m: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
    invert_with_tolerance(m, default_pivot_tolerance(m.nrows()))
}

/// Invert a square matrix with an explicit relative pivot tolerance
///
/// The matrix is first equilibrated to `D M D` with `D = diag(1 / sqrt|m_jj|)`, so that
/// rescaling the variables behind a normal matrix does not change the outcome. Zero diagonal
/// entries are left unscaled. Every pivot of the equilibrated matrix is compared against
/// `tolerance * max|a_ij|`; a pivot at or below that threshold means the matrix is singular or
/// too ill-conditioned to invert reliably. The inverse is recovered as `D (D M D)⁻¹ D`.
///
/// # Errors
///
/// * [`Error::Shape`] if the matrix is empty
/// * [`Error::DimensionMismatch`] if the matrix is not square
/// * [`Error::SingularMatrix`] if the matrix contains non-finite values, is all zero or a pivot
///   falls below the threshold
pub fn invert_with_tolerance<F: Float, D: Data<Elem = F>>(
    m: &ArrayBase<D, Ix2>,
    tolerance: F,
) -> Result<Array2<F>> {
    let (n, ncols) = m.dim();
    if m.is_empty() {
        return Err(Error::Shape(format!(
            "cannot invert an empty {}x{} matrix",
            n, ncols
        )));
    }
    if n != ncols {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: ncols,
        });
    }
    if m.iter().any(|x| !x.is_finite()) {
        return Err(Error::SingularMatrix);
    }

    let d = m.diag().mapv(|x| {
        if x == F::zero() {
            F::one()
        } else {
            F::one() / x.abs().sqrt()
        }
    });
    let mut a = m.to_owned();
    for ((i, j), x) in a.indexed_iter_mut() {
        *x = *x * d[i] * d[j];
    }

    let scale = a.iter().fold(F::zero(), |acc, x| acc.max(x.abs()));
    if scale == F::zero() {
        return Err(Error::SingularMatrix);
    }
    let threshold = tolerance * scale;

    let mut inv = Array2::eye(n);

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| {
                a[[i, col]]
                    .abs()
                    .partial_cmp(&a[[j, col]].abs())
                    .unwrap_or(Ordering::Equal)
            })
            .unwrap_or(col);

        let pivot = a[[pivot_row, col]];
        if !pivot.is_finite() || pivot.abs() <= threshold {
            return Err(Error::SingularMatrix);
        }

        if pivot_row != col {
            for k in 0..n {
                a.swap([col, k], [pivot_row, k]);
                inv.swap([col, k], [pivot_row, k]);
            }
        }

        a.row_mut(col).mapv_inplace(|x| x / pivot);
        inv.row_mut(col).mapv_inplace(|x| x / pivot);

        let pivot_a = a.row(col).to_owned();
        let pivot_inv = inv.row(col).to_owned();
        for row in (0..n).filter(|&row| row != col) {
            let factor = a[[row, col]];
            if factor != F::zero() {
                a.row_mut(row).scaled_add(-factor, &pivot_a);
                inv.row_mut(row).scaled_add(-factor, &pivot_inv);
            }
        }
    }

    for ((i, j), x) in inv.indexed_iter_mut() {
        *x = *x * d[i] * d[j];
    }

    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::multiply;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use ndarray_rand::{rand::rngs::SmallRng, rand::SeedableRng, rand_distr::Uniform, RandomExt};

    #[test]
    fn inverts_two_by_two() {
        let m = array![[4., 7.], [2., 6.]];
        let inv = invert(&m).unwrap();

        assert_abs_diff_eq!(inv, array![[0.6, -0.7], [-0.2, 0.4]], epsilon = 1e-12);
    }

    #[test]
    fn identity_is_its_own_inverse() {
        let eye: Array2<f32> = Array2::eye(4);

        assert_abs_diff_eq!(invert(&eye).unwrap(), eye, epsilon = 1e-6);
    }

    #[test]
    fn needs_row_exchange() {
        // zero on the leading diagonal entry
        let m = array![[0., 1.], [1., 0.]];

        assert_abs_diff_eq!(invert(&m).unwrap(), m, epsilon = 1e-12);
    }

    #[test]
    fn product_with_inverse_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in [1, 3, 8, 20] {
            // diagonally dominant, hence well conditioned
            let m: Array2<f64> = Array2::random_using((n, n), Uniform::new(-1., 1.), &mut rng)
                + Array2::<f64>::eye(n) * (n as f64);
            let inv = invert(&m).unwrap();

            assert_abs_diff_eq!(multiply(&m, &inv).unwrap(), Array2::<f64>::eye(n), epsilon = 1e-10);
            assert_abs_diff_eq!(multiply(&inv, &m).unwrap(), Array2::<f64>::eye(n), epsilon = 1e-10);
        }
    }

    #[test]
    fn singular_matrix_fails() {
        let m = array![[1., 2., 3.], [2., 4., 6.], [0., 1., 1.]];

        assert_eq!(invert(&m), Err(Error::SingularMatrix));
    }

    #[test]
    fn zero_matrix_fails() {
        let m = Array2::<f64>::zeros((3, 3));

        assert_eq!(invert(&m), Err(Error::SingularMatrix));
    }

    #[test]
    fn non_finite_entries_fail() {
        let m = array![[1., f64::NAN], [0., 1.]];

        assert_eq!(invert(&m), Err(Error::SingularMatrix));
    }

    #[test]
    fn nearly_singular_matrix_respects_tolerance() {
        let m = array![[1., 1.], [1., 1. + 1e-9]];

        assert!(invert(&m).is_ok());
        assert_eq!(
            invert_with_tolerance(&m, 1e-6),
            Err(Error::SingularMatrix)
        );
    }

    #[test]
    fn rescaled_variables_do_not_change_singularity() {
        // normal matrix of an intercept, a feature in the 1e5 range and one in the 1e-2 range
        let m = array![[1., 2., 1.], [2., 5., 2.], [1., 2., 3.]];
        let d = array![1., 4e5, 2e-2];
        let scaled = Array2::from_shape_fn((3, 3), |(i, j)| m[[i, j]] * d[i] * d[j]);

        let inv = invert(&scaled).unwrap();
        let unscaled = Array2::from_shape_fn((3, 3), |(i, j)| inv[[i, j]] * d[i] * d[j]);
        assert_abs_diff_eq!(unscaled, invert(&m).unwrap(), epsilon = 1e-10);

        let collinear = array![[1., 2., 3.], [2., 4., 6.], [3., 6., 9.]];
        let scaled = Array2::from_shape_fn((3, 3), |(i, j)| collinear[[i, j]] * d[i] * d[j]);
        assert_eq!(invert(&scaled), Err(Error::SingularMatrix));
    }

    #[test]
    fn non_square_matrix_fails() {
        let m = array![[1., 2., 3.], [4., 5., 6.]];

        assert_eq!(
            invert(&m),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn empty_matrix_fails() {
        let m = Array2::<f64>::zeros((0, 0));

        assert!(matches!(invert(&m), Err(Error::Shape(_))));
    }
}
