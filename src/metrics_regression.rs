//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables. Every metric
//! compares two index-aligned vectors of equal, non-zero length.

use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

use crate::dataset::{AsSingleTargets, DatasetBase, Float, Records};
use crate::error::{Error, Result};

/// Element-wise difference of two target vectors
fn residuals<F: Float>(lhs: ArrayView1<F>, rhs: ArrayView1<F>) -> Result<Array1<F>> {
    if lhs.len() != rhs.len() {
        return Err(Error::DimensionMismatch {
            expected: rhs.len(),
            found: lhs.len(),
        });
    }
    if lhs.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(&lhs - &rhs)
}

/// Regression metrices trait for single targets
///
/// The receiver is usually the prediction and `compare_to` the ground truth, for example
/// ```ignore
/// let mse = prediction.mean_squared_error(&dataset)?;
/// ```
///
/// # Errors
///
/// All metrics fail with [`Error::DimensionMismatch`] if both vectors differ in length and with
/// [`Error::EmptyInput`] if they are empty.
pub trait Regression<F: Float, T: AsSingleTargets<Elem = F>>: AsSingleTargets<Elem = F> {
    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: T) -> Result<F> {
        let diff = residuals(self.as_single_targets(), compare_to.as_single_targets())?;

        Ok(diff.iter().fold(F::zero(), |acc, x| acc.max(x.abs())))
    }

    /// Mean error between two continuous variables
    fn mean_absolute_error(&self, compare_to: T) -> Result<F> {
        let diff = residuals(self.as_single_targets(), compare_to.as_single_targets())?;
        let n = F::cast(diff.len());

        Ok(diff.mapv(|x| x.abs()).sum() / n)
    }

    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: T) -> Result<F> {
        let diff = residuals(self.as_single_targets(), compare_to.as_single_targets())?;
        let n = F::cast(diff.len());

        Ok(diff.mapv(|x| x * x).sum() / n)
    }

    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// The variance is taken around the mean of `compare_to`. If `compare_to` is constant the
    /// score is `1.0` for a perfect match and `0.0` otherwise.
    fn r2(&self, compare_to: T) -> Result<F> {
        let compare_to = compare_to.as_single_targets();
        let diff = residuals(self.as_single_targets(), compare_to.view())?;

        let mean = compare_to.sum() / F::cast(compare_to.len());
        let ss_res = diff.mapv(|x| x * x).sum();
        let ss_tot = compare_to.mapv(|x| (x - mean) * (x - mean)).sum();

        if ss_tot == F::zero() {
            if ss_res == F::zero() {
                Ok(F::one())
            } else {
                Ok(F::zero())
            }
        } else {
            Ok(F::one() - ss_res / ss_tot)
        }
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsSingleTargets<Elem = F>> Regression<F, T>
    for ArrayBase<D, Ix1>
{
}

impl<F: Float, R: Records, T1: AsSingleTargets<Elem = F>, T2: AsSingleTargets<Elem = F>>
    Regression<F, T2> for DatasetBase<R, T1>
{
}
