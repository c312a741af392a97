//! Ordinary Least Squares
use log::{debug, warn};
use ndarray::{s, Array1, Array2, ArrayBase, ArrayView1, CowArray, Data, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use linreg::dataset::{AsSingleTargets, DatasetBase};
use linreg::linalg::{
    add_bias_column, column, default_pivot_tolerance, invert_with_tolerance, multiply, transpose,
};
use linreg::traits::{Fit, Predict, PredictInplace};
use linreg::Float;

use crate::error::{LinearError, Result};
use crate::hyperparams::{LinearRegressionParams, LinearRegressionValidParams};

/// An ordinary least squares linear regression model.
///
/// LinearRegression fits a linear model to minimize the residual sum of
/// squares between the observed targets in the dataset, and the targets
/// predicted by the linear approximation.
///
/// Ordinary least squares regression solves the overconstrainted model
///
/// y = Xw + b
///
/// by finding w and b which minimize the L_2 norm ||y - Xw - b||_2.
///
/// The minimizer is computed in closed form from the normal equations
/// β = (XᵀX)⁻¹Xᵀy, where a leading column of ones in X carries the intercept b.
/// The inverse is obtained by Gauss-Jordan elimination, so collinear features
/// or fewer samples than coefficients are reported as
/// [`SingularMatrix`](linreg::Error::SingularMatrix) instead of producing a
/// meaningless model.
///
/// ## Examples
///
/// Here's an example on how to train a linear regression model and score its predictions
/// ```rust
/// use linreg::prelude::*;
/// use linreg_ols::LinearRegression;
/// use ndarray::array;
///
/// let dataset = Dataset::new(array![[1.], [2.], [3.], [4.]], array![2., 4., 6., 8.]);
/// let model = LinearRegression::params().fit(&dataset)?;
/// let pred = model.predict(&dataset)?;
/// let mse = pred.mean_squared_error(&dataset)?;
/// assert!(mse < 1e-10);
/// # Ok::<(), linreg_ols::LinearError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearRegression;

impl LinearRegression {
    /// Create default hyper parameters for an ordinary least squares fit
    pub fn params<F: Float>() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }
}

impl<F: Float> LinearRegressionParams<F> {
    /// Fit a model to `dataset` and predict the targets of its own records
    ///
    /// Returns the predictions index-aligned with the records. Use [`Fit::fit`] instead when the
    /// coefficients are needed or the model predicts other records.
    pub fn fit_predict<D, T>(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Array1<F>>
    where
        D: Data<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let model = <Self as Fit<ArrayBase<D, Ix2>, T, LinearError>>::fit(self, dataset)?;

        Ok(model.predict(dataset.records())?)
    }
}

/// A fitted linear regression model which can be used for making predictions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression<F> {
    intercept: F,
    params: Array1<F>,
}

impl<F: Float, D: Data<Elem = F>, T: AsSingleTargets<Elem = F>>
    Fit<ArrayBase<D, Ix2>, T, LinearError> for LinearRegressionValidParams<F>
{
    type Object = FittedLinearRegression<F>;

    /// Fit a linear regression model given a feature matrix `X` and a target
    /// variable `y`.
    ///
    /// The feature matrix `X` must have shape `(n_samples, n_features)`
    ///
    /// The target variable `y` must have shape `(n_samples)`
    ///
    /// Returns a `FittedLinearRegression` object which contains the fitted
    /// parameters and can be used to `predict` values of the target variable
    /// for new feature values.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let x = dataset.records();
        let y = dataset.as_single_targets();

        let (n_samples, n_features) = x.dim();
        if n_samples == 0 {
            return Err(linreg::Error::EmptyInput.into());
        }
        if y.len() != n_samples {
            return Err(linreg::Error::DimensionMismatch {
                expected: n_samples,
                found: y.len(),
            }
            .into());
        }

        debug!(
            "fitting ordinary least squares on {} samples with {} features (intercept: {})",
            n_samples, n_features, self.with_intercept
        );

        let x: CowArray<F, Ix2> = if self.with_intercept {
            add_bias_column(x).into()
        } else {
            x.view().into()
        };
        let coefficients = solve_normal_equations(&x, y, self.pivot_tolerance)?;

        if self.with_intercept {
            Ok(FittedLinearRegression {
                intercept: coefficients[0],
                params: coefficients.slice(s![1..]).to_owned(),
            })
        } else {
            Ok(FittedLinearRegression {
                intercept: F::zero(),
                params: coefficients,
            })
        }
    }
}

/// Find the b that minimizes the 2-norm of X b - y by solving (XᵀX) b = Xᵀy
/// with an explicit inverse of XᵀX
fn solve_normal_equations<F, D>(
    x: &ArrayBase<D, Ix2>,
    y: ArrayView1<F>,
    pivot_tolerance: Option<F>,
) -> Result<Array1<F>>
where
    F: Float,
    D: Data<Elem = F>,
{
    let xt = transpose(x)?;
    let xtx = multiply(&xt, x)?;
    let xty = multiply(&xt, &column(&y))?;

    let tolerance = pivot_tolerance.unwrap_or_else(|| default_pivot_tolerance(xtx.nrows()));
    let inverse = invert_with_tolerance(&xtx, tolerance).map_err(|err| {
        if err == linreg::Error::SingularMatrix {
            warn!(
                "normal matrix of size {} is singular, the features may be collinear",
                xtx.nrows()
            );
        }
        err
    })?;

    let coefficients: Array2<F> = multiply(&inverse, &xty)?;
    Ok(coefficients.column(0).to_owned())
}

/// View the fitted parameters and make predictions with a fitted
/// linear regresssion model.
impl<F: Float> FittedLinearRegression<F> {
    /// Create a model from known coefficients
    pub fn from_coefficients(intercept: F, params: Array1<F>) -> Self {
        FittedLinearRegression { intercept, params }
    }

    /// Get the fitted parameters
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to linear model
    /// learned from the training data distribution.
    ///
    /// Fails with a dimension mismatch if `X` does not have one column per
    /// fitted parameter or `y` does not have one entry per sample.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) -> linreg::Result<()> {
        if x.ncols() != self.params.len() {
            return Err(linreg::Error::DimensionMismatch {
                expected: self.params.len(),
                found: x.ncols(),
            });
        }
        if x.nrows() != y.len() {
            return Err(linreg::Error::DimensionMismatch {
                expected: x.nrows(),
                found: y.len(),
            });
        }

        *y = x.dot(&self.params) + self.intercept;
        Ok(())
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}
