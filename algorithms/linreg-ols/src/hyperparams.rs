#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use linreg::{Float, ParamGuard};

use crate::error::{LinearError, Result};

/// A verified hyper-parameter set ready for fitting an ordinary least squares model
///
/// See [`LinearRegressionParams`] for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    pub(crate) with_intercept: bool,
    pub(crate) pivot_tolerance: Option<F>,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn with_intercept(&self) -> bool {
        self.with_intercept
    }

    pub fn pivot_tolerance(&self) -> Option<F> {
        self.pivot_tolerance
    }
}

/// A hyper-parameter set for ordinary least squares
///
/// The parameter set can be verified into a [`LinearRegressionValidParams`] by calling
/// [ParamGuard::check](Self::check). It is also possible to directly fit a model with
/// [Fit::fit](linreg::traits::Fit::fit) which implicitely verifies the parameter set prior to the
/// model estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [with_intercept](Self::with_intercept) | `true` | Fit a bias term | `false`, `true` |
/// | [pivot_tolerance](Self::pivot_tolerance) | `1000 * n * eps` | Relative pivot below which `XᵀX` is singular | `[0, inf)` |
///
/// # Errors
///
/// Returns [`InvalidPivotTolerance`](LinearError::InvalidPivotTolerance) if the tolerance is
/// negative or not finite.
///
/// # Example
///
/// ```rust
/// use linreg::prelude::*;
/// use linreg_ols::{LinearError, LinearRegression};
/// use ndarray::array;
///
/// let ds = Dataset::new(array![[1.0], [2.0], [3.0]], array![2.0, 4.0, 6.0]);
///
/// // fit through the origin
/// let unchecked_params = LinearRegression::params().with_intercept(false);
///
/// // fit model with unchecked parameter set
/// let model = unchecked_params.fit(&ds)?;
///
/// // transform into a verified parameter set
/// let checked_params = unchecked_params.check()?;
///
/// // Regenerate model with the verified parameters, this only returns
/// // errors originating from the fitting process
/// let model = checked_params.fit(&ds)?;
/// # Ok::<(), LinearError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit an ordinary least squares model
impl<F: Float> LinearRegressionParams<F> {
    /// Create default linear regression hyper parameters
    ///
    /// By default, an intercept will be fitted. To disable fitting an
    /// intercept, call `.with_intercept(false)` before calling `.fit()`.
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            with_intercept: true,
            pivot_tolerance: None,
        })
    }

    /// Configure the model to fit an intercept.
    /// Defaults to `true` if not set.
    pub fn with_intercept(mut self, with_intercept: bool) -> Self {
        self.0.with_intercept = with_intercept;
        self
    }

    /// Set the relative pivot tolerance used when inverting `XᵀX`.
    ///
    /// A pivot is treated as zero when its magnitude is at or below `pivot_tolerance` times the
    /// largest entry of `XᵀX`. Larger values reject nearly collinear features earlier.
    ///
    /// Defaults to `1000 * n * eps` for `n` coefficients if not set.
    pub fn pivot_tolerance(mut self, pivot_tolerance: F) -> Self {
        self.0.pivot_tolerance = Some(pivot_tolerance);
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = LinearError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        match self.0.pivot_tolerance {
            Some(tolerance) if !tolerance.is_finite() || tolerance < F::zero() => Err(
                LinearError::InvalidPivotTolerance(tolerance.to_f32().unwrap_or(f32::NAN)),
            ),
            _ => Ok(&self.0),
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
