//!
//! `linreg-ols` fits linear models with ordinary least squares in pure Rust.
//!
//! ## The Big Picture
//!
//! `linreg-ols` is a crate in the `linreg` workspace. It builds on the dataset container, traits
//! and matrix helpers of the core crate and solves the normal equations
//!
//! ```ignore
//! β = (XᵀX)⁻¹Xᵀy
//! ```
//!
//! in closed form, optionally with an intercept carried by a leading column of ones.
//!
//! ## Current state
//!
//! `linreg-ols` provides:
//! - [`LinearRegressionParams`]: hyperparameters, checked with [`linreg::ParamGuard`]
//! - [`FittedLinearRegression`]: the fitted intercept and weights, used for prediction
//!
//! Fitting fails with [`linreg::Error::SingularMatrix`] when `XᵀX` cannot be inverted, which
//! happens for collinear features or fewer samples than coefficients.
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example housing
//! ```

mod error;
mod hyperparams;
mod ols;

pub use error::*;
pub use hyperparams::*;
pub use ols::*;
