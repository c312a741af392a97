//! `linreg` provides the building blocks for closed-form linear regression in Rust.
//!
//! The crate contains everything an estimator needs apart from the estimator itself: a dataset
//! container, the `Fit`/`Predict` traits, hyperparameter checking, dense matrix helpers for the
//! normal equations and regression metrics. Algorithms live in their own crates, for example
//! `linreg-ols` fits ordinary least squares via the normal equations
//!
//! ```ignore
//! β = (XᵀX)⁻¹Xᵀy
//! ```
//!
//! ## Matrix helpers
//!
//! The [`linalg`] module provides transpose, multiplication, bias augmentation and a
//! Gauss-Jordan matrix inversion with partial pivoting. Every helper validates the shapes of its
//! operands and reports problems as an [`Error`] instead of panicking.
//!
//! ## Metrics
//!
//! The [`metrics::Regression`] trait scores predictions against ground truth:
//!
//! ```rust
//! use linreg::prelude::*;
//! use ndarray::array;
//!
//! let truth = array![2., 4., 6., 8.];
//! let prediction = array![2., 4., 6., 9.];
//! assert_eq!(prediction.mean_squared_error(&truth)?, 0.25);
//! # Ok::<(), linreg::Error>(())
//! ```

pub mod benchmarks;
pub mod dataset;
pub mod error;
pub mod linalg;
mod metrics_regression;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float};
pub use error::{Error, Result};
pub use param_guard::ParamGuard;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
