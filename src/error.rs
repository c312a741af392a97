//! Error types in linreg
//!

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A matrix is empty or its rows differ in length
    #[error("malformed matrix: {0}")]
    Shape(String),
    /// The shapes of two operands are incompatible
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The matrix has no inverse or its inverse is numerically unstable
    #[error("matrix is singular or ill-conditioned")]
    SingularMatrix,
    /// An aggregate was requested over zero elements
    #[error("empty input")]
    EmptyInput,
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[cfg_attr(feature = "serde", serde(skip))]
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
