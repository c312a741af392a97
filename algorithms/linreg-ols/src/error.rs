//! An error when fitting or applying an ordinary least squares model
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting or applying an ordinary least squares model
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearError {
    #[error("pivot tolerance should be finite and non-negative, but is {0}")]
    InvalidPivotTolerance(f32),
    #[error(transparent)]
    BaseCrate(#[from] linreg::Error),
}
