//! Provide traits for different classes of algorithms
//!

use crate::dataset::{DatasetBase, Float, Records};
use crate::error::Result;
use ndarray::{ArrayBase, Data, Ix2};
use std::convert::From;

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// in linear regression this is a set of coefficients, from which predictions can be derived.
/// The hyperparameters of an algorithm implement `Fit` and the fitted model is returned as
/// `Self::Object`.
pub trait Fit<R: Records, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> std::result::Result<Self::Object, E>;
}

/// Predict with model
///
/// This trait assumes the `PredictInplace` implementation and provides additional input/output
/// combinations.
///
/// # Provided implementation
///
/// * Array2 -> Result<Array1>
/// * &DatasetBase -> Result<Array1>
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

/// Predict with model into a mutable reference of targets.
///
/// Prediction fails when the records do not agree with the fitted model or with the provided
/// target buffer. The buffer is left untouched in that case.
pub trait PredictInplace<R: Records, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T) -> Result<()>;

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

impl<'a, F, D, T, O> Predict<&'a ArrayBase<D, Ix2>, Result<T>> for O
where
    F: Float,
    D: Data<Elem = F>,
    O: PredictInplace<ArrayBase<D, Ix2>, T>,
{
    fn predict(&self, records: &'a ArrayBase<D, Ix2>) -> Result<T> {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets)?;
        Ok(targets)
    }
}

impl<'a, R, T, S, O> Predict<&'a DatasetBase<R, T>, Result<S>> for O
where
    R: Records,
    O: PredictInplace<R, S>,
{
    fn predict(&self, ds: &'a DatasetBase<R, T>) -> Result<S> {
        let mut targets = self.default_target(ds.records());
        self.predict_inplace(ds.records(), &mut targets)?;
        Ok(targets)
    }
}
