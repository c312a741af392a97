//! Datasets
//!
//! This module implements the dataset struct and the helper traits used to pass feature matrices
//! and targets into the regression algorithms.
use ndarray::{
    Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2, NdFloat, OwnedRepr,
};

use num_traits::{FromPrimitive, NumCast};

use std::fmt;
use std::iter::Sum;

mod impl_dataset;
mod impl_records;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records of a dataset and
/// in its targets as well.
pub trait Float:
    FromPrimitive
    + NdFloat
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It pairs a matrix of records with the
/// targets observed for each of them. The dataset base is generic over the records and targets,
/// so owned arrays and views can be used interchangeably.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional vector with dimensionality (nsamples)
///
/// No shape agreement between records and targets is enforced on construction. The algorithms
/// consuming a dataset check it and report a mismatch as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,
}

/// Dataset
///
/// The most commonly used typed of dataset. It contains a number of records stored as an
/// `Array2` and a single continuous target per record stored as an `Array1`.
pub type Dataset<F> = DatasetBase<ArrayBase<OwnedRepr<F>, Ix2>, ArrayBase<OwnedRepr<F>, Ix1>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, F> = DatasetBase<ArrayView2<'a, F>, ArrayView1<'a, F>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Return a view on a single continuous target variable
pub trait AsSingleTargets {
    type Elem;

    fn as_single_targets(&self) -> ArrayView1<Self::Elem>;
}

impl<F: Float, D: Data<Elem = F>> AsSingleTargets for ArrayBase<D, Ix1> {
    type Elem = F;

    fn as_single_targets(&self) -> ArrayView1<F> {
        self.view()
    }
}

impl<T: AsSingleTargets> AsSingleTargets for &T {
    type Elem = T::Elem;

    fn as_single_targets(&self) -> ArrayView1<T::Elem> {
        (*self).as_single_targets()
    }
}

impl<F: Float> From<(Array2<F>, Array1<F>)> for Dataset<F> {
    fn from(rec_tar: (Array2<F>, Array1<F>)) -> Self {
        DatasetBase::new(rec_tar.0, rec_tar.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn dataset_reports_dimensions() {
        let dataset = Dataset::new(array![[1., 2.], [3., 4.], [5., 6.]], array![1., 2., 3.]);

        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.nfeatures(), 2);
        assert_eq!(dataset.targets(), &array![1., 2., 3.]);
    }

    #[test]
    fn dataset_from_tuple() {
        let dataset: Dataset<f32> = (array![[1f32], [2.]], array![3f32, 4.]).into();

        assert_eq!(dataset.records(), &array![[1f32], [2.]]);
        assert_eq!(dataset.as_single_targets(), array![3f32, 4.]);
    }

    #[test]
    fn view_keeps_records_and_targets() {
        let dataset = Dataset::new(array![[0f64, 1.], [2., 3.]], array![4., 5.]);
        let view = dataset.view();

        assert_eq!(view.records(), &dataset.records().view());
        assert_eq!(view.nsamples(), 2);
    }

    #[test]
    fn mismatched_lengths_are_accepted_on_construction() {
        let dataset = Dataset::new(array![[1.], [2.], [3.], [4.]], array![1., 2., 3.]);

        assert_eq!(dataset.nsamples(), 4);
        assert_eq!(dataset.ntargets(), 3);
    }
}
