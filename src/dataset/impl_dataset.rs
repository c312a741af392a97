use super::{AsSingleTargets, DatasetBase, DatasetView, Float, Records};
use ndarray::{ArrayBase, ArrayView1, Data, Ix2};

/// Implementation without constraints on records and targets
///
/// This implementation block provides methods for the creation and access of a dataset.
impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dataset = Dataset::new(records, targets);
    /// ```
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase { records, targets }
    }

    /// Returns reference to the records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Returns reference to the targets
    pub fn targets(&self) -> &T {
        &self.targets
    }
}

impl<R: Records, T: AsSingleTargets> DatasetBase<R, T> {
    /// Number of target values
    pub fn ntargets(&self) -> usize {
        self.targets.as_single_targets().len()
    }
}

impl<R: Records, T: AsSingleTargets> AsSingleTargets for DatasetBase<R, T> {
    type Elem = T::Elem;

    fn as_single_targets(&self) -> ArrayView1<T::Elem> {
        self.targets.as_single_targets()
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsSingleTargets<Elem = F>> DatasetBase<ArrayBase<D, Ix2>, T> {
    /// Creates a view of a dataset
    pub fn view(&self) -> DatasetView<'_, F> {
        DatasetBase::new(self.records.view(), self.targets.as_single_targets())
    }
}
