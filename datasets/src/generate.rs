//! Utility functions for randomly generating linear datasets

use linreg::Dataset;
use ndarray::{Array, Array1, Array2, ArrayBase, Data, Ix1};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, Uniform},
    RandomExt,
};

/// Generate `num_rows` samples of the linear model `y = bias + X·weights + noise`
///
/// Every feature is drawn from `feat_distr` and every target receives an independent sample of
/// `noise_distr`. The number of features is the length of `weights`.
///
/// # Example
/// ```
/// use linreg_datasets::generate::linear;
/// use ndarray::array;
/// use ndarray_rand::rand_distr::{Normal, Uniform};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let ds = linear(
///     100,
///     &array![1.5, -2.],
///     0.5,
///     Uniform::new(-1., 1.),
///     Normal::new(0., 0.1).unwrap(),
///     &mut rng,
/// );
/// assert_eq!(ds.records().dim(), (100, 2));
/// ```
pub fn linear(
    num_rows: usize,
    weights: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    bias: f64,
    feat_distr: impl Distribution<f64>,
    noise_distr: impl Distribution<f64>,
    rng: &mut impl Rng,
) -> Dataset<f64> {
    let features: Array2<f64> = Array::random_using((num_rows, weights.len()), feat_distr, rng);
    let noise: Array1<f64> = Array::random_using(num_rows, noise_distr, rng);
    let targets = features.dot(weights) + bias + noise;

    Dataset::new(features, targets)
}

/// Special case of [`linear`] with features uniform in `[-10, 10)` and without noise
pub fn noiseless_linear(
    num_rows: usize,
    weights: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    bias: f64,
    rng: &mut impl Rng,
) -> Dataset<f64> {
    let features: Array2<f64> =
        Array::random_using((num_rows, weights.len()), Uniform::new(-10., 10.), rng);
    let targets = features.dot(weights) + bias;

    Dataset::new(features, targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use ndarray_rand::rand_distr::Normal;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_noiseless_linear() {
        let mut rng = SmallRng::seed_from_u64(42);
        let weights = array![2., -1., 0.5];
        let ds = noiseless_linear(20, &weights, 3., &mut rng);

        assert_eq!(ds.records().dim(), (20, 3));
        assert!(ds.records().iter().all(|x| (-10. ..10.).contains(x)));
        for (row, target) in ds.records().rows().into_iter().zip(ds.targets()) {
            assert_abs_diff_eq!(row.dot(&weights) + 3., *target, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linear_noise_is_added() {
        let mut rng = SmallRng::seed_from_u64(42);
        let weights = array![1.];
        let ds = linear(
            1000,
            &weights,
            0.,
            Uniform::new(0., 1.),
            Normal::new(0., 1.).unwrap(),
            &mut rng,
        );

        let residuals = ds.targets() - &ds.records().column(0);
        let mean = residuals.sum() / 1000.;
        let var = residuals.mapv(|x| (x - mean) * (x - mean)).sum() / 1000.;

        assert_abs_diff_eq!(mean, 0., epsilon = 0.2);
        assert_abs_diff_eq!(var, 1., epsilon = 0.2);
    }

    #[test]
    fn test_zero_rows() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ds = noiseless_linear(0, &array![1., 2.], 0., &mut rng);

        assert_eq!(ds.records().dim(), (0, 2));
        assert!(ds.targets().is_empty());
    }
}
