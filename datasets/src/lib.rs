//! `linreg-datasets` provides synthetic datasets ready to be used in tests, benches and examples.
//!
//! ## The Big Picture
//!
//! `linreg-datasets` is a crate in the `linreg` workspace. Every dataset is drawn from a known
//! linear model, so a fitted estimator can be compared against the coefficients which generated
//! the data.
//!
//! ## Current State
//!
//! Currently the following datasets are provided:
//!
//! * [`housing`]: apartment sizes in square metres and their prices
//! * [`generate::linear`]: features and targets from arbitrary distributions
//! * [`generate::noiseless_linear`]: exact targets for uniform features
//!
//! All generators take the random number generator as argument, so a seeded generator
//! reproduces the same dataset.
//!
//! ```
//! use linreg_datasets::housing;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let dataset = housing(&mut rng);
//! assert_eq!(dataset.records().ncols(), 1);
//! ```

pub mod generate;

use linreg::Dataset;
use ndarray::Array1;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::{Normal, Uniform};

/// Number of apartments in [`housing`]
pub const HOUSING_SAMPLES: usize = 50;
/// Price of an apartment without floor space
pub const HOUSING_BASE_PRICE: f64 = 50_000.;
/// Price per square metre
pub const HOUSING_PRICE_PER_M2: f64 = 2_500.;

/// Synthetic apartment prices
///
/// Records are a single column of floor space between 30m² and 200m², targets the price with a
/// normally distributed deviation (standard deviation 15 000) from
/// `HOUSING_BASE_PRICE + HOUSING_PRICE_PER_M2 * size`.
pub fn housing(rng: &mut impl Rng) -> Dataset<f64> {
    let weights = Array1::from_elem(1, HOUSING_PRICE_PER_M2);
    // parameters are constant and valid
    let noise = Normal::new(0., 15_000.).unwrap();

    generate::linear(
        HOUSING_SAMPLES,
        &weights,
        HOUSING_BASE_PRICE,
        Uniform::new(30., 200.),
        noise,
        rng,
    )
}
