use linreg::prelude::*;
use linreg_ols::{LinearRegression, Result};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> Result<()> {
    // apartment sizes in m² and their prices
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = linreg_datasets::housing(&mut rng);

    let model = LinearRegression::params().fit(&dataset)?;

    println!("intercept:      {:.2}", model.intercept());
    println!("price per m²:   {:.2}", model.params()[0]);

    let predicted = model.predict(&dataset)?;
    let mse = predicted.mean_squared_error(&dataset)?;
    println!("mean squared error: {:.2}", mse);
    println!("r2 score:           {:.4}", predicted.r2(&dataset)?);

    println!("{:>10} {:>12} {:>12}", "size", "price", "predicted");
    for ((size, price), pred) in dataset
        .records()
        .column(0)
        .iter()
        .zip(dataset.targets())
        .zip(&predicted)
    {
        println!("{:>10.1} {:>12.0} {:>12.0}", size, price, pred);
    }

    Ok(())
}
