//! Cross-validated hyperparameter selection example.
//!
//! Searches lambda and psi_gx (psi_gy pinned to zero), then refits on the
//! full data with the selected triple.
//!
//! Run with:
//! ```bash
//! cargo run --example model_selection
//! ```

use edgenet::{
    selection, Edgenet, EdgenetConfig, Family, Folds, ModelData, PsiSpec, SelectionConfig,
    Verbosity,
};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn main() {
    // =========================================================================
    // 1. Prepare Data
    // =========================================================================
    let n_samples = 120;
    let n_covariates = 6;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    let mut x = Array2::<f64>::zeros((n_samples, n_covariates));
    for v in x.iter_mut() {
        *v = rng.gen_range(-1.0..1.0);
    }
    let mut y = Array2::<f64>::zeros((n_samples, 1));
    for i in 0..n_samples {
        y[[i, 0]] = 2.0 * x[[i, 0]] + 2.0 * x[[i, 1]] + 0.2 * rng.gen_range(-1.0..1.0);
    }

    // x0 and x1 carry the same signal; encode that as a prior edge.
    let mut gx = Array2::<f64>::zeros((n_covariates, n_covariates));
    gx[[0, 1]] = 1.0;
    gx[[1, 0]] = 1.0;
    let gy = Array2::<f64>::zeros((1, 1));

    let data = ModelData::new(x, y, gx.view(), gy.view(), Family::Gaussian)
        .expect("invalid input matrices");

    // =========================================================================
    // 2. Select Hyperparameters
    // =========================================================================
    let config = SelectionConfig::builder()
        .folds(Folds::Count(5))
        .psi_gy(PsiSpec::Fixed(0.0))
        .verbosity(Verbosity::Warning)
        .build();

    println!("Selecting shrinkage parameters over 5 folds...");
    let result = selection::select(&data, &config).expect("selection failed");

    println!("  lambda: {:.6}", result.shrinkage.lambda);
    println!("  psi_gx: {:.6}", result.shrinkage.psi_gx);
    println!("  psi_gy: {:.6}", result.shrinkage.psi_gy);
    println!("  cv loss: {:.6}", result.loss);
    println!("  evaluations: {}", result.n_evaluations);
    if result.budget_exhausted {
        println!("  note: evaluation budget exhausted before radius convergence");
    }

    // =========================================================================
    // 3. Refit on the Full Data
    // =========================================================================
    let fitted = Edgenet::new(
        EdgenetConfig::builder()
            .shrinkage(result.shrinkage)
            .build(),
    )
    .fit(&data);

    println!("\nfull-data refit (converged: {}):", fitted.summary().converged);
    for j in 0..n_covariates {
        println!("  coefficient x{}: {:+.4}", j, fitted.coefficients()[[j, 0]]);
    }
}
