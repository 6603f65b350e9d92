//! End-to-end fitting scenarios.
//!
//! Covers the engine-level guarantees: OLS recovery without penalties,
//! exact zeros under heavy L1, graph-penalty neutrality for disconnected
//! priors, and finiteness of every fitted quantity.

use approx::assert_abs_diff_eq;
use edgenet::{
    fit_coordinate_descent, ConvergenceConfig, Edgenet, EdgenetConfig, Family, ModelData,
    Shrinkage,
};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rstest::rstest;

/// Random well-conditioned regression data: y = X·beta + noise.
fn random_regression(
    n: usize,
    p: usize,
    q: usize,
    noise: f64,
    seed: u64,
) -> (Array2<f64>, Array2<f64>) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut x = Array2::<f64>::zeros((n, p));
    for v in x.iter_mut() {
        *v = rng.gen_range(-1.0..1.0);
    }
    let mut beta = Array2::<f64>::zeros((p, q));
    for v in beta.iter_mut() {
        *v = rng.gen_range(-2.0..2.0);
    }
    let mut y = x.dot(&beta);
    for v in y.iter_mut() {
        *v += noise * rng.gen_range(-1.0..1.0);
    }
    (x, y)
}

fn gaussian_data(x: Array2<f64>, y: Array2<f64>) -> ModelData {
    let p = x.ncols();
    let q = y.ncols();
    let gx = Array2::<f64>::zeros((p, p));
    let gy = Array2::<f64>::zeros((q, q));
    ModelData::new(x, y, gx.view(), gy.view(), Family::Gaussian).unwrap()
}

fn tight_convergence() -> ConvergenceConfig {
    ConvergenceConfig {
        max_sweeps: 50_000,
        threshold: 1e-12,
    }
}

// =============================================================================
// OLS recovery
// =============================================================================

/// With all penalties at zero the fixed point of the coordinate updates is
/// the least-squares solution: the fitted coefficients must satisfy the
/// normal equations X'X·B = X'Y.
#[test]
fn unpenalized_fit_satisfies_normal_equations() {
    let (x, y) = random_regression(100, 10, 1, 0.1, 11);
    let data = gaussian_data(x, y);

    let (model, summary) =
        fit_coordinate_descent(&data, &Shrinkage::default(), &tight_convergence());
    assert!(summary.converged);

    let residual = &data.txx().dot(&model.coefficients()) - &data.txy();
    let max_residual = residual.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    assert!(
        max_residual < 1e-6,
        "normal-equation residual too large: {max_residual}"
    );
}

/// The n=100, p=10, q=1 scenario with identity prior graphs: an identity
/// adjacency carries only self-loops, which hold no structural information,
/// so with lambda = 0 the fit must match the ordinary least-squares solution
/// regardless of the psi weights.
#[test]
fn identity_priors_with_zero_lambda_match_ols() {
    let (x, y) = random_regression(100, 10, 1, 0.05, 23);
    let identity_x = Array2::<f64>::eye(10);
    let identity_y = Array2::<f64>::eye(1);
    let data = ModelData::new(
        x.clone(),
        y.clone(),
        identity_x.view(),
        identity_y.view(),
        Family::Gaussian,
    )
    .unwrap();

    let shrinkage = Shrinkage::new(0.0, 3.0, 7.0);
    let (model, summary) = fit_coordinate_descent(&data, &shrinkage, &tight_convergence());
    assert!(summary.converged);

    // identical to the plain unpenalized fit
    let plain = gaussian_data(x, y);
    let (reference, _) =
        fit_coordinate_descent(&plain, &Shrinkage::default(), &tight_convergence());
    for (a, b) in model.coefficients().iter().zip(reference.coefficients().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
    }

    let residual = &data.txx().dot(&model.coefficients()) - &data.txy();
    assert!(residual.iter().all(|v| v.abs() < 1e-6));
}

/// Orthogonal block design where the OLS solution is available in closed
/// form: X'X = 10·I, so B = X'Y / 10 exactly.
#[test]
fn orthogonal_design_recovers_closed_form_solution() {
    let n = 100;
    let p = 10;
    let mut x = Array2::<f64>::zeros((n, p));
    let mut y = Array2::<f64>::zeros((n, 1));
    for i in 0..n {
        let block = i / 10;
        x[[i, block]] = 1.0;
        y[[i, 0]] = block as f64 + 1.0;
    }
    let data = gaussian_data(x, y);

    let (model, _) = fit_coordinate_descent(&data, &Shrinkage::default(), &tight_convergence());

    let expected = &data.txy() / 10.0;
    for j in 0..p {
        assert_abs_diff_eq!(
            model.coefficient(j, 0),
            expected[[j, 0]],
            epsilon = 1e-6
        );
    }
    // fitted values already reproduce y exactly, so no intercept remains
    assert_abs_diff_eq!(model.intercept()[0], 0.0, epsilon = 1e-6);
}

// =============================================================================
// Sparsity
// =============================================================================

#[test]
fn heavy_lambda_produces_exact_zeros() {
    let (x, y) = random_regression(60, 8, 2, 0.1, 5);
    let data = gaussian_data(x, y);

    let (model, summary) = fit_coordinate_descent(
        &data,
        &Shrinkage::new(1e8, 0.0, 0.0),
        &ConvergenceConfig::default(),
    );

    assert!(summary.converged);
    assert!(model.coefficients().iter().all(|&b| b == 0.0));
}

#[test]
fn lambda_monotonically_increases_sparsity() {
    let (x, y) = random_regression(50, 12, 1, 0.5, 9);
    let data = gaussian_data(x, y);

    let nonzeros = |lambda: f64| {
        let (model, _) = fit_coordinate_descent(
            &data,
            &Shrinkage::new(lambda, 0.0, 0.0),
            &ConvergenceConfig {
                max_sweeps: 20_000,
                threshold: 1e-10,
            },
        );
        model.coefficients().iter().filter(|&&b| b != 0.0).count()
    };

    let dense = nonzeros(0.0);
    let mid = nonzeros(5.0);
    let sparse = nonzeros(50.0);
    assert!(dense >= mid);
    assert!(mid >= sparse);
}

// =============================================================================
// Graph penalties
// =============================================================================

/// A fully disconnected prior (all-zero adjacency) has a zero Laplacian, so
/// the graph term vanishes identically and the psi magnitude is irrelevant.
#[rstest]
#[case(0.0, 0.0)]
#[case(10.0, 0.0)]
#[case(0.0, 10.0)]
#[case(9999.0, 9999.0)]
fn disconnected_priors_are_neutral(#[case] psi_gx: f64, #[case] psi_gy: f64) {
    let (x, y) = random_regression(40, 5, 2, 0.2, 31);
    let data = gaussian_data(x, y);

    let (reference, _) = fit_coordinate_descent(
        &data,
        &Shrinkage::new(0.3, 0.0, 0.0),
        &tight_convergence(),
    );
    let (model, _) = fit_coordinate_descent(
        &data,
        &Shrinkage::new(0.3, psi_gx, psi_gy),
        &tight_convergence(),
    );
    assert_eq!(model, reference);
}

/// A strong response-side prior pulls the coefficient columns of connected
/// responses together.
#[test]
fn response_graph_couples_response_columns() {
    let (x, mut y) = random_regression(60, 4, 2, 0.0, 17);
    // make the two responses genuinely different
    for i in 0..y.nrows() {
        y[[i, 1]] = -0.5 * y[[i, 1]] + 0.3;
    }
    let gx = Array2::<f64>::zeros((4, 4));
    let gy = ndarray::array![[0.0, 1.0], [1.0, 0.0]];
    let data = ModelData::new(x, y, gx.view(), gy.view(), Family::Gaussian).unwrap();

    let gap = |psi_gy: f64| {
        let (model, _) = fit_coordinate_descent(
            &data,
            &Shrinkage::new(0.0, 0.0, psi_gy),
            &ConvergenceConfig {
                max_sweeps: 20_000,
                threshold: 1e-10,
            },
        );
        let b = model.coefficients();
        (0..4).map(|j| (b[[j, 0]] - b[[j, 1]]).abs()).sum::<f64>()
    };

    assert!(gap(5000.0) < gap(0.0));
}

// =============================================================================
// Robustness
// =============================================================================

#[rstest]
#[case(Family::Gaussian)]
#[case(Family::Binomial)]
fn coefficients_always_finite(#[case] family: Family) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(41);
    let n = 30;
    let p = 6;
    let mut x = Array2::<f64>::zeros((n, p));
    for v in x.iter_mut() {
        *v = rng.gen_range(-1.0..1.0);
    }
    // binary responses work for both families
    let mut y = Array2::<f64>::zeros((n, 1));
    for v in y.iter_mut() {
        *v = if rng.gen_bool(0.5) { 1.0 } else { 0.0 };
    }
    let gx = Array2::<f64>::zeros((p, p));
    let gy = Array2::<f64>::zeros((1, 1));
    let data = ModelData::new(x, y, gx.view(), gy.view(), family).unwrap();

    for max_sweeps in [0, 1, 5, 200] {
        let (model, _) = fit_coordinate_descent(
            &data,
            &Shrinkage::new(0.5, 1.0, 1.0),
            &ConvergenceConfig {
                max_sweeps,
                threshold: 1e-8,
            },
        );
        assert!(model.coefficients().iter().all(|b| b.is_finite()));
        assert!(model.intercept().iter().all(|b| b.is_finite()));
    }
}

#[test]
fn sweep_budget_exhaustion_is_soft() {
    let (x, y) = random_regression(40, 6, 1, 0.1, 2);
    let data = gaussian_data(x, y);

    let fitted = Edgenet::new(
        EdgenetConfig::builder()
            .convergence(ConvergenceConfig {
                max_sweeps: 1,
                threshold: 1e-14,
            })
            .build(),
    )
    .fit(&data);

    // one sweep cannot reach 1e-14: the result is flagged, not an error
    assert!(!fitted.summary().converged);
    assert_eq!(fitted.summary().n_sweeps, 1);
    assert!(fitted.coefficients().iter().all(|b| b.is_finite()));
}

#[test]
fn refitting_is_reentrant() {
    let (x, y) = random_regression(30, 4, 1, 0.2, 13);
    let data = gaussian_data(x, y);
    let shrinkage = Shrinkage::new(0.2, 0.0, 0.0);

    let (a, _) = fit_coordinate_descent(&data, &shrinkage, &tight_convergence());
    let (b, _) = fit_coordinate_descent(&data, &shrinkage, &tight_convergence());
    assert_eq!(a, b);
}

/// With a centered design, shifting every response by a constant moves only
/// the intercept, by exactly that constant.
#[test]
fn intercept_absorbs_response_shift_on_centered_design() {
    let (mut x, mut y) = random_regression(80, 5, 1, 0.0, 29);
    center_columns(&mut x);
    let data_centered = gaussian_data(x.clone(), y.clone());
    y += 100.0;
    let data_shifted = gaussian_data(x, y);

    let (centered, _) =
        fit_coordinate_descent(&data_centered, &Shrinkage::default(), &tight_convergence());
    let (shifted, _) =
        fit_coordinate_descent(&data_shifted, &Shrinkage::default(), &tight_convergence());

    for (a, b) in shifted
        .coefficients()
        .iter()
        .zip(centered.coefficients().iter())
    {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }
    assert_abs_diff_eq!(
        shifted.intercept()[0] - centered.intercept()[0],
        100.0,
        epsilon = 1e-6
    );
}

#[test]
fn prediction_pipeline_round_trip() {
    let n = 50;
    let mut x = Array2::<f64>::zeros((n, 2));
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(57);
    for v in x.iter_mut() {
        *v = rng.gen_range(-1.0..1.0);
    }
    center_columns(&mut x);
    let mut y = Array2::<f64>::zeros((n, 1));
    for i in 0..n {
        y[[i, 0]] = 2.0 * x[[i, 0]] - x[[i, 1]] + 0.5;
    }
    let data = gaussian_data(x.clone(), y.clone());

    let fitted = Edgenet::new(
        EdgenetConfig::builder()
            .convergence(tight_convergence())
            .build(),
    )
    .fit(&data);

    let preds = fitted.predict(x.view()).unwrap();
    let max_err = preds
        .iter()
        .zip(y.iter())
        .fold(0.0f64, |m, (p, t)| m.max((p - t).abs()));
    assert!(max_err < 1e-5, "round-trip prediction error {max_err}");
}

/// Subtract the column mean from every design column.
fn center_columns(x: &mut Array2<f64>) {
    for mut col in x.columns_mut() {
        let mean = col.mean().unwrap();
        col.mapv_inplace(|v| v - mean);
    }
}
