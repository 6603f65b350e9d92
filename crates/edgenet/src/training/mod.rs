//! Training infrastructure: the coordinate-descent engine and the
//! cross-validated loss it powers.
//!
//! - [`fit_coordinate_descent`]: fit one model for a fixed shrinkage triple
//! - [`CvLoss`]: averaged held-out loss over k folds, the optimizer's objective
//! - [`Shrinkage`], [`ConvergenceConfig`], [`FitSummary`]: shared parameter
//!   and diagnostic types
//! - [`TrainingLogger`], [`Verbosity`]: progress output

mod coordinate_descent;
mod logger;
mod loss;

pub use coordinate_descent::fit_coordinate_descent;
pub(crate) use coordinate_descent::fit_with_logger;
pub use logger::{TrainingLogger, Verbosity};
pub use loss::CvLoss;

// =============================================================================
// Shared parameter types
// =============================================================================

/// The three shrinkage hyperparameters.
///
/// `lambda` controls sparsity (L1 soft threshold), `psi_gx`/`psi_gy` control
/// trust in the covariate and response prior graphs. All three are
/// non-negative; the external −1 "search me" sentinel never reaches this
/// type (see [`PsiSpec`](crate::model::PsiSpec)).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shrinkage {
    /// L1 penalty strength.
    pub lambda: f64,
    /// Weight of the covariate prior graph.
    pub psi_gx: f64,
    /// Weight of the response prior graph.
    pub psi_gy: f64,
}

impl Shrinkage {
    /// Convenience constructor.
    pub fn new(lambda: f64, psi_gx: f64, psi_gy: f64) -> Self {
        Self {
            lambda,
            psi_gx,
            psi_gy,
        }
    }
}

/// Stopping rule for the coordinate-descent sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceConfig {
    /// Maximum number of full sweeps before giving up.
    pub max_sweeps: usize,
    /// Convergence is declared when the maximum relative coefficient change
    /// over a sweep drops below this value.
    pub threshold: f64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            max_sweeps: 1_000,
            threshold: 1e-5,
        }
    }
}

/// Diagnostics attached to every fit result.
///
/// A fit that exhausts its sweep budget is not an error: the best-effort
/// coefficients are still returned, flagged here with `converged: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitSummary {
    /// Whether the relative-change criterion was met within the budget.
    pub converged: bool,
    /// Number of sweeps actually performed.
    pub n_sweeps: usize,
}
