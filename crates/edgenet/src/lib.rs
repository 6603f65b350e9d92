//! edgenet: graph-regularized, sparsity-penalized linear regression.
//!
//! Fits linear models whose coefficients are penalized both by an L1
//! sparsity term and by structural priors encoded as weighted graphs over
//! the covariates and over the responses, and selects the three shrinkage
//! hyperparameters (lambda, psi_gx, psi_gy) automatically via k-fold
//! cross-validation wrapped around a bound-constrained, derivative-free
//! trust-region search.
//!
//! # Key Types
//!
//! - [`ModelData`] / [`CvData`] - validated data containers with precomputed
//!   cross-products and fold assignments
//! - [`Edgenet`] / [`EdgenetConfig`] - fitting a model for a fixed triple
//! - [`selection::select`] / [`SelectionConfig`] - cross-validated
//!   hyperparameter selection
//! - [`Family`] - Gaussian or Binomial response behavior
//!
//! # Fitting
//!
//! ```
//! use edgenet::{Edgenet, EdgenetConfig, Family, ModelData, Shrinkage};
//! use ndarray::{array, Array2};
//!
//! let x = array![[1.0, 0.2], [0.1, 1.0], [1.0, 1.0], [0.3, 0.4]];
//! let y = array![[1.1], [0.9], [2.1], [0.6]];
//! let gx = Array2::<f64>::zeros((2, 2));
//! let gy = Array2::<f64>::zeros((1, 1));
//! let data = ModelData::new(x, y, gx.view(), gy.view(), Family::Gaussian)?;
//!
//! let fitted = Edgenet::new(
//!     EdgenetConfig::builder()
//!         .shrinkage(Shrinkage::new(0.1, 0.0, 0.0))
//!         .build(),
//! )
//! .fit(&data);
//! assert!(fitted.summary().converged);
//! # Ok::<(), edgenet::EdgenetError>(())
//! ```
//!
//! # Model Selection
//!
//! Use [`SelectionConfig::builder`] to choose folds and pin or free the
//! graph weights, then [`selection::select`]. The returned triple and fold
//! assignment let you refit deterministically on the full data.

// Re-export approx traits for users who want to compare fitted coefficients
pub use approx;

pub mod data;
pub mod error;
pub mod family;
pub mod model;
pub mod optim;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Data containers
pub use data::{CvData, FoldAssignment, ModelData};

// Errors
pub use error::{EdgenetError, Result};

// Family strategy
pub use family::Family;

// High-level model types
pub use model::{
    selection, Edgenet, EdgenetConfig, FittedEdgenet, Folds, LinearModel, ModelSelectionResult,
    PsiSpec, SelectionConfig,
};

// Training types
pub use training::{
    fit_coordinate_descent, ConvergenceConfig, CvLoss, FitSummary, Shrinkage, TrainingLogger,
    Verbosity,
};

// Optimizer
pub use optim::{minimize, Optimum, TrustRegionOptions};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
