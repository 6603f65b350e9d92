//! High-level configuration with builder pattern.
//!
//! [`EdgenetConfig`] configures a single fit; [`SelectionConfig`] configures
//! a cross-validated hyperparameter search. Both use the `bon` builder for a
//! fluent API with per-field defaults.
//!
//! # Example
//!
//! ```
//! use edgenet::{EdgenetConfig, SelectionConfig, Shrinkage, PsiSpec, Folds};
//!
//! let fit = EdgenetConfig::builder()
//!     .shrinkage(Shrinkage::new(1.0, 0.0, 0.0))
//!     .build();
//!
//! let selection = SelectionConfig::builder()
//!     .folds(Folds::Count(5))
//!     .psi_gy(PsiSpec::Fixed(0.0))
//!     .seed(7)
//!     .build();
//! # let _ = (fit, selection);
//! ```

use bon::Builder;

use crate::optim::TrustRegionOptions;
use crate::training::{ConvergenceConfig, Shrinkage, Verbosity};

// =============================================================================
// PsiSpec
// =============================================================================

/// Whether a graph-weighting dimension is fixed or searched.
///
/// The external interface keeps the historical convention that a negative
/// value (canonically −1) means "search this dimension"; internally only
/// this explicit tri-state exists, so a sentinel can never be mistaken for a
/// real penalty value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PsiSpec {
    /// Pin the dimension to this value during selection.
    Fixed(f64),
    /// Let the optimizer search the dimension.
    #[default]
    Search,
}

impl PsiSpec {
    /// Map the external sentinel convention: negative means search,
    /// anything else is a fixed penalty value.
    pub fn from_sentinel(value: f64) -> Self {
        if value < 0.0 {
            PsiSpec::Search
        } else {
            PsiSpec::Fixed(value)
        }
    }

    /// True when the optimizer should search this dimension.
    #[inline]
    pub fn is_search(&self) -> bool {
        matches!(self, PsiSpec::Search)
    }
}

// =============================================================================
// Folds
// =============================================================================

/// Fold specification for model selection: a count to generate, or an
/// explicit per-sample assignment to use verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Folds {
    /// Generate an assignment with this many folds.
    Count(usize),
    /// Use this 1-based assignment vector exactly as given (validated
    /// against the sample count and for gap-free fold coverage).
    Assignment(Vec<usize>),
}

// =============================================================================
// EdgenetConfig
// =============================================================================

/// Configuration for a single fit with a fixed shrinkage triple.
#[derive(Debug, Clone, Default, Builder)]
pub struct EdgenetConfig {
    /// The shrinkage triple (lambda, psi_gx, psi_gy), all non-negative.
    #[builder(default)]
    pub shrinkage: Shrinkage,

    /// Stopping rule for the coordinate-descent sweeps.
    #[builder(default)]
    pub convergence: ConvergenceConfig,

    /// Progress output level.
    #[builder(default)]
    pub verbosity: Verbosity,
}

// =============================================================================
// SelectionConfig
// =============================================================================

/// Configuration for cross-validated hyperparameter selection.
#[derive(Debug, Clone, Builder)]
pub struct SelectionConfig {
    /// Fold count to generate, or an explicit assignment to use verbatim.
    #[builder(default = Folds::Count(10))]
    pub folds: Folds,

    /// Covariate-graph weight: fixed, or searched (the default).
    #[builder(default)]
    pub psi_gx: PsiSpec,

    /// Response-graph weight: fixed, or searched (the default).
    #[builder(default)]
    pub psi_gy: PsiSpec,

    /// Stopping rule for the per-fold coordinate-descent fits.
    #[builder(default)]
    pub convergence: ConvergenceConfig,

    /// Trust-region options for the hyperparameter search.
    #[builder(default)]
    pub optimizer: TrustRegionOptions,

    /// Seed for fold generation (ignored for explicit assignments).
    #[builder(default = 42)]
    pub seed: u64,

    /// Thread count: 0 = auto, 1 = sequential, >1 = exact count.
    #[builder(default)]
    pub n_threads: usize,

    /// Progress output level.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
