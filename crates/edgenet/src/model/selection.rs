//! Cross-validated hyperparameter selection.
//!
//! Wires fold resolution, the cross-validated loss, and the trust-region
//! optimizer together. The search runs over the free dimensions only:
//! lambda is always searched, each psi is searched only when its
//! [`PsiSpec`](super::PsiSpec) says so; fixed dimensions are pinned before
//! every loss evaluation. The returned result carries the fold assignment
//! actually used, so a caller can refit deterministically on the full data
//! with the selected triple.

use crate::data::{CvData, FoldAssignment, ModelData};
use crate::error::Result;
use crate::optim::minimize;
use crate::training::{CvLoss, Shrinkage, TrainingLogger};
use crate::utils::run_with_threads;

use super::config::{Folds, PsiSpec, SelectionConfig};

/// Upper bound of the lambda search interval.
///
/// Wide enough to contain any realistic sparsity penalty; the soft
/// threshold saturates long before this on standardized data.
pub const LAMBDA_UPPER: f64 = 100.0;

/// Upper bound of each psi search interval.
pub const PSI_UPPER: f64 = 10_000.0;

/// Outcome of a model-selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSelectionResult {
    /// The selected shrinkage triple (best point observed).
    pub shrinkage: Shrinkage,
    /// The fold assignment actually used (1-based, length n).
    pub fold_ids: Vec<usize>,
    /// Cross-validated loss at the selected triple.
    pub loss: f64,
    /// Number of objective evaluations consumed by the search.
    pub n_evaluations: usize,
    /// True when the optimizer ran out of evaluations before its radius
    /// converged. Non-fatal: the best triple found is still returned.
    pub budget_exhausted: bool,
}

/// Select shrinkage hyperparameters by k-fold cross-validation.
///
/// Folds are resolved first: an explicit assignment is validated and used
/// verbatim, a fold count triggers seeded generation. The optimizer starts
/// at the origin with bounds lambda ∈ [0, [`LAMBDA_UPPER`]] and
/// psi ∈ [0, [`PSI_UPPER`]].
///
/// # Errors
///
/// `InvalidDimensions` for an unusable fold specification (wrong assignment
/// length, gap in fold coverage, fold count outside `2..=n`).
pub fn select(data: &ModelData, config: &SelectionConfig) -> Result<ModelSelectionResult> {
    let folds = match &config.folds {
        Folds::Count(k) => FoldAssignment::generate(data.n_samples(), *k, config.seed)?,
        Folds::Assignment(ids) => FoldAssignment::from_ids(ids.clone(), data.n_samples())?,
    };
    let cv = CvData::new(data, folds)?;
    let logger = TrainingLogger::new(config.verbosity);

    // Free search space: lambda, then each psi that isn't pinned.
    let n_free = 1 + config.psi_gx.is_search() as usize + config.psi_gy.is_search() as usize;
    let start = vec![0.0; n_free];
    let lower = vec![0.0; n_free];
    let mut upper = vec![LAMBDA_UPPER];
    if config.psi_gx.is_search() {
        upper.push(PSI_UPPER);
    }
    if config.psi_gy.is_search() {
        upper.push(PSI_UPPER);
    }

    let assemble = |free: &[f64]| -> Shrinkage {
        let mut values = free.iter().copied();
        let lambda = values.next().expect("lambda is always searched");
        let psi_gx = match config.psi_gx {
            PsiSpec::Fixed(v) => v,
            PsiSpec::Search => values.next().expect("free psi_gx value"),
        };
        let psi_gy = match config.psi_gy {
            PsiSpec::Fixed(v) => v,
            PsiSpec::Search => values.next().expect("free psi_gy value"),
        };
        Shrinkage::new(lambda, psi_gx, psi_gy)
    };

    let optimum = run_with_threads(config.n_threads, |parallelism| {
        let loss = CvLoss::new(&cv, config.convergence, parallelism, logger);
        let mut evaluation = 0usize;
        minimize(
            |free: &[f64]| {
                let shrinkage = assemble(free);
                let value = loss.evaluate(&shrinkage);
                evaluation += 1;
                logger.log_evaluation(evaluation, &shrinkage, value);
                value
            },
            &start,
            &lower,
            &upper,
            &config.optimizer,
        )
    });

    Ok(ModelSelectionResult {
        shrinkage: assemble(&optimum.point),
        fold_ids: cv.folds().ids().to_vec(),
        loss: optimum.value,
        n_evaluations: optimum.n_evaluations,
        budget_exhausted: optimum.budget_exhausted,
    })
}
