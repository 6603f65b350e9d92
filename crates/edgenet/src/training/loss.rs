//! The cross-validated loss minimized during hyperparameter selection.

use crate::data::CvData;
use crate::utils::Parallelism;

use super::coordinate_descent::fit_coordinate_descent;
use super::logger::TrainingLogger;
use super::{ConvergenceConfig, Shrinkage};

/// Averaged held-out prediction loss over all folds.
///
/// This is the only interface the hyperparameter optimizer talks to. For a
/// candidate shrinkage triple, every fold's training complement is fit from
/// scratch and scored on its held-out samples with the family's loss
/// (squared error for Gaussian, negative log-likelihood for Binomial); the
/// reported value is the mean of the per-fold losses.
///
/// Evaluation is deterministic for a fixed data set, fold assignment, and
/// triple. The full-data container is never mutated: each fold materializes
/// its own training container and owns its fit state, so folds can be
/// evaluated in parallel.
pub struct CvLoss<'a> {
    data: &'a CvData<'a>,
    convergence: ConvergenceConfig,
    parallelism: Parallelism,
    logger: TrainingLogger,
}

impl<'a> CvLoss<'a> {
    /// Bind the loss to a cross-validation container.
    pub fn new(
        data: &'a CvData<'a>,
        convergence: ConvergenceConfig,
        parallelism: Parallelism,
        logger: TrainingLogger,
    ) -> Self {
        Self {
            data,
            convergence,
            parallelism,
            logger,
        }
    }

    /// Evaluate the mean held-out loss for one shrinkage triple.
    ///
    /// A fold whose fit exhausts its sweep budget degrades that fold's loss
    /// estimate (the best-effort coefficients are scored) but never aborts
    /// the evaluation; the condition is logged as a warning.
    pub fn evaluate(&self, shrinkage: &Shrinkage) -> f64 {
        let family = self.data.data().family();
        let n_folds = self.data.folds().n_folds();

        let fold_losses = self.parallelism.maybe_par_map(1..=n_folds, |fold| {
            let train = self.data.training_data(fold);
            let (model, summary) = fit_coordinate_descent(&train, shrinkage, &self.convergence);
            if !summary.converged {
                self.logger.warn_non_convergence(fold, summary.n_sweeps);
            }

            let (x_held, y_held) = self.data.held_out(fold);
            let eta = model.linear_predictor(x_held.view());
            family.held_out_loss(eta.view(), y_held.view())
        });

        fold_losses.iter().sum::<f64>() / n_folds as f64
    }
}
