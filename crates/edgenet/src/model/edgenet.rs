//! High-level fit entry point.
//!
//! [`Edgenet`] wraps the coordinate-descent engine behind a configured,
//! reusable handle; [`FittedEdgenet`] carries the fitted coefficients,
//! intercepts, the fit diagnostics, and family-aware prediction.

use ndarray::{Array2, ArrayView2};

use crate::data::ModelData;
use crate::error::{EdgenetError, Result};
use crate::family::Family;
use crate::training::{fit_with_logger, FitSummary, TrainingLogger};

use super::config::EdgenetConfig;
use super::linear::LinearModel;

/// A configured graph-regularized regression model, ready to fit.
///
/// # Example
///
/// ```
/// use edgenet::{Edgenet, EdgenetConfig, Family, ModelData, Shrinkage};
/// use ndarray::{array, Array2};
///
/// let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, 1.0]];
/// let y = array![[1.0], [2.0], [3.0], [4.0]];
/// let gx = Array2::<f64>::zeros((2, 2));
/// let gy = Array2::<f64>::zeros((1, 1));
/// let data = ModelData::new(x, y, gx.view(), gy.view(), Family::Gaussian).unwrap();
///
/// let model = Edgenet::new(
///     EdgenetConfig::builder()
///         .shrinkage(Shrinkage::new(0.1, 0.0, 0.0))
///         .build(),
/// );
/// let fitted = model.fit(&data);
/// assert_eq!(fitted.coefficients().dim(), (2, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Edgenet {
    config: EdgenetConfig,
}

impl Edgenet {
    /// Create a model handle from a configuration.
    pub fn new(config: EdgenetConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EdgenetConfig {
        &self.config
    }

    /// Fit coefficients and intercepts on a validated data container.
    ///
    /// Input validation (shapes, graphs) already happened when `data` was
    /// constructed, so fitting itself cannot fail; a fit that exhausts its
    /// sweep budget returns best-effort coefficients flagged in the
    /// [`FitSummary`].
    pub fn fit(&self, data: &ModelData) -> FittedEdgenet {
        let logger = TrainingLogger::new(self.config.verbosity);
        let (model, summary) = fit_with_logger(
            data,
            &self.config.shrinkage,
            &self.config.convergence,
            &logger,
        );
        FittedEdgenet {
            model,
            summary,
            family: data.family(),
        }
    }
}

/// A fitted model: coefficients, intercepts, diagnostics, prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedEdgenet {
    model: LinearModel,
    summary: FitSummary,
    family: Family,
}

impl FittedEdgenet {
    /// The underlying coefficient/intercept container.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// The fitted coefficient matrix, `[p, q]`.
    pub fn coefficients(&self) -> ndarray::ArrayView2<'_, f64> {
        self.model.coefficients()
    }

    /// The fitted intercept vector, length `q`.
    pub fn intercept(&self) -> ndarray::ArrayView1<'_, f64> {
        self.model.intercept()
    }

    /// Convergence diagnostics of the fit.
    pub fn summary(&self) -> FitSummary {
        self.summary
    }

    /// The response family the model was fit under.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Predict on new design rows, on the response scale.
    ///
    /// Gaussian predictions are the linear predictor itself; Binomial
    /// predictions are logistic probabilities.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` when `x` does not have `p` columns.
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let mut eta = self.predict_raw(x)?;
        if self.family == Family::Binomial {
            eta.mapv_inplace(|e| self.family.mean(e));
        }
        Ok(eta)
    }

    /// Predict the raw linear predictor `X·B + intercept`.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` when `x` does not have `p` columns.
    pub fn predict_raw(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.model.n_covariates() {
            return Err(EdgenetError::InvalidDimensions {
                name: "prediction matrix columns",
                expected: self.model.n_covariates(),
                got: x.ncols(),
            });
        }
        Ok(self.model.linear_predictor(x))
    }
}
