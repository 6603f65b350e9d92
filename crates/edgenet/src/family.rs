//! Distribution families for the response matrix.
//!
//! The family is a closed, two-member strategy: it decides the
//! per-coordinate update formula inside the fitting engine and the held-out
//! prediction loss used by cross-validation. The sweep and convergence
//! control flow is identical for both members, so the engine only ever
//! branches on this tag at the innermost update and at loss computation.

use ndarray::ArrayView2;

/// Probability floor used when evaluating the binomial log-likelihood.
///
/// Keeps `ln` finite when the linear predictor saturates the sigmoid.
const PROB_EPS: f64 = 1e-12;

/// Distribution family of the response matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Family {
    /// Continuous responses, linear least-squares updates, squared-error loss.
    #[default]
    Gaussian,
    /// Binary {0, 1} responses, iteratively-reweighted quasi-Newton updates
    /// from the logistic mean, negative log-likelihood loss.
    Binomial,
}

impl Family {
    /// Name of the family (for logging).
    pub fn name(&self) -> &'static str {
        match self {
            Family::Gaussian => "gaussian",
            Family::Binomial => "binomial",
        }
    }

    /// Map a linear predictor to the response scale.
    ///
    /// Identity for Gaussian, logistic sigmoid for Binomial.
    #[inline]
    pub fn mean(&self, eta: f64) -> f64 {
        match self {
            Family::Gaussian => eta,
            Family::Binomial => sigmoid(eta),
        }
    }

    /// Held-out prediction loss, averaged over samples.
    ///
    /// `eta` is the raw linear predictor `[n, q]`, `targets` the observed
    /// responses `[n, q]`. Gaussian accumulates squared error, Binomial the
    /// negative log-likelihood; both are divided by the sample count so fold
    /// losses are comparable across unevenly sized folds.
    pub fn held_out_loss(&self, eta: ArrayView2<'_, f64>, targets: ArrayView2<'_, f64>) -> f64 {
        debug_assert_eq!(eta.dim(), targets.dim());
        let n = eta.nrows();
        if n == 0 {
            return 0.0;
        }

        let total: f64 = match self {
            Family::Gaussian => eta
                .iter()
                .zip(targets.iter())
                .map(|(&e, &y)| {
                    let r = y - e;
                    r * r
                })
                .sum(),
            Family::Binomial => eta
                .iter()
                .zip(targets.iter())
                .map(|(&e, &y)| {
                    let p = sigmoid(e).clamp(PROB_EPS, 1.0 - PROB_EPS);
                    -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
                })
                .sum(),
        };

        total / n as f64
    }
}

/// Logistic sigmoid.
#[inline]
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
