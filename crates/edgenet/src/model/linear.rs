//! Fitted linear model state.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Fitted coefficients and intercepts of a penalized linear model.
///
/// Coefficients have shape `[p, q]` (covariate-major), intercepts length `q`.
/// Each fit call produces a fresh, exclusively-owned instance, so fold
/// evaluations can run concurrently without shared mutable state.
///
/// # Example
///
/// ```
/// use edgenet::LinearModel;
/// use ndarray::{array, Array1};
///
/// let model = LinearModel::new(array![[0.5], [2.0]], Array1::from(vec![0.1]));
/// assert_eq!(model.coefficient(1, 0), 2.0);
/// assert_eq!(model.intercept()[0], 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Coefficient matrix, `[p, q]`.
    coefficients: Array2<f64>,
    /// Intercept vector, length `q`.
    intercept: Array1<f64>,
}

impl LinearModel {
    /// Create a model from a coefficient matrix and intercept vector.
    ///
    /// # Panics
    ///
    /// Panics if the intercept length differs from the coefficient column
    /// count.
    pub fn new(coefficients: Array2<f64>, intercept: Array1<f64>) -> Self {
        assert_eq!(
            coefficients.ncols(),
            intercept.len(),
            "intercept length {} doesn't match response count {}",
            intercept.len(),
            coefficients.ncols()
        );
        Self {
            coefficients,
            intercept,
        }
    }

    /// Number of covariates.
    #[inline]
    pub fn n_covariates(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Number of responses.
    #[inline]
    pub fn n_responses(&self) -> usize {
        self.coefficients.ncols()
    }

    /// Single coefficient for a covariate/response pair.
    #[inline]
    pub fn coefficient(&self, covariate: usize, response: usize) -> f64 {
        self.coefficients[[covariate, response]]
    }

    /// The coefficient matrix, `[p, q]`.
    #[inline]
    pub fn coefficients(&self) -> ArrayView2<'_, f64> {
        self.coefficients.view()
    }

    /// The intercept vector, length `q`.
    #[inline]
    pub fn intercept(&self) -> ArrayView1<'_, f64> {
        self.intercept.view()
    }

    /// Linear predictor `X·B + intercept` for new design rows.
    ///
    /// `x` must have `p` columns; returns `[n, q]`.
    pub fn linear_predictor(&self, x: ArrayView2<'_, f64>) -> Array2<f64> {
        let mut eta = x.dot(&self.coefficients);
        eta += &self.intercept;
        eta
    }

    /// Consume the model, returning the coefficient matrix and intercepts.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.coefficients, self.intercept)
    }
}
