//! The model data container.
//!
//! [`ModelData`] owns everything one fit needs: the design and response
//! matrices, the prior-graph Laplacians, and the `X'X` / `X'Y` cross-products
//! that every coordinate update reads. Cross-products are computed once at
//! construction and never touched again, so repeated fits (one per fold per
//! trial point during model selection) never re-scan the design matrix.
//!
//! # Storage Layout
//!
//! Matrices are sample-major (`[n_samples, n_covariates]` for the design,
//! `[n_samples, n_responses]` for the response), the natural `ndarray`
//! layout. Flat-buffer construction via [`ModelData::from_raw`] expects
//! row-major buffers with explicit dimensions; shapes are validated before
//! any computation starts.

use ndarray::{Array2, ArrayView2, Axis};

use crate::error::{EdgenetError, Result};
use crate::family::Family;

use super::laplacian::graph_laplacian;

/// All inputs and precomputed products for one penalized linear model.
#[derive(Debug, Clone)]
pub struct ModelData {
    /// Design matrix, `[n, p]`.
    x: Array2<f64>,
    /// Response matrix, `[n, q]`.
    y: Array2<f64>,
    /// Laplacian of the covariate prior graph, `[p, p]`.
    lx: Array2<f64>,
    /// Laplacian of the response prior graph, `[q, q]`.
    ly: Array2<f64>,
    /// `X'X`, `[p, p]`.
    txx: Array2<f64>,
    /// `X'Y`, `[p, q]`.
    txy: Array2<f64>,
    /// Distribution family of the response.
    family: Family,
}

impl ModelData {
    /// Build a container from owned matrices and prior-graph adjacencies.
    ///
    /// Validates all shapes against each other, validates both graphs, and
    /// converts them to Laplacians. `X'X` and `X'Y` are computed here, once.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the response row count differs from the design
    /// row count or a graph is not `p`×`p` / `q`×`q`; `InvalidGraph` for
    /// negative, non-finite, or asymmetric graph entries.
    pub fn new(
        x: Array2<f64>,
        y: Array2<f64>,
        gx: ArrayView2<'_, f64>,
        gy: ArrayView2<'_, f64>,
        family: Family,
    ) -> Result<Self> {
        if y.nrows() != x.nrows() {
            return Err(EdgenetError::InvalidDimensions {
                name: "response matrix rows",
                expected: x.nrows(),
                got: y.nrows(),
            });
        }

        let lx = graph_laplacian("GX", gx, x.ncols())?;
        let ly = graph_laplacian("GY", gy, y.ncols())?;

        let xt = x.t();
        let txx = xt.dot(&x);
        let txy = xt.dot(&y);

        Ok(Self {
            x,
            y,
            lx,
            ly,
            txx,
            txy,
            family,
        })
    }

    /// Build a container from flat row-major buffers with explicit dimensions.
    ///
    /// `x` is `n`×`p`, `y` is `n`×`q`, `gx` is `p`×`p`, `gy` is `q`×`q`.
    /// Buffer lengths are checked against the stated dimensions before any
    /// other validation.
    pub fn from_raw(
        x: &[f64],
        y: &[f64],
        gx: &[f64],
        gy: &[f64],
        n: usize,
        p: usize,
        q: usize,
        family: Family,
    ) -> Result<Self> {
        let x = matrix_from_raw("design matrix buffer", x, n, p)?;
        let y = matrix_from_raw("response matrix buffer", y, n, q)?;
        let gx = matrix_from_raw("covariate graph buffer", gx, p, p)?;
        let gy = matrix_from_raw("response graph buffer", gy, q, q)?;
        Self::new(x, y, gx.view(), gy.view(), family)
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Number of covariates.
    #[inline]
    pub fn n_covariates(&self) -> usize {
        self.x.ncols()
    }

    /// Number of responses.
    #[inline]
    pub fn n_responses(&self) -> usize {
        self.y.ncols()
    }

    /// The design matrix.
    #[inline]
    pub fn design(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    /// The response matrix.
    #[inline]
    pub fn response(&self) -> ArrayView2<'_, f64> {
        self.y.view()
    }

    /// The `X'X` cross-product.
    #[inline]
    pub fn txx(&self) -> ArrayView2<'_, f64> {
        self.txx.view()
    }

    /// The `X'Y` cross-product.
    #[inline]
    pub fn txy(&self) -> ArrayView2<'_, f64> {
        self.txy.view()
    }

    /// Laplacian of the covariate prior graph.
    #[inline]
    pub fn laplacian_x(&self) -> ArrayView2<'_, f64> {
        self.lx.view()
    }

    /// Laplacian of the response prior graph.
    #[inline]
    pub fn laplacian_y(&self) -> ArrayView2<'_, f64> {
        self.ly.view()
    }

    /// Distribution family of the response.
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Rebuild a container restricted to a subset of sample rows.
    ///
    /// Graphs carry over unchanged; cross-products are recomputed for the
    /// selected rows. Used to materialize per-fold training views.
    pub(crate) fn subset(&self, rows: &[usize]) -> Self {
        let x = self.x.select(Axis(0), rows);
        let y = self.y.select(Axis(0), rows);

        let xt = x.t();
        let txx = xt.dot(&x);
        let txy = xt.dot(&y);

        Self {
            x,
            y,
            lx: self.lx.clone(),
            ly: self.ly.clone(),
            txx,
            txy,
            family: self.family,
        }
    }
}

/// Reshape a flat row-major buffer into a matrix, validating its length.
fn matrix_from_raw(
    name: &'static str,
    buffer: &[f64],
    rows: usize,
    cols: usize,
) -> Result<Array2<f64>> {
    if buffer.len() != rows * cols {
        return Err(EdgenetError::InvalidDimensions {
            name,
            expected: rows * cols,
            got: buffer.len(),
        });
    }
    Ok(Array2::from_shape_vec((rows, cols), buffer.to_vec()).expect("length checked above"))
}
