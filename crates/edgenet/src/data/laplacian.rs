//! Prior-graph validation and Laplacian construction.

use ndarray::{Array2, ArrayView2};

use crate::error::{EdgenetError, Result};

/// Tolerance for the symmetry check on prior graphs.
const SYMMETRY_TOL: f64 = 1e-12;

/// Validate a prior graph and return its combinatorial Laplacian.
///
/// The graph must be a square `dim`×`dim` matrix whose entries are finite,
/// non-negative edge weights, symmetric up to floating-point noise. The
/// Laplacian is degree-minus-adjacency with diagonal entries of the
/// adjacency ignored (self-loops carry no structural information).
///
/// # Errors
///
/// `InvalidDimensions` when the matrix is not `dim`×`dim`;
/// `InvalidGraph` for NaN/infinite entries, negative weights, or asymmetry.
pub fn graph_laplacian(
    name: &'static str,
    graph: ArrayView2<'_, f64>,
    dim: usize,
) -> Result<Array2<f64>> {
    if graph.nrows() != dim {
        return Err(EdgenetError::InvalidDimensions {
            name: "prior graph rows",
            expected: dim,
            got: graph.nrows(),
        });
    }
    if graph.ncols() != dim {
        return Err(EdgenetError::InvalidDimensions {
            name: "prior graph columns",
            expected: dim,
            got: graph.ncols(),
        });
    }

    for i in 0..dim {
        for j in 0..dim {
            let w = graph[[i, j]];
            if !w.is_finite() {
                return Err(EdgenetError::InvalidGraph {
                    name,
                    reason: "edge weight is NaN or infinite",
                });
            }
            if w < 0.0 {
                return Err(EdgenetError::InvalidGraph {
                    name,
                    reason: "negative edge weight",
                });
            }
            if j > i && (w - graph[[j, i]]).abs() > SYMMETRY_TOL {
                return Err(EdgenetError::InvalidGraph {
                    name,
                    reason: "adjacency matrix is not symmetric",
                });
            }
        }
    }

    let mut laplacian = Array2::<f64>::zeros((dim, dim));
    for i in 0..dim {
        let mut degree = 0.0;
        for j in 0..dim {
            if i == j {
                continue;
            }
            let w = graph[[i, j]];
            degree += w;
            laplacian[[i, j]] = -w;
        }
        laplacian[[i, i]] = degree;
    }

    Ok(laplacian)
}
