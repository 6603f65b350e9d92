//! Data containers: model data, cross-validation views, fold assignments.
//!
//! [`ModelData`] holds the design/response matrices, the prior-graph
//! Laplacians, and the cross-products computed once at construction.
//! [`CvData`] adds a [`FoldAssignment`] on top for k-fold cross-validation.

mod cv_data;
mod folds;
mod laplacian;
mod model_data;

pub use cv_data::CvData;
pub use folds::FoldAssignment;
pub use laplacian::graph_laplacian;
pub use model_data::ModelData;
