//! High-level model API: configuration, fitting, prediction, selection.

mod config;
mod edgenet;
mod linear;
pub mod selection;

pub use config::{EdgenetConfig, Folds, PsiSpec, SelectionConfig};
pub use edgenet::{Edgenet, FittedEdgenet};
pub use linear::LinearModel;
pub use selection::{select, ModelSelectionResult, LAMBDA_UPPER, PSI_UPPER};
