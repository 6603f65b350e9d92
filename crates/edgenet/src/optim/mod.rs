//! Derivative-free optimization of the shrinkage hyperparameters.

mod trust_region;

pub use trust_region::{minimize, Optimum, TrustRegionOptions};
