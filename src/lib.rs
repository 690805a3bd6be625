/// Traits implemented by concrete distributions (the primitive operations each
/// distribution category must supply) and the derived scalar operations built over them.
pub mod prob;

/// Container shapes, shape promotion and orientation of vector-valued sample buffers.
pub mod shape;

/// Elementwise evaluation of scalar distribution operations over matrices
/// of samples, and density evaluation over batches of vector and matrix samples.
pub mod lift;

/// Batch sampling into real, integral, vector-valued and matrix-valued containers.
pub mod sample;

/// Deviance, deviance residuals and start values for iteratively re-weighted
/// model fitting, broadcast over observation, fitted-value and weight containers.
pub mod fit;

/// Random number generator configuration for the sampling routines.
pub mod config;

mod error;

pub use error::*;
