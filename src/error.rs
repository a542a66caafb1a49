//! Per-feature computation failures

use thiserror::Error;

/// A feature computation that could not produce a value.
///
/// Never propagates past the statistics engine: each feature substitutes 0
/// independently and the pipeline continues.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The text was empty, leaving a 0x0 matrix with no decompositions.
    #[error("degenerate 0x0 matrix")]
    DegenerateMatrix,

    /// The Schur iteration hit its iteration cap.
    #[error("eigenvalue solver did not converge")]
    NoConvergence,

    /// One of the shifted sub-vectors has zero magnitude.
    #[error("zero-norm operand in cosine similarity")]
    ZeroNorm,
}
