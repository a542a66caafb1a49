//! Matchat - toy YES/NO chat oracle
//!
//! Converts a line of text into a square character-code matrix, computes a
//! fixed set of linear-algebra and hashing statistics over it, and reduces
//! them to a YES/NO verdict by majority vote of parity/threshold checks.
//! Deterministic and stateless; the math is arbitrary, not learned.

pub mod cli;
pub mod decision;
pub mod error;
pub mod features;
pub mod matrix;

pub use decision::{Decision, Verdict};
pub use features::Features;
pub use matrix::CharMatrix;

/// Run the full text -> matrix -> features -> verdict pipeline once.
///
/// Pure and side-effect free; the interactive loop is a separate entry point.
pub fn classify(text: &str) -> (Features, Decision) {
    let matrix = CharMatrix::from_text(text);
    let features = Features::compute(&matrix);
    let decision = Decision::from_features(&features);
    (features, decision)
}
