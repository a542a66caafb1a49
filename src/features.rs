//! Matrix statistics: the eight-feature map
//!
//! Each feature is computed independently with a per-feature fallback: on any
//! computation failure the value 0 is substituted and the others still run.
//! Fallbacks are logged at debug level, never surfaced to the user.

use nalgebra::linalg::Schur;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ComputeError;
use crate::matrix::CharMatrix;

/// Iteration cap for the Schur decomposition behind `eigen_sum`.
const MAX_SCHUR_ITERATIONS: usize = 500;

/// The eight statistics computed from a character matrix, in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Features {
    /// Determinant (0 for the degenerate 0x0 matrix).
    pub det: f64,
    /// Main diagonal sum.
    pub trace: i64,
    /// Sum of the real parts of the eigenvalues.
    pub eigen_sum: f64,
    /// Dot product of the flattened matrix with itself.
    pub dot: i64,
    /// Euclidean norm of the flattened matrix.
    pub norm: f64,
    /// Sum of cross(row0, row1) components; fixed 0 unless the matrix is 3x3.
    pub cross: i64,
    /// Cosine similarity of the two shifted sub-vectors; fixed 0 when the
    /// flattened matrix has fewer than 2 elements.
    pub cosine: f64,
    /// MD5 of the canonical textual rendering, read as a base-16 integer.
    /// Serialized as a decimal string (JSON numbers cannot carry u128).
    #[serde(serialize_with = "serialize_u128_as_string")]
    pub hash: u128,
}

impl Features {
    /// Compute all eight features. Never fails; failed features become 0.
    pub fn compute(matrix: &CharMatrix) -> Self {
        let flattened = matrix.flattened();
        let dot: i64 = flattened.iter().map(|&v| v * v).sum();

        let det = determinant(matrix).unwrap_or_else(|err| {
            debug!("det fallback: {}", err);
            0.0
        });
        let eigen_sum = eigen_sum(matrix).unwrap_or_else(|err| {
            debug!("eigen_sum fallback: {}", err);
            0.0
        });
        let cosine = if flattened.len() < 2 {
            0.0
        } else {
            cosine(flattened).unwrap_or_else(|err| {
                debug!("cosine fallback: {}", err);
                0.0
            })
        };

        Self {
            det,
            trace: matrix.trace(),
            eigen_sum,
            dot,
            norm: (dot as f64).sqrt(),
            cross: cross_sum(matrix),
            cosine,
            hash: content_hash(flattened),
        }
    }

    /// `(name, formatted value)` pairs in the fixed feature order, for the
    /// console listing.
    pub fn render(&self) -> [(&'static str, String); 8] {
        [
            ("det", format_float(self.det)),
            ("trace", self.trace.to_string()),
            ("eigen_sum", format_float(self.eigen_sum)),
            ("dot", self.dot.to_string()),
            ("norm", format_float(self.norm)),
            ("cross", self.cross.to_string()),
            ("cosine", format_float(self.cosine)),
            ("hash", self.hash.to_string()),
        ]
    }
}

/// Float features always show a decimal point, so whole values print as
/// `72.0`, not `72`.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Column budget of the hashed rendering; wrapped lines carry a one-space
/// hanging indent under the opening bracket.
const RENDER_LINE_WIDTH: usize = 75;
/// Past this many elements the rendering shows only the edges around `...`.
const RENDER_SUMMARY_THRESHOLD: usize = 1000;
const RENDER_EDGE_ITEMS: usize = 3;

/// Canonical textual rendering of the flattened matrix used for hashing.
///
/// The hash is formatting-sensitive, so every detail of this layout is a
/// contract: decimal elements right-justified to the widest shown element,
/// single-space separators, lines wrapped at 75 columns with a one-space
/// hanging indent, trailing separators stripped at wraps, and arrays past
/// 1000 elements summarized to three edge items around `...`. The empty
/// matrix renders as `[]`.
pub fn canonical_form(values: &[i64]) -> String {
    let summarized = values.len() > RENDER_SUMMARY_THRESHOLD;
    let shown: Vec<&i64> = if summarized {
        values[..RENDER_EDGE_ITEMS]
            .iter()
            .chain(&values[values.len() - RENDER_EDGE_ITEMS..])
            .collect()
    } else {
        values.iter().collect()
    };
    let width = shown
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0);

    let mut words: Vec<String> = Vec::with_capacity(shown.len() + 1);
    if summarized {
        for v in &values[..RENDER_EDGE_ITEMS] {
            words.push(format!("{v:>width$}"));
        }
        words.push("...".to_string());
        for v in &values[values.len() - RENDER_EDGE_ITEMS..] {
            words.push(format!("{v:>width$}"));
        }
    } else {
        for v in values {
            words.push(format!("{v:>width$}"));
        }
    }

    // The closing bracket's column is reserved on every line
    let wrap_at = RENDER_LINE_WIDTH - 1;
    let mut body = String::new();
    let mut line = String::from(" ");
    for (i, word) in words.iter().enumerate() {
        if line.len() + word.len() > wrap_at && line.len() > 1 {
            body.push_str(line.trim_end());
            body.push('\n');
            line = String::from(" ");
        }
        line.push_str(word);
        if i + 1 < words.len() {
            line.push(' ');
        }
    }
    body.push_str(&line);

    // The opening bracket replaces the first line's hanging indent
    format!("[{}]", &body[1..])
}

fn determinant(matrix: &CharMatrix) -> Result<f64, ComputeError> {
    if matrix.is_empty() {
        return Err(ComputeError::DegenerateMatrix);
    }
    Ok(matrix.to_dmatrix().determinant())
}

fn eigen_sum(matrix: &CharMatrix) -> Result<f64, ComputeError> {
    if matrix.is_empty() {
        return Err(ComputeError::DegenerateMatrix);
    }
    let schur = Schur::try_new(matrix.to_dmatrix(), f64::EPSILON, MAX_SCHUR_ITERATIONS)
        .ok_or(ComputeError::NoConvergence)?;
    Ok(schur.complex_eigenvalues().iter().map(|ev| ev.re).sum())
}

fn cross_sum(matrix: &CharMatrix) -> i64 {
    if matrix.side() != 3 {
        return 0;
    }
    let a = matrix.row(0);
    let b = matrix.row(1);
    (a[1] * b[2] - a[2] * b[1]) + (a[2] * b[0] - a[0] * b[2]) + (a[0] * b[1] - a[1] * b[0])
}

/// Caller guarantees `flattened.len() >= 2`.
fn cosine(flattened: &[i64]) -> Result<f64, ComputeError> {
    let head = &flattened[..flattened.len() - 1];
    let tail = &flattened[1..];

    let head_norm = vector_norm(head);
    let tail_norm = vector_norm(tail);
    if head_norm == 0.0 || tail_norm == 0.0 {
        return Err(ComputeError::ZeroNorm);
    }

    let dot: f64 = head.iter().zip(tail).map(|(&a, &b)| (a * b) as f64).sum();
    Ok(dot / (head_norm * tail_norm))
}

fn vector_norm(values: &[i64]) -> f64 {
    values
        .iter()
        .map(|&v| (v * v) as f64)
        .sum::<f64>()
        .sqrt()
}

fn content_hash(flattened: &[i64]) -> u128 {
    let digest = md5::compute(canonical_form(flattened).as_bytes());
    u128::from_be_bytes(digest.0)
}

fn serialize_u128_as_string<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
