//! Majority-vote decision rule
//!
//! Eight parity/threshold checks over the feature map, one point each;
//! YES needs at least 5. Parity applies `% 2 == 0` to the raw value, f64
//! remainder included for the float features. That float parity is part of
//! the reference behavior and is kept as-is.

use serde::Serialize;
use std::fmt;

use crate::features::Features;

/// Points needed for a YES.
pub const SCORE_THRESHOLD: u32 = 5;

/// Final binary answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Yes,
    No,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "YES"),
            Verdict::No => write!(f, "NO"),
        }
    }
}

/// One scored check, named for the breakdown listing.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
}

/// Score, per-check breakdown, and verdict for one feature map.
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub score: u32,
    pub checks: Vec<Check>,
    pub verdict: Verdict,
}

impl Decision {
    /// Apply the eight checks. Pure: the same features always decide the same.
    pub fn from_features(features: &Features) -> Self {
        let checks = vec![
            check("det is even", features.det % 2.0 == 0.0),
            check("trace is even", features.trace % 2 == 0),
            check("eigen_sum is even", features.eigen_sum % 2.0 == 0.0),
            check("dot is even", features.dot % 2 == 0),
            check("norm > 100", features.norm > 100.0),
            check("cross is even", features.cross % 2 == 0),
            check("cosine > 0", features.cosine > 0.0),
            check("hash is even", features.hash % 2 == 0),
        ];

        let score = checks.iter().filter(|c| c.passed).count() as u32;
        let verdict = if score >= SCORE_THRESHOLD {
            Verdict::Yes
        } else {
            Verdict::No
        };

        Self {
            score,
            checks,
            verdict,
        }
    }
}

/// Shorthand when only the verdict matters.
pub fn decide(features: &Features) -> Verdict {
    Decision::from_features(features).verdict
}

fn check(name: &'static str, passed: bool) -> Check {
    Check { name, passed }
}
