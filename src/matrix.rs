//! Text-to-matrix conversion
//!
//! Every input line becomes a square integer matrix: one character code per
//! cell, row-major, zero-padded up to the next perfect square.

use nalgebra::DMatrix;

/// Square matrix of character codes.
///
/// Side length N = ceil(sqrt(number of chars)); the empty string yields the
/// degenerate 0x0 matrix. Padding cells are exactly 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMatrix {
    n: usize,
    data: Vec<i64>,
}

impl CharMatrix {
    /// Build the matrix for a line of text. Never fails.
    pub fn from_text(text: &str) -> Self {
        let codes: Vec<i64> = text.chars().map(|c| c as i64).collect();
        let len = codes.len();
        if len == 0 {
            return Self {
                n: 0,
                data: Vec::new(),
            };
        }

        let mut n = (len as f64).sqrt().ceil() as usize;
        while n * n < len {
            n += 1;
        }

        let mut data = codes;
        data.resize(n * n, 0);
        Self { n, data }
    }

    /// Side length N.
    pub fn side(&self) -> usize {
        self.n
    }

    /// True for the degenerate 0x0 matrix.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Row-major view of all elements.
    pub fn flattened(&self) -> &[i64] {
        &self.data
    }

    /// The i-th row. Panics if `i >= side()`.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum of the main diagonal (0 for the 0x0 matrix).
    pub fn trace(&self) -> i64 {
        (0..self.n).map(|i| self.data[i * self.n + i]).sum()
    }

    /// Float copy for nalgebra decompositions.
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_iterator(self.n, self.n, self.data.iter().map(|&v| v as f64))
    }
}
