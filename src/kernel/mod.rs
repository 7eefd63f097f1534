//! 3x3 kernels and the neighborhood response primitive.

use crate::image::GridView;

pub mod presets;

/// Immutable 3x3 matrix of signed integer coefficients.
///
/// `coeffs[r][c]` weights the neighbor at row offset `r - 1` and column
/// offset `c - 1` from the center pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Kernel {
    coeffs: [[i8; 3]; 3],
}

impl Kernel {
    /// Creates a kernel from row-major coefficients.
    pub const fn new(coeffs: [[i8; 3]; 3]) -> Self {
        Self { coeffs }
    }

    /// Returns the row-major coefficients.
    pub const fn coeffs(&self) -> &[[i8; 3]; 3] {
        &self.coeffs
    }

    /// Returns the sum of all coefficients.
    ///
    /// Zero-sum kernels respond with exactly 0 on uniform neighborhoods.
    pub fn sum(&self) -> i32 {
        self.coeffs
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| i32::from(c))
            .sum()
    }

    /// Weighted sum of the 3x3 neighborhood centered at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is not an interior pixel of `view`, i.e. when any
    /// of its eight neighbors would fall outside the view.
    #[inline]
    pub fn response(&self, view: GridView<'_>, row: usize, col: usize) -> f64 {
        let above = view.row(row - 1).expect("interior row has a row above");
        let center = view.row(row).expect("interior row within bounds");
        let below = view.row(row + 1).expect("interior row has a row below");
        self.response_rows([above, center, below], col)
    }

    /// Weighted sum over three pre-fetched rows centered at column `col`.
    #[inline]
    pub(crate) fn response_rows(&self, rows: [&[u8]; 3], col: usize) -> f64 {
        let mut acc = 0.0f64;
        for (coeff_row, samples) in self.coeffs.iter().zip(rows) {
            let window = &samples[col - 1..=col + 1];
            for (&coeff, &value) in coeff_row.iter().zip(window) {
                acc += f64::from(coeff) * f64::from(value);
            }
        }
        acc
    }
}

impl From<[[i8; 3]; 3]> for Kernel {
    fn from(coeffs: [[i8; 3]; 3]) -> Self {
        Self::new(coeffs)
    }
}
