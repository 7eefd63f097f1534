//! Fixed kernel tables for the built-in detectors.
//!
//! Every table here is zero-sum, so uniform regions produce a zero response.

use crate::kernel::Kernel;

/// Forward difference along columns.
pub const DIFFERENCE_X: Kernel = Kernel::new([[0, 0, 0], [0, -1, 1], [0, 0, 0]]);
/// Forward difference along rows.
pub const DIFFERENCE_Y: Kernel = Kernel::new([[0, 0, 0], [0, -1, 0], [0, 1, 0]]);

/// Roberts cross, main diagonal.
pub const ROBERTS_X: Kernel = Kernel::new([[0, 0, 0], [0, -1, 0], [0, 0, 1]]);
/// Roberts cross, anti-diagonal.
pub const ROBERTS_Y: Kernel = Kernel::new([[0, 0, 0], [0, 0, -1], [0, 1, 0]]);

pub const SOBEL_X: Kernel = Kernel::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);
pub const SOBEL_Y: Kernel = Kernel::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]]);

/// Prewitt compass templates, one per direction, rotating in 45 degree steps.
pub const PREWITT_COMPASS: [Kernel; 8] = [
    Kernel::new([[1, 1, 1], [1, -2, 1], [-1, -1, -1]]),
    Kernel::new([[1, 1, 1], [1, -2, -1], [1, -1, -1]]),
    Kernel::new([[1, 1, -1], [1, -2, -1], [1, 1, -1]]),
    Kernel::new([[1, -1, -1], [1, -2, -1], [1, 1, 1]]),
    Kernel::new([[-1, -1, -1], [1, -2, 1], [1, 1, 1]]),
    Kernel::new([[-1, -1, 1], [-1, -2, 1], [1, 1, 1]]),
    Kernel::new([[-1, 1, 1], [-1, -2, 1], [-1, 1, 1]]),
    Kernel::new([[1, 1, 1], [-1, -2, 1], [-1, -1, 1]]),
];

/// Named two-kernel gradient operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientPreset {
    Difference,
    Roberts,
    Sobel,
}

impl GradientPreset {
    /// Returns `(kernel_x, kernel_y)` for the preset.
    pub const fn kernels(self) -> (Kernel, Kernel) {
        match self {
            GradientPreset::Difference => (DIFFERENCE_X, DIFFERENCE_Y),
            GradientPreset::Roberts => (ROBERTS_X, ROBERTS_Y),
            GradientPreset::Sobel => (SOBEL_X, SOBEL_Y),
        }
    }
}
