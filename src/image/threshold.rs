//! Binary thresholding of grayscale grids.

use crate::image::{GridView, PixelGrid, MAX_SAMPLE};

/// Binarizes a view: samples `<= threshold` become `low`, the rest `high`.
pub fn threshold(view: GridView<'_>, threshold: u8, high: u8, low: u8) -> PixelGrid {
    let width = view.width();
    let height = view.height();
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let samples = view.row(row).expect("row within view bounds");
        data.extend(
            samples
                .iter()
                .map(|&v| if v <= threshold { low } else { high }),
        );
    }
    PixelGrid {
        data,
        width,
        height,
    }
}

impl PixelGrid {
    /// Binarizes the grid with `high = 255` and `low = 0`.
    pub fn threshold(&self, threshold: u8) -> PixelGrid {
        self::threshold(self.view(), threshold, MAX_SAMPLE, 0)
    }

    /// Binarizes the grid with explicit output levels.
    pub fn threshold_with(&self, threshold: u8, high: u8, low: u8) -> PixelGrid {
        self::threshold(self.view(), threshold, high, low)
    }
}
