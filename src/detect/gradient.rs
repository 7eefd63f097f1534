//! Two-kernel gradient magnitude detector.

use crate::detect::{validate_amplifier, EdgeDetector, DEFAULT_AMPLIFIER};
use crate::image::{GridView, PixelGrid};
use crate::kernel::presets::GradientPreset;
use crate::kernel::Kernel;
use crate::scan::{is_interior, scan_with};
use crate::trace::{detect_span, record_edges};
use crate::util::EdgeKitResult;

/// Edge detector combining two directional derivatives into a gradient
/// magnitude.
///
/// Each interior output sample is `amplifier * sqrt(fx^2 + fy^2)` truncated
/// toward zero and clamped to 255, where `fx` and `fy` are the responses of
/// `kernel_x` and `kernel_y`. Border samples are left at 255.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDetector {
    kernel_x: Kernel,
    kernel_y: Kernel,
    amplifier: f64,
    parallel: bool,
}

impl GradientDetector {
    /// Creates a detector from an arbitrary kernel pair.
    pub fn new(kernel_x: Kernel, kernel_y: Kernel, amplifier: f64) -> EdgeKitResult<Self> {
        validate_amplifier(amplifier)?;
        Ok(Self {
            kernel_x,
            kernel_y,
            amplifier,
            parallel: false,
        })
    }

    /// Creates a detector for a named preset with the default amplifier.
    pub fn from_preset(preset: GradientPreset) -> Self {
        let (kernel_x, kernel_y) = preset.kernels();
        Self {
            kernel_x,
            kernel_y,
            amplifier: DEFAULT_AMPLIFIER,
            parallel: false,
        }
    }

    pub fn difference() -> Self {
        Self::from_preset(GradientPreset::Difference)
    }

    pub fn roberts() -> Self {
        Self::from_preset(GradientPreset::Roberts)
    }

    pub fn sobel() -> Self {
        Self::from_preset(GradientPreset::Sobel)
    }

    /// Replaces the amplifier, rejecting non-finite or non-positive values.
    pub fn with_amplifier(mut self, amplifier: f64) -> EdgeKitResult<Self> {
        self.set_amplifier(amplifier)?;
        Ok(self)
    }

    /// Enables row-parallel scanning (effective with the `rayon` feature).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn kernel_x(&self) -> &Kernel {
        &self.kernel_x
    }

    pub fn kernel_y(&self) -> &Kernel {
        &self.kernel_y
    }

    /// Sets the amplifier used by subsequent `detect` calls.
    ///
    /// On error the previous amplifier is kept.
    pub fn set_amplifier(&mut self, amplifier: f64) -> EdgeKitResult<()> {
        validate_amplifier(amplifier)?;
        self.amplifier = amplifier;
        Ok(())
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the raw `(fx, fy)` responses at an interior pixel.
    ///
    /// Returns `None` when `(row, col)` is on the border or outside the view.
    pub fn gradient_at(&self, view: GridView<'_>, row: usize, col: usize) -> Option<(f64, f64)> {
        if !is_interior(view, row, col) {
            return None;
        }
        Some((
            self.kernel_x.response(view, row, col),
            self.kernel_y.response(view, row, col),
        ))
    }
}

impl EdgeDetector for GradientDetector {
    fn amplifier(&self) -> f64 {
        self.amplifier
    }

    fn detect_view(&self, view: GridView<'_>) -> PixelGrid {
        let _span = detect_span!("gradient", view, self.parallel).entered();

        let kernel_x = &self.kernel_x;
        let kernel_y = &self.kernel_y;
        let out = scan_with(view, self.amplifier, self.parallel, |rows, col| {
            let fx = kernel_x.response_rows(rows, col);
            let fy = kernel_y.response_rows(rows, col);
            (fx * fx + fy * fy).sqrt()
        });

        record_edges(&out);
        out
    }
}
