//! Compass template matching detector.

use crate::detect::{validate_amplifier, EdgeDetector, DEFAULT_AMPLIFIER};
use crate::image::{GridView, PixelGrid};
use crate::kernel::presets::PREWITT_COMPASS;
use crate::kernel::Kernel;
use crate::scan::{is_interior, scan_with};
use crate::trace::{detect_span, record_edges};
use crate::util::{EdgeKitError, EdgeKitResult};

/// Edge detector keeping the strongest response among a set of directional
/// templates.
///
/// Each interior output sample is `amplifier * max_k response_k` truncated
/// toward zero and clamped to `[0, 255]`. Border samples are left at 255.
/// Kernel order only decides which index wins ties in [`match_at`]; the
/// output grid does not depend on it.
///
/// [`match_at`]: TemplateMatchingDetector::match_at
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateMatchingDetector {
    kernels: Vec<Kernel>,
    amplifier: f64,
    parallel: bool,
}

impl TemplateMatchingDetector {
    /// Creates a detector from a non-empty set of templates.
    pub fn new(kernels: Vec<Kernel>, amplifier: f64) -> EdgeKitResult<Self> {
        if kernels.is_empty() {
            return Err(EdgeKitError::EmptyKernelSet);
        }
        validate_amplifier(amplifier)?;
        Ok(Self {
            kernels,
            amplifier,
            parallel: false,
        })
    }

    /// Prewitt compass detector with the default amplifier.
    pub fn prewitt() -> Self {
        Self {
            kernels: PREWITT_COMPASS.to_vec(),
            amplifier: DEFAULT_AMPLIFIER,
            parallel: false,
        }
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

    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
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

    /// Returns the index and raw response of the best matching template at an
    /// interior pixel. Ties go to the lowest index.
    ///
    /// Returns `None` when `(row, col)` is on the border or outside the view.
    pub fn match_at(&self, view: GridView<'_>, row: usize, col: usize) -> Option<(usize, f64)> {
        if !is_interior(view, row, col) {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (idx, kernel) in self.kernels.iter().enumerate() {
            let response = kernel.response(view, row, col);
            if best.map_or(true, |(_, score)| response > score) {
                best = Some((idx, response));
            }
        }
        best
    }
}

impl EdgeDetector for TemplateMatchingDetector {
    fn amplifier(&self) -> f64 {
        self.amplifier
    }

    fn detect_view(&self, view: GridView<'_>) -> PixelGrid {
        let _span = detect_span!(
            "template",
            view,
            self.parallel,
            templates = self.kernels.len()
        )
        .entered();

        let kernels = self.kernels.as_slice();
        let out = scan_with(view, self.amplifier, self.parallel, |rows, col| {
            kernels
                .iter()
                .map(|kernel| kernel.response_rows(rows, col))
                .fold(f64::NEG_INFINITY, f64::max)
        });

        record_edges(&out);
        out
    }
}
