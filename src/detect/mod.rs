//! Edge detectors and their preset constructors.
//!
//! Two concrete detector types implement [`EdgeDetector`]:
//! [`GradientDetector`] (two kernels, Euclidean magnitude) and
//! [`TemplateMatchingDetector`] (N templates, maximum response). Presets only
//! inject kernel data; the scan loop is shared.

use std::fmt;
use std::str::FromStr;

use crate::image::{GridView, PixelGrid};
use crate::kernel::presets::GradientPreset;
use crate::util::math::is_valid_amplifier;
use crate::util::{EdgeKitError, EdgeKitResult};

mod gradient;
mod template;

pub use gradient::GradientDetector;
pub use template::TemplateMatchingDetector;

/// Amplifier used by the preset constructors.
pub const DEFAULT_AMPLIFIER: f64 = 4.0;

/// Capability shared by all detectors.
///
/// `detect` never mutates its input and returns a new grid of the same
/// dimensions whose border rows and columns are 255.
pub trait EdgeDetector {
    /// Gain applied to the raw response before quantization.
    fn amplifier(&self) -> f64;

    /// Runs the detector over a borrowed view.
    fn detect_view(&self, view: GridView<'_>) -> PixelGrid;

    /// Runs the detector over an owned grid.
    fn detect(&self, grid: &PixelGrid) -> PixelGrid {
        self.detect_view(grid.view())
    }
}

pub(crate) fn validate_amplifier(amplifier: f64) -> EdgeKitResult<()> {
    if is_valid_amplifier(amplifier) {
        Ok(())
    } else {
        Err(EdgeKitError::InvalidAmplifier { value: amplifier })
    }
}

/// Difference detector with the given amplifier.
pub fn make_difference_detector(amplifier: f64) -> EdgeKitResult<GradientDetector> {
    GradientDetector::difference().with_amplifier(amplifier)
}

/// Roberts cross detector with the given amplifier.
pub fn make_roberts_detector(amplifier: f64) -> EdgeKitResult<GradientDetector> {
    GradientDetector::roberts().with_amplifier(amplifier)
}

/// Sobel detector with the given amplifier.
pub fn make_sobel_detector(amplifier: f64) -> EdgeKitResult<GradientDetector> {
    GradientDetector::sobel().with_amplifier(amplifier)
}

/// Prewitt compass detector with the given amplifier.
pub fn make_prewitt_detector(amplifier: f64) -> EdgeKitResult<TemplateMatchingDetector> {
    TemplateMatchingDetector::prewitt().with_amplifier(amplifier)
}

/// Built-in detector presets, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorKind {
    Difference,
    Roberts,
    Sobel,
    Prewitt,
}

impl DetectorKind {
    pub const ALL: [DetectorKind; 4] = [
        DetectorKind::Difference,
        DetectorKind::Roberts,
        DetectorKind::Sobel,
        DetectorKind::Prewitt,
    ];

    /// Lowercase preset name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            DetectorKind::Difference => "difference",
            DetectorKind::Roberts => "roberts",
            DetectorKind::Sobel => "sobel",
            DetectorKind::Prewitt => "prewitt",
        }
    }

    /// Builds a boxed detector for the preset.
    pub fn build(
        self,
        amplifier: f64,
        parallel: bool,
    ) -> EdgeKitResult<Box<dyn EdgeDetector + Send + Sync>> {
        let gradient = |preset: GradientPreset| {
            GradientDetector::from_preset(preset)
                .with_amplifier(amplifier)
                .map(|d| d.with_parallel(parallel))
        };
        let detector: Box<dyn EdgeDetector + Send + Sync> = match self {
            DetectorKind::Difference => Box::new(gradient(GradientPreset::Difference)?),
            DetectorKind::Roberts => Box::new(gradient(GradientPreset::Roberts)?),
            DetectorKind::Sobel => Box::new(gradient(GradientPreset::Sobel)?),
            DetectorKind::Prewitt => Box::new(
                TemplateMatchingDetector::prewitt()
                    .with_amplifier(amplifier)?
                    .with_parallel(parallel),
            ),
        };
        Ok(detector)
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetectorKind {
    type Err = EdgeKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DetectorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or(EdgeKitError::UnknownDetector {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_apply_amplifier() {
        assert_eq!(make_sobel_detector(2.0).unwrap().amplifier(), 2.0);
        assert_eq!(make_roberts_detector(1.0).unwrap().amplifier(), 1.0);
        assert_eq!(make_difference_detector(8.0).unwrap().amplifier(), 8.0);
        assert_eq!(make_prewitt_detector(0.25).unwrap().amplifier(), 0.25);
        assert!(make_sobel_detector(0.0).is_err());
        assert!(make_prewitt_detector(f64::NAN).is_err());
    }

    #[test]
    fn factories_inject_preset_kernels() {
        let sobel = make_sobel_detector(DEFAULT_AMPLIFIER).unwrap();
        let (kx, ky) = GradientPreset::Sobel.kernels();
        assert_eq!(sobel.kernel_x(), &kx);
        assert_eq!(sobel.kernel_y(), &ky);
    }

    #[test]
    fn detector_kind_parses_names() {
        for kind in DetectorKind::ALL {
            assert_eq!(kind.name().parse::<DetectorKind>().unwrap(), kind);
        }
        assert_eq!(" Sobel ".parse::<DetectorKind>().unwrap(), DetectorKind::Sobel);
        let err = "canny".parse::<DetectorKind>().unwrap_err();
        assert_eq!(
            err,
            EdgeKitError::UnknownDetector {
                name: "canny".to_string()
            }
        );
    }

    #[test]
    fn boxed_detectors_behave_like_concrete_ones() {
        let grid = PixelGrid::new((0u8..25).map(|v| v * 10).collect(), 5, 5).unwrap();
        let boxed = DetectorKind::Prewitt.build(1.0, false).unwrap();
        let concrete = make_prewitt_detector(1.0).unwrap();
        assert_eq!(boxed.detect(&grid), concrete.detect(&grid));
        assert!(DetectorKind::Roberts.build(-2.0, false).is_err());
    }
}
