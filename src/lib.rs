//! edgekit is a CPU edge-detection library for grayscale images built on
//! fixed 3x3 kernels.
//!
//! Gradient detectors (difference, Roberts, Sobel) combine two directional
//! derivatives into a magnitude; the Prewitt compass detector keeps the
//! strongest of eight rotated templates. Both produce a new grid of the same
//! size with a white (255) border. Row-parallel scanning is available via the
//! `rayon` feature and file I/O via `image-io`.
//!
//! ```
//! use edgekit::{make_sobel_detector, EdgeDetector, PixelGrid};
//!
//! // Uniform input has no gradient: the interior is 0, the border stays 255.
//! let grid = PixelGrid::blank(5, 5, 128);
//! let edges = make_sobel_detector(4.0).unwrap().detect(&grid);
//! assert_eq!(edges[(2, 2)], 0);
//! assert_eq!(edges[(0, 2)], 255);
//! ```

mod trace;

pub mod detect;
pub mod image;
pub mod kernel;
pub mod scan;
pub mod util;

pub use crate::detect::{
    make_difference_detector, make_prewitt_detector, make_roberts_detector, make_sobel_detector,
    DetectorKind, EdgeDetector, GradientDetector, TemplateMatchingDetector, DEFAULT_AMPLIFIER,
};
pub use crate::image::threshold::threshold;
pub use crate::image::{GridView, PixelGrid, MAX_SAMPLE};
pub use crate::kernel::presets::{GradientPreset, PREWITT_COMPASS};
pub use crate::kernel::Kernel;
pub use crate::scan::edge_pixel_count;
pub use crate::util::{EdgeKitError, EdgeKitResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
