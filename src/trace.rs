//! Instrumentation for detection passes.
//!
//! With the `tracing` feature each pass runs inside an info-level `detect`
//! span and reports how many edge pixels it produced. Without the feature the
//! span is a no-op guard and the edge count is never computed.

use crate::image::PixelGrid;

/// Opens the `detect` span for one pass of `$detector` over `$view`.
#[cfg(feature = "tracing")]
macro_rules! detect_span {
    ($detector:expr, $view:expr, $parallel:expr $(, $($field:tt)*)?) => {
        tracing::info_span!(
            "detect",
            detector = $detector,
            width = $view.width(),
            height = $view.height(),
            parallel = $parallel
            $(, $($field)*)?
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! detect_span {
    ($detector:expr, $view:expr, $parallel:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

pub(crate) use detect_span;

/// Emits the `edge_pixels` event for a finished detection pass.
#[cfg(feature = "tracing")]
pub(crate) fn record_edges(edges: &PixelGrid) {
    tracing::info!(
        edge_pixels = crate::scan::edge_pixel_count(edges),
        "edge_pixels"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn record_edges(_edges: &PixelGrid) {}

/// Span guard used when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub(crate) fn entered(self) -> Self {
        self
    }
}
