//! Interior-pixel scan shared by every detector.
//!
//! The scan allocates a white canvas, then visits each interior pixel, asks a
//! per-pixel combiner for the raw edge response, scales it by the amplifier and
//! quantizes it into the canvas. Border rows and columns are never written.

use crate::image::{GridView, PixelGrid};
use crate::util::math::quantize;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Returns `true` when the view has at least one interior pixel.
pub(crate) fn has_interior(view: GridView<'_>) -> bool {
    view.width() >= 3 && view.height() >= 3
}

/// Returns `true` when `(row, col)` has all eight neighbors inside the view.
pub(crate) fn is_interior(view: GridView<'_>, row: usize, col: usize) -> bool {
    row >= 1 && col >= 1 && row + 1 < view.height() && col + 1 < view.width()
}

/// Counts interior samples with a nonzero response in a detector output.
///
/// Border samples are always 255 and are not counted.
pub fn edge_pixel_count(edges: &PixelGrid) -> usize {
    let (width, height) = (edges.width(), edges.height());
    if width < 3 || height < 3 {
        return 0;
    }
    edges
        .as_slice()
        .chunks_exact(width)
        .take(height - 1)
        .skip(1)
        .map(|row| row[1..width - 1].iter().filter(|&&v| v > 0).count())
        .sum()
}

/// Sequential scan over all interior pixels.
///
/// `respond` receives the rows above, at and below the current row plus the
/// column, and returns the unamplified response.
pub fn scan_interior<F>(view: GridView<'_>, amplifier: f64, respond: F) -> PixelGrid
where
    F: Fn([&[u8]; 3], usize) -> f64,
{
    let width = view.width();
    let height = view.height();
    let mut out = PixelGrid::white(height, width);
    if !has_interior(view) {
        return out;
    }

    for (row, out_row) in out
        .as_mut_slice()
        .chunks_exact_mut(width)
        .enumerate()
        .take(height - 1)
        .skip(1)
    {
        fill_row(view, row, out_row, amplifier, &respond);
    }
    out
}

/// Runs the row-parallel scan when `parallel` is set and the `rayon` feature
/// is enabled, the sequential scan otherwise.
pub(crate) fn scan_with<F>(
    view: GridView<'_>,
    amplifier: f64,
    parallel: bool,
    respond: F,
) -> PixelGrid
where
    F: Fn([&[u8]; 3], usize) -> f64 + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if parallel {
            return self::rayon::scan_interior_par(view, amplifier, respond);
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;
    scan_interior(view, amplifier, respond)
}

/// Writes the interior columns of output row `row`.
#[inline]
pub(crate) fn fill_row<F>(
    view: GridView<'_>,
    row: usize,
    out_row: &mut [u8],
    amplifier: f64,
    respond: &F,
) where
    F: Fn([&[u8]; 3], usize) -> f64,
{
    let rows = [
        view.row(row - 1).expect("row above interior row"),
        view.row(row).expect("interior row within bounds"),
        view.row(row + 1).expect("row below interior row"),
    ];
    for (col, out) in out_row
        .iter_mut()
        .enumerate()
        .take(view.width() - 1)
        .skip(1)
    {
        *out = quantize(amplifier * respond(rows, col));
    }
}
