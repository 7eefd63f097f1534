//! Rayon-parallel interior scan (feature-gated).
//!
//! Output rows are independent: each one reads a fixed three-row window of the
//! shared input view, so rows are distributed across threads without any
//! ordering constraint. The result is byte-identical to the sequential scan.

use crate::image::{GridView, PixelGrid};
use crate::scan::{fill_row, has_interior};
use rayon::prelude::*;

/// Row-parallel scan over all interior pixels.
pub fn scan_interior_par<F>(view: GridView<'_>, amplifier: f64, respond: F) -> PixelGrid
where
    F: Fn([&[u8]; 3], usize) -> f64 + Sync,
{
    let width = view.width();
    let height = view.height();
    let mut out = PixelGrid::white(height, width);
    if !has_interior(view) {
        return out;
    }

    out.as_mut_slice()
        .par_chunks_exact_mut(width)
        .enumerate()
        .skip(1)
        .take(height - 2)
        .for_each(|(row, out_row)| fill_row(view, row, out_row, amplifier, &respond));
    out
}
