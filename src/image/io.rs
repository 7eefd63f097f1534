//! Convenience helpers for loading and saving grids via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{GridView, PixelGrid};
use crate::util::{EdgeKitError, EdgeKitResult};
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> EdgeKitResult<GridView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    GridView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned grid from a grayscale image buffer.
pub fn grid_from_gray_image(img: &image::GrayImage) -> EdgeKitResult<PixelGrid> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelGrid::new(img.as_raw().clone(), width, height)
}

/// Creates an owned grid from a dynamic image, converting it to luma.
pub fn grid_from_dynamic_image(img: &image::DynamicImage) -> EdgeKitResult<PixelGrid> {
    let gray = img.to_luma8();
    grid_from_gray_image(&gray)
}

/// Converts a grid back into a grayscale image buffer.
pub fn grid_to_gray_image(grid: &PixelGrid) -> EdgeKitResult<image::GrayImage> {
    let width = u32::try_from(grid.width()).map_err(|_| EdgeKitError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
    })?;
    let height = u32::try_from(grid.height()).map_err(|_| EdgeKitError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
    })?;
    image::GrayImage::from_raw(width, height, grid.as_slice().to_vec()).ok_or(
        EdgeKitError::BufferTooSmall {
            needed: grid.width() * grid.height(),
            got: grid.as_slice().len(),
        },
    )
}

/// Loads an image from disk and converts it to a grayscale grid.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> EdgeKitResult<PixelGrid> {
    let img = image::open(path).map_err(|err| EdgeKitError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_dynamic_image(&img)
}

/// Saves a grid to disk; the format is inferred from the path extension.
pub fn save_gray_image<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> EdgeKitResult<()> {
    let img = grid_to_gray_image(grid)?;
    img.save(path).map_err(|err| EdgeKitError::ImageIo {
        reason: err.to_string(),
    })
}
