//! Grayscale pixel grids and borrowed views.
//!
//! `PixelGrid` owns a contiguous row-major `u8` buffer. `GridView` is a
//! borrowed 2D view into a 1D buffer with an explicit stride. The stride counts
//! elements between the starts of consecutive rows, so a stride larger than the
//! width represents padded rows. ROI slices are zero-copy views into the same
//! backing slice and retain the original stride.
//!
//! All coordinates are `(row, col)`: `row` indexes along the height and `col`
//! along the width.

use std::ops::{Index, IndexMut};

use crate::util::{EdgeKitError, EdgeKitResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod threshold;

/// Largest sample value; the fill value of a white canvas.
pub const MAX_SAMPLE: u8 = u8::MAX;

/// Borrowed 2D grayscale view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct GridView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> GridView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> EdgeKitResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    ///
    /// Zero-sized views are accepted; they have no samples to read.
    pub fn new(data: &'a [u8], width: usize, height: usize, stride: usize) -> EdgeKitResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(EdgeKitError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the sample at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for `row` with length `width`.
    pub fn row(&self, row: usize) -> Option<&'a [u8]> {
        if row >= self.height {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> EdgeKitResult<GridView<'a>> {
        if width == 0 || height == 0 {
            return Err(EdgeKitError::InvalidDimensions { width, height });
        }

        let out_of_bounds = EdgeKitError::RoiOutOfBounds {
            row,
            col,
            height,
            width,
            grid_height: self.height,
            grid_width: self.width,
        };
        let end_row = row.checked_add(height).ok_or(out_of_bounds.clone())?;
        let end_col = col.checked_add(width).ok_or(out_of_bounds.clone())?;
        if end_row > self.height || end_col > self.width {
            return Err(out_of_bounds);
        }

        let start = row
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(col))
            .ok_or(EdgeKitError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(EdgeKitError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        GridView::new(data, width, height, self.stride)
    }

    /// Copies the view into a contiguous owned grid.
    pub fn to_grid(&self) -> PixelGrid {
        let mut data = Vec::with_capacity(self.width * self.height);
        for row in 0..self.height {
            if let Some(samples) = self.row(row) {
                data.extend_from_slice(samples);
            }
        }
        PixelGrid {
            data,
            width: self.width,
            height: self.height,
        }
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> EdgeKitResult<usize> {
    if stride < width {
        return Err(EdgeKitError::InvalidStride { width, stride });
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(EdgeKitError::InvalidDimensions { width, height })?;
    Ok(needed)
}

/// Owned contiguous grayscale image.
///
/// Samples are stored row-major. `Clone` is a deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Creates a grid from a contiguous row-major buffer.
    ///
    /// The buffer length must be exactly `width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> EdgeKitResult<Self> {
        let needed = width
            .checked_mul(height)
            .ok_or(EdgeKitError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(EdgeKitError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(EdgeKitError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a uniform canvas of `height` rows and `width` columns.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn blank(height: usize, width: usize, fill: u8) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("grid of {height}x{width} samples overflows usize"));
        Self {
            data: vec![fill; len],
            width,
            height,
        }
    }

    /// Creates a canvas filled with [`MAX_SAMPLE`].
    pub fn white(height: usize, width: usize) -> Self {
        Self::blank(height, width, MAX_SAMPLE)
    }

    /// Returns an independent deep copy of the grid.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major samples.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the grid and returns its row-major samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Returns the sample at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.offset(row, col).map(|idx| self.data[idx])
    }

    /// Writes `value` at `(row, col)`; returns `false` when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        match self.offset(row, col) {
            Some(idx) => {
                self.data[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Returns the samples of `row`.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    /// Returns a borrowed view of the whole grid.
    pub fn view(&self) -> GridView<'_> {
        GridView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &u8 {
        let (height, width) = (self.height, self.width);
        let idx = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("({row}, {col}) out of bounds for {height}x{width} grid"));
        &self.data[idx]
    }
}

impl IndexMut<(usize, usize)> for PixelGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u8 {
        let (height, width) = (self.height, self.width);
        let idx = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("({row}, {col}) out of bounds for {height}x{width} grid"));
        &mut self.data[idx]
    }
}

impl<'a> From<&'a PixelGrid> for GridView<'a> {
    fn from(grid: &'a PixelGrid) -> Self {
        grid.view()
    }
}
