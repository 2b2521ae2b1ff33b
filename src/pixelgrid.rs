// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! A mutable, rectangular field of RGB pixels, addressed as
//! `(column, row)`.  The storage is column-major: one `Vec` per
//! column, each exactly `height` pixels long.  That makes deleting a
//! single cell out of a column (horizontal seams) a plain
//! `Vec::remove`, and removing a vertical seam a per-row compaction
//! followed by dropping the last column.

use image::{Rgb, RgbImage};
use itertools::iproduct;

/// One pixel: red, green and blue, eight bits each.
pub type Pixel = Rgb<u8>;

/// A rectangular grid of pixels that shrinks in place as seams are
/// carved out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    columns: Vec<Vec<Pixel>>,
    // Row count remembered for when every column has been carved away.
    rows: u32,
}

impl PixelGrid {
    /// A `width` x `height` grid with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        PixelGrid {
            columns: vec![vec![fill; height as usize]; width as usize],
            rows: height,
        }
    }

    /// A `width` x `height` grid whose pixels are produced by calling
    /// `f(column, row)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let columns = (0..width)
            .map(|x| (0..height).map(|y| f(x, y)).collect())
            .collect();
        PixelGrid {
            columns,
            rows: height,
        }
    }

    /// Current width, in columns.
    pub fn width(&self) -> u32 {
        self.columns.len() as u32
    }

    /// Current height, in rows.
    pub fn height(&self) -> u32 {
        match self.columns.first() {
            Some(column) => column.len() as u32,
            None => self.rows,
        }
    }

    /// True when there is nothing left to carve.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The pixel at `(column, row)`.  Panics if either coordinate is
    /// out of range; callers are expected to stay inside the
    /// dimensions they just read.
    #[inline]
    pub fn pixel_at(&self, column: u32, row: u32) -> Pixel {
        assert!(
            column < self.width() && row < self.height(),
            "pixel ({}, {}) outside of {}x{} grid",
            column,
            row,
            self.width(),
            self.height()
        );
        self.columns[column as usize][row as usize]
    }

    /// Remove the cell at `row` from `column`, moving every cell
    /// below it up by one.  Only sound as part of removing one cell
    /// from every column.
    pub fn delete_column_cell(&mut self, column: u32, row: u32) {
        let cells = &mut self.columns[column as usize];
        assert!(
            (row as usize) < cells.len(),
            "row {} outside of column {} of height {}",
            row,
            column,
            cells.len()
        );
        cells.remove(row as usize);
        self.rows = cells.len() as u32;
    }

    /// Within `row`, move every pixel right of `column` one place to
    /// the left, overwriting the pixel at `column`.  The last column's
    /// cell in that row becomes stale until `drop_last_column`.
    pub fn shift_row_left_from(&mut self, column: u32, row: u32) {
        let width = self.width();
        assert!(
            column < width && row < self.height(),
            "pixel ({}, {}) outside of {}x{} grid",
            column,
            row,
            width,
            self.height()
        );
        let row = row as usize;
        for x in (column as usize)..(width as usize - 1) {
            let next = self.columns[x + 1][row];
            self.columns[x][row] = next;
        }
    }

    /// Throw away the rightmost column.
    pub fn drop_last_column(&mut self) {
        if let Some(column) = self.columns.pop() {
            self.rows = column.len() as u32;
        }
    }

    /// Copy the grid out into an `image` buffer, for handing to an
    /// encoder.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| self.pixel_at(x, y))
    }
}

impl From<&RgbImage> for PixelGrid {
    fn from(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let mut grid = PixelGrid::new(width, height, Rgb([0, 0, 0]));
        for (x, y) in iproduct!(0..width, 0..height) {
            grid.columns[x as usize][y as usize] = *image.get_pixel(x, y);
        }
        grid
    }
}
