// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam engine
//!
//! Owns a pixel grid, finds the cheapest seam through it in either
//! direction, and carves seams out of it in place.

use crate::energy::{energy_to_image, pixel_energy};
use crate::flipper::Axis;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::SeamFinder;
use crate::twodmap::{Node, SearchTable};
use image::GrayImage;
use log::trace;

/// One coordinate per layer: for a vertical seam, the column to
/// remove from each row; for a horizontal seam, the row to remove
/// from each column.
pub type Seam = Vec<u32>;

/// The seam carving engine.  It has exclusive use of its grid; to
/// carve several images at once, give each its own engine.
#[derive(Debug, Clone)]
pub struct SeamEngine {
    grid: PixelGrid,
}

impl SeamEngine {
    /// Takes ownership of a grid to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamEngine { grid }
    }

    /// The grid in its current, possibly carved, state.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Give the carved grid back.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Current width of the grid.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Current height of the grid.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The energy of the pixel at `(column, row)`.
    pub fn energy_at(&self, column: u32, row: u32) -> f64 {
        pixel_energy(&self.grid, column, row)
    }

    /// The current energy field as a greyscale image.
    pub fn energy_image(&self) -> GrayImage {
        energy_to_image(&self.grid)
    }

    /// Find the lowest-energy seam running along `axis`.  An empty
    /// grid yields an empty seam.
    pub fn find_seam(&self, axis: Axis) -> Seam {
        if self.grid.is_empty() {
            return Vec::new();
        }

        let (layers, positions) = axis.extents((self.width(), self.height()));
        let energy = |layer, position| {
            let (column, row) = axis.to_column_row(layer, position);
            pixel_energy(&self.grid, column, row)
        };

        let mut target = SearchTable::new(positions, layers);
        for p in 0..positions {
            target[(p, 0)] = Node {
                energy: energy(0, p),
                parent: p,
            };
        }

        for l in 1..layers {
            for p in 0..positions {
                // Each cell's cost is its own energy plus the cheapest
                // of the (up to) three cells adjacent to it in the
                // previous layer.  Candidates go straight ahead first,
                // then lower, then higher; min_by keeps the first of
                // equal minima.
                let below = p.checked_sub(1);
                let above = Some(p + 1).filter(|&q| q < positions);
                let parent = [Some(p), below, above]
                    .iter()
                    .flatten()
                    .cloned()
                    .min_by(|a, b| {
                        target[(*a, l - 1)]
                            .energy
                            .total_cmp(&target[(*b, l - 1)].energy)
                    })
                    .unwrap_or(p);
                target[(p, l)] = Node {
                    energy: energy(l, p) + target[(parent, l - 1)].energy,
                    parent,
                };
            }
        }

        // The first position with the least energy in the final layer.
        let last = layers - 1;
        let mut position = (0..positions)
            .min_by(|a, b| {
                target[(*a, last)]
                    .energy
                    .total_cmp(&target[(*b, last)].energy)
            })
            .unwrap_or(0);

        // Working backwards, follow the parents to the first layer,
        // then reverse.
        let seam: Seam = (0..layers)
            .rev()
            .fold(Vec::with_capacity(layers as usize), |mut acc, l| {
                acc.push(position);
                position = target[(position, l)].parent;
                acc
            })
            .into_iter()
            .rev()
            .collect();
        trace!("{:?} seam: {:?}", axis, seam);
        seam
    }

    /// Remove `seam`, which must have been found along `axis` on the
    /// grid as it is now.
    pub fn remove_seam(&mut self, seam: &[u32], axis: Axis) {
        match axis {
            Axis::Vertical => self.remove_vertical_seam(seam),
            Axis::Horizontal => self.remove_horizontal_seam(seam),
        }
    }

    /// Delete one row index from every column, shrinking the height
    /// by one.  A no-op on an empty grid.  Panics if the seam does
    /// not fit the grid.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) {
        if self.grid.is_empty() {
            return;
        }
        let (width, height) = (self.width(), self.height());
        assert_eq!(
            seam.len(),
            width as usize,
            "horizontal seam length does not match the image width"
        );
        assert!(
            seam.iter().all(|&y| y < height),
            "horizontal seam leaves the image"
        );
        for (x, &y) in seam.iter().enumerate() {
            self.grid.delete_column_cell(x as u32, y);
        }
    }

    /// Close up every row over its seam pixel, then drop the final
    /// column, shrinking the width by one.  A no-op on an empty grid.
    /// Panics if the seam does not fit the grid.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) {
        if self.grid.is_empty() {
            return;
        }
        let (width, height) = (self.width(), self.height());
        assert_eq!(
            seam.len(),
            height as usize,
            "vertical seam length does not match the image height"
        );
        assert!(
            seam.iter().all(|&x| x < width),
            "vertical seam leaves the image"
        );
        for (y, &x) in seam.iter().enumerate() {
            self.grid.shift_row_left_from(x, y as u32);
        }
        self.grid.drop_last_column();
    }
}

impl SeamFinder for SeamEngine {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.find_seam(Axis::Horizontal)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        self.find_seam(Axis::Vertical)
    }
}
