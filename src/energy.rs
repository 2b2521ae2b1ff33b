// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The dual-gradient energy: for every pixel, the squared RGB
//! distance between its left and right neighbours, plus the same for
//! its upper and lower neighbours, square-rooted.  Neighbours wrap
//! around the edges, so the image is treated as a torus and the
//! borders need no special handling.
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```

use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::energy_of_pair;
use image::{GrayImage, Luma};
use itertools::iproduct;

#[inline]
fn next(i: u32, len: u32) -> u32 {
    if i + 1 >= len {
        i + 1 - len
    } else {
        i + 1
    }
}

#[inline]
fn prev(i: u32, len: u32) -> u32 {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

/// The squared horizontal gradient at `(column, row)`.
pub fn delta_x(grid: &PixelGrid, column: u32, row: u32) -> u32 {
    let width = grid.width();
    energy_of_pair(
        &grid.pixel_at(next(column, width), row),
        &grid.pixel_at(prev(column, width), row),
    )
}

/// The squared vertical gradient at `(column, row)`.
pub fn delta_y(grid: &PixelGrid, column: u32, row: u32) -> u32 {
    let height = grid.height();
    energy_of_pair(
        &grid.pixel_at(column, next(row, height)),
        &grid.pixel_at(column, prev(row, height)),
    )
}

/// The energy of the pixel at `(column, row)`.  A pure function of
/// the grid's current contents; the coordinates must be in range.
pub fn pixel_energy(grid: &PixelGrid, column: u32, row: u32) -> f64 {
    f64::from(delta_x(grid, column, row) + delta_y(grid, column, row)).sqrt()
}

/// Render the energy of every pixel as a greyscale image, scaled so
/// the most energetic pixel is white.  A grid with no energy at all
/// renders black.
pub fn energy_to_image(grid: &PixelGrid) -> GrayImage {
    let (width, height) = (grid.width(), grid.height());
    if grid.is_empty() {
        return GrayImage::new(width, height);
    }

    let energies: Vec<f64> = iproduct!(0..height, 0..width)
        .map(|(y, x)| pixel_energy(grid, x, y))
        .collect();
    let factor = energies.iter().cloned().fold(0.0, f64::max);

    GrayImage::from_fn(width, height, |x, y| {
        let e = energies[(y as usize) * (width as usize) + (x as usize)];
        if factor > 0.0 {
            Luma([(e * 255.0 / factor).round() as u8])
        } else {
            Luma([0])
        }
    })
}
