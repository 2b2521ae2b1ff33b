// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation
//!
//! The seam search walks *layers* (rows for a vertical seam, columns
//! for a horizontal one) and picks one *position* per layer.  By
//! virtually flipping the image 90° for horizontal seams, the one
//! search routine handles both orientations: everything it needs to
//! know about the orientation lives here.

/// Which way a seam runs through the image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    /// Top to bottom, one pixel per row; removing it narrows the image.
    Vertical,
    /// Left to right, one pixel per column; removing it shortens the image.
    Horizontal,
}

impl Axis {
    /// The other orientation.
    pub fn turn(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// Given an image's `(width, height)`, the `(layers, positions)`
    /// of the search table.
    #[inline]
    pub fn extents(self, (width, height): (u32, u32)) -> (u32, u32) {
        match self {
            Axis::Vertical => (height, width),
            Axis::Horizontal => (width, height),
        }
    }

    /// Map a `(layer, position)` in the search table back to the
    /// `(column, row)` of the image.
    #[inline]
    pub fn to_column_row(self, layer: u32, position: u32) -> (u32, u32) {
        match self {
            Axis::Vertical => (position, layer),
            Axis::Horizontal => (layer, position),
        }
    }
}
