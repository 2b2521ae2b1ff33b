// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Repeatedly find and remove seams until the image reaches the
//! requested size.  While both dimensions need shrinking, vertical
//! and horizontal seams take turns; after that, whichever dimension is
//! still too large is finished off on its own.

use crate::error::CarveError;
use crate::flipper::Axis;
use crate::pixelgrid::PixelGrid;
use crate::seamengine::SeamEngine;
use image::RgbImage;
use log::{debug, info};

impl SeamEngine {
    // The whole energy field and search table are rebuilt for every
    // seam.  Only the pixels either side of the last seam actually
    // change, so there is room here for caching.

    fn carve_once(&mut self, axis: Axis) {
        let seam = self.find_seam(axis);
        self.remove_seam(&seam, axis);
        debug!("{:?}: {}x{}", axis, self.width(), self.height());
    }

    /// Carve seams out of the grid until it is `new_width` x
    /// `new_height`.  Fails, leaving the grid alone, if either target
    /// is larger than the grid already is.  Carving stops early once
    /// either dimension reaches 0, since an empty grid has no seams.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), CarveError> {
        let (width, height) = (self.width(), self.height());
        if width < new_width || height < new_height {
            return Err(CarveError::Upscale {
                requested_width: new_width,
                requested_height: new_height,
                width,
                height,
            });
        }

        info!(
            "carving {}x{} down to {}x{}",
            width, height, new_width, new_height
        );
        let mut axis = Axis::Vertical;
        while !self.grid().is_empty() && self.width() > new_width && self.height() > new_height {
            self.carve_once(axis);
            axis = axis.turn();
        }
        while !self.grid().is_empty() && self.width() > new_width {
            self.carve_once(Axis::Vertical);
        }
        while !self.grid().is_empty() && self.height() > new_height {
            self.carve_once(Axis::Horizontal);
        }
        info!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }
}

/// Given a decoded image and a desired new width and height, return a
/// copy of the image carved down to that size.
pub fn seamcarve(image: &RgbImage, new_width: u32, new_height: u32) -> Result<RgbImage, CarveError> {
    let mut engine = SeamEngine::new(PixelGrid::from(image));
    engine.carve(new_width, new_height)?;
    Ok(engine.grid().to_rgb_image())
}
