// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up: the classic
//! d(R)² + d(G)² + d(B)².

use crate::pixelgrid::Pixel;
use image::Pixel as _;

/// (Pixel, Pixel) -> Energy
///
/// Takes the channels (R,G,B) from two pixels, squares the difference
/// of each channel, and sums them up.
#[inline]
pub fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> u32 {
    p1.channels()
        .iter()
        .zip(p2.channels())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn identical_pixels_have_no_energy() {
        let p = Rgb([12, 200, 99]);
        assert_eq!(energy_of_pair(&p, &p), 0);
    }

    #[test]
    fn channels_are_summed_as_squares() {
        let p1 = Rgb([255, 203, 51]);
        let p2 = Rgb([255, 205, 255]);
        assert_eq!(energy_of_pair(&p1, &p2), 4 + 204 * 204);
        assert_eq!(energy_of_pair(&p2, &p1), 4 + 204 * 204);
    }
}
