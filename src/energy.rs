// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude: the color
//! distance between its horizontal neighbors plus the color distance
//! between its vertical neighbors, square-rooted.  Border pixels borrow
//! the gradient of their nearest interior neighbor.  Alpha plays no
//! part; pixels are compared through their RGB projection.

use crate::axis::AxisView;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImage, GrayImage, Luma, Pixel};
use itertools::iproduct;
use num_traits::ToPrimitive;

/// Per-pixel energy of an active region.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
fn energy_of_pair<P: Pixel>(p1: &P, p2: &P) -> f64 {
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.0.iter()
        .zip(c2.0.iter())
        .map(|(a, b)| {
            let delta = a.to_f64().unwrap_or_default() - b.to_f64().unwrap_or_default();
            delta * delta
        })
        .sum()
}

/// The pair of positions whose difference is the gradient at `pos`
/// along an axis of the given extent.
///
/// With three or more pixels the position is clamped into the
/// interior, so borders reuse their neighbor's gradient.  Two pixels
/// can only be compared with each other, and a lone pixel has no
/// gradient at all.
pub fn gradient_span(pos: u32, extent: u32) -> (u32, u32) {
    if extent < 3 {
        return (0, extent - 1);
    }
    let centre = pos.max(1).min(extent - 2);
    (centre - 1, centre + 1)
}

/// Energy of the pixel at logical (x, y) given the view's current
/// contents.
pub fn pixel_energy<I: GenericImage>(view: &AxisView<I>, x: u32, y: u32) -> f64 {
    let (width, height) = view.dimensions();
    let (left, right) = gradient_span(x, width);
    let (up, down) = gradient_span(y, height);

    let horizontal = energy_of_pair(&view.get_pixel(left, y), &view.get_pixel(right, y));
    let vertical = energy_of_pair(&view.get_pixel(x, up), &view.get_pixel(x, down));
    (horizontal + vertical).sqrt()
}

/// Compute the energy of every pixel in the active region.
pub fn calculate_energy<I: GenericImage>(view: &AxisView<I>) -> EnergyMap {
    let (width, height) = view.dimensions();
    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(view, x, y);
    }
    emap
}

/// Render an energy map as a greyscale image, scaled so the most
/// energetic pixel is white.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = energy.values().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        if factor > 0.0 {
            Luma([(energy[(x, y)] / factor * 255.0).round() as u8])
        } else {
            Luma([0])
        }
    })
}
