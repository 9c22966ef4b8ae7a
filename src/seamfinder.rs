// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find and remove the minimum-energy seam
//!
//! A seam is a top-to-bottom, 8-connected path of one pixel per row.
//! The cheapest one is found with a dynamic program over rows: the
//! cumulative cost of a pixel is its own energy plus the cheapest
//! cumulative cost among the pixels above it that a seam could have
//! come from.  Walking back up from the cheapest bottom pixel along
//! those same candidates recovers the seam.
//!
//! Everything here works in logical coordinates, so the same code
//! removes columns and rows; see `crate::axis`.

use crate::axis::AxisView;
use crate::energy::pixel_energy;
use crate::twodmap::TwoDimensionalMap;
use image::GenericImage;
use std::ops::RangeInclusive;

/// The minimum total energy of any seam reaching each pixel from the
/// top row.
pub type CostMap = TwoDimensionalMap<f64>;

/// The columns in the row above that a seam passing through column
/// `x` may have come from.  Seams never wrap, so the border columns
/// have two candidates and everything else has three.  This is the
/// one place the rule lives; the relaxation and the backtrace both
/// use it.
pub fn parent_range(x: u32, width: u32) -> RangeInclusive<u32> {
    debug_assert!(x < width);
    if width == 1 {
        0..=0
    } else if x == 0 {
        0..=1
    } else if x == width - 1 {
        x - 1..=x
    } else {
        x - 1..=x + 1
    }
}

// The first minimum encountered in ascending order wins a tie.
fn argmin<F: Fn(u32) -> f64>(candidates: RangeInclusive<u32>, cost: F) -> u32 {
    let first = *candidates.start();
    candidates.fold(first, |best, x| if cost(x) < cost(best) { x } else { best })
}

/// Build the cumulative cost table for the view's active region.
/// Energy is computed on the fly from the current contents; nothing
/// is carried over from a previous seam.
pub fn cumulative_cost<I: GenericImage>(view: &AxisView<I>) -> CostMap {
    let (width, height) = view.dimensions();
    let mut costs = CostMap::new(width, height);

    // The top row has no predecessors.
    for x in 0..width {
        costs[(x, 0)] = pixel_energy(view, x, 0);
    }

    for y in 1..height {
        for x in 0..width {
            let parent = argmin(parent_range(x, width), |px| costs[(px, y - 1)]);
            let cost = pixel_energy(view, x, y) + costs[(parent, y - 1)];
            costs[(x, y)] = cost;
        }
    }
    costs
}

/// Given a cost table, return the x coordinate of the seam in each
/// row, top to bottom.
pub fn find_seam(costs: &CostMap) -> Vec<u32> {
    let (width, height) = costs.dimensions();
    let last = height - 1;

    // Find the x coordinate of the bottommost seam with the least energy.
    let mut seam_col = argmin(0..=width - 1, |x| costs[(x, last)]);

    // Working backwards, collect the cheapest parent of each row, then
    // reverse.
    let mut seam = (0..last)
        .rev()
        .fold(vec![seam_col], |mut acc, y| {
            seam_col = argmin(parent_range(seam_col, width), |px| costs[(px, y)]);
            acc.push(seam_col);
            acc
        });
    seam.reverse();
    seam
}

/// Splice the seam out of the view, one line at a time.
pub fn remove_seam<I: GenericImage>(view: &mut AxisView<I>, seam: &[u32]) {
    let (_, height) = view.dimensions();
    assert_eq!(
        seam.len(),
        height as usize,
        "a seam needs exactly one pixel per line"
    );
    for (y, &x) in seam.iter().enumerate() {
        view.shift_left(x, y as u32);
    }
}

/// Find the cheapest seam in the view and remove it, returning the
/// seam that was taken.  The caller owns shrinking the active region.
pub fn carve_seam<I: GenericImage>(view: &mut AxisView<I>) -> Vec<u32> {
    let seam = find_seam(&cumulative_cost(view));
    remove_seam(view, &seam);
    seam
}
