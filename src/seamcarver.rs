// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The carver owns a scratch copy of the image and an active region
//! within it.  Every seam removal slides pixels toward the origin and
//! shrinks the active region by one; the stale pixels left at the
//! right and bottom edges are never looked at again and are cropped
//! away at the end.  The backing buffer is never reallocated.

use crate::axis::{Axis, AxisView};
use crate::error::{CarveError, Result};
use crate::seamfinder::carve_seam;
use image::{imageops, GenericImageView, ImageBuffer, Pixel};
use tracing::{debug, trace};

/// An image being carved, and how much of it is still in play.
pub struct SeamCarver<P: Pixel> {
    image: ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
}

/// Refuse a reduction that would leave no pixels along `axis`.
pub(crate) fn check_reduction(axis: Axis, extent: u32, by: u32) -> Result<()> {
    if by >= extent {
        return Err(CarveError::TooSmall { axis, extent, by });
    }
    Ok(())
}

impl<P: Pixel + 'static> SeamCarver<P> {
    /// Take ownership of an image to be carved.  The whole image starts
    /// out active.
    pub fn new(image: ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        let (width, height) = image.dimensions();
        SeamCarver {
            image,
            width,
            height,
        }
    }

    /// The current active (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Remove the cheapest seam along `axis`, shrinking that dimension
    /// by one.  Returns the seam, as positions along `axis`, one per
    /// line.
    ///
    /// Panics if the dimension is already down to a single pixel.
    pub fn remove_seam(&mut self, axis: Axis) -> Vec<u32> {
        let (extent, across) = axis.logical(self.width, self.height);
        assert!(extent > 1, "cannot remove a seam from a {} of 1", axis);

        let seam = {
            let mut view = AxisView::new(&mut self.image, axis, extent, across);
            carve_seam(&mut view)
        };
        match axis {
            Axis::Width => self.width -= 1,
            Axis::Height => self.height -= 1,
        }
        trace!(%axis, ?seam, width = self.width, height = self.height, "removed seam");
        seam
    }

    /// Remove `reduce_width` columns and then `reduce_height` rows.
    /// Both counts are checked before anything is touched.
    pub fn carve(&mut self, reduce_width: u32, reduce_height: u32) -> Result<()> {
        check_reduction(Axis::Width, self.width, reduce_width)?;
        check_reduction(Axis::Height, self.height, reduce_height)?;

        debug!(from = self.width, by = reduce_width, "carving columns");
        for _ in 0..reduce_width {
            self.remove_seam(Axis::Width);
        }
        debug!(from = self.height, by = reduce_height, "carving rows");
        for _ in 0..reduce_height {
            self.remove_seam(Axis::Height);
        }
        Ok(())
    }

    /// Crop away everything outside the active region.
    pub fn into_image(self) -> ImageBuffer<P, Vec<P::Subpixel>> {
        if (self.width, self.height) == self.image.dimensions() {
            return self.image;
        }
        imageops::crop_imm(&self.image, 0, 0, self.width, self.height).to_image()
    }
}

/// Given an image and how many columns and rows to remove, carve out
/// that many seams and return the shrunken copy.
pub fn seamcarve<I, P>(
    image: &I,
    reduce_width: u32,
    reduce_height: u32,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
{
    let (width, height) = image.dimensions();
    let scratch = ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y));
    let mut carver = SeamCarver::new(scratch);
    carver.carve(reduce_width, reduce_height)?;
    Ok(carver.into_image())
}
