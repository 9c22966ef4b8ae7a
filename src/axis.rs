// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Axis-aware pixel access
//!
//! Removing a horizontal seam is exactly the same job as removing a
//! vertical one, with every x swapped for a y.  Rather than physically
//! transposing the backing image every time we want to cut a row,
//! `AxisView` swaps the coordinates on the way in and out.
//!
//! Throughout the carver, *logical* x runs along the dimension being
//! reduced, and logical y runs along the other one.  When reducing
//! width the logical and physical coordinates coincide.

use image::GenericImage;
use std::fmt;

/// The dimension a seam removal shrinks.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// Map a logical coordinate to the physical coordinate of the
    /// backing image.
    pub fn physical(self, x: u32, y: u32) -> (u32, u32) {
        match self {
            Axis::Width => (x, y),
            Axis::Height => (y, x),
        }
    }

    /// Given physical extents, return the (reduced, other) extents as
    /// seen along this axis.  The mapping is its own inverse.
    pub fn logical(self, width: u32, height: u32) -> (u32, u32) {
        self.physical(width, height)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// A transposable window onto the active region of a backing image.
///
/// The view holds exclusive access to the image for the duration of
/// one seam removal.  Pixels beyond the active region are never read
/// or written through it.
pub struct AxisView<'a, I: GenericImage> {
    image: &'a mut I,
    axis: Axis,
    width: u32,
    height: u32,
}

impl<'a, I: GenericImage> AxisView<'a, I> {
    /// Wrap `image`, treating `width` x `height` as the logical active
    /// region along `axis`.
    pub fn new(image: &'a mut I, axis: Axis, width: u32, height: u32) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "active region must be at least 1x1, got {}x{}",
            width,
            height
        );
        let (pw, ph) = axis.physical(width, height);
        assert!(
            pw <= image.width() && ph <= image.height(),
            "active region {}x{} exceeds the {}x{} backing image",
            pw,
            ph,
            image.width(),
            image.height()
        );
        AxisView {
            image,
            axis,
            width,
            height,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Logical (width, height) of the active region.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read the pixel at a logical coordinate.
    pub fn get_pixel(&self, x: u32, y: u32) -> I::Pixel {
        debug_assert!(x < self.width && y < self.height);
        let (px, py) = self.axis.physical(x, y);
        self.image.get_pixel(px, py)
    }

    fn put_pixel(&mut self, x: u32, y: u32, pixel: I::Pixel) {
        let (px, py) = self.axis.physical(x, y);
        self.image.put_pixel(px, py, pixel);
    }

    /// Remove the pixel at logical (x, y) by sliding the rest of its
    /// line one step toward it.  The last active pixel of the line is
    /// left stale; the caller's shrinking active region excludes it.
    pub fn shift_left(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.width && y < self.height);
        for i in x..self.width - 1 {
            let next = self.get_pixel(i + 1, y);
            self.put_pixel(i, y, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn counting_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([(y * 10 + x) as u8]))
    }

    fn row(image: &GrayImage, y: u32) -> Vec<u8> {
        (0..image.width()).map(|x| image.get_pixel(x, y)[0]).collect()
    }

    fn column(image: &GrayImage, x: u32) -> Vec<u8> {
        (0..image.height()).map(|y| image.get_pixel(x, y)[0]).collect()
    }

    #[test]
    fn width_axis_is_identity() {
        assert_eq!(Axis::Width.physical(3, 7), (3, 7));
        assert_eq!(Axis::Width.logical(40, 20), (40, 20));
    }

    #[test]
    fn height_axis_swaps() {
        assert_eq!(Axis::Height.physical(3, 7), (7, 3));
        assert_eq!(Axis::Height.logical(40, 20), (20, 40));
    }

    #[test]
    fn transposed_reads() {
        let mut image = counting_image(4, 3);
        let view = AxisView::new(&mut image, Axis::Height, 3, 4);
        assert_eq!(view.dimensions(), (3, 4));
        assert_eq!(view.get_pixel(2, 1), Luma([21]));
        assert_eq!(view.get_pixel(0, 3), Luma([3]));
    }

    #[test]
    fn shift_left_splices_one_row() {
        let mut image = counting_image(4, 2);
        {
            let mut view = AxisView::new(&mut image, Axis::Width, 4, 2);
            view.shift_left(1, 0);
        }
        assert_eq!(row(&image, 0), vec![0, 2, 3, 3]);
        assert_eq!(row(&image, 1), vec![10, 11, 12, 13]);
    }

    #[test]
    fn shift_left_stays_inside_active_region() {
        let mut image = counting_image(4, 1);
        {
            let mut view = AxisView::new(&mut image, Axis::Width, 3, 1);
            view.shift_left(0, 0);
        }
        assert_eq!(row(&image, 0), vec![1, 2, 2, 3]);
    }

    #[test]
    fn shift_left_on_height_moves_a_column_up() {
        let mut image = counting_image(2, 4);
        {
            let mut view = AxisView::new(&mut image, Axis::Height, 4, 2);
            view.shift_left(1, 1);
        }
        assert_eq!(column(&image, 1), vec![1, 21, 31, 31]);
        assert_eq!(column(&image, 0), vec![0, 10, 20, 30]);
    }

    #[test]
    fn shifting_the_last_pixel_is_a_no_op() {
        let mut image = counting_image(3, 1);
        {
            let mut view = AxisView::new(&mut image, Axis::Width, 3, 1);
            view.shift_left(2, 0);
        }
        assert_eq!(row(&image, 0), vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn refuses_oversized_region() {
        let mut image = counting_image(3, 2);
        AxisView::new(&mut image, Axis::Height, 3, 3);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn refuses_empty_region() {
        let mut image = counting_image(3, 2);
        AxisView::new(&mut image, Axis::Width, 0, 2);
    }
}
