// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of scratch values: the
/// per-pixel energy map, or the cumulative cost table built while
/// searching for a seam.  Addressed by `(x, y)`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Default + Copy> TwoDimensionalMap<T> {
    /// A new map with every cell set to the default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![T::default(); width as usize * height as usize],
        }
    }
}

impl<T> TwoDimensionalMap<T> {
    /// Build a map from row-major values.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "a {}x{} map needs {} values",
            width,
            height,
            width as usize * height as usize
        );
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Every value, in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    // Keep the index math in a singular location and never, ever mess
    // with it.  Same layout as image::ImageBuffer.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<T> Index<(u32, u32)> for TwoDimensionalMap<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<T> IndexMut<(u32, u32)> for TwoDimensionalMap<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
