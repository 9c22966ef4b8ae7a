// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! Shrinks an image one seam at a time: a seam is the connected path
//! of pixels, one per row (or column), whose dual-gradient energy sums
//! lowest.  All width seams are removed first, then all height seams,
//! in place in a single backing buffer.

pub mod axis;
pub use axis::{Axis, AxisView};

pub mod config;
pub use config::CarveConfig;

pub mod energy;
pub use energy::{calculate_energy, energy_to_image, EnergyMap};

pub mod error;
pub use error::{CarveError, Result};

pub mod logging;
pub use logging::init_logging;

pub mod resize;
pub use resize::{resize, resize_file};

pub mod seamcarver;
pub use seamcarver::{seamcarve, SeamCarver};

pub mod seamfinder;
pub mod twodmap;
