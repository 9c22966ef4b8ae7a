// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::axis::Axis;
use failure::Fail;

/// Everything that can stop a resize.  Broken internal invariants are
/// not in here; those are assertions.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// A reduction that would leave no pixels along an axis.
    #[fail(
        display = "cannot reduce {} {} by {}: at least one pixel must remain",
        axis, extent, by
    )]
    TooSmall { axis: Axis, extent: u32, by: u32 },

    /// Bad or missing command-line arguments.
    #[fail(display = "{}", _0)]
    Cli(#[cause] clap::Error),

    #[fail(display = "could not read image {}: {}", path, source)]
    Decode {
        path: String,
        #[cause]
        source: image::ImageError,
    },

    #[fail(display = "could not write image {}: {}", path, source)]
    Encode {
        path: String,
        #[cause]
        source: image::ImageError,
    },
}

impl CarveError {
    /// Process exit status: 2 for usage errors, 1 for I/O failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CarveError::TooSmall { .. } | CarveError::Cli(_) => 2,
            CarveError::Decode { .. } | CarveError::Encode { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CarveError>;
