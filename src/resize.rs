// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! File in, file out.
//!
//! Nothing is written until the whole carve has succeeded: the
//! intermediate buffer is not a valid image on its own.  Both images
//! are encoded in memory first, and the output is always the last
//! file written.

use crate::axis::{Axis, AxisView};
use crate::config::CarveConfig;
use crate::energy::{calculate_energy, energy_to_image};
use crate::error::{CarveError, Result};
use crate::seamcarver::{check_reduction, SeamCarver};
use image::{
    DynamicImage, GenericImageView, GrayImage, ImageBuffer, ImageError, ImageOutputFormat, Pixel,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

fn carve_buffer<P: Pixel + 'static>(
    image: ImageBuffer<P, Vec<P::Subpixel>>,
    reduce_width: u32,
    reduce_height: u32,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    let mut carver = SeamCarver::new(image);
    carver.carve(reduce_width, reduce_height)?;
    Ok(carver.into_image())
}

/// Carve a decoded image.  Images with an alpha channel are carved as
/// RGBA so transparency travels with its pixel; everything else as
/// 8-bit RGB.
pub fn resize(image: DynamicImage, reduce_width: u32, reduce_height: u32) -> Result<DynamicImage> {
    if image.color().has_alpha() {
        carve_buffer(image.into_rgba8(), reduce_width, reduce_height)
            .map(DynamicImage::ImageRgba8)
    } else {
        carve_buffer(image.into_rgb8(), reduce_width, reduce_height)
            .map(DynamicImage::ImageRgb8)
    }
}

/// The energy map of a whole image, rendered as greyscale.
pub fn energy_image(image: &DynamicImage) -> GrayImage {
    let mut rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let view = AxisView::new(&mut rgb, Axis::Width, width, height);
    energy_to_image(&calculate_energy(&view))
}

fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| CarveError::Decode {
        path: path.display().to_string(),
        source,
    })
}

fn encode_error(path: &Path, source: ImageError) -> CarveError {
    CarveError::Encode {
        path: path.display().to_string(),
        source,
    }
}

fn encode(image: &DynamicImage, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .map_err(|source| encode_error(path, source))?;
    Ok(bytes.into_inner())
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| encode_error(path, ImageError::IoError(e)))
}

/// Read the input, carve it, and write the result as PNG.  Returns the
/// final (width, height).
pub fn resize_file(config: &CarveConfig) -> Result<(u32, u32)> {
    let image = decode(&config.input)?;
    let (width, height) = image.dimensions();
    info!(input = %config.input.display(), width, height, "decoded");
    check_reduction(Axis::Width, width, config.reduce_width)?;
    check_reduction(Axis::Height, height, config.reduce_height)?;

    let energy = match &config.energy_map {
        Some(path) => {
            let map = DynamicImage::ImageLuma8(energy_image(&image));
            Some((path, encode(&map, path)?))
        }
        None => None,
    };
    let carved = resize(image, config.reduce_width, config.reduce_height)?;
    let output = encode(&carved, &config.output)?;

    if let Some((path, bytes)) = &energy {
        write(path, bytes)?;
        info!(energy = %path.display(), "wrote energy map");
    }
    if let Err(e) = write(&config.output, &output) {
        if let Some((path, _)) = &energy {
            fs::remove_file(path).ok();
        }
        return Err(e);
    }

    let dimensions = carved.dimensions();
    info!(
        output = %config.output.display(),
        width = dimensions.0,
        height = dimensions.1,
        "wrote"
    );
    Ok(dimensions)
}
