// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for crop, rotate and flip operations.
//!
//! Each function returns a fresh [`RawImage`]; the source buffer is never
//! touched, so history entries stay valid.

use super::image::{from_dynamic, to_dynamic};
use crate::domain::media::{PixelRect, RawImage};
use crate::error::{Error, Result};

/// Crops `image` to `rect`.
///
/// # Errors
///
/// Returns [`Error::Raster`] if the rectangle is empty or does not lie fully
/// inside the image. Nothing is clamped here; the crop engine already did that.
pub fn crop(image: &RawImage, rect: PixelRect) -> Result<RawImage> {
    if !rect.fits_within(image.width(), image.height()) {
        return Err(Error::Raster(format!(
            "crop {}x{}+{}+{} outside {}x{} image",
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            image.width(),
            image.height()
        )));
    }

    let cropped = to_dynamic(image)?.crop_imm(rect.x, rect.y, rect.width, rect.height);
    Ok(from_dynamic(&cropped))
}

/// Rotate an image 90 degrees counter-clockwise (left).
///
/// # Errors
///
/// Returns [`Error::Raster`] if the pixel buffer is inconsistent.
pub fn rotate_left(image: &RawImage) -> Result<RawImage> {
    Ok(from_dynamic(&to_dynamic(image)?.rotate270()))
}

/// Rotate an image 90 degrees clockwise (right).
///
/// # Errors
///
/// Returns [`Error::Raster`] if the pixel buffer is inconsistent.
pub fn rotate_right(image: &RawImage) -> Result<RawImage> {
    Ok(from_dynamic(&to_dynamic(image)?.rotate90()))
}

/// Flip an image horizontally (mirror left-to-right).
///
/// # Errors
///
/// Returns [`Error::Raster`] if the pixel buffer is inconsistent.
pub fn flip_horizontal(image: &RawImage) -> Result<RawImage> {
    Ok(from_dynamic(&to_dynamic(image)?.fliph()))
}

/// Flip an image vertically (mirror top-to-bottom).
///
/// # Errors
///
/// Returns [`Error::Raster`] if the pixel buffer is inconsistent.
pub fn flip_vertical(image: &RawImage) -> Result<RawImage> {
    Ok(from_dynamic(&to_dynamic(image)?.flipv()))
}
