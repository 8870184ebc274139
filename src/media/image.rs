// SPDX-License-Identifier: MPL-2.0
//! Image decoding and encoding.

use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use std::fs;
use std::path::Path;

/// Loads an image from disk and converts it to RGBA.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RawImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let image = from_dynamic(&decoded);
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(image)
}

/// Encodes `image` to `path`, picking the format from the file extension.
///
/// # Errors
///
/// Returns [`Error::Image`] if the extension is unknown or encoding fails, and
/// [`Error::Raster`] if the pixel buffer is inconsistent with the dimensions.
pub fn save_image<P: AsRef<Path>>(image: &RawImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let dynamic = to_dynamic(image)?;
    // JPEG has no alpha channel
    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));
    if is_jpeg {
        DynamicImage::ImageRgb8(dynamic.to_rgb8()).save(path)?;
    } else {
        dynamic.save(path)?;
    }
    tracing::info!(path = %path.display(), "saved image");
    Ok(())
}

/// Converts a decoded image into the editor's RGBA representation.
#[must_use]
pub fn from_dynamic(image: &DynamicImage) -> RawImage {
    let (width, height) = image.dimensions();
    RawImage::from_rgba(width, height, image.to_rgba8().into_vec())
}

/// Wraps a [`RawImage`] as an `image` crate buffer.
///
/// # Errors
///
/// Returns [`Error::Raster`] if the byte length does not match the dimensions.
pub fn to_dynamic(image: &RawImage) -> Result<DynamicImage> {
    RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| {
            Error::Raster(format!(
                "pixel buffer does not match {}x{}",
                image.width(),
                image.height()
            ))
        })
}
