// SPDX-License-Identifier: MPL-2.0
//! Asynchronous wrappers for the slow operations.
//!
//! The editor fires one of these and later feeds the result back as a message;
//! it never waits on them. Both run on tokio's blocking pool.

use super::image_transform;
use crate::application::port::{AiError, GenerativeEditor, GenerativeOutput};
use crate::domain::media::{PixelRect, RawImage};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Rasterizes `rect` out of `source` off the interaction loop.
///
/// # Errors
///
/// Returns [`Error::Raster`] if the rectangle does not fit the source or the
/// worker was cancelled.
pub async fn rasterize_crop(source: RawImage, rect: PixelRect) -> Result<RawImage> {
    tokio::task::spawn_blocking(move || image_transform::crop(&source, rect))
        .await
        .map_err(|err| Error::Raster(format!("crop worker failed: {err}")))?
}

/// Sends `image` and `instruction` to the generative service off the
/// interaction loop.
///
/// # Errors
///
/// Returns [`Error::Ai`] with the adapter's error, or
/// [`AiError::RequestFailed`] if the worker was cancelled.
pub async fn generative_edit(
    editor: Arc<dyn GenerativeEditor>,
    image: RawImage,
    instruction: String,
) -> Result<GenerativeOutput> {
    let output = tokio::task::spawn_blocking(move || editor.edit(&image, &instruction))
        .await
        .map_err(|err| AiError::RequestFailed(format!("worker failed: {err}")))??;
    Ok(output)
}
