// SPDX-License-Identifier: MPL-2.0
//! Generative editing port definition.
//!
//! This module defines the [`GenerativeEditor`] trait for edits delegated to an
//! external generative-image service: the editor hands over the current image
//! and a textual instruction and gets back either a new image or a text reply.
//!
//! # Design Notes
//!
//! - Prompt construction and response parsing belong to the adapter
//! - An image reply is committed to the edit history; a text reply is only
//!   shown to the user
//! - The trait is `Send + Sync` so the call can run on a blocking worker

use crate::domain::media::RawImage;
use thiserror::Error;

// =============================================================================
// AiError
// =============================================================================

/// Errors that can occur while talking to the generative service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// No adapter is configured or the service cannot be reached.
    #[error("generative service is unavailable")]
    ServiceUnavailable,

    /// The service refused the instruction (policy, empty prompt, ...).
    #[error("instruction rejected: {0}")]
    Rejected(String),

    /// The request failed in transit or the reply could not be parsed.
    #[error("request failed: {0}")]
    RequestFailed(String),
}

// =============================================================================
// GenerativeOutput
// =============================================================================

/// Reply of a generative edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerativeOutput {
    /// A new image to commit.
    Image(RawImage),
    /// A text answer (explanation, refusal wording) to surface to the user.
    Text(String),
}

// =============================================================================
// GenerativeEditor Trait
// =============================================================================

/// Port for edits performed by an external generative-image service.
///
/// # Example
///
/// ```ignore
/// use photo_canvas::application::port::{AiError, GenerativeEditor, GenerativeOutput};
/// use photo_canvas::domain::media::RawImage;
///
/// fn remove_background(editor: &impl GenerativeEditor, image: &RawImage) -> Option<RawImage> {
///     match editor.edit(image, "remove the background").ok()? {
///         GenerativeOutput::Image(result) => Some(result),
///         GenerativeOutput::Text(_) => None,
///     }
/// }
/// ```
pub trait GenerativeEditor: Send + Sync {
    /// Applies `instruction` to `image`.
    ///
    /// This call blocks; callers run it off the interaction loop.
    ///
    /// # Errors
    ///
    /// Returns an [`AiError`] if the service is unreachable, rejects the
    /// instruction or returns an unusable reply.
    fn edit(&self, image: &RawImage, instruction: &str) -> Result<GenerativeOutput, AiError>;
}
