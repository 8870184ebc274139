// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only the outer edges of the editor can fail: file and config IO, image
//! decoding, rasterization and the generative service. The interaction engines
//! resolve their boundary conditions locally and never produce an [`Error`].

use crate::application::port::AiError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Decoding or encoding through the `image` crate failed.
    #[error("Image Error: {0}")]
    Image(String),

    /// A raster operation was asked to do something the source cannot satisfy
    /// (empty rectangle, byte length mismatch, ...).
    #[error("Raster Error: {0}")]
    Raster(String),

    #[error("AI Error: {0}")]
    Ai(#[from] AiError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{err}"), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{err}"), "Config Error: bad field");
    }

    #[test]
    fn image_error_converts_to_image_variant() {
        let image_error = image_rs::ImageError::IoError(std::io::Error::other("decode failed"));
        let err: Error = image_error.into();
        match err {
            Error::Image(message) => assert!(message.contains("decode failed")),
            other => panic!("expected Image variant, got {other:?}"),
        }
    }

    #[test]
    fn ai_error_is_wrapped() {
        let err: Error = AiError::ServiceUnavailable.into();
        assert!(matches!(err, Error::Ai(AiError::ServiceUnavailable)));
        assert!(format!("{err}").starts_with("AI Error"));
    }
}
