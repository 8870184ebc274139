// SPDX-License-Identifier: MPL-2.0
//! Canvas navigation state
//!
//! Zoom and pan live here, separated from the editing engines: the viewport
//! only decides where the image is drawn, never what is drawn.

pub mod drag;
pub mod viewport;

// Re-export commonly used types for convenience
pub use drag::PanSession;
pub use viewport::{ViewportSettings, ViewportState};
