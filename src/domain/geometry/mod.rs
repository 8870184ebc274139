// SPDX-License-Identifier: MPL-2.0
//! Geometry shared by the element and crop engines.
//!
//! - [`coords`]: pure conversions between screen space and image space
//! - [`handle`]: the eight resize handles and the edges each one owns

pub mod coords;
pub mod handle;

pub use handle::HandlePosition;

/// Smallest width or height, in image units, an element or crop box may have.
pub const MIN_DIMENSION: f32 = 10.0;
