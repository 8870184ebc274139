// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and image fixtures.
//!
//! Re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::media::RawImage;

/// Default epsilon for f32 comparisons of geometry computed through a few
/// multiplications/divisions.
pub const F32_EPSILON: f32 = 1e-4;

/// Builds an opaque RGBA image where every pixel encodes its own position,
/// so crops and flips can be checked by reading pixels back.
pub fn gradient_image(width: u32, height: u32) -> RawImage {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x % 256) as u8);
            pixels.push((y % 256) as u8);
            pixels.push(0);
            pixels.push(255);
        }
    }
    RawImage::from_rgba(width, height, pixels)
}

/// Builds a uniformly filled image.
pub fn solid_image(width: u32, height: u32, value: u8) -> RawImage {
    RawImage::from_rgba(width, height, vec![value; (width * height * 4) as usize])
}
