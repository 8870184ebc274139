// SPDX-License-Identifier: MPL-2.0
//! Image primitives: decoding, encoding and raster transforms.
//!
//! Everything here works on [`RawImage`](crate::domain::media::RawImage) and
//! always produces a new buffer. The asynchronous wrappers in [`tasks`] move
//! the heavy calls off the interaction loop.

pub mod image;
pub mod image_transform;
pub mod tasks;

pub use image::{load_image, save_image};
pub use image_transform::{crop, flip_horizontal, flip_vertical, rotate_left, rotate_right};
