// SPDX-License-Identifier: MPL-2.0
//! Coordinate mapping between screen space and image space.
//!
//! Screen space is measured in container pixels (the pointer position relative
//! to the canvas container's top-left corner) and is affected by pan and zoom.
//! Image space is measured in natural pixels of the loaded image. Overlay
//! elements live in image space too, so the same conversions serve both the
//! element engine and the crop engine.
//!
//! All functions are pure.

use iced_core::{Point, Size, Vector};

/// Converts a screen-space point to image space.
#[must_use]
pub fn screen_to_image(screen: Point, pan: Vector, zoom: f32) -> Point {
    Point::new((screen.x - pan.x) / zoom, (screen.y - pan.y) / zoom)
}

/// Converts an image-space point to screen space.
#[must_use]
pub fn image_to_screen(image: Point, pan: Vector, zoom: f32) -> Point {
    Point::new(image.x * zoom + pan.x, image.y * zoom + pan.y)
}

/// Converts a pointer delta in screen pixels to overlay units.
#[must_use]
pub fn screen_delta_to_overlay(delta: Vector, zoom: f32) -> Vector {
    Vector::new(delta.x / zoom, delta.y / zoom)
}

/// Converts a pointer delta in screen pixels to natural image pixels using the
/// ratio between the natural and the displayed image size.
///
/// A degenerate displayed size yields a zero delta.
#[must_use]
pub fn screen_delta_to_image(delta: Vector, displayed: Size, natural: Size) -> Vector {
    if displayed.width <= 0.0 || displayed.height <= 0.0 {
        return Vector::new(0.0, 0.0);
    }
    Vector::new(
        delta.x * natural.width / displayed.width,
        delta.y * natural.height / displayed.height,
    )
}

/// On-screen size of an image drawn at `zoom`.
#[must_use]
pub fn displayed_size(natural: Size, zoom: f32) -> Size {
    Size::new(natural.width * zoom, natural.height * zoom)
}

/// Rotates `delta` by `degrees`, clockwise on screen (y grows downwards).
#[must_use]
pub fn rotate_delta(delta: Vector, degrees: f32) -> Vector {
    if degrees == 0.0 {
        return delta;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector::new(delta.x * cos - delta.y * sin, delta.x * sin + delta.y * cos)
}

/// Size in image units that renders as `base` screen pixels at `zoom`.
#[must_use]
pub fn zoom_invariant(base: f32, zoom: f32) -> f32 {
    base / zoom
}
