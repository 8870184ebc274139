// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the editor. Constants are organized by category.
//!
//! # Categories
//!
//! - **History**: Edit history capacity
//! - **Viewport**: Fit padding, zoom steps and layout settle delay
//! - **Interaction**: Handle sizes and the click/drag threshold, in screen pixels
//! - **Elements**: Default placement and footprint of new canvas elements

use crate::domain::editing::newtypes::history_bounds;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of image states kept by the edit history.
pub const DEFAULT_HISTORY_CAPACITY: usize = history_bounds::DEFAULT;

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Padding kept free around the image when fitting (screen pixels).
pub const DEFAULT_FIT_PADDING: f32 = 20.0;

/// Minimum fit padding.
pub const MIN_FIT_PADDING: f32 = 0.0;

/// Maximum fit padding.
pub const MAX_FIT_PADDING: f32 = 200.0;

/// Zoom multiplier per mouse wheel notch.
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Minimum wheel zoom multiplier.
pub const MIN_WHEEL_ZOOM_FACTOR: f32 = 1.01;

/// Maximum wheel zoom multiplier.
pub const MAX_WHEEL_ZOOM_FACTOR: f32 = 2.0;

/// Additive zoom step for zoom in/out buttons and keys.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Minimum zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Maximum zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

/// Delay before re-fitting after a layout change (panel slide animations).
pub const DEFAULT_LAYOUT_SETTLE_MS: u64 = 300;

/// Maximum layout settle delay.
pub const MAX_LAYOUT_SETTLE_MS: u64 = 2000;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Side of a resize handle square (screen pixels).
pub const DEFAULT_HANDLE_SIZE: f32 = 10.0;

/// Border width of a resize handle (screen pixels).
pub const DEFAULT_HANDLE_BORDER: f32 = 1.0;

/// Width of the selection outline (screen pixels).
pub const DEFAULT_OUTLINE_WIDTH: f32 = 2.0;

/// Distance of the rotate handle above the top edge (screen pixels).
pub const DEFAULT_ROTATE_HANDLE_OFFSET: f32 = 24.0;

/// Pointer travel below which a drag counts as a click (screen pixels).
pub const DEFAULT_CLICK_THRESHOLD: f32 = 3.0;

/// Upper bound for every interaction size above.
pub const MAX_INTERACTION_SIZE: f32 = 100.0;

// ==========================================================================
// Element Defaults
// ==========================================================================

/// Top-left corner of a newly added element (image-overlay units).
pub const DEFAULT_ELEMENT_X: f32 = 100.0;

/// Top-left corner of a newly added element (image-overlay units).
pub const DEFAULT_ELEMENT_Y: f32 = 100.0;

/// Footprint of a new text element.
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (200.0, 60.0);

/// Footprint of a new emoji element.
pub const DEFAULT_EMOJI_SIZE: (f32, f32) = (80.0, 80.0);

/// Footprint of a new shape element.
pub const DEFAULT_SHAPE_SIZE: (f32, f32) = (100.0, 100.0);

/// Font size of a new text element.
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // History validation
    assert!(DEFAULT_HISTORY_CAPACITY >= history_bounds::MIN);
    assert!(DEFAULT_HISTORY_CAPACITY <= history_bounds::MAX);

    // Viewport validation
    assert!(DEFAULT_FIT_PADDING >= MIN_FIT_PADDING);
    assert!(DEFAULT_FIT_PADDING <= MAX_FIT_PADDING);
    assert!(MIN_WHEEL_ZOOM_FACTOR > 1.0);
    assert!(DEFAULT_WHEEL_ZOOM_FACTOR >= MIN_WHEEL_ZOOM_FACTOR);
    assert!(DEFAULT_WHEEL_ZOOM_FACTOR <= MAX_WHEEL_ZOOM_FACTOR);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(DEFAULT_LAYOUT_SETTLE_MS <= MAX_LAYOUT_SETTLE_MS);

    // Interaction validation
    assert!(DEFAULT_HANDLE_SIZE > 0.0);
    assert!(DEFAULT_HANDLE_SIZE <= MAX_INTERACTION_SIZE);
    assert!(DEFAULT_HANDLE_BORDER <= DEFAULT_HANDLE_SIZE);
    assert!(DEFAULT_OUTLINE_WIDTH > 0.0);
    assert!(DEFAULT_ROTATE_HANDLE_OFFSET > DEFAULT_HANDLE_SIZE);
    assert!(DEFAULT_ROTATE_HANDLE_OFFSET <= MAX_INTERACTION_SIZE);
    assert!(DEFAULT_CLICK_THRESHOLD >= 0.0);

    // Element validation
    assert!(DEFAULT_EMOJI_SIZE.0 < DEFAULT_TEXT_SIZE.0);
    assert!(DEFAULT_SHAPE_SIZE.0 < DEFAULT_TEXT_SIZE.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::MIN_DIMENSION;

    #[test]
    fn history_defaults_are_valid() {
        assert_eq!(DEFAULT_HISTORY_CAPACITY, 21);
    }

    #[test]
    fn viewport_defaults_are_valid() {
        assert_eq!(DEFAULT_FIT_PADDING, 20.0);
        assert_eq!(DEFAULT_WHEEL_ZOOM_FACTOR, 1.1);
        assert_eq!(DEFAULT_LAYOUT_SETTLE_MS, 300);
    }

    #[test]
    fn element_defaults_exceed_minimum_dimension() {
        for (width, height) in [DEFAULT_TEXT_SIZE, DEFAULT_EMOJI_SIZE, DEFAULT_SHAPE_SIZE] {
            assert!(width >= MIN_DIMENSION);
            assert!(height >= MIN_DIMENSION);
        }
    }
}
