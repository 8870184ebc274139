// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom factor bounds (0.1x to 10x).
///
/// Every zoom entry point (wheel, stepped controls, slider, fit) shares this
/// single range.
pub mod zoom_bounds {
    /// Minimum zoom factor.
    pub const MIN: f32 = 0.1;
    /// Maximum zoom factor.
    pub const MAX: f32 = 10.0;
    /// Default zoom factor (natural size).
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Zoom multiplier, guaranteed to be within valid range (0.1x–10x).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }

    /// Increases zoom by an additive step.
    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases zoom by an additive step.
    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }

    /// Scales zoom by `factor` raised to `steps` (wheel notches).
    #[must_use]
    pub fn scaled(self, factor: f32, steps: f32) -> Self {
        Self::new(self.0 * factor.powf(steps))
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_factor_clamps() {
        assert_abs_diff_eq!(ZoomFactor::new(0.01).value(), zoom_bounds::MIN);
        assert_abs_diff_eq!(ZoomFactor::new(50.0).value(), zoom_bounds::MAX);
        assert_abs_diff_eq!(ZoomFactor::new(2.5).value(), 2.5);
        assert_abs_diff_eq!(ZoomFactor::new(f32::NAN).value(), zoom_bounds::DEFAULT);
    }

    #[test]
    fn zoom_factor_min_max() {
        assert!(ZoomFactor::new(zoom_bounds::MIN).is_min());
        assert!(ZoomFactor::new(zoom_bounds::MAX).is_max());
        assert!(!ZoomFactor::default().is_min());
        assert!(!ZoomFactor::default().is_max());
    }

    #[test]
    fn stepped_and_scaled_zoom() {
        let zoom = ZoomFactor::default();
        assert_abs_diff_eq!(zoom.zoom_in(0.1).value(), 1.1);
        assert_abs_diff_eq!(zoom.zoom_out(0.1).value(), 0.9);
        assert_abs_diff_eq!(zoom.scaled(1.1, 1.0).value(), 1.1, epsilon = 1e-6);
        assert_abs_diff_eq!(zoom.scaled(1.1, -1.0).value(), 1.0 / 1.1, epsilon = 1e-6);
        assert_abs_diff_eq!(ZoomFactor::new(9.5).scaled(1.1, 3.0).value(), zoom_bounds::MAX);
    }
}
