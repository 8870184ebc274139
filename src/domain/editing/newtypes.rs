// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

// =============================================================================
// History Capacity Bounds
// =============================================================================

/// History capacity bounds (2 to 100 entries).
pub mod history_bounds {
    /// Minimum number of entries (the base image plus one edit).
    pub const MIN: usize = 2;
    /// Maximum number of entries.
    pub const MAX: usize = 100;
    /// Default number of entries: the base image plus twenty edits.
    pub const DEFAULT: usize = 21;
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Maximum number of image states the edit history keeps.
///
/// Committing past this bound evicts the oldest entries.
///
/// # Example
///
/// ```
/// use photo_canvas::domain::editing::HistoryCapacity;
///
/// assert_eq!(HistoryCapacity::default().value(), 21);
/// assert_eq!(HistoryCapacity::new(0).value(), 2); // clamped to the minimum
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_bounds::MIN, history_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_bounds::DEFAULT)
    }
}

// =============================================================================
// Adjustment Bounds
// =============================================================================

/// Adjustment bounds (-100 to +100).
pub mod adjustment_bounds {
    /// Minimum adjustment value.
    pub const MIN: i32 = -100;
    /// Maximum adjustment value.
    pub const MAX: i32 = 100;
    /// Default (neutral) adjustment value.
    pub const DEFAULT: i32 = 0;
}

// =============================================================================
// AdjustmentPercent
// =============================================================================

/// Adjustment percentage for brightness/contrast/saturation, guaranteed to be
/// within valid range (-100 to +100).
///
/// A value of 0 means no adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjustmentPercent(i32);

impl AdjustmentPercent {
    /// Creates a new adjustment value, clamping to the valid range.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(adjustment_bounds::MIN, adjustment_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns whether this represents no adjustment (value is 0).
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == adjustment_bounds::DEFAULT
    }

    /// Multiplier a renderer applies for this adjustment (0 → 1.0, +100 → 2.0,
    /// -100 → 0.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_factor(self) -> f32 {
        1.0 + self.0 as f32 / 100.0
    }
}

// =============================================================================
// HueDegrees
// =============================================================================

/// Hue rotation in degrees, normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HueDegrees(f32);

impl HueDegrees {
    /// Creates a new hue rotation, wrapping any angle into `[0, 360)`.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Self(0.0);
        }
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        Self(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == 0.0
    }
}

// =============================================================================
// Tests
// =============================================================================
