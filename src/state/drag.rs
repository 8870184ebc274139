// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the canvas.

use iced_core::{Point, Vector};

/// One pan gesture, from pointer-down to pointer-up.
///
/// The session is created when the gesture starts and dropped when it ends,
/// so there is no "is dragging" flag to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    /// Position where the drag started
    pub start_position: Point,

    /// Last pointer position seen by the session
    last_position: Point,
}

impl PanSession {
    /// Starts a pan gesture at `position` (container-relative screen pixels).
    #[must_use]
    pub fn start(position: Point) -> Self {
        Self {
            start_position: position,
            last_position: position,
        }
    }

    /// Moves the session to `position` and returns the screen delta since the
    /// previous pointer event.
    pub fn advance(&mut self, position: Point) -> Vector {
        let delta = position - self.last_position;
        self.last_position = position;
        delta
    }

    /// Total displacement since the gesture started.
    #[must_use]
    pub fn total_delta(&self) -> Vector {
        self.last_position - self.start_position
    }
}
