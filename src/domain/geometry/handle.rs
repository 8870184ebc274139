// SPDX-License-Identifier: MPL-2.0
//! Resize handles and the edges they own.
//!
//! Both the element engine and the crop engine use the same rule: a handle
//! moves the edges it touches and leaves the opposite edges fixed.

use iced_core::{Point, Rectangle};

/// Position of a resize handle on a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlePosition {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandlePosition {
    /// All handles, clockwise from the top-left corner.
    pub const ALL: [HandlePosition; 8] = [
        HandlePosition::TopLeft,
        HandlePosition::Top,
        HandlePosition::TopRight,
        HandlePosition::Right,
        HandlePosition::BottomRight,
        HandlePosition::Bottom,
        HandlePosition::BottomLeft,
        HandlePosition::Left,
    ];

    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(
            self,
            HandlePosition::TopLeft | HandlePosition::Left | HandlePosition::BottomLeft
        )
    }

    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(
            self,
            HandlePosition::TopRight | HandlePosition::Right | HandlePosition::BottomRight
        )
    }

    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(
            self,
            HandlePosition::TopLeft | HandlePosition::Top | HandlePosition::TopRight
        )
    }

    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            HandlePosition::BottomLeft | HandlePosition::Bottom | HandlePosition::BottomRight
        )
    }

    /// Where the handle sits on `rect`.
    #[must_use]
    pub fn anchor(self, rect: Rectangle) -> Point {
        let x = if self.moves_left() {
            rect.x
        } else if self.moves_right() {
            rect.x + rect.width
        } else {
            rect.x + rect.width / 2.0
        };
        let y = if self.moves_top() {
            rect.y
        } else if self.moves_bottom() {
            rect.y + rect.height
        } else {
            rect.y + rect.height / 2.0
        };
        Point::new(x, y)
    }

    /// Finds the handle whose anchor lies within `radius` of `point`
    /// (Chebyshev distance, so the hit area is the square the handle is drawn as).
    #[must_use]
    pub fn hit(rect: Rectangle, point: Point, radius: f32) -> Option<HandlePosition> {
        HandlePosition::ALL.into_iter().find(|handle| {
            let anchor = handle.anchor(rect);
            (point.x - anchor.x).abs() <= radius && (point.y - anchor.y).abs() <= radius
        })
    }
}
