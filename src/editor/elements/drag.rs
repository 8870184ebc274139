// SPDX-License-Identifier: MPL-2.0
//! Element drag sessions (move, resize, rotate).
//!
//! A session is created on pointer-down over an element and consumed on
//! pointer-up. Geometry is always recomputed from the state captured at the
//! start plus the total pointer travel, so events can be coalesced without
//! changing the result.

use super::{CanvasElement, ElementId, ElementPatch};
use crate::domain::geometry::{coords, HandlePosition, MIN_DIMENSION};
use iced_core::{Point, Rectangle, Size, Vector};

/// What a drag does to its element, fixed at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize(HandlePosition),
    Rotate,
}

/// How a finished drag resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The pointer never left the click threshold: treat as a selection.
    Clicked(ElementId),
    /// Geometry was changed.
    Dragged(ElementId),
}

/// One in-flight element drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDrag {
    pub id: ElementId,
    pub mode: DragMode,
    /// Pointer position at pointer-down, container-relative screen pixels.
    start_pointer: Point,
    /// Element bounds at pointer-down, overlay units.
    start_bounds: Rectangle,
    /// Element rotation at pointer-down, degrees.
    start_rotation: f32,
    exceeded_threshold: bool,
}

impl ElementDrag {
    #[must_use]
    pub fn begin(element: &CanvasElement, mode: DragMode, pointer: Point) -> Self {
        tracing::debug!(id = element.id, ?mode, "element drag started");
        Self {
            id: element.id,
            mode,
            start_pointer: pointer,
            start_bounds: element.bounds(),
            start_rotation: element.rotation,
            exceeded_threshold: false,
        }
    }

    /// Whether the pointer has travelled far enough to count as a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.exceeded_threshold
    }

    /// Feeds a pointer position (container-relative screen pixels) and returns
    /// the geometry update to apply, if any.
    ///
    /// `None` means "leave the element as it is": either the pointer is still
    /// within `click_threshold`, or a resize would shrink below the minimum
    /// size and the whole frame is dropped.
    pub fn update(
        &mut self,
        pointer: Point,
        pan: Vector,
        zoom: f32,
        click_threshold: f32,
    ) -> Option<ElementPatch> {
        let screen_delta = pointer - self.start_pointer;
        if !self.exceeded_threshold {
            let travel = screen_delta.x.hypot(screen_delta.y);
            if travel <= click_threshold {
                return None;
            }
            self.exceeded_threshold = true;
        }

        let delta = coords::screen_delta_to_overlay(screen_delta, zoom);
        match self.mode {
            DragMode::Move => Some(ElementPatch::position(
                self.start_bounds.x + delta.x,
                self.start_bounds.y + delta.y,
            )),
            DragMode::Resize(handle) => {
                // Handles belong to the element's own frame.
                let local = coords::rotate_delta(delta, -self.start_rotation);
                resize_bounds(self.start_bounds, handle, local).map(ElementPatch::bounds)
            }
            DragMode::Rotate => {
                let pointer = coords::screen_to_image(pointer, pan, zoom);
                Some(ElementPatch::rotation(rotation_towards(
                    self.start_bounds.center(),
                    pointer,
                )))
            }
        }
    }

    /// Ends the session.
    #[must_use]
    pub fn finish(self) -> DragOutcome {
        let outcome = if self.exceeded_threshold {
            DragOutcome::Dragged(self.id)
        } else {
            DragOutcome::Clicked(self.id)
        };
        tracing::debug!(id = self.id, ?outcome, "element drag finished");
        outcome
    }
}

/// Applies a handle drag to `start`. Edges the handle does not own stay put.
/// Returns `None` if either dimension would fall below the minimum.
#[must_use]
pub fn resize_bounds(start: Rectangle, handle: HandlePosition, delta: Vector) -> Option<Rectangle> {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width;
    let mut height = start.height;

    if handle.moves_left() {
        x += delta.x;
        width -= delta.x;
    } else if handle.moves_right() {
        width += delta.x;
    }
    if handle.moves_top() {
        y += delta.y;
        height -= delta.y;
    } else if handle.moves_bottom() {
        height += delta.y;
    }

    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return None;
    }
    Some(Rectangle::new(Point::new(x, y), Size::new(width, height)))
}

/// Rotation, in degrees, that points an element's "up" direction from
/// `center` towards `pointer`: straight up is 0, right is 90, down is 180.
#[must_use]
pub fn rotation_towards(center: Point, pointer: Point) -> f32 {
    (pointer.y - center.y)
        .atan2(pointer.x - center.x)
        .to_degrees()
        + 90.0
}
