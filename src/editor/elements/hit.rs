// SPDX-License-Identifier: MPL-2.0
//! Element hit-testing and zoom-invariant handle metrics.
//!
//! Handle sizes are configured in screen pixels and divided by the zoom, so
//! they keep the same on-screen size at every zoom level. Points are tested
//! in each element's unrotated local frame.

use super::{CanvasElement, ElementId, ElementStore};
use crate::domain::geometry::{coords, HandlePosition};
use crate::editor::settings::InteractionSettings;
use iced_core::Point;

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementHitPart {
    Body,
    Resize(HandlePosition),
    Rotate,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHit {
    pub id: ElementId,
    pub part: ElementHitPart,
}

/// Handle geometry in image-overlay units at a given zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMetrics {
    pub handle_size: f32,
    pub handle_border: f32,
    pub outline_width: f32,
    pub rotate_offset: f32,
}

impl HandleMetrics {
    #[must_use]
    pub fn at_zoom(settings: &InteractionSettings, zoom: f32) -> Self {
        Self {
            handle_size: coords::zoom_invariant(settings.handle_size, zoom),
            handle_border: coords::zoom_invariant(settings.handle_border, zoom),
            outline_width: coords::zoom_invariant(settings.outline_width, zoom),
            rotate_offset: coords::zoom_invariant(settings.rotate_handle_offset, zoom),
        }
    }

    /// Half extent of a drawn handle, border included.
    #[must_use]
    pub fn hit_radius(&self) -> f32 {
        self.handle_size / 2.0 + self.handle_border
    }

    /// Center of the rotate handle above `element`, in its local frame.
    #[must_use]
    pub fn rotate_anchor(&self, element: &CanvasElement) -> Point {
        Point::new(element.x + element.width / 2.0, element.y - self.rotate_offset)
    }
}

/// Maps `point` into the element's unrotated frame.
#[must_use]
pub fn to_local(element: &CanvasElement, point: Point) -> Point {
    let center = element.center();
    center + coords::rotate_delta(point - center, -element.rotation)
}

/// Finds what lies under `point` (image space).
///
/// The selected element's rotate handle wins, then its resize handles, then
/// element bodies from top-most to bottom-most.
#[must_use]
pub fn hit_test(store: &ElementStore, point: Point, metrics: &HandleMetrics) -> Option<ElementHit> {
    let radius = metrics.hit_radius();

    if let Some(selected) = store.selected_element() {
        let local = to_local(selected, point);
        let anchor = metrics.rotate_anchor(selected);
        if (local.x - anchor.x).abs() <= radius && (local.y - anchor.y).abs() <= radius {
            return Some(ElementHit {
                id: selected.id,
                part: ElementHitPart::Rotate,
            });
        }
        if let Some(handle) = HandlePosition::hit(selected.bounds(), local, radius) {
            return Some(ElementHit {
                id: selected.id,
                part: ElementHitPart::Resize(handle),
            });
        }
    }

    store
        .elements()
        .iter()
        .rev()
        .find(|element| element.bounds().contains(to_local(element, point)))
        .map(|element| ElementHit {
            id: element.id,
            part: ElementHitPart::Body,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::elements::{ElementKind, ElementPatch};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn metrics(zoom: f32) -> HandleMetrics {
        HandleMetrics::at_zoom(&InteractionSettings::default(), zoom)
    }

    fn square(store: &mut ElementStore, x: f32, y: f32) -> ElementId {
        store.add(
            ElementKind::Shape,
            "rect",
            &ElementPatch {
                x: Some(x),
                y: Some(y),
                width: Some(100.0),
                height: Some(100.0),
                ..ElementPatch::default()
            },
        )
    }

    #[test]
    fn metrics_shrink_with_zoom() {
        let at_one = metrics(1.0);
        let at_two = metrics(2.0);
        assert_abs_diff_eq!(at_one.handle_size, 10.0);
        assert_abs_diff_eq!(at_two.handle_size, 5.0);
        assert_abs_diff_eq!(at_two.handle_border, 0.5);
        assert_abs_diff_eq!(at_two.outline_width, 1.0);
        assert_abs_diff_eq!(at_two.rotate_offset, 12.0);
    }

    #[test]
    fn topmost_body_wins() {
        let mut store = ElementStore::new();
        let bottom = square(&mut store, 0.0, 0.0);
        let top = square(&mut store, 50.0, 50.0);
        store.select(None);

        let hit = hit_test(&store, Point::new(75.0, 75.0), &metrics(1.0));
        assert_eq!(hit, Some(ElementHit { id: top, part: ElementHitPart::Body }));

        let hit = hit_test(&store, Point::new(25.0, 25.0), &metrics(1.0));
        assert_eq!(hit, Some(ElementHit { id: bottom, part: ElementHitPart::Body }));

        assert!(hit_test(&store, Point::new(500.0, 500.0), &metrics(1.0)).is_none());
    }

    #[test]
    fn selected_handles_beat_bodies() {
        let mut store = ElementStore::new();
        let selected = square(&mut store, 0.0, 0.0);
        square(&mut store, 90.0, 90.0);
        store.select(Some(selected));

        // Bottom-right corner of the selected square sits under the other one.
        let hit = hit_test(&store, Point::new(101.0, 99.0), &metrics(1.0));
        assert_eq!(
            hit,
            Some(ElementHit {
                id: selected,
                part: ElementHitPart::Resize(HandlePosition::BottomRight)
            })
        );
    }

    #[test]
    fn rotate_handle_sits_above_top_edge() {
        let mut store = ElementStore::new();
        let id = square(&mut store, 0.0, 100.0);

        let hit = hit_test(&store, Point::new(50.0, 76.0), &metrics(1.0));
        assert_eq!(hit, Some(ElementHit { id, part: ElementHitPart::Rotate }));

        // At zoom 2 the handle is 12 image units above the edge.
        assert!(hit_test(&store, Point::new(50.0, 76.0), &metrics(2.0)).is_none());
        let hit = hit_test(&store, Point::new(50.0, 88.0), &metrics(2.0));
        assert_eq!(hit, Some(ElementHit { id, part: ElementHitPart::Rotate }));
    }

    #[test]
    fn handle_radius_is_zoom_invariant_on_screen() {
        let mut store = ElementStore::new();
        let id = square(&mut store, 0.0, 0.0);
        let corner = Point::new(100.0, 100.0);

        // 5 screen pixels off the corner hits at both zoom levels.
        for zoom in [0.5_f32, 1.0, 4.0] {
            let near = Point::new(corner.x + 5.0 / zoom, corner.y);
            let hit = hit_test(&store, near, &metrics(zoom));
            assert_eq!(
                hit,
                Some(ElementHit {
                    id,
                    part: ElementHitPart::Resize(HandlePosition::BottomRight)
                }),
                "zoom {zoom}"
            );
            let far = Point::new(corner.x + 8.0 / zoom, corner.y);
            assert!(hit_test(&store, far, &metrics(zoom)).is_none(), "zoom {zoom}");
        }
    }

    #[test]
    fn rotated_bodies_are_tested_in_local_frame() {
        let mut store = ElementStore::new();
        let id = store.add(
            ElementKind::Shape,
            "bar",
            &ElementPatch {
                x: Some(0.0),
                y: Some(40.0),
                width: Some(100.0),
                height: Some(20.0),
                rotation: Some(90.0),
                ..ElementPatch::default()
            },
        );
        store.select(None);

        // Rotated a quarter turn around (50, 50) the bar stands upright.
        assert!(hit_test(&store, Point::new(50.0, 5.0), &metrics(1.0)).is_some());
        assert!(hit_test(&store, Point::new(5.0, 50.0), &metrics(1.0)).is_none());
        assert_eq!(
            hit_test(&store, Point::new(50.0, 95.0), &metrics(1.0)).map(|hit| hit.id),
            Some(id)
        );
    }

    #[test]
    fn to_local_inverts_rotation() {
        let mut store = ElementStore::new();
        let id = square(&mut store, 0.0, 0.0);
        store.update_by_id(id, &ElementPatch::rotation(90.0));
        let element = store.get(id).expect("element");

        // Clockwise quarter turn moves the local top-center (50, 0) to (100, 50).
        let local = to_local(element, Point::new(100.0, 50.0));
        assert_abs_diff_eq!(local.x, 50.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(local.y, 0.0, epsilon = F32_EPSILON);
    }
}
