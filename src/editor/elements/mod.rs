// SPDX-License-Identifier: MPL-2.0
//! Free-form overlay elements (text, emoji, shapes).
//!
//! The [`ElementStore`] owns the ordered element list (index 0 is bottom-most)
//! and the selection. Geometry lives in image-overlay units: the same units as
//! natural image pixels, not clamped to the image.

pub mod drag;
pub mod hit;

pub use drag::{DragMode, DragOutcome, ElementDrag};
pub use hit::{hit_test, ElementHit, ElementHitPart, HandleMetrics};

use crate::config::defaults::{
    DEFAULT_ELEMENT_X, DEFAULT_ELEMENT_Y, DEFAULT_EMOJI_SIZE, DEFAULT_FONT_SIZE,
    DEFAULT_SHAPE_SIZE, DEFAULT_TEXT_SIZE,
};
use crate::domain::geometry::MIN_DIMENSION;
use iced_core::{Color, Point, Rectangle, Size};

/// Element identifier, assigned monotonically and never reused in a session.
pub type ElementId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Emoji,
    Shape,
}

impl ElementKind {
    /// Footprint of a freshly added element of this kind.
    #[must_use]
    pub fn default_size(self) -> Size {
        let (width, height) = match self {
            ElementKind::Text => DEFAULT_TEXT_SIZE,
            ElementKind::Emoji => DEFAULT_EMOJI_SIZE,
            ElementKind::Shape => DEFAULT_SHAPE_SIZE,
        };
        Size::new(width, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Typography of a text element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub color: Color,
    pub weight: FontWeight,
    pub italic: bool,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            weight: FontWeight::default(),
            italic: false,
            align: TextAlign::default(),
        }
    }
}

/// One overlay element.
///
/// `content` is the literal text for [`ElementKind::Text`], a single glyph
/// for [`ElementKind::Emoji`] and an opaque style descriptor for
/// [`ElementKind::Shape`]; the engine never interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, clockwise, unbounded.
    pub rotation: f32,
    /// Present for text elements only.
    pub text: Option<TextStyle>,
}

impl CanvasElement {
    /// Unrotated bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Partial update for an element. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub content: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub text: Option<TextStyle>,
}

impl ElementPatch {
    #[must_use]
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rotation(degrees: f32) -> Self {
        Self {
            rotation: Some(degrees),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bounds(rect: Rectangle) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, element: &mut CanvasElement) {
        if let Some(content) = &self.content {
            element.content.clone_from(content);
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width.max(MIN_DIMENSION);
        }
        if let Some(height) = self.height {
            element.height = height.max(MIN_DIMENSION);
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(text) = &self.text {
            if element.kind == ElementKind::Text {
                element.text = Some(text.clone());
            }
        }
    }
}

/// Z-order change requested for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    /// To the top of the stack.
    Front,
    /// To the bottom of the stack.
    Back,
    /// One step up.
    Forward,
    /// One step down.
    Backward,
}

/// Ordered element list plus the single selection.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<CanvasElement>,
    next_id: ElementId,
    selected: Option<ElementId>,
}

impl ElementStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element on top of the stack and selects it.
    pub fn add(
        &mut self,
        kind: ElementKind,
        content: impl Into<String>,
        overrides: &ElementPatch,
    ) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;

        let size = kind.default_size();
        let mut element = CanvasElement {
            id,
            kind,
            content: content.into(),
            x: DEFAULT_ELEMENT_X,
            y: DEFAULT_ELEMENT_Y,
            width: size.width,
            height: size.height,
            rotation: 0.0,
            text: (kind == ElementKind::Text).then(TextStyle::default),
        };
        overrides.apply(&mut element);

        tracing::debug!(id, ?kind, "element added");
        self.elements.push(element);
        self.selected = Some(id);
        id
    }

    /// Merges `patch` into the element with `id`. Returns false if not found.
    pub fn update_by_id(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                patch.apply(element);
                true
            }
            None => false,
        }
    }

    /// Removes the element with `id`, clearing the selection if it pointed at it.
    pub fn delete_by_id(&mut self, id: ElementId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.elements.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::debug!(id, "element deleted");
        true
    }

    /// Changes the stacking position of `id`. Unknown ids and moves past
    /// either end leave the order unchanged.
    pub fn reorder(&mut self, id: ElementId, direction: ZOrder) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let last = self.elements.len() - 1;
        match direction {
            ZOrder::Front => {
                let element = self.elements.remove(index);
                self.elements.push(element);
            }
            ZOrder::Back => {
                let element = self.elements.remove(index);
                self.elements.insert(0, element);
            }
            ZOrder::Forward if index < last => self.elements.swap(index, index + 1),
            ZOrder::Backward if index > 0 => self.elements.swap(index, index - 1),
            ZOrder::Forward | ZOrder::Backward => return false,
        }
        true
    }

    /// Selects `id`, or clears the selection with `None`. Unknown ids clear it.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id.filter(|id| self.index_of(*id).is_some());
    }

    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&CanvasElement> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Elements bottom-most first.
    #[must_use]
    pub fn elements(&self) -> &[CanvasElement] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&CanvasElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut CanvasElement> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }

    /// Drops every element. Ids keep counting up.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &ElementStore) -> Vec<ElementId> {
        store.elements().iter().map(|element| element.id).collect()
    }

    fn store_with(count: usize) -> ElementStore {
        let mut store = ElementStore::new();
        for _ in 0..count {
            store.add(ElementKind::Shape, "rect", &ElementPatch::default());
        }
        store
    }

    #[test]
    fn add_assigns_defaults_and_selects() {
        let mut store = ElementStore::new();
        let text = store.add(ElementKind::Text, "Hello", &ElementPatch::default());
        let emoji = store.add(ElementKind::Emoji, "🙂", &ElementPatch::default());

        let text_element = store.get(text).expect("text element");
        assert_eq!((text_element.x, text_element.y), (100.0, 100.0));
        assert_eq!((text_element.width, text_element.height), (200.0, 60.0));
        assert!(text_element.text.is_some());

        let emoji_element = store.get(emoji).expect("emoji element");
        assert_eq!((emoji_element.width, emoji_element.height), (80.0, 80.0));
        assert!(emoji_element.text.is_none());

        assert_eq!(store.selected(), Some(emoji));
        assert_eq!(ids(&store), vec![text, emoji]);
    }

    #[test]
    fn add_merges_overrides() {
        let mut store = ElementStore::new();
        let id = store.add(
            ElementKind::Shape,
            "circle",
            &ElementPatch {
                x: Some(5.0),
                rotation: Some(45.0),
                ..ElementPatch::default()
            },
        );
        let element = store.get(id).expect("element");
        assert_eq!(element.x, 5.0);
        assert_eq!(element.y, 100.0);
        assert_eq!(element.rotation, 45.0);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = store_with(2);
        store.delete_by_id(1);
        let next = store.add(ElementKind::Emoji, "⭐", &ElementPatch::default());
        assert_eq!(next, 2);
        store.clear();
        assert_eq!(store.add(ElementKind::Emoji, "⭐", &ElementPatch::default()), 3);
    }

    #[test]
    fn update_by_id_is_partial() {
        let mut store = store_with(1);
        assert!(store.update_by_id(0, &ElementPatch::rotation(30.0)));

        let element = store.get(0).expect("element");
        assert_eq!(element.rotation, 30.0);
        assert_eq!((element.x, element.y, element.width), (100.0, 100.0, 100.0));

        assert!(!store.update_by_id(42, &ElementPatch::rotation(10.0)));
    }

    #[test]
    fn update_keeps_dimensions_above_minimum() {
        let mut store = store_with(1);
        store.update_by_id(
            0,
            &ElementPatch {
                width: Some(2.0),
                ..ElementPatch::default()
            },
        );
        assert_eq!(store.get(0).map(|element| element.width), Some(MIN_DIMENSION));
    }

    #[test]
    fn text_style_only_applies_to_text() {
        let mut store = store_with(1);
        let patch = ElementPatch {
            text: Some(TextStyle {
                italic: true,
                ..TextStyle::default()
            }),
            ..ElementPatch::default()
        };
        store.update_by_id(0, &patch);
        assert!(store.get(0).is_some_and(|element| element.text.is_none()));
    }

    #[test]
    fn delete_clears_matching_selection_only() {
        let mut store = store_with(2);
        store.select(Some(0));
        assert!(store.delete_by_id(1));
        assert_eq!(store.selected(), Some(0));
        assert!(store.delete_by_id(0));
        assert_eq!(store.selected(), None);
        assert!(!store.delete_by_id(0));
    }

    #[test]
    fn reorder_front_and_back() {
        let mut store = store_with(4);
        assert!(store.reorder(1, ZOrder::Front));
        assert_eq!(ids(&store), vec![0, 2, 3, 1]);
        assert!(store.reorder(1, ZOrder::Back));
        assert_eq!(ids(&store), vec![1, 0, 2, 3]);
    }

    #[test]
    fn reorder_front_then_back_keeps_relative_order_of_others() {
        let mut store = store_with(5);
        store.reorder(2, ZOrder::Front);
        store.reorder(2, ZOrder::Back);

        let others: Vec<_> = ids(&store).into_iter().filter(|id| *id != 2).collect();
        assert_eq!(others, vec![0, 1, 3, 4]);
    }

    #[test]
    fn reorder_steps_clamp_at_ends() {
        let mut store = store_with(3);
        assert!(store.reorder(0, ZOrder::Forward));
        assert_eq!(ids(&store), vec![1, 0, 2]);
        assert!(store.reorder(2, ZOrder::Backward));
        assert_eq!(ids(&store), vec![1, 2, 0]);

        assert!(!store.reorder(1, ZOrder::Backward));
        assert!(!store.reorder(0, ZOrder::Forward));
        assert!(!store.reorder(99, ZOrder::Front));
        assert_eq!(ids(&store), vec![1, 2, 0]);
    }

    #[test]
    fn select_rejects_unknown_ids() {
        let mut store = store_with(1);
        store.select(Some(7));
        assert_eq!(store.selected(), None);
        store.select(Some(0));
        assert_eq!(store.selected_element().map(|element| element.id), Some(0));
        store.select(None);
        assert!(store.selected_element().is_none());
    }
}
