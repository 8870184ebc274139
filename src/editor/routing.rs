// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.

use super::elements::{self, DragMode, ElementDrag, ElementHitPart};
use super::{ElementMessage, Event, Interaction, SidebarMessage, State, ToolbarMessage};
use crate::domain::editing::{AdjustmentPercent, HueDegrees};
use crate::domain::geometry::coords;
use crate::media;
use crate::state::PanSession;
use iced_core::keyboard::{self, key::Named, Key, Modifiers};
use iced_core::{mouse, window, Point};

impl State {
    pub(super) fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::Undo => self.undo(),
            ToolbarMessage::Redo => self.redo(),
            ToolbarMessage::ResetToOriginal => self.reset_to_original(),
            ToolbarMessage::ZoomIn => self.viewport.zoom_in(),
            ToolbarMessage::ZoomOut => self.viewport.zoom_out(),
            ToolbarMessage::ResetZoom => self.viewport.reset(),
            ToolbarMessage::SetZoom(value) => self.viewport.set_zoom(value),
            ToolbarMessage::Fit => {
                self.fit();
            }
            ToolbarMessage::ToggleHandTool => self.toggle_hand_tool(),
        }
        Event::None
    }

    pub(super) fn handle_sidebar_message(&mut self, message: SidebarMessage) -> Event {
        match message {
            SidebarMessage::StartCrop => {
                self.start_crop();
                Event::None
            }
            SidebarMessage::ApplyCrop => self.apply_crop(),
            SidebarMessage::CancelCrop => {
                self.leave_crop_mode();
                Event::None
            }
            SidebarMessage::SetCropRatio(ratio) => {
                self.crop.set_ratio(ratio);
                Event::None
            }
            SidebarMessage::SetCropRect(rect) => {
                self.crop.set_rect(rect);
                Event::None
            }
            SidebarMessage::RotateLeft => self.apply_transform("rotate left", media::rotate_left),
            SidebarMessage::RotateRight => {
                self.apply_transform("rotate right", media::rotate_right)
            }
            SidebarMessage::FlipHorizontal => {
                self.apply_transform("flip horizontal", media::flip_horizontal)
            }
            SidebarMessage::FlipVertical => {
                self.apply_transform("flip vertical", media::flip_vertical)
            }
            SidebarMessage::BrightnessChanged(value) => {
                self.preview.brightness = AdjustmentPercent::new(value);
                Event::None
            }
            SidebarMessage::ContrastChanged(value) => {
                self.preview.contrast = AdjustmentPercent::new(value);
                Event::None
            }
            SidebarMessage::SaturationChanged(value) => {
                self.preview.saturation = AdjustmentPercent::new(value);
                Event::None
            }
            SidebarMessage::HueChanged(degrees) => {
                self.preview.hue = HueDegrees::new(degrees);
                Event::None
            }
            SidebarMessage::ResetAdjustments => {
                self.preview.reset_adjustments();
                Event::None
            }
            SidebarMessage::RequestGenerativeEdit(instruction) => {
                self.request_generative_edit(instruction)
            }
        }
    }

    pub(super) fn handle_element_message(&mut self, message: ElementMessage) -> Event {
        match message {
            ElementMessage::Add {
                kind,
                content,
                overrides,
            } => {
                self.elements.add(kind, content, &overrides);
            }
            ElementMessage::Update { id, patch } => {
                self.elements.update_by_id(id, &patch);
            }
            ElementMessage::Delete(id) => self.delete_element(id),
            ElementMessage::Reorder { id, direction } => {
                self.elements.reorder(id, direction);
            }
            ElementMessage::Select(id) => self.elements.select(id),
        }
        Event::None
    }

    pub(super) fn handle_raw_event(&mut self, event: iced_core::Event) -> Event {
        match event {
            iced_core::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                self.handle_key_pressed(&key, modifiers)
            }
            iced_core::Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => {
                self.handle_key_released(&key);
                Event::None
            }
            iced_core::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                self.handle_wheel_zoom(delta);
                Event::None
            }
            iced_core::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.handle_mouse_button_pressed();
                Event::None
            }
            iced_core::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.end_interaction(false);
                Event::None
            }
            iced_core::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.handle_cursor_moved(position);
                Event::None
            }
            iced_core::Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor_position = None;
                self.end_interaction(true);
                Event::None
            }
            iced_core::Event::Window(window::Event::Unfocused) => {
                self.hand_tool.held = false;
                self.end_interaction(true);
                Event::None
            }
            _ => Event::None,
        }
    }

    pub(super) fn handle_key_pressed(&mut self, key: &Key, modifiers: Modifiers) -> Event {
        if self.text_input_focused {
            return Event::None;
        }

        match key.as_ref() {
            Key::Character(c) if modifiers.command() => {
                if c.eq_ignore_ascii_case("z") {
                    if modifiers.shift() {
                        self.redo();
                    } else {
                        self.undo();
                    }
                } else if c.eq_ignore_ascii_case("y") {
                    self.redo();
                }
                Event::None
            }
            Key::Named(Named::Space) => {
                self.hand_tool.held = true;
                Event::None
            }
            Key::Named(Named::Escape) => {
                if self.crop.is_active() {
                    self.leave_crop_mode();
                } else {
                    self.elements.select(None);
                }
                Event::None
            }
            Key::Named(Named::Enter) => self.apply_crop(),
            Key::Named(Named::Delete | Named::Backspace) => {
                if let Some(id) = self.elements.selected() {
                    self.delete_element(id);
                }
                Event::None
            }
            Key::Character(c) if !modifiers.alt() => {
                match c {
                    "h" | "H" => self.toggle_hand_tool(),
                    "+" | "=" => self.viewport.zoom_in(),
                    "-" => self.viewport.zoom_out(),
                    "0" => {
                        self.fit();
                    }
                    _ => {}
                }
                Event::None
            }
            _ => Event::None,
        }
    }

    /// Releases are honored even while a text input has focus so the held
    /// hand tool cannot get stuck.
    pub(super) fn handle_key_released(&mut self, key: &Key) {
        if matches!(key.as_ref(), Key::Named(Named::Space)) {
            self.hand_tool.held = false;
        }
    }

    fn toggle_hand_tool(&mut self) {
        self.hand_tool.toggled = !self.hand_tool.toggled;
        tracing::debug!(toggled = self.hand_tool.toggled, "hand tool toggled");
    }

    fn delete_element(&mut self, id: elements::ElementId) {
        if matches!(&self.interaction, Interaction::Element(drag) if drag.id == id) {
            self.interaction = Interaction::Idle;
        }
        self.elements.delete_by_id(id);
    }

    /// Handles wheel scroll for zooming when the cursor is over the canvas.
    fn handle_wheel_zoom(&mut self, delta: mouse::ScrollDelta) {
        if self.crop.is_active() || self.history.is_empty() {
            return;
        }
        let Some(pointer) = self.pointer_over_canvas() else {
            return;
        };

        let steps = scroll_steps(&delta);
        if steps.abs() < f32::EPSILON {
            return;
        }
        self.viewport.wheel_zoom(steps, pointer);
    }

    /// Starts at most one interaction: a crop drag in crop mode, a pan with
    /// the hand tool, otherwise an element drag (or a deselect on background).
    fn handle_mouse_button_pressed(&mut self) {
        if !matches!(self.interaction, Interaction::Idle) {
            return;
        }
        let Some(pointer) = self.pointer_over_canvas() else {
            return;
        };
        let zoom = self.viewport.zoom.value();
        let image_point = self.viewport.to_image(pointer);

        if self.crop.is_active() {
            let radius =
                coords::zoom_invariant(self.settings.interaction.handle_hit_radius(), zoom);
            if let Some(drag) = self
                .crop
                .hit_test(image_point, radius)
                .and_then(|mode| self.crop.begin_drag(mode, pointer))
            {
                self.interaction = Interaction::Crop(drag);
            }
            return;
        }

        if self.hand_tool.is_active() {
            tracing::debug!(x = pointer.x, y = pointer.y, "pan started");
            self.interaction = Interaction::Panning(PanSession::start(pointer));
            return;
        }

        let hit = elements::hit_test(&self.elements, image_point, &self.handle_metrics());
        match hit.and_then(|hit| Some((self.elements.get(hit.id)?, hit.part))) {
            Some((element, part)) => {
                let mode = match part {
                    ElementHitPart::Body => DragMode::Move,
                    ElementHitPart::Resize(handle) => DragMode::Resize(handle),
                    ElementHitPart::Rotate => DragMode::Rotate,
                };
                self.interaction =
                    Interaction::Element(ElementDrag::begin(element, mode, pointer));
            }
            None => self.elements.select(None),
        }
    }

    fn handle_cursor_moved(&mut self, position: Point) {
        self.cursor_position = Some(position);
        let pointer = self.to_container(position);
        let displayed = self.displayed_size();
        let pan = self.viewport.pan;
        let zoom = self.viewport.zoom.value();
        let click_threshold = self.settings.interaction.click_threshold;

        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Panning(session) => {
                let delta = session.advance(pointer);
                self.viewport.drag_pan(delta);
            }
            Interaction::Element(drag) => {
                if let Some(patch) = drag.update(pointer, pan, zoom, click_threshold) {
                    self.elements.update_by_id(drag.id, &patch);
                }
            }
            Interaction::Crop(drag) => {
                if let Some(displayed) = displayed {
                    self.crop.drag_to(drag, pointer, displayed);
                }
            }
        }
    }

    /// Cursor position relative to the canvas container, if it is over it.
    /// Without reported bounds the window is the container.
    fn pointer_over_canvas(&self) -> Option<Point> {
        let position = self.cursor_position?;
        match self.viewport.bounds {
            Some(bounds) if !bounds.contains(position) => None,
            _ => Some(self.to_container(position)),
        }
    }

    fn to_container(&self, position: Point) -> Point {
        match self.viewport.bounds {
            Some(bounds) => Point::new(position.x - bounds.x, position.y - bounds.y),
            None => position,
        }
    }
}

fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}
