// SPDX-License-Identifier: MPL-2.0
//! Canvas editor: edit history, overlay elements, crop tool and viewport
//! behind one message-driven state machine.
//!
//! This module follows a "state down, messages up" pattern: the host feeds
//! [`Message`]s into [`State::update`] and performs the side effects described
//! by the returned [`Event`] (crop rasterization, generative edits, delayed
//! re-fits), answering with another message when they complete.
//!
//! Only one pointer interaction exists at a time. Every image change goes
//! through the history; the other engines never replace the image directly.

pub mod crop;
pub mod elements;
pub mod history;
pub mod preview;
pub mod settings;

mod messages;
mod routing;

pub use crop::{CropBox, CropDrag, CropDragMode, CropEngine, CropRatio};
pub use elements::{CanvasElement, ElementId, ElementKind, ElementPatch, ElementStore, ZOrder};
pub use history::EditHistory;
pub use messages::{ElementMessage, Event, Message, SidebarMessage, Ticket, ToolbarMessage};
pub use preview::{Composition, PreviewState};
pub use settings::{EditorSettings, InteractionSettings};

use crate::application::port::GenerativeOutput;
use crate::domain::geometry::coords;
use crate::domain::media::RawImage;
use crate::editor::elements::{ElementDrag, HandleMetrics};
use crate::error::Result;
use crate::state::{PanSession, ViewportState};
use iced_core::{Point, Size};

/// Canvas mode as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Panning,
    ElementDragging,
    Cropping,
}

/// The single in-flight pointer interaction.
#[derive(Debug, Clone, Default)]
enum Interaction {
    #[default]
    Idle,
    Panning(PanSession),
    Element(ElementDrag),
    Crop(CropDrag),
}

/// Hand tool: a sticky toggle and a held modifier, either of which enables
/// panning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandTool {
    toggled: bool,
    held: bool,
}

impl HandTool {
    #[must_use]
    pub fn is_active(self) -> bool {
        self.toggled || self.held
    }

    #[must_use]
    pub fn is_toggled(self) -> bool {
        self.toggled
    }

    #[must_use]
    pub fn is_held(self) -> bool {
        self.held
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    Crop,
    GenerativeEdit,
}

/// Local state for the editing canvas.
#[derive(Debug, Clone)]
pub struct State {
    history: EditHistory<RawImage>,
    elements: ElementStore,
    crop: CropEngine,
    viewport: ViewportState,
    interaction: Interaction,
    hand_tool: HandTool,
    /// Last cursor position, window coordinates.
    cursor_position: Option<Point>,
    text_input_focused: bool,
    preview: PreviewState,
    settings: EditorSettings,
    pending: Option<(Ticket, PendingOp)>,
    next_ticket: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            history: EditHistory::new(settings.history_capacity),
            elements: ElementStore::new(),
            crop: CropEngine::new(),
            viewport: ViewportState::new(settings.viewport),
            interaction: Interaction::Idle,
            hand_tool: HandTool::default(),
            cursor_position: None,
            text_input_focused: false,
            preview: PreviewState::default(),
            settings,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Update the state and emit an [`Event`] for the host when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Sidebar(msg) => self.handle_sidebar_message(msg),
            Message::Element(msg) => self.handle_element_message(msg),
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::LoadImage(image) => {
                self.load_image(image);
                Event::None
            }
            Message::ViewportChanged(bounds) => self.viewport_changed(bounds),
            Message::LayoutChanged => self.schedule_fit(),
            Message::LayoutSettled => {
                self.fit();
                Event::None
            }
            Message::TextInputFocusChanged(focused) => {
                self.text_input_focused = focused;
                Event::None
            }
            Message::CropRasterized { ticket, result } => self.finish_crop(ticket, result),
            Message::GenerativeEditFinished { ticket, result } => {
                self.finish_generative_edit(ticket, result)
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.crop.is_active() {
            return Mode::Cropping;
        }
        match self.interaction {
            Interaction::Idle => Mode::Idle,
            Interaction::Panning(_) => Mode::Panning,
            Interaction::Element(_) => Mode::ElementDragging,
            Interaction::Crop(_) => Mode::Cropping,
        }
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&RawImage> {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory<RawImage> {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn elements(&self) -> &ElementStore {
        &self.elements
    }

    #[must_use]
    pub fn crop(&self) -> &CropEngine {
        &self.crop
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn preview(&self) -> PreviewState {
        self.preview
    }

    #[must_use]
    pub fn hand_tool(&self) -> HandTool {
        self.hand_tool
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Ticket of the asynchronous operation whose result is still awaited.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.map(|(ticket, _)| ticket)
    }

    /// Snapshot of everything the renderer draws.
    #[must_use]
    pub fn composition(&self) -> Composition<'_> {
        Composition {
            image: self.history.current(),
            image_rect: self.natural_size().map(|natural| self.viewport.image_rect(natural)),
            pan: self.viewport.pan,
            zoom: self.viewport.zoom.value(),
            adjustments: self.preview,
            elements: self.elements.elements(),
            selected: self.elements.selected(),
            crop: self.crop.rect(),
            handles: self.handle_metrics(),
        }
    }

    fn natural_size(&self) -> Option<Size> {
        self.history.current().map(RawImage::natural_size)
    }

    fn handle_metrics(&self) -> HandleMetrics {
        HandleMetrics::at_zoom(&self.settings.interaction, self.viewport.zoom.value())
    }

    /// Displayed image size at the current zoom.
    fn displayed_size(&self) -> Option<Size> {
        self.natural_size()
            .map(|natural| coords::displayed_size(natural, self.viewport.zoom.value()))
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Replaces everything with a new base image.
    fn load_image(&mut self, image: RawImage) {
        tracing::info!(width = image.width(), height = image.height(), "image loaded");
        let natural = image.natural_size();
        self.history.load(image);
        self.elements.clear();
        self.crop.cancel();
        self.interaction = Interaction::Idle;
        self.preview.reset_adjustments();
        self.invalidate_pending("new image");
        self.viewport.fit_to_bounds(natural);
    }

    fn commit_image(&mut self, image: RawImage, action: &'static str) {
        let previous = self.natural_size();
        self.invalidate_pending(action);
        self.history.commit(image);
        tracing::info!(
            action,
            cursor = self.history.cursor(),
            entries = self.history.len(),
            "edit committed"
        );
        self.refit_if_resized(previous);
    }

    fn undo(&mut self) {
        self.leave_crop_mode();
        let previous = self.natural_size();
        if self.history.undo() {
            self.invalidate_pending("undo");
            tracing::info!(cursor = self.history.cursor(), "undo");
            self.refit_if_resized(previous);
        }
    }

    fn redo(&mut self) {
        self.leave_crop_mode();
        let previous = self.natural_size();
        if self.history.redo() {
            self.invalidate_pending("redo");
            tracing::info!(cursor = self.history.cursor(), "redo");
            self.refit_if_resized(previous);
        }
    }

    fn reset_to_original(&mut self) {
        self.leave_crop_mode();
        let previous = self.natural_size();
        if self.history.reset_to_original() {
            self.invalidate_pending("reset to original");
            tracing::info!(cursor = self.history.cursor(), "reset to original");
            self.refit_if_resized(previous);
        }
    }

    fn refit_if_resized(&mut self, previous: Option<Size>) {
        let current = self.natural_size();
        if current != previous {
            if let Some(natural) = current {
                self.viewport.fit_to_bounds(natural);
            }
        }
    }

    /// Runs a synchronous raster transform on the current image and commits it.
    fn apply_transform(
        &mut self,
        action: &'static str,
        transform: fn(&RawImage) -> Result<RawImage>,
    ) -> Event {
        self.leave_crop_mode();
        let Some(current) = self.history.current() else {
            return Event::None;
        };
        match transform(current) {
            Ok(image) => {
                self.commit_image(image, action);
                Event::None
            }
            Err(err) => {
                tracing::warn!(action, error = %err, "transform failed");
                Event::OperationFailed(err.to_string())
            }
        }
    }

    // ---------------------------------------------------------------------
    // Crop
    // ---------------------------------------------------------------------

    fn start_crop(&mut self) {
        let Some(natural) = self.natural_size() else {
            return;
        };
        self.end_interaction(true);
        self.crop.start(natural);
    }

    /// Leaves crop mode and asks the host to rasterize the rectangle.
    fn apply_crop(&mut self) -> Event {
        let Some(rect) = self.crop.to_pixel_rect() else {
            return Event::None;
        };
        self.end_interaction(true);
        self.crop.take();
        let Some(source) = self.history.current().cloned() else {
            return Event::None;
        };
        let ticket = self.issue_ticket(PendingOp::Crop);
        tracing::debug!(?ticket, ?rect, "crop requested");
        Event::CropRequested {
            ticket,
            source,
            rect,
        }
    }

    fn leave_crop_mode(&mut self) {
        if matches!(self.interaction, Interaction::Crop(_)) {
            self.interaction = Interaction::Idle;
        }
        self.crop.cancel();
    }

    fn finish_crop(&mut self, ticket: Ticket, result: Result<RawImage>) -> Event {
        if !self.claim(ticket, PendingOp::Crop) {
            return Event::None;
        }
        match result {
            Ok(image) => {
                self.commit_image(image, "crop");
                Event::None
            }
            Err(err) => {
                tracing::warn!(error = %err, "crop rasterization failed");
                Event::OperationFailed(err.to_string())
            }
        }
    }

    // ---------------------------------------------------------------------
    // Generative edits
    // ---------------------------------------------------------------------

    fn request_generative_edit(&mut self, instruction: String) -> Event {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Event::None;
        }
        let Some(image) = self.history.current().cloned() else {
            return Event::None;
        };
        let instruction = instruction.to_owned();
        let ticket = self.issue_ticket(PendingOp::GenerativeEdit);
        tracing::debug!(?ticket, "generative edit requested");
        Event::GenerativeEditRequested {
            ticket,
            image,
            instruction,
        }
    }

    fn finish_generative_edit(
        &mut self,
        ticket: Ticket,
        result: Result<GenerativeOutput>,
    ) -> Event {
        if !self.claim(ticket, PendingOp::GenerativeEdit) {
            return Event::None;
        }
        match result {
            Ok(GenerativeOutput::Image(image)) => {
                self.leave_crop_mode();
                self.commit_image(image, "generative edit");
                Event::None
            }
            Ok(GenerativeOutput::Text(text)) => Event::Notice(text),
            Err(err) => {
                tracing::warn!(error = %err, "generative edit failed");
                Event::OperationFailed(err.to_string())
            }
        }
    }

    // ---------------------------------------------------------------------
    // Tickets
    // ---------------------------------------------------------------------

    /// A new request supersedes any pending one.
    fn issue_ticket(&mut self, op: PendingOp) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        if let Some((previous, previous_op)) = self.pending.replace((ticket, op)) {
            tracing::debug!(?previous, ?previous_op, "pending operation superseded");
        }
        ticket
    }

    /// Results of requests built from an image that is no longer current
    /// must not be committed.
    fn invalidate_pending(&mut self, cause: &'static str) {
        if let Some((ticket, op)) = self.pending.take() {
            tracing::debug!(?ticket, ?op, cause, "pending operation invalidated");
        }
    }

    /// Accepts a result only if it answers the pending request.
    fn claim(&mut self, ticket: Ticket, op: PendingOp) -> bool {
        if self.pending == Some((ticket, op)) {
            self.pending = None;
            true
        } else {
            tracing::debug!(?ticket, ?op, "stale result dropped");
            false
        }
    }

    // ---------------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------------

    fn fit(&mut self) -> bool {
        match self.natural_size() {
            Some(natural) => self.viewport.fit_to_bounds(natural),
            None => false,
        }
    }

    fn viewport_changed(&mut self, bounds: iced_core::Rectangle) -> Event {
        if self.viewport.set_bounds(bounds) {
            self.schedule_fit()
        } else {
            Event::None
        }
    }

    fn schedule_fit(&self) -> Event {
        if self.history.is_empty() {
            return Event::None;
        }
        Event::ScheduleFit {
            delay: self.settings.layout_settle,
        }
    }

    // ---------------------------------------------------------------------
    // Interaction sessions
    // ---------------------------------------------------------------------

    /// Ends the current pointer interaction. Geometry stays where the last
    /// move left it; `abandoned` sessions (cursor left, focus lost) never
    /// turn into a selection.
    fn end_interaction(&mut self, abandoned: bool) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::Panning(session) => {
                let total = session.total_delta();
                tracing::debug!(dx = total.x, dy = total.y, abandoned, "pan finished");
            }
            Interaction::Element(drag) => match drag.finish() {
                elements::DragOutcome::Clicked(id) => {
                    if !abandoned {
                        self.elements.select(Some(id));
                    }
                }
                elements::DragOutcome::Dragged(id) => {
                    self.elements.select(Some(id));
                }
            },
            Interaction::Crop(_) => {
                tracing::debug!(abandoned, "crop drag finished");
            }
        }
    }
}
