// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::application::port::GenerativeOutput;
use crate::domain::media::{PixelRect, RawImage};
use crate::editor::crop::{CropBox, CropRatio};
use crate::editor::elements::{ElementId, ElementKind, ElementPatch, ZOrder};
use crate::error::Result;
use iced_core::Rectangle;
use std::time::Duration;

/// Identifies one asynchronous request. Results carrying a ticket that no
/// longer matches the pending operation are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub(crate) u64);

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    Undo,
    Redo,
    ResetToOriginal,
    ZoomIn,
    ZoomOut,
    /// Back to zoom 1.
    ResetZoom,
    SetZoom(f32),
    Fit,
    ToggleHandTool,
}

/// Sidebar control messages.
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    StartCrop,
    ApplyCrop,
    CancelCrop,
    SetCropRatio(CropRatio),
    /// Numeric crop entry in natural image pixels.
    SetCropRect(CropBox),
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    BrightnessChanged(i32),
    ContrastChanged(i32),
    SaturationChanged(i32),
    HueChanged(f32),
    ResetAdjustments,
    RequestGenerativeEdit(String),
}

/// Element panel messages.
#[derive(Debug, Clone)]
pub enum ElementMessage {
    Add {
        kind: ElementKind,
        content: String,
        overrides: ElementPatch,
    },
    Update {
        id: ElementId,
        patch: ElementPatch,
    },
    Delete(ElementId),
    Reorder {
        id: ElementId,
        direction: ZOrder,
    },
    Select(Option<ElementId>),
}

/// Messages handled by [`State::update`](super::State::update).
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Sidebar(SidebarMessage),
    Element(ElementMessage),
    /// Raw event for pointer interaction and keyboard shortcuts
    RawEvent(iced_core::Event),
    /// A new base image: resets history, elements and crop.
    LoadImage(RawImage),
    /// Canvas container bounds, in window coordinates.
    ViewportChanged(Rectangle),
    /// A panel opened, closed or switched; a re-fit follows once it settles.
    LayoutChanged,
    /// The settle delay requested by [`Event::ScheduleFit`] elapsed.
    LayoutSettled,
    TextInputFocusChanged(bool),
    CropRasterized {
        ticket: Ticket,
        result: Result<RawImage>,
    },
    GenerativeEditFinished {
        ticket: Ticket,
        result: Result<GenerativeOutput>,
    },
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<SidebarMessage> for Message {
    fn from(message: SidebarMessage) -> Self {
        Message::Sidebar(message)
    }
}

impl From<ElementMessage> for Message {
    fn from(message: ElementMessage) -> Self {
        Message::Element(message)
    }
}

/// Events propagated to the host for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Rasterize `rect` out of `source` and answer with
    /// [`Message::CropRasterized`].
    CropRequested {
        ticket: Ticket,
        source: RawImage,
        rect: PixelRect,
    },
    /// Run the generative editor and answer with
    /// [`Message::GenerativeEditFinished`].
    GenerativeEditRequested {
        ticket: Ticket,
        image: RawImage,
        instruction: String,
    },
    /// Send [`Message::LayoutSettled`] after `delay`.
    ScheduleFit { delay: Duration },
    /// An external operation failed; nothing was committed.
    OperationFailed(String),
    /// Text returned by the generative editor instead of an image.
    Notice(String),
}

impl Event {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Event::None)
    }
}
