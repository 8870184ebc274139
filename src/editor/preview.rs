// SPDX-License-Identifier: MPL-2.0
//! Preview-only data handed to the renderer.
//!
//! Color adjustments are never baked into pixels here; the renderer applies
//! them when drawing the current image.

use crate::domain::editing::{AdjustmentPercent, HueDegrees};
use crate::domain::media::RawImage;
use crate::editor::crop::CropBox;
use crate::editor::elements::{CanvasElement, ElementId, HandleMetrics};
use iced_core::{Rectangle, Vector};

/// Color adjustments applied at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewState {
    pub brightness: AdjustmentPercent,
    pub contrast: AdjustmentPercent,
    pub saturation: AdjustmentPercent,
    pub hue: HueDegrees,
}

impl PreviewState {
    /// True when drawing would leave the image unchanged.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.brightness.is_neutral()
            && self.contrast.is_neutral()
            && self.saturation.is_neutral()
            && self.hue.is_neutral()
    }

    pub fn reset_adjustments(&mut self) {
        *self = Self::default();
    }
}

/// Everything needed to draw one frame of the canvas.
#[derive(Debug, Clone)]
pub struct Composition<'a> {
    pub image: Option<&'a RawImage>,
    /// Where the image lands, in container-relative screen pixels.
    pub image_rect: Option<Rectangle>,
    pub pan: Vector,
    pub zoom: f32,
    pub adjustments: PreviewState,
    /// Back to front.
    pub elements: &'a [CanvasElement],
    pub selected: Option<ElementId>,
    pub crop: Option<CropBox>,
    /// Handle geometry in overlay units at the current zoom.
    pub handles: HandleMetrics,
}
