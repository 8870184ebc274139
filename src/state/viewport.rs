// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Owns the zoom factor and the pan offset (screen position of the image's
//! top-left corner relative to the container's top-left corner), plus the
//! container bounds the last layout reported.

use crate::config::defaults::{DEFAULT_FIT_PADDING, DEFAULT_WHEEL_ZOOM_FACTOR, DEFAULT_ZOOM_STEP};
use crate::domain::geometry::coords;
use crate::domain::ui::ZoomFactor;
use iced_core::{Point, Rectangle, Size, Vector};

/// Tunables resolved from the `[viewport]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSettings {
    /// Padding kept free on every side when fitting, in screen pixels.
    pub fit_padding: f32,
    /// Multiplicative zoom change per wheel notch.
    pub wheel_zoom_factor: f32,
    /// Additive zoom change for stepped controls.
    pub zoom_step: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            fit_padding: DEFAULT_FIT_PADDING,
            wheel_zoom_factor: DEFAULT_WHEEL_ZOOM_FACTOR,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

/// Manages zoom, pan and container bounds
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current zoom (guaranteed valid by type)
    pub zoom: ZoomFactor,

    /// Screen offset of the image's top-left corner inside the container
    pub pan: Vector,

    /// Current container bounds in window coordinates
    pub bounds: Option<Rectangle>,

    settings: ViewportSettings,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

impl ViewportState {
    #[must_use]
    pub fn new(settings: ViewportSettings) -> Self {
        Self {
            zoom: ZoomFactor::default(),
            pan: Vector::new(0.0, 0.0),
            bounds: None,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> ViewportSettings {
        self.settings
    }

    /// Records new container bounds.
    /// Returns true if the container size changed (a re-fit is due).
    pub fn set_bounds(&mut self, bounds: Rectangle) -> bool {
        let resized = self
            .bounds
            .is_none_or(|prev| prev.width != bounds.width || prev.height != bounds.height);
        self.bounds = Some(bounds);
        resized
    }

    /// Container size, if a layout has been reported.
    #[must_use]
    pub fn container_size(&self) -> Option<Size> {
        self.bounds.map(|bounds| bounds.size())
    }

    /// Fits `natural` inside `container` minus padding and centers it.
    ///
    /// Returns false (and changes nothing) when any dimension is zero.
    pub fn fit(&mut self, container: Size, natural: Size) -> bool {
        let padding = self.settings.fit_padding;
        let available = Size::new(
            container.width - 2.0 * padding,
            container.height - 2.0 * padding,
        );
        if container.width <= 0.0
            || container.height <= 0.0
            || natural.width <= 0.0
            || natural.height <= 0.0
            || available.width <= 0.0
            || available.height <= 0.0
        {
            return false;
        }

        self.zoom = ZoomFactor::new(
            (available.width / natural.width).min(available.height / natural.height),
        );
        let scaled = coords::displayed_size(natural, self.zoom.value());
        self.pan = Vector::new(
            (container.width - scaled.width) / 2.0,
            (container.height - scaled.height) / 2.0,
        );
        tracing::debug!(zoom = self.zoom.value(), pan_x = self.pan.x, pan_y = self.pan.y, "fit");
        true
    }

    /// Fits against the last reported container bounds.
    pub fn fit_to_bounds(&mut self, natural: Size) -> bool {
        match self.container_size() {
            Some(container) => self.fit(container, natural),
            None => false,
        }
    }

    /// Zooms by `steps` wheel notches (positive zooms in) keeping the image
    /// point under `pointer` (container-relative) fixed on screen.
    pub fn wheel_zoom(&mut self, steps: f32, pointer: Point) {
        let target = self.zoom.scaled(self.settings.wheel_zoom_factor, steps);
        self.zoom_about(target, pointer);
    }

    /// Adds a screen-space delta to the pan offset (1:1).
    pub fn drag_pan(&mut self, delta: Vector) {
        self.pan = self.pan + delta;
    }

    /// Sets the zoom directly, anchored at the container center.
    pub fn set_zoom(&mut self, value: f32) {
        self.zoom_about(ZoomFactor::new(value), self.anchor());
    }

    pub fn zoom_in(&mut self) {
        self.zoom_about(self.zoom.zoom_in(self.settings.zoom_step), self.anchor());
    }

    pub fn zoom_out(&mut self) {
        self.zoom_about(self.zoom.zoom_out(self.settings.zoom_step), self.anchor());
    }

    /// Back to natural size (zoom 1), anchored at the container center.
    pub fn reset(&mut self) {
        self.zoom_about(ZoomFactor::default(), self.anchor());
    }

    /// Converts a container-relative pointer position to image space.
    #[must_use]
    pub fn to_image(&self, screen: Point) -> Point {
        coords::screen_to_image(screen, self.pan, self.zoom.value())
    }

    /// Where the image is drawn, in container-relative screen pixels.
    #[must_use]
    pub fn image_rect(&self, natural: Size) -> Rectangle {
        Rectangle::new(
            Point::new(self.pan.x, self.pan.y),
            coords::displayed_size(natural, self.zoom.value()),
        )
    }

    fn anchor(&self) -> Point {
        self.container_size().map_or(Point::ORIGIN, |size| {
            Point::new(size.width / 2.0, size.height / 2.0)
        })
    }

    fn zoom_about(&mut self, target: ZoomFactor, anchor: Point) {
        let old = self.zoom.value();
        let new = target.value();
        if (new - old).abs() <= f32::EPSILON {
            return;
        }
        let ratio = new / old;
        let anchor = Vector::new(anchor.x, anchor.y);
        self.pan = anchor - (anchor - self.pan) * ratio;
        self.zoom = target;
        tracing::debug!(zoom = new, "zoom changed");
    }
}
