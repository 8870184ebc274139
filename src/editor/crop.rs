// SPDX-License-Identifier: MPL-2.0
//! Crop tool state and geometry.
//!
//! The crop box lives in natural image pixels and always satisfies
//! `0 <= x`, `0 <= y`, `x + width <= natural width`,
//! `y + height <= natural height` and a minimum size of 10 pixels (or the
//! image size, for images smaller than that). Every update clamps; nothing is
//! rejected.

use crate::domain::geometry::{coords, HandlePosition, MIN_DIMENSION};
use crate::domain::media::PixelRect;
use iced_core::{Point, Rectangle, Size, Vector};

/// Crop aspect ratio presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropRatio {
    #[default]
    Free,
    Square,        // 1:1
    Landscape,     // 16:9
    Portrait,      // 9:16
    Photo,         // 4:3
    PhotoPortrait, // 3:4
}

impl CropRatio {
    /// Width divided by height, `None` for [`CropRatio::Free`].
    #[must_use]
    pub fn aspect(self) -> Option<f32> {
        match self {
            CropRatio::Free => None,
            CropRatio::Square => Some(1.0),
            CropRatio::Landscape => Some(16.0 / 9.0),
            CropRatio::Portrait => Some(9.0 / 16.0),
            CropRatio::Photo => Some(4.0 / 3.0),
            CropRatio::PhotoPortrait => Some(3.0 / 4.0),
        }
    }
}

/// Crop rectangle in natural image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropBox {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn full(natural: Size) -> Self {
        Self::new(0.0, 0.0, natural.width, natural.height)
    }

    #[must_use]
    pub fn to_rectangle(self) -> Rectangle {
        Rectangle::new(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }

    #[must_use]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }
}

/// What a crop drag does, fixed at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropDragMode {
    Move,
    Resize(HandlePosition),
}

/// One in-flight crop drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropDrag {
    pub mode: CropDragMode,
    /// Pointer at pointer-down, container-relative screen pixels.
    start_pointer: Point,
    start_box: CropBox,
}

/// Owns the crop box while crop mode is active.
#[derive(Debug, Clone, Default)]
pub struct CropEngine {
    rect: Option<CropBox>,
    natural: Size,
    ratio: CropRatio,
}

impl CropEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters crop mode with the box covering the whole image.
    pub fn start(&mut self, natural: Size) {
        self.natural = natural;
        self.ratio = CropRatio::Free;
        self.rect = Some(CropBox::full(natural));
        tracing::debug!(width = natural.width, height = natural.height, "crop started");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.rect.is_some()
    }

    #[must_use]
    pub fn rect(&self) -> Option<CropBox> {
        self.rect
    }

    #[must_use]
    pub fn ratio(&self) -> CropRatio {
        self.ratio
    }

    #[must_use]
    pub fn natural(&self) -> Size {
        self.natural
    }

    /// Leaves crop mode without producing anything.
    /// Returns false if crop mode was not active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.rect.take().is_some();
        if was_active {
            tracing::debug!("crop cancelled");
        }
        was_active
    }

    /// Leaves crop mode and hands out the final box.
    pub fn take(&mut self) -> Option<CropBox> {
        self.rect.take()
    }

    /// Selects a ratio preset. Fixed ratios recenter the largest box of that
    /// ratio that fits the image; [`CropRatio::Free`] keeps the current box.
    pub fn set_ratio(&mut self, ratio: CropRatio) {
        if self.rect.is_none() {
            return;
        }
        self.ratio = ratio;
        let Some(aspect) = ratio.aspect() else {
            return;
        };

        let natural = self.natural;
        let (width, height) = if natural.width / natural.height > aspect {
            (natural.height * aspect, natural.height)
        } else {
            (natural.width, natural.width / aspect)
        };
        let width = width.clamp(self.min_width(), natural.width);
        let height = height.clamp(self.min_height(), natural.height);
        self.rect = Some(CropBox::new(
            (natural.width - width) / 2.0,
            (natural.height - height) / 2.0,
            width,
            height,
        ));
    }

    /// Numeric entry: clamps an arbitrary box into the image. Size is clamped
    /// first, then the position is pushed back inside.
    pub fn set_rect(&mut self, requested: CropBox) {
        if self.rect.is_none() {
            return;
        }
        let width = requested.width.clamp(self.min_width(), self.natural.width);
        let height = requested.height.clamp(self.min_height(), self.natural.height);
        let x = requested.x.clamp(0.0, self.natural.width - width);
        let y = requested.y.clamp(0.0, self.natural.height - height);
        self.rect = Some(CropBox::new(x, y, width, height));
        self.ratio = CropRatio::Free;
    }

    /// What a press at `point` (image space) would grab: handles first, then
    /// the box body. `radius` is the handle hit radius in image pixels.
    #[must_use]
    pub fn hit_test(&self, point: Point, radius: f32) -> Option<CropDragMode> {
        let rect = self.rect?.to_rectangle();
        if let Some(handle) = HandlePosition::hit(rect, point, radius) {
            return Some(CropDragMode::Resize(handle));
        }
        rect.contains(point).then_some(CropDragMode::Move)
    }

    /// Starts a drag at `pointer` (container-relative screen pixels).
    #[must_use]
    pub fn begin_drag(&self, mode: CropDragMode, pointer: Point) -> Option<CropDrag> {
        let start_box = self.rect?;
        tracing::debug!(?mode, "crop drag started");
        Some(CropDrag {
            mode,
            start_pointer: pointer,
            start_box,
        })
    }

    /// Applies a drag to `pointer`. The screen delta is converted to image
    /// pixels with the displayed/natural ratio, then the box is recomputed
    /// from its state at drag start and clamped.
    pub fn drag_to(&mut self, drag: &CropDrag, pointer: Point, displayed: Size) {
        if self.rect.is_none() {
            return;
        }
        let delta =
            coords::screen_delta_to_image(pointer - drag.start_pointer, displayed, self.natural);
        let updated = match drag.mode {
            CropDragMode::Move => self.moved(drag.start_box, delta),
            CropDragMode::Resize(handle) => {
                // A manual reshape leaves the preset behind.
                self.ratio = CropRatio::Free;
                self.resized(drag.start_box, handle, delta)
            }
        };
        self.rect = Some(updated);
    }

    /// Integral rectangle for the rasterizer, rounded and kept inside the image.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixel_rect(&self) -> Option<PixelRect> {
        let rect = self.rect?;
        let natural_width = self.natural.width.round().max(1.0) as u32;
        let natural_height = self.natural.height.round().max(1.0) as u32;

        let x = (rect.x.round().max(0.0) as u32).min(natural_width - 1);
        let y = (rect.y.round().max(0.0) as u32).min(natural_height - 1);
        let width = (rect.width.round().max(1.0) as u32).min(natural_width - x);
        let height = (rect.height.round().max(1.0) as u32).min(natural_height - y);
        Some(PixelRect::new(x, y, width, height))
    }

    fn min_width(&self) -> f32 {
        MIN_DIMENSION.min(self.natural.width)
    }

    fn min_height(&self) -> f32 {
        MIN_DIMENSION.min(self.natural.height)
    }

    /// Leading edges stop at 0; a trailing edge past the image cuts the size
    /// down, never below the minimum.
    fn moved(&self, start: CropBox, delta: Vector) -> CropBox {
        let (x, width) = Self::moved_span(
            start.x + delta.x,
            start.width,
            self.natural.width,
            self.min_width(),
        );
        let (y, height) = Self::moved_span(
            start.y + delta.y,
            start.height,
            self.natural.height,
            self.min_height(),
        );
        CropBox::new(x, y, width, height)
    }

    fn moved_span(origin: f32, length: f32, extent: f32, min: f32) -> (f32, f32) {
        let origin = origin.clamp(0.0, extent - min);
        (origin, length.min(extent - origin))
    }

    fn resized(&self, start: CropBox, handle: HandlePosition, delta: Vector) -> CropBox {
        let mut result = start;

        if handle.moves_left() {
            // Right edge is fixed.
            let right = start.right();
            let left = (start.x + delta.x).clamp(0.0, right - self.min_width());
            result.x = left;
            result.width = right - left;
        } else if handle.moves_right() {
            let right =
                (start.right() + delta.x).clamp(start.x + self.min_width(), self.natural.width);
            result.width = right - start.x;
        }

        if handle.moves_top() {
            let bottom = start.bottom();
            let top = (start.y + delta.y).clamp(0.0, bottom - self.min_height());
            result.y = top;
            result.height = bottom - top;
        } else if handle.moves_bottom() {
            let bottom =
                (start.bottom() + delta.y).clamp(start.y + self.min_height(), self.natural.height);
            result.height = bottom - start.y;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const NATURAL: Size = Size::new(800.0, 600.0);

    fn engine() -> CropEngine {
        let mut engine = CropEngine::new();
        engine.start(NATURAL);
        engine
    }

    /// Drags at zoom 1 so screen and image deltas match.
    fn drag(engine: &mut CropEngine, mode: CropDragMode, delta: Vector) {
        let drag = engine
            .begin_drag(mode, Point::ORIGIN)
            .expect("crop mode active");
        engine.drag_to(&drag, Point::ORIGIN + delta, NATURAL);
    }

    fn assert_inside(engine: &CropEngine) {
        let rect = engine.rect().expect("active");
        assert!(rect.x >= 0.0 && rect.y >= 0.0);
        assert!(rect.right() <= NATURAL.width + F32_EPSILON);
        assert!(rect.bottom() <= NATURAL.height + F32_EPSILON);
        assert!(rect.width >= MIN_DIMENSION && rect.height >= MIN_DIMENSION);
    }

    #[test]
    fn start_covers_full_image() {
        let engine = engine();
        assert_eq!(engine.rect(), Some(CropBox::new(0.0, 0.0, 800.0, 600.0)));
        assert_eq!(engine.ratio(), CropRatio::Free);
    }

    #[test]
    fn bottom_right_growth_clamps_to_boundary() {
        let mut engine = engine();
        drag(&mut engine, CropDragMode::Resize(HandlePosition::TopLeft), Vector::new(100.0, 100.0));
        drag(&mut engine, CropDragMode::Resize(HandlePosition::BottomRight), Vector::new(500.0, 500.0));

        let rect = engine.rect().expect("active");
        assert_eq!(rect.x, 100.0);
        assert_eq!(rect.right(), NATURAL.width);
        assert_eq!(rect.bottom(), NATURAL.height);
    }

    #[test]
    fn shrinking_past_minimum_clamps_to_minimum() {
        let mut engine = engine();
        drag(&mut engine, CropDragMode::Resize(HandlePosition::Right), Vector::new(-2000.0, 0.0));
        let rect = engine.rect().expect("active");
        assert_eq!(rect.width, MIN_DIMENSION);
        assert_eq!(rect.x, 0.0);

        drag(&mut engine, CropDragMode::Resize(HandlePosition::Top), Vector::new(0.0, 2000.0));
        let rect = engine.rect().expect("active");
        assert_eq!(rect.height, MIN_DIMENSION);
        assert_eq!(rect.bottom(), NATURAL.height);
    }

    #[test]
    fn left_edge_overflow_keeps_right_edge() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(200.0, 100.0, 300.0, 200.0));
        drag(&mut engine, CropDragMode::Resize(HandlePosition::Left), Vector::new(-500.0, 0.0));

        let rect = engine.rect().expect("active");
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.right(), 500.0);
        assert_eq!(rect.y, 100.0);
        assert_eq!(rect.height, 200.0);
    }

    #[test]
    fn move_past_right_edge_reduces_width() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(500.0, 100.0, 200.0, 100.0));

        drag(&mut engine, CropDragMode::Move, Vector::new(250.0, 0.0));
        assert_eq!(engine.rect(), Some(CropBox::new(750.0, 100.0, 50.0, 100.0)));
    }

    #[test]
    fn move_past_left_edge_pins_position() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(100.0, 100.0, 200.0, 100.0));

        drag(&mut engine, CropDragMode::Move, Vector::new(-300.0, -300.0));
        assert_eq!(engine.rect(), Some(CropBox::new(0.0, 0.0, 200.0, 100.0)));
    }

    #[test]
    fn move_overflow_stops_at_minimum_and_recovers() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(100.0, 100.0, 200.0, 100.0));
        let drag = engine
            .begin_drag(CropDragMode::Move, Point::ORIGIN)
            .expect("crop mode active");

        engine.drag_to(&drag, Point::new(10_000.0, 10_000.0), NATURAL);
        assert_eq!(engine.rect(), Some(CropBox::new(790.0, 590.0, 10.0, 10.0)));

        // Sizes come from the drag start, so pulling back restores them.
        engine.drag_to(&drag, Point::new(50.0, 0.0), NATURAL);
        assert_eq!(engine.rect(), Some(CropBox::new(150.0, 100.0, 200.0, 100.0)));
    }

    #[test]
    fn drag_converts_screen_delta_with_display_ratio() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(100.0, 100.0, 200.0, 100.0));
        let drag = engine
            .begin_drag(CropDragMode::Move, Point::new(50.0, 50.0))
            .expect("active");

        // Displayed at half size: 10 screen pixels are 20 image pixels.
        engine.drag_to(&drag, Point::new(60.0, 55.0), Size::new(400.0, 300.0));
        assert_eq!(engine.rect(), Some(CropBox::new(120.0, 110.0, 200.0, 100.0)));

        // Recomputed from the start, not accumulated.
        engine.drag_to(&drag, Point::new(60.0, 55.0), Size::new(400.0, 300.0));
        assert_eq!(engine.rect(), Some(CropBox::new(120.0, 110.0, 200.0, 100.0)));
    }

    #[test]
    fn random_drags_never_escape_bounds() {
        let handles = HandlePosition::ALL;
        let mut engine = engine();
        let mut seed: u32 = 7;
        for step in 0..300 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            #[allow(clippy::cast_precision_loss)]
            let dx = ((seed >> 8) % 1600) as f32 - 800.0;
            #[allow(clippy::cast_precision_loss)]
            let dy = ((seed >> 20) % 1200) as f32 - 600.0;
            let mode = if step % 3 == 0 {
                CropDragMode::Move
            } else {
                CropDragMode::Resize(handles[step % handles.len()])
            };
            drag(&mut engine, mode, Vector::new(dx, dy));
            assert_inside(&engine);
        }
    }

    #[test]
    fn set_rect_clamps_into_image() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(-50.0, 580.0, 2.0, 5000.0));
        assert_eq!(engine.rect(), Some(CropBox::new(0.0, 0.0, 10.0, 600.0)));
    }

    #[test]
    fn ratio_presets_recenter_largest_box() {
        let mut engine = engine();

        engine.set_ratio(CropRatio::Square);
        assert_eq!(engine.rect(), Some(CropBox::new(100.0, 0.0, 600.0, 600.0)));

        engine.set_ratio(CropRatio::Landscape);
        let rect = engine.rect().expect("active");
        assert_abs_diff_eq!(rect.width, 800.0);
        assert_abs_diff_eq!(rect.height, 450.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(rect.y, 75.0, epsilon = F32_EPSILON);

        engine.set_ratio(CropRatio::Photo);
        assert_eq!(engine.rect(), Some(CropBox::new(0.0, 0.0, 800.0, 600.0)));

        engine.set_ratio(CropRatio::Free);
        assert_eq!(engine.rect(), Some(CropBox::new(0.0, 0.0, 800.0, 600.0)));
        assert_eq!(engine.ratio(), CropRatio::Free);
    }

    #[test]
    fn resize_drag_drops_the_preset() {
        let mut engine = engine();
        engine.set_ratio(CropRatio::Square);
        drag(&mut engine, CropDragMode::Resize(HandlePosition::Right), Vector::new(-10.0, 0.0));
        assert_eq!(engine.ratio(), CropRatio::Free);
    }

    #[test]
    fn hit_test_prefers_handles_then_body() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(100.0, 100.0, 200.0, 100.0));

        assert_eq!(
            engine.hit_test(Point::new(102.0, 98.0), 6.0),
            Some(CropDragMode::Resize(HandlePosition::TopLeft))
        );
        assert_eq!(engine.hit_test(Point::new(150.0, 150.0), 6.0), Some(CropDragMode::Move));
        assert_eq!(engine.hit_test(Point::new(50.0, 50.0), 6.0), None);
    }

    #[test]
    fn pixel_rect_rounds_and_stays_inside() {
        let mut engine = engine();
        engine.set_rect(CropBox::new(10.4, 20.6, 99.5, 579.4));
        assert_eq!(engine.to_pixel_rect(), Some(PixelRect::new(10, 21, 100, 579)));

        engine.set_rect(CropBox::new(700.6, 0.0, 99.4, 600.0));
        let rect = engine.to_pixel_rect().expect("active");
        assert!(rect.fits_within(800, 600));
    }

    #[test]
    fn tiny_images_use_their_own_size_as_minimum() {
        let mut engine = CropEngine::new();
        engine.start(Size::new(6.0, 4.0));
        let drag = engine
            .begin_drag(CropDragMode::Resize(HandlePosition::BottomRight), Point::ORIGIN)
            .expect("active");
        engine.drag_to(&drag, Point::new(-100.0, -100.0), Size::new(6.0, 4.0));
        assert_eq!(engine.rect(), Some(CropBox::new(0.0, 0.0, 6.0, 4.0)));
    }

    #[test]
    fn cancel_and_take_leave_crop_mode() {
        let mut engine = engine();
        assert!(engine.cancel());
        assert!(!engine.cancel());
        assert!(engine.begin_drag(CropDragMode::Move, Point::ORIGIN).is_none());

        engine.start(NATURAL);
        assert_eq!(engine.take(), Some(CropBox::full(NATURAL)));
        assert!(!engine.is_active());
    }
}
