// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing rules and value objects.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `std` it only leans on `iced_core`'s geometry primitives
//! (`Point`, `Vector`, `Size`, `Rectangle`), so everything here stays testable
//! without a renderer.
//!
//! # Modules
//!
//! - [`editing`]: Editing value objects ([`HistoryCapacity`](editing::HistoryCapacity),
//!   [`AdjustmentPercent`](editing::AdjustmentPercent), [`HueDegrees`](editing::HueDegrees))
//! - [`geometry`]: Coordinate mapping between screen and image space, resize handles
//! - [`media`]: Image types ([`RawImage`](media::RawImage), [`PixelRect`](media::PixelRect))
//! - [`ui`]: UI value objects ([`ZoomFactor`](ui::ZoomFactor))

pub mod editing;
pub mod geometry;
pub mod media;
pub mod ui;
