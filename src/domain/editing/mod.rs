// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`HistoryCapacity`]: Maximum number of committed image states kept for undo
//! - [`AdjustmentPercent`]: Brightness/contrast/saturation preview value
//! - [`HueDegrees`]: Hue rotation preview value

pub mod newtypes;

pub use newtypes::{AdjustmentPercent, HistoryCapacity, HueDegrees};
