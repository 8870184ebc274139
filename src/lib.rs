// SPDX-License-Identifier: MPL-2.0
//! `photo_canvas` is the interaction and edit-history engine of a photo
//! editing canvas.
//!
//! It owns undo/redo of image states, free-form overlay elements with
//! move/resize/rotate handles, the crop tool, and pan/zoom navigation. Drawing
//! is left to the host: [`editor::State::composition`] describes a frame.

#![doc(html_root_url = "https://docs.rs/photo_canvas/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod media;
pub mod state;

#[cfg(test)]
mod test_utils;
