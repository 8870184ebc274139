// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`ai`]: Generative image editing delegated to an external service
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Traits are `Send + Sync` so they can be driven from a blocking worker
//! - No `async fn`: callers wrap the blocking call in `tokio::task::spawn_blocking`

pub mod ai;

pub use ai::{AiError, GenerativeEditor, GenerativeOutput};
