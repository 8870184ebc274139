// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports for external collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Adapters for real services implement the application layer ports
//! - The editor state machine only talks to the ports

pub mod port;
