// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself through `tracing` with structured
//! fields attached.
//!
//! # Usage Pattern
//!
//! ```
//! use chow_line::observability::messages::{feeder::FeedingStarted, StructuredLog};
//!
//! let msg = FeedingStarted { animal_count: 3 };
//! msg.log();
//! ```

pub mod feeder;
pub mod roster;

use tracing::Span;

/// Emit a message through `tracing` with structured fields.
///
/// `log()` writes the message at its documented level; `span()` creates a
/// span carrying the same fields for wrapping the operation the message
/// describes.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
