// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for feeding run lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A feeding run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use chow_line::observability::messages::feeder::FeedingStarted;
///
/// let msg = FeedingStarted { animal_count: 3 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct FeedingStarted {
    pub animal_count: usize,
}

impl Display for FeedingStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Feeding started: {} animals in line", self.animal_count)
    }
}

impl StructuredLog for FeedingStarted {
    fn log(&self) {
        tracing::info!(animal_count = self.animal_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "feeding",
            span_name = name,
            animal_count = self.animal_count,
        )
    }
}

/// A feeding run completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use chow_line::observability::messages::feeder::FeedingCompleted;
///
/// let msg = FeedingCompleted { animal_count: 3, lines_emitted: 3 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct FeedingCompleted {
    pub animal_count: usize,
    pub lines_emitted: usize,
}

impl Display for FeedingCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Feeding completed: {} animals fed, {} lines emitted",
            self.animal_count, self.lines_emitted
        )
    }
}

impl StructuredLog for FeedingCompleted {
    fn log(&self) {
        tracing::info!(
            animal_count = self.animal_count,
            lines_emitted = self.lines_emitted,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "feeding_completed",
            span_name = name,
            animal_count = self.animal_count,
            lines_emitted = self.lines_emitted,
        )
    }
}

/// One animal was fed.
///
/// # Log Level
/// `debug!` - Per-item detail, noisy at scale
pub struct AnimalFed<'a> {
    pub species: &'a str,
    pub position: usize,
}

impl Display for AnimalFed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Fed {} at position {}", self.species, self.position)
    }
}

impl StructuredLog for AnimalFed<'_> {
    fn log(&self) {
        tracing::debug!(species = self.species, position = self.position, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "animal_fed",
            span_name = name,
            species = self.species,
            position = self.position,
        )
    }
}
