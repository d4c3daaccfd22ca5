// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for roster resolution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A roster entry resolved into an animal instance.
///
/// # Log Level
/// `debug!` - Per-item detail
pub struct AnimalResolved<'a> {
    pub species: &'a str,
    pub name: Option<&'a str>,
}

impl Display for AnimalResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.name {
            Some(name) => write!(f, "Resolved {} '{}'", self.species, name),
            None => write!(f, "Resolved {}", self.species),
        }
    }
}

impl StructuredLog for AnimalResolved<'_> {
    fn log(&self) {
        tracing::debug!(species = self.species, name = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "animal_resolved",
            span_name = name,
            species = self.species,
        )
    }
}

/// A roster entry could not be resolved.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use chow_line::observability::messages::roster::AnimalResolutionFailed;
/// use chow_line::errors::RosterError;
///
/// let error = RosterError::UnknownSpecies { species: "dragon".to_string() };
/// let msg = AnimalResolutionFailed {
///     species: "dragon",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct AnimalResolutionFailed<'a> {
    pub species: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for AnimalResolutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to resolve roster entry for '{}': {}",
            self.species, self.error
        )
    }
}

impl StructuredLog for AnimalResolutionFailed<'_> {
    fn log(&self) {
        tracing::error!(species = self.species, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "animal_resolution_failed",
            span_name = name,
            species = self.species,
        )
    }
}
