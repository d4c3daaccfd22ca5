// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for roster resolution and animal instantiation.

use thiserror::Error;

/// Errors that can occur while turning roster entries into animals.
///
/// These are the only failure modes the system models: all of them are
/// invalid-argument conditions surfaced at construction time. Once an animal
/// exists, feeding it cannot fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    /// The roster names a species no factory knows how to build.
    #[error("Unknown species: '{species}'")]
    UnknownSpecies { species: String },

    /// The species requires a name but the roster entry has none.
    #[error("Roster entry for species '{species}' is missing a name")]
    MissingName { species: String },

    /// The species requires a portion but the roster entry has none.
    #[error("Roster entry for '{name}' ({species}) is missing a portion")]
    MissingPortion { species: String, name: String },
}
