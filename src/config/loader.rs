// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A feeding roster: the ordered list of animals to feed.
///
/// Typically loaded from a YAML file. Order in the file is feeding order.
///
/// # Example
/// ```yaml
/// animals:
///   - species: cat
///     name: KiKi
///     portion: 5
///   - species: dog
///     name: Rover
///     portion: 10
///   - species: rat
/// ```
#[derive(Debug, Deserialize)]
pub struct Roster {
    pub animals: Vec<AnimalConfig>,
}

/// One roster entry.
///
/// `name` and `portion` are optional at the schema level because not every
/// species uses them (the rat has neither). Whether a missing field is an
/// error is decided per species by the factory.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnimalConfig {
    pub species: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub portion: Option<u64>,
}

/// Load a roster from a YAML file.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, ConfigError> {
    let content = fs::read_to_string(path)?;
    let roster: Roster = serde_yaml::from_str(&content)?;
    Ok(roster)
}
