// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading roster files from disk.

use thiserror::Error;

/// Errors that can occur while reading and parsing a roster file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The roster file could not be read.
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    /// The roster file is not valid YAML or does not match the schema.
    #[error("Failed to parse roster file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
