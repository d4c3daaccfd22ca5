// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod roster;

pub use config::ConfigError;
pub use roster::RosterError;
