// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;

pub use loader::{load_roster, AnimalConfig, Roster};
pub use registry::build_menagerie;
