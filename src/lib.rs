// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod animals;       // concrete species
pub mod config;        // roster loading + resolution
pub mod errors;        // error handling
pub mod feeder;        // the feeding line
pub mod observability;
pub mod traits;        // unified abstractions

pub use animals::{AnimalFactory, Cat, Dog, Portion, Rat};
pub use config::{build_menagerie, load_roster, AnimalConfig, Roster};
pub use feeder::Feeder;
pub use traits::{ConsoleSink, Eater, FeedSink, RecordingSink};
