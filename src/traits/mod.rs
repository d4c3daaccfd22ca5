// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod eater;
pub mod sink;

pub use eater::Eater;
pub use sink::{ConsoleSink, FeedSink, RecordingSink};
