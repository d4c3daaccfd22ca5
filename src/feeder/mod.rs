// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The feeder: a single linear pass over the feeding line.


use crate::observability::messages::{feeder::*, StructuredLog};
use crate::traits::{ConsoleSink, Eater, FeedSink};

/// Feeds an ordered line of animals through their shared capability.
///
/// The feeder borrows its animals; it holds `&dyn Eater` and nothing else,
/// so it cannot inspect concrete types even if it wanted to. It has no state
/// beyond the line and no lifecycle beyond construction and [`feed_all`].
///
/// [`feed_all`]: Feeder::feed_all
pub struct Feeder<'a> {
    line: Vec<&'a dyn Eater>,
}

impl<'a> Feeder<'a> {
    /// Build a feeder over an ordered line of animals.
    pub fn new(line: Vec<&'a dyn Eater>) -> Self {
        Self { line }
    }

    /// Build a feeder borrowing from a slice of boxed animals, as produced
    /// by roster resolution.
    pub fn from_boxed(animals: &'a [Box<dyn Eater>]) -> Self {
        Self {
            line: animals.iter().map(|a| a.as_ref()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Feed every animal in line order.
    ///
    /// For each animal, in input order, invokes the describe-eating
    /// capability and emits the resulting line through `sink`. No filtering,
    /// no retries, no reordering. Emission order equals line order, always.
    pub fn feed_all(&self, sink: &mut dyn FeedSink) {
        let start_msg = FeedingStarted {
            animal_count: self.line.len(),
        };

        let span = start_msg.span("feed_all");
        let _guard = span.enter();
        start_msg.log();

        for (position, animal) in self.line.iter().enumerate() {
            let line = animal.describe_eating();
            sink.emit(&line);

            AnimalFed {
                species: animal.species(),
                position,
            }
            .log();
        }

        FeedingCompleted {
            animal_count: self.line.len(),
            lines_emitted: self.line.len(),
        }
        .log();
    }

    /// Feed every animal, writing each line to stdout.
    pub fn feed_all_stdout(&self) {
        let mut sink = ConsoleSink::new();
        self.feed_all(&mut sink);
    }
}
