// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Output seam for lines emitted by the feeder.
///
/// The feeder writes each description through this trait so callers decide
/// where the text goes. The demo binary uses [`ConsoleSink`]; tests use a
/// recording sink to assert on emission order.
pub trait FeedSink {
    /// Emit one descriptive line.
    fn emit(&mut self, line: &str);
}

/// Sink that writes each line to stdout.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Sink that collects emitted lines in memory.
///
/// Useful anywhere the emitted sequence needs to be inspected after the fact.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines emitted so far, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl FeedSink for RecordingSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_preserves_emission_order() {
        let mut sink = RecordingSink::new();
        sink.emit("first");
        sink.emit("second");
        sink.emit("third");

        assert_eq!(sink.lines(), &["first", "second", "third"]);
    }

    #[test]
    fn recording_sink_starts_empty() {
        let sink = RecordingSink::new();
        assert!(sink.lines().is_empty());
    }
}
