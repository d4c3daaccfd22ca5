// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A serving size in grams.
///
/// Immutable once constructed and owned by exactly one animal. There is no
/// validation here: a portion is just a number, and construction-time data
/// is assumed well-formed (absence is handled at roster resolution, not
/// here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portion(u64);

impl Portion {
    pub fn new(grams: u64) -> Self {
        Self(grams)
    }

    pub fn grams(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Portion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portion_reports_grams() {
        let portion = Portion::new(5);
        assert_eq!(portion.grams(), 5);
    }

    #[test]
    fn portion_displays_bare_number() {
        assert_eq!(Portion::new(10).to_string(), "10");
    }
}
