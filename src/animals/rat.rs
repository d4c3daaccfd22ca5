// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::Eater;

/// A rat. Nameless, portionless, entirely self-sufficient.
///
/// Exists to show that an animal with none of the usual construction-time
/// data still feeds through the same capability with zero feeder changes.
pub struct Rat;

impl Rat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Rat {
    fn default() -> Self {
        Self::new()
    }
}

impl Eater for Rat {
    fn describe_eating(&self) -> String {
        "The rat gnaws on whatever it can find.".to_string()
    }

    fn species(&self) -> &'static str {
        "rat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_fixed_with_no_portion() {
        let rat = Rat::new();
        let line = rat.describe_eating();

        assert_eq!(line, "The rat gnaws on whatever it can find.");
        assert!(!line.contains("gram"));
    }
}
