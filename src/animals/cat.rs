// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::animals::Portion;
use crate::traits::Eater;

/// A cat with a name and an assigned portion.
pub struct Cat {
    name: String,
    portion: Portion,
}

impl Cat {
    pub fn new(name: impl Into<String>, portion: Portion) -> Self {
        Self {
            name: name.into(),
            portion,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Eater for Cat {
    fn describe_eating(&self) -> String {
        format!(
            "{} the cat nibbles {} grams of kibble.",
            self.name, self.portion
        )
    }

    fn species(&self) -> &'static str {
        "cat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_references_name_and_portion() {
        let cat = Cat::new("KiKi", Portion::new(5));
        let line = cat.describe_eating();

        assert!(line.contains("KiKi"));
        assert!(line.contains("5"));
        assert!(line.contains("cat"));
    }

    #[test]
    fn species_is_cat() {
        let cat = Cat::new("KiKi", Portion::new(5));
        assert_eq!(cat.species(), "cat");
    }
}
