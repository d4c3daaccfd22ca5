// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::animals::Portion;
use crate::traits::Eater;

/// A dog with a name and an assigned portion.
pub struct Dog {
    name: String,
    portion: Portion,
}

impl Dog {
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

impl Eater for Dog {
    fn describe_eating(&self) -> String {
        format!(
            "{} the dog wolfs down {} grams of kibble.",
            self.name, self.portion
        )
    }

    fn species(&self) -> &'static str {
        "dog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_references_name_and_portion() {
        let dog = Dog::new("Rover", Portion::new(10));
        let line = dog.describe_eating();

        assert!(line.contains("Rover"));
        assert!(line.contains("10"));
        assert!(line.contains("dog"));
    }
}
