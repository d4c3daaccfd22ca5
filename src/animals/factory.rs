// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::animals::{Cat, Dog, Portion, Rat};
use crate::config::AnimalConfig;
use crate::errors::RosterError;
use crate::traits::Eater;

/// Factory for creating animal instances from roster entries.
///
/// This is deliberately the one place that enumerates known species. The
/// feeder itself never does; an animal built elsewhere and handed to the
/// feeder directly bypasses the factory entirely.
pub struct AnimalFactory;

impl AnimalFactory {
    /// Create an animal from a roster entry.
    ///
    /// The `species` field determines which animal to create:
    /// - "cat" -> Cat (requires name and portion)
    /// - "dog" -> Dog (requires name and portion)
    /// - "rat" -> Rat (requires nothing)
    pub fn create_animal(config: &AnimalConfig) -> Result<Box<dyn Eater>, RosterError> {
        match config.species.as_str() {
            "cat" => {
                let (name, portion) = Self::named_with_portion(config)?;
                Ok(Box::new(Cat::new(name, portion)))
            }
            "dog" => {
                let (name, portion) = Self::named_with_portion(config)?;
                Ok(Box::new(Dog::new(name, portion)))
            }
            "rat" => Ok(Box::new(Rat::new())),

            // Add more species here as they're implemented
            _ => Err(RosterError::UnknownSpecies {
                species: config.species.clone(),
            }),
        }
    }

    /// List all species this factory can build.
    pub fn list_available_species() -> Vec<&'static str> {
        vec!["cat", "dog", "rat"]
    }

    /// Check if a species is available.
    pub fn is_species_available(species: &str) -> bool {
        Self::list_available_species().contains(&species)
    }

    fn named_with_portion(config: &AnimalConfig) -> Result<(String, Portion), RosterError> {
        let name = config.name.clone().ok_or_else(|| RosterError::MissingName {
            species: config.species.clone(),
        })?;
        let grams = config.portion.ok_or_else(|| RosterError::MissingPortion {
            species: config.species.clone(),
            name: name.clone(),
        })?;
        Ok((name, Portion::new(grams)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config(species: &str, name: Option<&str>, portion: Option<u64>) -> AnimalConfig {
        AnimalConfig {
            species: species.to_string(),
            name: name.map(str::to_string),
            portion,
        }
    }

    #[test]
    fn test_create_known_species() {
        let test_cases = vec![
            ("cat", Some("KiKi"), Some(5), "cat"),
            ("dog", Some("Rover"), Some(10), "dog"),
            ("rat", None, None, "rat"),
        ];

        for (species, name, portion, expected_species) in test_cases {
            let config = create_test_config(species, name, portion);
            let animal = AnimalFactory::create_animal(&config)
                .unwrap_or_else(|e| panic!("Failed to create '{}': {}", species, e));

            assert_eq!(animal.species(), expected_species);
            assert!(!animal.describe_eating().is_empty());
        }
    }

    #[test]
    fn test_create_animal_unknown_species() {
        let config = create_test_config("goldfish", Some("Bubbles"), Some(1));

        let result = AnimalFactory::create_animal(&config);
        assert_eq!(
            result.err(),
            Some(RosterError::UnknownSpecies {
                species: "goldfish".to_string()
            })
        );
    }

    #[test]
    fn test_create_animal_missing_name() {
        let config = create_test_config("cat", None, Some(5));

        let result = AnimalFactory::create_animal(&config);
        assert_eq!(
            result.err(),
            Some(RosterError::MissingName {
                species: "cat".to_string()
            })
        );
    }

    #[test]
    fn test_create_animal_missing_portion() {
        let config = create_test_config("dog", Some("Rover"), None);

        let result = AnimalFactory::create_animal(&config);
        assert_eq!(
            result.err(),
            Some(RosterError::MissingPortion {
                species: "dog".to_string(),
                name: "Rover".to_string()
            })
        );
    }

    #[test]
    fn test_rat_ignores_extra_fields() {
        // A rat entry carrying a name or portion is not an error; the
        // fields are simply unused.
        let config = create_test_config("rat", Some("Remy"), Some(2));

        let animal = AnimalFactory::create_animal(&config).unwrap();
        assert_eq!(animal.species(), "rat");
    }

    #[test]
    fn test_list_available_species() {
        let species = AnimalFactory::list_available_species();
        assert!(species.contains(&"cat"));
        assert!(species.contains(&"dog"));
        assert!(species.contains(&"rat"));
    }

    #[test]
    fn test_is_species_available() {
        assert!(AnimalFactory::is_species_available("cat"));
        assert!(AnimalFactory::is_species_available("rat"));
        assert!(!AnimalFactory::is_species_available("goldfish"));
    }
}
