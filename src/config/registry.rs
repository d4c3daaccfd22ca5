// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::animals::AnimalFactory;
use crate::config::Roster;
use crate::errors::RosterError;
use crate::observability::messages::{roster::*, StructuredLog};
use crate::traits::Eater;

/// Resolves roster entries into animal instances, preserving roster order.
///
/// Each entry goes through [`AnimalFactory`]; the first unresolvable entry
/// aborts the build. The returned vector is the feeding order.
pub fn build_menagerie(roster: &Roster) -> Result<Vec<Box<dyn Eater>>, RosterError> {
    let mut menagerie: Vec<Box<dyn Eater>> = Vec::with_capacity(roster.animals.len());

    for entry in &roster.animals {
        let animal = match AnimalFactory::create_animal(entry) {
            Ok(animal) => animal,
            Err(e) => {
                AnimalResolutionFailed {
                    species: &entry.species,
                    error: &e,
                }
                .log();
                return Err(e);
            }
        };

        AnimalResolved {
            species: animal.species(),
            name: entry.name.as_deref(),
        }
        .log();

        menagerie.push(animal);
    }

    Ok(menagerie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimalConfig;

    fn entry(species: &str, name: Option<&str>, portion: Option<u64>) -> AnimalConfig {
        AnimalConfig {
            species: species.to_string(),
            name: name.map(str::to_string),
            portion,
        }
    }

    #[test]
    fn test_build_menagerie_table_driven() {
        struct TestCase {
            name: &'static str,
            roster: Roster,
            expected_species: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty roster",
                roster: Roster { animals: vec![] },
                expected_species: vec![],
            },
            TestCase {
                name: "single cat",
                roster: Roster {
                    animals: vec![entry("cat", Some("KiKi"), Some(5))],
                },
                expected_species: vec!["cat"],
            },
            TestCase {
                name: "the worked example",
                roster: Roster {
                    animals: vec![
                        entry("cat", Some("KiKi"), Some(5)),
                        entry("dog", Some("Rover"), Some(10)),
                        entry("rat", None, None),
                    ],
                },
                expected_species: vec!["cat", "dog", "rat"],
            },
            TestCase {
                name: "duplicates keep their positions",
                roster: Roster {
                    animals: vec![
                        entry("rat", None, None),
                        entry("cat", Some("Mo"), Some(3)),
                        entry("rat", None, None),
                    ],
                },
                expected_species: vec!["rat", "cat", "rat"],
            },
        ];

        for test_case in test_cases {
            let menagerie = build_menagerie(&test_case.roster)
                .unwrap_or_else(|e| panic!("Test case '{}' failed: {}", test_case.name, e));

            let species: Vec<&str> = menagerie.iter().map(|a| a.species()).collect();
            assert_eq!(
                species, test_case.expected_species,
                "Test case '{}': wrong species order",
                test_case.name
            );
        }
    }

    #[test]
    fn unknown_species_aborts_the_build() {
        let roster = Roster {
            animals: vec![
                entry("cat", Some("KiKi"), Some(5)),
                entry("dragon", Some("Smaug"), Some(9000)),
            ],
        };

        let result = build_menagerie(&roster);
        assert_eq!(
            result.err(),
            Some(RosterError::UnknownSpecies {
                species: "dragon".to_string()
            })
        );
    }
}
