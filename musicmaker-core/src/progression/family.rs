//! Progression families: a position table plus ordered transition rules.
//!
//! Rules are replayed in order into a [`WeightedDigraph`]. A later rule
//! touching the same pair overwrites the earlier weight, so the order of
//! each table is significant.

use super::position::Position;
use super::weight::Weight;
use crate::error::{Result, TheoryError};
use crate::graph::WeightedDigraph;

/// One step of a family's edge construction
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// `from -> to`
    Edge(&'static str, &'static str, Weight),
    /// Every `from -> to` combination, outer loop over `from`
    Fan(&'static [&'static str], &'static [&'static str], Weight),
    /// For every combination, `from -> to` then the reverse edge at the second weight
    Both(&'static [&'static str], &'static [&'static str], Weight, Weight),
}

/// A static harmony map for one kind of key
#[derive(Debug)]
pub struct Family {
    pub name: &'static str,
    /// Catalogue mode the positions are resolved against
    pub mode: &'static str,
    /// Tonic position, the default start and the restart point for dead ends
    pub resolve: &'static str,
    pub positions: &'static [Position],
    pub rules: &'static [Rule],
}

impl Family {
    pub fn position(&self, name: &str) -> Result<Position> {
        self.positions
            .iter()
            .find(|p| p.name() == name)
            .copied()
            .ok_or_else(|| TheoryError::UnknownPosition(name.to_string()))
    }

    /// Replay the rules into a fresh graph
    pub fn build_graph(&self) -> Result<WeightedDigraph<Position>> {
        let mut graph = WeightedDigraph::new();
        let mut edge = |head: &str, tail: &str, weight: Weight| -> Result<()> {
            graph.add_edge(self.position(head)?, self.position(tail)?, weight.value());
            Ok(())
        };

        for rule in self.rules {
            match *rule {
                Rule::Edge(head, tail, weight) => edge(head, tail, weight)?,
                Rule::Fan(heads, tails, weight) => {
                    for &head in heads {
                        for &tail in tails {
                            edge(head, tail, weight)?;
                        }
                    }
                }
                Rule::Both(heads, tails, forward, back) => {
                    for &head in heads {
                        for &tail in tails {
                            edge(head, tail, forward)?;
                            edge(tail, head, back)?;
                        }
                    }
                }
            }
        }

        for position in self.positions {
            graph.get_or_add(*position);
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{MAJOR, MINOR};

    #[test]
    fn test_unknown_position() {
        assert_eq!(
            MAJOR.position("VIII"),
            Err(TheoryError::UnknownPosition("VIII".to_string()))
        );
    }

    #[test]
    fn test_families_build() {
        for family in [&MAJOR, &MINOR] {
            let graph = family.build_graph().unwrap();
            assert_eq!(graph.len(), family.positions.len(), "{}", family.name);
            family.position(family.resolve).unwrap();
        }
    }

    #[test]
    fn test_later_rules_overwrite() {
        static POSITIONS: [Position; 2] = [
            Position::new("I", 1, "", &[]),
            Position::new("V", 5, "", &[]),
        ];
        static RULES: [Rule; 3] = [
            Rule::Edge("I", "V", Weight::Resolve),
            Rule::Both(&["I"], &["V"], Weight::Primary, Weight::Sparse),
            Rule::Fan(&["V"], &["I"], Weight::Rare),
        ];
        let family = Family {
            name: "test",
            mode: "Major",
            resolve: "I",
            positions: &POSITIONS,
            rules: &RULES,
        };
        let graph = family.build_graph().unwrap();
        let one = graph.get(&POSITIONS[0]).unwrap();
        let five = graph.get(&POSITIONS[1]).unwrap();
        assert_eq!(graph.weight(one, five), Some(0));
        assert_eq!(graph.weight(five, one), Some(16));
    }

    #[test]
    fn test_rule_with_unknown_name_fails() {
        static POSITIONS: [Position; 1] = [Position::new("I", 1, "", &[])];
        static RULES: [Rule; 1] = [Rule::Edge("I", "IX", Weight::Primary)];
        let family = Family {
            name: "broken",
            mode: "Major",
            resolve: "I",
            positions: &POSITIONS,
            rules: &RULES,
        };
        assert!(matches!(
            family.build_graph(),
            Err(TheoryError::UnknownPosition(_))
        ));
    }
}
