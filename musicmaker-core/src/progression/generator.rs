//! Random walks over a family's transition graph.

use super::family::Family;
use super::output::Progression;
use super::position::Position;
use super::weight::Weight;
use super::{MAJOR, MINOR};
use crate::error::{Result, TheoryError};
use crate::graph::{NodeId, WeightedDigraph};
use crate::types::chord::Chord;
use crate::types::mode::Mode;
use crate::types::pitch::Pitch;
use crate::types::scale::Scale;
use crate::types::time::{beats, Beats};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::sync::Arc;

/// Tempo given to generated progressions
pub const GENERATED_TEMPO: u32 = 60;

/// How the next position is drawn from the current one's transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Every outgoing transition is equally likely
    #[default]
    Uniform,
    /// Lower rarity classes are preferred, see [`Weight::selection_weight`]
    Weighted,
}

/// One visited position and the chord chosen for it
#[derive(Debug, Clone)]
pub struct Step {
    pub position: Position,
    pub chord: Arc<Chord>,
}

/// A progression family bound to a concrete key.
///
/// The graph is built once from the family's rules; the scale can be swapped
/// without rebuilding it since positions only resolve to chords on demand.
#[derive(Debug, Clone)]
pub struct ProgressionGraph {
    family: &'static Family,
    scale: Scale,
    graph: WeightedDigraph<Position>,
    resolve: NodeId,
    start: NodeId,
    sampling: Sampling,
    duration: Beats,
}

impl ProgressionGraph {
    pub fn new(family: &'static Family, root: Pitch) -> Result<Self> {
        let scale = Scale::new(root, Mode::named(family.mode)?);
        let graph = family.build_graph()?;
        let resolve = node_for(family, &graph, family.resolve)?;
        Ok(ProgressionGraph {
            family,
            scale,
            graph,
            resolve,
            start: resolve,
            sampling: Sampling::default(),
            duration: beats(1),
        })
    }

    pub fn major(root: Pitch) -> Result<Self> {
        Self::new(&MAJOR, root)
    }

    pub fn minor(root: Pitch) -> Result<Self> {
        Self::new(&MINOR, root)
    }

    /// Start walks at the named position instead of the tonic
    pub fn with_start(mut self, name: &str) -> Result<Self> {
        self.set_start(name)?;
        Ok(self)
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Length given to every generated chord
    pub fn with_duration(mut self, duration: Beats) -> Self {
        self.duration = duration;
        self
    }

    pub fn set_start(&mut self, name: &str) -> Result<()> {
        self.start = node_for(self.family, &self.graph, name)?;
        Ok(())
    }

    /// Re-key the family; the transition graph is unchanged
    pub fn set_scale(&mut self, root: Pitch) {
        self.scale = Scale::new(root, self.scale.mode().clone());
    }

    pub fn family(&self) -> &'static Family {
        self.family
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn start(&self) -> Position {
        *self.graph.value(self.start)
    }

    pub fn resolve(&self) -> Position {
        *self.graph.value(self.resolve)
    }

    pub fn position(&self, name: &str) -> Result<Position> {
        self.family.position(name)
    }

    pub fn graph(&self) -> &WeightedDigraph<Position> {
        &self.graph
    }

    /// Outgoing transitions of a position in name order
    pub fn transitions(&self, position: &Position) -> Result<Vec<(Position, Weight)>> {
        let node = node_for(self.family, &self.graph, position.name())?;
        Ok(self
            .graph
            .weighted_neighbors(node)
            .into_iter()
            .filter_map(|(id, value)| {
                Weight::from_value(value).map(|weight| (*self.graph.value(id), weight))
            })
            .collect())
    }

    /// Base chord and every optional chord of a position in the current key
    pub fn chord_list(&self, position: &Position) -> Result<Vec<Arc<Chord>>> {
        position.chord_list(&self.scale)
    }

    /// Visit `length` positions starting from the start position.
    ///
    /// The first step always carries the start's base chord. With `extended`
    /// later steps draw uniformly from the base and optional chords. A
    /// position without transitions sends the walk back to the tonic.
    pub fn walk<R: Rng + ?Sized>(
        &self,
        length: usize,
        extended: bool,
        rng: &mut R,
    ) -> Result<Vec<Step>> {
        let mut steps = Vec::with_capacity(length);
        if length == 0 {
            return Ok(steps);
        }

        let mut current = self.start;
        steps.push(self.step(current, false, rng)?);
        while steps.len() < length {
            current = self.next(current, rng).unwrap_or(self.resolve);
            steps.push(self.step(current, extended, rng)?);
        }
        Ok(steps)
    }

    /// Walk and collect the chords into a progression, one duration each
    pub fn generate<R: Rng + ?Sized>(
        &self,
        length: usize,
        looped: bool,
        extended: bool,
        rng: &mut R,
    ) -> Result<Progression> {
        let mut progression = Progression::new(looped, GENERATED_TEMPO);
        for step in self.walk(length, extended, rng)? {
            progression.add_chord(&step.chord, self.duration);
        }
        Ok(progression)
    }

    fn step<R: Rng + ?Sized>(&self, node: NodeId, extended: bool, rng: &mut R) -> Result<Step> {
        let position = *self.graph.value(node);
        let chord = if extended {
            position.random_chord(&self.scale, rng)?
        } else {
            position.base_chord(&self.scale)?
        };
        Ok(Step { position, chord })
    }

    fn next<R: Rng + ?Sized>(&self, node: NodeId, rng: &mut R) -> Option<NodeId> {
        let choices = self.graph.weighted_neighbors(node);
        if choices.is_empty() {
            return None;
        }
        let index = match self.sampling {
            Sampling::Uniform => rng.gen_range(0..choices.len()),
            Sampling::Weighted => {
                let weights = choices
                    .iter()
                    .map(|&(_, value)| Weight::selection_weight(value));
                match WeightedIndex::new(weights) {
                    Ok(dist) => dist.sample(rng),
                    Err(_) => rng.gen_range(0..choices.len()),
                }
            }
        };
        Some(choices[index].0)
    }
}

fn node_for(
    family: &Family,
    graph: &WeightedDigraph<Position>,
    name: &str,
) -> Result<NodeId> {
    let position = family.position(name)?;
    graph
        .get(&position)
        .ok_or_else(|| TheoryError::UnknownPosition(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::family::Rule;
    use crate::types::time::beat_fraction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn c_major() -> ProgressionGraph {
        ProgressionGraph::major(Pitch::new("C", 4).unwrap()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let graph = c_major();
        assert_eq!(graph.start().name(), "I");
        assert_eq!(graph.resolve().name(), "I");
        assert_eq!(graph.sampling(), Sampling::Uniform);
        assert_eq!(graph.scale().to_string(), "C4 Major");
        assert_eq!(graph.graph().len(), 32);
    }

    #[test]
    fn test_walk_starts_with_base_chord() {
        let graph = c_major().with_start("iim").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let steps = graph.walk(6, true, &mut rng).unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].position.name(), "iim");
        assert_eq!(steps[0].chord.name(), "Dm");
    }

    #[test]
    fn test_empty_walk() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(c_major().walk(0, false, &mut rng).unwrap().is_empty());
        assert!(c_major().generate(0, false, false, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_start() {
        assert_eq!(
            c_major().with_start("viii").unwrap_err(),
            TheoryError::UnknownPosition("viii".to_string())
        );
    }

    #[test]
    fn test_transitions() {
        let graph = c_major();
        let five = graph.position("V").unwrap();
        let transitions = graph.transitions(&five).unwrap();
        assert!(transitions.contains(&(graph.position("I").unwrap(), Weight::Resolve)));
        assert!(transitions.contains(&(graph.position("IIIm7b5").unwrap(), Weight::Rare)));
        let names: Vec<&str> = transitions.iter().map(|(p, _)| p.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_set_scale_rekeys_chords() {
        let mut graph = c_major();
        let two = graph.position("iim").unwrap();
        graph.set_scale(Pitch::new("Eb", 4).unwrap());
        let names: Vec<String> = graph
            .chord_list(&two)
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Fm", "Fm7", "Fm9"]);
    }

    #[test]
    fn test_generate_uses_duration() {
        let graph = c_major().with_duration(beat_fraction(1, 2));
        let mut rng = StdRng::seed_from_u64(3);
        let progression = graph.generate(4, true, false, &mut rng).unwrap();
        assert_eq!(progression.len(), 4);
        assert_eq!(progression.beats(), beats(2));
        assert_eq!(progression.tempo(), GENERATED_TEMPO);
        assert!(progression.looped());
        assert_eq!(progression.labels()[0], "C");
    }

    #[test]
    fn test_dead_end_restarts_at_tonic() {
        static POSITIONS: [Position; 2] = [
            Position::new("I", 1, "", &[]),
            Position::new("V", 5, "", &[]),
        ];
        static RULES: [Rule; 1] = [Rule::Edge("I", "V", Weight::Primary)];
        static FAMILY: Family = Family {
            name: "dead end",
            mode: "Major",
            resolve: "I",
            positions: &POSITIONS,
            rules: &RULES,
        };

        let graph = ProgressionGraph::new(&FAMILY, Pitch::new("G", 4).unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let names: Vec<&str> = graph
            .walk(5, false, &mut rng)
            .unwrap()
            .iter()
            .map(|s| s.position.name())
            .collect();
        assert_eq!(names, vec!["I", "V", "I", "V", "I"]);
    }
}
