use crate::error::Result;
use crate::types::chord::Chord;
use crate::types::pitch::{Pitch, DEFAULT_OCTAVE};
use crate::types::scale::Scale;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A harmonic function within a key, e.g. `V`, `iim` or `bVII`.
///
/// The chord root is a scale degree plus a chromatic offset. The base
/// suffix is always available, the optional suffixes are idiomatic
/// extensions. Positions compare and order by name.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    name: &'static str,
    root_step: i32,
    step_adjust: i32,
    base_adjust: &'static str,
    opt_adjust: &'static [&'static str],
}

impl Position {
    pub const fn new(
        name: &'static str,
        root_step: i32,
        base_adjust: &'static str,
        opt_adjust: &'static [&'static str],
    ) -> Self {
        Position {
            name,
            root_step,
            step_adjust: 0,
            base_adjust,
            opt_adjust,
        }
    }

    /// Same position shifted off the scale degree by some semitones
    pub const fn chromatic(mut self, step_adjust: i32) -> Self {
        self.step_adjust = step_adjust;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn root_step(&self) -> i32 {
        self.root_step
    }

    pub fn step_adjust(&self) -> i32 {
        self.step_adjust
    }

    pub fn base_adjust(&self) -> &'static str {
        self.base_adjust
    }

    pub fn opt_adjust(&self) -> &'static [&'static str] {
        self.opt_adjust
    }

    pub fn base_pitch(&self, scale: &Scale) -> Pitch {
        scale.get_pitch(self.root_step).transpose(self.step_adjust)
    }

    pub fn base_chord(&self, scale: &Scale) -> Result<Arc<Chord>> {
        self.chord_with(scale, self.base_adjust)
    }

    /// Chord for the optional suffix at `index`, or the base chord past the end
    pub fn adjusted_chord(&self, scale: &Scale, index: usize) -> Result<Arc<Chord>> {
        match self.opt_adjust.get(index) {
            Some(suffix) => self.chord_with(scale, suffix),
            None => self.base_chord(scale),
        }
    }

    /// Base chord or one of the optional ones, all equally likely
    pub fn random_chord<R: Rng + ?Sized>(&self, scale: &Scale, rng: &mut R) -> Result<Arc<Chord>> {
        let index = rng.gen_range(0..=self.opt_adjust.len());
        self.adjusted_chord(scale, index)
    }

    /// Base chord followed by every optional chord
    pub fn chord_list(&self, scale: &Scale) -> Result<Vec<Arc<Chord>>> {
        std::iter::once(self.base_adjust)
            .chain(self.opt_adjust.iter().copied())
            .map(|suffix| self.chord_with(scale, suffix))
            .collect()
    }

    fn chord_with(&self, scale: &Scale, suffix: &str) -> Result<Arc<Chord>> {
        let root = self.base_pitch(scale);
        Chord::create(&format!("{}{}", root.name(), suffix), DEFAULT_OCTAVE)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SUPERTONIC: Position = Position::new("iim", 2, "m", &["m7", "m9"]);
    const FLAT_SEVEN: Position = Position::new("bVII", 7, "", &["9"]).chromatic(-1);

    fn c_major() -> Scale {
        Scale::named("C", "Major").unwrap()
    }

    #[test]
    fn test_base_chord() {
        let scale = c_major();
        assert_eq!(SUPERTONIC.base_pitch(&scale).name(), "D");
        assert_eq!(SUPERTONIC.base_chord(&scale).unwrap().name(), "Dm");
        assert_eq!(FLAT_SEVEN.base_pitch(&scale).name(), "Bb");
        assert_eq!(FLAT_SEVEN.base_chord(&scale).unwrap().name(), "Bb");
    }

    #[test]
    fn test_chord_list() {
        let names: Vec<String> = SUPERTONIC
            .chord_list(&c_major())
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Dm", "Dm7", "Dm9"]);
    }

    #[test]
    fn test_adjusted_chord_past_end_is_base() {
        let scale = c_major();
        assert_eq!(SUPERTONIC.adjusted_chord(&scale, 1).unwrap().name(), "Dm9");
        assert_eq!(SUPERTONIC.adjusted_chord(&scale, 2).unwrap().name(), "Dm");
    }

    #[test]
    fn test_random_chord_covers_every_choice() {
        let scale = c_major();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(SUPERTONIC.random_chord(&scale, &mut rng).unwrap().name().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_identity_is_name() {
        let other = Position::new("iim", 4, "", &[]);
        assert_eq!(SUPERTONIC, other);
        assert!(FLAT_SEVEN < SUPERTONIC);
    }
}
