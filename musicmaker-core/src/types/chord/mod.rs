mod builder;
pub mod symbol;

pub use symbol::{Alteration, BassTarget, ChordKind, ChordParts, ChordSymbol};

use crate::cache::Memo;
use crate::error::{Result, TheoryError};
use crate::types::pitch::{Pitch, DEFAULT_OCTAVE, OCTAVE_RANGE};
use std::fmt;
use std::sync::Arc;

static CHORDS: Memo<(ChordSymbol, i32), Arc<Chord>> = Memo::new(256);

/// A chord symbol resolved to concrete pitches.
///
/// Notes are sorted by semitone value without duplicates. When the symbol
/// names a bass the first note has the bass pitch class, and the first note
/// always sits in the requested octave unless the chord is rootless.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chord {
    symbol: ChordSymbol,
    octave: i32,
    notes: Vec<Pitch>,
}

impl Chord {
    /// Parse and build a chord such as `"Cmaj7"` or `"Dm7b5/Ab"` in the given octave
    pub fn create(symbol: &str, octave: i32) -> Result<Arc<Chord>> {
        let symbol = ChordSymbol::parse(symbol)?;
        Self::from_symbol(symbol, octave)
    }

    /// Build from component strings; the joined name must tokenise back into the same parts
    pub fn from_parts(parts: &ChordParts<'_>, octave: i32) -> Result<Arc<Chord>> {
        let symbol = ChordSymbol::from_parts(parts)?;
        Self::from_symbol(symbol, octave)
    }

    /// Build from an already tokenised symbol
    pub fn from_symbol(symbol: ChordSymbol, octave: i32) -> Result<Arc<Chord>> {
        if !OCTAVE_RANGE.contains(&octave) {
            return Err(TheoryError::InvalidOctave(octave));
        }
        CHORDS.try_get_or_insert_with((symbol.clone(), octave), || {
            let root = Pitch::new(symbol.key(), DEFAULT_OCTAVE)?.normal();
            let notes = builder::build(&symbol, root, octave);
            Ok(Arc::new(Chord {
                symbol,
                octave,
                notes,
            }))
        })
    }

    pub fn name(&self) -> &str {
        self.symbol.name()
    }

    pub fn symbol(&self) -> &ChordSymbol {
        &self.symbol
    }

    /// Octave the chord was requested in
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Pitches in ascending order
    pub fn notes(&self) -> &[Pitch] {
        &self.notes
    }

    /// Lowest sounding pitch
    pub fn bass(&self) -> Option<Pitch> {
        self.notes.first().copied()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, pitch: &Pitch) -> bool {
        self.notes.contains(pitch)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.notes == other.notes
    }
}

impl Eq for Chord {}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(chord: &Chord) -> Vec<i32> {
        chord.notes().iter().map(|p| p.value()).collect()
    }

    #[test]
    fn test_create() {
        let chord = Chord::create("Cmaj7", 4).unwrap();
        assert_eq!(values(&chord), vec![60, 64, 67, 71]);
        assert_eq!(chord.name(), "Cmaj7");
        assert_eq!(chord.to_string(), "Cmaj7");
        assert_eq!(chord.octave(), 4);
        assert_eq!(chord.len(), 4);
        assert_eq!(chord.bass(), Some(Pitch::midi(60)));
    }

    #[test]
    fn test_cache_returns_shared_chord() {
        let a = Chord::create("F#m7", 3).unwrap();
        let b = Chord::create("F#m7", 3).unwrap();
        assert_eq!(a, b);

        let c = Chord::create("F#m7", 5).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_round_trip_through_name() {
        for symbol in ["Cmaj7", "Ebm7b5", "G7#9/B", "Bbsus4add9", "E/C", "Dmno5/F#", "Cno1"] {
            let chord = Chord::create(symbol, 4).unwrap();
            let again = Chord::create(chord.name(), 4).unwrap();
            assert_eq!(chord.notes(), again.notes());
        }
    }

    #[test]
    fn test_from_parts_matches_parse() {
        let parts = ChordParts {
            key: "A",
            kind: "m",
            add: "7",
            bass: "/G",
            ..Default::default()
        };
        let built = Chord::from_parts(&parts, 4).unwrap();
        let parsed = Chord::create("Am7/G", 4).unwrap();
        assert_eq!(built, parsed);
        assert_eq!(built.name(), "Am7/G");
    }

    #[test]
    fn test_from_parts_round_trips_through_name() {
        let cases = [
            ChordParts {
                key: "C",
                add: "7",
                adjust: "b5",
                ..Default::default()
            },
            ChordParts {
                key: "F#",
                kind: "m",
                adjust: "add9",
                bass: "/A",
                ..Default::default()
            },
            ChordParts {
                key: "Bb",
                kind: "dim",
                add: "7",
                bass: "/b3",
                adjust2: "no5",
                ..Default::default()
            },
            ChordParts {
                key: "E",
                adjust: "sus4",
                adjust2: "add13",
                ..Default::default()
            },
        ];
        for parts in &cases {
            for octave in [-1, 2, 4, 9] {
                let chord = Chord::from_parts(parts, octave).unwrap();
                let again = Chord::create(chord.name(), octave).unwrap();
                assert_eq!(chord.notes(), again.notes(), "{}", chord.name());
            }
        }
    }

    #[test]
    fn test_from_parts_rejects_ambiguous_flat() {
        let parts = ChordParts {
            key: "C",
            adjust: "b5",
            ..Default::default()
        };
        assert_eq!(
            Chord::from_parts(&parts, 4),
            Err(TheoryError::InvalidChordSymbol {
                symbol: "Cb5".to_string()
            })
        );

        // the same text on its own is C flat with an added fifth
        let c_flat = Chord::create("Cb5", 4).unwrap();
        assert_eq!(c_flat.notes()[0].value(), 71);
    }

    #[test]
    fn test_huge_degrees_and_octaves_are_errors() {
        assert_eq!(
            Chord::create("C1300000000", 4),
            Err(TheoryError::InvalidChordSymbol {
                symbol: "C1300000000".to_string()
            })
        );
        assert_eq!(
            Chord::create("C7", 200_000_000),
            Err(TheoryError::InvalidOctave(200_000_000))
        );
        assert_eq!(
            Chord::create("G/B", i32::MIN),
            Err(TheoryError::InvalidOctave(i32::MIN))
        );

        // the largest accepted degree and octaves still build
        assert_eq!(Chord::create("C99", 4).unwrap().len(), 4);
        assert_eq!(Chord::create("Cmaj7", 100).unwrap().notes()[0].octave(), 100);
        assert_eq!(Chord::create("G/B", -100).unwrap().notes()[0].octave(), -100);
    }

    #[test]
    fn test_every_key_resolves_to_its_root() {
        for name in Pitch::note_names() {
            let symbol = ChordSymbol::parse(name).unwrap();
            let chord = Chord::from_symbol(symbol, 4).unwrap();
            assert_eq!(chord.len(), 3, "{name}");
            assert!(chord.notes()[0].note_kind_equals(&Pitch::new(name, 4).unwrap()));
        }
    }

    #[test]
    fn test_bass_is_lowest() {
        for symbol in ["C/E", "C/G", "Dm7/C", "G7/F", "Am/3", "F/b7", "E/C"] {
            let chord = Chord::create(symbol, 4).unwrap();
            let bass = match chord.symbol().bass() {
                Some(BassTarget::Note(name)) => Pitch::new(name, 4).unwrap(),
                Some(BassTarget::Degree { .. }) => chord.notes()[0],
                None => unreachable!(),
            };
            assert!(chord.notes()[0].note_kind_equals(&bass), "{symbol}");
        }
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            Chord::create("Cmaj7x", 4),
            Err(TheoryError::InvalidChordSymbol {
                symbol: "Cmaj7x".to_string()
            })
        );
    }
}
