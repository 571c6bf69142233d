use crate::cache::Memo;
use crate::error::{Result, TheoryError};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Reference frequency of A4 in Hz
pub const A4_TUNING: f64 = 440.0;

/// Octave used when a name is given without one
pub const DEFAULT_OCTAVE: i32 = 4;

/// Octaves accepted when a pitch or chord is placed by name
pub const OCTAVE_RANGE: RangeInclusive<i32> = -100..=100;

/// Semitone index of A4, the tuning reference
const A4_INDEX: i32 = 69;

/// Every recognised spelling with its pitch class (0 = C).
/// Rows group the enharmonic spellings of one pitch class.
const NOTE_TABLE: [(&str, i32); 35] = [
    ("C", 0), ("B#", 0), ("Dbb", 0),
    ("Db", 1), ("C#", 1), ("B##", 1),
    ("D", 2), ("Ebb", 2), ("C##", 2),
    ("Eb", 3), ("D#", 3), ("Fbb", 3),
    ("E", 4), ("Fb", 4), ("D##", 4),
    ("F", 5), ("E#", 5), ("Gbb", 5),
    ("Gb", 6), ("F#", 6), ("E##", 6),
    ("G", 7), ("Abb", 7), ("F##", 7),
    ("Ab", 8), ("G#", 8),
    ("A", 9), ("Bbb", 9), ("G##", 9),
    ("Bb", 10), ("A#", 10), ("Cbb", 10),
    ("B", 11), ("Cb", 11), ("A##", 11),
];

/// Flat-preferring canonical spelling per pitch class
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Sharp-preferring canonical spelling per pitch class
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum PitchKey {
    Named(&'static str, i32, u64),
    Midi(i32, u64),
}

static PITCHES: Memo<PitchKey, Pitch> = Memo::new(256);
static FREQUENCIES: Memo<(i32, u64), f64> = Memo::new(128);

/// An absolute pitch: semitone index plus the spelling it was written with.
///
/// Index 12 is C0, so `octave = floor(index / 12) - 1` and A4 is 69.
/// Two pitches are equal when their indices are equal, whatever the spelling.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pitch {
    value: i32,
    name: &'static str,
    tuning: f64,
}

impl Pitch {
    /// Create a pitch from a note name, octave and A4 tuning frequency
    pub fn create(name: &str, octave: i32, tuning: f64) -> Result<Pitch> {
        let (name, pitch_class) = lookup(name)?;
        if !OCTAVE_RANGE.contains(&octave) {
            return Err(TheoryError::InvalidOctave(octave));
        }
        Ok(Self::spelled(name, pitch_class, octave, tuning))
    }

    /// Create a pitch from a note name and octave at A4 = 440 Hz
    pub fn new(name: &str, octave: i32) -> Result<Pitch> {
        Self::create(name, octave, A4_TUNING)
    }

    /// Create a pitch from its absolute semitone index, spelled flat-first
    pub fn from_midi(tuning: f64, index: i32) -> Pitch {
        PITCHES.get_or_insert_with(PitchKey::Midi(index, tuning.to_bits()), || Pitch {
            value: index,
            name: FLAT_NAMES[index.rem_euclid(12) as usize],
            tuning,
        })
    }

    /// Create a pitch from its absolute semitone index at A4 = 440 Hz
    pub fn midi(index: i32) -> Pitch {
        Self::from_midi(A4_TUNING, index)
    }

    fn spelled(name: &'static str, pitch_class: i32, octave: i32, tuning: f64) -> Pitch {
        PITCHES.get_or_insert_with(PitchKey::Named(name, octave, tuning.to_bits()), || Pitch {
            value: pitch_class + 12 * (octave + 1),
            name,
            tuning,
        })
    }

    /// Check whether a spelling is in the note table
    pub fn is_valid_name(name: &str) -> bool {
        lookup(name).is_ok()
    }

    /// All recognised spellings, enharmonic groups in ascending pitch-class order
    pub fn note_names() -> impl Iterator<Item = &'static str> {
        NOTE_TABLE.iter().map(|(name, _)| *name)
    }

    /// Absolute semitone index
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Spelling without octave, e.g. "Eb"
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn octave(&self) -> i32 {
        self.value.div_euclid(12) - 1
    }

    pub fn tuning(&self) -> f64 {
        self.tuning
    }

    /// Pitch class 0-11, C = 0
    pub fn pitch_class(&self) -> u8 {
        self.value.rem_euclid(12) as u8
    }

    /// Move by a number of semitones; the result is spelled flat-first
    pub fn transpose(&self, steps: i32) -> Pitch {
        Self::from_midi(self.tuning, self.value + steps)
    }

    pub fn flat(&self) -> Pitch {
        self.transpose(-1)
    }

    pub fn sharp(&self) -> Pitch {
        self.transpose(1)
    }

    /// Re-spell with the flat-preferring name for this pitch class
    pub fn normal(&self) -> Pitch {
        let pc = self.pitch_class() as usize;
        Self::spelled(FLAT_NAMES[pc], pc as i32, self.octave(), self.tuning)
    }

    /// Re-spell with the sharp-preferring name for this pitch class
    pub fn sharp_normal(&self) -> Pitch {
        let pc = self.pitch_class() as usize;
        Self::spelled(SHARP_NAMES[pc], pc as i32, self.octave(), self.tuning)
    }

    pub fn raise_octave(&self, octaves: i32) -> Pitch {
        self.transpose(12 * octaves)
    }

    /// Same pitch class placed in another octave
    pub fn set_octave(&self, octave: i32) -> Pitch {
        let pc = self.pitch_class() as usize;
        Self::spelled(FLAT_NAMES[pc], pc as i32, octave, self.tuning)
    }

    /// Equal-temperament frequency in Hz
    pub fn freq(&self) -> f64 {
        let (value, tuning) = (self.value, self.tuning);
        FREQUENCIES.get_or_insert_with((value, tuning.to_bits()), || {
            tuning * 2f64.powf((value - A4_INDEX) as f64 / 12.0)
        })
    }

    /// Same pitch class, ignoring octave
    pub fn note_kind_equals(&self, other: &Pitch) -> bool {
        self.pitch_class() == other.pitch_class()
    }
}

fn lookup(name: &str) -> Result<(&'static str, i32)> {
    NOTE_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .copied()
        .ok_or_else(|| TheoryError::InvalidPitchName(name.to_string()))
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Pitch {}

impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Pitch::from_midi(A4_TUNING, 60)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    /// Parse "Eb4", "C##-1" or a bare "F#" (octave 4)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let name_end = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c != '#' && c != 'b')
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (name, octave_part) = s.split_at(name_end);

        let octave = if octave_part.is_empty() {
            DEFAULT_OCTAVE
        } else {
            octave_part
                .parse::<i32>()
                .map_err(|_| TheoryError::InvalidPitchName(s.to_string()))?
        };

        Pitch::new(name, octave)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave())
    }
}
