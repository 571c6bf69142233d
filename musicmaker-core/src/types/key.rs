//! Keys and key signatures.
//!
//! A key is a root plus one of the seven diatonic modes (with major and
//! minor as aliases). Its signature is found by moving to the Ionian key
//! that shares the same notes and reading that key's sharp or flat count.

use crate::error::{Result, TheoryError};
use crate::types::mode::Mode;
use crate::types::pitch::Pitch;
use crate::types::scale::Scale;
use std::collections::BTreeMap;
use std::fmt;

const SHARP_ORDER: &str = "FCGDAEB";
const FLAT_ORDER: &str = "BEADGCF";

/// Sharps (positive) or flats (negative) of each Ionian key
const IONIAN_SIGNATURES: [(&str, i32); 15] = [
    ("C#", 7), ("F#", 6), ("B", 5), ("E", 4), ("A", 3), ("D", 2), ("G", 1), ("C", 0),
    ("F", -1), ("Bb", -2), ("Eb", -3), ("Ab", -4), ("Db", -5), ("Gb", -6), ("Cb", -7),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyMode {
    Major,
    Minor,
    Ionian,
    Aeolian,
    Mixolydian,
    Dorian,
    Phrygian,
    Lydian,
    Locrian,
}

impl KeyMode {
    /// Semitones from this mode's root to its relative Ionian root
    pub fn ionian_offset(self) -> i32 {
        match self {
            KeyMode::Major | KeyMode::Ionian => 0,
            KeyMode::Minor | KeyMode::Aeolian => 3,
            KeyMode::Mixolydian => -7,
            KeyMode::Dorian => -2,
            KeyMode::Phrygian => -4,
            KeyMode::Lydian => -5,
            KeyMode::Locrian => 1,
        }
    }

    /// Catalogue mode name
    pub fn name(self) -> &'static str {
        match self {
            KeyMode::Major => "Major",
            KeyMode::Minor => "Minor",
            KeyMode::Ionian => "Ionian",
            KeyMode::Aeolian => "Aeolian",
            KeyMode::Mixolydian => "Mixolydian",
            KeyMode::Dorian => "Dorian",
            KeyMode::Phrygian => "Phrygian",
            KeyMode::Lydian => "Lydian",
            KeyMode::Locrian => "Locrian",
        }
    }

    /// Match a mode word by its first three letters, or "m" for minor
    pub fn from_word(word: &str) -> Option<KeyMode> {
        if word == "m" {
            return Some(KeyMode::Minor);
        }
        let prefix: String = word.chars().take(3).collect::<String>().to_lowercase();
        let mode = match prefix.as_str() {
            "maj" => KeyMode::Major,
            "min" => KeyMode::Minor,
            "ion" => KeyMode::Ionian,
            "aeo" => KeyMode::Aeolian,
            "mix" => KeyMode::Mixolydian,
            "dor" => KeyMode::Dorian,
            "phr" => KeyMode::Phrygian,
            "lyd" => KeyMode::Lydian,
            "loc" => KeyMode::Locrian,
            _ => return None,
        };
        Some(mode)
    }

    pub fn mode(self) -> Mode {
        match Mode::named(self.name()) {
            Ok(mode) => mode,
            // every key mode name is in the catalogue
            Err(_) => Mode::major(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn symbol(self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat => 'b',
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Key {
    scale: Scale,
    mode: KeyMode,
}

impl Key {
    pub fn new(root: Pitch, mode: KeyMode) -> Self {
        Key {
            scale: Scale::new(root, mode.mode()),
            mode,
        }
    }

    /// Parse "F# minor", "Bbdor", "Am" or "D".
    ///
    /// Anything after the mode word is ignored.
    pub fn parse(text: &str) -> Result<Key> {
        let text = text.trim();
        let root_end = match text.as_bytes() {
            [b'A'..=b'G', b'#' | b'b', ..] => 2,
            [b'A'..=b'G', ..] => 1,
            _ => return Err(TheoryError::InvalidPitchName(text.to_string())),
        };
        let root = Pitch::new(&text[..root_end], 4)?;

        let rest = text[root_end..].trim_start();
        let word: String = rest.chars().take_while(|c| c.is_alphanumeric()).collect();
        let mode = if word.is_empty() {
            KeyMode::Major
        } else {
            KeyMode::from_word(&word).ok_or_else(|| TheoryError::UnknownMode(word.clone()))?
        };

        Ok(Key::new(root, mode))
    }

    pub fn root(&self) -> Pitch {
        self.scale.root()
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// The Ionian key with the same notes, spelled with the same accidental bias as the root
    pub fn relative_ionian(&self) -> Key {
        let root = self.root();
        let mut ionian = root.transpose(self.mode.ionian_offset());

        if root.name().contains('#') {
            let respelled = ionian.sharp_normal();
            if respelled.name().len() == 2 {
                ionian = respelled;
            }
        } else if root.name().contains('b') {
            let respelled = ionian.normal();
            if respelled.name().len() == 2 {
                ionian = respelled;
            }
        }

        Key::new(ionian, KeyMode::Ionian)
    }

    /// Number of sharps (positive) or flats (negative) in the signature
    pub fn accidental_count(&self) -> i32 {
        let ionian = self.relative_ionian().root();
        signature_count(ionian.name())
            .or_else(|| signature_count(ionian.normal().name()))
            .unwrap_or(0)
    }

    /// Accidentals of the key signature in the order they are written
    pub fn signature(&self) -> Vec<(char, Accidental)> {
        let count = self.accidental_count();
        if count > 0 {
            SHARP_ORDER
                .chars()
                .take(count as usize)
                .map(|letter| (letter, Accidental::Sharp))
                .collect()
        } else {
            FLAT_ORDER
                .chars()
                .take(count.unsigned_abs() as usize)
                .map(|letter| (letter, Accidental::Flat))
                .collect()
        }
    }

    /// Letter to accidental for every altered letter in the signature
    pub fn accidentals(&self) -> BTreeMap<char, Accidental> {
        self.signature().into_iter().collect()
    }
}

fn signature_count(name: &str) -> Option<i32> {
    IONIAN_SIGNATURES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, count)| *count)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root().name(), self.mode.name())
    }
}
