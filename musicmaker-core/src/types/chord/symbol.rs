//! Chord symbol grammar.
//!
//! `key[kind][add][adjust*][/bass][adjust*]`, read left to right. Each part
//! takes the longest text it can (accidentals, add digits) and the kind
//! literals are tried in the order `maj, mM, m, M, dim, aug`. The whole
//! symbol has to be consumed.

use crate::error::{Result, TheoryError};
use crate::types::pitch::Pitch;
use std::fmt;

/// Triad quality plus how the seventh degree is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordKind {
    /// No kind text: major triad, dominant seventh
    MajorMinor,
    /// `maj` or `M`: major triad, major seventh
    Major,
    /// `m`: minor triad, minor seventh
    Minor,
    /// `mM`: minor triad, major seventh
    MinorMajor,
    /// `dim`: diminished triad, diminished seventh
    Diminished,
    /// `aug`: augmented triad, minor seventh
    Augmented,
}

/// Kind literals in matching order
const KIND_LITERALS: [(&str, ChordKind); 6] = [
    ("maj", ChordKind::Major),
    ("mM", ChordKind::MinorMajor),
    ("m", ChordKind::Minor),
    ("M", ChordKind::Major),
    ("dim", ChordKind::Diminished),
    ("aug", ChordKind::Augmented),
];

impl ChordKind {
    /// Semitones from root to third
    pub fn third(self) -> i32 {
        match self {
            ChordKind::Minor | ChordKind::MinorMajor | ChordKind::Diminished => 3,
            _ => 4,
        }
    }

    /// Semitones from root to fifth
    pub fn fifth(self) -> i32 {
        match self {
            ChordKind::Diminished => 6,
            ChordKind::Augmented => 8,
            _ => 7,
        }
    }

    /// Semitones a seventh is lowered from the major-scale seventh
    pub fn seventh_flats(self) -> i32 {
        match self {
            ChordKind::Major | ChordKind::MinorMajor => 0,
            ChordKind::Diminished => 2,
            _ => 1,
        }
    }
}

/// One token of the alteration list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alteration {
    /// `#5`, `##5`, `b9`, `bb7`: move an implied degree by `shift` semitones
    Alter { degree: i32, shift: i32 },
    /// `add9`, `add#11`: add a degree
    Add { degree: i32, shift: i32 },
    /// `no3`, `nob5`: drop a degree
    Omit { degree: i32, shift: i32 },
    /// `sus2`, `sus4`: replace the third
    Sus(i32),
}

impl fmt::Display for Alteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Alteration::Alter { degree, shift } => write!(f, "{}{}", accidental(shift), degree),
            Alteration::Add { degree, shift } => write!(f, "add{}{}", accidental(shift), degree),
            Alteration::Omit { degree, shift } => write!(f, "no{}{}", accidental(shift), degree),
            Alteration::Sus(degree) => write!(f, "sus{}", degree),
        }
    }
}

fn accidental(shift: i32) -> &'static str {
    match shift {
        2 => "##",
        1 => "#",
        -1 => "b",
        -2 => "bb",
        _ => "",
    }
}

/// Target of a slash bass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BassTarget {
    /// `/Eb`: a named note
    Note(&'static str),
    /// `/3`, `/b7`: a degree above the root
    Degree { degree: i32, shift: i32 },
}

/// Component strings of a chord symbol, joined in field order to form its name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordParts<'a> {
    pub key: &'a str,
    pub kind: &'a str,
    pub add: &'a str,
    pub adjust: &'a str,
    /// Includes the leading `/`
    pub bass: &'a str,
    pub adjust2: &'a str,
}

/// A tokenised chord symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChordSymbol {
    name: String,
    key: &'static str,
    kind: ChordKind,
    add: Option<i32>,
    alterations: Vec<Alteration>,
    bass: Option<BassTarget>,
}

impl ChordSymbol {
    /// Tokenise a full symbol such as `C#m7b5/E`
    pub fn parse(symbol: &str) -> Result<ChordSymbol> {
        let invalid = || TheoryError::InvalidChordSymbol {
            symbol: symbol.to_string(),
        };

        let mut cursor = Cursor::new(symbol);
        let key = cursor.key().ok_or_else(invalid)?;
        let kind = cursor.kind();
        let add = cursor.add().map_err(|_| invalid())?;
        let mut alterations = cursor.alterations().map_err(|_| invalid())?;
        let bass = cursor.bass().map_err(|_| invalid())?;
        alterations.extend(cursor.alterations().map_err(|_| invalid())?);

        if !cursor.is_done() {
            return Err(invalid());
        }

        Ok(ChordSymbol {
            name: symbol.to_string(),
            key,
            kind,
            add,
            alterations,
            bass,
        })
    }

    /// Validate each part against its own piece of the grammar, then check
    /// that the joined name tokenises back into the same parts.
    ///
    /// The name is what gets cached and printed, so parts whose joined text
    /// reads differently are rejected: `key: "C", adjust: "b5"` spells `Cb5`,
    /// which is a C-flat chord with an added fifth.
    pub fn from_parts(parts: &ChordParts<'_>) -> Result<ChordSymbol> {
        let name = format!(
            "{}{}{}{}{}{}",
            parts.key, parts.kind, parts.add, parts.adjust, parts.bass, parts.adjust2
        );
        let invalid = || TheoryError::InvalidChordSymbol {
            symbol: name.clone(),
        };

        let mut cursor = Cursor::new(parts.key);
        let key = cursor.key().filter(|_| cursor.is_done());
        let key = key.ok_or_else(|| TheoryError::InvalidPitchName(parts.key.to_string()))?;

        let kind = if parts.kind.is_empty() {
            ChordKind::MajorMinor
        } else {
            KIND_LITERALS
                .iter()
                .find(|(literal, _)| *literal == parts.kind)
                .map(|(_, kind)| *kind)
                .ok_or_else(invalid)?
        };

        let mut cursor = Cursor::new(parts.add);
        let add = cursor.add().map_err(|_| invalid())?;
        if !cursor.is_done() {
            return Err(invalid());
        }

        let mut alterations = Self::alterations_only(parts.adjust).ok_or_else(invalid)?;

        let bass = if parts.bass.is_empty() {
            None
        } else {
            let mut cursor = Cursor::new(parts.bass);
            match cursor.bass() {
                Ok(Some(bass)) if cursor.is_done() => Some(bass),
                _ => return Err(TheoryError::InvalidBassSpec(parts.bass.to_string())),
            }
        };

        alterations.extend(Self::alterations_only(parts.adjust2).ok_or_else(invalid)?);

        let symbol = ChordSymbol {
            name: name.clone(),
            key,
            kind,
            add,
            alterations,
            bass,
        };
        match ChordSymbol::parse(&symbol.name) {
            Ok(parsed) if parsed == symbol => Ok(symbol),
            _ => Err(invalid()),
        }
    }

    fn alterations_only(text: &str) -> Option<Vec<Alteration>> {
        let mut cursor = Cursor::new(text);
        let alterations = cursor.alterations().ok()?;
        cursor.is_done().then_some(alterations)
    }

    /// The symbol text as written
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root spelling
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn kind(&self) -> ChordKind {
        self.kind
    }

    /// Bare degree written straight after the kind, e.g. the 7 in `Cm7`
    pub fn add(&self) -> Option<i32> {
        self.add
    }

    /// Alterations from both sides of the bass, in written order
    pub fn alterations(&self) -> &[Alteration] {
        &self.alterations
    }

    pub fn bass(&self) -> Option<BassTarget> {
        self.bass
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Largest degree accepted after a kind, accidental, `add`, `no` or `/`
const MAX_DEGREE: i32 = 99;

/// Degree digits past [`MAX_DEGREE`]
#[derive(Debug)]
struct Overflow;

fn degree(digits: &str) -> std::result::Result<i32, Overflow> {
    match digits.parse() {
        Ok(degree) if degree <= MAX_DEGREE => Ok(degree),
        _ => Err(Overflow),
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn is_done(&self) -> bool {
        self.pos == self.text.len()
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// `##?|bb?`, longest first; 0 when there is none
    fn accidental(&mut self) -> i32 {
        for (literal, shift) in [("##", 2), ("#", 1), ("bb", -2), ("b", -1)] {
            if self.eat(literal) {
                return shift;
            }
        }
        0
    }

    /// `[0-9]*`
    fn digits(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// `[A-G](##?|bb?)?`
    fn note_name(&mut self) -> Option<&'static str> {
        let start = self.pos;
        if !matches!(self.peek(), Some(b'A'..=b'G')) {
            return None;
        }
        self.pos += 1;
        self.accidental();
        let spelled = &self.text[start..self.pos];
        match Pitch::note_names().find(|name| *name == spelled) {
            Some(name) => Some(name),
            None => {
                self.pos = start;
                None
            }
        }
    }

    fn key(&mut self) -> Option<&'static str> {
        self.note_name()
    }

    fn kind(&mut self) -> ChordKind {
        for (literal, kind) in KIND_LITERALS {
            if self.eat(literal) {
                return kind;
            }
        }
        ChordKind::MajorMinor
    }

    fn add(&mut self) -> std::result::Result<Option<i32>, Overflow> {
        let digits = self.digits();
        if digits.is_empty() {
            return Ok(None);
        }
        degree(digits).map(Some)
    }

    /// Zero or more alteration tokens; stops at the first text that is not one
    fn alterations(&mut self) -> std::result::Result<Vec<Alteration>, Overflow> {
        let mut alterations = Vec::new();
        while let Some(alteration) = self.alteration()? {
            alterations.push(alteration);
        }
        Ok(alterations)
    }

    fn alteration(&mut self) -> std::result::Result<Option<Alteration>, Overflow> {
        let start = self.pos;

        if self.eat("sus2") {
            return Ok(Some(Alteration::Sus(2)));
        }
        if self.eat("sus4") {
            return Ok(Some(Alteration::Sus(4)));
        }

        let make: fn(i32, i32) -> Alteration = if self.eat("add") {
            |degree, shift| Alteration::Add { degree, shift }
        } else if self.eat("no") {
            |degree, shift| Alteration::Omit { degree, shift }
        } else {
            |degree, shift| Alteration::Alter { degree, shift }
        };
        let explicit = self.pos != start;

        let shift = self.accidental();
        let digits = self.digits();
        if digits.is_empty() || (!explicit && shift == 0) {
            self.pos = start;
            return Ok(None);
        }
        let degree = degree(digits)?;
        Ok(Some(make(degree, shift)))
    }

    /// `/` then a note name or an optionally altered degree
    fn bass(&mut self) -> std::result::Result<Option<BassTarget>, Overflow> {
        let start = self.pos;
        if !self.eat("/") {
            return Ok(None);
        }
        if let Some(name) = self.note_name() {
            return Ok(Some(BassTarget::Note(name)));
        }
        let shift = self.accidental();
        let digits = self.digits();
        if digits.is_empty() {
            self.pos = start;
            return Ok(None);
        }
        let degree = degree(digits)?;
        Ok(Some(BassTarget::Degree { degree, shift }))
    }
}
