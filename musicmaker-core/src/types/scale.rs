use crate::error::Result;
use crate::types::mode::Mode;
use crate::types::pitch::Pitch;
use std::fmt;

/// A mode anchored on a root pitch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scale {
    root: Pitch,
    mode: Mode,
}

impl Scale {
    pub fn new(root: Pitch, mode: Mode) -> Self {
        Scale { root, mode }
    }

    /// Build from a root spelling (octave 4) and a catalogue mode name
    pub fn named(root: &str, mode: &str) -> Result<Self> {
        Ok(Scale::new(Pitch::new(root, 4)?, Mode::named(mode)?))
    }

    pub fn root(&self) -> Pitch {
        self.root
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Pitch at a scale degree, see [`Mode::find_step`]
    pub fn get_pitch(&self, degree: i32) -> Pitch {
        self.root.transpose(self.mode.find_step(degree))
    }

    /// The ascending run up to the octave followed by the descending run back to the root
    pub fn pitches(&self) -> Vec<Pitch> {
        self.mode
            .ascending()
            .iter()
            .copied()
            .chain(std::iter::once(12))
            .chain(self.mode.descending().iter().copied())
            .map(|step| self.root.transpose(step))
            .collect()
    }

    /// Degrees per octave
    pub fn len(&self) -> usize {
        self.mode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_empty()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}
