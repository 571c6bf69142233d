//! Generated progressions as timed chord entries for playback and notation.

use crate::types::chord::Chord;
use crate::types::pitch::Pitch;
use crate::types::time::{to_f64, to_seconds, Beats};
use num_traits::Zero;

/// One chord in a progression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProgressionEntry {
    /// Sounding pitches, lowest first
    pub notes: Vec<Pitch>,
    /// Length in beats (exact rational)
    pub duration: Beats,
    /// Chord symbol shown to the player
    pub label: String,
}

impl ProgressionEntry {
    #[inline]
    pub fn duration_f64(&self) -> f64 {
        to_f64(self.duration)
    }
}

/// Ordered chord entries with a running beat count
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Progression {
    entries: Vec<ProgressionEntry>,
    beats: Beats,
    looped: bool,
    tempo: u32,
    meter: (u32, u32),
}

impl Progression {
    pub fn new(looped: bool, tempo: u32) -> Self {
        Progression {
            entries: Vec::new(),
            beats: Beats::zero(),
            looped,
            tempo,
            meter: (4, 4),
        }
    }

    pub fn add(&mut self, notes: Vec<Pitch>, duration: Beats, label: impl Into<String>) {
        self.beats += duration;
        self.entries.push(ProgressionEntry {
            notes,
            duration,
            label: label.into(),
        });
    }

    pub fn add_chord(&mut self, chord: &Chord, duration: Beats) {
        self.add(chord.notes().to_vec(), duration, chord.name());
    }

    pub fn entries(&self) -> &[ProgressionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total length in beats
    pub fn beats(&self) -> Beats {
        self.beats
    }

    /// Whether playback should wrap to the first entry
    pub fn looped(&self) -> bool {
        self.looped
    }

    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    pub fn set_tempo(&mut self, tempo: u32) {
        self.tempo = tempo;
    }

    /// Time signature as (beats per bar, beat unit)
    pub fn meter(&self) -> (u32, u32) {
        self.meter
    }

    /// Start beat of each entry
    pub fn timeline(&self) -> Vec<(Beats, &ProgressionEntry)> {
        let mut start = Beats::zero();
        self.entries
            .iter()
            .map(|entry| {
                let at = start;
                start += entry.duration;
                (at, entry)
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn duration_seconds(&self) -> f64 {
        to_seconds(self.beats, self.tempo)
    }
}

impl Default for Progression {
    fn default() -> Self {
        Progression::new(false, 120)
    }
}
