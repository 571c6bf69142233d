//! Turns a [`ChordSymbol`] into sorted pitches.
//!
//! The triad and bare addition come first. The alteration passes then run
//! in a fixed order over every alteration in the symbol: omissions,
//! suspensions, sharps, flats, additions. Finally the bass is placed lowest
//! and the chord is shifted so the bass sits in the requested octave.

use super::symbol::{Alteration, BassTarget, ChordSymbol};
use crate::types::mode::Mode;
use crate::types::pitch::Pitch;

/// Pitch list where adding an existing pitch moves it to the end
#[derive(Debug, Default)]
struct Voicing {
    notes: Vec<Pitch>,
}

impl Voicing {
    fn add(&mut self, pitch: Pitch) {
        self.remove(pitch);
        self.notes.push(pitch);
    }

    fn remove(&mut self, pitch: Pitch) {
        if let Some(i) = self.notes.iter().position(|&p| p == pitch) {
            self.notes.remove(i);
        }
    }

    fn contains(&self, pitch: Pitch) -> bool {
        self.notes.contains(&pitch)
    }

    /// Move notes below the bass up until the bass is lowest, then shift
    /// everything so the bass lands in `octave`.
    fn order(&mut self, bass: Pitch, octave: i32) {
        self.notes.sort();
        let Some(&lowest) = self.notes.first() else {
            return;
        };

        let mut octave_diff = bass.octave() - lowest.octave();
        if bass.pitch_class() > lowest.pitch_class() {
            octave_diff += 1;
        }

        while let Some(&next) = self.notes.first() {
            if next == bass {
                break;
            }
            self.remove(next);
            let raised = next.raise_octave(octave_diff);
            if raised == bass {
                self.add(raised.raise_octave(1));
            } else {
                self.add(raised);
            }
        }

        let shift = octave - bass.octave();
        for note in &mut self.notes {
            *note = note.raise_octave(shift);
        }
    }

    fn finish(mut self) -> Vec<Pitch> {
        self.notes.sort();
        self.notes.dedup();
        self.notes
    }
}

/// `root` is the symbol's key, already spelled flat-first in the default octave
pub(super) fn build(symbol: &ChordSymbol, root: Pitch, octave: i32) -> Vec<Pitch> {
    let major = Mode::major();
    let step = |degree: i32| major.find_step(degree);

    let kind = symbol.kind();

    let mut chord = Voicing::default();
    chord.add(root);
    chord.add(root.transpose(kind.third()));
    chord.add(root.transpose(kind.fifth()));

    if let Some(degree) = symbol.add() {
        let flats = if degree == 7 { kind.seventh_flats() } else { 0 };
        chord.add(root.transpose(step(degree) - flats));
    }

    let alterations = symbol.alterations();

    for alteration in alterations {
        if let Alteration::Omit { degree, shift } = *alteration {
            chord.remove(root.transpose(step(degree) + shift));
        }
    }

    for alteration in alterations {
        if let Alteration::Sus(degree) = *alteration {
            chord.remove(root.transpose(kind.third()));
            chord.add(root.transpose(step(degree)));
        }
    }

    let mut adjusted_root = root;
    let raised = alterations.iter().filter_map(|a| match *a {
        Alteration::Alter { degree, shift } if shift > 0 => Some((degree, shift)),
        _ => None,
    });
    let lowered = alterations.iter().filter_map(|a| match *a {
        Alteration::Alter { degree, shift } if shift < 0 => Some((degree, shift)),
        _ => None,
    });
    for (degree, shift) in raised.chain(lowered) {
        let target = root.transpose(step(degree));
        chord.remove(target);
        let altered = target.transpose(shift);
        if target == root {
            adjusted_root = altered;
        }
        chord.add(altered);
    }

    let bass = match symbol.bass() {
        None => adjusted_root,
        Some(BassTarget::Degree { degree, shift }) => {
            let bass = adjusted_root.transpose(step(degree) + shift);
            chord.add(bass);
            bass
        }
        Some(BassTarget::Note(name)) => {
            let octave = adjusted_root.octave();
            let bass = match Pitch::new(name, octave) {
                Ok(pitch) if pitch < adjusted_root => pitch.set_octave(octave + 1),
                Ok(pitch) => pitch.set_octave(octave),
                Err(_) => adjusted_root,
            };
            chord.add(bass);
            bass
        }
    };

    for alteration in alterations {
        if let Alteration::Add { degree, shift } = *alteration {
            chord.add(root.transpose(step(degree) + shift));
        }
    }

    if chord.contains(bass) {
        chord.order(bass, octave);
    } else {
        // rootless chord: voice around the missing bass, then drop it
        chord.add(bass);
        chord.order(bass, octave);
        chord.remove(bass.raise_octave(octave - bass.octave()));
    }

    chord.finish()
}
