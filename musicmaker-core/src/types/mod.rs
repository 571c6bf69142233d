// musicmaker-core/src/types/mod.rs

pub mod chord;
pub mod key;
pub mod mode;
pub mod pitch;
pub mod scale;
pub mod time;

pub use chord::{Alteration, BassTarget, Chord, ChordKind, ChordParts, ChordSymbol};
pub use key::{Accidental, Key, KeyMode};
pub use mode::Mode;
pub use pitch::{Pitch, A4_TUNING};
pub use scale::Scale;
pub use time::{beat_fraction, beats, Beats};
