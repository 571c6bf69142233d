//! # Musicmaker Core
//!
//! Symbolic tonal harmony: pitch arithmetic, modes and scales, a chord-symbol
//! grammar with a chord builder, and weighted transition graphs that generate
//! chord progressions by random walk. No I/O and no printing.
//!
//! ## Features
//!
//! - **serde**: Enable serialization of pitches, chords and progressions
//!
//! ## Example
//!
//! ```
//! use musicmaker_core::{Chord, Pitch, ProgressionGraph};
//! use rand::SeedableRng;
//!
//! let chord = Chord::create("Dm7/C", 4)?;
//! assert_eq!(chord.notes()[0].name(), "C");
//!
//! let graph = ProgressionGraph::major(Pitch::new("F", 4)?)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(9);
//! let progression = graph.generate(8, true, true, &mut rng)?;
//! assert_eq!(progression.len(), 8);
//! # Ok::<(), musicmaker_core::TheoryError>(())
//! ```

pub mod cache;
pub mod error;
pub mod graph;
pub mod progression;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TheoryError};
pub use graph::{NodeId, WeightedDigraph};
pub use progression::{
    Family, Position, Progression, ProgressionEntry, ProgressionGraph, Sampling, Step, Weight,
    MAJOR, MINOR,
};
pub use types::{
    Accidental, Beats, Chord, ChordKind, ChordParts, ChordSymbol, Key, KeyMode, Mode, Pitch, Scale,
};
