//! Error taxonomy for the theory model.
//!
//! Every failure is a validation failure raised while constructing a value;
//! nothing is retried and nothing is half-built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The note spelling is not in the recognised name table.
    #[error("invalid pitch name: {0}")]
    InvalidPitchName(String),

    /// No mode with this name exists in the catalogue.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A hand-built mode whose interval pattern cannot be used for degree lookups.
    #[error("invalid mode {name}: {reason}")]
    InvalidMode { name: String, reason: String },

    /// The symbol does not match the chord grammar.
    #[error("invalid chord symbol: {symbol}")]
    InvalidChordSymbol { symbol: String },

    /// The octave is too far from middle C to hold a pitch.
    #[error("octave out of range: {0}")]
    InvalidOctave(i32),

    /// The text after `/` is neither a note name nor a scale degree.
    #[error("invalid bass spec: {0}")]
    InvalidBassSpec(String),

    /// No position with this name exists in the progression family.
    #[error("unknown position: {0}")]
    UnknownPosition(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
