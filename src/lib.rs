//! # Musicmaker
//!
//! Music-theory toolkit built on `musicmaker-core`: chord symbols resolved to
//! pitches, scales and key signatures, and chord progressions generated by
//! random walks over harmonic transition graphs.
//!
//! ## Modules
//!
//! - `report`: Colored terminal renderings of scales, keys, chords,
//!   transition tables and generated progressions. Each entry point returns
//!   an `anyhow::Result` whose context names the input being rendered.
//!
//! Everything in `musicmaker-core` is re-exported at the crate root.

pub mod report;

// Re-export the core model for convenience
pub use musicmaker_core::*;
