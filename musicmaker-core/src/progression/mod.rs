// musicmaker-core/src/progression/mod.rs

mod family;
mod generator;
mod major;
mod minor;
mod output;
mod position;
mod weight;

pub use family::{Family, Rule};
pub use generator::{ProgressionGraph, Sampling, Step, GENERATED_TEMPO};
pub use major::MAJOR;
pub use minor::MINOR;
pub use output::{Progression, ProgressionEntry};
pub use position::Position;
pub use weight::Weight;
