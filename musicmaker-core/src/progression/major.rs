//! Harmony map for major keys.
//!
//! The first block holds the diatonic core, the second the borrowed and
//! secondary chords that feed back into it.

use super::family::Rule::{Edge, Fan};
use super::family::{Family, Rule};
use super::position::Position;
use super::weight::Weight::{Common, Primary, Rare, Resolve, Sparse, Uncommon};

// `Mb9no7` spells a flat nine; `b9` after a natural root would read as a flat key
static POSITIONS: [Position; 32] = [
    Position::new("iim", 2, "m", &["m7", "m9"]),
    Position::new("V", 5, "", &["7", "9", "11", "13", "sus4"]),
    Position::new("iiim", 3, "m", &["m7"]),
    Position::new("vim", 6, "m", &["m7", "m9"]),
    Position::new("IV", 4, "", &["6", "M7", "m", "m6"]),
    Position::new("I/3", 1, "/3", &[]),
    Position::new("I/5", 1, "/5", &[]),
    Position::new("I", 1, "", &["2", "6", "M7", "M9", "sus4"]),
    Position::new("IV/1", 4, "/1", &[]),
    Position::new("V/1", 5, "/1", &[]),
    Position::new("IIIm7b5", 3, "m7b5", &[]),
    Position::new("VI", 6, "", &["7", "9", "Mb9no7"]),
    Position::new("#Idim7", 1, "dim7", &[]).chromatic(1),
    Position::new("#IVm7b5", 4, "m7b5", &[]).chromatic(1),
    Position::new("VII", 7, "", &["7", "9", "Mb9no7"]),
    Position::new("#IIdim7", 2, "dim7", &[]).chromatic(1),
    Position::new("Vm", 5, "m", &["7"]),
    Position::new("I*", 1, "7", &["7", "9", "Mb9no7"]),
    Position::new("Im6", 1, "m6", &[]),
    Position::new("V/2", 5, "/2", &[]),
    Position::new("II", 2, "", &["7", "9", "Mb9no7"]),
    Position::new("bVI", 6, "", &[]).chromatic(-1),
    Position::new("bVII", 7, "", &["9"]).chromatic(-1),
    Position::new("IVm7", 4, "m7", &[]),
    Position::new("bII7", 2, "7", &[]).chromatic(-1),
    Position::new("VIm7b5/b3", 6, "m7b5/b3", &[]),
    Position::new("#Vdim7", 5, "dim7", &[]).chromatic(1),
    Position::new("VIIm7b5", 7, "m7b5", &[]),
    Position::new("III", 3, "", &["7", "9", "Mb9no7"]),
    Position::new("Idim/b3", 1, "dim/b3", &[]),
    Position::new("bVI7", 6, "7", &[]).chromatic(-1),
    Position::new("bVII9", 7, "9", &[]).chromatic(-1),
];

const DIATONIC: &[&str] = &["iim", "iiim", "IV", "V", "vim", "I/5", "I/3", "IV/1", "V/1"];

const CHROMATIC: &[&str] = &[
    "IIIm7b5", "VI", "#Idim7", "#IVm7b5", "VII", "#IIdim7", "Vm", "I*", "Im6", "V/2", "II",
    "bVI", "bVII", "IVm7", "bII7", "VIm7b5/b3", "#Vdim7", "III", "VIIm7b5", "Idim/b3", "bVI7",
    "bVII9",
];

static RULES: &[Rule] = &[
    Edge("iim", "V", Primary),
    Edge("iim", "iiim", Primary),
    Edge("iiim", "iim", Sparse),
    Edge("V", "iiim", Primary),
    Edge("iiim", "V", Sparse),
    Edge("V", "vim", Primary),
    Edge("vim", "V", Sparse),
    Edge("iiim", "I", Resolve),
    Edge("iiim", "IV", Primary),
    Edge("IV", "iiim", Sparse),
    Edge("iiim", "vim", Primary),
    Edge("vim", "iiim", Sparse),
    Edge("vim", "IV", Primary),
    Edge("IV", "vim", Sparse),
    Edge("vim", "iim", Primary),
    Edge("iim", "vim", Sparse),
    Edge("IV", "I", Resolve),
    Edge("IV", "V", Primary),
    Edge("V", "IV", Sparse),
    Edge("IV", "iim", Primary),
    Edge("iim", "IV", Sparse),
    Edge("IV", "I/5", Common),
    Edge("I/5", "IV", Sparse),
    Edge("IV", "I/3", Uncommon),
    Edge("I/3", "IV", Uncommon),
    Edge("I/3", "iim", Uncommon),
    Edge("iim", "I/3", Uncommon),
    Edge("iim", "IVm7", Resolve),
    Edge("iim", "I/5", Common),
    Edge("I/5", "V", Primary),
    Edge("V", "I", Resolve),
    Edge("IV/1", "I", Primary),
    Edge("V/1", "I", Primary),
    Edge("I", "IV/1", Uncommon),
    Edge("I", "V/1", Uncommon),
    // Borrowed and secondary chords
    Edge("IIIm7b5", "VI", Primary),
    Edge("VI", "iim", Primary),
    Edge("#Idim7", "iim", Primary),
    Edge("#IVm7b5", "VII", Primary),
    Edge("VII", "iiim", Primary),
    Edge("#IIdim7", "iiim", Primary),
    Edge("Vm", "I*", Primary),
    Edge("I*", "IV", Primary),
    Edge("IIIm7b5", "IV", Primary),
    Edge("Im6", "V/2", Primary),
    Edge("Im6", "II", Primary),
    Edge("V/2", "II", Primary),
    Edge("II", "V", Primary),
    Edge("#IVm7b5", "V", Primary),
    Edge("bVI", "bVII", Primary),
    Edge("bVII", "I", Primary),
    Edge("IVm7", "I", Primary),
    Edge("bII7", "I", Primary),
    Edge("VIm7b5/b3", "II", Primary),
    Edge("#Vdim7", "vim", Primary),
    Edge("III", "vim", Primary),
    Edge("VIIm7b5", "III", Primary),
    Edge("Idim/b3", "iim", Primary),
    Edge("bVI7", "I/5", Primary),
    Edge("bVII9", "I/5", Primary),
    Edge("#IVm7b5", "I/5", Primary),
    Fan(DIATONIC, CHROMATIC, Rare),
    // Leaving the tonic
    Fan(&["I"], &["iim", "iiim", "IV", "V", "vim"], Primary),
    Fan(&["I"], CHROMATIC, Sparse),
    Edge("I", "I/5", Uncommon),
    Edge("I", "I/3", Uncommon),
];

pub static MAJOR: Family = Family {
    name: "major",
    mode: "Major",
    resolve: "I",
    positions: &POSITIONS,
    rules: RULES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::weight::Weight;

    fn weight(from: &str, to: &str) -> Option<u32> {
        let graph = MAJOR.build_graph().unwrap();
        let from = graph.get(&MAJOR.position(from).unwrap()).unwrap();
        let to = graph.get(&MAJOR.position(to).unwrap()).unwrap();
        graph.weight(from, to)
    }

    #[test]
    fn test_table_size() {
        assert_eq!(MAJOR.positions.len(), 32);
    }

    #[test]
    fn test_cadences() {
        assert_eq!(weight("V", "I"), Some(Weight::Resolve.value()));
        assert_eq!(weight("IV", "I"), Some(Weight::Resolve.value()));
        assert_eq!(weight("I", "V"), Some(Weight::Primary.value()));
        assert_eq!(weight("V", "IV"), Some(Weight::Sparse.value()));
    }

    #[test]
    fn test_chromatic_fan_overrides_earlier_edges() {
        // set as a resolution first, then swept into the rare fan
        assert_eq!(weight("iim", "IVm7"), Some(Weight::Rare.value()));
        assert_eq!(weight("I", "bVII9"), Some(Weight::Sparse.value()));
    }

    #[test]
    fn test_secondary_targets() {
        assert_eq!(weight("VI", "iim"), Some(Weight::Primary.value()));
        assert_eq!(weight("bVII", "I"), Some(Weight::Primary.value()));
        assert_eq!(weight("VI", "V"), None);
    }
}
