//! Harmony map for minor keys.

use super::family::Rule::{Both, Edge, Fan};
use super::family::{Family, Rule};
use super::position::Position;
use super::weight::Weight::{Common, Primary, Rare, Resolve, Sparse, Uncommon};

static POSITIONS: [Position; 28] = [
    Position::new("iidim", 2, "dim", &[]),
    Position::new("viidim/2", 7, "dim/2", &[]),
    Position::new("V", 5, "", &["7", "Mb9no7", "Mb13no7", "sus4"]),
    Position::new("bIIIaug", 3, "aug", &[]).chromatic(-1),
    Position::new("im/b3", 1, "m/b3", &[]),
    Position::new("bVI", 6, "", &["6", "M7"]).chromatic(-1),
    Position::new("ivm/b6", 4, "m/b6", &["m6/b6", "m7/b6"]),
    Position::new("ivm", 4, "m", &["m6", "m7", "m9"]),
    Position::new("bII/4", 2, "/4", &[]).chromatic(-1),
    Position::new("im/5", 1, "m/5", &[]),
    Position::new("im", 1, "m", &["2", "sus4"]),
    Position::new("ivm/1", 4, "m/1", &[]),
    Position::new("V/1", 5, "/1", &[]),
    Position::new("iidim7", 2, "dim7", &[]),
    Position::new("V*", 5, "", &["7", "Mb9no7"]),
    Position::new("Vdim7", 5, "dim7", &["7", "m7b5"]),
    Position::new("iiidim7", 3, "dim7", &[]),
    Position::new("I", 1, "", &["7", "Mb9no7"]),
    Position::new("#ivdim7", 4, "dim7", &[]).chromatic(1),
    Position::new("vim7b5", 6, "m7b5", &[]),
    Position::new("II", 2, "", &["7", "Mb9no7"]),
    Position::new("bVI*", 6, "", &[]).chromatic(-1),
    Position::new("bVII", 7, "", &["9"]).chromatic(-1),
    Position::new("ivm7", 4, "m7", &[]),
    Position::new("Vm7b5", 5, "m7b5", &["dim7"]),
    Position::new("bIII", 3, "", &["7", "9", "Mb9no7"]).chromatic(-1),
    Position::new("bviim7b5", 7, "m7b5", &[]).chromatic(-1),
    Position::new("bVI7", 6, "7", &[]).chromatic(-1),
];

const DIATONIC: &[&str] = &[
    "iidim", "bIIIaug", "ivm", "V", "bVI", "im/5", "im/b3", "ivm/1", "V/1",
];

// `#ivdim7` is listed twice; the second sweep over it is a no-op
const CHROMATIC: &[&str] = &[
    "V*", "iidim7", "Vdim7", "I", "iiidim7", "vim7b5", "II", "#ivdim7", "bVI*", "bVII", "ivm7",
    "Vm7b5", "bIII", "bviim7b5", "bVI7", "#ivdim7",
];

static RULES: &[Rule] = &[
    // Predominants into the dominant
    Edge("iidim", "V", Primary),
    Both(&["iidim"], &["bIIIaug", "im/b3"], Primary, Sparse),
    Edge("viidim/2", "V", Primary),
    Both(&["viidim/2"], &["bIIIaug", "im/b3"], Primary, Sparse),
    Both(&["V"], &["bIIIaug", "im/b3", "bVI", "ivm/b6"], Primary, Sparse),
    Edge("bIIIaug", "im", Resolve),
    Both(&["bIIIaug"], &["ivm", "bII/4", "bVI", "ivm/b6"], Primary, Sparse),
    Edge("im/b3", "im", Resolve),
    Both(&["im/b3"], &["ivm", "bII/4", "bVI", "ivm/b6"], Primary, Sparse),
    Both(&["bVI", "ivm/b6"], &["ivm", "bII/4", "iidim", "viidim/2"], Primary, Sparse),
    Edge("ivm", "im", Resolve),
    Both(&["ivm"], &["V"], Primary, Sparse),
    Both(&["ivm"], &["iidim", "viidim/2"], Primary, Sparse),
    Both(&["ivm"], &["im/5"], Common, Sparse),
    Both(&["ivm"], &["im/b3"], Uncommon, Uncommon),
    Edge("bII/4", "im", Resolve),
    Both(&["bII/4"], &["V"], Primary, Sparse),
    Both(&["bII/4"], &["iidim", "viidim/2"], Primary, Sparse),
    Both(&["bII/4"], &["im/5"], Common, Sparse),
    Both(&["bII/4"], &["im/b3"], Uncommon, Uncommon),
    Both(&["im/b3"], &["iidim"], Uncommon, Uncommon),
    Edge("iidim", "ivm7", Resolve),
    Edge("iidim", "im/5", Common),
    Both(&["im/b3"], &["viidim/2"], Uncommon, Uncommon),
    Edge("viidim/2", "ivm7", Resolve),
    Edge("viidim/2", "im/5", Common),
    Edge("im/5", "V", Primary),
    Edge("V", "im", Resolve),
    Edge("ivm/1", "im", Primary),
    Edge("V/1", "im", Primary),
    Edge("im", "ivm/1", Uncommon),
    Edge("im", "V/1", Uncommon),
    // Borrowed and secondary chords
    Edge("V*", "bIIIaug", Primary),
    Edge("iidim7", "bIIIaug", Primary),
    Edge("V*", "im/b3", Primary),
    Edge("iidim7", "im/b3", Primary),
    Edge("Vdim7", "I", Primary),
    Edge("I", "ivm", Primary),
    Edge("iiidim7", "ivm", Primary),
    Edge("I", "bII/4", Primary),
    Edge("iiidim7", "bII/4", Primary),
    Edge("vim7b5", "II", Primary),
    Edge("II", "V", Primary),
    Edge("#ivdim7", "V", Primary),
    Edge("bVI*", "bVII", Primary),
    Edge("bVII", "im", Primary),
    Edge("ivm7", "im", Primary),
    Edge("Vm7b5", "bVI", Primary),
    Edge("bIII", "bVI", Primary),
    Edge("Vm7b5", "ivm/b6", Primary),
    Edge("bIII", "ivm/b6", Primary),
    Edge("bviim7b5", "bIII", Primary),
    Edge("bVI7", "im/5", Primary),
    Edge("#ivdim7", "im/5", Primary),
    Fan(DIATONIC, CHROMATIC, Rare),
    // Leaving the tonic
    Fan(&["im"], &["iidim", "bIIIaug", "ivm", "V", "bVI"], Primary),
    Fan(&["im"], CHROMATIC, Sparse),
    Edge("im", "im/5", Uncommon),
    Edge("im", "im/b3", Uncommon),
];

pub static MINOR: Family = Family {
    name: "minor",
    mode: "Minor",
    resolve: "im",
    positions: &POSITIONS,
    rules: RULES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::weight::Weight;

    fn weight(from: &str, to: &str) -> Option<u32> {
        let graph = MINOR.build_graph().unwrap();
        let from = graph.get(&MINOR.position(from).unwrap()).unwrap();
        let to = graph.get(&MINOR.position(to).unwrap()).unwrap();
        graph.weight(from, to)
    }

    #[test]
    fn test_table_size() {
        assert_eq!(MINOR.positions.len(), 28);
    }

    #[test]
    fn test_dominant_resolves() {
        assert_eq!(weight("V", "im"), Some(Weight::Resolve.value()));
        assert_eq!(weight("im/5", "V"), Some(Weight::Primary.value()));
        assert_eq!(weight("bIIIaug", "V"), Some(Weight::Sparse.value()));
    }

    #[test]
    fn test_reverse_edges() {
        assert_eq!(weight("ivm", "im/b3"), Some(Weight::Uncommon.value()));
        assert_eq!(weight("im/5", "ivm"), Some(Weight::Sparse.value()));
        assert_eq!(weight("ivm", "im/5"), Some(Weight::Common.value()));
    }

    #[test]
    fn test_rare_fan_reaches_borrowed_chords() {
        assert_eq!(weight("V", "#ivdim7"), Some(Weight::Rare.value()));
        assert_eq!(weight("im", "#ivdim7"), Some(Weight::Sparse.value()));
        assert_eq!(weight("im", "bVII"), Some(Weight::Sparse.value()));
    }
}
