//! Named interval patterns and scale-degree lookups.
//!
//! A mode stores semitone offsets within one octave. Degree 1 is the root,
//! degrees past the pattern wrap into higher octaves, and negative degrees
//! walk down the descending pattern starting one octave below the root.

use crate::error::{Result, TheoryError};
use std::borrow::Cow;
use std::fmt;

type Steps = Cow<'static, [i32]>;

/// An ascending interval pattern with an optional distinct descending one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode {
    name: Cow<'static, str>,
    ascending: Steps,
    /// `None` reads the ascending pattern backwards
    descending: Option<Steps>,
}

/// (name, ascending, explicit descending)
type CatalogEntry = (&'static str, &'static [i32], Option<&'static [i32]>);

const CATALOG: &[CatalogEntry] = &[
    ("Ionian", &[0, 2, 4, 5, 7, 9, 11], None),
    ("Dorian", &[0, 2, 3, 5, 7, 9, 10], None),
    ("Phrygian", &[0, 1, 3, 5, 7, 8, 10], None),
    ("Lydian", &[0, 2, 4, 6, 7, 9, 11], None),
    ("Mixolydian", &[0, 2, 4, 5, 7, 9, 10], None),
    ("Aeolian", &[0, 2, 3, 5, 7, 8, 10], None),
    ("Locrian", &[0, 1, 3, 5, 6, 8, 10], None),
    // Major and minor family
    ("Major", &[0, 2, 4, 5, 7, 9, 11], None),
    ("Minor", &[0, 2, 3, 5, 7, 8, 10], None),
    ("NaturalMinor", &[0, 2, 3, 5, 7, 8, 10], None),
    ("HarmonicMinor", &[0, 2, 3, 5, 7, 8, 11], None),
    (
        "MelodicMinor",
        &[0, 2, 3, 5, 7, 9, 11],
        Some(&[10, 8, 7, 5, 3, 2, 0]),
    ),
    // Foreign
    ("Algerian", &[0, 2, 3, 5, 6, 7, 8, 11], None),
    ("Arabian", &[0, 2, 4, 5, 6, 8, 10], None),
    ("Balinese", &[0, 1, 3, 7, 8], None),
    ("Byzantine", &[0, 1, 4, 5, 7, 8, 11], None),
    ("Egyptian", &[0, 2, 5, 7, 10], None),
    ("Ethiopian", &[0, 2, 3, 5, 7, 8, 10], None),
    ("Hungarian", &[0, 3, 4, 6, 7, 9, 10], None),
    ("Israeli", &[0, 1, 4, 5, 7, 8, 10], None),
    ("Japanese", &[0, 1, 5, 7, 8], None),
    ("Javanese", &[0, 1, 3, 5, 7, 9, 10], None),
    ("Mongolian", &[0, 2, 4, 7, 9], None),
    ("Persian", &[0, 1, 4, 5, 6, 8, 11], None),
    ("Spanish", &[0, 1, 4, 5, 7, 8, 10], None),
    // Japanese pentatonics
    ("InSen", &[0, 1, 5, 7, 10], None),
    ("Yo", &[0, 2, 5, 7, 10], Some(&[9, 7, 5, 2, 0])),
    ("Hirajoshi", &[0, 2, 3, 7, 8], None),
    ("Iwato", &[0, 1, 5, 6, 10], None),
    ("Kumoi", &[0, 4, 5, 9, 11], None),
    ("HonKumoi", &[0, 1, 5, 7, 8], None),
    ("Chinese", &[0, 4, 6, 7, 11], None),
    // Bebop
    ("BebopDominant", &[0, 2, 4, 5, 7, 9, 10, 11], None),
    ("BebopMinor", &[0, 2, 3, 5, 7, 9, 10, 11], None),
    ("BebopMajor", &[0, 2, 4, 5, 7, 8, 9, 11], None),
    ("BebopLydianDominant", &[0, 2, 4, 6, 7, 9, 10, 11], None),
    ("BebopAltered", &[0, 1, 4, 5, 7, 8, 10, 11], None),
    ("BebopiiV", &[0, 2, 4, 5, 6, 7, 9, 10, 11], None),
    ("BebopAllanHoldsworth", &[0, 2, 3, 4, 5, 7, 9, 10, 11], None),
    ("BebopDorian", &[0, 2, 3, 4, 5, 7, 9, 10], None),
    ("BebopMelodicMinor", &[0, 2, 3, 5, 7, 8, 9, 11], None),
    ("BebopHarmonicMinor", &[0, 2, 3, 5, 7, 8, 10, 11], None),
    ("BebopNaturalMinor", &[0, 2, 3, 5, 7, 8, 10, 11], None),
    // Other heptatonic and blues
    ("HarmonicMajor", &[0, 2, 4, 5, 7, 8, 11], None),
    ("DoubleHarmonic", &[0, 1, 4, 5, 7, 8, 11], None),
    ("Acoustic", &[0, 2, 4, 6, 7, 9, 10], None),
    ("LydianDominant", &[0, 2, 4, 6, 7, 9, 10], None),
    ("LydianAugmented", &[0, 2, 4, 6, 8, 9, 11], None),
    ("MajorBlues", &[0, 2, 3, 4, 7, 9], None),
    ("MinorBlues", &[0, 3, 5, 6, 7, 10], None),
    ("Neapolitan", &[0, 1, 3, 5, 7, 9, 11], None),
    ("NeapolitanMinor", &[0, 1, 3, 5, 7, 8, 11], None),
    // Hexatonic
    ("WholeTone", &[0, 2, 4, 6, 8, 10], None),
    ("Augmented", &[0, 3, 4, 7, 8, 11], None),
    ("Prometheus", &[0, 2, 4, 6, 9, 10], None),
    ("Blues", &[0, 3, 5, 6, 7, 10], None),
    ("TriTone", &[0, 1, 4, 6, 7, 10], None),
    ("TwoSemitoneTriTone", &[0, 1, 2, 6, 7, 8], None),
    // Symmetric and pentatonic
    ("WHDiminished", &[0, 2, 3, 5, 6, 8, 9, 11], None),
    ("HWDiminished", &[0, 1, 3, 4, 6, 7, 9, 10], None),
    ("Pentatonic", &[0, 2, 4, 7, 9], None),
    ("PentatonicMinor", &[0, 2, 3, 7, 8], None),
    ("Chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], None),
];

const MAJOR_STEPS: &[i32] = &[0, 2, 4, 5, 7, 9, 11];

impl Mode {
    /// Build a mode from explicit semitone offsets
    pub fn new(name: &str, ascending: Vec<i32>, descending: Option<Vec<i32>>) -> Result<Mode> {
        validate(name, "ascending", &ascending)?;
        if let Some(descending) = &descending {
            validate(name, "descending", descending)?;
        }
        Ok(Mode {
            name: Cow::Owned(name.to_string()),
            ascending: Cow::Owned(ascending),
            descending: descending.map(Cow::Owned),
        })
    }

    /// Build a mode from successive step sizes, e.g. `[2, 2, 1, 2, 2, 2, 1]`.
    ///
    /// The descending steps are listed bottom-up and read from the top.
    pub fn from_intervals(
        name: &str,
        ascending: &[i32],
        descending: Option<&[i32]>,
    ) -> Result<Mode> {
        let mut up = vec![0];
        let mut cur = 0;
        for &interval in ascending {
            cur += interval;
            if interval > 0 && cur < 12 {
                up.push(cur);
            }
        }

        let down = descending.map(|intervals| {
            let mut down = vec![0];
            let mut cur = 0;
            for &interval in intervals.iter().rev() {
                cur += interval;
                if interval > 0 && cur < 12 {
                    down.insert(0, cur);
                }
            }
            down
        });

        Mode::new(name, up, down)
    }

    /// Look up a mode in the catalogue by its exact name
    pub fn named(name: &str) -> Result<Mode> {
        CATALOG
            .iter()
            .find(|(candidate, _, _)| *candidate == name)
            .map(|&entry| Self::from_entry(entry))
            .ok_or_else(|| TheoryError::UnknownMode(name.to_string()))
    }

    /// The major scale, used for chord degree lookups
    pub const fn major() -> Mode {
        Mode {
            name: Cow::Borrowed("Major"),
            ascending: Cow::Borrowed(MAJOR_STEPS),
            descending: None,
        }
    }

    /// Every catalogue mode in declaration order
    pub fn catalog() -> impl Iterator<Item = Mode> {
        CATALOG.iter().map(|&entry| Self::from_entry(entry))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|(name, _, _)| *name)
    }

    fn from_entry((name, ascending, descending): CatalogEntry) -> Mode {
        Mode {
            name: Cow::Borrowed(name),
            ascending: Cow::Borrowed(ascending),
            descending: descending.map(Cow::Borrowed),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ascending(&self) -> &[i32] {
        &self.ascending
    }

    /// Descending offsets from the top of the octave down to the root
    pub fn descending(&self) -> Cow<'_, [i32]> {
        match &self.descending {
            Some(steps) => Cow::Borrowed(steps),
            None => Cow::Owned(self.ascending.iter().rev().copied().collect()),
        }
    }

    /// Number of degrees in one ascending octave
    pub fn len(&self) -> usize {
        self.ascending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascending.is_empty()
    }

    /// Semitone offset of a scale degree from the root.
    ///
    /// Degree 0 is the root itself; 1 is also the root, 2 the next note up.
    /// Degree -1 is the first note of the descending pattern, an octave down.
    pub fn find_step(&self, pos: i32) -> i32 {
        match pos {
            0 => 0,
            p if p > 0 => {
                let len = self.ascending.len() as i32;
                let idx = p - 1;
                12 * (idx / len) + self.ascending[(idx % len) as usize]
            }
            p => {
                let idx = -p - 1;
                let len = self.descending_len() as i32;
                -12 * (idx / len) + self.descending_at((idx % len) as usize) - 12
            }
        }
    }

    fn descending_len(&self) -> usize {
        self.descending
            .as_ref()
            .map_or(self.ascending.len(), |steps| steps.len())
    }

    fn descending_at(&self, idx: usize) -> i32 {
        match &self.descending {
            Some(steps) => steps[idx],
            None => self.ascending[self.ascending.len() - 1 - idx],
        }
    }
}

fn validate(name: &str, direction: &str, steps: &[i32]) -> Result<()> {
    if steps.is_empty() {
        return Err(TheoryError::InvalidMode {
            name: name.to_string(),
            reason: format!("{direction} pattern is empty"),
        });
    }
    if let Some(bad) = steps.iter().find(|&&s| !(0..12).contains(&s)) {
        return Err(TheoryError::InvalidMode {
            name: name.to_string(),
            reason: format!("{direction} step {bad} is outside the octave"),
        });
    }
    Ok(())
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(Mode::catalog().count(), 63);
        for mode in Mode::catalog() {
            assert_eq!(mode.ascending()[0], 0, "{}", mode);
            assert!(mode.ascending().iter().all(|s| (0..12).contains(s)));
            assert_eq!(Mode::named(mode.name()).unwrap(), mode);
        }
        assert_eq!(Mode::named("Major").unwrap(), Mode::major());
    }

    #[test]
    fn test_unknown_mode() {
        assert_eq!(
            Mode::named("Klingon"),
            Err(TheoryError::UnknownMode("Klingon".to_string()))
        );
    }

    #[test]
    fn test_find_step_wraps() {
        for mode in Mode::catalog() {
            let len = mode.len() as i32;
            assert_eq!(mode.find_step(0), 0);
            assert_eq!(mode.find_step(1), 0);
            assert_eq!(mode.find_step(-1), mode.descending()[0] - 12);
            for n in 1..30 {
                assert_eq!(mode.find_step(n + len), mode.find_step(n) + 12, "{} {}", mode, n);
                assert_eq!(mode.find_step(-n - len), mode.find_step(-n) - 12, "{} {}", mode, -n);
            }
        }
    }

    #[test]
    fn test_major_steps() {
        let major = Mode::major();
        let steps: Vec<i32> = (1..=13).map(|d| major.find_step(d)).collect();
        assert_eq!(steps, vec![0, 2, 4, 5, 7, 9, 11, 12, 14, 16, 17, 19, 21]);
    }

    #[test]
    fn test_descending_default_is_reverse() {
        let dorian = Mode::named("Dorian").unwrap();
        assert_eq!(&*dorian.descending(), &[10, 9, 7, 5, 3, 2, 0]);
        assert_eq!(dorian.find_step(-1), -2);
        assert_eq!(dorian.find_step(-7), -12);
        assert_eq!(dorian.find_step(-8), -14);
    }

    #[test]
    fn test_from_intervals() {
        let explicit = Mode::named("MelodicMinor").unwrap();
        let built = Mode::from_intervals(
            "MelodicMinor",
            &[2, 1, 2, 2, 2, 2, 1],
            Some(&[2, 2, 1, 2, 2, 1, 2]),
        )
        .unwrap();
        assert_eq!(built.ascending(), explicit.ascending());
        assert_eq!(built.descending(), explicit.descending());
        for n in -14..=15 {
            assert_eq!(built.find_step(n), explicit.find_step(n));
        }
    }

    #[test]
    fn test_invalid_custom_mode() {
        assert!(matches!(
            Mode::new("Empty", vec![], None),
            Err(TheoryError::InvalidMode { .. })
        ));
        assert!(matches!(
            Mode::new("Wide", vec![0, 4, 14], None),
            Err(TheoryError::InvalidMode { .. })
        ));
        assert!(Mode::new("Fifths", vec![0, 7], Some(vec![7, 0])).is_ok());
    }
}
