//! Exact beat arithmetic for progression durations.

use num_rational::Ratio;

/// A duration or position measured in beats
pub type Beats = Ratio<i64>;

/// Create Beats from an integer
#[inline]
pub fn beats(n: i64) -> Beats {
    Ratio::from_integer(n)
}

/// Create Beats from a fraction n/d
#[inline]
pub fn beat_fraction(n: i64, d: i64) -> Beats {
    Ratio::new(n, d)
}

#[inline]
pub fn to_f64(b: Beats) -> f64 {
    *b.numer() as f64 / *b.denom() as f64
}

/// Wall-clock length of a span of beats at the given tempo
pub fn to_seconds(b: Beats, tempo: u32) -> f64 {
    if tempo == 0 {
        return 0.0;
    }
    to_f64(b) * 60.0 / tempo as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_helper() {
        assert_eq!(beats(4), beat_fraction(8, 2));
        assert_eq!(beat_fraction(1, 3) + beat_fraction(1, 6), beat_fraction(1, 2));
    }

    #[test]
    fn test_to_f64() {
        assert!((to_f64(beat_fraction(1, 3)) - 0.333333).abs() < 1e-4);
    }

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds(beats(4), 60), 4.0);
        assert_eq!(to_seconds(beats(4), 120), 2.0);
        assert_eq!(to_seconds(beat_fraction(3, 2), 90), 1.0);
        assert_eq!(to_seconds(beats(4), 0), 0.0);
    }
}
