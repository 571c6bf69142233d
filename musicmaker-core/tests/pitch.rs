use musicmaker_core::{Key, Pitch, Scale};

const FLATS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];
const SHARPS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[test]
fn test_pitch_grid() {
    assert_eq!(Pitch::new("Cb", -2).unwrap(), Pitch::midi(-1));

    for octave in -1..9 {
        for note in Pitch::note_names() {
            let p = Pitch::create(note, octave, 440.0).unwrap();
            let v = p.value().rem_euclid(12);

            assert_eq!(p, Pitch::midi(p.value()));
            assert_eq!(octave, p.value().div_euclid(12) - 1);
            assert!(Pitch::is_valid_name(p.name()));

            for (i, step) in (-p.value()..128 - p.value()).enumerate() {
                let moved = p.transpose(step);
                let expected = Pitch::new(
                    FLATS[(v + step).rem_euclid(12) as usize],
                    octave + (v + step).div_euclid(12),
                )
                .unwrap();
                assert_eq!(moved, expected);
                assert_eq!(moved.value(), i as i32);
            }

            assert_eq!(p.transpose(1), p.sharp());
            assert_eq!(p.transpose(-1), p.flat());

            assert!((p.transpose(12).freq() - p.freq() * 2.0).abs() < 1e-9);
            assert_eq!(p.transpose(12).octave(), p.octave() + 1);
            assert!(p.note_kind_equals(&p.transpose(12)));

            assert!((p.raise_octave(3).freq() - p.freq() * 8.0).abs() < 1e-6);
            assert_eq!(p.raise_octave(3).octave(), p.octave() + 3);

            for target in [-1, 7] {
                let moved = p.set_octave(target);
                assert_eq!(moved.octave(), target);
                assert!(p.note_kind_equals(&moved));
            }

            assert_eq!(p.normal(), p);
            assert_eq!(p.normal().name(), FLATS[v as usize]);
            assert_eq!(p.sharp_normal(), p);
            assert_eq!(p.sharp_normal().name(), SHARPS[v as usize]);
        }
    }
}

#[test]
fn test_display_round_trip() {
    for text in ["C4", "Eb-1", "F##3", "Cb5", "B#0"] {
        let pitch: Pitch = text.parse().unwrap();
        assert_eq!(pitch.to_string(), text);
    }
}

#[test]
fn test_scale_walk() {
    let scale = Scale::named("D", "Major").unwrap();
    let names: Vec<String> = scale.pitches().iter().map(|p| p.to_string()).collect();
    assert_eq!(
        names,
        [
            "D4", "E4", "Gb4", "G4", "A4", "B4", "Db5", "D5", "Db5", "B4", "A4", "G4", "Gb4",
            "E4", "D4"
        ]
    );
}

#[test]
fn test_key_scale_matches_signature() {
    let key = Key::parse("A major").unwrap();
    let sharps: Vec<u8> = key
        .scale()
        .pitches()
        .iter()
        .take(7)
        .map(|p| p.pitch_class())
        .collect();
    assert_eq!(sharps, vec![9, 11, 1, 2, 4, 6, 8]);
    assert_eq!(key.accidental_count(), 3);
}
