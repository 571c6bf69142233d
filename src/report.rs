//! Colored text reports over the theory model.

use anyhow::{anyhow, Context, Result};
use colored::*;
use musicmaker_core::types::time::to_f64;
use musicmaker_core::{
    Chord, ChordKind, Family, Key, Pitch, Progression, ProgressionGraph, Sampling,
    Scale, Weight, MAJOR, MINOR,
};
use rand::Rng;

/// Look up a progression family by name
pub fn family(name: &str) -> Result<&'static Family> {
    [&MAJOR, &MINOR]
        .into_iter()
        .find(|family| family.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("Unknown progression family: {}", name))
}

fn note_list(notes: &[Pitch]) -> String {
    if notes.is_empty() {
        return "[]".bright_black().to_string();
    }
    let names: Vec<String> = notes.iter().map(|n| n.to_string().cyan().to_string()).collect();
    format!(
        "{}{}{}",
        "[".bright_white(),
        names.join(&format!("{} ", ",".bright_white())),
        "]".bright_white()
    )
}

fn chord_name(chord: &Chord) -> ColoredString {
    let name = chord.name();
    match chord.symbol().kind() {
        ChordKind::Major => name.blue().bold(),
        ChordKind::Minor => name.red().bold(),
        ChordKind::MajorMinor => name.green().bold(),
        ChordKind::MinorMajor => name.yellow().bold(),
        ChordKind::Diminished => name.purple().bold(),
        ChordKind::Augmented => name.bright_red().bold(),
    }
}

fn weight_label(weight: Weight) -> ColoredString {
    let name = weight.name();
    match weight {
        Weight::Primary => name.green().bold(),
        Weight::Resolve => name.blue().bold(),
        Weight::Common => name.cyan(),
        Weight::Uncommon => name.yellow(),
        Weight::Sparse => name.bright_black(),
        Weight::Rare => name.red(),
    }
}

/// `D4 Dorian: [D4, E4, F4, ...]`, ascending then descending
pub fn scale(root: &str, mode: &str) -> Result<String> {
    let scale = Scale::named(root, mode)
        .with_context(|| format!("Failed to build scale {} {}", root, mode))?;
    Ok(format!(
        "{}: {}",
        scale.to_string().bold(),
        note_list(&scale.pitches())
    ))
}

/// `Dm7/C: [C4, D4, F4, A4]`
pub fn chord(symbol: &str, octave: i32) -> Result<String> {
    let chord =
        Chord::create(symbol, octave).with_context(|| format!("Failed to build chord {}", symbol))?;
    Ok(format!("{}: {}", chord_name(&chord), note_list(chord.notes())))
}

/// Key signature, e.g. `E Minor: F# (1 sharp)`
pub fn key(text: &str) -> Result<String> {
    let key = Key::parse(text).with_context(|| format!("Failed to parse key {}", text))?;
    let title = format!("{} {}", key.root().name(), key.mode().name()).bold();

    let count = key.accidental_count();
    if count == 0 {
        return Ok(format!("{}: {}", title, "no accidentals".bright_black()));
    }

    let marks: Vec<String> = key
        .signature()
        .iter()
        .map(|(letter, accidental)| format!("{}{}", letter, accidental).magenta().to_string())
        .collect();
    let kind = match (count.abs(), count > 0) {
        (1, true) => "sharp",
        (1, false) => "flat",
        (_, true) => "sharps",
        (_, false) => "flats",
    };
    Ok(format!(
        "{}: {} ({} {})",
        title,
        marks.join(" "),
        count.abs(),
        kind
    ))
}

/// Every position with its base chord and outgoing transitions, easiest first
pub fn transitions(graph: &ProgressionGraph) -> Result<String> {
    let mut lines = vec![format!(
        "{} {}",
        graph.family().name.bold(),
        graph.scale().to_string().bright_white()
    )];

    for id in graph.graph().nodes() {
        let position = graph.graph().value(id);
        let base = position
            .base_chord(graph.scale())
            .with_context(|| format!("Failed to build base chord for {}", position))?;
        lines.push(format!(
            "{} {}",
            position.name().bold(),
            format!("({})", chord_name(&base)).bright_black()
        ));

        let mut targets = graph
            .transitions(position)
            .with_context(|| format!("Failed to list transitions for {}", position))?;
        targets.sort_by(|(a, wa), (b, wb)| wa.cmp(wb).then_with(|| a.cmp(b)));
        for (target, weight) in targets {
            lines.push(format!("  -> {:<12} {}", target.name(), weight_label(weight)));
        }
    }
    Ok(lines.join("\n"))
}

/// Timeline with the start beat of every chord
pub fn progression(progression: &Progression) -> String {
    let (per_bar, unit) = progression.meter();
    let mut lines = vec![format!(
        "{} {} bpm, {}/{}, {} beats{}",
        "Progression:".bold(),
        progression.tempo(),
        per_bar,
        unit,
        progression.beats(),
        if progression.looped() { ", looped" } else { "" }
    )];

    if progression.is_empty() {
        lines.push("  []".bright_black().to_string());
    }
    for (start, entry) in progression.timeline() {
        lines.push(format!(
            "  {:>6.2}  {:<12} {}",
            to_f64(start),
            entry.label.green().bold(),
            note_list(&entry.notes)
        ));
    }
    lines.join("\n")
}

/// Generate and render a progression for a family and root spelling
pub fn generate<R: Rng + ?Sized>(
    family_name: &str,
    root: &str,
    length: usize,
    extended: bool,
    sampling: Sampling,
    rng: &mut R,
) -> Result<String> {
    let family = family(family_name)?;
    let root = Pitch::new(root, 4).with_context(|| format!("Invalid root {}", root))?;
    let graph = ProgressionGraph::new(family, root)
        .with_context(|| format!("Failed to build {} progression graph", family.name))?
        .with_sampling(sampling);
    let generated = graph
        .generate(length, false, extended, rng)
        .with_context(|| format!("Failed to generate {} progression in {}", family.name, root))?;
    Ok(progression(&generated))
}
