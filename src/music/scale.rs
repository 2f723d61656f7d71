// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes, modes, and the melody scale builder.
//!
//! Provides the note-name/pitch-class mapping, the fixed modal interval
//! tables, and the randomized two-octave scale used for melody phrases.

use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;

/// MIDI note number type.
///
/// No range clamp is applied anywhere in the crate; the fixed octave tables
/// (chord roots in octaves 2-5, scale roots in 3-5, shifts of +/-12) keep
/// every reachable value inside 0-127.
pub type MidiNote = u8;

/// Note names (pitch classes). Enharmonic spellings collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        match self {
            Note::C => 0,
            Note::Cs => 1,
            Note::D => 2,
            Note::Ds => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs => 6,
            Note::G => 7,
            Note::Gs => 8,
            Note::A => 9,
            Note::As => 10,
            Note::B => 11,
        }
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::C => write!(f, "C"),
            Note::Cs => write!(f, "C#"),
            Note::D => write!(f, "D"),
            Note::Ds => write!(f, "D#"),
            Note::E => write!(f, "E"),
            Note::F => write!(f, "F"),
            Note::Fs => write!(f, "F#"),
            Note::G => write!(f, "G"),
            Note::Gs => write!(f, "G#"),
            Note::A => write!(f, "A"),
            Note::As => write!(f, "A#"),
            Note::B => write!(f, "B"),
        }
    }
}

/// Compute a MIDI note number from a note name and octave.
///
/// Middle C is C4 = 60 under this convention.
pub fn midi_note(note: Note, octave: u8) -> MidiNote {
    12 * (octave + 1) + note.pitch_class()
}

/// Modal interval sets used by the chord and scale builders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Major,
    Minor,
    Phrygian,
    Lydian,
    Pentatonic,
}

impl Mode {
    /// Modes the chord progression builder draws from
    pub const CHORD_MODES: [Mode; 4] = [Mode::Major, Mode::Minor, Mode::Phrygian, Mode::Lydian];

    /// Modes the melody scale builder draws from
    pub const SCALE_MODES: [Mode; 5] = [
        Mode::Major,
        Mode::Minor,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Pentatonic,
    ];

    /// Get the intervals (semitones from root) for this mode.
    ///
    /// Pentatonic has 5 degrees, the others 7.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Mode::Major => &[0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Mode::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Mode::Pentatonic => &[0, 2, 4, 7, 9],
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Pentatonic => "pentatonic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Two octaves of a random mode, used for melody note selection.
///
/// Notes are ordered interval-first within each octave, octave 0 before
/// octave 1. Indices matter for phrase lookup; duplicate pitch classes
/// across octaves are expected. The scale is drawn independently of the
/// chord progression's mode.
#[derive(Debug, Clone, PartialEq)]
pub struct MelodyScale {
    notes: Vec<MidiNote>,
    label: String,
}

impl MelodyScale {
    /// Lowest root octave the builder will pick
    const MIN_OCTAVE: u8 = 3;
    /// Highest root octave the builder will pick
    const MAX_OCTAVE: u8 = 5;

    /// Build a random two-octave scale
    pub fn generate(rng: &mut StdRng) -> Self {
        let mode = Mode::SCALE_MODES[rng.gen_range(0..Mode::SCALE_MODES.len())];
        let root = Note::ALL[rng.gen_range(0..Note::ALL.len())];
        let octave = rng.gen_range(Self::MIN_OCTAVE..=Self::MAX_OCTAVE);
        Self::build(root, octave, mode)
    }

    /// Build a scale from explicit root, octave, and mode
    pub fn build(root: Note, octave: u8, mode: Mode) -> Self {
        let base = midi_note(root, octave);
        let mut notes = Vec::with_capacity(mode.intervals().len() * 2);
        for octave_shift in 0..2u8 {
            for &interval in mode.intervals() {
                notes.push(base + interval + 12 * octave_shift);
            }
        }
        Self {
            notes,
            label: format!("{}{} {}", root, octave, mode),
        }
    }

    /// Number of notes in the scale (degrees x 2 octaves)
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check whether the scale holds no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by scale index
    pub fn note_at(&self, index: usize) -> MidiNote {
        self.notes[index]
    }

    /// All notes in index order
    pub fn notes(&self) -> &[MidiNote] {
        &self.notes
    }

    /// Descriptive label, e.g. "D#4 pentatonic"
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pitch_classes() {
        assert_eq!(Note::C.pitch_class(), 0);
        assert_eq!(Note::B.pitch_class(), 11);
        assert_eq!(Note::from_pitch_class(13), Note::Cs);
    }

    #[test]
    fn test_midi_note_octaves() {
        // Middle C
        assert_eq!(midi_note(Note::C, 4), 60);
        assert_eq!(midi_note(Note::A, 4), 69);
        assert_eq!(midi_note(Note::C, 2), 36);
    }

    #[test]
    fn test_mode_intervals() {
        assert_eq!(Mode::Major.intervals().len(), 7);
        assert_eq!(Mode::Minor.intervals().len(), 7);
        assert_eq!(Mode::Phrygian.intervals().len(), 7);
        assert_eq!(Mode::Lydian.intervals().len(), 7);
        assert_eq!(Mode::Pentatonic.intervals().len(), 5);

        // Every interval set starts on the root
        for mode in Mode::SCALE_MODES {
            assert_eq!(mode.intervals()[0], 0);
        }
    }

    #[test]
    fn test_scale_ordering() {
        let scale = MelodyScale::build(Note::C, 4, Mode::Major);
        assert_eq!(scale.len(), 14);

        // Octave 0 notes precede octave 1 notes
        assert_eq!(scale.note_at(0), 60);
        assert_eq!(scale.note_at(6), 71);
        assert_eq!(scale.note_at(7), 72);
        assert_eq!(scale.note_at(13), 83);
    }

    #[test]
    fn test_pentatonic_scale_length() {
        let scale = MelodyScale::build(Note::A, 3, Mode::Pentatonic);
        assert_eq!(scale.len(), 10);
        assert_eq!(scale.label(), "A3 pentatonic");
    }

    #[test]
    fn test_generated_scale_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let scale = MelodyScale::generate(&mut rng);
            assert!(!scale.is_empty());
            for &note in scale.notes() {
                // Highest reachable: B5 root (83) + 11 + 12
                assert!(note <= 106);
            }
        }
    }
}
