// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Triads and randomized chord progressions.
//!
//! A progression picks a random root, octave, and mode, then stacks a
//! random major or minor triad on a random scale degree for each chord.

use rand::rngs::StdRng;
use rand::Rng;

use super::scale::{midi_note, MidiNote, Mode, Note};

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriadQuality {
    Major,
    Minor,
}

impl TriadQuality {
    /// Intervals above the chord root (root, third, fifth)
    pub fn intervals(self) -> [u8; 3] {
        match self {
            TriadQuality::Major => [0, 4, 7],
            TriadQuality::Minor => [0, 3, 7],
        }
    }
}

/// A three-note chord: root, third, fifth in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triad {
    notes: [MidiNote; 3],
}

impl Triad {
    /// Build a triad of the given quality on a root note
    pub fn new(root: MidiNote, quality: TriadQuality) -> Self {
        let intervals = quality.intervals();
        Self {
            notes: [
                root + intervals[0],
                root + intervals[1],
                root + intervals[2],
            ],
        }
    }

    /// The chord root
    pub fn root(&self) -> MidiNote {
        self.notes[0]
    }

    /// The chord third
    pub fn third(&self) -> MidiNote {
        self.notes[1]
    }

    /// The chord fifth
    pub fn fifth(&self) -> MidiNote {
        self.notes[2]
    }

    /// All three notes, ascending
    pub fn notes(&self) -> [MidiNote; 3] {
        self.notes
    }
}

/// An ordered chord sequence with a descriptive label
#[derive(Debug, Clone, PartialEq)]
pub struct ChordProgression {
    chords: Vec<Triad>,
    label: String,
}

impl ChordProgression {
    /// Lowest root octave the builder will pick
    const MIN_OCTAVE: u8 = 2;
    /// Highest root octave the builder will pick
    const MAX_OCTAVE: u8 = 5;
    /// Probability of a major (vs minor) triad on each chord root
    const MAJOR_PROBABILITY: f64 = 0.5;

    /// Generate a random progression of `chord_count` triads.
    ///
    /// A count of zero yields an empty, valid progression.
    pub fn generate(rng: &mut StdRng, chord_count: usize) -> Self {
        let root = Note::ALL[rng.gen_range(0..Note::ALL.len())];
        let octave = rng.gen_range(Self::MIN_OCTAVE..=Self::MAX_OCTAVE);
        let mode = Mode::CHORD_MODES[rng.gen_range(0..Mode::CHORD_MODES.len())];
        let intervals = mode.intervals();
        let base_root = midi_note(root, octave);

        let mut chords = Vec::with_capacity(chord_count);
        for _ in 0..chord_count {
            let interval = intervals[rng.gen_range(0..intervals.len())];
            let chord_root = base_root + interval;
            let quality = if rng.gen::<f64>() < Self::MAJOR_PROBABILITY {
                TriadQuality::Major
            } else {
                TriadQuality::Minor
            };
            chords.push(Triad::new(chord_root, quality));
        }

        Self {
            chords,
            label: format!("{}{} {}", root, octave, mode),
        }
    }

    /// Number of chords, in performance order
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Check whether the progression holds no chords
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// The chords in performance order
    pub fn chords(&self) -> &[Triad] {
        &self.chords
    }

    /// Descriptive label: root name + octave + mode name
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_triad_intervals() {
        let major = Triad::new(60, TriadQuality::Major);
        assert_eq!(major.notes(), [60, 64, 67]);

        let minor = Triad::new(60, TriadQuality::Minor);
        assert_eq!(minor.notes(), [60, 63, 67]);
    }

    #[test]
    fn test_triad_accessors() {
        let triad = Triad::new(48, TriadQuality::Minor);
        assert_eq!(triad.root(), 48);
        assert_eq!(triad.third(), 51);
        assert_eq!(triad.fifth(), 55);
    }

    #[test]
    fn test_progression_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in [0usize, 1, 4, 16, 64] {
            let progression = ChordProgression::generate(&mut rng, count);
            assert_eq!(progression.len(), count);
            assert!(!progression.label().is_empty());
        }
    }

    #[test]
    fn test_progression_triads_ascend() {
        let mut rng = StdRng::seed_from_u64(2);
        let progression = ChordProgression::generate(&mut rng, 32);
        for triad in progression.chords() {
            let notes = triad.notes();
            assert!(notes[0] < notes[1]);
            assert!(notes[1] < notes[2]);
        }
    }

    #[test]
    fn test_empty_progression_is_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        let progression = ChordProgression::generate(&mut rng, 0);
        assert!(progression.is_empty());
        assert!(!progression.label().is_empty());
    }
}
