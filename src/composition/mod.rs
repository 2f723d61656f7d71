// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Composition aggregate and the top-level generation pass.
//!
//! `compose` builds the chord progression and melody scale, runs the four
//! pattern generators over them, and packs the results into an immutable
//! `Composition` ready for serialization.

use rand::rngs::StdRng;
use tracing::info;

use crate::config::GenParams;
use crate::generators::{self, TimedEvent};
use crate::music::{ChordProgression, MelodyScale};

/// Time resolution of the output file, in ticks per beat
pub const TICKS_PER_BEAT: u32 = 480;

/// The four instrument parts, in fixed serialization order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Drums,
    Bass,
    Harmony,
    Melody,
}

impl Part {
    /// All parts in serialization order
    pub const ALL: [Part; 4] = [Part::Drums, Part::Bass, Part::Harmony, Part::Melody];

    /// Track name
    pub fn name(self) -> &'static str {
        match self {
            Part::Drums => "Drums",
            Part::Bass => "Bass",
            Part::Harmony => "Harmony",
            Part::Melody => "Melody",
        }
    }

    /// Fixed channel assignment for this part
    pub fn channel(self) -> u8 {
        match self {
            Part::Drums => generators::DRUM_CHANNEL,
            Part::Bass => generators::BASS_CHANNEL,
            Part::Harmony => generators::HARMONY_CHANNEL,
            Part::Melody => generators::MELODY_CHANNEL,
        }
    }
}

/// One instrument part's events, in absolute ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Which part this track holds
    pub part: Part,
    /// Note events; unsorted until serialization
    pub events: Vec<TimedEvent>,
}

impl Track {
    /// Count of note-on events
    pub fn note_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == generators::EventKind::NoteOn)
            .count()
    }
}

/// The root aggregate: four tracks plus tempo and resolution.
///
/// Constructed once per run, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    tracks: Vec<Track>,
    tempo_bpm: u32,
    ticks_per_beat: u32,
}

impl Composition {
    /// Assemble a composition from pre-generated tracks
    pub fn new(tracks: Vec<Track>, tempo_bpm: u32) -> Self {
        Self {
            tracks,
            tempo_bpm,
            ticks_per_beat: TICKS_PER_BEAT,
        }
    }

    /// Tracks in serialization order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look up a track by part
    pub fn track(&self, part: Part) -> &Track {
        &self.tracks[Part::ALL.iter().position(|&p| p == part).unwrap_or(0)]
    }

    /// Tempo in beats per minute
    pub fn tempo_bpm(&self) -> u32 {
        self.tempo_bpm
    }

    /// Time resolution in ticks per beat
    pub fn ticks_per_beat(&self) -> u32 {
        self.ticks_per_beat
    }
}

/// Generate a full composition from the given parameters.
///
/// One chord per measure; beats per chord equals beats per measure. All
/// randomness flows through the single passed rng, so a fixed seed
/// reproduces the piece exactly.
pub fn compose(rng: &mut StdRng, params: &GenParams) -> Composition {
    let chord_count = params.measures as usize;
    let beats_per_chord = params.beats_per_measure;

    let progression = ChordProgression::generate(rng, chord_count);
    let scale = MelodyScale::generate(rng);
    info!(
        progression = progression.label(),
        chords = progression.len(),
        scale = scale.label(),
        "generated harmonic material"
    );

    let tracks = vec![
        Track {
            part: Part::Drums,
            events: generators::drums::generate(
                rng,
                params.measures,
                params.beats_per_measure,
                TICKS_PER_BEAT,
            ),
        },
        Track {
            part: Part::Bass,
            events: generators::bass::generate(rng, &progression, beats_per_chord, TICKS_PER_BEAT),
        },
        Track {
            part: Part::Harmony,
            events: generators::harmony::generate(
                rng,
                &progression,
                beats_per_chord,
                TICKS_PER_BEAT,
            ),
        },
        Track {
            part: Part::Melody,
            events: generators::melody::generate(
                rng,
                &progression,
                &scale,
                beats_per_chord,
                TICKS_PER_BEAT,
            ),
        },
    ];

    for track in &tracks {
        info!(part = track.part.name(), notes = track.note_count(), "generated track");
    }

    Composition::new(tracks, params.tempo_bpm)
}
