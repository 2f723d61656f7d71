// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Phrase-based melody generator with L-system durations.
//!
//! One random phrase of scale indices and one L-system duration sequence
//! are drawn per run and shared across the whole progression. Notes
//! advance a free-running cursor by their actual (clamped) duration, so
//! the melody drifts against the chord grid. The drift is intentional.

use rand::rngs::StdRng;
use rand::Rng;

use super::{push_note, shift_pitch, TimedEvent, MELODY_CHANNEL};
use crate::lsystem;
use crate::music::{ChordProgression, MelodyScale};

/// Shortest random phrase, in notes
const MIN_PHRASE_LEN: usize = 3;
/// Longest random phrase, in notes
const MAX_PHRASE_LEN: usize = 7;
/// Fewest melody notes per chord
const MIN_NOTES_PER_CHORD: u32 = 2;
/// Most melody notes per chord
const MAX_NOTES_PER_CHORD: u32 = 6;
/// Probability of shifting a note up an octave. The down-shift check only
/// runs when the up-shift check fails, so its effective probability is
/// conditional, roughly 0.16.
const OCTAVE_SHIFT_PROBABILITY: f64 = 0.2;
/// Quietest melody note
const MIN_VELOCITY: u8 = 60;
/// Loudest melody note
const MAX_VELOCITY: u8 = 127;

/// Generate the melody track across a chord progression.
pub fn generate(
    rng: &mut StdRng,
    progression: &ChordProgression,
    scale: &MelodyScale,
    beats_per_chord: u32,
    ticks_per_beat: u32,
) -> Vec<TimedEvent> {
    let mut events = Vec::new();
    if scale.is_empty() {
        return events;
    }

    let chord_ticks = beats_per_chord as u64 * ticks_per_beat as u64;
    let durations = lsystem::duration_sequence(rng);

    let phrase_len = rng.gen_range(MIN_PHRASE_LEN..=MAX_PHRASE_LEN);
    let phrase: Vec<usize> = (0..phrase_len)
        .map(|_| rng.gen_range(0..scale.len()))
        .collect();

    let mut lsys_index = 0usize;
    let mut current_time = 0u64;

    for _ in progression.chords() {
        let notes_in_chord = rng.gen_range(MIN_NOTES_PER_CHORD..=MAX_NOTES_PER_CHORD).max(1) as u64;
        let budget_ticks = chord_ticks / notes_in_chord;

        for _ in 0..notes_in_chord {
            let scale_index = phrase[rng.gen_range(0..phrase.len())];
            let mut pitch = scale.note_at(scale_index);

            // Two sequential independent checks, not one three-way draw
            if rng.gen::<f64>() < OCTAVE_SHIFT_PROBABILITY {
                pitch = shift_pitch(pitch, 12);
            } else if rng.gen::<f64>() < OCTAVE_SHIFT_PROBABILITY {
                pitch = shift_pitch(pitch, -12);
            }

            let duration_beats = durations[lsys_index % durations.len()];
            lsys_index += 1;
            let duration_ticks = (duration_beats * ticks_per_beat as f64) as u64;
            let duration = duration_ticks.min(budget_ticks);

            let velocity = rng.gen_range(MIN_VELOCITY..=MAX_VELOCITY);
            push_note(
                &mut events,
                pitch,
                velocity,
                current_time,
                duration,
                MELODY_CHANNEL,
            );
            current_time += duration;
        }
    }

    events
}
