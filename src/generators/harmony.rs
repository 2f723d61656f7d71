// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic pad generator.
//!
//! Presses each chord a random number of times, arpeggiating the triad in
//! a fresh shuffled order on every press. Presses lie back to back and
//! chords abut with no gap.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{push_note, TimedEvent, HARMONY_CHANNEL};
use crate::music::ChordProgression;

/// Fewest presses per chord
const MIN_PRESSES: u32 = 1;
/// Most presses per chord
const MAX_PRESSES: u32 = 3;
/// Quietest pad note
const MIN_VELOCITY: u8 = 40;
/// Loudest pad note
const MAX_VELOCITY: u8 = 90;

/// Generate the harmony track across a chord progression.
///
/// Press and sub-note lengths use floor division; remainder ticks are
/// dropped, the cursor still advances by the full chord duration.
pub fn generate(
    rng: &mut StdRng,
    progression: &ChordProgression,
    beats_per_chord: u32,
    ticks_per_beat: u32,
) -> Vec<TimedEvent> {
    let mut events = Vec::new();
    let chord_ticks = beats_per_chord as u64 * ticks_per_beat as u64;
    let mut current_time = 0u64;

    for chord in progression.chords() {
        let presses = rng.gen_range(MIN_PRESSES..=MAX_PRESSES).max(1) as u64;
        let press_ticks = chord_ticks / presses;

        let mut time_ptr = current_time;
        for _ in 0..presses {
            let mut notes = chord.notes();
            notes.shuffle(rng);
            let note_ticks = press_ticks / notes.len() as u64;

            for &pitch in &notes {
                let velocity = rng.gen_range(MIN_VELOCITY..=MAX_VELOCITY);
                push_note(
                    &mut events,
                    pitch,
                    velocity,
                    time_ptr,
                    note_ticks,
                    HARMONY_CHANNEL,
                );
                time_ptr += note_ticks;
            }
        }

        current_time += chord_ticks;
    }

    events
}
