// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Bass track generator.
//!
//! Splits each chord into a random number of equal slots and fills every
//! slot with the chord root or fifth, sometimes kicked up or down an
//! octave. Slots abut with no gap or overlap; consecutive chords abut too.

use rand::rngs::StdRng;
use rand::Rng;

use super::{push_note, shift_pitch, TimedEvent, BASS_CHANNEL};
use crate::music::ChordProgression;

/// Fewest slots a chord is split into
const MIN_SUBDIVISIONS: u32 = 1;
/// Most slots a chord is split into
const MAX_SUBDIVISIONS: u32 = 5;
/// Probability of playing the chord root (vs the fifth)
const ROOT_PROBABILITY: f64 = 0.7;
/// Probability that a slot's pitch gets an octave shift drawn from
/// [`OCTAVE_SHIFTS`] (the 0 entry absorbs a third of that branch)
const SHIFT_PROBABILITY: f64 = 0.5;
/// Candidate octave shifts in semitones
const OCTAVE_SHIFTS: [i16; 3] = [-12, 0, 12];
/// Quietest bass note
const MIN_VELOCITY: u8 = 50;
/// Loudest bass note
const MAX_VELOCITY: u8 = 100;

/// Generate the bass track across a chord progression.
///
/// Slot lengths use floor division, so up to `subdivisions - 1` remainder
/// ticks per chord go unsounded; the cursor still advances by the full
/// chord duration.
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
        let subdivisions = rng.gen_range(MIN_SUBDIVISIONS..=MAX_SUBDIVISIONS).max(1) as u64;
        let slot_ticks = chord_ticks / subdivisions;

        let mut slot_start = current_time;
        for _ in 0..subdivisions {
            let pitch = if rng.gen::<f64>() < ROOT_PROBABILITY {
                chord.root()
            } else {
                chord.fifth()
            };
            let shift = if rng.gen::<f64>() < SHIFT_PROBABILITY {
                OCTAVE_SHIFTS[rng.gen_range(0..OCTAVE_SHIFTS.len())]
            } else {
                0
            };
            let velocity = rng.gen_range(MIN_VELOCITY..=MAX_VELOCITY);
            push_note(
                &mut events,
                shift_pitch(pitch, shift),
                velocity,
                slot_start,
                slot_ticks,
                BASS_CHANNEL,
            );
            slot_start += slot_ticks;
        }

        current_time += chord_ticks;
    }

    events
}
