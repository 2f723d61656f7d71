// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Drum pattern generator.
//!
//! Lays a fixed kick/snare backbone in 4/4 measures, then scatters a
//! random number of unquantized percussion hits across every measure.
//! Backbone and random hits may overlap; there is no collision avoidance.

use rand::rngs::StdRng;
use rand::Rng;

use super::{push_note, TimedEvent, DRUM_CHANNEL};

/// Standard General MIDI drum notes
pub mod gm_drums {
    pub const KICK: u8 = 36;
    pub const SNARE: u8 = 38;
}

/// Percussion pitches the random hits draw from: kicks, snares, hats,
/// crashes, toms
pub const DRUM_NOTES: [u8; 11] = [35, 36, 38, 40, 41, 42, 43, 46, 49, 51, 57];

/// Velocity for backbone kick and snare hits
const BACKBONE_VELOCITY: u8 = 100;
/// Fewest random hits per measure
const MIN_RANDOM_HITS: u32 = 2;
/// Most random hits per measure
const MAX_RANDOM_HITS: u32 = 8;
/// Quietest random hit
const MIN_HIT_VELOCITY: u8 = 40;
/// Loudest random hit
const MAX_HIT_VELOCITY: u8 = 120;

/// Every drum hit lasts a tenth of a beat
fn hit_duration(ticks_per_beat: u32) -> u64 {
    (ticks_per_beat / 10) as u64
}

/// Generate the drum track for `measures` measures.
///
/// Unlike the pitched generators this one walks measures, not chords.
pub fn generate(
    rng: &mut StdRng,
    measures: u32,
    beats_per_measure: u32,
    ticks_per_beat: u32,
) -> Vec<TimedEvent> {
    let mut events = Vec::new();
    let measure_ticks = beats_per_measure as u64 * ticks_per_beat as u64;
    let duration = hit_duration(ticks_per_beat);

    for measure in 0..measures as u64 {
        let measure_start = measure * measure_ticks;

        // Kick on beat 0, snare on beat 2, only in 4/4
        if beats_per_measure == 4 {
            push_note(
                &mut events,
                gm_drums::KICK,
                BACKBONE_VELOCITY,
                measure_start,
                duration,
                DRUM_CHANNEL,
            );
            push_note(
                &mut events,
                gm_drums::SNARE,
                BACKBONE_VELOCITY,
                measure_start + 2 * ticks_per_beat as u64,
                duration,
                DRUM_CHANNEL,
            );
        }

        let random_hits = rng.gen_range(MIN_RANDOM_HITS..=MAX_RANDOM_HITS);
        for _ in 0..random_hits {
            let pitch = DRUM_NOTES[rng.gen_range(0..DRUM_NOTES.len())];
            // Continuous offset anywhere in the measure, not grid-quantized
            let beat_offset = rng.gen::<f64>() * beats_per_measure as f64;
            let start = measure_start + (beat_offset * ticks_per_beat as f64) as u64;
            let velocity = rng.gen_range(MIN_HIT_VELOCITY..=MAX_HIT_VELOCITY);
            push_note(&mut events, pitch, velocity, start, duration, DRUM_CHANNEL);
        }
    }

    events
}
