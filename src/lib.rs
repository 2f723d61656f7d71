// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SWIRL - Chaotic randomized MIDI composition generator.
//!
//! Generates a multi-track composition (chord progression, bassline,
//! harmonic pad, melody, and drum pattern) from random parameters and
//! serializes it to a Standard MIDI File.

pub mod composition;
pub mod config;
pub mod export;
pub mod generators;
pub mod lsystem;
pub mod music;

pub use composition::{compose, Composition, Part, Track, TICKS_PER_BEAT};
pub use config::GenParams;
pub use export::write_midi;
