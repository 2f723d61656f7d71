// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for SWIRL.
//!
//! This module provides the pitch-class model, modal interval tables,
//! triad construction, and the randomized chord and scale builders.

pub mod chord;
pub mod scale;

pub use chord::{ChordProgression, Triad, TriadQuality};
pub use scale::{midi_note, MelodyScale, MidiNote, Mode, Note};
