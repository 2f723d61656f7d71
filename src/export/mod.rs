// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Standard MIDI file serialization.
//!
//! Writes a composition as an SMF Type 1 file: a tempo-only control track
//! followed by one track per part. Each part track opens with a program
//! change, then its events sorted by absolute tick and delta-time encoded.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::composition::{Composition, Part};
use crate::generators::{EventKind, TimedEvent};

/// GM program numbers the pitched tracks draw from: acoustic grand, power
/// guitar, synth strings, trumpet, ocarina, overdriven guitar, rock organ,
/// flute, cello, marimba
pub const RANDOM_INSTRUMENTS: [u8; 10] = [0, 17, 52, 56, 80, 30, 19, 73, 42, 13];

/// Fixed program for the percussion channel
const DRUM_PROGRAM: u8 = 0;

/// Serialize a composition and write it to `path`.
pub fn write_midi<P: AsRef<Path>>(
    composition: &Composition,
    rng: &mut StdRng,
    path: P,
) -> io::Result<()> {
    let mut file = File::create(path.as_ref())?;
    write(composition, rng, &mut file)?;
    debug!(path = %path.as_ref().display(), "wrote MIDI file");
    Ok(())
}

/// Serialize a composition to bytes
pub fn to_bytes(composition: &Composition, rng: &mut StdRng) -> Vec<u8> {
    let mut buffer = Vec::new();
    write(composition, rng, &mut buffer).expect("Write to vec should not fail");
    buffer
}

/// Write MIDI data to a writer
pub fn write<W: Write>(
    composition: &Composition,
    rng: &mut StdRng,
    writer: &mut W,
) -> io::Result<()> {
    let num_tracks = composition.tracks().len() as u16 + 1; // +1 for tempo track

    write_header(writer, num_tracks, composition.ticks_per_beat() as u16)?;
    write_track(writer, &tempo_track_data(composition.tempo_bpm())?)?;

    for track in composition.tracks() {
        let program = match track.part {
            Part::Drums => DRUM_PROGRAM,
            _ => RANDOM_INSTRUMENTS[rng.gen_range(0..RANDOM_INSTRUMENTS.len())],
        };
        write_track(writer, &part_track_data(track.part, &track.events, program)?)?;
    }

    Ok(())
}

/// Build the control track: one set_tempo at time 0
fn tempo_track_data(tempo_bpm: u32) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let microseconds_per_beat = 60_000_000 / tempo_bpm;

    write_variable_length(&mut data, 0)?;
    data.extend_from_slice(&[
        0xFF,
        0x51,
        0x03,
        ((microseconds_per_beat >> 16) & 0xFF) as u8,
        ((microseconds_per_beat >> 8) & 0xFF) as u8,
        (microseconds_per_beat & 0xFF) as u8,
    ]);

    write_end_of_track(&mut data)?;
    Ok(data)
}

/// Build one part's track: program change, then delta-encoded note events
fn part_track_data(part: Part, events: &[TimedEvent], program: u8) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let channel = part.channel();

    write_variable_length(&mut data, 0)?;
    data.extend_from_slice(&[0xC0 | (channel & 0x0F), program & 0x7F]);

    // Stable sort: same-tick events keep their original relative order so
    // a note-off followed by a note-on on one tick encodes deterministically
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.tick);

    let mut last_tick = 0u64;
    for event in &sorted {
        let delta = event.tick.saturating_sub(last_tick);
        write_variable_length(&mut data, delta as u32)?;

        let status = match event.kind {
            EventKind::NoteOn => 0x90,
            EventKind::NoteOff => 0x80,
        };
        data.extend_from_slice(&[
            status | (event.channel & 0x0F),
            event.pitch & 0x7F,
            event.velocity & 0x7F,
        ]);

        last_tick = event.tick;
    }

    write_end_of_track(&mut data)?;
    Ok(data)
}

/// Append the end-of-track meta at delta 0
fn write_end_of_track(data: &mut Vec<u8>) -> io::Result<()> {
    write_variable_length(data, 0)?;
    data.extend_from_slice(&[0xFF, 0x2F, 0x00]);
    Ok(())
}

/// Write the MThd header chunk
fn write_header<W: Write>(writer: &mut W, num_tracks: u16, division: u16) -> io::Result<()> {
    // MThd
    writer.write_all(b"MThd")?;
    // Chunk length (always 6)
    writer.write_all(&[0, 0, 0, 6])?;
    // Format type 1: multiple simultaneous tracks
    writer.write_all(&1u16.to_be_bytes())?;
    // Number of tracks
    writer.write_all(&num_tracks.to_be_bytes())?;
    // Ticks per beat
    writer.write_all(&division.to_be_bytes())?;
    Ok(())
}

/// Write an MTrk chunk
fn write_track<W: Write>(writer: &mut W, track_data: &[u8]) -> io::Result<()> {
    writer.write_all(b"MTrk")?;
    let length = track_data.len() as u32;
    writer.write_all(&length.to_be_bytes())?;
    writer.write_all(track_data)?;
    Ok(())
}

/// Write a MIDI variable-length quantity
fn write_variable_length<W: Write>(writer: &mut W, mut value: u32) -> io::Result<()> {
    let mut bytes = Vec::new();

    bytes.push((value & 0x7F) as u8);
    value >>= 7;

    while value > 0 {
        bytes.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }

    bytes.reverse();
    writer.write_all(&bytes)
}
