// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use swirl::config::{ensure_mid_extension, GenParams, ParamsFile};
use swirl::{compose, write_midi};

fn print_usage() {
    println!("SWIRL - Chaotic MIDI Composition Generator");
    println!();
    println!("Usage: swirl [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --measures <N>       Number of measures (default: random 4-16)");
    println!("  --beats <N>          Beats per measure (default: random 3-9)");
    println!("  --tempo <BPM>        Tempo in BPM (default: random 60-180)");
    println!("  --output <FILE>      Output file (.mid appended if absent)");
    println!("  --seed <N>           RNG seed for a reproducible piece");
    println!("  --config <FILE>      YAML parameter file");
    println!("  --help               Show this help message");
    println!();
    println!("Malformed numeric values fall back to their randomized defaults.");
}

/// Parse a numeric flag value; `None` keeps the randomized default
fn parse_or_default<T: std::str::FromStr>(flag: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            eprintln!("Ignoring malformed {} value '{}', using a random default", flag, value);
            None
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let mut measures: Option<u32> = None;
    let mut beats: Option<u32> = None;
    let mut tempo: Option<u32> = None;
    let mut output: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--measures" | "--beats" | "--tempo" | "--output" | "--seed" | "--config" => {
                i += 1;
                let value = match args.get(i) {
                    Some(value) => value,
                    None => {
                        eprintln!("Error: {} requires a value", flag);
                        print_usage();
                        std::process::exit(1);
                    }
                };
                match flag {
                    "--measures" => measures = parse_or_default(flag, value),
                    "--beats" => beats = parse_or_default(flag, value),
                    "--tempo" => tempo = parse_or_default(flag, value),
                    "--output" => output = Some(value.clone()),
                    "--seed" => seed = parse_or_default(flag, value),
                    _ => config_path = Some(value.clone()),
                }
            }
            _ => {
                eprintln!("Unknown option: {}", flag);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // The seed governs every random choice, parameters included
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut params = GenParams::randomized(&mut rng);
    if let Some(path) = config_path {
        let file = ParamsFile::load(&path)?;
        if seed.is_none() {
            if let Some(file_seed) = file.seed {
                // A file-supplied seed restarts the stream deterministically
                rng = StdRng::seed_from_u64(file_seed);
                params = GenParams::randomized(&mut rng);
            }
        }
        params.apply_file(&file);
    }
    if let Some(measures) = measures {
        params.measures = measures;
    }
    if let Some(beats) = beats {
        params.beats_per_measure = beats;
    }
    if let Some(tempo) = tempo {
        params.tempo_bpm = tempo;
    }
    if let Some(ref output) = output {
        params.output = ensure_mid_extension(output);
    }
    params.seed = seed.or(params.seed);
    let params = params.sanitize(&mut rng);

    println!("SWIRL - Chaotic MIDI Composition Generator");
    println!(
        "Generating {} measures at {} beats per measure, {} BPM...",
        params.measures, params.beats_per_measure, params.tempo_bpm
    );

    let composition = compose(&mut rng, &params);
    write_midi(&composition, &mut rng, &params.output)
        .with_context(|| format!("Failed to write MIDI file: {:?}", params.output))?;

    println!("Chaotic MIDI file created: {}", params.output.display());
    Ok(())
}
