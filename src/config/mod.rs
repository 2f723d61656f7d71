// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generation parameters for SWIRL.
//!
//! Parameters arrive from the command line or an optional YAML file.
//! Every scalar has a randomized default, and out-of-range values fall
//! back to fresh randomized defaults instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default output filename when none is supplied
pub const DEFAULT_OUTPUT: &str = "holy_random.mid";

/// Randomized default range for the measure count
const MEASURE_RANGE: (u32, u32) = (4, 16);
/// Randomized default range for beats per measure
const BEATS_RANGE: (u32, u32) = (3, 9);
/// Randomized default range for the tempo
const TEMPO_RANGE: (u32, u32) = (60, 180);

/// Hard bounds accepted from user input
const MAX_MEASURES: u32 = 4096;
const MAX_BEATS: u32 = 32;
const MAX_TEMPO: u32 = 960;

/// A parameter rejected by validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("measure count {0} is out of range (1-{MAX_MEASURES})")]
    MeasuresOutOfRange(u32),
    #[error("beats per measure {0} is out of range (1-{MAX_BEATS})")]
    BeatsOutOfRange(u32),
    #[error("tempo {0} is out of range (1-{MAX_TEMPO} BPM)")]
    TempoOutOfRange(u32),
}

/// Optional parameter file contents; any omitted field keeps its
/// randomized default
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParamsFile {
    #[serde(default)]
    pub measures: Option<u32>,
    #[serde(default)]
    pub beats_per_measure: Option<u32>,
    #[serde(default)]
    pub tempo: Option<u32>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ParamsFile {
    /// Load a parameter file from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a parameter file from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }
}

/// Resolved generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenParams {
    /// Number of measures (one chord per measure)
    pub measures: u32,
    /// Beats per measure
    pub beats_per_measure: u32,
    /// Tempo in beats per minute
    pub tempo_bpm: u32,
    /// Output file path
    pub output: PathBuf,
    /// Seed for deterministic replay, if any
    pub seed: Option<u64>,
}

impl GenParams {
    /// Build parameters with every scalar randomized
    pub fn randomized(rng: &mut StdRng) -> Self {
        Self {
            measures: rng.gen_range(MEASURE_RANGE.0..=MEASURE_RANGE.1),
            beats_per_measure: rng.gen_range(BEATS_RANGE.0..=BEATS_RANGE.1),
            tempo_bpm: rng.gen_range(TEMPO_RANGE.0..=TEMPO_RANGE.1),
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }

    /// Overlay values from a parameter file
    pub fn apply_file(&mut self, file: &ParamsFile) {
        if let Some(measures) = file.measures {
            self.measures = measures;
        }
        if let Some(beats) = file.beats_per_measure {
            self.beats_per_measure = beats;
        }
        if let Some(tempo) = file.tempo {
            self.tempo_bpm = tempo;
        }
        if let Some(ref output) = file.output {
            self.output = ensure_mid_extension(output);
        }
        if let Some(seed) = file.seed {
            self.seed = Some(seed);
        }
    }

    /// Check all scalars against the accepted bounds
    pub fn validate(&self) -> std::result::Result<(), ParamsError> {
        if self.measures == 0 || self.measures > MAX_MEASURES {
            return Err(ParamsError::MeasuresOutOfRange(self.measures));
        }
        if self.beats_per_measure == 0 || self.beats_per_measure > MAX_BEATS {
            return Err(ParamsError::BeatsOutOfRange(self.beats_per_measure));
        }
        if self.tempo_bpm == 0 || self.tempo_bpm > MAX_TEMPO {
            return Err(ParamsError::TempoOutOfRange(self.tempo_bpm));
        }
        Ok(())
    }

    /// Replace any out-of-range scalar with a fresh randomized default.
    ///
    /// Bad input is never fatal; it degrades to the same fallback used
    /// when the value was omitted entirely.
    pub fn sanitize(mut self, rng: &mut StdRng) -> Self {
        while let Err(error) = self.validate() {
            warn!(%error, "falling back to a randomized default");
            match error {
                ParamsError::MeasuresOutOfRange(_) => {
                    self.measures = rng.gen_range(MEASURE_RANGE.0..=MEASURE_RANGE.1);
                }
                ParamsError::BeatsOutOfRange(_) => {
                    self.beats_per_measure = rng.gen_range(BEATS_RANGE.0..=BEATS_RANGE.1);
                }
                ParamsError::TempoOutOfRange(_) => {
                    self.tempo_bpm = rng.gen_range(TEMPO_RANGE.0..=TEMPO_RANGE.1);
                }
            }
        }
        self
    }
}

/// Append the `.mid` extension when the name lacks it
pub fn ensure_mid_extension(name: &str) -> PathBuf {
    if name.to_lowercase().ends_with(".mid") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}.mid", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_randomized_defaults_in_range() {
        let mut rng = StdRng::seed_from_u64(40);
        for _ in 0..50 {
            let params = GenParams::randomized(&mut rng);
            assert!((4..=16).contains(&params.measures));
            assert!((3..=9).contains(&params.beats_per_measure));
            assert!((60..=180).contains(&params.tempo_bpm));
            assert_eq!(params.output, PathBuf::from(DEFAULT_OUTPUT));
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn test_file_overlay() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut params = GenParams::randomized(&mut rng);
        let file = ParamsFile {
            measures: Some(12),
            beats_per_measure: None,
            tempo: Some(96),
            output: Some("cosmic".to_string()),
            seed: Some(7),
        };
        let beats_before = params.beats_per_measure;
        params.apply_file(&file);

        assert_eq!(params.measures, 12);
        assert_eq!(params.beats_per_measure, beats_before);
        assert_eq!(params.tempo_bpm, 96);
        assert_eq!(params.output, PathBuf::from("cosmic.mid"));
        assert_eq!(params.seed, Some(7));
    }

    #[test]
    fn test_yaml_parsing() {
        let file = ParamsFile::from_yaml("measures: 8\ntempo: 140\n").unwrap();
        assert_eq!(file.measures, Some(8));
        assert_eq!(file.tempo, Some(140));
        assert_eq!(file.beats_per_measure, None);

        assert!(ParamsFile::from_yaml("measures: [not a number]").is_err());
    }

    #[test]
    fn test_validation_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut params = GenParams::randomized(&mut rng);

        params.tempo_bpm = 0;
        assert_eq!(params.validate(), Err(ParamsError::TempoOutOfRange(0)));

        params.tempo_bpm = 120;
        params.beats_per_measure = 33;
        assert_eq!(params.validate(), Err(ParamsError::BeatsOutOfRange(33)));

        params.beats_per_measure = 4;
        params.measures = 0;
        assert_eq!(params.validate(), Err(ParamsError::MeasuresOutOfRange(0)));
    }

    #[test]
    fn test_sanitize_replaces_bad_scalars() {
        let mut rng = StdRng::seed_from_u64(43);
        let mut params = GenParams::randomized(&mut rng);
        params.tempo_bpm = 0;
        params.measures = 100_000;

        let params = params.sanitize(&mut rng);
        assert!(params.validate().is_ok());
        assert!((60..=180).contains(&params.tempo_bpm));
        assert!((4..=16).contains(&params.measures));
    }

    #[test]
    fn test_mid_extension() {
        assert_eq!(ensure_mid_extension("song"), PathBuf::from("song.mid"));
        assert_eq!(ensure_mid_extension("song.mid"), PathBuf::from("song.mid"));
        assert_eq!(ensure_mid_extension("SONG.MID"), PathBuf::from("SONG.MID"));
    }
}
