// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! L-system string rewriting for pseudo-rhythmic duration sequences.
//!
//! A tiny expander over a two-symbol grammar: each pass replaces every
//! symbol that has a rule with its replacement, in order. The expanded
//! string maps to note durations consumed cyclically by the melody
//! generator.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;

/// Hard cap on rewrite passes. Expansion length grows by a Fibonacci-like
/// recurrence, so unbounded depth would exhaust memory.
pub const MAX_DEPTH: u32 = 8;

/// Duration in beats for the 'A' symbol (quarter note)
const QUARTER_BEATS: f64 = 1.0;
/// Duration in beats for the 'B' symbol (eighth note)
const EIGHTH_BEATS: f64 = 0.5;

/// Shallowest expansion depth the duration builder will pick
const MIN_RANDOM_DEPTH: u32 = 2;
/// Deepest expansion depth the duration builder will pick
const MAX_RANDOM_DEPTH: u32 = 5;

/// Expand `axiom` by applying `rules` for `depth` passes.
///
/// Symbols without a rule pass through unchanged. Depth is capped at
/// [`MAX_DEPTH`].
pub fn expand(axiom: &str, rules: &HashMap<char, &str>, depth: u32) -> String {
    let mut current = axiom.to_string();
    for _ in 0..depth.min(MAX_DEPTH) {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            match rules.get(&symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        current = next;
    }
    current
}

/// The fixed duration grammar: A -> "AB", B -> "A"
fn duration_rules() -> HashMap<char, &'static str> {
    let mut rules = HashMap::new();
    rules.insert('A', "AB");
    rules.insert('B', "A");
    rules
}

/// Expand the duration grammar at the given depth and map each symbol to
/// a duration in beats (A = quarter, B = eighth).
pub fn durations_at_depth(depth: u32) -> Vec<f64> {
    expand("A", &duration_rules(), depth)
        .chars()
        .map(|symbol| {
            if symbol == 'A' {
                QUARTER_BEATS
            } else {
                EIGHTH_BEATS
            }
        })
        .collect()
}

/// Generate a duration sequence at a random depth in [2, 5]
pub fn duration_sequence(rng: &mut StdRng) -> Vec<f64> {
    durations_at_depth(rng.gen_range(MIN_RANDOM_DEPTH..=MAX_RANDOM_DEPTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_expansion_passes() {
        let rules = duration_rules();
        assert_eq!(expand("A", &rules, 0), "A");
        assert_eq!(expand("A", &rules, 1), "AB");
        assert_eq!(expand("A", &rules, 2), "ABA");
        assert_eq!(expand("A", &rules, 3), "ABAAB");
        assert_eq!(expand("A", &rules, 4), "ABAABABA");
    }

    #[test]
    fn test_fibonacci_lengths() {
        // len(d) = len(d-1) + len(d-2), len(0) = 1, len(1) = 2
        let rules = duration_rules();
        let lengths: Vec<usize> = (0..MAX_DEPTH)
            .map(|d| expand("A", &rules, d).len())
            .collect();
        assert_eq!(lengths[0], 1);
        assert_eq!(lengths[1], 2);
        for d in 2..lengths.len() {
            assert_eq!(lengths[d], lengths[d - 1] + lengths[d - 2]);
        }
    }

    #[test]
    fn test_unruled_symbols_pass_through() {
        let mut rules = HashMap::new();
        rules.insert('X', "XY");
        assert_eq!(expand("XZ", &rules, 2), "XYYZ");
    }

    #[test]
    fn test_depth_is_capped() {
        let rules = duration_rules();
        assert_eq!(expand("A", &rules, 100), expand("A", &rules, MAX_DEPTH));
    }

    #[test]
    fn test_duration_mapping() {
        // Depth 2: "ABA" -> quarter, eighth, quarter
        assert_eq!(durations_at_depth(2), vec![1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_random_sequence_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let durations = duration_sequence(&mut rng);
            // Depth 2 expands to 3 symbols, depth 5 to 13
            assert!(durations.len() >= 3 && durations.len() <= 13);
            assert!(durations.iter().all(|&d| d == 1.0 || d == 0.5));
        }
    }
}
