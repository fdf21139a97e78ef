// src/quiz/shuffle.rs

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

/// How option lists are put in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Fisher-Yates. Every permutation is equally likely.
    Uniform,
    /// Insertion sort driven by a coin-flip comparator.
    /// Not uniform: later items favour the end of the list.
    Comparator,
}

impl FromStr for ShuffleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(ShuffleMode::Uniform),
            "comparator" | "biased" => Ok(ShuffleMode::Comparator),
            other => Err(format!("unknown shuffle mode '{}'", other)),
        }
    }
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleMode::Uniform => write!(f, "uniform"),
            ShuffleMode::Comparator => write!(f, "comparator"),
        }
    }
}

/// Returns a permutation of `items`.
pub fn shuffle<T, R: Rng + ?Sized>(mut items: Vec<T>, mode: ShuffleMode, rng: &mut R) -> Vec<T> {
    match mode {
        ShuffleMode::Uniform => {
            items.shuffle(rng);
            items
        }
        ShuffleMode::Comparator => comparator_shuffle(items, rng),
    }
}

// `slice::sort_by` may panic on a comparator that is not a total order,
// so the random comparisons drive a binary insertion sort instead.
fn comparator_shuffle<T, R: Rng + ?Sized>(items: Vec<T>, rng: &mut R) -> Vec<T> {
    let mut placed: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let (mut lo, mut hi) = (0, placed.len());
        while lo < hi {
            let mid = (lo + hi) / 2;
            if rng.gen_bool(0.5) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        placed.insert(lo, item);
    }
    placed
}
