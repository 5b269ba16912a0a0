//! Sample dataset generators for the boundary plot.
//!
//! Both generators take the random source as an argument so tests can drive
//! them with a seeded [`rand::rngs::SmallRng`]; the UI hands in an
//! entropy-seeded one per regeneration.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use rand::Rng;

use crate::util::geometry::PLOT_SIZE;

/// Number of samples produced by each generator.
pub const SAMPLE_COUNT: usize = 20;

/// Side length of each cluster square used by the separable generator.
const CLUSTER_SPREAD: f64 = PLOT_SIZE * 0.15;

/// Binary class of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Signed class value, +1 or -1.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }
}

/// One labeled sample in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

/// Twenty samples drawn uniformly over the plot, each labeled by a fair coin.
///
/// Nothing guards against degenerate draws (all one class, or classes no
/// line can separate); the separable generator is the guided alternative.
pub fn uniform_samples<R: Rng + ?Sized>(rng: &mut R) -> Vec<Sample> {
    (0..SAMPLE_COUNT)
        .map(|_| Sample {
            x: rng.random_range(0.0..PLOT_SIZE),
            y: rng.random_range(0.0..PLOT_SIZE),
            label: if rng.random_bool(0.5) { Label::Positive } else { Label::Negative },
        })
        .collect()
}

/// Two linearly separable clusters of ten samples each: negatives in a square
/// below-left of the plot center, positives in an equal square above-right.
/// The cluster squares never overlap.
pub fn separable_samples<R: Rng + ?Sized>(rng: &mut R) -> Vec<Sample> {
    let midpoint = PLOT_SIZE * 0.5;
    let negative_anchor = midpoint - CLUSTER_SPREAD;
    let positive_anchor = midpoint + (CLUSTER_SPREAD * 0.5);
    (0..SAMPLE_COUNT)
        .map(|i| {
            let (anchor, label) = if i < SAMPLE_COUNT / 2 {
                (negative_anchor, Label::Negative)
            } else {
                (positive_anchor, Label::Positive)
            };
            Sample {
                x: anchor + rng.random_range(0.0..CLUSTER_SPREAD),
                y: anchor + rng.random_range(0.0..CLUSTER_SPREAD),
                label,
            }
        })
        .collect()
}
