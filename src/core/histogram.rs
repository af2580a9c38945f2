//! Normalized item histograms of a sampled index sequence and their
//! distance to the target distribution.

// pbrt
use crate::core::pbrt::Float;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub label: String,
    /// Count per item divided by the number of draws.
    pub frequencies: Vec<Float>,
}

impl Histogram {
    /// Sum of absolute differences to *target*.
    pub fn l1_distance(&self, target: &[Float]) -> Float {
        self.frequencies
            .iter()
            .zip(target.iter())
            .map(|(f, t)| (f - t).abs())
            .sum()
    }
    /// Largest absolute difference to *target*.
    pub fn max_deviation(&self, target: &[Float]) -> Float {
        self.frequencies
            .iter()
            .zip(target.iter())
            .map(|(f, t)| (f - t).abs())
            .fold(0.0 as Float, Float::max)
    }
}

/// Running per-item counts; snapshots can be taken at any number of
/// draws without storing the sampled sequence.
#[derive(Debug, Clone)]
pub struct HistogramAccumulator {
    counts: Vec<usize>,
    total: usize,
}

impl HistogramAccumulator {
    pub fn new(num_items: usize) -> Self {
        HistogramAccumulator {
            counts: vec![0; num_items],
            total: 0,
        }
    }
    /// Record one draw. Indices outside `[0, num_items)` are ignored.
    pub fn add(&mut self, index: usize) {
        if let Some(c) = self.counts.get_mut(index) {
            *c += 1;
            self.total += 1;
        }
    }
    pub fn snapshot(&self, label: &str) -> Histogram {
        let frequencies: Vec<Float> = if self.total == 0 {
            vec![0.0 as Float; self.counts.len()]
        } else {
            self.counts
                .iter()
                .map(|c| *c as Float / self.total as Float)
                .collect()
        };
        Histogram {
            label: label.to_string(),
            frequencies,
        }
    }
}
