//! Samples and the dataset they are collected into.

use std::path::{Path, PathBuf};

/// One `(timestamp, rtt)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Seconds.
    pub timestamp: f64,
    /// Round-trip time in milliseconds.
    pub rtt: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(timestamp: f64, rtt: f64) -> Self {
        Self { timestamp, rtt }
    }
}

/// Samples in file order, kept as two parallel sequences.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Path to the source file.
    pub file_path: PathBuf,
    timestamps: Vec<f64>,
    rtts: Vec<f64>,
}

impl Dataset {
    /// Create an empty dataset for the given source.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            timestamps: Vec::new(),
            rtts: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.timestamps.push(sample.timestamp);
        self.rtts.push(sample.rtt);
    }

    /// Source path.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the dataset has no samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Timestamps in seconds.
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// RTTs in milliseconds.
    pub fn rtts(&self) -> &[f64] {
        &self.rtts
    }

    /// Iterate over samples in file order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.timestamps
            .iter()
            .zip(&self.rtts)
            .map(|(&timestamp, &rtt)| Sample { timestamp, rtt })
    }

    /// `(timestamp, rtt)` pairs, ready for charting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples().map(|s| (s.timestamp, s.rtt)).collect()
    }

    /// RTT statistics over the finite samples, if any.
    pub fn summary(&self) -> Option<RttSummary> {
        let finite = self.rtts.iter().copied().filter(|v| v.is_finite());
        let (count, sum, min, max) = finite.fold(
            (0usize, 0.0f64, f64::INFINITY, f64::NEG_INFINITY),
            |(n, sum, min, max), v| (n + 1, sum + v, min.min(v), max.max(v)),
        );

        if count == 0 {
            return None;
        }

        Some(RttSummary {
            count,
            min,
            mean: sum / count as f64,
            max,
        })
    }
}

/// RTT statistics shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RttSummary {
    /// Number of finite RTT values.
    pub count: usize,
    /// Smallest RTT.
    pub min: f64,
    /// Arithmetic mean RTT.
    pub mean: f64,
    /// Largest RTT.
    pub max: f64,
}
