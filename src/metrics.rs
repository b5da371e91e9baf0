//! Per-line measurements and the outlier test used to spot leading prose.
//!
//! Each line is a point `(length, symbol_count)`. List items tend to cluster;
//! an introductory sentence sits far from their centroid. The spread below is
//! `sqrt(sum of squared deviations)` with no division by the line count, and
//! the threshold multiplier is tuned against exactly that value.
use crate::patterns::SymbolClass;
use serde::Serialize;

/// How many spreads away from the centroid the first line must sit to count
/// as leading text.
pub const LEADING_TEXT_SIGMA: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineMetrics {
    /// Character count.
    pub length: usize,
    pub symbol_count: usize,
}

impl LineMetrics {
    pub fn measure(line: &str, symbols: &SymbolClass) -> Self {
        Self {
            length: line.chars().count(),
            symbol_count: symbols.count(line),
        }
    }

    /// Euclidean distance from the centroid `(mean_length, mean_symbol_count)`.
    pub fn distance(&self, profile: &DistanceProfile) -> f64 {
        let dl = self.length as f64 - profile.average_len;
        let ds = self.symbol_count as f64 - profile.average_symbol_cnt;
        (dl * dl + ds * ds).sqrt()
    }
}

/// Centroid and distance spread of the list body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceProfile {
    pub average_len: f64,
    pub average_symbol_cnt: f64,
    pub avg_dist: f64,
    pub dist_std_deviation: f64,
}

impl DistanceProfile {
    /// Build the profile from the body lines (every line but the first).
    ///
    /// Returns `None` for an empty body; the means would be undefined.
    pub fn from_body(body: &[LineMetrics]) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        let count = body.len() as f64;
        let total_len: usize = body.iter().map(|m| m.length).sum();
        let total_symbols: usize = body.iter().map(|m| m.symbol_count).sum();

        let mut profile = Self {
            average_len: total_len as f64 / count,
            average_symbol_cnt: total_symbols as f64 / count,
            avg_dist: 0.0,
            dist_std_deviation: 0.0,
        };

        let distances: Vec<f64> = body.iter().map(|m| m.distance(&profile)).collect();
        profile.avg_dist = distances.iter().sum::<f64>() / count;
        profile.dist_std_deviation = distances
            .iter()
            .map(|d| (d - profile.avg_dist).powi(2))
            .sum::<f64>()
            .sqrt();
        Some(profile)
    }

    pub fn threshold(&self) -> f64 {
        LEADING_TEXT_SIGMA * self.dist_std_deviation
    }

    /// Strictly beyond the threshold.
    pub fn is_outlier(&self, distance: f64) -> bool {
        distance > self.threshold()
    }
}
