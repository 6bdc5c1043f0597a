//! Running occupancy and violation tally.

use crate::OccupancyTimeline;

/// Instantaneous occupancy per tick plus the number of ticks at or above the
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    /// `series[t]` = prefix sum of `timeline[0..=t]`.
    pub series:     Vec<u32>,
    /// Ticks where `series[t] >= threshold`.
    pub violations: u64,
    pub threshold:  u32,
}

impl Occupancy {
    /// `violations / series.len()`; 0 for an empty series.
    pub fn violation_fraction(&self) -> f64 {
        if self.series.is_empty() {
            return 0.0;
        }
        self.violations as f64 / self.series.len() as f64
    }

    /// Largest occupancy observed.
    pub fn peak(&self) -> u32 {
        self.series.iter().copied().max().unwrap_or(0)
    }
}

/// Single forward pass over `timeline`.
pub fn integrate(timeline: &OccupancyTimeline, threshold: u32) -> Occupancy {
    let mut series = Vec::with_capacity(timeline.len());
    let mut violations = 0u64;
    let mut n: i64 = 0;

    for &delta in timeline.deltas() {
        n += delta;
        // No entity departs before it arrives, so the prefix sum never dips
        // below zero.
        debug_assert!(n >= 0, "occupancy went negative: {n}");
        let occupancy = n.max(0) as u32;
        if occupancy >= threshold {
            violations += 1;
        }
        series.push(occupancy);
    }

    Occupancy { series, violations, threshold }
}
