//! The result of one run, as handed to reporters and writers.

use std::fmt;

/// Summary statistics and occupancy trace of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub arrival_rate:        f64,
    pub service_rate:        f64,
    pub server_count:        u32,
    pub seed:                u64,
    /// Occupancy level counted as a violation (`queue_length_limit + 1`).
    pub threshold:           u32,
    /// Ticks with occupancy `>= threshold`.
    pub violation_tally:     u64,
    /// `violation_tally / simulated_duration`.
    pub violation_fraction:  f64,
    pub target_probability:  f64,
    /// `violation_fraction <= target_probability`.
    pub meets_spec:          bool,
    /// Length of the occupancy trace, in ticks.
    pub simulated_duration:  u64,
    pub peak_occupancy:      u32,
    /// Entities that found every server busy.
    pub waited:              u64,
    /// Occupancy at every tick; `occupancy_series.len() == simulated_duration`.
    pub occupancy_series:    Vec<u32>,
}

/// Ticks per hour when one tick is one second.
const TICKS_PER_HOUR: f64 = 3600.0;

impl Report {
    /// Simulated duration in hours, taking one tick as one second.
    #[inline]
    pub fn simulated_hours(&self) -> f64 {
        self.simulated_duration as f64 / TICKS_PER_HOUR
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "λ = {:.6} /tick, ν = {:.6} /tick, s = {}",
            self.arrival_rate, self.service_rate, self.server_count
        )?;
        writeln!(
            f,
            "{} of {} ticks ({:.2} %) with {} or more in the system (peak {})",
            self.violation_tally,
            self.simulated_duration,
            self.violation_fraction * 100.0,
            self.threshold,
            self.peak_occupancy,
        )?;
        writeln!(
            f,
            "target ≤ {:.2} %: {}",
            self.target_probability * 100.0,
            if self.meets_spec { "met" } else { "NOT met" },
        )?;
        write!(f, "simulated {:.2} h", self.simulated_hours())
    }
}
