//! Run configuration.

use crate::error::{MmsError, MmsResult, check_rate};
use crate::Rounding;

/// Parameters of one M/M/s experiment.
///
/// Typically built in code via [`SimConfig::reference`] and struct-update
/// syntax, or loaded from JSON by the application crate (with the `serde`
/// feature).  Each config with a given `server_count` is an independent,
/// freshly seeded experiment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of homogeneous servers `s`.  Must be ≥ 1.
    pub server_count: u32,

    /// Arrival rate λ, entities per tick.
    pub arrival_rate: f64,

    /// Per-server service rate ν, entities per tick.
    pub service_rate: f64,

    /// Number of entities `N` to simulate.  Must be ≥ 1.
    pub entity_count: u32,

    /// Maximum tolerable number of entities in the system.  Occupancy at or
    /// above `queue_length_limit + 1` counts as a violation.
    pub queue_length_limit: u32,

    /// Largest acceptable violation fraction.  Default: 0.05.
    pub target_probability: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// How continuous variates become whole ticks.
    pub rounding: Rounding,
}

impl SimConfig {
    /// The reference scenario: 4 arrivals per minute, 0.25 services per
    /// minute per server, 1 000 customers, at most 50 in the system 95 % of
    /// the time, on 17 servers.  One tick is one second.
    pub fn reference() -> Self {
        Self {
            server_count:       17,
            arrival_rate:       4.0 / 60.0,
            service_rate:       0.25 / 60.0,
            entity_count:       1_000,
            queue_length_limit: 50,
            target_probability: 0.05,
            seed:               0,
            rounding:           Rounding::Ceil,
        }
    }

    /// Occupancy level `P` that counts as a violation.
    #[inline]
    pub fn threshold(&self) -> u32 {
        self.queue_length_limit + 1
    }

    /// Offered load `λ / ν` in Erlangs.
    #[inline]
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Check every parameter.  Called once before any event processing.
    pub fn validate(&self) -> MmsResult<()> {
        if self.server_count < 1 {
            return Err(MmsError::invalid("server_count", "must be at least 1"));
        }
        if self.entity_count < 1 {
            return Err(MmsError::invalid("entity_count", "must be at least 1"));
        }
        check_rate("arrival_rate", self.arrival_rate)?;
        check_rate("service_rate", self.service_rate)?;
        if !(0.0..=1.0).contains(&self.target_probability) {
            return Err(MmsError::invalid(
                "target_probability",
                format!("must lie in [0, 1], got {}", self.target_probability),
            ));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::reference()
    }
}
