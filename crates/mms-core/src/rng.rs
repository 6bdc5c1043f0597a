//! Deterministic RNG wrapper and the exponential variate generator.
//!
//! # Determinism strategy
//!
//! A run owns one root `SimRng` seeded from `SimConfig::seed`.  The arrival
//! and service streams are derived from it as children 0 and 1:
//!
//!   child_seed = root.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! so the two streams never share state, and the interarrival sequence is
//! the same whatever the server count.  That last property is what makes
//! "same seed, more servers" a like-for-like comparison.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::error::{MmsResult, check_rate};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG.
///
/// Never shared between runs.  Parallel sweeps give each run its own
/// `SimRng` seeded from the run's config.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }
}

// ── VariateSource ─────────────────────────────────────────────────────────────

/// Supplies the two duration streams a run consumes, in seconds.
///
/// The simulator calls `interarrival_secs` and `service_secs` exactly
/// `entity_count` times each, all interarrival gaps first.
pub trait VariateSource {
    /// Gap since the previous arrival (or since time zero for the first).
    fn interarrival_secs(&mut self) -> f64;

    /// Service duration of the next entity.
    fn service_secs(&mut self) -> f64;
}

/// Exponential interarrival and service durations from two independent,
/// seeded streams.
pub struct ExpVariates {
    arrivals:     SimRng,
    services:     SimRng,
    arrival_dist: Exp<f64>,
    service_dist: Exp<f64>,
}

impl ExpVariates {
    /// Build both streams from `seed`.  Rates are events per second.
    pub fn new(seed: u64, arrival_rate: f64, service_rate: f64) -> MmsResult<Self> {
        check_rate("arrival_rate", arrival_rate)?;
        check_rate("service_rate", service_rate)?;

        let mut root = SimRng::new(seed);
        let arrivals = root.child(0);
        let services = root.child(1);

        let arrival_dist = Exp::new(arrival_rate)
            .map_err(|e| crate::MmsError::invalid("arrival_rate", e.to_string()))?;
        let service_dist = Exp::new(service_rate)
            .map_err(|e| crate::MmsError::invalid("service_rate", e.to_string()))?;

        Ok(Self { arrivals, services, arrival_dist, service_dist })
    }
}

impl VariateSource for ExpVariates {
    #[inline]
    fn interarrival_secs(&mut self) -> f64 {
        self.arrivals.sample(&self.arrival_dist)
    }

    #[inline]
    fn service_secs(&mut self) -> f64 {
        self.services.sample(&self.service_dist)
    }
}
