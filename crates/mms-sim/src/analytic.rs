//! Closed-form server count for the occupancy target.
//!
//! Treating the system as a geometric tail with utilization `ρ = λ / (sν)`,
//!
//!   P(more than `limit` in the system) ≈ ρ^limit
//!
//! and requiring `ρ^limit ≤ p` gives
//!
//!   s ≥ λ / (ν · p^(1/limit))
//!
//! For the reference scenario (λ = 4/min, ν = 0.25/min, limit 50, p = 0.05)
//! this is 16.988…, so 17 servers.  The simulator exists to check that claim
//! empirically.

use mms_core::{MmsError, MmsResult, SimConfig};

/// `ρ^limit` for `servers` servers.
pub fn tail_probability(arrival_rate: f64, service_rate: f64, servers: u32, limit: u32) -> f64 {
    let rho = arrival_rate / (servers as f64 * service_rate);
    rho.powi(limit as i32)
}

/// Smallest real `s` satisfying `ρ^limit ≤ target`.
pub fn server_bound(
    arrival_rate:       f64,
    service_rate:       f64,
    queue_length_limit: u32,
    target_probability: f64,
) -> MmsResult<f64> {
    let probe = SimConfig {
        arrival_rate,
        service_rate,
        queue_length_limit,
        target_probability,
        ..SimConfig::reference()
    };
    probe.validate()?;

    if queue_length_limit == 0 {
        return Err(MmsError::InvalidParameter {
            name:   "queue_length_limit",
            reason: "must be at least 1 for a closed-form bound".into(),
        });
    }
    if target_probability <= 0.0 {
        return Err(MmsError::InvalidParameter {
            name:   "target_probability",
            reason: "must be positive for a closed-form bound".into(),
        });
    }

    let root = target_probability.powf(1.0 / queue_length_limit as f64);
    Ok(arrival_rate / (service_rate * root))
}

/// [`server_bound`] rounded up to a whole number of servers.
pub fn min_servers(
    arrival_rate:       f64,
    service_rate:       f64,
    queue_length_limit: u32,
    target_probability: f64,
) -> MmsResult<u32> {
    let bound = server_bound(arrival_rate, service_rate, queue_length_limit, target_probability)?;
    let s = bound.ceil().max(1.0);
    if s > u32::MAX as f64 {
        return Err(MmsError::InvalidParameter {
            name:   "arrival_rate",
            reason: format!("requires {s} servers"),
        });
    }
    Ok(s as u32)
}

/// [`min_servers`] for the rates and target in `config`.
pub fn min_servers_for(config: &SimConfig) -> MmsResult<u32> {
    min_servers(
        config.arrival_rate,
        config.service_rate,
        config.queue_length_limit,
        config.target_probability,
    )
}
