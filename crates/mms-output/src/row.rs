//! Plain data row types written by output backends.

use mms_sim::{Entity, Report};

/// One placed entity, tagged with the server count of its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRow {
    pub server_count: u32,
    pub entity_id:    u32,
    pub gap:          u64,
    pub service:      u64,
    pub arrival:      u64,
    pub start:        u64,
    pub end:          u64,
    pub server:       u32,
}

impl EntityRow {
    pub fn new(server_count: u32, e: &Entity) -> Self {
        Self {
            server_count,
            entity_id: e.id.0,
            gap:       e.gap,
            service:   e.service,
            arrival:   e.arrival.0,
            start:     e.start.0,
            end:       e.end.0,
            server:    e.server.0,
        }
    }
}

/// Scalar outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub server_count:       u32,
    pub seed:               u64,
    pub arrival_rate:       f64,
    pub service_rate:       f64,
    pub threshold:          u32,
    pub violation_tally:    u64,
    pub simulated_duration: u64,
    pub violation_fraction: f64,
    pub meets_spec:         bool,
}

impl From<&Report> for SummaryRow {
    fn from(r: &Report) -> Self {
        Self {
            server_count:       r.server_count,
            seed:               r.seed,
            arrival_rate:       r.arrival_rate,
            service_rate:       r.service_rate,
            threshold:          r.threshold,
            violation_tally:    r.violation_tally,
            simulated_duration: r.simulated_duration,
            violation_fraction: r.violation_fraction,
            meets_spec:         r.meets_spec,
        }
    }
}
