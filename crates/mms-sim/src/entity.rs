//! The per-customer record produced by a run.

use mms_core::{EntityId, ServerId, Tick};

/// One simulated customer.
///
/// Durations are in whole ticks.  All fields are fixed once the allocator has
/// placed the entity; nothing mutates an `Entity` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    pub id:      EntityId,
    /// Gap since the previous arrival.
    pub gap:     u64,
    /// Service duration.
    pub service: u64,
    pub arrival: Tick,
    /// When a server started on this entity.  Equal to `arrival` unless it
    /// had to wait.
    pub start:   Tick,
    /// `start + service`.
    pub end:     Tick,
    pub server:  ServerId,
}

impl Entity {
    /// Ticks spent waiting for a server.
    #[inline]
    pub fn wait(&self) -> u64 {
        self.start - self.arrival
    }

    #[inline]
    pub fn waited(&self) -> bool {
        self.start > self.arrival
    }
}
