//! Per-tick net change in occupancy.

use crate::Entity;

/// Signed deltas indexed by tick: `+1` for every arrival at that tick, `-1`
/// for every service completion.
///
/// # Sizing
///
/// The array is `last_start + max_service + 1` long, which is where the
/// reference model ends its trace.  A waiting entity can start one tick after
/// the last entity does, so the length is widened to `max_end + 1` whenever
/// that would otherwise overflow.  Either way every completion has a slot and
/// the deltas sum to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyTimeline {
    deltas: Vec<i64>,
}

impl OccupancyTimeline {
    /// Build the timeline from placed entities, given in arrival order.
    ///
    /// An empty slice yields an empty timeline.
    pub fn build(entities: &[Entity]) -> Self {
        let Some(last) = entities.last() else {
            return Self { deltas: Vec::new() };
        };

        let max_service = entities.iter().map(|e| e.service).max().unwrap_or(0);
        let max_end = entities.iter().map(|e| e.end).max().unwrap_or(last.end);
        let horizon = (last.start + max_service).max(max_end);

        let mut deltas = vec![0i64; horizon.index() + 1];
        for e in entities {
            deltas[e.arrival.index()] += 1;
            deltas[e.end.index()] -= 1;
        }
        Self { deltas }
    }

    #[inline]
    pub fn deltas(&self) -> &[i64] {
        &self.deltas
    }

    /// Number of ticks covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Sum of all deltas.  Zero for any timeline built from entities.
    pub fn total(&self) -> i64 {
        self.deltas.iter().sum()
    }
}
