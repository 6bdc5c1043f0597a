//! `ServerPool` — assigns each arriving entity to one of `s` servers.
//!
//! # Policy
//!
//! Entities are offered strictly in arrival order.  For each one:
//!
//! ```text
//! free = { k : busy_until[k] <= arrival }
//! if free is non-empty:
//!     server = min(free)                 // lowest index wins
//!     start  = arrival                   // no wait
//! else:
//!     server = first k with busy_until[k] == min(busy_until)
//!     start  = busy_until[server] + 1    // next tick after that completion
//! end = start + service
//! busy_until[server] = end
//! ```
//!
//! The pool starts with every server at `Tick(0)`, so the first entity always
//! finds server 0 free and starts on arrival.
//!
//! The `+ 1` in the wait branch is a quantization artifact: a waiting entity
//! begins one whole tick after the completion it was waiting on.  It is kept
//! so traces stay comparable with runs of the reference model.
//!
//! The queue itself is implicit.  Because entities are offered in arrival
//! order and each waiting entity takes the earliest-freeing server, service
//! is FCFS without ever materializing a wait list.

use mms_core::{ServerId, Tick};

/// Outcome of placing one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub server: ServerId,
    pub start:  Tick,
    pub end:    Tick,
    /// `true` if no server was free at arrival.
    pub waited: bool,
}

/// Per-server availability, indexed by `ServerId`.
#[derive(Debug, Clone)]
pub struct ServerPool {
    busy_until: Vec<Tick>,
}

impl ServerPool {
    /// A pool of `server_count` idle servers.
    ///
    /// # Panics
    /// Panics if `server_count` is zero; callers validate the config first.
    pub fn new(server_count: u32) -> Self {
        assert!(server_count >= 1, "a server pool needs at least one server");
        Self {
            busy_until: vec![Tick::ZERO; server_count as usize],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.busy_until.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.busy_until.is_empty()
    }

    /// The tick at which each server next becomes free.
    #[inline]
    pub fn busy_until(&self) -> &[Tick] {
        &self.busy_until
    }

    /// `true` if `server` has nothing in progress at `at`.
    #[inline]
    pub fn is_free(&self, server: ServerId, at: Tick) -> bool {
        self.busy_until[server.index()] <= at
    }

    /// Place the next entity (in arrival order) and record its completion.
    pub fn assign(&mut self, arrival: Tick, service: u64) -> Assignment {
        let (index, start, waited) = match self.first_free(arrival) {
            Some(k) => (k, arrival, false),
            None => {
                let k = self.earliest_release();
                (k, self.busy_until[k] + 1, true)
            }
        };

        let end = start + service;
        self.busy_until[index] = end;

        Assignment {
            server: ServerId(index as u32),
            start,
            end,
            waited,
        }
    }

    /// Lowest-index server idle at `at`.
    fn first_free(&self, at: Tick) -> Option<usize> {
        self.busy_until.iter().position(|&t| t <= at)
    }

    /// First server (by index) holding the minimum busy-until time.
    fn earliest_release(&self) -> usize {
        let mut best = 0;
        for (k, &t) in self.busy_until.iter().enumerate().skip(1) {
            if t < self.busy_until[best] {
                best = k;
            }
        }
        best
    }
}
