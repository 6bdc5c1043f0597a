//! Discrete simulation time.
//!
//! # Design
//!
//! Every instant in a run is a whole `Tick` (one second in the reference
//! scenario).  Variates are drawn as continuous seconds and quantized once,
//! through a [`Rounding`] policy, before any bookkeeping happens.  After
//! that point all arithmetic is exact integer arithmetic, which is what lets
//! the occupancy timeline be a plain array indexed by tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Cast to `usize` for indexing a per-tick array.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Rounding ──────────────────────────────────────────────────────────────────

/// How a continuous duration in seconds becomes a whole number of ticks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Round up.  A customer never finishes early.
    #[default]
    Ceil,
    /// Round half away from zero.
    Nearest,
}

impl Rounding {
    /// Quantize `secs` to ticks.  Negative, NaN and infinite inputs map to 0.
    #[inline]
    pub fn quantize(self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 0;
        }
        let q = match self {
            Rounding::Ceil    => secs.ceil(),
            Rounding::Nearest => secs.round(),
        };
        q as u64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rounding::Ceil    => "ceil",
            Rounding::Nearest => "nearest",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
