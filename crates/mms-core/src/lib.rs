//! `mms-core` — foundational types for the `mms` M/M/s queueing simulator.
//!
//! This crate is a dependency of every other `mms-*` crate.  It intentionally
//! has no `mms-*` dependencies and minimal external ones (`rand`,
//! `rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `ServerId`                                |
//! | [`time`]        | `Tick`, `Rounding`                                    |
//! | [`rng`]         | `SimRng`, `VariateSource`, `ExpVariates`              |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `MmsError`, `MmsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{MmsError, MmsResult};
pub use ids::{EntityId, ServerId};
pub use rng::{ExpVariates, SimRng, VariateSource};
pub use time::{Rounding, Tick};
