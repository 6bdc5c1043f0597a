//! `mms-sim` — the M/M/s occupancy simulator.
//!
//! # Pipeline
//!
//! ```text
//! rates ─▶ gaps, services ─▶ arrival ticks ─▶ server assignment
//!       ─▶ timeline of +1/−1 ─▶ occupancy series ─▶ violation fraction
//! ```
//!
//! | Stage      | Module           | Entry point                         |
//! |------------|------------------|-------------------------------------|
//! | Schedule   | [`arrivals`]     | [`schedule_arrivals`]               |
//! | Allocate   | [`allocator`]    | [`ServerPool::assign`]              |
//! | Timeline   | [`timeline`]     | [`OccupancyTimeline::build`]        |
//! | Integrate  | [`integrator`]   | [`integrate`]                       |
//!
//! [`Sim`] strings the stages together; [`run_simulation`] is the one-call
//! surface.  [`analytic`] holds the closed-form server count the runs are
//! meant to confirm, and [`sweep`] runs several independent experiments.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Sweeps run on Rayon's thread pool.                     |
//! | `serde`    | `Serialize` on `Report` and `Entity`.                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mms_core::SimConfig;
//! use mms_sim::run_simulation;
//!
//! let report = run_simulation(&SimConfig { seed: 7, ..SimConfig::reference() })?;
//! println!("{report}");
//! ```

pub mod allocator;
pub mod analytic;
pub mod arrivals;
pub mod builder;
pub mod entity;
pub mod error;
pub mod integrator;
pub mod observer;
pub mod report;
pub mod sim;
pub mod sweep;
pub mod timeline;


pub use allocator::{Assignment, ServerPool};
pub use arrivals::schedule_arrivals;
pub use builder::SimBuilder;
pub use entity::Entity;
pub use error::{SimError, SimResult};
pub use integrator::{Occupancy, integrate};
pub use observer::{NoopObserver, SimObserver};
pub use report::Report;
pub use sim::{Run, Sim, run_simulation};
pub use sweep::{sweep_seeds, sweep_servers};
pub use timeline::OccupancyTimeline;
