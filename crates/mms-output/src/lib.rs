//! `mms-output` — run output writers for the mms simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                   |
//! |-----------|-------------|-------------------------------------------------|
//! | *(none)*  | CSV         | `entities.csv`, `occupancy.csv`, `summaries.csv` |
//! | `sqlite`  | SQLite      | `output.db`                                     |
//!
//! Both implement [`OutputWriter`] and are driven by [`RunOutputObserver`],
//! which implements `mms_sim::SimObserver`.  The occupancy file is the input
//! to whatever plots the trace.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mms_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{EntityRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
