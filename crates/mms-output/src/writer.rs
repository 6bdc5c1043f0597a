//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EntityRow, OutputResult, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// One writer may receive several runs (e.g. a sweep over server counts);
/// rows carry the server count so they stay distinguishable.
pub trait OutputWriter {
    /// Write a batch of placed entities.
    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()>;

    /// Write the occupancy series of one run, one row per tick.
    fn write_occupancy(&mut self, server_count: u32, series: &[u32]) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
