//! `RunOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mms_core::SimConfig;
use mms_sim::{Entity, Report, SimObserver};
use tracing::warn;

use crate::row::{EntityRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes entities, the occupancy series and a summary
/// row to any [`OutputWriter`] backend.
///
/// Entity rows are buffered during the run and flushed in one batch at the
/// end.  Errors from the writer are stored internally because `SimObserver`
/// methods have no return value; check them with
/// [`take_error`][Self::take_error] after the run.  The writer is not
/// finished automatically so one observer can record a whole sweep; call
/// [`finish`][Self::finish] when done.
pub struct RunOutputObserver<W: OutputWriter> {
    writer:         W,
    server_count:   u32,
    pending:        Vec<EntityRow>,
    write_entities: bool,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            server_count:   0,
            pending:        Vec::new(),
            write_entities: true,
            last_error:     None,
        }
    }

    /// Skip per-entity rows; only the series and summary are written.
    pub fn without_entities(mut self) -> Self {
        self.write_entities = false;
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the underlying writer.  Returns the first error seen, if any.
    pub fn finish(&mut self) -> Result<(), OutputError> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RunOutputObserver<W> {
    fn on_run_start(&mut self, config: &SimConfig) {
        self.server_count = config.server_count;
        self.pending.clear();
    }

    fn on_entity(&mut self, entity: &Entity) {
        if self.write_entities {
            self.pending.push(EntityRow::new(self.server_count, entity));
        }
    }

    fn on_run_end(&mut self, report: &Report) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_entities(&rows);
            self.store_err(result);
        }

        let result = self.writer.write_occupancy(report.server_count, &report.occupancy_series);
        self.store_err(result);

        let result = self.writer.write_summary(&SummaryRow::from(report));
        self.store_err(result);
    }
}
