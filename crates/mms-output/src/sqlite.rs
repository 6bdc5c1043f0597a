//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `entities`, `occupancy` and `summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EntityRow, OutputResult, SummaryRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS entities (
                 server_count INTEGER NOT NULL,
                 entity_id    INTEGER NOT NULL,
                 gap          INTEGER NOT NULL,
                 service      INTEGER NOT NULL,
                 arrival      INTEGER NOT NULL,
                 start        INTEGER NOT NULL,
                 end_tick     INTEGER NOT NULL,
                 server       INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS occupancy (
                 server_count INTEGER NOT NULL,
                 tick         INTEGER NOT NULL,
                 occupancy    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS summaries (
                 server_count       INTEGER NOT NULL,
                 seed               INTEGER NOT NULL,
                 arrival_rate       REAL    NOT NULL,
                 service_rate       REAL    NOT NULL,
                 threshold          INTEGER NOT NULL,
                 violation_tally    INTEGER NOT NULL,
                 simulated_duration INTEGER NOT NULL,
                 violation_fraction REAL    NOT NULL,
                 meets_spec         INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO entities \
                 (server_count, entity_id, gap, service, arrival, start, end_tick, server) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                // SQLite INTEGER is signed 64-bit; tick counts stay far below i64::MAX.
                stmt.execute(rusqlite::params![
                    row.server_count,
                    row.entity_id,
                    row.gap as i64,
                    row.service as i64,
                    row.arrival as i64,
                    row.start as i64,
                    row.end as i64,
                    row.server,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_occupancy(&mut self, server_count: u32, series: &[u32]) -> OutputResult<()> {
        if series.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO occupancy (server_count, tick, occupancy) VALUES (?1, ?2, ?3)",
            )?;
            for (tick, &n) in series.iter().enumerate() {
                stmt.execute(rusqlite::params![server_count, tick as i64, n])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO summaries \
             (server_count, seed, arrival_rate, service_rate, threshold, \
              violation_tally, simulated_duration, violation_fraction, meets_spec) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.server_count,
                row.seed as i64,
                row.arrival_rate,
                row.service_rate,
                row.threshold,
                row.violation_tally as i64,
                row.simulated_duration as i64,
                row.violation_fraction,
                row.meets_spec as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
