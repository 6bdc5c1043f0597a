//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `entities.csv`
//! - `occupancy.csv`
//! - `summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EntityRow, OutputResult, SummaryRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    entities:  Writer<File>,
    occupancy: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut entities = Writer::from_path(dir.join("entities.csv"))?;
        entities.write_record([
            "server_count", "entity_id", "gap", "service", "arrival", "start", "end", "server",
        ])?;

        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(["server_count", "tick", "occupancy"])?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record([
            "server_count",
            "seed",
            "arrival_rate",
            "service_rate",
            "threshold",
            "violation_tally",
            "simulated_duration",
            "violation_fraction",
            "meets_spec",
        ])?;

        Ok(Self {
            entities,
            occupancy,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()> {
        for row in rows {
            self.entities.write_record(&[
                row.server_count.to_string(),
                row.entity_id.to_string(),
                row.gap.to_string(),
                row.service.to_string(),
                row.arrival.to_string(),
                row.start.to_string(),
                row.end.to_string(),
                row.server.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_occupancy(&mut self, server_count: u32, series: &[u32]) -> OutputResult<()> {
        let s = server_count.to_string();
        for (tick, n) in series.iter().enumerate() {
            self.occupancy
                .write_record(&[s.clone(), tick.to_string(), n.to_string()])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.server_count.to_string(),
            row.seed.to_string(),
            row.arrival_rate.to_string(),
            row.service_rate.to_string(),
            row.threshold.to_string(),
            row.violation_tally.to_string(),
            row.simulated_duration.to_string(),
            row.violation_fraction.to_string(),
            (row.meets_spec as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.entities.flush()?;
        self.occupancy.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
