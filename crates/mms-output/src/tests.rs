//! Integration tests for mms-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EntityRow, SummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn entity_row(entity_id: u32) -> EntityRow {
        EntityRow {
            server_count: 2,
            entity_id,
            gap:          1,
            service:      5,
            arrival:      entity_id as u64 + 1,
            start:        entity_id as u64 + 1,
            end:          entity_id as u64 + 6,
            server:       entity_id % 2,
        }
    }

    fn summary_row() -> SummaryRow {
        SummaryRow {
            server_count:       17,
            seed:               3,
            arrival_rate:       0.5,
            service_rate:       0.25,
            threshold:          51,
            violation_tally:    12,
            simulated_duration: 400,
            violation_fraction: 0.03,
            meets_spec:         true,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("entities.csv").exists());
        assert!(dir.path().join("occupancy.csv").exists());
        assert!(dir.path().join("summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["server_count", "tick", "occupancy"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("entities.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["server_count", "entity_id", "gap", "service", "arrival", "start", "end", "server"]
        );
    }

    #[test]
    fn csv_occupancy_one_row_per_tick() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_occupancy(15, &[0, 1, 2, 1, 0]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[2][0], "15"); // server_count
        assert_eq!(&rows[2][1], "2");  // tick
        assert_eq!(&rows[2][2], "2");  // occupancy
    }

    #[test]
    fn csv_entities_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_entities(&[entity_row(0), entity_row(1), entity_row(2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("entities.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][1], "1"); // entity_id
        assert_eq!(&rows[1][6], "7"); // end
        assert_eq!(&rows[1][7], "1"); // server
    }

    #[test]
    fn csv_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "17");
        assert_eq!(&rows[0][5], "12");
        assert_eq!(&rows[0][7], "0.03");
        assert_eq!(&rows[0][8], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_entities(&[]).unwrap();
        w.write_occupancy(1, &[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use mms_core::SimConfig;
        use mms_sim::SimBuilder;

        use crate::observer::RunOutputObserver;

        let config = SimConfig {
            server_count: 2,
            entity_count: 4,
            queue_length_limit: 2,
            ..SimConfig::reference()
        };
        let sim = SimBuilder::new(config)
            .samples(vec![1, 1, 1, 1], vec![5, 5, 5, 5])
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = RunOutputObserver::new(writer);
        let run = sim.run(&mut obs).unwrap();
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let occupancy: Vec<u32> = rdr
            .records()
            .map(|r| r.unwrap()[2].parse().unwrap())
            .collect();
        assert_eq!(occupancy, run.report.occupancy_series);

        let mut rdr = csv::Reader::from_path(dir.path().join("entities.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][5], "4"); // violation_tally
        assert_eq!(&rows[0][6], "14"); // simulated_duration
    }

    #[test]
    fn observer_without_entities_skips_entity_rows() {
        use mms_core::SimConfig;
        use mms_sim::{SimBuilder, sweep_servers};

        use crate::observer::RunOutputObserver;

        let dir = tmp();
        let mut obs = RunOutputObserver::new(CsvWriter::new(dir.path()).unwrap()).without_entities();

        let base = SimConfig { entity_count: 50, seed: 1, ..SimConfig::reference() };
        for servers in [17, 15] {
            let sim = SimBuilder::new(SimConfig { server_count: servers, ..base.clone() })
                .build()
                .unwrap();
            sim.run(&mut obs).unwrap();
        }
        obs.finish().unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("entities.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let counts: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(counts, ["17", "15"]);

        // Same data a sweep would produce.
        let reports = sweep_servers(&base, &[17, 15]).unwrap();
        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let total_rows = rdr.records().count() as u64;
        assert_eq!(
            total_rows,
            reports.iter().map(|r| r.simulated_duration).sum::<u64>()
        );
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{EntityRow, SummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_occupancy_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_occupancy(17, &[0, 1, 1, 0]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (count, peak): (i64, i64) = conn
            .query_row(
                "SELECT COUNT(*), MAX(occupancy) FROM occupancy WHERE server_count = 17",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(count, 4);
        assert_eq!(peak, 1);
    }

    #[test]
    fn sqlite_entities_round_trip() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_entities(&[EntityRow {
            server_count: 3, entity_id: 7, gap: 2, service: 9,
            arrival: 40, start: 44, end: 53, server: 2,
        }]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (start, end, server): (i64, i64, i64) = conn
            .query_row(
                "SELECT start, end_tick, server FROM entities WHERE entity_id = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((start, end, server), (44, 53, 2));
    }

    #[test]
    fn sqlite_summary_meets_spec_as_integer() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&SummaryRow {
            server_count: 15, seed: 0, arrival_rate: 1.0, service_rate: 0.1,
            threshold: 51, violation_tally: 90, simulated_duration: 100,
            violation_fraction: 0.9, meets_spec: false,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (meets, fraction): (i64, f64) = conn
            .query_row(
                "SELECT meets_spec, violation_fraction FROM summaries WHERE server_count = 15",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(meets, 0);
        assert!((fraction - 0.9).abs() < 1e-12);
    }
}
