//! Integration tests for rst-output.

#[cfg(test)]
mod row_tests {
    use rst_core::{BedId, Cell, JobId, PawnId, Tick};
    use rst_job::{ClamorKind, FailReason, Job, JobEnd, JobEvent, Task, ToilKind};

    use crate::row::{EventRow, JobSummaryRow};

    #[test]
    fn toil_rows_name_the_toil() {
        let row = EventRow::from_event(Tick(4), &JobEvent::ToilEntered { job: JobId(2), toil: ToilKind::GotoBed });
        assert_eq!(row.tick, 4);
        assert_eq!(row.job, Some(2));
        assert_eq!(row.kind, "toil_entered");
        assert_eq!(row.pawn, None);
        assert_eq!(row.detail, ToilKind::GotoBed.as_str());
    }

    #[test]
    fn clamor_rows_carry_source_and_place() {
        let event = JobEvent::Clamor {
            source: PawnId(3),
            at:     Cell::new(1, 2),
            radius: 10.0,
            kind:   ClamorKind::Harm,
        };
        let row = EventRow::from_event(Tick(0), &event);
        assert_eq!(row.job, None);
        assert_eq!(row.pawn, Some(3));
        assert_eq!(row.detail, "harm at (1, 2) radius=10");
    }

    #[test]
    fn summary_keeps_failure_reason() {
        let job = Job::new(JobId(7), Task::new(PawnId(0), PawnId(1), BedId(2), true));
        let row = JobSummaryRow::new(&job, Tick(3), Tick(9), JobEnd::Incompletable(FailReason::TargetGone));
        assert_eq!((row.job_id, row.worker, row.target, row.bed), (7, 0, 1, 2));
        assert_eq!((row.started, row.ended), (3, 9));
        assert_eq!(row.end, JobEnd::Incompletable(FailReason::TargetGone).as_str());
        assert_eq!(row.reason, Some(FailReason::TargetGone.as_str()));

        let ok = JobSummaryRow::new(&job, Tick(3), Tick(9), JobEnd::Succeeded);
        assert_eq!(ok.reason, None);
    }
}

#[cfg(test)]
mod csv_tests {
    use rst_core::{BedId, JobId, PawnId, Tick};
    use rst_job::{Job, JobEnd, JobEvent, Task};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EventRow, JobSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("job_events.csv").exists());
        assert!(dir.path().join("job_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("job_events.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "job", "kind", "pawn", "detail"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("job_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["job_id", "worker", "target", "bed", "started", "ended", "end", "reason"]);
    }

    #[test]
    fn missing_columns_are_blank() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let event = JobEvent::QuestSignal { signal: "bandit.Arrested".into(), subject: PawnId(4) };
        w.write_event(&EventRow::from_event(Tick(12), &event)).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "job_events.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "12");
        assert_eq!(&rows[0][1], "");
        assert_eq!(&rows[0][2], "quest_signal");
        assert_eq!(&rows[0][3], "4");
        assert_eq!(&rows[0][4], "bandit.Arrested");
    }

    #[test]
    fn summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let job = Job::new(JobId(0), Task::new(PawnId(0), PawnId(1), BedId(0), true));
        w.write_summary(&JobSummaryRow::new(&job, Tick(0), Tick(10), JobEnd::Succeeded)).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "job_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][5], "10");
        assert_eq!(&rows[0][6], JobEnd::Succeeded.as_str());
        assert_eq!(&rows[0][7], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use rst_core::{Cell, FactionId, SimConfig};
        use rst_pawn::{Bed, BedStore, LordStore, MentalState, PawnSpec, PawnStoreBuilder, World};
        use rst_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let colony = FactionId(0);
        let config = SimConfig { total_ticks: 30, seed: 1, scan_interval_ticks: 1, ticks_per_cell: 1 };
        let (store, rngs) = PawnStoreBuilder::new(1)
            .pawn(PawnSpec::colonist("Ada", colony, Cell::new(0, 0)))
            .pawn(
                PawnSpec::colonist("Bo", colony, Cell::new(5, 0))
                    .mental(MentalState::AggressiveViolent)
                    .incapable_of_violence(),
            )
            .build();
        let mut beds = BedStore::new();
        beds.add(Bed::new(Cell::new(10, 3), 1).for_prisoners());
        let world = World::new(store, beds, LordStore::new(), colony);
        let mut sim = SimBuilder::new(config, world, rngs).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.open_jobs(), 0);

        let summaries = read_rows(&dir, "job_summaries.csv");
        assert_eq!(summaries.len(), 1);
        assert_eq!(&summaries[0][6], JobEnd::Succeeded.as_str());

        let events = read_rows(&dir, "job_events.csv");
        assert_eq!(&events[0][2], "started");
        assert_eq!(&events[events.len() - 1][2], "ended");
    }
}
