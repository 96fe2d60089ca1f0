//! colony — small restrain-job demo.
//!
//! Two colonists share a map with a berserk brawler and a sad wanderer.
//! The scanner assigns restrain jobs; every job event is printed and
//! written to `output/colony/`.
//!
//! Usage: `colony [config.json]`.  The optional file may set `sim`
//! (a full `SimConfig`) and/or `restrain` (a full `RestrainDef`).

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use rst_core::{FactionId, SimConfig, Tick};
use rst_job::{Job, JobEnd, JobEvent, RestrainDef};
use rst_output::writer::OutputWriter;
use rst_output::{CsvWriter, SimOutputObserver};
use rst_pawn::{ConditionKind, load_roster_reader};
use rst_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const PLAYER_FACTION: FactionId = FactionId(0);
const OUTPUT_DIR:     &str      = "output/colony";

// ── Roster CSV ────────────────────────────────────────────────────────────────

// Pawns get ids 0..4 in file order, beds 0..3.
const ROSTER_CSV: &str = "\
kind,name,faction,x,z,melee,social,incapable,mental,slots,for_prisoners,medical\n\
pawn,Ada,0,0,0,9,3,0,none,,,\n\
pawn,Bram,0,2,8,4,12,0,none,,,\n\
pawn,Cass,0,9,2,6,2,0,aggressive,,,\n\
pawn,Dov,0,4,14,2,5,0,distressed,,,\n\
bed,,,16,0,,,,,1,1,0\n\
bed,,,16,4,,,,,2,1,0\n\
bed,,,0,16,,,,,1,0,1\n\
";

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:      SimConfig,
    restrain: RestrainDef,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:      SimConfig { total_ticks: 400, seed: 42, scan_interval_ticks: 5, ticks_per_cell: 2 },
            restrain: RestrainDef { include_distressed_targets: true, ..RestrainDef::default() },
        }
    }
}

fn load_config() -> Result<DemoConfig> {
    match std::env::args().nth(1) {
        None => Ok(DemoConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
    }
}

// ── Printing observer ─────────────────────────────────────────────────────────

/// Prints job milestones and forwards everything to the CSV observer.
struct PrintingObserver<W: OutputWriter> {
    inner:     SimOutputObserver<W>,
    events:    usize,
    succeeded: usize,
    failed:    usize,
}

impl<W: OutputWriter> PrintingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, events: 0, succeeded: 0, failed: 0 }
    }
}

impl<W: OutputWriter> SimObserver for PrintingObserver<W> {
    fn on_job_started(&mut self, tick: Tick, job: &Job) {
        println!(
            "[{:>4}] job {} : pawn {} -> pawn {} (bed {})",
            tick.0,
            job.id.0,
            job.worker().0,
            job.target().0,
            job.bed().0
        );
        self.inner.on_job_started(tick, job);
    }

    fn on_job_event(&mut self, tick: Tick, event: &JobEvent) {
        self.events += 1;
        if let JobEvent::Message { text, .. } = event {
            println!("[{:>4}]   {text}", tick.0);
        }
        self.inner.on_job_event(tick, event);
    }

    fn on_job_ended(&mut self, tick: Tick, job: &Job, end: JobEnd) {
        if end == JobEnd::Succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        println!("[{:>4}] job {} ended: {end}", tick.0, job.id.0);
        self.inner.on_job_ended(tick, job, end);
    }

    fn on_condition_expired(&mut self, tick: Tick, pawn: rst_core::PawnId, kind: ConditionKind) {
        println!("[{:>4}] pawn {} is no longer {kind}", tick.0, pawn.0);
    }

    fn on_mental_recovered(&mut self, tick: Tick, pawn: rst_core::PawnId) {
        println!("[{:>4}] pawn {} snapped out of it", tick.0, pawn.0);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let DemoConfig { sim: config, restrain } = load_config()?;
    println!("=== colony — restrain jobs ===");
    println!(
        "Ticks: {}  |  Seed: {}  |  Scan every {} ticks",
        config.total_ticks, config.seed, config.scan_interval_ticks
    );
    println!();

    // 1. Roster.
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!("Roster: {} pawns, {} beds", roster.pawns.len(), roster.beds.len());
    let (world, rngs) = roster.into_world(config.seed, PLAYER_FACTION);

    // 2. Sim.
    let mut sim = SimBuilder::new(config, world, rngs).def(restrain).build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = PrintingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  job_events.csv    : {} rows", obs.events);
    println!("  job_summaries.csv : {} rows ({} succeeded, {} failed)",
        obs.succeeded + obs.failed, obs.succeeded, obs.failed);
    println!();

    println!("{:<8} {:<10} {:<10} {:<6}", "Pawn", "Prisoner", "Mental", "Bed");
    println!("{}", "-".repeat(36));
    let pawns = &sim.world.pawns;
    for p in pawns.pawn_ids() {
        let i = p.index();
        println!(
            "{:<8} {:<10} {:<10} {:<6}",
            pawns.label(p),
            if pawns.guest[i].is_prisoner() { "yes" } else { "no" },
            format!("{:?}", pawns.mental[i]),
            pawns.in_bed[i].map(|b| b.0.to_string()).unwrap_or_else(|| "-".into()),
        );
    }

    Ok(())
}
