//! Integration tests for rst-sim.

use rst_core::{Cell, FactionId, JobId, PawnId, SimConfig, Tick};
use rst_job::{Job, JobEnd, JobEvent};
use rst_pawn::{
    Bed, BedStore, ConditionKind, LordStore, MentalState, PawnRngs, PawnSpec, PawnStoreBuilder, World,
};

use crate::{ColonySim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const COLONY: FactionId = FactionId(0);

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed:                42,
        scan_interval_ticks: 1,
        ticks_per_cell:      1,
    }
}

fn world_with(pawns: Vec<PawnSpec>, beds: Vec<Bed>) -> (World, PawnRngs) {
    let (store, rngs) = PawnStoreBuilder::new(42).pawns(pawns).build();
    let mut bed_store = BedStore::new();
    for b in beds {
        bed_store.add(b);
    }
    (World::new(store, bed_store, LordStore::new(), COLONY), rngs)
}

fn colonist(name: &str, x: i32, z: i32) -> PawnSpec {
    PawnSpec::colonist(name, COLONY, Cell::new(x, z))
}

/// Berserker who cannot fight back, so every contest is won.
fn harmless_berserker(name: &str, x: i32) -> PawnSpec {
    colonist(name, x, 0).mental(MentalState::AggressiveViolent).incapable_of_violence()
}

fn jail_at(x: i32, z: i32) -> Bed {
    Bed::new(Cell::new(x, z), 1).for_prisoners()
}

/// Worker at the origin, harmless berserker five cells east, jail beyond.
fn standard_sim(total_ticks: u64) -> ColonySim {
    let (world, rngs) = world_with(
        vec![colonist("Ada", 0, 0), harmless_berserker("Bo", 5)],
        vec![jail_at(10, 3)],
    );
    SimBuilder::new(test_config(total_ticks), world, rngs).build().unwrap()
}

#[derive(Default)]
struct Recorder {
    started:   Vec<JobId>,
    ended:     Vec<(JobId, JobEnd)>,
    events:    Vec<(Tick, &'static str)>,
    expired:   Vec<(PawnId, ConditionKind)>,
    recovered: Vec<PawnId>,
    ticks:     u64,
    sim_end:   Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_end(&mut self, _tick: Tick, _active_jobs: usize) {
        self.ticks += 1;
    }
    fn on_job_started(&mut self, _tick: Tick, job: &Job) {
        self.started.push(job.id);
    }
    fn on_job_event(&mut self, tick: Tick, event: &JobEvent) {
        self.events.push((tick, event.name()));
    }
    fn on_job_ended(&mut self, _tick: Tick, job: &Job, end: JobEnd) {
        self.ended.push((job.id, end));
    }
    fn on_condition_expired(&mut self, _tick: Tick, pawn: PawnId, kind: ConditionKind) {
        self.expired.push((pawn, kind));
    }
    fn on_mental_recovered(&mut self, _tick: Tick, pawn: PawnId) {
        self.recovered.push(pawn);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.sim_end = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use rst_core::PawnId;
    use rst_pawn::{Lord, PawnStoreBuilder};

    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = standard_sim(10);
        assert_eq!(sim.world.pawns.count, 2);
        assert_eq!(sim.now, Tick(0));
        assert_eq!(sim.active_jobs(), 0);
        assert!(sim.giver.def.make_target_prisoner);
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let (world, _) = world_with(vec![colonist("a", 0, 0)], vec![]);
        let (_, rngs) = PawnStoreBuilder::new(1)
            .pawns(vec![colonist("a", 0, 0), colonist("b", 1, 0)])
            .build();
        assert!(SimBuilder::new(test_config(10), world, rngs).build().is_err());
    }

    #[test]
    fn zero_walking_speed_errors() {
        let (world, rngs) = world_with(vec![colonist("a", 0, 0)], vec![]);
        let config = SimConfig { ticks_per_cell: 0, ..test_config(10) };
        assert!(SimBuilder::new(config, world, rngs).build().is_err());
    }

    #[test]
    fn lord_with_unknown_member_errors() {
        let (mut world, rngs) = world_with(vec![colonist("a", 0, 0)], vec![]);
        world.lords.add(Lord { members: vec![PawnId(8)], ..Lord::default() });
        assert!(SimBuilder::new(test_config(10), world, rngs).build().is_err());
    }
}

// ── Grid pather ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod pather_tests {
    use rst_core::{Cell, PawnId, Tick};
    use rst_job::{PathEndMode, PathTarget, Pather};
    use rst_pawn::{Condition, ConditionKind};

    use super::{colonist, world_with};
    use crate::GridPather;

    #[test]
    fn walks_one_cell_per_tick() {
        let (mut world, _) = world_with(vec![colonist("a", 0, 0)], vec![]);
        let mut p = GridPather::new(1);
        p.start_path(PawnId(0), PathTarget::Cell(Cell::new(3, 0)), PathEndMode::OnCell, &world);

        assert!(p.advance(&mut world, Tick(0)).is_empty());
        assert_eq!(world.pawns.position[0], Cell::new(1, 0));
        assert!(p.advance(&mut world, Tick(1)).is_empty());
        assert_eq!(p.advance(&mut world, Tick(2)), vec![PawnId(0)]);
        assert!(p.arrived(PawnId(0), &world));
        assert!(p.advance(&mut world, Tick(3)).is_empty());
        assert_eq!(world.pawns.position[0], Cell::new(3, 0));
    }

    #[test]
    fn slow_walkers_wait_between_steps() {
        let (mut world, _) = world_with(vec![colonist("a", 0, 0)], vec![]);
        let mut p = GridPather::new(3);
        p.start_path(PawnId(0), PathTarget::Cell(Cell::new(9, 0)), PathEndMode::OnCell, &world);
        for t in 0..7 {
            p.advance(&mut world, Tick(t));
        }
        // Steps at ticks 0, 3 and 6.
        assert_eq!(world.pawns.position[0], Cell::new(3, 0));
    }

    #[test]
    fn touch_stops_next_to_a_pawn() {
        let (mut world, _) = world_with(vec![colonist("a", 0, 0), colonist("b", 4, 4)], vec![]);
        let mut p = GridPather::new(1);
        p.start_path(PawnId(0), PathTarget::Pawn(PawnId(1)), PathEndMode::Touch, &world);
        for t in 0..10 {
            p.advance(&mut world, Tick(t));
        }
        assert_eq!(world.pawns.position[0], Cell::new(3, 3));
    }

    #[test]
    fn restrained_pawns_stay_put() {
        let (mut world, _) = world_with(vec![colonist("a", 0, 0)], vec![]);
        world.pawns.conditions[0].add(Condition::permanent(ConditionKind::Restrained, Tick(0)));
        let mut p = GridPather::new(1);
        p.start_path(PawnId(0), PathTarget::Cell(Cell::new(3, 0)), PathEndMode::OnCell, &world);
        p.advance(&mut world, Tick(0));
        assert_eq!(world.pawns.position[0], Cell::new(0, 0));
    }

    #[test]
    fn stop_forgets_the_walk() {
        let (world, _) = world_with(vec![colonist("a", 0, 0)], vec![]);
        let mut p = GridPather::new(1);
        p.start_path(PawnId(0), PathTarget::Cell(Cell::new(0, 0)), PathEndMode::OnCell, &world);
        assert!(p.is_walking(PawnId(0)));
        p.stop(PawnId(0));
        assert!(!p.is_walking(PawnId(0)));
        assert!(!p.arrived(PawnId(0), &world));
    }
}

// ── Whole-colony runs ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use rst_core::{BedId, Cell, PawnId, Tick};
    use rst_job::{JobEnd, ReservationTarget, Task};
    use rst_pawn::{ConditionKind, InteractionMode, MentalState};

    use super::*;
    use crate::{NoopObserver, SimError};

    #[test]
    fn calm_colony_never_starts_a_job() {
        let (world, rngs) = world_with(
            vec![colonist("Ada", 0, 0), colonist("Bo", 5, 0)],
            vec![jail_at(10, 3)],
        );
        let mut sim = SimBuilder::new(test_config(50), world, rngs).build().unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.started.is_empty());
        assert_eq!(obs.ticks, 50);
        assert_eq!(obs.sim_end, Some(Tick(50)));
    }

    #[test]
    fn berserker_ends_up_jailed() {
        let mut sim = standard_sim(60);
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.started, vec![JobId(0)]);
        assert_eq!(obs.ended, vec![(JobId(0), JobEnd::Succeeded)]);

        let bo = 1;
        let pawns = &sim.world.pawns;
        assert_eq!(pawns.in_bed[bo], Some(BedId(0)));
        assert_eq!(pawns.position[bo], Cell::new(10, 3));
        let record = pawns.guest[bo].record().unwrap();
        assert_eq!(record.captured_by, Some(PawnId(0)));
        assert_eq!(record.interaction_mode, InteractionMode::AttemptRecruit);
        assert!(!pawns.conditions[bo].has(ConditionKind::Restrained));

        assert!(sim.reservations.is_empty());
        assert!(sim.is_idle(PawnId(0)));
    }

    #[test]
    fn travel_takes_one_tick_per_cell() {
        let mut sim = standard_sim(60);
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();

        let restrained_at = obs.events.iter().find(|(_, n)| *n == "condition_added").map(|(t, _)| *t);
        let ended_at = obs.events.iter().find(|(_, n)| *n == "ended").map(|(t, _)| *t);
        // Scan at 0, path starts at 1, four steps to touch Bo, five more to the bed.
        assert_eq!(restrained_at, Some(Tick(5)));
        assert_eq!(ended_at, Some(Tick(10)));
    }

    #[test]
    fn recovered_berserker_is_left_alone() {
        let (world, rngs) = world_with(
            vec![colonist("Ada", 0, 0), harmless_berserker("Bo", 5).recovers_at(Tick(0))],
            vec![jail_at(10, 3)],
        );
        let mut sim = SimBuilder::new(test_config(20), world, rngs).build().unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.recovered, vec![PawnId(1)]);
        assert!(obs.started.is_empty());
        assert_eq!(sim.world.pawns.mental[1], MentalState::None);
    }

    #[test]
    fn annoyance_wears_off() {
        let mut sim = standard_sim(40);
        sim.giver.def.annoyed_duration_ticks = 5;
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.expired, vec![(PawnId(1), ConditionKind::Annoyed)]);
        assert!(sim.world.pawns.conditions[1].is_empty());
    }

    #[test]
    fn no_jail_means_no_job() {
        let (world, rngs) = world_with(
            vec![colonist("Ada", 0, 0), harmless_berserker("Bo", 5)],
            vec![Bed::new(Cell::new(10, 3), 1)],
        );
        let mut sim = SimBuilder::new(test_config(20), world, rngs).build().unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.started.is_empty());
    }

    #[test]
    fn cancel_mid_walk_cleans_up() {
        let mut sim = standard_sim(60);
        let mut obs = Recorder::default();
        sim.run_ticks(3, &mut obs).unwrap();
        assert_eq!(sim.active_jobs(), 1);
        assert!(sim.reservations.is_reserved(ReservationTarget::Pawn(PawnId(1))));

        assert_eq!(sim.cancel_job(PawnId(0), &mut obs), Some(JobEnd::Cancelled));
        assert_eq!(obs.ended, vec![(JobId(0), JobEnd::Cancelled)]);
        assert!(sim.reservations.is_empty());
        assert_eq!(sim.world.owned_bed(PawnId(1)), None);
        assert!(!sim.pather.is_walking(PawnId(0)));
        assert_eq!(sim.cancel_job(PawnId(0), &mut obs), None);
    }

    #[test]
    fn cancelled_job_is_offered_again() {
        let mut sim = standard_sim(60);
        let mut obs = Recorder::default();
        sim.run_ticks(3, &mut obs).unwrap();
        sim.cancel_job(PawnId(0), &mut obs);
        sim.run_ticks(1, &mut obs).unwrap();
        assert_eq!(obs.started, vec![JobId(0), JobId(1)]);
    }

    #[test]
    fn two_workers_one_target_starts_one_job() {
        let (world, rngs) = world_with(
            vec![colonist("Ada", 0, 0), colonist("Cy", 0, 2), harmless_berserker("Bo", 5)],
            vec![jail_at(10, 3), jail_at(12, 3)],
        );
        let mut sim = SimBuilder::new(test_config(5), world, rngs).build().unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.active_jobs(), 1);
        assert!(sim.active_job(PawnId(0)).is_some());
        assert!(sim.is_idle(PawnId(1)));
    }

    #[test]
    fn busy_worker_cannot_be_assigned() {
        let mut sim = standard_sim(10);
        let task = Task::new(PawnId(0), PawnId(1), BedId(0), true);
        sim.assign(task, &mut NoopObserver).unwrap();
        assert!(matches!(sim.assign(task, &mut NoopObserver), Err(SimError::WorkerBusy(PawnId(0)))));
    }

    #[test]
    fn assigning_unknown_worker_errors() {
        let mut sim = standard_sim(10);
        let task = Task::new(PawnId(9), PawnId(1), BedId(0), true);
        assert!(matches!(sim.assign(task, &mut NoopObserver), Err(SimError::Core(_))));
    }

    #[test]
    fn same_seed_same_story() {
        fn story() -> Vec<(Tick, &'static str)> {
            let (world, rngs) = world_with(
                vec![
                    colonist("Ada", 0, 0).melee(8).social(12),
                    colonist("Bo", 4, 0).melee(9).mental(MentalState::AggressiveViolent),
                    colonist("Cy", 0, 6).melee(3).social(3),
                    colonist("Di", 6, 6).melee(12).mental(MentalState::Distressed),
                ],
                vec![jail_at(10, 0), jail_at(10, 6)],
            );
            let mut sim = SimBuilder::new(test_config(80), world, rngs).build().unwrap();
            let mut obs = Recorder::default();
            sim.run(&mut obs).unwrap();
            obs.events
        }
        let first = story();
        assert!(!first.is_empty());
        assert_eq!(first, story());
    }
}
