//! Unit tests for rst-work.

use rst_core::{Cell, FactionId, PawnId};
use rst_job::{ReservationManager, RestrainDef};
use rst_pawn::{Bed, BedStore, LordStore, MentalState, PawnSpec, PawnStoreBuilder, World};

use crate::RestrainWorkGiver;

// ── Helpers ───────────────────────────────────────────────────────────────────

const COLONY: FactionId = FactionId(0);

fn world_with(pawns: Vec<PawnSpec>, beds: Vec<Bed>) -> World {
    let (store, _rngs) = PawnStoreBuilder::new(0).pawns(pawns).build();
    let mut bed_store = BedStore::new();
    for b in beds {
        bed_store.add(b);
    }
    World::new(store, bed_store, LordStore::new(), COLONY)
}

fn colonist(name: &str, x: i32) -> PawnSpec {
    PawnSpec::colonist(name, COLONY, Cell::new(x, 0))
}

fn berserk(name: &str, x: i32) -> PawnSpec {
    colonist(name, x).mental(MentalState::AggressiveViolent)
}

fn prison_bed(x: i32) -> Bed {
    Bed::new(Cell::new(x, 5), 1).for_prisoners()
}

fn giver(world: &World) -> RestrainWorkGiver {
    RestrainWorkGiver::for_world(RestrainDef::default(), world)
}

const W: PawnId = PawnId(0);

// ── Colony gate ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate {
    use rst_core::{Cell, FactionId, PawnId};
    use rst_job::ReservationManager;
    use rst_pawn::{MentalState, PawnSpec};

    use super::{W, berserk, colonist, giver, prison_bed, world_with};

    #[test]
    fn calm_colony_is_skipped() {
        let world = world_with(vec![colonist("a", 0), colonist("b", 3)], vec![prison_bed(0)]);
        let g = giver(&world);
        assert!(g.should_skip(W, &world));
        assert_eq!(g.find_task(W, &world, &ReservationManager::new()).unwrap(), None);
    }

    #[test]
    fn any_broken_member_opens_the_gate() {
        let world = world_with(vec![colonist("a", 0), berserk("b", 3)], vec![prison_bed(0)]);
        assert!(!giver(&world).should_skip(W, &world));
    }

    #[test]
    fn distressed_member_also_opens_the_gate() {
        let world = world_with(
            vec![colonist("a", 0), colonist("b", 3).mental(MentalState::Distressed)],
            vec![prison_bed(0)],
        );
        assert!(!giver(&world).should_skip(W, &world));
    }

    #[test]
    fn other_factions_do_not_count() {
        let world = world_with(
            vec![
                colonist("a", 0),
                PawnSpec::colonist("raider", FactionId(4), Cell::new(2, 0))
                    .mental(MentalState::AggressiveViolent),
            ],
            vec![prison_bed(0)],
        );
        assert!(giver(&world).should_skip(W, &world));
    }

    #[test]
    fn unknown_worker_is_an_error() {
        let world = world_with(vec![colonist("a", 0)], vec![]);
        assert!(giver(&world).find_task(PawnId(9), &world, &ReservationManager::new()).is_err());
    }

    #[test]
    fn path_danger_is_unbounded() {
        let world = world_with(vec![colonist("a", 0)], vec![]);
        assert_eq!(giver(&world).max_path_danger(), rst_job::Danger::Deadly);
    }
}

// ── Workers and targets ───────────────────────────────────────────────────────

#[cfg(test)]
mod targets {
    use rst_core::{JobId, PawnId, Tick};
    use rst_job::{ReservationManager, ReservationTarget, RestrainDef};
    use rst_pawn::{
        Condition, ConditionKind, GuestStatus, INITIAL_RESISTANCE, InteractionMode, MentalState,
        PrisonerRecord,
    };

    use super::{COLONY, W, berserk, colonist, giver, prison_bed, world_with};
    use crate::RestrainWorkGiver;

    #[test]
    fn nearest_berserker_first_ties_by_id() {
        let world = world_with(
            vec![colonist("w", 0), berserk("far", 9), berserk("left", -2), berserk("right", 2)],
            vec![prison_bed(0)],
        );
        let r = ReservationManager::new();
        let order = giver(&world).potential_targets(W, &world, &r);
        assert_eq!(order, vec![PawnId(2), PawnId(3), PawnId(1)]);
    }

    #[test]
    fn distressed_pawns_only_when_enabled() {
        let world = world_with(
            vec![colonist("w", 0), colonist("sad", 1).mental(MentalState::Distressed)],
            vec![prison_bed(0)],
        );
        let r = ReservationManager::new();
        assert!(giver(&world).potential_targets(W, &world, &r).is_empty());

        let def = RestrainDef { include_distressed_targets: true, ..RestrainDef::default() };
        let wide = RestrainWorkGiver::for_world(def, &world);
        assert_eq!(wide.potential_targets(W, &world, &r), vec![PawnId(1)]);
    }

    #[test]
    fn targets_held_by_other_jobs_are_passed_over() {
        let world = world_with(
            vec![colonist("w", 0), colonist("other", 5), berserk("b", 1)],
            vec![prison_bed(0)],
        );
        let mut r = ReservationManager::new();
        r.reserve(PawnId(1), JobId(0), ReservationTarget::Pawn(PawnId(2)), 1).unwrap();
        assert!(giver(&world).potential_targets(W, &world, &r).is_empty());
        assert!(!giver(&world).potential_targets(PawnId(1), &world, &r).is_empty());
    }

    #[test]
    fn prisoners_are_not_targets() {
        let world = world_with(
            vec![
                colonist("w", 0),
                berserk("b", 1).guest(GuestStatus::Free),
                berserk("c", 2).guest(GuestStatus::Prisoner(PrisonerRecord {
                    host:             COLONY,
                    captured_by:      None,
                    released:         false,
                    interaction_mode: InteractionMode::NoInteraction,
                    resistance:       INITIAL_RESISTANCE,
                })),
            ],
            vec![prison_bed(0)],
        );
        let r = ReservationManager::new();
        assert_eq!(giver(&world).potential_targets(W, &world, &r), vec![PawnId(1)]);
    }

    #[test]
    fn broken_or_downed_workers_get_nothing() {
        let mut world = world_with(
            vec![berserk("w", 0), berserk("b", 1), colonist("c", 2)],
            vec![prison_bed(0)],
        );
        let g = giver(&world);
        let r = ReservationManager::new();
        assert!(!g.can_work(W, &world));
        assert_eq!(g.find_task(W, &world, &r).unwrap(), None);

        world.pawns.conditions[2].add(Condition::permanent(ConditionKind::Restrained, Tick(0)));
        assert!(!g.can_work(PawnId(2), &world));
    }
}

// ── Bed finding ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod beds {
    use rst_core::{BedId, Cell, JobId, PawnId};
    use rst_job::{ReservationManager, ReservationTarget, Task};
    use rst_pawn::{Bed, World};

    use super::{W, berserk, colonist, giver, prison_bed, world_with};
    use crate::{BedFinder, BedQuery, NearestBedFinder, bed_suits};

    fn find(world: &World, r: &ReservationManager) -> Option<BedId> {
        NearestBedFinder::new(&world.beds).find_bed_for(PawnId(1), W, &BedQuery::RESTRAIN, world, r)
    }

    #[test]
    fn picks_nearest_prisoner_bed() {
        let world = world_with(
            vec![colonist("w", 0), berserk("b", 10)],
            vec![prison_bed(0), Bed::new(Cell::new(10, 1), 1), prison_bed(12), prison_bed(30)],
        );
        assert_eq!(find(&world, &ReservationManager::new()), Some(BedId(2)));
    }

    #[test]
    fn equal_distance_goes_to_lower_id() {
        let world = world_with(
            vec![colonist("w", 0), berserk("b", 10)],
            vec![prison_bed(13), prison_bed(7)],
        );
        assert_eq!(find(&world, &ReservationManager::new()), Some(BedId(0)));
    }

    #[test]
    fn distant_beds_are_found() {
        let world = world_with(
            vec![colonist("w", 0), berserk("b", 1)],
            vec![Bed::new(Cell::new(50_000, 0), 1).for_prisoners()],
        );
        let task = giver(&world).find_task(W, &world, &ReservationManager::new()).unwrap();
        assert_eq!(task.map(|t| t.bed), Some(BedId(0)));
    }

    #[test]
    fn nearest_wins_across_the_whole_map() {
        let world = world_with(
            vec![colonist("w", 0), berserk("b", i32::MIN + 1)],
            vec![
                Bed::new(Cell::new(i32::MAX, i32::MAX), 1).for_prisoners(),
                Bed::new(Cell::new(i32::MIN, 0), 1).for_prisoners(),
            ],
        );
        assert_eq!(find(&world, &ReservationManager::new()), Some(BedId(1)));
    }

    #[test]
    fn medical_and_destroyed_beds_are_skipped() {
        let mut world = world_with(
            vec![colonist("w", 0), berserk("b", 10)],
            vec![prison_bed(10).medical(), prison_bed(11), prison_bed(40)],
        );
        world.destroy_bed(BedId(1));
        assert_eq!(find(&world, &ReservationManager::new()), Some(BedId(2)));
    }

    #[test]
    fn owned_bed_of_someone_else_is_full() {
        let mut world = world_with(
            vec![colonist("w", 0), berserk("b", 10), colonist("c", 3)],
            vec![prison_bed(10), prison_bed(20)],
        );
        world.claim_bed_if_non_medical(PawnId(2), BedId(0));
        assert_eq!(find(&world, &ReservationManager::new()), Some(BedId(1)));

        world.unclaim_bed(PawnId(2));
        world.claim_bed_if_non_medical(PawnId(1), BedId(0));
        assert_eq!(find(&world, &ReservationManager::new()), Some(BedId(0)));
    }

    #[test]
    fn bed_reserved_to_capacity_is_skipped() {
        let world = world_with(
            vec![colonist("w", 0), berserk("b", 10), colonist("x", 4)],
            vec![prison_bed(10), prison_bed(20)],
        );
        let mut r = ReservationManager::new();
        r.reserve(PawnId(2), JobId(1), ReservationTarget::Bed(BedId(0)), 1).unwrap();
        assert_eq!(find(&world, &r), Some(BedId(1)));

        let ignoring = BedQuery { ignore_other_reservations: true, ..BedQuery::RESTRAIN };
        assert!(bed_suits(BedId(0), PawnId(1), W, &ignoring, &world, &r));
    }

    #[test]
    fn no_bed_means_next_candidate() {
        // The only bed is owned; once freed, "b" still cannot own beds but "c" can.
        let mut world = world_with(
            vec![colonist("w", 0), berserk("b", 1), berserk("c", 5), colonist("owner", 9)],
            vec![prison_bed(1)],
        );
        world.claim_bed_if_non_medical(PawnId(3), BedId(0));
        let g = giver(&world);
        let r = ReservationManager::new();
        assert_eq!(g.find_task(W, &world, &r).unwrap(), None);

        world.pawns.ownership[1] = None;
        world.unclaim_bed(PawnId(3));
        let task = g.find_task(W, &world, &r).unwrap();
        assert_eq!(task, Some(Task::new(W, PawnId(2), BedId(0), true)));
    }

    #[test]
    fn found_task_carries_defaults() {
        let world = world_with(vec![colonist("w", 0), berserk("b", 2)], vec![prison_bed(0)]);
        let task = giver(&world).find_task(W, &world, &ReservationManager::new()).unwrap().unwrap();
        assert_eq!(task.target, PawnId(1));
        assert_eq!(task.bed, BedId(0));
        assert!(task.make_target_prisoner);
        assert_eq!(task.count, 1);
    }
}

// ── Batch scan ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use rst_core::PawnId;
    use rst_job::ReservationManager;

    use super::{berserk, colonist, giver, prison_bed, world_with};

    #[test]
    fn scan_keeps_worker_order_and_drops_idle() {
        let world = world_with(
            vec![colonist("a", 0), berserk("b", 1), colonist("c", 4), berserk("d", 30)],
            vec![prison_bed(0), prison_bed(5)],
        );
        let r = ReservationManager::new();
        let tasks = giver(&world).scan(&[PawnId(2), PawnId(0), PawnId(1)], &world, &r).unwrap();
        let workers: Vec<PawnId> = tasks.iter().map(|t| t.worker).collect();
        assert_eq!(workers, vec![PawnId(2), PawnId(0)]);
        assert!(tasks.iter().all(|t| t.target == PawnId(1)));
    }

    #[test]
    fn scan_propagates_unknown_worker() {
        let world = world_with(vec![colonist("a", 0)], vec![]);
        let r = ReservationManager::new();
        assert!(giver(&world).scan(&[PawnId(0), PawnId(7)], &world, &r).is_err());
    }
}

#[test]
fn empty_world_scan_is_empty() {
    let world = world_with(vec![], vec![]);
    let g = giver(&world);
    assert!(g.bed_finder().is_empty());
    assert!(g.scan(&[], &world, &ReservationManager::new()).unwrap().is_empty());
}
