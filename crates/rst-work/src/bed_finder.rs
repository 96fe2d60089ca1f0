//! Finding a bed to carry a restrained pawn to.
//!
//! [`NearestBedFinder`] keeps an R-tree (via `rstar`) of bed positions and
//! walks it outward from the sleeper until it meets a bed that
//! [`bed_suits`] the query.  Beds at equal distance are decided by id.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rst_core::{BedId, PawnId};
use rst_job::{ReservationManager, ReservationTarget};
use rst_pawn::{BedStore, World};

/// What kind of bed is wanted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BedQuery {
    /// The sleeper will be a prisoner: only prisoner beds qualify.
    pub for_prisoner:              bool,
    /// Guest beds are not modelled; a guest query finds nothing.
    pub guest_bed:                 bool,
    /// Only medical beds qualify.  Otherwise medical beds are passed over.
    pub medical_only:              bool,
    /// Accept beds another pawn has reserved to capacity.
    pub ignore_other_reservations: bool,
}

impl BedQuery {
    /// The query the restrain work giver makes.
    pub const RESTRAIN: BedQuery = BedQuery {
        for_prisoner:              true,
        guest_bed:                 false,
        medical_only:              false,
        ignore_other_reservations: false,
    };
}

/// Picks a bed for `sleeper`, to be carried there by `traveler`.
pub trait BedFinder: Send + Sync {
    fn find_bed_for(
        &self,
        sleeper:      PawnId,
        traveler:     PawnId,
        query:        &BedQuery,
        world:        &World,
        reservations: &ReservationManager,
    ) -> Option<BedId>;
}

/// Whether `bed` can take `sleeper` under `query`.
pub fn bed_suits(
    bed:          BedId,
    sleeper:      PawnId,
    traveler:     PawnId,
    query:        &BedQuery,
    world:        &World,
    reservations: &ReservationManager,
) -> bool {
    let Ok(b) = world.beds.get(bed) else {
        return false;
    };
    if b.destroyed || query.guest_bed || b.for_prisoners != query.for_prisoner {
        return false;
    }
    if b.medical != query.medical_only {
        return false;
    }

    if !b.medical && !b.is_owner(sleeper) {
        let can_claim = !b.owner_slots_full() && world.pawns.ownership[sleeper.index()].is_some();
        if !can_claim {
            return false;
        }
    }
    let lying_here = world.pawns.in_bed[sleeper.index()] == Some(bed);
    if !lying_here && !world.any_unoccupied_slot(bed) {
        return false;
    }

    query.ignore_other_reservations
        || reservations.can_reserve(traveler, ReservationTarget::Bed(bed), b.slots as u32)
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct BedEntry {
    point: [f64; 2], // [x, z]
    id:    BedId,
}

impl RTreeObject for BedEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BedEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── NearestBedFinder ──────────────────────────────────────────────────────────

/// Nearest suitable bed by straight-line distance from the sleeper.
///
/// The index is built from a snapshot of bed positions.  Beds never move,
/// but beds added after construction are invisible until
/// [`rebuild`][Self::rebuild] is called.
pub struct NearestBedFinder {
    index: RTree<BedEntry>,
}

impl NearestBedFinder {
    pub fn new(beds: &BedStore) -> Self {
        let entries = beds
            .bed_ids()
            .map(|id| BedEntry { point: beds[id].position.to_point(), id })
            .collect();
        Self { index: RTree::bulk_load(entries) }
    }

    pub fn rebuild(&mut self, beds: &BedStore) {
        *self = Self::new(beds);
    }

    pub fn len(&self) -> usize {
        self.index.size()
    }

    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }
}

impl BedFinder for NearestBedFinder {
    fn find_bed_for(
        &self,
        sleeper:      PawnId,
        traveler:     PawnId,
        query:        &BedQuery,
        world:        &World,
        reservations: &ReservationManager,
    ) -> Option<BedId> {
        let here = world.pawns.position[sleeper.index()];
        let origin = here.to_point();
        // Ranked by exact cell distance, then id; the f64 tree distance only
        // bounds the walk.
        let mut best: Option<(u64, BedId)> = None;
        let mut cutoff = f64::INFINITY;

        for entry in self.index.nearest_neighbor_iter(&origin) {
            let d = entry.distance_2(&origin);
            if d > cutoff {
                break;
            }
            if bed_suits(entry.id, sleeper, traveler, query, world, reservations) {
                let key = (here.distance_sq(world.beds[entry.id].position), entry.id);
                if best.is_none_or(|b| key < b) {
                    best = Some(key);
                    cutoff = d;
                }
            }
        }
        best.map(|(_, id)| id)
    }
}
