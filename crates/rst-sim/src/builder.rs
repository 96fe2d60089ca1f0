//! Fluent builder for constructing a [`ColonySim`].

use std::collections::BTreeMap;

use rst_core::{SimConfig, Tick};
use rst_job::{ReservationManager, RestrainDef};
use rst_pawn::{PawnRngs, World};
use rst_work::{BedFinder, NearestBedFinder, RestrainWorkGiver};

use crate::{ColonySim, GridPather, SimError, SimResult};

/// Fluent builder for [`ColonySim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, scan interval, walking speed
/// - [`World`] + [`PawnRngs`] — from [`rst_pawn::PawnStoreBuilder`] or a
///   loaded [`rst_pawn::Roster`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                    |
/// |---------------------|--------------------------------------------|
/// | `.def(d)`           | `RestrainDef::default()`                   |
/// | `.bed_finder(f)`    | `NearestBedFinder` over the world's beds   |
///
/// # Example
///
/// ```rust,ignore
/// let (world, rngs) = roster.into_world(seed, FactionId(0));
/// let mut sim = SimBuilder::new(config, world, rngs)
///     .def(RestrainDef { make_target_prisoner: false, ..Default::default() })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BedFinder = NearestBedFinder> {
    config:     SimConfig,
    world:      World,
    rngs:       PawnRngs,
    def:        RestrainDef,
    bed_finder: B,
}

impl SimBuilder<NearestBedFinder> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, world: World, rngs: PawnRngs) -> Self {
        let bed_finder = NearestBedFinder::new(&world.beds);
        Self { config, world, rngs, def: RestrainDef::default(), bed_finder }
    }
}

impl<B: BedFinder> SimBuilder<B> {
    pub fn def(mut self, def: RestrainDef) -> Self {
        self.def = def;
        self
    }

    /// Swap the bed search for a custom one.
    pub fn bed_finder<F: BedFinder>(self, bed_finder: F) -> SimBuilder<F> {
        SimBuilder {
            config: self.config,
            world:  self.world,
            rngs:   self.rngs,
            def:    self.def,
            bed_finder,
        }
    }

    /// Validate inputs and return a ready-to-run [`ColonySim`].
    pub fn build(self) -> SimResult<ColonySim<B>> {
        let pawn_count = self.world.pawns.count;
        if self.rngs.len() != pawn_count {
            return Err(SimError::PawnCountMismatch {
                expected: pawn_count,
                got:      self.rngs.len(),
                what:     "pawn RNGs",
            });
        }
        if self.config.ticks_per_cell == 0 {
            return Err(SimError::Config("ticks_per_cell must be at least 1".into()));
        }
        let mut members = self.world.lords.lords.iter().flat_map(|l| &l.members);
        if members.any(|&m| !self.world.pawns.contains(m)) {
            return Err(SimError::Config("lord member is not a known pawn".into()));
        }

        Ok(ColonySim {
            pather:       GridPather::new(self.config.ticks_per_cell),
            giver:        RestrainWorkGiver::new(self.def, self.bed_finder),
            config:       self.config,
            now:          Tick::ZERO,
            world:        self.world,
            rngs:         self.rngs,
            reservations: ReservationManager::new(),
            drivers:      BTreeMap::new(),
            next_job:     0,
        })
    }
}
