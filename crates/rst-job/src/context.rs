//! Mutable services handed to the job driver for one tick.

use rst_core::{Dice, Tick};
use rst_pawn::World;

use crate::{JobEvent, JobObserver, Pather, ReservationManager};

/// Everything a toil may read or change.
///
/// Built by the scheduler once per driver call and dropped right after, so
/// no borrow outlives the tick.
pub struct JobContext<'a> {
    pub now:          Tick,
    pub world:        &'a mut World,
    pub reservations: &'a mut ReservationManager,
    pub pather:       &'a mut dyn Pather,
    pub dice:         &'a mut dyn Dice,
    pub observer:     &'a mut dyn JobObserver,
}

impl<'a> JobContext<'a> {
    pub fn new(
        now:          Tick,
        world:        &'a mut World,
        reservations: &'a mut ReservationManager,
        pather:       &'a mut dyn Pather,
        dice:         &'a mut dyn Dice,
        observer:     &'a mut dyn JobObserver,
    ) -> Self {
        Self { now, world, reservations, pather, dice, observer }
    }

    #[inline]
    pub fn emit(&mut self, event: JobEvent) {
        self.observer.on_event(self.now, &event);
    }
}
