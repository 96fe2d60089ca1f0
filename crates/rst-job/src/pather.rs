//! Movement service consumed by the travel toils.

use rst_core::{Cell, PawnId};
use rst_pawn::World;

/// Where a path leads.  Pawn targets are followed as they move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathTarget {
    Pawn(PawnId),
    Cell(Cell),
}

impl PathTarget {
    /// Current cell of the target.
    pub fn resolve(self, world: &World) -> Cell {
        match self {
            PathTarget::Pawn(p) => world.pawns.position[p.index()],
            PathTarget::Cell(c) => c,
        }
    }
}

/// When a path counts as finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathEndMode {
    /// Standing on the target cell.
    OnCell,
    /// Standing on or next to the target cell.
    Touch,
}

impl PathEndMode {
    pub fn reached(self, at: Cell, goal: Cell) -> bool {
        match self {
            PathEndMode::OnCell => at == goal,
            PathEndMode::Touch  => at.touches(goal),
        }
    }
}

/// Path risk a work giver is willing to accept.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Danger {
    #[default]
    None,
    Some,
    Deadly,
}

/// Moves pawns across the map.
///
/// The driver calls [`start_path`][Self::start_path] when a travel toil is
/// entered and then polls [`arrived`][Self::arrived] every tick until it
/// returns `true`.  The scheduler is responsible for actually advancing
/// pawns between polls.
pub trait Pather {
    fn start_path(&mut self, pawn: PawnId, target: PathTarget, mode: PathEndMode, world: &World);

    fn arrived(&self, pawn: PawnId, world: &World) -> bool;

    /// Forget any path held by `pawn`.
    fn stop(&mut self, pawn: PawnId);
}
