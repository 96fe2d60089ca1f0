//! Lords: group-leadership structures coordinating several pawns.
//!
//! The restrain job only needs to tell a pawn's lord that an arrest was
//! attempted; what the group does about it is the lord's business.

use rst_core::{LordId, PawnId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lord {
    pub members:         Vec<PawnId>,
    /// Members someone tried to arrest, in notification order.
    pub arrest_attempts: Vec<PawnId>,
}

impl Lord {
    pub fn notify_pawn_attempt_arrested(&mut self, pawn: PawnId) {
        self.arrest_attempts.push(pawn);
    }
}

#[derive(Clone, Debug, Default)]
pub struct LordStore {
    pub lords: Vec<Lord>,
}

impl LordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, lord: Lord) -> LordId {
        let id = LordId(self.lords.len() as u32);
        self.lords.push(lord);
        id
    }

    pub fn get(&self, lord: LordId) -> Option<&Lord> {
        self.lords.get(lord.index())
    }

    pub fn get_mut(&mut self, lord: LordId) -> Option<&mut Lord> {
        self.lords.get_mut(lord.index())
    }
}
