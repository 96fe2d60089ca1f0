//! Beds: the capacity-bounded destinations of the restrain job.

use rst_core::{BedId, Cell, PawnId, RstError, RstResult};

/// One bed on the map.
///
/// Sleeping slot `i` lies at `position + (i, 0)`; a double bed therefore
/// covers two adjacent cells running east.
#[derive(Clone, Debug, PartialEq)]
pub struct Bed {
    pub position:      Cell,
    /// Number of sleeping slots.  At least 1.
    pub slots:         u8,
    /// Reserved for captives.
    pub for_prisoners: bool,
    /// Hospital bed: anyone may be laid in it, nobody owns it.
    pub medical:       bool,
    /// Assigned owners in claim order.  Never longer than `slots`.
    pub owners:        Vec<PawnId>,
    pub destroyed:     bool,
}

impl Bed {
    pub fn new(position: Cell, slots: u8) -> Self {
        Self {
            position,
            slots: slots.max(1),
            for_prisoners: false,
            medical:       false,
            owners:        Vec::new(),
            destroyed:     false,
        }
    }

    pub fn for_prisoners(mut self) -> Self {
        self.for_prisoners = true;
        self
    }

    pub fn medical(mut self) -> Self {
        self.medical = true;
        self
    }

    /// Cell of sleeping slot `slot`.
    #[inline]
    pub fn slot_pos(&self, slot: usize) -> Cell {
        self.position.offset(slot as i32, 0)
    }

    /// All sleeping-slot cells in slot order.
    pub fn slot_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.slots as usize).map(|i| self.slot_pos(i))
    }

    #[inline]
    pub fn is_owner(&self, pawn: PawnId) -> bool {
        self.owners.contains(&pawn)
    }

    #[inline]
    pub fn owner_slots_full(&self) -> bool {
        self.owners.len() >= self.slots as usize
    }
}

/// Dense storage of beds, indexed by `BedId`.
#[derive(Clone, Debug, Default)]
pub struct BedStore {
    pub beds: Vec<Bed>,
}

impl BedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bed and return its id.
    pub fn add(&mut self, bed: Bed) -> BedId {
        let id = BedId(self.beds.len() as u32);
        self.beds.push(bed);
        id
    }

    pub fn len(&self) -> usize {
        self.beds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }

    pub fn bed_ids(&self) -> impl Iterator<Item = BedId> + '_ {
        (0..self.beds.len() as u32).map(BedId)
    }

    pub fn get(&self, bed: BedId) -> RstResult<&Bed> {
        self.beds.get(bed.index()).ok_or(RstError::BedNotFound(bed))
    }

    pub fn get_mut(&mut self, bed: BedId) -> RstResult<&mut Bed> {
        self.beds.get_mut(bed.index()).ok_or(RstError::BedNotFound(bed))
    }

    /// `true` if the id is unknown or the bed has been destroyed.
    pub fn is_gone(&self, bed: BedId) -> bool {
        self.beds.get(bed.index()).is_none_or(|b| b.destroyed)
    }
}

impl std::ops::Index<BedId> for BedStore {
    type Output = Bed;
    fn index(&self, bed: BedId) -> &Bed {
        &self.beds[bed.index()]
    }
}

impl std::ops::IndexMut<BedId> for BedStore {
    fn index_mut(&mut self, bed: BedId) -> &mut Bed {
        &mut self.beds[bed.index()]
    }
}
