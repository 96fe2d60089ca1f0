//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per pawn or bed.  Columns that do not apply to a row's `kind`
//! are left empty.
//!
//! ```csv
//! kind,name,faction,x,z,melee,social,incapable,mental,slots,for_prisoners,medical
//! pawn,Ada,0,0,0,9,3,0,none,,,
//! pawn,Bo,0,6,2,4,7,0,aggressive,,,
//! bed,,,12,0,,,,,1,1,0
//! ```
//!
//! | Column          | Applies to | Meaning                                       |
//! |-----------------|------------|-----------------------------------------------|
//! | `kind`          | both       | `pawn` or `bed`                               |
//! | `faction`       | pawn       | `FactionId` (u16)                             |
//! | `x`, `z`        | both       | cell                                          |
//! | `melee/social`  | pawn       | skill levels, clamped to `0..=20`             |
//! | `incapable`     | pawn       | `1` = incapable of violence                   |
//! | `mental`        | pawn       | `none`, `distressed`, `aggressive`            |
//! | `slots`         | bed        | sleeping slots (default 1)                    |
//! | `for_prisoners` | bed        | `1` = prison bed                              |
//! | `medical`       | bed        | `1` = hospital bed                            |
//!
//! Pawns receive ids in file order; beds likewise, independently.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rst_core::{Cell, FactionId};

use crate::{Bed, BedStore, LordStore, MentalState, PawnError, PawnResult, PawnRngs, PawnSpec, PawnStoreBuilder, World};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    kind:          String,
    name:          Option<String>,
    faction:       Option<u16>,
    x:             i32,
    z:             i32,
    melee:         Option<i32>,
    social:        Option<i32>,
    incapable:     Option<u8>,
    mental:        Option<String>,
    slots:         Option<u8>,
    for_prisoners: Option<u8>,
    medical:       Option<u8>,
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Parsed roster, ready to be turned into a [`World`].
#[derive(Clone, Debug, Default)]
pub struct Roster {
    pub pawns: Vec<PawnSpec>,
    pub beds:  Vec<Bed>,
}

impl Roster {
    /// Build the world and per-pawn RNGs.
    pub fn into_world(self, seed: u64, player_faction: FactionId) -> (World, PawnRngs) {
        let (pawns, rngs) = PawnStoreBuilder::new(seed).pawns(self.pawns).build();
        let mut beds = BedStore::new();
        for bed in self.beds {
            beds.add(bed);
        }
        (World::new(pawns, beds, LordStore::new(), player_faction), rngs)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> PawnResult<Roster> {
    let file = std::fs::File::open(path).map_err(PawnError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> PawnResult<Roster> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut roster = Roster::default();

    for (line, result) in rdr.deserialize::<RosterRecord>().enumerate() {
        let rec = result?;
        let cell = Cell::new(rec.x, rec.z);
        match rec.kind.as_str() {
            "pawn" => {
                let faction = rec.faction.ok_or_else(|| {
                    PawnError::Parse(format!("row {}: pawn without faction", line + 1))
                })?;
                let mental = match rec.mental.as_deref() {
                    None => MentalState::None,
                    Some(s) => MentalState::parse(s).ok_or_else(|| {
                        PawnError::Parse(format!("row {}: unknown mental state {s:?}", line + 1))
                    })?,
                };
                let mut spec = PawnSpec::colonist(rec.name.unwrap_or_default(), FactionId(faction), cell)
                    .melee(rec.melee.unwrap_or(0))
                    .social(rec.social.unwrap_or(0))
                    .mental(mental);
                if rec.incapable.unwrap_or(0) != 0 {
                    spec = spec.incapable_of_violence();
                }
                roster.pawns.push(spec);
            }
            "bed" => {
                let mut bed = Bed::new(cell, rec.slots.unwrap_or(1));
                if rec.for_prisoners.unwrap_or(0) != 0 {
                    bed = bed.for_prisoners();
                }
                if rec.medical.unwrap_or(0) != 0 {
                    bed = bed.medical();
                }
                roster.beds.push(bed);
            }
            other => {
                return Err(PawnError::Parse(format!("row {}: unknown kind {other:?}", line + 1)));
            }
        }
    }

    Ok(roster)
}
