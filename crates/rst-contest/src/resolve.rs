//! Contest resolution.

use rst_core::Dice;

use crate::{ContestSkill, Contestant};

/// Width of the dice band when both sides are evenly matched.  Each point of
/// skill gap widens the band by one.
pub const BASE_BAND: u32 = 21;

/// How a single check was decided.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Roll {
    /// Defender cannot fight back.
    DefenderIncapable,
    /// Challenger will not lay hands on anyone.
    ChallengerIncapable,
    /// Uneven match decided by `dice ∈ [0, band)`.
    Band { diff: i32, band: u32, dice: u32 },
    /// Even match decided by a unit draw.
    CoinFlip { draw: f64 },
}

/// One check on one skill.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attempt {
    pub skill:   ContestSkill,
    pub roll:    Roll,
    pub success: bool,
}

/// Full record of a contest: the combat check and, if it was rolled, the
/// social fallback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContestOutcome {
    pub combat: Attempt,
    pub social: Option<Attempt>,
}

impl ContestOutcome {
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.combat.success || self.social.is_some_and(|a| a.success)
    }

    /// The skill that carried the contest, if any did.
    pub fn winning_skill(&self) -> Option<ContestSkill> {
        if self.combat.success {
            Some(ContestSkill::Combat)
        } else {
            self.social.filter(|a| a.success).map(|a| a.skill)
        }
    }
}

/// Run the full contest: combat first, social once more if combat failed
/// and the defender is not violently broken.
pub fn resolve<D: Dice + ?Sized>(
    challenger:          &Contestant,
    defender:            &Contestant,
    defender_aggressive: bool,
    dice:                &mut D,
) -> ContestOutcome {
    let combat = opposed_check(ContestSkill::Combat, challenger, defender, dice);
    let social = (!combat.success && !defender_aggressive)
        .then(|| opposed_check(ContestSkill::Social, challenger, defender, dice));
    ContestOutcome { combat, social }
}

/// One opposed check on `skill`.
pub fn opposed_check<D: Dice + ?Sized>(
    skill:      ContestSkill,
    challenger: &Contestant,
    defender:   &Contestant,
    dice:       &mut D,
) -> Attempt {
    if challenger.incapable_of_violence {
        return Attempt { skill, roll: Roll::ChallengerIncapable, success: false };
    }
    if defender.incapable_of_violence {
        return Attempt { skill, roll: Roll::DefenderIncapable, success: true };
    }

    let agent = challenger.level(skill);
    let diff = defender.level(skill) - agent;

    if diff == 0 {
        let draw = dice.unit();
        return Attempt { skill, roll: Roll::CoinFlip { draw }, success: draw < 0.5 };
    }

    let band = BASE_BAND + diff.unsigned_abs();
    let rolled = dice.roll_below(band);
    let success = if diff < 0 {
        rolled as i64 >= agent as i64
    } else {
        (rolled as i64) < agent as i64
    };
    Attempt { skill, roll: Roll::Band { diff, band, dice: rolled }, success }
}

/// Exact probability that a single capable-vs-capable check succeeds.
pub fn success_chance(agent_level: i32, defender_level: i32) -> f64 {
    let diff = defender_level - agent_level;
    if diff == 0 {
        return 0.5;
    }
    let band = (BASE_BAND + diff.unsigned_abs()) as i64;
    let agent = agent_level as i64;
    let winning = if diff < 0 {
        (band - agent.max(0)).clamp(0, band)
    } else {
        agent.clamp(0, band)
    };
    winning as f64 / band as f64
}
