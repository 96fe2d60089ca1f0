/// Which proficiency a check is rolled on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContestSkill {
    Combat,
    Social,
}

impl ContestSkill {
    pub fn as_str(self) -> &'static str {
        match self {
            ContestSkill::Combat => "combat",
            ContestSkill::Social => "social",
        }
    }
}

impl std::fmt::Display for ContestSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a contest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contestant {
    pub combat:                i32,
    pub social:                i32,
    pub incapable_of_violence: bool,
}

impl Contestant {
    pub fn new(combat: i32, social: i32) -> Self {
        Self { combat, social, incapable_of_violence: false }
    }

    pub fn incapable(mut self) -> Self {
        self.incapable_of_violence = true;
        self
    }

    #[inline]
    pub fn level(&self, skill: ContestSkill) -> i32 {
        match skill {
            ContestSkill::Combat => self.combat,
            ContestSkill::Social => self.social,
        }
    }
}
