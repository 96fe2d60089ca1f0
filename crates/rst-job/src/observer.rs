//! Job events and the observer that receives them.

use rst_contest::ContestOutcome;
use rst_core::{BedId, Cell, JobId, LordId, PawnId, Tick};
use rst_pawn::{ConditionKind, Lesson};

use crate::{JobEnd, ToilKind};

/// Tone of a user-visible message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Positive,
    Negative,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Positive => "positive",
            MessageKind::Negative => "negative",
        }
    }
}

/// What a disturbance sounds like to pawns nearby.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClamorKind {
    Harm,
}

/// Everything worth reporting while a restrain job runs.
#[derive(Clone, Debug, PartialEq)]
pub enum JobEvent {
    Started { job: JobId, worker: PawnId, target: PawnId, bed: BedId },
    ToilEntered { job: JobId, toil: ToilKind },
    ContestRolled { job: JobId, worker: PawnId, target: PawnId, outcome: ContestOutcome },
    Message { job: JobId, kind: MessageKind, text: String },
    ConditionAdded { pawn: PawnId, kind: ConditionKind },
    ConditionRemoved { pawn: PawnId, kind: ConditionKind },
    BedClaimed { pawn: PawnId, bed: BedId },
    BedUnclaimed { pawn: PawnId, bed: BedId },
    Captured { job: JobId, prisoner: PawnId, by: PawnId },
    LordNotified { lord: LordId, pawn: PawnId },
    Clamor { source: PawnId, at: Cell, radius: f32, kind: ClamorKind },
    QuestSignal { signal: String, subject: PawnId },
    TuckedIntoBed { pawn: PawnId, bed: BedId },
    LessonOpportunity { lesson: Lesson, pawn: PawnId },
    Ended { job: JobId, end: JobEnd },
}

impl JobEvent {
    /// Short machine-readable name, used as the `kind` column of event logs.
    pub fn name(&self) -> &'static str {
        match self {
            JobEvent::Started { .. }           => "started",
            JobEvent::ToilEntered { .. }       => "toil_entered",
            JobEvent::ContestRolled { .. }     => "contest_rolled",
            JobEvent::Message { .. }           => "message",
            JobEvent::ConditionAdded { .. }    => "condition_added",
            JobEvent::ConditionRemoved { .. }  => "condition_removed",
            JobEvent::BedClaimed { .. }        => "bed_claimed",
            JobEvent::BedUnclaimed { .. }      => "bed_unclaimed",
            JobEvent::Captured { .. }          => "captured",
            JobEvent::LordNotified { .. }      => "lord_notified",
            JobEvent::Clamor { .. }            => "clamor",
            JobEvent::QuestSignal { .. }       => "quest_signal",
            JobEvent::TuckedIntoBed { .. }     => "tucked_into_bed",
            JobEvent::LessonOpportunity { .. } => "lesson_opportunity",
            JobEvent::Ended { .. }             => "ended",
        }
    }
}

/// Receives [`JobEvent`]s as they happen.
///
/// The default implementation ignores everything.
pub trait JobObserver {
    fn on_event(&mut self, _now: Tick, _event: &JobEvent) {}
}

pub struct NoopJobObserver;

impl JobObserver for NoopJobObserver {}

/// Keeps every event in memory.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<(Tick, JobEvent)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobEvent> + '_ {
        self.events.iter().map(|(_, e)| e)
    }

    /// Number of events whose [`name`][JobEvent::name] is `name`.
    pub fn count(&self, name: &str) -> usize {
        self.iter().filter(|e| e.name() == name).count()
    }

    /// Toils entered, in order.
    pub fn toils(&self) -> Vec<ToilKind> {
        self.iter()
            .filter_map(|e| match e {
                JobEvent::ToilEntered { toil, .. } => Some(*toil),
                _ => None,
            })
            .collect()
    }
}

impl JobObserver for EventLog {
    fn on_event(&mut self, now: Tick, event: &JobEvent) {
        self.events.push((now, event.clone()));
    }
}
