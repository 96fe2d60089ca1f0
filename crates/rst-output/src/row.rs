//! Plain data row types written by output backends.

use rst_core::Tick;
use rst_job::{ClamorKind, Job, JobEnd, JobEvent};

/// One job event, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:   u64,
    /// Owning job, for events that carry one.
    pub job:    Option<u32>,
    /// [`JobEvent::name`].
    pub kind:   &'static str,
    /// The pawn the event is about, if any.
    pub pawn:   Option<u32>,
    pub detail: String,
}

impl EventRow {
    pub fn from_event(tick: Tick, event: &JobEvent) -> Self {
        let (job, pawn, detail) = match event {
            JobEvent::Started { job, worker, target, bed } => {
                (Some(job.0), Some(worker.0), format!("target={} bed={}", target.0, bed.0))
            }
            JobEvent::ToilEntered { job, toil } => (Some(job.0), None, toil.as_str().to_owned()),
            JobEvent::ContestRolled { job, worker, outcome, .. } => {
                let detail = match outcome.winning_skill() {
                    Some(skill) => format!("won:{}", skill.as_str()),
                    None => "lost".to_owned(),
                };
                (Some(job.0), Some(worker.0), detail)
            }
            JobEvent::Message { job, kind, text } => {
                (Some(job.0), None, format!("{}: {text}", kind.as_str()))
            }
            JobEvent::ConditionAdded { pawn, kind } | JobEvent::ConditionRemoved { pawn, kind } => {
                (None, Some(pawn.0), kind.as_str().to_owned())
            }
            JobEvent::BedClaimed { pawn, bed }
            | JobEvent::BedUnclaimed { pawn, bed }
            | JobEvent::TuckedIntoBed { pawn, bed } => (None, Some(pawn.0), format!("bed={}", bed.0)),
            JobEvent::Captured { job, prisoner, by } => {
                (Some(job.0), Some(prisoner.0), format!("by={}", by.0))
            }
            JobEvent::LordNotified { lord, pawn } => (None, Some(pawn.0), format!("lord={}", lord.0)),
            JobEvent::Clamor { source, at, radius, kind } => {
                let kind = match kind {
                    ClamorKind::Harm => "harm",
                };
                (None, Some(source.0), format!("{kind} at {at} radius={radius}"))
            }
            JobEvent::QuestSignal { signal, subject } => (None, Some(subject.0), signal.clone()),
            JobEvent::LessonOpportunity { lesson, pawn } => {
                (None, Some(pawn.0), lesson.as_str().to_owned())
            }
            JobEvent::Ended { job, end } => (Some(job.0), None, end.to_string()),
        };
        Self { tick: tick.0, job, kind: event.name(), pawn, detail }
    }
}

/// One finished job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummaryRow {
    pub job_id:  u32,
    pub worker:  u32,
    pub target:  u32,
    pub bed:     u32,
    pub started: u64,
    pub ended:   u64,
    /// [`JobEnd::as_str`].
    pub end:     &'static str,
    /// Failure reason for incompletable jobs.
    pub reason:  Option<&'static str>,
}

impl JobSummaryRow {
    pub fn new(job: &Job, started: Tick, ended: Tick, end: JobEnd) -> Self {
        Self {
            job_id:  job.id.0,
            worker:  job.worker().0,
            target:  job.target().0,
            bed:     job.bed().0,
            started: started.0,
            ended:   ended.0,
            end:     end.as_str(),
            reason:  end.reason().map(|r| r.as_str()),
        }
    }
}
