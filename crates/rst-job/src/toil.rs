//! The fixed toil sequence of a restrain job.

use std::fmt;

/// One step of the restrain job, in execution order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToilKind {
    /// Target takes ownership of the bed (non-medical beds only).
    ClaimBed,
    /// Worker walks up to the target.
    GotoTarget,
    /// Contested restraint; adds `Restrained` and `Annoyed` on success.
    ApplyRestraint,
    /// Target becomes a captive of the player faction.
    MakePrisoner,
    /// Worker lifts the target.
    StartCarry,
    /// Worker hauls the target to the bed.
    GotoBed,
    /// Captive conversion again, plus default player settings.
    SecureCustody,
    /// Bed reservation is handed back before the drop.
    ReleaseBed,
    /// Target is put down, tucked in, and unrestrained.
    TuckIntoBed,
}

/// How a toil decides it is finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompleteMode {
    /// Done as soon as its enter action has run.
    Instant,
    /// Suspends until the pather reports arrival.
    PatherArrival,
}

/// Verdict of a toil's guard, evaluated just before the toil is entered.
/// A guard that rejects the job outright yields a `FailReason` instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    Proceed,
    /// Toil does not apply to this job; move on without entering it.
    Skip,
}

impl ToilKind {
    pub const SEQUENCE: [ToilKind; 9] = [
        ToilKind::ClaimBed,
        ToilKind::GotoTarget,
        ToilKind::ApplyRestraint,
        ToilKind::MakePrisoner,
        ToilKind::StartCarry,
        ToilKind::GotoBed,
        ToilKind::SecureCustody,
        ToilKind::ReleaseBed,
        ToilKind::TuckIntoBed,
    ];

    pub fn complete_mode(self) -> CompleteMode {
        match self {
            ToilKind::GotoTarget | ToilKind::GotoBed => CompleteMode::PatherArrival,
            _ => CompleteMode::Instant,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToilKind::ClaimBed       => "claim_bed",
            ToilKind::GotoTarget     => "goto_target",
            ToilKind::ApplyRestraint => "apply_restraint",
            ToilKind::MakePrisoner   => "make_prisoner",
            ToilKind::StartCarry     => "start_carry",
            ToilKind::GotoBed        => "goto_bed",
            ToilKind::SecureCustody  => "secure_custody",
            ToilKind::ReleaseBed     => "release_bed",
            ToilKind::TuckIntoBed    => "tuck_into_bed",
        }
    }
}

impl fmt::Display for ToilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
