//! Turning the restrained target into a captive of the player faction.

use rst_pawn::InteractionMode;

use crate::{ClamorKind, Job, JobContext, JobEvent};

/// Make the job's target a prisoner of the player faction, captured by the
/// job's worker.
///
/// Does nothing and returns `false` when the job does not take prisoners.
/// Running it again on an existing captive leaves the same custody state
/// behind, though the side effects (clamor, quest signals) fire again.
pub fn make_prisoner(ctx: &mut JobContext<'_>, job: &Job, clamor_radius: f32) -> bool {
    if !job.task.make_target_prisoner {
        return false;
    }
    let (worker, target) = (job.worker(), job.target());
    let t = target.index();
    let host = ctx.world.player_faction;

    ctx.world.pawns.guest[t].captured_by(host, worker);
    ctx.emit(JobEvent::Captured { job: job.id, prisoner: target, by: worker });

    ctx.world.remove_released_prisoner_memories(target);

    if let Some(lord_id) = ctx.world.pawns.lord[t] {
        if let Some(lord) = ctx.world.lords.get_mut(lord_id) {
            lord.notify_pawn_attempt_arrested(target);
            ctx.emit(JobEvent::LordNotified { lord: lord_id, pawn: target });
        }
    }

    let at = ctx.world.pawns.position[t];
    ctx.emit(JobEvent::Clamor { source: target, at, radius: clamor_radius, kind: ClamorKind::Harm });

    let signals: Vec<String> =
        ctx.world.pawns.quest_tags[t].iter().map(|tag| format!("{tag}.Arrested")).collect();
    for signal in signals {
        ctx.emit(JobEvent::QuestSignal { signal, subject: target });
    }

    if let Some(record) = ctx.world.pawns.guest[t].record_mut() {
        record.released = false;
        record.interaction_mode = InteractionMode::AttemptRecruit;
        record.resistance = 0.0;
    }
    true
}
