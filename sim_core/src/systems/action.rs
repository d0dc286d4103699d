//! Per-unit action controller
//!
//! Each `ChampionAction` consults the previous phase and current mana to pick
//! the next step of the attack/cast cycle, then schedules its first event.

use crate::components::ActionState;
use crate::context::CombatContext;
use crate::ecs::ComponentRecord;
use crate::events::{Event, EventHandler};
use crate::types::{ActionPhase, Entity};
use tracing::{debug, warn};

/// What the controller decided to do next
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionDecision {
    Cast,
    Attack,
    Cooldown(f64),
    Wait,
}

/// Pure decision table over the previous phase.
///
/// `prev_duration` is the length of the action that just finished and only
/// matters after a cast.
pub fn decide(
    previous: ActionPhase,
    prev_duration: f64,
    mana_full: bool,
    can_attack: bool,
    cooldown: f64,
) -> ActionDecision {
    match previous {
        ActionPhase::Idle | ActionPhase::AttackCoolingDown | ActionPhase::AttackStartup => {
            if mana_full {
                ActionDecision::Cast
            } else if can_attack {
                ActionDecision::Attack
            } else {
                ActionDecision::Wait
            }
        }
        ActionPhase::AttackRecovering => {
            if mana_full {
                ActionDecision::Cast
            } else {
                ActionDecision::Cooldown(cooldown)
            }
        }
        ActionPhase::Casting => {
            if prev_duration <= cooldown {
                ActionDecision::Cooldown(cooldown - prev_duration)
            } else if can_attack {
                ActionDecision::Attack
            } else if mana_full {
                ActionDecision::Cast
            } else {
                ActionDecision::Wait
            }
        }
    }
}

pub struct ActionSystem;

impl EventHandler for ActionSystem {
    fn name(&self) -> &'static str {
        "action"
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(
            event,
            Event::ChampionAction { .. }
                | Event::AttackCooldownStart { .. }
                | Event::AttackCooldownEnd { .. }
        )
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        match event {
            Event::ChampionAction { entity } => on_champion_action(*entity, ctx),
            Event::AttackCooldownStart { entity } => {
                if !ctx.world.is_alive(*entity) {
                    return;
                }
                let remaining = ctx
                    .world
                    .get::<ActionState>(*entity)
                    .map_or(0.0, |a| a.cooldown_remaining);
                let at = ctx.now() + remaining;
                ctx.enqueue(Event::AttackCooldownEnd { entity: *entity }, at);
            }
            Event::AttackCooldownEnd { entity } => {
                if ctx.world.is_alive(*entity) {
                    ctx.enqueue_now(Event::ChampionAction { entity: *entity });
                }
            }
            _ => {}
        }
    }
}

fn on_champion_action(entity: Entity, ctx: &mut CombatContext) {
    let now = ctx.now();
    let Some(ComponentRecord {
        action: Some(action),
        attack: Some(attack),
        mana: Some(mana),
        health: Some(health),
        spell,
        ..
    }) = ctx.world.record_mut(entity)
    else {
        warn!(entity = %entity, "champion action without action, attack, mana, or health; skipping");
        return;
    };

    if !health.is_alive() {
        return;
    }
    if action.is_stunned {
        debug!(entity = %entity, t = now, "stunned, no action");
        return;
    }

    let previous = action.phase;
    let prev_duration = action.action_duration;
    action.previous_phase = previous;
    action.previous_action_duration = prev_duration;
    action.phase = ActionPhase::Idle;

    let mana_full = spell.is_some() && mana.can_cast();
    let cooldown = attack.current_cooldown();
    let decision = decide(
        previous,
        prev_duration,
        mana_full,
        attack.final_as > 0.0,
        cooldown,
    );

    let next = match decision {
        ActionDecision::Cast => {
            let duration = spell.as_ref().map_or(0.0, |s| s.cast_duration());
            action.begin(ActionPhase::Casting, now, duration);
            Some(Event::SpellCastCycleStart { entity })
        }
        ActionDecision::Attack => {
            let duration = attack.current_startup + attack.current_recovery;
            action.begin(ActionPhase::AttackStartup, now, duration);
            Some(Event::AttackStartup { entity })
        }
        ActionDecision::Cooldown(remaining) => {
            action.begin(ActionPhase::AttackCoolingDown, now, remaining);
            action.cooldown_remaining = remaining;
            Some(Event::AttackCooldownStart { entity })
        }
        ActionDecision::Wait => None,
    };

    debug!(entity = %entity, t = now, ?previous, ?decision, "action decided");
    if let Some(event) = next {
        ctx.enqueue_now(event);
    }
}
