//! Basic attack cycle: startup, fire, land, recovery

use super::targeting::nearest_enemy;
use crate::components::{ActionState, Attack};
use crate::context::CombatContext;
use crate::events::{Event, EventHandler};
use crate::types::{ActionPhase, Entity};
use tracing::{debug, warn};

pub struct AutoAttackSystem;

impl EventHandler for AutoAttackSystem {
    fn name(&self) -> &'static str {
        "auto_attack"
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(
            event,
            Event::AttackStartup { .. } | Event::AttackFired { .. } | Event::AttackRecoveryEnd { .. }
        )
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        match event {
            Event::AttackStartup { entity } => on_startup(*entity, ctx),
            Event::AttackFired { source } => on_fired(*source, ctx),
            Event::AttackRecoveryEnd { entity } => {
                if ctx.world.is_alive(*entity) {
                    ctx.enqueue_now(Event::ChampionAction { entity: *entity });
                }
            }
            _ => {}
        }
    }
}

fn on_startup(entity: Entity, ctx: &mut CombatContext) {
    if !ctx.world.is_alive(entity) {
        return;
    }
    let Some(startup) = ctx.world.get::<Attack>(entity).map(|a| a.current_startup) else {
        warn!(entity = %entity, "attack startup without Attack component");
        return;
    };
    if let Some(action) = ctx.world.get_mut::<ActionState>(entity) {
        action.phase = ActionPhase::AttackStartup;
    }
    let at = ctx.now() + startup;
    ctx.enqueue(Event::AttackFired { source: entity }, at);
}

fn on_fired(source: Entity, ctx: &mut CombatContext) {
    if !ctx.world.is_alive(source) {
        return;
    }
    let Some(attack) = ctx.world.get_mut::<Attack>(source) else {
        warn!(entity = %source, "attack fired without Attack component");
        return;
    };
    attack.attack_count += 1;
    let recovery = attack.current_recovery;

    match nearest_enemy(&ctx.world, source) {
        Some(target) => ctx.enqueue_now(Event::AttackLanded { source, target }),
        None => debug!(entity = %source, t = ctx.now(), "attack fired with no living enemy"),
    }

    if let Some(action) = ctx.world.get_mut::<ActionState>(source) {
        action.phase = ActionPhase::AttackRecovering;
    }
    let at = ctx.now() + recovery;
    ctx.enqueue(Event::AttackRecoveryEnd { entity: source }, at);
}
