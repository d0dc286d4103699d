//! Spell cast cycle: start, land, recovery

use super::targeting::nearest_enemy;
use crate::components::{Mana, Spell};
use crate::context::CombatContext;
use crate::events::{Event, EventHandler};
use crate::types::Entity;
use tracing::{debug, warn};

pub struct SpellCastSystem;

impl EventHandler for SpellCastSystem {
    fn name(&self) -> &'static str {
        "spell_cast"
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(
            event,
            Event::SpellCastCycleStart { .. }
                | Event::SpellLanded { .. }
                | Event::SpellRecoveryEnd { .. }
        )
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        match event {
            Event::SpellCastCycleStart { entity } => on_cast_start(*entity, ctx),
            Event::SpellLanded { source, .. } => on_landed(*source, ctx),
            Event::SpellRecoveryEnd { entity } => {
                if ctx.world.is_alive(*entity) {
                    ctx.enqueue_now(Event::ChampionAction { entity: *entity });
                }
            }
            _ => {}
        }
    }
}

fn on_cast_start(entity: Entity, ctx: &mut CombatContext) {
    if !ctx.world.is_alive(entity) {
        return;
    }
    let Some(startup) = ctx.world.get::<Spell>(entity).map(|s| s.cast_startup) else {
        warn!(entity = %entity, "cast started without Spell component");
        return;
    };
    let target = nearest_enemy(&ctx.world, entity);
    let at = ctx.now() + startup;
    ctx.enqueue(Event::SpellLanded { source: entity, target }, at);
}

/// Runs after the damage pipeline has resolved the spell
fn on_landed(source: Entity, ctx: &mut CombatContext) {
    let now = ctx.now();
    if let Some(mana) = ctx.world.get_mut::<Mana>(source) {
        mana.drain();
    }
    let Some(spell) = ctx.world.get_mut::<Spell>(source) else {
        warn!(entity = %source, "spell landed without Spell component");
        return;
    };
    spell.cast_count += 1;
    let recovery = spell.cast_recovery;
    debug!(entity = %source, t = now, casts = spell.cast_count, "spell landed");

    ctx.enqueue(Event::SpellRecoveryEnd { entity: source }, now + recovery);
}
