//! Items that debuff whatever the holder hits

use crate::catalog::ids;
use crate::components::{RedBuffState, VoidStaffState};
use crate::context::CombatContext;
use crate::events::{DebuffApplication, Event};
use crate::items::{live_copies, ItemHandler};
use crate::types::{DebuffKind, EffectOrigin, Entity};

/// Target hit by an attack or a targeted spell from `holder`
fn hit_target(event: &Event, holder: Entity) -> Option<Entity> {
    match event {
        Event::AttackLanded { source, target } if *source == holder => Some(*target),
        Event::SpellLanded {
            source,
            target: Some(target),
        } if *source == holder => Some(*target),
        _ => None,
    }
}

fn debuff(
    target: Entity,
    holder: Entity,
    kind: DebuffKind,
    magnitude: f64,
    duration: f64,
    source_id: &str,
) -> Event {
    Event::ApplyDebuff(DebuffApplication {
        target,
        source: Some(holder),
        kind,
        magnitude,
        duration,
        origin: EffectOrigin::Item,
        source_id: source_id.to_string(),
    })
}

/// Magic resist shred on hit
pub struct VoidStaff;

impl ItemHandler for VoidStaff {
    fn api_name(&self) -> &'static str {
        ids::VOID_STAFF
    }

    state_slot!(VoidStaffState);

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        hit_target(event, holder).is_some()
    }

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let Some(target) = hit_target(event, holder) else {
            return;
        };
        if live_copies(&ctx.world, holder, self.api_name()) == 0 {
            return;
        }
        let Some(state) = ctx.world.get::<VoidStaffState>(holder) else {
            return;
        };
        let event = debuff(
            target,
            holder,
            DebuffKind::Shred,
            state.mr_shred,
            state.duration,
            self.api_name(),
        );
        ctx.enqueue_now(event);
    }
}

/// Burn and wound on hit
pub struct RedBuff;

impl ItemHandler for RedBuff {
    fn api_name(&self) -> &'static str {
        ids::RED_BUFF
    }

    state_slot!(RedBuffState);

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        hit_target(event, holder).is_some()
    }

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let Some(target) = hit_target(event, holder) else {
            return;
        };
        if live_copies(&ctx.world, holder, self.api_name()) == 0 {
            return;
        }
        let Some(state) = ctx.world.get::<RedBuffState>(holder).cloned() else {
            return;
        };
        ctx.enqueue_now(debuff(
            target,
            holder,
            DebuffKind::Burn,
            state.burn_percent,
            state.duration,
            self.api_name(),
        ));
        ctx.enqueue_now(debuff(
            target,
            holder,
            DebuffKind::Wound,
            state.heal_reduction,
            state.duration,
            self.api_name(),
        ));
    }
}
