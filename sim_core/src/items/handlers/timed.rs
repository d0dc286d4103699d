//! Items driven by their own fixed-interval tick

use crate::catalog::ids;
use crate::components::{ArchangelsState, GuinsoosState, Health, ItemEffectState, SpiritVisageState, StatBonus};
use crate::context::CombatContext;
use crate::events::Event;
use crate::items::{grant, live_copies, ItemHandler};
use crate::types::Entity;
use tracing::debug;

pub struct ArchangelsStaff;

impl ItemHandler for ArchangelsStaff {
    fn api_name(&self) -> &'static str {
        ids::ARCHANGELS_STAFF
    }

    state_slot!(ArchangelsState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        let Some(state) = ctx.world.get_mut::<ArchangelsState>(holder) else {
            return;
        };
        state.reset();
        let interval = state.interval;
        if interval > 0.0 {
            let at = ctx.now() + interval;
            ctx.enqueue(Event::ArchangelsTick { entity: holder }, at);
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        matches!(event, Event::ArchangelsTick { entity } if *entity == holder)
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let copies = live_copies(&ctx.world, holder, self.api_name());
        if copies == 0 {
            return;
        }
        let now = ctx.now();
        let Some(state) = ctx.world.get_mut::<ArchangelsState>(holder) else {
            return;
        };
        let gain = state.ap_per_interval * copies as f64;
        state.stacks += 1;
        state.total_ap += gain;
        let interval = state.interval;
        debug!(entity = %holder, t = now, gain, stacks = state.stacks, "archangel's tick");

        grant(
            ctx,
            holder,
            StatBonus {
                ability_power: gain,
                ..StatBonus::default()
            },
        );
        ctx.enqueue(Event::ArchangelsTick { entity: holder }, now + interval);
    }
}

pub struct GuinsoosRageblade;

impl ItemHandler for GuinsoosRageblade {
    fn api_name(&self) -> &'static str {
        ids::GUINSOOS_RAGEBLADE
    }

    state_slot!(GuinsoosState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        let Some(state) = ctx.world.get_mut::<GuinsoosState>(holder) else {
            return;
        };
        state.reset();
        let interval = state.interval;
        if interval > 0.0 {
            let at = ctx.now() + interval;
            ctx.enqueue(Event::GuinsoosTick { entity: holder }, at);
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        matches!(event, Event::GuinsoosTick { entity } if *entity == holder)
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let copies = live_copies(&ctx.world, holder, self.api_name());
        if copies == 0 {
            return;
        }
        let now = ctx.now();
        let Some(state) = ctx.world.get_mut::<GuinsoosState>(holder) else {
            return;
        };
        let gain = state.as_per_stack * copies as f64;
        state.stacks += 1;
        state.total_as += gain;
        let interval = state.interval;
        debug!(entity = %holder, t = now, gain, stacks = state.stacks, "guinsoo's tick");

        grant(
            ctx,
            holder,
            StatBonus {
                percent_as: gain,
                ..StatBonus::default()
            },
        );
        ctx.enqueue(Event::GuinsoosTick { entity: holder }, now + interval);
    }
}

/// Periodic heal scaled by missing health
pub struct SpiritVisage;

impl ItemHandler for SpiritVisage {
    fn api_name(&self) -> &'static str {
        ids::SPIRIT_VISAGE
    }

    state_slot!(SpiritVisageState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        let Some(interval) = ctx
            .world
            .get::<SpiritVisageState>(holder)
            .map(|s| s.tick_interval)
        else {
            return;
        };
        if interval > 0.0 {
            let at = ctx.now() + interval;
            ctx.enqueue(Event::SpiritVisageHealTick { entity: holder }, at);
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        matches!(event, Event::SpiritVisageHealTick { entity } if *entity == holder)
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let copies = live_copies(&ctx.world, holder, self.api_name());
        if copies == 0 {
            return;
        }
        let now = ctx.now();
        let Some(state) = ctx.world.get::<SpiritVisageState>(holder).cloned() else {
            return;
        };
        if let Some(health) = ctx.world.get_mut::<Health>(holder) {
            let amount = (health.missing_hp() * state.missing_health_rate).max(state.min_heal)
                * copies as f64;
            let restored = health.heal(amount);
            debug!(entity = %holder, t = now, amount, restored, "spirit visage heal");
        }
        ctx.enqueue(
            Event::SpiritVisageHealTick { entity: holder },
            now + state.tick_interval,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{bus, context, holder, run_until};
    use super::*;
    use crate::components::{Attack, Equipment, Spell};
    use crate::items::ItemManager;

    #[test]
    fn test_archangels_ticks_on_interval() {
        let mut ctx = context();
        let e = holder(&mut ctx, &[ids::ARCHANGELS_STAFF]);
        let mut bus = bus();
        ItemManager::enqueue_initial(&mut ctx);
        run_until(&mut ctx, &mut bus, 11.0);

        let state = ctx.world.get::<ArchangelsState>(e).unwrap();
        assert_eq!(state.stacks, 2);
        assert!((ctx.world.get::<Spell>(e).unwrap().bonus_ap - 60.0).abs() < 0.01);
        assert!((ctx.world.get::<Spell>(e).unwrap().final_ap - 160.0).abs() < 0.01);
    }

    #[test]
    fn test_archangels_scales_with_copies() {
        let mut ctx = context();
        let e = holder(&mut ctx, &[ids::ARCHANGELS_STAFF, ids::ARCHANGELS_STAFF]);
        let mut bus = bus();
        ItemManager::enqueue_initial(&mut ctx);
        let seen = run_until(&mut ctx, &mut bus, 6.0);

        // One tick chain for two copies
        let ticks = seen
            .iter()
            .filter(|i| matches!(i.event, Event::ArchangelsTick { .. }))
            .count();
        assert_eq!(ticks, 1);
        assert!((ctx.world.get::<Spell>(e).unwrap().bonus_ap - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_tick_noop_after_removal() {
        let mut ctx = context();
        let e = holder(&mut ctx, &[ids::GUINSOOS_RAGEBLADE]);
        let mut bus = bus();
        ItemManager::enqueue_initial(&mut ctx);
        run_until(&mut ctx, &mut bus, 2.5);
        let before = ctx.world.get::<Attack>(e).unwrap().bonus_percent_as;
        assert!((before - 0.10).abs() < 0.01);

        ctx.world.get_mut::<Equipment>(e).unwrap().items.clear();
        ctx.enqueue(Event::GuinsoosTick { entity: e }, 3.0);
        run_until(&mut ctx, &mut bus, 5.0);
        let after = ctx.world.get::<Attack>(e).unwrap().bonus_percent_as;
        assert!((after - before).abs() < 1e-9);
    }

    #[test]
    fn test_spirit_visage_heal_floor_and_reduction() {
        let mut ctx = context();
        let e = holder(&mut ctx, &[ids::SPIRIT_VISAGE]);
        {
            let health = ctx.world.get_mut::<Health>(e).unwrap();
            health.current_hp = 900.0;
            health.heal_reduction = 0.5;
        }
        let mut bus = bus();
        ItemManager::enqueue_initial(&mut ctx);
        run_until(&mut ctx, &mut bus, 5.0);

        // 100 missing * 0.15 = 15, floored to 100, halved by the wound
        assert!((ctx.world.get::<Health>(e).unwrap().current_hp - 950.0).abs() < 0.01);
    }
}
