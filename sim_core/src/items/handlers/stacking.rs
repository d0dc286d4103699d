//! Items that stack on the holder's own attacks or on damage taken

use crate::catalog::ids;
use crate::components::{
    FlickerbladeState, ItemEffectState, KrakensState, Mana, ShojinState, StatBonus, TitansState,
};
use crate::context::CombatContext;
use crate::events::Event;
use crate::items::{grant, live_copies, ItemHandler};
use crate::types::Entity;
use tracing::debug;

/// Stacks on attacks and on damage taken, bonus resists at the cap
pub struct TitansResolve;

impl ItemHandler for TitansResolve {
    fn api_name(&self) -> &'static str {
        ids::TITANS_RESOLVE
    }

    state_slot!(TitansState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        if let Some(state) = ctx.world.get_mut::<TitansState>(holder) {
            state.reset();
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        match event {
            Event::AttackLanded { source, .. } => *source == holder,
            Event::DamageApplied(damage) => damage.target == holder && damage.source != holder,
            _ => false,
        }
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        if live_copies(&ctx.world, holder, self.api_name()) == 0 {
            return;
        }
        let now = ctx.now();
        let Some(state) = ctx.world.get_mut::<TitansState>(holder) else {
            return;
        };
        if state.stacks >= state.stack_cap {
            return;
        }
        state.stacks += 1;
        let mut bonus = StatBonus {
            percent_ad: state.ad_per_stack,
            ability_power: state.ap_per_stack,
            ..StatBonus::default()
        };
        if state.stacks == state.stack_cap && !state.cap_bonus_applied {
            state.cap_bonus_applied = true;
            bonus.armor = state.resists_at_cap;
            bonus.magic_resist = state.resists_at_cap;
            debug!(entity = %holder, t = now, "titan's resolve reached cap");
        }
        grant(ctx, holder, bonus);
    }
}

/// Attack speed per attack, AD and AP every few attacks
pub struct NavoriFlickerblades;

impl ItemHandler for NavoriFlickerblades {
    fn api_name(&self) -> &'static str {
        ids::NAVORI_FLICKERBLADES
    }

    state_slot!(FlickerbladeState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        if let Some(state) = ctx.world.get_mut::<FlickerbladeState>(holder) {
            state.reset();
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        matches!(event, Event::AttackFired { source } if *source == holder)
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let copies = live_copies(&ctx.world, holder, self.api_name()) as f64;
        if copies == 0.0 {
            return;
        }
        let Some(state) = ctx.world.get_mut::<FlickerbladeState>(holder) else {
            return;
        };
        state.attack_counter += 1;
        let mut bonus = StatBonus {
            percent_as: state.as_per_stack * copies,
            ..StatBonus::default()
        };
        state.total_as += bonus.percent_as;
        if state.attack_counter % state.stacks_per_bonus.max(1) == 0 {
            bonus.percent_ad = state.ad_per_bonus * copies;
            bonus.ability_power = state.ap_per_bonus * copies;
            state.total_ad += bonus.percent_ad;
            state.total_ap += bonus.ability_power;
        }
        grant(ctx, holder, bonus);
    }
}

/// Percent AD per landed attack, uncapped
pub struct KrakensFury;

impl ItemHandler for KrakensFury {
    fn api_name(&self) -> &'static str {
        ids::KRAKENS_FURY
    }

    state_slot!(KrakensState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        if let Some(state) = ctx.world.get_mut::<KrakensState>(holder) {
            state.reset();
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        matches!(event, Event::AttackLanded { source, .. } if *source == holder)
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        if live_copies(&ctx.world, holder, self.api_name()) == 0 {
            return;
        }
        let Some(state) = ctx.world.get_mut::<KrakensState>(holder) else {
            return;
        };
        state.stacks += 1;
        state.total_ad += state.ad_per_stack;
        let gain = state.ad_per_stack;
        grant(
            ctx,
            holder,
            StatBonus {
                percent_ad: gain,
                ..StatBonus::default()
            },
        );
    }
}

/// Flat mana on every attack
pub struct SpearOfShojin;

impl ItemHandler for SpearOfShojin {
    fn api_name(&self) -> &'static str {
        ids::SPEAR_OF_SHOJIN
    }

    state_slot!(ShojinState);

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        matches!(event, Event::AttackFired { source } if *source == holder)
    }

    fn handle(&self, _event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let copies = live_copies(&ctx.world, holder, self.api_name());
        if copies == 0 {
            return;
        }
        let Some(per_attack) = ctx.world.get::<ShojinState>(holder).map(|s| s.mana_per_attack) else {
            return;
        };
        if let Some(mana) = ctx.world.get_mut::<Mana>(holder) {
            mana.gain(per_attack * copies as f64);
        }
    }
}
