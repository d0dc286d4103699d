//! Timed buffs on the holder. Refreshable ones stamp their expiry with an
//! activation sequence so an older expiry cannot cut a newer window short.

use crate::catalog::ids;
use crate::components::{
    BlueBuffState, EvenshroudState, ImmuneToCc, ItemEffectState, Mana, NashorsState,
    QuicksilverState, StatBonus,
};
use crate::context::CombatContext;
use crate::events::{DebuffApplication, Event};
use crate::items::{grant, live_copies, revoke, ItemHandler};
use crate::systems::enemies_within;
use crate::types::{DebuffKind, EffectOrigin, Entity};
use tracing::debug;

/// Duration of the Evenshroud sunder aura, long enough to cover any fight
const AURA_DURATION: f64 = 999.0;

/// CC immunity from combat start with attack speed procs while it lasts
pub struct Quicksilver;

impl ItemHandler for Quicksilver {
    fn api_name(&self) -> &'static str {
        ids::QUICKSILVER
    }

    state_slot!(QuicksilverState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        let Some(state) = ctx.world.get_mut::<QuicksilverState>(holder) else {
            return;
        };
        state.reset();
        if state.duration <= 0.0 {
            return;
        }
        state.active = true;
        let (duration, interval) = (state.duration, state.proc_interval);
        ctx.world.insert(holder, ImmuneToCc);

        let now = ctx.now();
        if interval > 0.0 && now + interval <= duration {
            ctx.enqueue(Event::QuicksilverProc { entity: holder }, now + interval);
        }
        ctx.enqueue(Event::QuicksilverEnd { entity: holder }, now + duration);
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        match event {
            Event::QuicksilverProc { entity } | Event::QuicksilverEnd { entity } => *entity == holder,
            _ => false,
        }
    }

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let now = ctx.now();
        match event {
            Event::QuicksilverProc { .. } => {
                let copies = live_copies(&ctx.world, holder, self.api_name());
                if copies == 0 {
                    return;
                }
                let Some(state) = ctx.world.get_mut::<QuicksilverState>(holder) else {
                    return;
                };
                if !state.active {
                    return;
                }
                let gain = state.proc_attack_speed * copies as f64;
                state.stacks += 1;
                state.total_as += gain;
                let next = now + state.proc_interval;
                let continues = state.proc_interval > 0.0 && next <= state.duration;
                debug!(entity = %holder, t = now, gain, stacks = state.stacks, "quicksilver proc");

                grant(
                    ctx,
                    holder,
                    StatBonus {
                        percent_as: gain,
                        ..StatBonus::default()
                    },
                );
                if continues {
                    ctx.enqueue(Event::QuicksilverProc { entity: holder }, next);
                }
            }
            Event::QuicksilverEnd { .. } => {
                if let Some(state) = ctx.world.get_mut::<QuicksilverState>(holder) {
                    state.active = false;
                }
                ctx.world.remove::<ImmuneToCc>(holder);
                debug!(entity = %holder, t = now, "quicksilver ended");
            }
            _ => {}
        }
    }
}

/// Attack speed for a few seconds after each cast
pub struct NashorsTooth;

impl ItemHandler for NashorsTooth {
    fn api_name(&self) -> &'static str {
        ids::NASHORS_TOOTH
    }

    state_slot!(NashorsState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        if let Some(state) = ctx.world.get_mut::<NashorsState>(holder) {
            state.reset();
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        match event {
            Event::SpellLanded { source, .. } => *source == holder,
            Event::NashorsToothExpire { entity, .. } => *entity == holder,
            _ => false,
        }
    }

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let now = ctx.now();
        match event {
            Event::SpellLanded { .. } => {
                let copies = live_copies(&ctx.world, holder, self.api_name());
                if copies == 0 {
                    return;
                }
                let Some(state) = ctx.world.get_mut::<NashorsState>(holder) else {
                    return;
                };
                state.sequence += 1;
                state.end_time = now + state.duration;
                let (sequence, end_time) = (state.sequence, state.end_time);
                let newly_active = !state.active;
                if newly_active {
                    state.active = true;
                    state.applied_as = state.attack_speed * copies as f64;
                }
                let applied = state.applied_as;
                debug!(entity = %holder, t = now, sequence, end = end_time, "nashor's tooth window");

                if newly_active {
                    grant(
                        ctx,
                        holder,
                        StatBonus {
                            percent_as: applied,
                            ..StatBonus::default()
                        },
                    );
                }
                ctx.enqueue(
                    Event::NashorsToothExpire {
                        entity: holder,
                        sequence,
                    },
                    end_time,
                );
            }
            Event::NashorsToothExpire { sequence, .. } => {
                let Some(state) = ctx.world.get_mut::<NashorsState>(holder) else {
                    return;
                };
                if state.sequence != *sequence || !state.active {
                    return;
                }
                state.active = false;
                let applied = std::mem::take(&mut state.applied_as);
                revoke(
                    ctx,
                    holder,
                    StatBonus {
                        percent_as: applied,
                        ..StatBonus::default()
                    },
                );
            }
            _ => {}
        }
    }
}

/// Mana refund on cast, damage amp after a takedown
pub struct BlueBuff;

impl ItemHandler for BlueBuff {
    fn api_name(&self) -> &'static str {
        ids::BLUE_BUFF
    }

    state_slot!(BlueBuffState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        if let Some(state) = ctx.world.get_mut::<BlueBuffState>(holder) {
            state.reset();
        }
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        match event {
            Event::SpellLanded { source, .. } => *source == holder,
            Event::Kill { killer, .. } => *killer == holder,
            Event::Assist { assistor, .. } => *assistor == holder,
            Event::BlueBuffAmpActivate { entity } => *entity == holder,
            Event::BlueBuffAmpDeactivate { entity, .. } => *entity == holder,
            _ => false,
        }
    }

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let now = ctx.now();
        match event {
            // Runs after the cast has drained mana
            Event::SpellLanded { .. } => {
                if live_copies(&ctx.world, holder, self.api_name()) == 0 {
                    return;
                }
                let Some(refund) = ctx.world.get::<BlueBuffState>(holder).map(|s| s.mana_refund) else {
                    return;
                };
                if let Some(mana) = ctx.world.get_mut::<Mana>(holder) {
                    mana.gain(refund);
                }
            }
            Event::Kill { .. } | Event::Assist { .. } => {
                ctx.enqueue_now(Event::BlueBuffAmpActivate { entity: holder });
            }
            Event::BlueBuffAmpActivate { .. } => {
                if live_copies(&ctx.world, holder, self.api_name()) == 0 {
                    return;
                }
                let Some(state) = ctx.world.get_mut::<BlueBuffState>(holder) else {
                    return;
                };
                state.sequence += 1;
                state.end_time = now + state.takedown_timer;
                let (sequence, end_time) = (state.sequence, state.end_time);
                let newly_active = !state.active;
                if newly_active {
                    state.active = true;
                    state.applied_amp = state.damage_amp;
                }
                let applied = state.applied_amp;
                debug!(entity = %holder, t = now, sequence, end = end_time, "blue buff amp active");

                if newly_active {
                    grant(
                        ctx,
                        holder,
                        StatBonus {
                            damage_amp: applied,
                            ..StatBonus::default()
                        },
                    );
                }
                ctx.enqueue(
                    Event::BlueBuffAmpDeactivate {
                        entity: holder,
                        sequence,
                    },
                    end_time,
                );
            }
            Event::BlueBuffAmpDeactivate { sequence, .. } => {
                let Some(state) = ctx.world.get_mut::<BlueBuffState>(holder) else {
                    return;
                };
                if state.sequence != *sequence || !state.active {
                    return;
                }
                state.active = false;
                let applied = std::mem::take(&mut state.applied_amp);
                revoke(
                    ctx,
                    holder,
                    StatBonus {
                        damage_amp: applied,
                        ..StatBonus::default()
                    },
                );
            }
            _ => {}
        }
    }
}

/// Bonus resists from combat start and a sunder aura on nearby enemies
pub struct Evenshroud;

impl ItemHandler for Evenshroud {
    fn api_name(&self) -> &'static str {
        ids::EVENSHROUD
    }

    state_slot!(EvenshroudState);

    fn on_equip(&self, holder: Entity, ctx: &mut CombatContext) {
        let Some(state) = ctx.world.get_mut::<EvenshroudState>(holder) else {
            return;
        };
        state.reset();
        let (range, reduction) = (state.hex_range, state.armor_reduction);

        let now = ctx.now();
        for enemy in enemies_within(&ctx.world, holder, range) {
            ctx.enqueue(
                Event::ApplyDebuff(DebuffApplication {
                    target: enemy,
                    source: Some(holder),
                    kind: DebuffKind::Sunder,
                    magnitude: reduction,
                    duration: AURA_DURATION,
                    origin: EffectOrigin::Item,
                    source_id: ids::EVENSHROUD.to_string(),
                }),
                now,
            );
        }
        ctx.enqueue(Event::EvenshroudResistActivate { entity: holder }, now);
    }

    fn accepts(&self, event: &Event, holder: Entity) -> bool {
        match event {
            Event::EvenshroudResistActivate { entity }
            | Event::EvenshroudResistDeactivate { entity } => *entity == holder,
            _ => false,
        }
    }

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext) {
        let now = ctx.now();
        match event {
            Event::EvenshroudResistActivate { .. } => {
                if live_copies(&ctx.world, holder, self.api_name()) == 0 {
                    return;
                }
                let Some(state) = ctx.world.get_mut::<EvenshroudState>(holder) else {
                    return;
                };
                if state.resists_active {
                    return;
                }
                state.resists_active = true;
                state.applied_resists = state.bonus_resists;
                let (resists, duration) = (state.applied_resists, state.resist_duration);
                debug!(entity = %holder, t = now, resists, "evenshroud resists active");

                grant(
                    ctx,
                    holder,
                    StatBonus {
                        armor: resists,
                        magic_resist: resists,
                        ..StatBonus::default()
                    },
                );
                ctx.enqueue(
                    Event::EvenshroudResistDeactivate { entity: holder },
                    now + duration,
                );
            }
            Event::EvenshroudResistDeactivate { .. } => {
                let Some(state) = ctx.world.get_mut::<EvenshroudState>(holder) else {
                    return;
                };
                if !state.resists_active {
                    return;
                }
                state.resists_active = false;
                let resists = std::mem::take(&mut state.applied_resists);
                revoke(
                    ctx,
                    holder,
                    StatBonus {
                        armor: resists,
                        magic_resist: resists,
                        ..StatBonus::default()
                    },
                );
            }
            _ => {}
        }
    }
}
