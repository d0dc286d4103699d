//! Damage pipeline
//!
//! `AttackLanded` and `SpellLanded` are turned into fully resolved
//! `DamageApplied` events; handling `DamageApplied` moves HP, mana, kill
//! credit, and damage counters.

mod calculation;

pub use calculation::{mitigate, resist_multiplier, DamageComponents, Defenses, Mitigation};

use crate::components::{Attack, Crit, DamageLog, DamageStats, Health, Mana, Spell};
use crate::config::CritMode;
use crate::context::CombatContext;
use crate::events::{DamageApplied, Event, EventHandler};
use crate::types::{DamageSource, Entity};
use tracing::{debug, warn};

/// Mana an attacker gains per basic attack hit
pub const MANA_PER_ATTACK: f64 = 10.0;
/// Mana a unit gains whenever it takes damage
pub const MANA_ON_DAMAGE_TAKEN: f64 = 10.0;

pub struct DamageSystem;

impl EventHandler for DamageSystem {
    fn name(&self) -> &'static str {
        "damage"
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(
            event,
            Event::AttackLanded { .. } | Event::SpellLanded { .. } | Event::DamageApplied(_)
        )
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        match event {
            Event::AttackLanded { source, target } => {
                let Some(raw) = ctx.world.get::<Attack>(*source).map(|a| a.final_ad) else {
                    warn!(entity = %source, "attack landed without Attack component");
                    return;
                };
                let hit = compute_hit(
                    ctx,
                    *source,
                    *target,
                    DamageComponents::physical(raw),
                    DamageSource::Attack,
                );
                if let Some(hit) = hit {
                    ctx.enqueue_now(Event::DamageApplied(hit));
                }
            }
            Event::SpellLanded {
                source,
                target: Some(target),
            } => {
                let Some(raw) = ctx.world.get::<Spell>(*source).map(Spell::raw_damage) else {
                    warn!(entity = %source, "spell landed without Spell component");
                    return;
                };
                let hit = compute_hit(
                    ctx,
                    *source,
                    *target,
                    DamageComponents::magic(raw),
                    DamageSource::Spell,
                );
                if let Some(hit) = hit {
                    ctx.enqueue_now(Event::DamageApplied(hit));
                }
            }
            Event::DamageApplied(damage) => apply_damage(damage, ctx),
            _ => {}
        }
    }
}

/// Resolve crit, amp, resistance, and durability for one hit.
///
/// Spells only crit when the caster carries an ability-crit marker.
pub fn compute_hit(
    ctx: &mut CombatContext,
    source: Entity,
    target: Entity,
    components: DamageComponents,
    damage_source: DamageSource,
) -> Option<DamageApplied> {
    let Some(defender) = ctx.world.get::<Health>(target) else {
        warn!(entity = %target, "damage target has no Health component");
        return None;
    };
    let defenses = Defenses {
        armor: defender.final_armor,
        magic_resist: defender.final_mr,
        durability: defender.final_durability,
    };

    let record = ctx.world.record(source)?;
    let damage_amp = record.attack.as_ref().map_or(0.0, |a| a.final_dmg_amp);
    let (chance, multiplier) = record
        .crit
        .as_ref()
        .map_or((0.0, 1.0), |c: &Crit| (c.final_chance, c.final_multiplier));
    let ability_crit = damage_source == DamageSource::Spell
        && (record.ability_crit_items.is_some() || record.ability_crit_traits.is_some());
    let can_crit = damage_source == DamageSource::Attack || ability_crit;

    let (crit_factor, is_crit) = if !can_crit {
        (1.0, false)
    } else {
        match ctx.config.crit_mode {
            CritMode::Expected => ((1.0 - chance) + chance * multiplier, false),
            CritMode::Sampled => {
                if ctx.roll_crit(chance) {
                    (multiplier, true)
                } else {
                    (1.0, false)
                }
            }
        }
    };

    let damage_type = components.dominant_type();
    let raw = components.total();
    let m = mitigate(raw, crit_factor, damage_amp, damage_type, defenses);

    Some(DamageApplied {
        source,
        target,
        damage_type,
        damage_source,
        raw_damage: raw,
        pre_mitigation: m.pre_mitigation,
        mitigated: m.mitigated,
        final_damage: m.final_damage,
        is_crit,
        is_ability_crit: ability_crit,
    })
}

fn apply_damage(damage: &DamageApplied, ctx: &mut CombatContext) {
    let now = ctx.now();
    let Some(health) = ctx.world.get_mut::<Health>(damage.target) else {
        warn!(entity = %damage.target, "damage applied to entity without Health");
        return;
    };
    let was_alive = health.is_alive();
    health.current_hp -= damage.final_damage;
    let died = was_alive && !health.is_alive();

    if damage.source != damage.target {
        if let Some(record) = ctx.world.record_mut(damage.target) {
            record
                .damage_log
                .get_or_insert_with(DamageLog::new)
                .record(damage.source, now);
        }
    }
    if let Some(stats) = ctx.world.get_mut::<DamageStats>(damage.source) {
        stats.record(damage.damage_type, damage.damage_source, damage.final_damage);
    }

    if !was_alive {
        debug!(entity = %damage.target, t = now, "damage on dead target, no kill credit");
        return;
    }

    if damage.damage_source == DamageSource::Attack {
        if let Some(mana) = ctx.world.get_mut::<Mana>(damage.source) {
            mana.gain(MANA_PER_ATTACK);
        }
    }
    if let Some(mana) = ctx.world.get_mut::<Mana>(damage.target) {
        mana.gain(MANA_ON_DAMAGE_TAKEN);
    }

    if died {
        debug!(killer = %damage.source, victim = %damage.target, t = now, "unit died");
        ctx.enqueue_now(Event::Death {
            target: damage.target,
        });
        ctx.enqueue_now(Event::Kill {
            killer: damage.source,
            victim: damage.target,
        });
        let assistors = ctx
            .world
            .get::<DamageLog>(damage.target)
            .map(|log| log.assistors(damage.source, now))
            .unwrap_or_default();
        for assistor in assistors {
            ctx.enqueue_now(Event::Assist {
                assistor,
                victim: damage.target,
            });
        }
    }
}
