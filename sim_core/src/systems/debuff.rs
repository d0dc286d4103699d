//! Target-side debuffs: install, refresh, expire, and burn ticks
//!
//! One effect per kind per target. A stronger application replaces the
//! current one, an equal one with a later end extends it, anything else is
//! dropped. Every install or refresh bumps the effect's sequence so the
//! `DebuffExpired` scheduled for the previous window is ignored.

use crate::components::{DebuffEffect, Debuffs, Health};
use crate::context::CombatContext;
use crate::ecs::World;
use crate::events::{DamageApplied, DebuffApplication, Event, EventHandler};
use crate::types::{DamageSource, DamageType, DebuffKind, Entity};
use tracing::{debug, warn};

/// Seconds between burn ticks
pub const BURN_TICK_INTERVAL: f64 = 1.0;

pub struct DebuffSystem;

impl EventHandler for DebuffSystem {
    fn name(&self) -> &'static str {
        "debuff"
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(
            event,
            Event::ApplyDebuff(_)
                | Event::RemoveDebuff { .. }
                | Event::DebuffExpired { .. }
                | Event::BurnTick { .. }
        )
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        match event {
            Event::ApplyDebuff(application) => apply(application, ctx),
            Event::RemoveDebuff {
                target,
                kind,
                source_id,
            } => {
                let matches = ctx
                    .world
                    .get::<Debuffs>(*target)
                    .and_then(|d| d.get(*kind))
                    .is_some_and(|e| source_id.as_ref().map_or(true, |id| *id == e.source_id));
                if matches {
                    remove(*target, *kind, ctx);
                }
            }
            Event::DebuffExpired {
                target,
                kind,
                source_id,
                sequence,
            } => {
                let current = ctx
                    .world
                    .get::<Debuffs>(*target)
                    .and_then(|d| d.get(*kind))
                    .is_some_and(|e| e.sequence == *sequence && e.source_id == *source_id);
                if current {
                    remove(*target, *kind, ctx);
                } else {
                    debug!(entity = %target, ?kind, sequence, "stale debuff expiry ignored");
                }
            }
            Event::BurnTick { target } => burn_tick(*target, ctx),
            _ => {}
        }
    }
}

enum Resolution {
    Install { displaced: Option<f64>, tick_pending: bool },
    Extend,
    Ignore,
}

fn apply(app: &DebuffApplication, ctx: &mut CombatContext) {
    let now = ctx.now();
    if !ctx.world.is_alive(app.target) {
        debug!(entity = %app.target, kind = ?app.kind, "debuff on dead target ignored");
        return;
    }
    let Some(record) = ctx.world.record_mut(app.target) else {
        return;
    };
    let debuffs = record.debuffs.get_or_insert_with(Debuffs::new);
    let end_time = now + app.duration;

    let resolution = match debuffs.get(app.kind) {
        None => Resolution::Install {
            displaced: None,
            tick_pending: false,
        },
        Some(existing) if app.magnitude > existing.magnitude => Resolution::Install {
            displaced: Some(existing.magnitude),
            tick_pending: existing.next_tick.is_some(),
        },
        Some(existing) if app.magnitude == existing.magnitude && end_time > existing.end_time => {
            Resolution::Extend
        }
        Some(_) => Resolution::Ignore,
    };

    let sequence = match resolution {
        Resolution::Ignore => {
            debug!(entity = %app.target, kind = ?app.kind, "weaker debuff ignored");
            return;
        }
        Resolution::Extend => {
            let sequence = debuffs.next_sequence();
            let Some(effect) = debuffs.get_mut(app.kind) else {
                return;
            };
            effect.end_time = end_time;
            effect.duration = app.duration;
            effect.source = app.source;
            effect.origin = app.origin;
            effect.source_id = app.source_id.clone();
            effect.sequence = sequence;
            let burn_idle = app.kind == DebuffKind::Burn
                && effect.next_tick.is_none()
                && now + BURN_TICK_INTERVAL < end_time;
            if burn_idle {
                effect.next_tick = Some(now + BURN_TICK_INTERVAL);
            }
            debug!(entity = %app.target, kind = ?app.kind, end = end_time, "debuff extended");
            if burn_idle {
                ctx.enqueue(Event::BurnTick { target: app.target }, now + BURN_TICK_INTERVAL);
            }
            sequence
        }
        Resolution::Install {
            displaced,
            tick_pending,
        } => {
            let sequence = debuffs.next_sequence();
            let start_tick =
                app.kind == DebuffKind::Burn && !tick_pending && now + BURN_TICK_INTERVAL < end_time;
            let next_tick = if start_tick {
                Some(now + BURN_TICK_INTERVAL)
            } else if app.kind == DebuffKind::Burn {
                debuffs.get(app.kind).and_then(|e| e.next_tick)
            } else {
                None
            };
            debuffs.insert(DebuffEffect {
                kind: app.kind,
                magnitude: app.magnitude,
                duration: app.duration,
                end_time,
                source: app.source,
                origin: app.origin,
                source_id: app.source_id.clone(),
                sequence,
                next_tick,
            });

            if let Some(old) = displaced {
                restore(&mut ctx.world, app.target, app.kind, old);
            }
            impose(&mut ctx.world, app.target, app.kind, app.magnitude);
            debug!(
                entity = %app.target,
                kind = ?app.kind,
                magnitude = app.magnitude,
                end = end_time,
                source_id = %app.source_id,
                "debuff installed"
            );
            if start_tick {
                ctx.enqueue(Event::BurnTick { target: app.target }, now + BURN_TICK_INTERVAL);
            }
            sequence
        }
    };

    ctx.enqueue(
        Event::DebuffExpired {
            target: app.target,
            kind: app.kind,
            source_id: app.source_id.clone(),
            sequence,
        },
        end_time,
    );
    ctx.recalculate(app.target);
}

fn remove(target: Entity, kind: DebuffKind, ctx: &mut CombatContext) {
    let Some(effect) = ctx
        .world
        .get_mut::<Debuffs>(target)
        .and_then(|d| d.remove(kind))
    else {
        return;
    };
    restore(&mut ctx.world, target, kind, effect.magnitude);
    debug!(entity = %target, ?kind, t = ctx.now(), "debuff removed");
    ctx.recalculate(target);
}

/// Write a debuff's magnitude into the target's bonus fields
fn impose(world: &mut World, target: Entity, kind: DebuffKind, magnitude: f64) {
    let Some(health) = world.get_mut::<Health>(target) else {
        warn!(entity = %target, ?kind, "debuff target has no Health component");
        return;
    };
    match kind {
        DebuffKind::Sunder => health.bonus_armor -= magnitude,
        DebuffKind::Shred => health.bonus_mr -= magnitude,
        DebuffKind::Wound => health.heal_reduction = magnitude,
        DebuffKind::Burn => {}
    }
}

/// Undo [`impose`]
fn restore(world: &mut World, target: Entity, kind: DebuffKind, magnitude: f64) {
    let Some(health) = world.get_mut::<Health>(target) else {
        return;
    };
    match kind {
        DebuffKind::Sunder => health.bonus_armor += magnitude,
        DebuffKind::Shred => health.bonus_mr += magnitude,
        DebuffKind::Wound => health.heal_reduction = 0.0,
        DebuffKind::Burn => {}
    }
}

fn burn_tick(target: Entity, ctx: &mut CombatContext) {
    let now = ctx.now();
    let Some(record) = ctx.world.record_mut(target) else {
        return;
    };
    let (Some(health), Some(debuffs)) = (record.health.as_ref(), record.debuffs.as_mut()) else {
        return;
    };
    let Some(effect) = debuffs.get_mut(DebuffKind::Burn) else {
        return;
    };
    if now >= effect.end_time || !health.is_alive() {
        effect.next_tick = None;
        return;
    }
    let Some(source) = effect.source else {
        effect.next_tick = None;
        warn!(entity = %target, "burn without a source stops ticking");
        return;
    };

    let damage = health.final_max_hp * effect.magnitude;
    // No tick shares a timestamp with the expiry
    let next = now + BURN_TICK_INTERVAL;
    let continues = next < effect.end_time;
    effect.next_tick = continues.then_some(next);

    debug!(entity = %target, t = now, damage, "burn tick");
    ctx.enqueue_now(Event::DamageApplied(DamageApplied {
        source,
        target,
        damage_type: DamageType::True,
        damage_source: DamageSource::Burn,
        raw_damage: damage,
        pre_mitigation: damage,
        mitigated: 0.0,
        final_damage: damage,
        is_crit: false,
        is_ability_crit: false,
    }));
    if continues {
        ctx.enqueue(Event::BurnTick { target }, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SimulationConfig;
    use crate::systems::stats::recalculate;
    use crate::types::EffectOrigin;
    use std::sync::Arc;

    fn setup() -> (CombatContext, Entity, Entity) {
        let mut ctx = CombatContext::new(
            Arc::new(Catalog::new()),
            SimulationConfig::default().with_seed(3),
        );
        let source = ctx.world.spawn();
        let target = ctx.world.spawn();
        ctx.world.insert(target, Health::new(1000.0, 50.0, 40.0));
        (ctx, source, target)
    }

    fn application(target: Entity, source: Entity, kind: DebuffKind, magnitude: f64, duration: f64) -> Event {
        Event::ApplyDebuff(DebuffApplication {
            target,
            source: Some(source),
            kind,
            magnitude,
            duration,
            origin: EffectOrigin::Item,
            source_id: "test_item".to_string(),
        })
    }

    /// Dispatch everything up to `until`, recalculating stats along the way
    fn run_until(ctx: &mut CombatContext, until: f64) -> Vec<Event> {
        let mut system = DebuffSystem;
        let mut seen = Vec::new();
        while ctx.queue.peek_time().is_some_and(|t| t <= until) {
            let Some(item) = ctx.queue.dequeue() else { break };
            ctx.set_now(item.timestamp);
            match &item.event {
                Event::RecalculateStats { entity } => recalculate(&mut ctx.world, *entity, false),
                Event::DamageApplied(d) => {
                    if let Some(h) = ctx.world.get_mut::<Health>(d.target) {
                        h.current_hp -= d.final_damage;
                    }
                }
                event if system.accepts(event) => system.handle(event, ctx),
                _ => {}
            }
            seen.push(item.event);
        }
        seen
    }

    #[test]
    fn test_sunder_reduces_and_restores_armor() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Sunder, 20.0, 3.0), 0.0);

        run_until(&mut ctx, 1.0);
        assert!((ctx.world.get::<Health>(target).unwrap().final_armor - 30.0).abs() < 0.01);

        run_until(&mut ctx, 5.0);
        let health = ctx.world.get::<Health>(target).unwrap();
        assert!((health.final_armor - 50.0).abs() < 0.01);
        assert!(ctx.world.get::<Debuffs>(target).unwrap().is_empty());
    }

    #[test]
    fn test_stronger_replaces_weaker_ignored() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Shred, 10.0, 5.0), 0.0);
        ctx.enqueue(application(target, source, DebuffKind::Shred, 25.0, 5.0), 1.0);
        ctx.enqueue(application(target, source, DebuffKind::Shred, 15.0, 10.0), 2.0);
        run_until(&mut ctx, 2.5);

        let debuffs = ctx.world.get::<Debuffs>(target).unwrap();
        assert_eq!(debuffs.len(), 1);
        assert_eq!(debuffs.get(DebuffKind::Shred).map(|e| e.magnitude), Some(25.0));
        assert!((ctx.world.get::<Health>(target).unwrap().final_mr - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_equal_magnitude_extends_and_stale_expiry_ignored() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Sunder, 20.0, 3.0), 0.0);
        ctx.enqueue(application(target, source, DebuffKind::Sunder, 20.0, 3.0), 2.0);

        // The first window's expiry at t=3 is stale
        run_until(&mut ctx, 4.0);
        assert!(ctx.world.get::<Debuffs>(target).unwrap().contains(DebuffKind::Sunder));
        assert!((ctx.world.get::<Health>(target).unwrap().final_armor - 30.0).abs() < 0.01);

        run_until(&mut ctx, 5.5);
        assert!(!ctx.world.get::<Debuffs>(target).unwrap().contains(DebuffKind::Sunder));
        assert!((ctx.world.get::<Health>(target).unwrap().final_armor - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_wound_sets_heal_reduction() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Wound, 0.33, 5.0), 0.0);
        run_until(&mut ctx, 0.5);

        let health = ctx.world.get_mut::<Health>(target).unwrap();
        assert!((health.heal_reduction - 0.33).abs() < 0.01);
        health.current_hp = 500.0;
        let healed = health.heal(100.0);
        assert!((healed - 67.0).abs() < 0.01);

        run_until(&mut ctx, 6.0);
        assert_eq!(ctx.world.get::<Health>(target).unwrap().heal_reduction, 0.0);
    }

    #[test]
    fn test_burn_ticks_once_per_second() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Burn, 0.01, 5.5), 0.0);
        let events = run_until(&mut ctx, 10.0);

        let ticks: Vec<&DamageApplied> = events
            .iter()
            .filter_map(|e| match e {
                Event::DamageApplied(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(ticks.len(), 5);
        assert!(ticks.iter().all(|d| d.damage_source == DamageSource::Burn));
        assert!(ticks.iter().all(|d| d.damage_type == DamageType::True));
        assert!(ticks.iter().all(|d| d.source == source));
        assert!((ctx.world.get::<Health>(target).unwrap().current_hp - 950.0).abs() < 0.01);
    }

    #[test]
    fn test_burn_refresh_keeps_single_chain() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Burn, 0.01, 3.0), 0.0);
        ctx.enqueue(application(target, source, DebuffKind::Burn, 0.01, 3.0), 1.5);
        let events = run_until(&mut ctx, 10.0);

        let ticks = events
            .iter()
            .filter(|e| matches!(e, Event::BurnTick { .. }))
            .count();
        // Ticks at 1, 2, 3, 4 with the window extended to 4.5
        assert_eq!(ticks, 4);
    }

    #[test]
    fn test_burn_stops_before_window_end() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Burn, 0.01, 3.0), 0.0);
        let events = run_until(&mut ctx, 10.0);

        // Ticks at 1 and 2; nothing lands on the expiry at 3
        let tick_times = events
            .iter()
            .filter(|e| matches!(e, Event::DamageApplied(_)))
            .count();
        assert_eq!(tick_times, 2);
        assert!((ctx.world.get::<Health>(target).unwrap().current_hp - 980.0).abs() < 0.01);
        assert!(!ctx.world.get::<Debuffs>(target).unwrap().contains(DebuffKind::Burn));
    }

    #[test]
    fn test_sourceless_burn_deals_no_damage() {
        let (mut ctx, _source, target) = setup();
        ctx.enqueue(
            Event::ApplyDebuff(DebuffApplication {
                target,
                source: None,
                kind: DebuffKind::Burn,
                magnitude: 0.01,
                duration: 5.5,
                origin: EffectOrigin::Item,
                source_id: "test_item".to_string(),
            }),
            0.0,
        );
        let events = run_until(&mut ctx, 10.0);

        assert!(!events.iter().any(|e| matches!(e, Event::DamageApplied(_))));
        assert!((ctx.world.get::<Health>(target).unwrap().current_hp - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_remove_debuff_by_source() {
        let (mut ctx, source, target) = setup();
        ctx.enqueue(application(target, source, DebuffKind::Sunder, 20.0, 10.0), 0.0);
        ctx.enqueue(
            Event::RemoveDebuff {
                target,
                kind: DebuffKind::Sunder,
                source_id: Some("other".to_string()),
            },
            1.0,
        );
        run_until(&mut ctx, 1.5);
        assert!(ctx.world.get::<Debuffs>(target).unwrap().contains(DebuffKind::Sunder));

        ctx.enqueue(
            Event::RemoveDebuff {
                target,
                kind: DebuffKind::Sunder,
                source_id: None,
            },
            2.0,
        );
        run_until(&mut ctx, 2.5);
        assert!(!ctx.world.get::<Debuffs>(target).unwrap().contains(DebuffKind::Sunder));
        assert!((ctx.world.get::<Health>(target).unwrap().final_armor - 50.0).abs() < 0.01);
    }
}
