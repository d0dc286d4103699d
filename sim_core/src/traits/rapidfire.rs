//! Rapidfire: team attack speed plus a per-attack stacker on carriers

use super::TraitHandler;
use crate::catalog::{ids, TraitTier};
use crate::components::{Attack, RapidfireEffect, RapidfireTeamBonus, Team, Traits};
use crate::context::CombatContext;
use crate::ecs::World;
use crate::events::Event;
use crate::systems::stats::recalculate;
use crate::types::{Entity, TeamId};
use tracing::{debug, warn};

pub struct Rapidfire;

impl Rapidfire {
    fn stack(&self, source: Entity, ctx: &mut CombatContext) {
        if !ctx.world.is_alive(source) {
            return;
        }
        let now = ctx.now();
        let Some(effect) = ctx.world.get_mut::<RapidfireEffect>(source) else {
            return;
        };
        if effect.at_cap() {
            return;
        }
        effect.stacks += 1;
        effect.total_as += effect.as_per_stack;
        let gain = effect.as_per_stack;
        let stacks = effect.stacks;

        let Some(attack) = ctx.world.get_mut::<Attack>(source) else {
            warn!(entity = %source, "rapidfire stack on a unit without attack");
            return;
        };
        attack.bonus_percent_as += gain;
        debug!(entity = %source, t = now, stacks, "rapidfire stack");
        ctx.recalculate(source);
    }
}

impl TraitHandler for Rapidfire {
    fn trait_name(&self) -> &'static str {
        ids::RAPIDFIRE
    }

    fn on_activate(&self, team: TeamId, tier: &TraitTier, ctx: &mut CombatContext) {
        let (Some(team_as), Some(per_stack), Some(max_stacks)) = (
            tier.variable("TeamAttackSpeed"),
            tier.variable("AttackSpeed"),
            tier.variable("MaxStacks"),
        ) else {
            warn!(team, "rapidfire tier is missing variables");
            return;
        };
        let max_stacks = max_stacks.round().max(0.0) as u32;

        let members: Vec<Entity> = ctx
            .world
            .query::<Team>()
            .into_iter()
            .filter(|e| ctx.world.get::<Team>(*e).is_some_and(|t| t.id() == team))
            .collect();
        for entity in members {
            if let Some(attack) = ctx.world.get_mut::<Attack>(entity) {
                attack.bonus_percent_as += team_as;
                let granted = ctx
                    .world
                    .get::<RapidfireTeamBonus>(entity)
                    .map_or(0.0, |b| b.attack_speed);
                ctx.world.insert(
                    entity,
                    RapidfireTeamBonus {
                        attack_speed: granted + team_as,
                    },
                );
            }
            let carries = ctx
                .world
                .get::<Traits>(entity)
                .is_some_and(|t| t.has(ids::RAPIDFIRE));
            if carries && !ctx.world.has::<RapidfireEffect>(entity) {
                ctx.world
                    .insert(entity, RapidfireEffect::new(per_stack, max_stacks));
            }
        }
        debug!(team, team_as, per_stack, max_stacks, "rapidfire activated");
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(event, Event::AttackLanded { .. })
    }

    fn handle(&self, event: &Event, ctx: &mut CombatContext) {
        if let Event::AttackLanded { source, .. } = event {
            self.stack(*source, ctx);
        }
    }

    fn reset(&self, world: &mut World) {
        let mut touched = Vec::new();
        for entity in world.query::<RapidfireEffect>() {
            if let Some(effect) = world.remove::<RapidfireEffect>(entity) {
                if let Some(attack) = world.get_mut::<Attack>(entity) {
                    attack.bonus_percent_as -= effect.total_as;
                }
                touched.push(entity);
            }
        }
        for entity in world.query::<RapidfireTeamBonus>() {
            if let Some(bonus) = world.remove::<RapidfireTeamBonus>(entity) {
                if let Some(attack) = world.get_mut::<Attack>(entity) {
                    attack.bonus_percent_as -= bonus.attack_speed;
                }
                touched.push(entity);
            }
        }
        touched.sort();
        touched.dedup();
        for entity in touched {
            recalculate(world, entity, false);
        }
        debug!("rapidfire reset");
    }
}
