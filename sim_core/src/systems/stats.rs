//! Stat calculator: derives every `final_*` field from base plus bonus

use crate::catalog::ids;
use crate::components::{Attack, Crit, Health, Mana, Spell};
use crate::context::CombatContext;
use crate::ecs::{ComponentRecord, World};
use crate::events::{Event, EventHandler};
use crate::types::Entity;
use tracing::{debug, warn};

/// Highest durability a unit may reach
const MAX_DURABILITY: f64 = 0.99;

pub struct StatsSystem;

impl EventHandler for StatsSystem {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn accepts(&self, event: &Event) -> bool {
        matches!(event, Event::RecalculateStats { .. })
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        if let Event::RecalculateStats { entity } = event {
            if !ctx.world.contains(*entity) {
                warn!(entity = %entity, "recalculate requested for unknown entity");
                return;
            }
            recalculate(&mut ctx.world, *entity, false);
        }
    }
}

/// Recompute every stat of every entity. `setup` also resets current HP and mana.
pub fn calculate_all(world: &mut World, setup: bool) {
    for entity in world.entities() {
        recalculate(world, entity, setup);
    }
}

/// Recompute final stats of one entity.
///
/// During setup, current HP is set to the new max and current mana to the
/// final initial mana. During combat neither is raised by a stat change.
pub fn recalculate(world: &mut World, entity: Entity, setup: bool) {
    let Some(record) = world.record_mut(entity) else {
        return;
    };

    if let Some(health) = record.health.as_mut() {
        calculate_health(health, setup);
    }
    if let Some(attack) = record.attack.as_mut() {
        calculate_attack(attack);
    }
    let (crit_items, trait_crit) = crit_item_context(record);
    if let Some(crit) = record.crit.as_mut() {
        calculate_crit(crit, crit_items, trait_crit);
    }
    if let Some(mana) = record.mana.as_mut() {
        calculate_mana(mana, setup);
    }
    if let Some(spell) = record.spell.as_mut() {
        calculate_spell(spell);
    }
    debug!(entity = %entity, setup, "stats recalculated");
}

fn calculate_health(health: &mut Health, setup: bool) {
    health.final_max_hp =
        (health.base_max_hp + health.bonus_flat_hp) * (1.0 + health.bonus_percent_hp);
    // Sunder and Shred are already subtracted from the bonus fields
    health.final_armor = (health.base_armor + health.bonus_armor).max(0.0);
    health.final_mr = (health.base_mr + health.bonus_mr).max(0.0);
    health.final_durability = health.bonus_durability.clamp(0.0, MAX_DURABILITY);

    if setup {
        health.current_hp = health.final_max_hp;
    } else if health.current_hp > health.final_max_hp {
        health.current_hp = health.final_max_hp;
    }
}

fn calculate_attack(attack: &mut Attack) {
    attack.final_ad = (attack.base_ad + attack.bonus_flat_ad) * (1.0 + attack.bonus_percent_ad);
    attack.final_as = (attack.base_as * (1.0 + attack.bonus_percent_as)).max(0.0);

    if attack.base_as > 0.0 && attack.final_as > 0.0 {
        let scale = attack.final_as / attack.base_as;
        attack.current_startup = attack.base_startup / scale;
        attack.current_recovery = attack.base_recovery / scale;
    } else {
        attack.current_startup = attack.base_startup;
        attack.current_recovery = attack.base_recovery;
    }

    attack.final_dmg_amp = attack.base_dmg_amp + attack.bonus_dmg_amp;
    attack.final_range = attack.base_range + attack.bonus_range;
}

/// Number of IE/JG copies held and whether a trait already grants ability crit
fn crit_item_context(record: &ComponentRecord) -> (usize, bool) {
    let copies = record.equipment.as_ref().map_or(0, |eq| {
        eq.item_count(ids::INFINITY_EDGE) + eq.item_count(ids::JEWELED_GAUNTLET)
    });
    (copies, record.ability_crit_traits.is_some())
}

fn calculate_crit(crit: &mut Crit, crit_items: usize, trait_crit: bool) {
    let mut chance = crit.base_chance + crit.bonus_chance;
    let mut excess = 0.0;
    if chance > 1.0 {
        excess = (chance - 1.0) / 2.0;
        chance = 1.0;
    }
    crit.final_chance = chance.max(0.0);

    // The first IE/JG enables ability crit; only copies beyond it, or all of
    // them when a trait already does, convert to crit damage.
    let granting = if trait_crit {
        crit_items
    } else {
        crit_items.saturating_sub(1)
    };
    let conditional = if crit_items > 0 && granting > 0 {
        granting as f64 / crit_items as f64 * crit.bonus_crit_damage_to_give
    } else {
        0.0
    };

    crit.final_multiplier = crit.base_multiplier + crit.bonus_multiplier + excess + conditional;
}

fn calculate_mana(mana: &mut Mana, setup: bool) {
    mana.final_initial = mana.base_initial + mana.bonus_initial;
    if setup {
        mana.current = if mana.max > 0.0 {
            mana.final_initial.min(mana.max)
        } else {
            0.0
        };
    }
}

fn calculate_spell(spell: &mut Spell) {
    spell.final_ap = spell.base_ap + spell.bonus_ap;
}
