//! StatBonus - Collects bonus-field contributions before writing them to a unit

use super::{Attack, Crit, Health, Mana, Spell};
use crate::catalog::StatKey;
use crate::ecs::World;
use crate::types::Entity;
use serde::{Deserialize, Serialize};

/// A set of additive contributions to a unit's bonus fields.
///
/// Used for the aggregated static item effect, for trait tier bonuses, and
/// for the accumulated bonus a dynamic item reports when it is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBonus {
    // === Health ===
    pub max_health: f64,
    pub percent_hp: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub durability: f64,

    // === Offense ===
    pub flat_ad: f64,
    pub percent_ad: f64,
    pub percent_as: f64,
    pub damage_amp: f64,
    pub ability_power: f64,

    // === Crit ===
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub crit_damage_to_give: f64,

    // === Mana ===
    pub initial_mana: f64,
}

impl StatBonus {
    pub fn new() -> Self {
        StatBonus::default()
    }

    /// Apply a catalog stat value to this bonus.
    ///
    /// Attack speed and crit chance are authored in percent and converted to
    /// decimals here. Every other key is already a decimal or a flat amount.
    pub fn apply_stat_key(&mut self, key: StatKey, value: f64) {
        match key {
            StatKey::Health => self.max_health += value,
            StatKey::BonusPercentHp => self.percent_hp += value,
            StatKey::Mana => self.initial_mana += value,
            StatKey::Armor => self.armor += value,
            StatKey::MagicResist => self.magic_resist += value,
            StatKey::AttackDamage => self.percent_ad += value,
            StatKey::AbilityPower => self.ability_power += value,
            StatKey::AttackSpeed => self.percent_as += value / 100.0,
            StatKey::CritChance => self.crit_chance += value / 100.0,
            StatKey::BonusDamage => self.damage_amp += value,
            StatKey::CritDamageToGive => self.crit_damage_to_give += value,
            StatKey::Durability => self.durability += value,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == StatBonus::default()
    }

    /// Add `scale` times this bonus into the unit's bonus fields.
    ///
    /// A scale of -1.0 reverses a previous application. Components the unit
    /// does not carry are skipped.
    pub fn write_to(&self, world: &mut World, entity: Entity, scale: f64) {
        if let Some(health) = world.get_mut::<Health>(entity) {
            health.bonus_flat_hp += self.max_health * scale;
            health.bonus_percent_hp += self.percent_hp * scale;
            health.bonus_armor += self.armor * scale;
            health.bonus_mr += self.magic_resist * scale;
            health.bonus_durability += self.durability * scale;
        }
        if let Some(attack) = world.get_mut::<Attack>(entity) {
            attack.bonus_flat_ad += self.flat_ad * scale;
            attack.bonus_percent_ad += self.percent_ad * scale;
            attack.bonus_percent_as += self.percent_as * scale;
            attack.bonus_dmg_amp += self.damage_amp * scale;
        }
        if let Some(spell) = world.get_mut::<Spell>(entity) {
            spell.bonus_ap += self.ability_power * scale;
        }
        if let Some(crit) = world.get_mut::<Crit>(entity) {
            crit.bonus_chance += self.crit_chance * scale;
            crit.bonus_multiplier += self.crit_multiplier * scale;
            crit.bonus_crit_damage_to_give += self.crit_damage_to_give * scale;
        }
        if let Some(mana) = world.get_mut::<Mana>(entity) {
            mana.bonus_initial += self.initial_mana * scale;
        }
    }
}

/// Static item bonus currently written into a holder's bonus fields
#[derive(Debug, Clone, Default)]
pub struct StaticItemBonus {
    pub applied: StatBonus,
}
