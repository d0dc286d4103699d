//! Item data and canonical stat keys

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Canonical stat names accepted in item and trait effect tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    Health,
    BonusPercentHp,
    Mana,
    Armor,
    MagicResist,
    /// Percent AD as a decimal
    AttackDamage,
    AbilityPower,
    /// Percent attack speed, authored as a whole percent
    AttackSpeed,
    /// Crit chance, authored as a whole percent
    CritChance,
    BonusDamage,
    CritDamageToGive,
    Durability,
}

impl StatKey {
    /// Parse a canonical key as it appears in effect maps
    pub fn from_key(key: &str) -> Option<StatKey> {
        let stat = match key {
            "Health" => StatKey::Health,
            "BonusPercentHP" => StatKey::BonusPercentHp,
            "Mana" => StatKey::Mana,
            "Armor" => StatKey::Armor,
            "MagicResist" => StatKey::MagicResist,
            "AD" => StatKey::AttackDamage,
            "AP" => StatKey::AbilityPower,
            "AS" => StatKey::AttackSpeed,
            "CritChance" => StatKey::CritChance,
            "BonusDamage" => StatKey::BonusDamage,
            "CritDamageToGive" => StatKey::CritDamageToGive,
            "Durability" => StatKey::Durability,
            _ => return None,
        };
        Some(stat)
    }

    pub fn key(&self) -> &'static str {
        match self {
            StatKey::Health => "Health",
            StatKey::BonusPercentHp => "BonusPercentHP",
            StatKey::Mana => "Mana",
            StatKey::Armor => "Armor",
            StatKey::MagicResist => "MagicResist",
            StatKey::AttackDamage => "AD",
            StatKey::AbilityPower => "AP",
            StatKey::AttackSpeed => "AS",
            StatKey::CritChance => "CritChance",
            StatKey::BonusDamage => "BonusDamage",
            StatKey::CritDamageToGive => "CritDamageToGive",
            StatKey::Durability => "Durability",
        }
    }
}

/// Item-specific keys read by dynamic item handlers. Anything outside this
/// list and the canonical stat keys is logged when aggregated.
pub const ITEM_SPECIFIC_KEYS: &[&str] = &[
    "IntervalSeconds",
    "APPerInterval",
    "AttackSpeedPerStack",
    "ProcInterval",
    "ProcAttackSpeed",
    "SpellShieldDuration",
    "StackCap",
    "StackingAD",
    "StackingSP",
    "BonusResistsAtStackCap",
    "MRShred",
    "MRShredDuration",
    "BurnPercent",
    "HealingReductionPct",
    "Duration",
    "ADOnAttack",
    "ASPerStack",
    "ADPerBonus",
    "APPerBonus",
    "StacksPerBonus",
    "AttackSpeedToGive",
    "ASDuration",
    "FlatManaRestore",
    "MissingHealthHeal",
    "HealTickRate",
    "MaxHeal",
    "ARReductionAmount",
    "HexRange",
    "BonusResists",
    "BonusResistDuration",
    "ManaRefund",
    "DamageAmp",
    "TakedownTimer",
];

/// One item as described by the data catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemData {
    pub api_name: String,
    #[serde(default)]
    pub name: String,
    /// Only one copy may be held per champion
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub effects: BTreeMap<String, f64>,
}

impl ItemData {
    pub fn new(api_name: impl Into<String>, name: impl Into<String>) -> Self {
        ItemData {
            api_name: api_name.into(),
            name: name.into(),
            unique: false,
            effects: BTreeMap::new(),
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_effect(mut self, key: impl Into<String>, value: f64) -> Self {
        self.effects.insert(key.into(), value);
        self
    }

    pub fn effect(&self, key: &str) -> Option<f64> {
        self.effects.get(key).copied()
    }

    /// Read an effect value, substituting `default` and logging when absent
    pub fn effect_or(&self, key: &str, default: f64) -> f64 {
        match self.effects.get(key) {
            Some(value) => *value,
            None => {
                warn!(item = %self.api_name, key, default, "item effect key missing, using default");
                default
            }
        }
    }

    /// Canonical stat entries of this item's effect table
    pub fn stat_effects(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        self.effects
            .iter()
            .filter_map(|(key, value)| StatKey::from_key(key).map(|stat| (stat, *value)))
    }

    /// Keys that are neither canonical stats nor known item-specific keys
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.effects
            .keys()
            .map(String::as_str)
            .filter(|key| StatKey::from_key(key).is_none() && !ITEM_SPECIFIC_KEYS.contains(key))
    }
}
