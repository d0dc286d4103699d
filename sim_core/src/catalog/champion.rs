//! Champion base data

use serde::{Deserialize, Serialize};

fn default_crit_chance() -> f64 {
    0.25
}

fn default_crit_multiplier() -> f64 {
    1.4
}

fn default_ability_power() -> f64 {
    100.0
}

fn default_cast_time() -> f64 {
    0.5
}

/// Base stats for a one-star champion.
///
/// Health and attack damage are multiplied by the star multiplier on spawn;
/// every other stat is used as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionStats {
    pub hp: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub magic_resist: f64,
    #[serde(default)]
    pub damage: f64,
    #[serde(default)]
    pub attack_speed: f64,
    #[serde(default = "default_crit_chance")]
    pub crit_chance: f64,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    #[serde(default)]
    pub initial_mana: f64,
    /// Mana needed to cast. Zero means the unit never casts.
    #[serde(default)]
    pub mana: f64,
    #[serde(default)]
    pub range: f64,
    #[serde(default)]
    pub attack_startup: f64,
    #[serde(default)]
    pub attack_recovery: f64,
    #[serde(default = "default_cast_time")]
    pub cast_startup: f64,
    #[serde(default = "default_cast_time")]
    pub cast_recovery: f64,
    #[serde(default = "default_ability_power")]
    pub ability_power: f64,
}

impl Default for ChampionStats {
    fn default() -> Self {
        ChampionStats {
            hp: 500.0,
            armor: 0.0,
            magic_resist: 0.0,
            damage: 0.0,
            attack_speed: 0.0,
            crit_chance: default_crit_chance(),
            crit_multiplier: default_crit_multiplier(),
            initial_mana: 0.0,
            mana: 0.0,
            range: 1.0,
            attack_startup: 0.0,
            attack_recovery: 0.0,
            cast_startup: default_cast_time(),
            cast_recovery: default_cast_time(),
            ability_power: default_ability_power(),
        }
    }
}

/// One champion as described by the data catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChampionData {
    pub api_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub stats: ChampionStats,
    /// Spell damage per star level, indexed by `star - 1`
    #[serde(default)]
    pub ability_damage: Vec<f64>,
}

impl ChampionData {
    pub fn new(api_name: impl Into<String>, name: impl Into<String>, stats: ChampionStats) -> Self {
        ChampionData {
            api_name: api_name.into(),
            name: name.into(),
            cost: 1,
            role: String::new(),
            traits: Vec::new(),
            stats,
            ability_damage: Vec::new(),
        }
    }

    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        self.traits = traits.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_ability_damage(mut self, per_star: &[f64]) -> Self {
        self.ability_damage = per_star.to_vec();
        self
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Ability damage at a star level, if the data carries it
    pub fn ability_damage_at(&self, star: u8) -> Option<f64> {
        let index = usize::from(star.max(1)) - 1;
        self.ability_damage.get(index).copied()
    }
}

/// HP and AD multiplier for a star level
pub fn star_multiplier(star: u8) -> f64 {
    match star {
        2 => 1.8,
        3 => 3.24,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_multiplier() {
        assert!((star_multiplier(1) - 1.0).abs() < f64::EPSILON);
        assert!((star_multiplier(2) - 1.8).abs() < f64::EPSILON);
        assert!((star_multiplier(3) - 3.24).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ability_damage_lookup() {
        let champ = ChampionData::new("TFT_Test", "Test", ChampionStats::default())
            .with_ability_damage(&[200.0, 300.0, 450.0]);
        assert_eq!(champ.ability_damage_at(1), Some(200.0));
        assert_eq!(champ.ability_damage_at(3), Some(450.0));

        let plain = ChampionData::new("TFT_Plain", "Plain", ChampionStats::default());
        assert_eq!(plain.ability_damage_at(2), None);
    }
}
