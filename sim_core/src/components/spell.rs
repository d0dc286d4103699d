use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spell {
    pub base_ap: f64,
    pub bonus_ap: f64,
    pub final_ap: f64,
    /// Raw magic damage of the ability at this unit's star level
    pub ability_damage: Option<f64>,
    pub cast_startup: f64,
    pub cast_recovery: f64,
    pub cast_count: u32,
}

impl Spell {
    pub fn new(base_ap: f64, cast_startup: f64, cast_recovery: f64) -> Self {
        Spell {
            base_ap,
            bonus_ap: 0.0,
            final_ap: base_ap,
            ability_damage: None,
            cast_startup,
            cast_recovery,
            cast_count: 0,
        }
    }

    pub fn with_ability_damage(mut self, damage: Option<f64>) -> Self {
        self.ability_damage = damage;
        self
    }

    /// Raw magic damage of one cast
    pub fn raw_damage(&self) -> f64 {
        match self.ability_damage {
            Some(damage) => damage * self.final_ap / 100.0,
            None => self.final_ap,
        }
    }

    pub fn cast_duration(&self) -> f64 {
        self.cast_startup + self.cast_recovery
    }
}
