use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Crit {
    pub base_chance: f64,
    pub base_multiplier: f64,
    pub bonus_chance: f64,
    pub bonus_multiplier: f64,
    /// Crit damage carried by Infinity Edge / Jeweled Gauntlet style items
    pub bonus_crit_damage_to_give: f64,
    pub final_chance: f64,
    pub final_multiplier: f64,
}

impl Crit {
    pub fn new(chance: f64, multiplier: f64) -> Self {
        let chance = if chance.is_nan() { 0.0 } else { chance.max(0.0) };
        let multiplier = if multiplier.is_nan() { 0.0 } else { multiplier.max(0.0) };
        Crit {
            base_chance: chance,
            base_multiplier: multiplier,
            final_chance: chance,
            final_multiplier: multiplier,
            ..Crit::default()
        }
    }

    /// Expected damage multiplier from crits
    pub fn expected_multiplier(&self) -> f64 {
        (1.0 - self.final_chance) + self.final_chance * self.final_multiplier
    }
}
