//! Health and defensive stats

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Health {
    // === Base ===
    pub base_max_hp: f64,
    pub base_armor: f64,
    pub base_mr: f64,

    // === Bonus ===
    pub bonus_flat_hp: f64,
    pub bonus_percent_hp: f64,
    pub bonus_armor: f64,
    pub bonus_mr: f64,
    pub bonus_durability: f64,
    /// Fraction of incoming healing removed, set by Wound
    pub heal_reduction: f64,

    // === Final ===
    pub final_max_hp: f64,
    pub final_armor: f64,
    pub final_mr: f64,
    pub final_durability: f64,

    pub current_hp: f64,
}

impl Health {
    pub fn new(max_hp: f64, armor: f64, mr: f64) -> Self {
        Health {
            base_max_hp: max_hp,
            base_armor: armor,
            base_mr: mr,
            final_max_hp: max_hp,
            final_armor: armor,
            final_mr: mr,
            current_hp: max_hp,
            ..Health::default()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    pub fn missing_hp(&self) -> f64 {
        (self.final_max_hp - self.current_hp).max(0.0)
    }

    /// Heal after healing reduction, capped at max HP. Returns the amount restored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if amount <= 0.0 || !self.is_alive() {
            return 0.0;
        }
        let effective = amount * (1.0 - self.heal_reduction.clamp(0.0, 1.0));
        let before = self.current_hp;
        self.current_hp = (self.current_hp + effective).min(self.final_max_hp);
        (self.current_hp - before).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heal_capped() {
        let mut health = Health::new(1000.0, 0.0, 0.0);
        health.current_hp = 950.0;
        let healed = health.heal(100.0);
        assert!((healed - 50.0).abs() < 0.01);
        assert!((health.current_hp - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_heal_reduction() {
        let mut health = Health::new(1000.0, 0.0, 0.0);
        health.current_hp = 500.0;
        health.heal_reduction = 0.33;
        let healed = health.heal(100.0);
        assert!((healed - 67.0).abs() < 0.01);
    }

    #[test]
    fn test_dead_units_do_not_heal() {
        let mut health = Health::new(1000.0, 0.0, 0.0);
        health.current_hp = 0.0;
        assert_eq!(health.heal(100.0), 0.0);
        assert!(!health.is_alive());
    }
}
