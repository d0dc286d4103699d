use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mana {
    pub max: f64,
    pub current: f64,
    pub base_initial: f64,
    pub bonus_initial: f64,
    pub final_initial: f64,
}

impl Mana {
    pub fn new(max: f64, initial: f64) -> Self {
        Mana {
            max,
            current: initial,
            base_initial: initial,
            bonus_initial: 0.0,
            final_initial: initial,
        }
    }

    pub fn can_cast(&self) -> bool {
        self.max > 0.0 && self.current >= self.max
    }

    /// Add mana, capped at max
    pub fn gain(&mut self, amount: f64) {
        self.current = (self.current + amount).min(self.max).max(0.0);
    }

    pub fn drain(&mut self) {
        self.current = 0.0;
    }
}
