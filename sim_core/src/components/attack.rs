//! Attack component: damage, speed, and attack-cycle timings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attack {
    // === Base ===
    pub base_ad: f64,
    pub base_as: f64,
    pub base_startup: f64,
    pub base_recovery: f64,
    pub base_range: f64,
    pub base_dmg_amp: f64,

    // === Bonus ===
    pub bonus_flat_ad: f64,
    pub bonus_percent_ad: f64,
    pub bonus_percent_as: f64,
    pub bonus_range: f64,
    pub bonus_dmg_amp: f64,

    // === Final ===
    pub final_ad: f64,
    pub final_as: f64,
    pub final_range: f64,
    pub final_dmg_amp: f64,
    pub current_startup: f64,
    pub current_recovery: f64,

    pub attack_count: u32,
}

impl Attack {
    pub fn new(ad: f64, attack_speed: f64, range: f64) -> Self {
        Attack {
            base_ad: ad,
            base_as: attack_speed,
            base_range: range,
            final_ad: ad,
            final_as: attack_speed,
            final_range: range,
            ..Attack::default()
        }
    }

    pub fn with_timings(mut self, startup: f64, recovery: f64) -> Self {
        self.base_startup = startup;
        self.base_recovery = recovery;
        self.current_startup = startup;
        self.current_recovery = recovery;
        self
    }

    /// Idle time after recovery so a full cycle lasts `1 / final_as`
    pub fn current_cooldown(&self) -> f64 {
        if self.final_as <= 0.0 {
            return 0.0;
        }
        (1.0 / self.final_as - self.current_startup - self.current_recovery).max(0.0)
    }
}
