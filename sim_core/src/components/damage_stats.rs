//! Per-unit damage counters filled by the damage pipeline

use crate::types::{DamageSource, DamageType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageStats {
    pub total_damage: f64,
    pub dps: f64,
    pub physical_damage: f64,
    pub magic_damage: f64,
    pub true_damage: f64,
    pub auto_attack_damage: f64,
    pub spell_damage: f64,
    pub attack_count: u32,
    pub cast_count: u32,
}

impl DamageStats {
    pub fn new() -> Self {
        DamageStats::default()
    }

    pub fn record(&mut self, damage_type: DamageType, source: DamageSource, amount: f64) {
        self.total_damage += amount;
        match damage_type {
            DamageType::Physical => self.physical_damage += amount,
            DamageType::Magic => self.magic_damage += amount,
            DamageType::True => self.true_damage += amount,
        }
        match source {
            DamageSource::Attack => self.auto_attack_damage += amount,
            DamageSource::Spell => self.spell_damage += amount,
            _ => {}
        }
    }

    pub fn finalize(&mut self, duration: f64) {
        self.dps = if duration > 0.0 {
            self.total_damage / duration
        } else {
            0.0
        };
    }
}
