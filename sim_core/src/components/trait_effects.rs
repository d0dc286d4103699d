//! Per-unit dynamic trait state

use super::bonus::StatBonus;

/// Per-attack attack-speed stacker granted by Rapidfire
#[derive(Debug, Clone, Default)]
pub struct RapidfireEffect {
    pub as_per_stack: f64,
    pub max_stacks: u32,
    pub stacks: u32,
    pub total_as: f64,
}

impl RapidfireEffect {
    pub fn new(as_per_stack: f64, max_stacks: u32) -> Self {
        RapidfireEffect {
            as_per_stack,
            max_stacks,
            stacks: 0,
            total_as: 0.0,
        }
    }

    pub fn at_cap(&self) -> bool {
        self.stacks >= self.max_stacks
    }

    pub fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            percent_as: self.total_as,
            ..StatBonus::default()
        }
    }
}

/// Team-wide attack speed a Rapidfire activation added to one unit
#[derive(Debug, Clone, Default)]
pub struct RapidfireTeamBonus {
    pub attack_speed: f64,
}
