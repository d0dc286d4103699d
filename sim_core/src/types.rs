//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque entity identifier, allocated monotonically within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(pub u32);

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team identifier. The player team is 0, the training target sits on 1.
pub type TeamId = u8;

pub const PLAYER_TEAM: TeamId = 0;
pub const ENEMY_TEAM: TeamId = 1;

/// Damage school used for resistance selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Physical, mitigated by armor
    #[serde(rename = "AD")]
    Physical,
    /// Magic, mitigated by magic resist
    #[serde(rename = "AP")]
    Magic,
    /// True damage ignores resistances and durability
    #[serde(rename = "True")]
    True,
}

impl DamageType {
    pub fn label(&self) -> &'static str {
        match self {
            DamageType::Physical => "AD",
            DamageType::Magic => "AP",
            DamageType::True => "True",
        }
    }
}

/// What produced a damage instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageSource {
    Attack,
    Spell,
    Item,
    Trait,
    Burn,
}

/// Target-side debuff kinds. At most one effect of each kind lives on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DebuffKind {
    /// Armor reduction
    Sunder,
    /// Magic resist reduction
    Shred,
    /// Healing reduction
    Wound,
    /// Percent max-HP true damage per second
    Burn,
}

/// Classifier for what applied a debuff. Only items apply debuffs today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectOrigin {
    Item,
}

/// Phase of the per-unit action state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionPhase {
    #[default]
    Idle,
    AttackStartup,
    AttackRecovering,
    AttackCoolingDown,
    Casting,
}

/// Grid position. Static for the whole combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Squared grid distance, used for nearest-target selection
    pub fn distance_sq(&self, other: &Position) -> i32 {
        let dr = other.row - self.row;
        let dc = other.col - self.col;
        dr * dr + dc * dc
    }

    pub fn distance(&self, other: &Position) -> f64 {
        f64::from(self.distance_sq(other)).sqrt()
    }
}
