//! Board description: the champions to simulate and the target they hit

mod factory;

pub use factory::{spawn_board, validate_board, SpawnedBoard};

use crate::types::Position;
use serde::{Deserialize, Serialize};

fn default_star() -> u8 {
    1
}

/// One champion placed on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardChampion {
    pub api_name: String,
    #[serde(default = "default_star")]
    pub star: u8,
    pub position: Position,
    #[serde(default)]
    pub items: Vec<String>,
}

impl BoardChampion {
    pub fn new(api_name: impl Into<String>, star: u8, position: Position) -> Self {
        BoardChampion {
            api_name: api_name.into(),
            star,
            position,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: &[&str]) -> Self {
        self.items = items.iter().map(|i| i.to_string()).collect();
        self
    }
}

fn default_target_hp() -> f64 {
    1_000_000.0
}

fn default_target_position() -> Position {
    Position::new(4, 3)
}

/// Stationary enemy the board deals damage to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingTarget {
    #[serde(default = "default_target_hp")]
    pub hp: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub magic_resist: f64,
    #[serde(default = "default_target_position")]
    pub position: Position,
}

impl Default for TrainingTarget {
    fn default() -> Self {
        TrainingTarget {
            hp: default_target_hp(),
            armor: 0.0,
            magic_resist: 0.0,
            position: default_target_position(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub champions: Vec<BoardChampion>,
    #[serde(default)]
    pub target: TrainingTarget,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn with_champion(mut self, champion: BoardChampion) -> Self {
        self.champions.push(champion);
        self
    }

    pub fn with_target(mut self, target: TrainingTarget) -> Self {
        self.target = target;
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
