//! Identity components: who a unit is and which side it fights for

use crate::types::TeamId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionInfo {
    pub api_name: String,
    pub name: String,
    pub cost: u32,
    pub star: u8,
    pub role: String,
}

impl ChampionInfo {
    pub fn new(api_name: impl Into<String>, name: impl Into<String>, cost: u32, star: u8) -> Self {
        ChampionInfo {
            api_name: api_name.into(),
            name: name.into(),
            cost,
            star,
            role: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team(pub TeamId);

impl Team {
    pub fn id(&self) -> TeamId {
        self.0
    }
}

/// Trait names a unit carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Traits(pub Vec<String>);

impl Traits {
    pub fn new(names: Vec<String>) -> Self {
        Traits(names)
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
