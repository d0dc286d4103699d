//! Trait tier tables

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One breakpoint of a trait
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitTier {
    pub min_units: u32,
    #[serde(default)]
    pub max_units: u32,
    #[serde(default)]
    pub variables: BTreeMap<String, f64>,
}

impl TraitTier {
    pub fn new(min_units: u32, max_units: u32) -> Self {
        TraitTier {
            min_units,
            max_units,
            variables: BTreeMap::new(),
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: f64) -> Self {
        self.variables.insert(key.into(), value);
        self
    }

    pub fn variable(&self, key: &str) -> Option<f64> {
        self.variables.get(key).copied()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitData {
    pub name: String,
    #[serde(default)]
    pub tiers: Vec<TraitTier>,
}

impl TraitData {
    pub fn new(name: impl Into<String>, tiers: Vec<TraitTier>) -> Self {
        TraitData {
            name: name.into(),
            tiers,
        }
    }

    /// Index of the highest tier whose threshold `count` meets
    pub fn active_tier(&self, count: u32) -> Option<usize> {
        self.tiers
            .iter()
            .enumerate()
            .filter(|(_, tier)| count >= tier.min_units)
            .max_by_key(|(_, tier)| tier.min_units)
            .map(|(index, _)| index)
    }

    pub fn tier(&self, index: usize) -> Option<&TraitTier> {
        self.tiers.get(index)
    }
}
