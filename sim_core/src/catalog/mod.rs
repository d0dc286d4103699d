//! Data catalog: champion, item, and trait tables consumed by the engine
//!
//! The catalog is read-only during a run and shared behind an `Arc`.

mod champion;
mod defaults;
pub mod ids;
mod item;
mod trait_data;

pub use champion::{star_multiplier, ChampionData, ChampionStats};
pub use item::{ItemData, StatKey, ITEM_SPECIFIC_KEYS};
pub use trait_data::{TraitData, TraitTier};

use crate::config::{load_toml, parse_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Lookup failure against the catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown champion: {0}")]
    UnknownChampion(String),
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error("Unknown trait: {0}")]
    UnknownTrait(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    champions: BTreeMap<String, ChampionData>,
    #[serde(default)]
    items: BTreeMap<String, ItemData>,
    #[serde(default)]
    traits: BTreeMap<String, TraitData>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Catalog with the built-in champions, items, and traits
    pub fn with_defaults() -> Self {
        let mut catalog = Catalog::new();
        defaults::populate(&mut catalog);
        catalog
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = parse_toml(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let catalog: Catalog = load_toml(path)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Entries are keyed by api name; a key that disagrees with its entry is
    /// rejected.
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, champion) in &self.champions {
            if champion.api_name != *key {
                return Err(ConfigError::ValidationError(format!(
                    "champion key '{}' does not match api_name '{}'",
                    key, champion.api_name
                )));
            }
        }
        for (key, item) in &self.items {
            if item.api_name != *key {
                return Err(ConfigError::ValidationError(format!(
                    "item key '{}' does not match api_name '{}'",
                    key, item.api_name
                )));
            }
        }
        Ok(())
    }

    // === Builders ===

    pub fn insert_champion(&mut self, champion: ChampionData) {
        self.champions.insert(champion.api_name.clone(), champion);
    }

    pub fn insert_item(&mut self, item: ItemData) {
        self.items.insert(item.api_name.clone(), item);
    }

    pub fn insert_trait(&mut self, data: TraitData) {
        self.traits.insert(data.name.clone(), data);
    }

    // === Lookup ===

    pub fn champion(&self, api_name: &str) -> Result<&ChampionData, CatalogError> {
        self.champions
            .get(api_name)
            .ok_or_else(|| CatalogError::UnknownChampion(api_name.to_string()))
    }

    pub fn item(&self, api_name: &str) -> Result<&ItemData, CatalogError> {
        self.items
            .get(api_name)
            .ok_or_else(|| CatalogError::UnknownItem(api_name.to_string()))
    }

    pub fn trait_data(&self, name: &str) -> Result<&TraitData, CatalogError> {
        self.traits
            .get(name)
            .ok_or_else(|| CatalogError::UnknownTrait(name.to_string()))
    }

    pub fn get_item(&self, api_name: &str) -> Option<&ItemData> {
        self.items.get(api_name)
    }

    pub fn get_trait(&self, name: &str) -> Option<&TraitData> {
        self.traits.get(name)
    }

    pub fn champions(&self) -> impl Iterator<Item = &ChampionData> {
        self.champions.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemData> {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_dynamic_items() {
        let catalog = Catalog::with_defaults();
        for name in [
            ids::ARCHANGELS_STAFF,
            ids::GUINSOOS_RAGEBLADE,
            ids::TITANS_RESOLVE,
            ids::QUICKSILVER,
            ids::NASHORS_TOOTH,
            ids::BLUE_BUFF,
            ids::EVENSHROUD,
            ids::NAVORI_FLICKERBLADES,
            ids::KRAKENS_FURY,
            ids::SPEAR_OF_SHOJIN,
            ids::SPIRIT_VISAGE,
            ids::VOID_STAFF,
            ids::RED_BUFF,
            ids::INFINITY_EDGE,
            ids::JEWELED_GAUNTLET,
        ] {
            assert!(catalog.item(name).is_ok(), "missing {}", name);
        }
        assert!(catalog.trait_data(ids::RAPIDFIRE).is_ok());
    }

    #[test]
    fn test_unknown_lookup() {
        let catalog = Catalog::with_defaults();
        assert_eq!(
            catalog.champion("TFT_Nobody").unwrap_err(),
            CatalogError::UnknownChampion("TFT_Nobody".to_string())
        );
        assert!(matches!(
            catalog.item("TFT_Item_Nothing"),
            Err(CatalogError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[champions.TFT_Test]
api_name = "TFT_Test"
name = "Test"
traits = ["Rapidfire"]
ability_damage = [100.0, 150.0, 225.0]

[champions.TFT_Test.stats]
hp = 600.0
damage = 50.0
attack_speed = 0.7
mana = 60.0

[items.TFT_Item_Test]
api_name = "TFT_Item_Test"
unique = true

[items.TFT_Item_Test.effects]
AP = 10.0

[traits.Rapidfire]
name = "Rapidfire"

[[traits.Rapidfire.tiers]]
min_units = 2
max_units = 3

[traits.Rapidfire.tiers.variables]
TeamAttackSpeed = 0.1
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        let champ = catalog.champion("TFT_Test").unwrap();
        assert!((champ.stats.hp - 600.0).abs() < f64::EPSILON);
        assert!((champ.stats.crit_chance - 0.25).abs() < f64::EPSILON);
        assert!((champ.stats.ability_power - 100.0).abs() < f64::EPSILON);
        assert!(catalog.item("TFT_Item_Test").unwrap().unique);
        assert_eq!(catalog.trait_data("Rapidfire").unwrap().active_tier(2), Some(0));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "items": {
                "TFT_Item_Test": { "api_name": "TFT_Item_Test", "effects": { "AS": 10.0 } }
            }
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.item("TFT_Item_Test").unwrap().effect("AS"), Some(10.0));
    }

    #[test]
    fn test_mismatched_key_rejected() {
        let json = r#"{ "items": { "A": { "api_name": "B" } } }"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
