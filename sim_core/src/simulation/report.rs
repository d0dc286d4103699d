//! Run output: per-champion damage and the dispatched event archive

use crate::components::DamageStats;
use crate::events::EventItem;
use crate::types::Entity;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChampionResult {
    pub api_name: String,
    pub entity: Entity,
    pub star: u8,
    pub stats: DamageStats,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationReport {
    /// Board champions in board order
    pub results: Vec<ChampionResult>,
    /// Every dispatched event, in dispatch order
    pub archive: Vec<EventItem>,
}

impl SimulationReport {
    /// First result for a champion api name
    pub fn result_for(&self, api_name: &str) -> Option<&ChampionResult> {
        self.results.iter().find(|r| r.api_name == api_name)
    }

    pub fn result_for_entity(&self, entity: Entity) -> Option<&ChampionResult> {
        self.results.iter().find(|r| r.entity == entity)
    }

    /// Damage dealt by the whole board
    pub fn total_damage(&self) -> f64 {
        self.results.iter().map(|r| r.stats.total_damage).sum()
    }

    /// Archived events of one kind, e.g. `"AttackLanded"`
    pub fn events_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a EventItem> + 'a {
        self.archive.iter().filter(move |item| item.event.kind() == kind)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
