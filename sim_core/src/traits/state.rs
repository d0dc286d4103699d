//! Team trait counts and active tiers, one table per simulation

use crate::types::TeamId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct TeamTraitState {
    counts: BTreeMap<TeamId, BTreeMap<String, u32>>,
    tiers: BTreeMap<TeamId, BTreeMap<String, Option<usize>>>,
}

impl TeamTraitState {
    pub fn new() -> Self {
        TeamTraitState::default()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.tiers.clear();
    }

    pub fn set_count(&mut self, team: TeamId, name: &str, count: u32) {
        self.counts
            .entry(team)
            .or_default()
            .insert(name.to_string(), count);
    }

    pub fn set_tier(&mut self, team: TeamId, name: &str, tier: Option<usize>) {
        self.tiers
            .entry(team)
            .or_default()
            .insert(name.to_string(), tier);
    }

    pub fn count(&self, team: TeamId, name: &str) -> u32 {
        self.counts
            .get(&team)
            .and_then(|m| m.get(name))
            .copied()
            .unwrap_or(0)
    }

    /// Active tier index, `None` below the first threshold
    pub fn tier(&self, team: TeamId, name: &str) -> Option<usize> {
        self.tiers.get(&team).and_then(|m| m.get(name)).copied().flatten()
    }

    /// Signed form of [`tier`](Self::tier): -1 when inactive
    pub fn tier_index(&self, team: TeamId, name: &str) -> i64 {
        self.tier(team, name).map_or(-1, |t| t as i64)
    }

    /// Active (team, trait, tier) triples in deterministic order
    pub fn active(&self) -> Vec<(TeamId, String, usize)> {
        self.tiers
            .iter()
            .flat_map(|(team, traits)| {
                traits
                    .iter()
                    .filter_map(move |(name, tier)| tier.map(|t| (*team, name.clone(), t)))
            })
            .collect()
    }

    pub fn teams(&self) -> Vec<TeamId> {
        self.counts.keys().copied().collect()
    }
}
