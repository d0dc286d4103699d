//! Target-side debuffs, one slot per kind

use crate::types::{DebuffKind, EffectOrigin, Entity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebuffEffect {
    pub kind: DebuffKind,
    /// Flat resist removed for Sunder/Shred, fraction for Wound and Burn
    pub magnitude: f64,
    pub duration: f64,
    pub end_time: f64,
    pub source: Option<Entity>,
    pub origin: EffectOrigin,
    pub source_id: String,
    /// Stamped on the matching `DebuffExpired`; bumped on every refresh
    pub sequence: u64,
    /// Pending `BurnTick` time, if a tick chain is running
    #[serde(default)]
    pub next_tick: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Debuffs {
    effects: BTreeMap<DebuffKind, DebuffEffect>,
    next_sequence: u64,
}

impl Debuffs {
    pub fn new() -> Self {
        Debuffs::default()
    }

    pub fn get(&self, kind: DebuffKind) -> Option<&DebuffEffect> {
        self.effects.get(&kind)
    }

    pub fn get_mut(&mut self, kind: DebuffKind) -> Option<&mut DebuffEffect> {
        self.effects.get_mut(&kind)
    }

    pub fn contains(&self, kind: DebuffKind) -> bool {
        self.effects.contains_key(&kind)
    }

    /// Store an effect in its kind's slot, returning the one it displaced
    pub fn insert(&mut self, effect: DebuffEffect) -> Option<DebuffEffect> {
        self.effects.insert(effect.kind, effect)
    }

    pub fn remove(&mut self, kind: DebuffKind) -> Option<DebuffEffect> {
        self.effects.remove(&kind)
    }

    pub fn next_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DebuffEffect> {
        self.effects.values()
    }
}
