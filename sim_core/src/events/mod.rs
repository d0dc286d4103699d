//! Combat events, the time-ordered queue, and the dispatch bus
//!
//! Events carry entity references only. Their logical time lives on the
//! [`EventItem`] that wraps them and is exposed to handlers as `ctx.now()`.

mod bus;
mod queue;

pub use bus::{EventBus, EventHandler};
pub use queue::{EventItem, EventQueue, JITTER};

use crate::types::{DamageSource, DamageType, DebuffKind, EffectOrigin, Entity};
use serde::{Deserialize, Serialize};

/// Full breakdown of one resolved damage instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageApplied {
    pub source: Entity,
    pub target: Entity,
    pub damage_type: DamageType,
    pub damage_source: DamageSource,
    pub raw_damage: f64,
    pub pre_mitigation: f64,
    pub mitigated: f64,
    pub final_damage: f64,
    pub is_crit: bool,
    pub is_ability_crit: bool,
}

/// Request to install or refresh a debuff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebuffApplication {
    pub target: Entity,
    pub source: Option<Entity>,
    pub kind: DebuffKind,
    pub magnitude: f64,
    pub duration: f64,
    pub origin: EffectOrigin,
    pub source_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // === Action cycle ===
    ChampionAction { entity: Entity },
    AttackStartup { entity: Entity },
    AttackFired { source: Entity },
    AttackLanded { source: Entity, target: Entity },
    AttackRecoveryEnd { entity: Entity },
    AttackCooldownStart { entity: Entity },
    AttackCooldownEnd { entity: Entity },
    SpellCastCycleStart { entity: Entity },
    SpellLanded { source: Entity, target: Option<Entity> },
    SpellRecoveryEnd { entity: Entity },

    // === Damage resolution ===
    DamageApplied(DamageApplied),
    Death { target: Entity },
    Kill { killer: Entity, victim: Entity },
    Assist { assistor: Entity, victim: Entity },

    // === Stat invalidation ===
    RecalculateStats { entity: Entity },

    // === Item ticks, procs, expiries ===
    ArchangelsTick { entity: Entity },
    GuinsoosTick { entity: Entity },
    QuicksilverProc { entity: Entity },
    QuicksilverEnd { entity: Entity },
    SpiritVisageHealTick { entity: Entity },
    BlueBuffAmpActivate { entity: Entity },
    BlueBuffAmpDeactivate { entity: Entity, sequence: u64 },
    NashorsToothExpire { entity: Entity, sequence: u64 },
    EvenshroudResistActivate { entity: Entity },
    EvenshroudResistDeactivate { entity: Entity },

    // === Debuff control ===
    ApplyDebuff(DebuffApplication),
    RemoveDebuff {
        target: Entity,
        kind: DebuffKind,
        source_id: Option<String>,
    },
    DebuffExpired {
        target: Entity,
        kind: DebuffKind,
        source_id: String,
        sequence: u64,
    },
    BurnTick { target: Entity },
}

impl Event {
    /// Stable name used as the trace label
    pub fn kind(&self) -> &'static str {
        match self {
            Event::ChampionAction { .. } => "ChampionAction",
            Event::AttackStartup { .. } => "AttackStartup",
            Event::AttackFired { .. } => "AttackFired",
            Event::AttackLanded { .. } => "AttackLanded",
            Event::AttackRecoveryEnd { .. } => "AttackRecoveryEnd",
            Event::AttackCooldownStart { .. } => "AttackCooldownStart",
            Event::AttackCooldownEnd { .. } => "AttackCooldownEnd",
            Event::SpellCastCycleStart { .. } => "SpellCastCycleStart",
            Event::SpellLanded { .. } => "SpellLanded",
            Event::SpellRecoveryEnd { .. } => "SpellRecoveryEnd",
            Event::DamageApplied(_) => "DamageApplied",
            Event::Death { .. } => "Death",
            Event::Kill { .. } => "Kill",
            Event::Assist { .. } => "Assist",
            Event::RecalculateStats { .. } => "RecalculateStats",
            Event::ArchangelsTick { .. } => "ArchangelsTick",
            Event::GuinsoosTick { .. } => "GuinsoosTick",
            Event::QuicksilverProc { .. } => "QuicksilverProc",
            Event::QuicksilverEnd { .. } => "QuicksilverEnd",
            Event::SpiritVisageHealTick { .. } => "SpiritVisageHealTick",
            Event::BlueBuffAmpActivate { .. } => "BlueBuffAmpActivate",
            Event::BlueBuffAmpDeactivate { .. } => "BlueBuffAmpDeactivate",
            Event::NashorsToothExpire { .. } => "NashorsToothExpire",
            Event::EvenshroudResistActivate { .. } => "EvenshroudResistActivate",
            Event::EvenshroudResistDeactivate { .. } => "EvenshroudResistDeactivate",
            Event::ApplyDebuff(_) => "ApplyDebuff",
            Event::RemoveDebuff { .. } => "RemoveDebuff",
            Event::DebuffExpired { .. } => "DebuffExpired",
            Event::BurnTick { .. } => "BurnTick",
        }
    }

    /// Entities whose equipment may react to this event
    pub fn item_holders(&self) -> Vec<Entity> {
        match self {
            Event::ArchangelsTick { entity }
            | Event::GuinsoosTick { entity }
            | Event::QuicksilverProc { entity }
            | Event::QuicksilverEnd { entity }
            | Event::SpiritVisageHealTick { entity }
            | Event::BlueBuffAmpActivate { entity }
            | Event::BlueBuffAmpDeactivate { entity, .. }
            | Event::NashorsToothExpire { entity, .. }
            | Event::EvenshroudResistActivate { entity }
            | Event::EvenshroudResistDeactivate { entity } => vec![*entity],
            Event::AttackFired { source } => vec![*source],
            Event::AttackLanded { source, .. } => vec![*source],
            Event::SpellLanded { source, .. } => vec![*source],
            Event::DamageApplied(d) if d.source == d.target => vec![d.source],
            Event::DamageApplied(d) => vec![d.source, d.target],
            Event::Kill { killer, .. } => vec![*killer],
            Event::Assist { assistor, .. } => vec![*assistor],
            _ => Vec::new(),
        }
    }
}
