//! Component records stored per entity in the world

mod action_state;
mod attack;
mod bonus;
mod champion;
mod crit;
mod damage_log;
mod damage_stats;
mod debuffs;
mod equipment;
mod health;
mod items;
mod mana;
mod markers;
mod spell;
mod trait_effects;

pub use action_state::ActionState;
pub use attack::Attack;
pub use bonus::{StatBonus, StaticItemBonus};
pub use champion::{ChampionInfo, Team, Traits};
pub use crit::Crit;
pub use damage_log::{DamageLog, ASSIST_WINDOW};
pub use damage_stats::DamageStats;
pub use debuffs::{DebuffEffect, Debuffs};
pub use equipment::{Equipment, MAX_ITEM_SLOTS};
pub use health::Health;
pub use items::{
    ArchangelsState, BlueBuffState, EvenshroudState, FlickerbladeState, GuinsoosState,
    ItemEffectState, KrakensState, NashorsState, QuicksilverState, RedBuffState, ShojinState,
    SpiritVisageState, TitansState, VoidStaffState,
};
pub use mana::Mana;
pub use markers::{AbilityCritFromItems, AbilityCritFromTraits, ImmuneToCc};
pub use spell::Spell;
pub use trait_effects::{RapidfireEffect, RapidfireTeamBonus};
