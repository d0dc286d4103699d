//! Event handlers that drive combat

pub mod action;
pub mod auto_attack;
pub mod damage;
pub mod debuff;
pub mod spell_cast;
pub mod stats;
pub mod targeting;

pub use action::{decide, ActionDecision, ActionSystem};
pub use auto_attack::AutoAttackSystem;
pub use damage::{DamageSystem, MANA_ON_DAMAGE_TAKEN, MANA_PER_ATTACK};
pub use debuff::{DebuffSystem, BURN_TICK_INTERVAL};
pub use spell_cast::SpellCastSystem;
pub use stats::{calculate_all, recalculate, StatsSystem};
pub use targeting::{enemies_within, nearest_enemy};
