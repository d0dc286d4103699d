//! sim_core - Discrete-event combat engine for auto-battler DPS simulation
//!
//! This library provides:
//! - World: entity-component store for per-unit combat state
//! - EventQueue / EventBus: time-ordered combat events and their handlers
//! - Items and traits: static stat tables plus dynamic event-driven effects
//! - Simulation: builds a board, runs combat, reports per-champion damage

pub mod board;
pub mod catalog;
pub mod components;
pub mod config;
pub mod context;
pub mod ecs;
pub mod events;
pub mod items;
pub mod managers;
pub mod prelude;
pub mod simulation;
pub mod systems;
pub mod traits;
pub mod types;

// Re-export core types for convenience
pub use board::{Board, BoardChampion, TrainingTarget};
pub use catalog::{Catalog, CatalogError, ChampionData, ItemData, TraitData, TraitTier};
pub use components::{DamageStats, StatBonus};
pub use config::{ConfigError, CritMode, SimulationConfig};
pub use context::CombatContext;
pub use ecs::World;
pub use events::{DamageApplied, DebuffApplication, Event, EventBus, EventHandler, EventItem, EventQueue};
pub use managers::{EquipError, EquipmentManager};
pub use simulation::{ChampionResult, Simulation, SimulationError, SimulationReport};
pub use types::{DamageSource, DamageType, DebuffKind, Entity, Position, TeamId};
