//! Prelude module for convenient imports
//!
//! ```rust
//! use sim_core::prelude::*;
//! ```

// Driver
pub use crate::board::{Board, BoardChampion, TrainingTarget};
pub use crate::simulation::{ChampionResult, Simulation, SimulationError, SimulationReport};

// Data and configuration
pub use crate::catalog::{ids, Catalog};
pub use crate::config::{CritMode, SimulationConfig};

// Store and events
pub use crate::components::{Attack, Crit, DamageStats, Equipment, Health, Mana, Spell};
pub use crate::ecs::World;
pub use crate::events::{Event, EventItem};

// Core types
pub use crate::types::{DamageSource, DamageType, Entity, Position};
