//! Simulation driver
//!
//! Builds the world from a [`Board`], wires the handlers onto one bus, runs
//! the combat setup sequence, then drains the event queue up to the time
//! ceiling.

mod report;

pub use report::{ChampionResult, SimulationReport};

use crate::board::{spawn_board, Board};
use crate::catalog::{Catalog, CatalogError};
use crate::components::{Attack, ChampionInfo, DamageStats, Spell};
use crate::config::{ConfigError, SimulationConfig};
use crate::context::CombatContext;
use crate::ecs::World;
use crate::events::{Event, EventBus, EventItem};
use crate::items::{apply_all_static, update_all_ability_crit, ItemManager};
use crate::systems::{
    calculate_all, ActionSystem, AutoAttackSystem, DamageSystem, DebuffSystem, SpellCastSystem,
    StatsSystem,
};
use crate::traits::{apply_trait_bonuses, count_traits, TraitManager};
use crate::types::Entity;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, trace, warn};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Invalid star level {star} for {api_name}")]
    InvalidStarLevel { api_name: String, star: u8 },
    #[error("Board has no champions")]
    EmptyBoard,
}

/// Handlers in dispatch order
fn build_bus() -> EventBus {
    let mut bus = EventBus::new();
    bus.register(Box::new(StatsSystem));
    bus.register(Box::new(DamageSystem));
    bus.register(Box::new(DebuffSystem));
    bus.register(Box::new(ActionSystem));
    bus.register(Box::new(AutoAttackSystem));
    bus.register(Box::new(SpellCastSystem));
    bus.register(Box::new(ItemManager));
    bus.register(Box::new(TraitManager));
    bus
}

/// One combat run. Not reusable: build a new one per board.
pub struct Simulation {
    ctx: CombatContext,
    bus: EventBus,
    champions: Vec<Entity>,
    target: Entity,
    archive: Vec<EventItem>,
}

impl Simulation {
    pub fn new(
        board: &Board,
        catalog: Arc<Catalog>,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut ctx = CombatContext::new(Arc::clone(&catalog), config);
        let spawned = spawn_board(&mut ctx.world, &catalog, board)?;

        count_traits(&ctx.world, &catalog, &mut ctx.traits);
        TraitManager::activate_all(&mut ctx);
        apply_trait_bonuses(&mut ctx.world, &catalog, &ctx.traits);
        update_all_ability_crit(&mut ctx.world);
        apply_all_static(&mut ctx.world, &catalog);
        calculate_all(&mut ctx.world, true);
        ItemManager::enqueue_initial(&mut ctx);

        for &champion in &spawned.champions {
            if ctx.world.is_alive(champion) {
                ctx.enqueue(Event::ChampionAction { entity: champion }, 0.0);
            }
        }
        info!(
            champions = spawned.champions.len(),
            queued = ctx.queue.len(),
            "simulation ready"
        );

        Ok(Simulation {
            ctx,
            bus: build_bus(),
            champions: spawned.champions,
            target: spawned.target,
            archive: Vec::new(),
        })
    }

    /// Board with the built-in catalog
    pub fn with_defaults(board: &Board, config: SimulationConfig) -> Result<Self, SimulationError> {
        Simulation::new(board, Arc::new(Catalog::with_defaults()), config)
    }

    pub fn world(&self) -> &World {
        &self.ctx.world
    }

    pub fn champions(&self) -> &[Entity] {
        &self.champions
    }

    pub fn target(&self) -> Entity {
        self.target
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.bus.handler_names()
    }

    /// Drain the queue up to `max_time` and collect the report
    pub fn run(&mut self) -> SimulationReport {
        let max_time = self.ctx.config.max_time;
        let debug_mode = self.ctx.config.debug_mode;

        while let Some(next) = self.ctx.queue.peek_time() {
            if next > max_time {
                break;
            }
            let Some(item) = self.ctx.queue.dequeue() else {
                break;
            };
            if item.timestamp < self.ctx.now() {
                warn!(
                    t = item.timestamp,
                    now = self.ctx.now(),
                    kind = item.event.kind(),
                    "event scheduled in the past"
                );
            }
            self.ctx.set_now(item.timestamp);
            if debug_mode {
                trace!(t = item.timestamp, kind = item.event.kind(), event = ?item.event, "dispatch");
            }
            self.bus.dispatch(&item.event, &mut self.ctx);
            self.archive.push(item);
        }

        let results = self.collect_results(max_time);
        info!(
            events = self.archive.len(),
            t = self.ctx.now(),
            total_damage = results.iter().map(|r| r.stats.total_damage).sum::<f64>(),
            "run finished"
        );
        SimulationReport {
            results,
            archive: std::mem::take(&mut self.archive),
        }
    }

    fn collect_results(&mut self, max_time: f64) -> Vec<ChampionResult> {
        let world = &mut self.ctx.world;
        let mut results = Vec::with_capacity(self.champions.len());
        for &entity in &self.champions {
            let attack_count = world.get::<Attack>(entity).map_or(0, |a| a.attack_count);
            let cast_count = world.get::<Spell>(entity).map_or(0, |s| s.cast_count);
            let Some(info) = world.get::<ChampionInfo>(entity).cloned() else {
                warn!(entity = %entity, "champion without info left out of the report");
                continue;
            };
            let stats = world.get_mut::<DamageStats>(entity).map(|stats| {
                stats.attack_count = attack_count;
                stats.cast_count = cast_count;
                stats.finalize(max_time);
                stats.clone()
            });
            results.push(ChampionResult {
                api_name: info.api_name,
                entity,
                star: info.star,
                stats: stats.unwrap_or_default(),
            });
        }
        results
    }
}
