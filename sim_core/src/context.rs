//! Mutable state threaded through every handler during a run

use crate::catalog::Catalog;
use crate::config::SimulationConfig;
use crate::ecs::World;
use crate::events::{Event, EventQueue};
use crate::traits::TeamTraitState;
use crate::types::Entity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub struct CombatContext {
    pub world: World,
    pub queue: EventQueue,
    pub catalog: Arc<Catalog>,
    pub traits: TeamTraitState,
    pub config: SimulationConfig,
    now: f64,
    crit_rng: StdRng,
}

impl CombatContext {
    pub fn new(catalog: Arc<Catalog>, config: SimulationConfig) -> Self {
        let crit_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        CombatContext {
            world: World::new(),
            queue: EventQueue::new(config.seed),
            catalog,
            traits: TeamTraitState::new(),
            config,
            now: 0.0,
            crit_rng,
        }
    }

    /// Logical time of the event being dispatched
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    pub fn enqueue(&mut self, event: Event, at: f64) {
        self.queue.enqueue(event, at);
    }

    pub fn enqueue_now(&mut self, event: Event) {
        self.queue.enqueue(event, self.now);
    }

    /// Schedule a stat recalculation for `entity` at the current time
    pub fn recalculate(&mut self, entity: Entity) {
        self.enqueue_now(Event::RecalculateStats { entity });
    }

    /// Draw a crit for a hit with the given chance
    pub fn roll_crit(&mut self, chance: f64) -> bool {
        self.crit_rng.gen::<f64>() < chance
    }
}
