//! Team traits
//!
//! The counter resolves each team's active tiers once during setup. Tier
//! variables that name a canonical stat are written into carriers by
//! [`static_bonus`]; traits with combat behaviour also own a
//! [`TraitHandler`] kept in a static registry, the same shape as item
//! handlers.

mod counter;
mod rapidfire;
mod state;
pub mod static_bonus;

pub use counter::count_traits;
pub use rapidfire::Rapidfire;
pub use state::TeamTraitState;
pub use static_bonus::{apply_trait_bonuses, tier_bonus};

use crate::catalog::TraitTier;
use crate::context::CombatContext;
use crate::ecs::World;
use crate::events::{Event, EventHandler};
use crate::types::TeamId;
use tracing::debug;

/// Behaviour of one dynamic trait
pub trait TraitHandler: Send + Sync {
    fn trait_name(&self) -> &'static str;

    /// Combat start, once per team with the trait active
    fn on_activate(&self, team: TeamId, tier: &TraitTier, ctx: &mut CombatContext);

    fn accepts(&self, event: &Event) -> bool;

    fn handle(&self, event: &Event, ctx: &mut CombatContext);

    /// Drop every per-unit state this trait attached and take back its bonuses
    fn reset(&self, world: &mut World);
}

static REGISTRY: &[&dyn TraitHandler] = &[&Rapidfire];

pub fn trait_handler_for(name: &str) -> Option<&'static dyn TraitHandler> {
    REGISTRY.iter().copied().find(|h| h.trait_name() == name)
}

/// Bus adapter for the dynamic trait handlers
pub struct TraitManager;

impl TraitManager {
    /// Run `on_activate` for every active (team, trait) pair with a handler
    pub fn activate_all(ctx: &mut CombatContext) {
        for (team, name, index) in ctx.traits.active() {
            let Some(handler) = trait_handler_for(&name) else {
                continue;
            };
            let Some(tier) = ctx
                .catalog
                .get_trait(&name)
                .and_then(|data| data.tier(index))
                .cloned()
            else {
                continue;
            };
            debug!(team, trait_name = %name, tier = index, "trait on_activate");
            handler.on_activate(team, &tier, ctx);
        }
    }

    /// Undo every dynamic trait effect on the world
    pub fn reset_all(world: &mut World) {
        for handler in REGISTRY {
            handler.reset(world);
        }
    }
}

impl EventHandler for TraitManager {
    fn name(&self) -> &'static str {
        "traits"
    }

    fn accepts(&self, event: &Event) -> bool {
        REGISTRY.iter().any(|h| h.accepts(event))
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        for handler in REGISTRY {
            if handler.accepts(event) {
                handler.handle(event, ctx);
            }
        }
    }
}
