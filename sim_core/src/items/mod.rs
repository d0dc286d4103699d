//! Item effects
//!
//! Static items only contribute their stat table through
//! [`static_bonus`]. Dynamic items additionally own a handler that reacts to
//! combat events and keeps its running state in a per-item component on the
//! holder.
//!
//! Handlers are stateless unit structs kept in a static registry keyed by
//! api name; everything they mutate lives in the world.

pub mod ability_crit;
mod handlers;
pub mod static_bonus;

pub use ability_crit::{update_ability_crit, update_all_ability_crit};
pub use static_bonus::{aggregate_static, apply_all_static, apply_static};

use crate::catalog::ItemData;
use crate::components::{Equipment, ItemEffectState, StatBonus};
use crate::context::CombatContext;
use crate::ecs::{Component, World};
use crate::events::{Event, EventHandler};
use crate::types::Entity;
use tracing::debug;

/// Behaviour of one dynamic item
pub trait ItemHandler: Send + Sync {
    fn api_name(&self) -> &'static str;

    /// Attach the per-item state component if the holder has none yet
    fn attach_state(&self, holder: Entity, item: &ItemData, world: &mut World);

    /// Drop the per-item state and return what it had added to the holder
    fn detach_state(&self, holder: Entity, world: &mut World) -> StatBonus;

    /// Combat start: reset running state and schedule the first tick, if any.
    /// Called once per holder regardless of how many copies it holds.
    fn on_equip(&self, _holder: Entity, _ctx: &mut CombatContext) {}

    fn accepts(&self, event: &Event, holder: Entity) -> bool;

    fn handle(&self, event: &Event, holder: Entity, ctx: &mut CombatContext);
}

static REGISTRY: &[&dyn ItemHandler] = &[
    &handlers::ArchangelsStaff,
    &handlers::GuinsoosRageblade,
    &handlers::TitansResolve,
    &handlers::Quicksilver,
    &handlers::NashorsTooth,
    &handlers::BlueBuff,
    &handlers::Evenshroud,
    &handlers::NavoriFlickerblades,
    &handlers::KrakensFury,
    &handlers::SpearOfShojin,
    &handlers::SpiritVisage,
    &handlers::VoidStaff,
    &handlers::RedBuff,
];

/// Handler for a dynamic item, `None` for static items
pub fn handler_for(api_name: &str) -> Option<&'static dyn ItemHandler> {
    REGISTRY.iter().copied().find(|h| h.api_name() == api_name)
}

/// Api names of every item with a dynamic handler
pub fn dynamic_items() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|h| h.api_name())
}

pub(crate) fn attach<T: Component>(world: &mut World, holder: Entity, make: impl FnOnce() -> T) {
    if !world.has::<T>(holder) {
        world.insert(holder, make());
    }
}

pub(crate) fn detach<T: Component + ItemEffectState>(world: &mut World, holder: Entity) -> StatBonus {
    world
        .remove::<T>(holder)
        .map_or_else(StatBonus::default, |state| state.accumulated_bonus())
}

/// Copies of `api_name` on a living holder; 0 once the holder is dead or the
/// item has been removed
pub(crate) fn live_copies(world: &World, holder: Entity, api_name: &str) -> usize {
    if !world.is_alive(holder) {
        return 0;
    }
    world.item_count(holder, api_name)
}

/// Write `bonus` into the holder's bonus fields and request a recalculation
pub(crate) fn grant(ctx: &mut CombatContext, holder: Entity, bonus: StatBonus) {
    bonus.write_to(&mut ctx.world, holder, 1.0);
    ctx.recalculate(holder);
}

/// Reverse a previous [`grant`]
pub(crate) fn revoke(ctx: &mut CombatContext, holder: Entity, bonus: StatBonus) {
    bonus.write_to(&mut ctx.world, holder, -1.0);
    ctx.recalculate(holder);
}

fn distinct_items(world: &World, holder: Entity) -> Vec<String> {
    world
        .get::<Equipment>(holder)
        .map(Equipment::distinct_items)
        .unwrap_or_default()
}

/// Bus adapter routing events to the item handlers of the entities involved
pub struct ItemManager;

impl ItemManager {
    /// Run `on_equip` for every distinct dynamic item on every holder
    pub fn enqueue_initial(ctx: &mut CombatContext) {
        for holder in ctx.world.query::<Equipment>() {
            for api_name in distinct_items(&ctx.world, holder) {
                if let Some(handler) = handler_for(&api_name) {
                    debug!(entity = %holder, item = %api_name, "item on_equip");
                    handler.on_equip(holder, ctx);
                }
            }
        }
    }
}

impl EventHandler for ItemManager {
    fn name(&self) -> &'static str {
        "items"
    }

    fn accepts(&self, event: &Event) -> bool {
        !event.item_holders().is_empty()
    }

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext) {
        for holder in event.item_holders() {
            for api_name in distinct_items(&ctx.world, holder) {
                let Some(handler) = handler_for(&api_name) else {
                    continue;
                };
                if handler.accepts(event, holder) {
                    handler.handle(event, holder, ctx);
                }
            }
        }
    }
}
