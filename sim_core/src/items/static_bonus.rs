//! Static item stat tables
//!
//! The aggregate is rebuilt from the equipment list every time. The snapshot
//! last written to the holder is subtracted first, so reapplying is
//! idempotent.

use crate::catalog::Catalog;
use crate::components::{Equipment, StatBonus, StaticItemBonus};
use crate::ecs::World;
use crate::types::Entity;
use tracing::warn;

/// Sum of the canonical stat entries of every equipped item
pub fn aggregate_static(world: &World, catalog: &Catalog, holder: Entity) -> StatBonus {
    let mut total = StatBonus::default();
    let Some(equipment) = world.get::<Equipment>(holder) else {
        return total;
    };
    for api_name in &equipment.items {
        let Some(item) = catalog.get_item(api_name) else {
            warn!(entity = %holder, item = %api_name, "equipped item missing from catalog");
            continue;
        };
        for key in item.unknown_keys() {
            warn!(item = %api_name, key, "unknown item effect key ignored");
        }
        for (stat, value) in item.stat_effects() {
            total.apply_stat_key(stat, value);
        }
    }
    total
}

/// Rebuild the holder's aggregate, swap it for the last applied snapshot
pub fn apply_static(world: &mut World, catalog: &Catalog, holder: Entity) {
    if !world.has::<Equipment>(holder) {
        return;
    }
    let aggregate = aggregate_static(world, catalog, holder);
    let previous = world
        .get::<StaticItemBonus>(holder)
        .map(|s| s.applied)
        .unwrap_or_default();

    previous.write_to(world, holder, -1.0);
    aggregate.write_to(world, holder, 1.0);
    world.insert(holder, StaticItemBonus { applied: aggregate });
}

pub fn apply_all_static(world: &mut World, catalog: &Catalog) {
    for holder in world.query::<Equipment>() {
        apply_static(world, catalog, holder);
    }
}
