use crate::catalog::ids;
use crate::components::{AbilityCritFromItems, Equipment};
use crate::ecs::World;
use crate::types::Entity;

/// Add or drop the item ability-crit marker to match the holder's items
pub fn update_ability_crit(world: &mut World, holder: Entity) {
    let grants = world.get::<Equipment>(holder).is_some_and(|eq| {
        eq.has_item(ids::INFINITY_EDGE) || eq.has_item(ids::JEWELED_GAUNTLET)
    });
    if grants {
        world.insert(holder, AbilityCritFromItems);
    } else {
        world.remove::<AbilityCritFromItems>(holder);
    }
}

pub fn update_all_ability_crit(world: &mut World) {
    for holder in world.query::<Equipment>() {
        update_ability_crit(world, holder);
    }
}
