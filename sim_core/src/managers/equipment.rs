//! Equip and unequip items on a holder

use crate::catalog::{ids, Catalog};
use crate::components::{Equipment, ImmuneToCc};
use crate::ecs::World;
use crate::items::{apply_static, handler_for, update_ability_crit};
use crate::types::Entity;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquipError {
    #[error("No free item slot")]
    NoFreeSlot,
    #[error("Unique item already equipped: {0}")]
    UniqueDuplicate(String),
    #[error("Item not equipped: {0}")]
    NotEquipped(String),
    #[error("Entity has no equipment")]
    MissingEquipment,
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

/// Keeps a holder's equipment list, per-item state, static aggregate, and
/// ability-crit marker consistent.
///
/// Final stats are not recalculated here; setup runs the calculator
/// afterwards and mid-combat callers enqueue a recalculation.
pub struct EquipmentManager;

impl EquipmentManager {
    pub fn add_item(
        world: &mut World,
        catalog: &Catalog,
        holder: Entity,
        api_name: &str,
    ) -> Result<(), EquipError> {
        let item = catalog
            .item(api_name)
            .map_err(|_| EquipError::UnknownItem(api_name.to_string()))?;
        let equipment = world
            .get_mut::<Equipment>(holder)
            .ok_or(EquipError::MissingEquipment)?;
        if !equipment.has_free_slot() {
            return Err(EquipError::NoFreeSlot);
        }
        if item.unique && equipment.has_item(api_name) {
            return Err(EquipError::UniqueDuplicate(api_name.to_string()));
        }
        equipment.items.push(api_name.to_string());

        if let Some(handler) = handler_for(api_name) {
            handler.attach_state(holder, item, world);
        }
        apply_static(world, catalog, holder);
        update_ability_crit(world, holder);
        debug!(entity = %holder, item = %api_name, "item equipped");
        Ok(())
    }

    /// Remove one copy. When the last copy goes, whatever the item's
    /// dynamic state accumulated is taken back off the holder.
    pub fn remove_item(
        world: &mut World,
        catalog: &Catalog,
        holder: Entity,
        api_name: &str,
    ) -> Result<(), EquipError> {
        let equipment = world
            .get_mut::<Equipment>(holder)
            .ok_or(EquipError::MissingEquipment)?;
        if !equipment.remove_one(api_name) {
            return Err(EquipError::NotEquipped(api_name.to_string()));
        }
        let last_copy = !equipment.has_item(api_name);

        if last_copy {
            if let Some(handler) = handler_for(api_name) {
                let accumulated = handler.detach_state(holder, world);
                accumulated.write_to(world, holder, -1.0);
            }
            if api_name == ids::QUICKSILVER {
                world.remove::<ImmuneToCc>(holder);
            }
        }
        apply_static(world, catalog, holder);
        update_ability_crit(world, holder);
        debug!(entity = %holder, item = %api_name, last_copy, "item removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{
        AbilityCritFromItems, ArchangelsState, Attack, Crit, Health, Spell, StaticItemBonus,
    };

    fn champion(world: &mut World) -> Entity {
        let e = world.spawn();
        world.insert(e, Health::new(800.0, 30.0, 30.0));
        world.insert(e, Attack::new(60.0, 0.8, 1.0));
        world.insert(e, Spell::new(100.0, 0.5, 0.5));
        world.insert(e, Crit::new(0.25, 1.4));
        world.insert(e, Equipment::new());
        e
    }

    #[test]
    fn test_add_applies_static() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let e = champion(&mut world);
        EquipmentManager::add_item(&mut world, &catalog, e, ids::RABADONS_DEATHCAP).unwrap();

        assert!((world.get::<Spell>(e).unwrap().bonus_ap - 50.0).abs() < 0.01);
        assert!((world.get::<Attack>(e).unwrap().bonus_dmg_amp - 0.15).abs() < 0.01);
        let bonus = world.get::<StaticItemBonus>(e).unwrap();
        assert_eq!(bonus.applied, crate::items::aggregate_static(&world, &catalog, e));
    }

    #[test]
    fn test_slot_and_unique_limits() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let e = champion(&mut world);

        EquipmentManager::add_item(&mut world, &catalog, e, ids::QUICKSILVER).unwrap();
        assert_eq!(
            EquipmentManager::add_item(&mut world, &catalog, e, ids::QUICKSILVER),
            Err(EquipError::UniqueDuplicate(ids::QUICKSILVER.to_string()))
        );
        EquipmentManager::add_item(&mut world, &catalog, e, ids::DEATHBLADE).unwrap();
        EquipmentManager::add_item(&mut world, &catalog, e, ids::DEATHBLADE).unwrap();
        assert_eq!(
            EquipmentManager::add_item(&mut world, &catalog, e, ids::DEATHBLADE),
            Err(EquipError::NoFreeSlot)
        );
        assert_eq!(world.get::<Equipment>(e).unwrap().items.len(), 3);
    }

    #[test]
    fn test_unknown_and_missing() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let e = champion(&mut world);
        let bare = world.spawn();

        assert_eq!(
            EquipmentManager::add_item(&mut world, &catalog, e, "TFT_Item_Nope"),
            Err(EquipError::UnknownItem("TFT_Item_Nope".to_string()))
        );
        assert_eq!(
            EquipmentManager::add_item(&mut world, &catalog, bare, ids::DEATHBLADE),
            Err(EquipError::MissingEquipment)
        );
        assert_eq!(
            EquipmentManager::remove_item(&mut world, &catalog, e, ids::DEATHBLADE),
            Err(EquipError::NotEquipped(ids::DEATHBLADE.to_string()))
        );
    }

    #[test]
    fn test_equip_unequip_round_trip() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let e = champion(&mut world);
        let before_health = world.get::<Health>(e).unwrap().clone();
        let before_crit = world.get::<Crit>(e).unwrap().clone();

        EquipmentManager::add_item(&mut world, &catalog, e, ids::WARMOGS_ARMOR).unwrap();
        EquipmentManager::add_item(&mut world, &catalog, e, ids::INFINITY_EDGE).unwrap();
        assert!(world.has::<AbilityCritFromItems>(e));
        EquipmentManager::remove_item(&mut world, &catalog, e, ids::INFINITY_EDGE).unwrap();
        EquipmentManager::remove_item(&mut world, &catalog, e, ids::WARMOGS_ARMOR).unwrap();

        let health = world.get::<Health>(e).unwrap();
        assert!((health.bonus_flat_hp - before_health.bonus_flat_hp).abs() < 1e-9);
        assert!((health.bonus_percent_hp - before_health.bonus_percent_hp).abs() < 1e-9);
        let crit = world.get::<Crit>(e).unwrap();
        assert!((crit.bonus_chance - before_crit.bonus_chance).abs() < 1e-9);
        assert!(!world.has::<AbilityCritFromItems>(e));
    }

    #[test]
    fn test_remove_reverses_dynamic_bonus() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let e = champion(&mut world);
        EquipmentManager::add_item(&mut world, &catalog, e, ids::ARCHANGELS_STAFF).unwrap();
        let static_ap = world.get::<Spell>(e).unwrap().bonus_ap;

        // Two ticks' worth of stacking
        {
            let state = world.get_mut::<ArchangelsState>(e).unwrap();
            state.stacks = 2;
            state.total_ap = 60.0;
        }
        world.get_mut::<Spell>(e).unwrap().bonus_ap += 60.0;

        EquipmentManager::remove_item(&mut world, &catalog, e, ids::ARCHANGELS_STAFF).unwrap();
        assert!(!world.has::<ArchangelsState>(e));
        assert!(world.get::<Spell>(e).unwrap().bonus_ap.abs() < 1e-9);
        assert!(static_ap > 0.0);
    }
}
