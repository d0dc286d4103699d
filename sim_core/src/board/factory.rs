//! Spawns board champions and the training target into a world

use super::{Board, BoardChampion, TrainingTarget};
use crate::catalog::{ids, star_multiplier, Catalog, CatalogError, ChampionData};
use crate::components::{
    ActionState, Attack, ChampionInfo, Crit, DamageStats, Equipment, Health, Mana, Spell, Team,
    Traits,
};
use crate::ecs::World;
use crate::managers::EquipmentManager;
use crate::simulation::SimulationError;
use crate::types::{Entity, ENEMY_TEAM, PLAYER_TEAM};
use tracing::{debug, info, warn};

/// Entities created for a board
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedBoard {
    /// Board champions in board order
    pub champions: Vec<Entity>,
    pub target: Entity,
}

/// Check every name and star level before anything is spawned
pub fn validate_board(board: &Board, catalog: &Catalog) -> Result<(), SimulationError> {
    if board.champions.is_empty() {
        return Err(SimulationError::EmptyBoard);
    }
    for champion in &board.champions {
        catalog.champion(&champion.api_name)?;
        if !(1..=3).contains(&champion.star) {
            return Err(SimulationError::InvalidStarLevel {
                api_name: champion.api_name.clone(),
                star: champion.star,
            });
        }
        for item in &champion.items {
            if catalog.get_item(item).is_none() {
                return Err(CatalogError::UnknownItem(item.clone()).into());
            }
        }
    }
    Ok(())
}

pub fn spawn_board(
    world: &mut World,
    catalog: &Catalog,
    board: &Board,
) -> Result<SpawnedBoard, SimulationError> {
    validate_board(board, catalog)?;

    let mut champions = Vec::with_capacity(board.champions.len());
    for placed in &board.champions {
        let data = catalog.champion(&placed.api_name)?;
        champions.push(spawn_champion(world, catalog, data, placed));
    }
    let target = spawn_target(world, &board.target);

    info!(champions = champions.len(), "board built");
    Ok(SpawnedBoard { champions, target })
}

fn spawn_champion(
    world: &mut World,
    catalog: &Catalog,
    data: &ChampionData,
    placed: &BoardChampion,
) -> Entity {
    let stats = &data.stats;
    let scale = star_multiplier(placed.star);
    let entity = world.spawn();

    let mut info = ChampionInfo::new(&data.api_name, &data.name, data.cost, placed.star);
    info.role = data.role.clone();
    world.insert(entity, info);
    world.insert(entity, Team(PLAYER_TEAM));
    world.insert(entity, placed.position);
    world.insert(entity, Traits::new(data.traits.clone()));
    world.insert(
        entity,
        Health::new(stats.hp * scale, stats.armor, stats.magic_resist),
    );
    world.insert(
        entity,
        Attack::new(stats.damage * scale, stats.attack_speed, stats.range)
            .with_timings(stats.attack_startup, stats.attack_recovery),
    );
    world.insert(entity, Crit::new(stats.crit_chance, stats.crit_multiplier));
    world.insert(entity, Mana::new(stats.mana, stats.initial_mana));
    world.insert(
        entity,
        Spell::new(stats.ability_power, stats.cast_startup, stats.cast_recovery)
            .with_ability_damage(data.ability_damage_at(placed.star)),
    );
    world.insert(entity, ActionState::new());
    world.insert(entity, DamageStats::new());
    world.insert(entity, Equipment::new());

    for item in &placed.items {
        if let Err(err) = EquipmentManager::add_item(world, catalog, entity, item) {
            warn!(entity = %entity, item = %item, error = %err, "item skipped during board setup");
        }
    }

    debug!(entity = %entity, api_name = %data.api_name, star = placed.star, "champion spawned");
    entity
}

fn spawn_target(world: &mut World, target: &TrainingTarget) -> Entity {
    let entity = world.spawn();
    world.insert(
        entity,
        ChampionInfo::new(ids::TRAINING_DUMMY, "Training Dummy", 0, 1),
    );
    world.insert(entity, Team(ENEMY_TEAM));
    world.insert(entity, target.position);
    world.insert(entity, Health::new(target.hp, target.armor, target.magic_resist));
    world.insert(entity, Attack::new(0.0, 0.0, 0.0));
    entity
}
