//! Target selection over static grid positions

use crate::components::{Health, Team};
use crate::ecs::World;
use crate::types::{Entity, Position};

/// Living units on a different team than `source`, with their positions
fn living_enemies(world: &World, source: Entity) -> Vec<(Entity, Position)> {
    let Some(team) = world.team_of(source) else {
        return Vec::new();
    };
    world
        .query::<Position>()
        .into_iter()
        .filter(|e| *e != source)
        .filter_map(|e| {
            let record = world.record(e)?;
            let other = record.team.as_ref().map(Team::id)?;
            let alive = record.health.as_ref().is_some_and(Health::is_alive);
            let pos = record.position?;
            (other != team && alive).then_some((e, pos))
        })
        .collect()
}

/// Nearest living enemy by squared distance. Ties go to the lowest entity id.
pub fn nearest_enemy(world: &World, source: Entity) -> Option<Entity> {
    let origin = *world.get::<Position>(source)?;
    let mut best: Option<(Entity, i32)> = None;
    for (candidate, pos) in living_enemies(world, source) {
        let dist = origin.distance_sq(&pos);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(e, _)| e)
}

/// Living enemies within `range` hexes (Euclidean) of `source`
pub fn enemies_within(world: &World, source: Entity, range: f64) -> Vec<Entity> {
    let Some(origin) = world.get::<Position>(source).copied() else {
        return Vec::new();
    };
    living_enemies(world, source)
        .into_iter()
        .filter(|(_, pos)| origin.distance(pos) <= range)
        .map(|(e, _)| e)
        .collect()
}
