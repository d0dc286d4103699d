//! Trait counter: distinct units per team, then tier thresholds

use super::TeamTraitState;
use crate::catalog::Catalog;
use crate::components::{ChampionInfo, Team, Traits};
use crate::ecs::World;
use crate::types::TeamId;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Recount every team's traits and resolve their active tiers.
///
/// Two copies of the same champion on a team contribute one count. Traits
/// missing from the catalog are counted but never reach a tier.
pub fn count_traits(world: &World, catalog: &Catalog, state: &mut TeamTraitState) {
    state.clear();

    let mut seen: BTreeMap<TeamId, BTreeSet<String>> = BTreeMap::new();
    let mut counts: BTreeMap<TeamId, BTreeMap<String, u32>> = BTreeMap::new();

    for entity in world.query::<Traits>() {
        let (Some(info), Some(team), Some(traits)) = (
            world.get::<ChampionInfo>(entity),
            world.get::<Team>(entity),
            world.get::<Traits>(entity),
        ) else {
            continue;
        };
        if !seen.entry(team.id()).or_default().insert(info.api_name.clone()) {
            continue;
        }
        let team_counts = counts.entry(team.id()).or_default();
        for name in traits.iter() {
            *team_counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    for (team, team_counts) in counts {
        for (name, count) in team_counts {
            let tier = catalog
                .get_trait(&name)
                .and_then(|data| data.active_tier(count));
            debug!(team, trait_name = %name, count, tier = ?tier, "trait counted");
            state.set_count(team, &name, count);
            state.set_tier(team, &name, tier);
        }
    }

    info!(active = state.active().len(), "traits counted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ids;

    fn unit(world: &mut World, api_name: &str, team: TeamId, traits: &[&str]) {
        let e = world.spawn();
        world.insert(e, ChampionInfo::new(api_name, api_name, 1, 1));
        world.insert(e, Team(team));
        world.insert(e, Traits::new(traits.iter().map(|s| s.to_string()).collect()));
    }

    #[test]
    fn test_duplicates_count_once() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        unit(&mut world, "A", 0, &[ids::RAPIDFIRE]);
        unit(&mut world, "A", 0, &[ids::RAPIDFIRE]);
        unit(&mut world, "B", 0, &[ids::RAPIDFIRE, "Bastion"]);

        let mut state = TeamTraitState::new();
        count_traits(&world, &catalog, &mut state);

        assert_eq!(state.count(0, ids::RAPIDFIRE), 2);
        assert_eq!(state.tier(0, ids::RAPIDFIRE), Some(0));
        assert_eq!(state.count(0, "Bastion"), 1);
        assert_eq!(state.tier_index(0, "Bastion"), -1);
    }

    #[test]
    fn test_teams_counted_separately() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        unit(&mut world, "A", 0, &[ids::RAPIDFIRE]);
        unit(&mut world, "B", 1, &[ids::RAPIDFIRE]);

        let mut state = TeamTraitState::new();
        count_traits(&world, &catalog, &mut state);

        assert_eq!(state.count(0, ids::RAPIDFIRE), 1);
        assert_eq!(state.count(1, ids::RAPIDFIRE), 1);
        assert!(state.active().is_empty());
    }

    #[test]
    fn test_unknown_trait_never_active() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        unit(&mut world, "A", 0, &["Mystery"]);
        unit(&mut world, "B", 0, &["Mystery"]);

        let mut state = TeamTraitState::new();
        count_traits(&world, &catalog, &mut state);

        assert_eq!(state.count(0, "Mystery"), 2);
        assert_eq!(state.tier(0, "Mystery"), None);
    }
}
