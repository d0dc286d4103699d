//! Static trait tier bonuses

use super::TeamTraitState;
use crate::catalog::{Catalog, StatKey, TraitTier};
use crate::components::{AbilityCritFromTraits, StatBonus, Team, Traits};
use crate::ecs::World;
use tracing::debug;

/// Tier variable that lets carriers' abilities crit
pub const ABILITY_CRIT_KEY: &str = "AbilityCrit";

/// Bonus made of the tier variables that name a canonical stat.
/// Handler-specific variables are skipped.
pub fn tier_bonus(tier: &TraitTier) -> StatBonus {
    let mut bonus = StatBonus::default();
    for (key, value) in &tier.variables {
        if let Some(stat) = StatKey::from_key(key) {
            bonus.apply_stat_key(stat, *value);
        }
    }
    bonus
}

/// Write every active tier's stat bonus into the units carrying that trait.
///
/// Runs once per combat, during setup.
pub fn apply_trait_bonuses(world: &mut World, catalog: &Catalog, state: &TeamTraitState) {
    for (team, name, index) in state.active() {
        let Some(tier) = catalog.get_trait(&name).and_then(|data| data.tier(index)) else {
            continue;
        };
        let bonus = tier_bonus(tier);
        let grants_crit = tier.variable(ABILITY_CRIT_KEY).is_some_and(|v| v > 0.0);
        if bonus.is_zero() && !grants_crit {
            continue;
        }

        let carriers: Vec<_> = world
            .query::<Traits>()
            .into_iter()
            .filter(|e| world.get::<Team>(*e).is_some_and(|t| t.id() == team))
            .filter(|e| world.get::<Traits>(*e).is_some_and(|t| t.has(&name)))
            .collect();
        for entity in carriers {
            bonus.write_to(world, entity, 1.0);
            if grants_crit {
                world.insert(entity, AbilityCritFromTraits);
            }
        }
        debug!(team, trait_name = %name, tier = index, "trait tier bonus applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TraitData;
    use crate::components::{ChampionInfo, Health, Spell};
    use crate::traits::count_traits;
    use crate::types::{Entity, TeamId};

    fn unit(world: &mut World, api_name: &str, team: TeamId, traits: &[&str]) -> Entity {
        let e = world.spawn();
        world.insert(e, ChampionInfo::new(api_name, api_name, 1, 1));
        world.insert(e, Team(team));
        world.insert(e, Traits::new(traits.iter().map(|s| s.to_string()).collect()));
        world.insert(e, Health::new(500.0, 20.0, 20.0));
        world.insert(e, Spell::new(100.0, 0.5, 0.5));
        e
    }

    #[test]
    fn test_bonus_only_on_carriers() {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let a = unit(&mut world, "A", 0, &["Bastion"]);
        let b = unit(&mut world, "B", 0, &["Bastion"]);
        let c = unit(&mut world, "C", 0, &[]);

        let mut state = TeamTraitState::new();
        count_traits(&world, &catalog, &mut state);
        apply_trait_bonuses(&mut world, &catalog, &state);

        for e in [a, b] {
            let health = world.get::<Health>(e).unwrap();
            assert!((health.bonus_armor - 20.0).abs() < 0.01);
            assert!((health.bonus_mr - 20.0).abs() < 0.01);
        }
        assert!(world.get::<Health>(c).unwrap().bonus_armor.abs() < 0.01);
    }

    #[test]
    fn test_handler_variables_ignored() {
        let tier = TraitTier::new(2, 3)
            .with_variable("TeamAttackSpeed", 0.10)
            .with_variable("AP", 20.0);
        let bonus = tier_bonus(&tier);
        assert!((bonus.ability_power - 20.0).abs() < 0.01);
        assert!(bonus.percent_as.abs() < 1e-9);
    }

    #[test]
    fn test_ability_crit_marker() {
        let mut catalog = Catalog::with_defaults();
        catalog.insert_trait(TraitData::new(
            "Gunslinger",
            vec![TraitTier::new(1, 9).with_variable(ABILITY_CRIT_KEY, 1.0)],
        ));
        let mut world = World::new();
        let a = unit(&mut world, "A", 0, &["Gunslinger"]);

        let mut state = TeamTraitState::new();
        count_traits(&world, &catalog, &mut state);
        apply_trait_bonuses(&mut world, &catalog, &state);

        assert!(world.has::<AbilityCritFromTraits>(a));
    }
}
