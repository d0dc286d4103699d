//! Property tests: invariants that must hold for any board and seed

use proptest::prelude::*;
use sim_core::catalog::ids;
use sim_core::components::{Debuffs, Equipment, Health, StaticItemBonus, Team};
use sim_core::events::EventBus;
use sim_core::systems::damage::{mitigate, Defenses};
use sim_core::systems::DamageSystem;
use sim_core::{
    Board, BoardChampion, Catalog, CombatContext, DamageApplied, DamageSource, DamageType,
    EquipmentManager, Event, Position, Simulation, SimulationConfig, World,
};
use std::sync::Arc;

const ROSTER: &[&str] = &["TFT_Jinx", "TFT_Kindred", "TFT_Ahri", "TFT_Garen", "TFT_Leona"];

const ITEMS: &[&str] = &[
    ids::BF_SWORD,
    ids::CHAIN_VEST,
    ids::RABADONS_DEATHCAP,
    ids::INFINITY_EDGE,
    ids::JEWELED_GAUNTLET,
    ids::WARMOGS_ARMOR,
    ids::ARCHANGELS_STAFF,
    ids::GUINSOOS_RAGEBLADE,
    ids::TITANS_RESOLVE,
    ids::QUICKSILVER,
    ids::NASHORS_TOOTH,
    ids::BLUE_BUFF,
    ids::EVENSHROUD,
    ids::NAVORI_FLICKERBLADES,
    ids::KRAKENS_FURY,
    ids::SPEAR_OF_SHOJIN,
    ids::SPIRIT_VISAGE,
    ids::VOID_STAFF,
    ids::RED_BUFF,
];

fn champion_strategy() -> impl Strategy<Value = BoardChampion> {
    (
        0..ROSTER.len(),
        1u8..=3,
        0i32..4,
        0i32..7,
        prop::collection::vec(0..ITEMS.len(), 0..=3),
    )
        .prop_map(|(unit, star, row, col, items)| {
            let names: Vec<&str> = items.into_iter().map(|i| ITEMS[i]).collect();
            BoardChampion::new(ROSTER[unit], star, Position::new(row, col)).with_items(&names)
        })
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(champion_strategy(), 1..=4).prop_map(|champions| Board {
        champions,
        ..Board::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_run_invariants(board in board_strategy(), seed in any::<u64>()) {
        let config = SimulationConfig::default().with_seed(seed).with_max_time(15.0);
        let mut sim = Simulation::with_defaults(&board, config).unwrap();
        let report = sim.run();

        // Archive is time ordered and bounded by the ceiling
        for pair in report.archive.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        prop_assert!(report.archive.iter().all(|item| item.timestamp <= 15.0));

        for result in &report.results {
            let dealt: f64 = report
                .archive
                .iter()
                .filter_map(|item| match &item.event {
                    Event::DamageApplied(d) if d.source == result.entity => Some(d.final_damage),
                    _ => None,
                })
                .sum();
            prop_assert!((result.stats.total_damage - dealt).abs() < 1e-6 * dealt.max(1.0));

            let fired = report
                .archive
                .iter()
                .filter(|item| matches!(item.event, Event::AttackFired { source } if source == result.entity))
                .count();
            prop_assert_eq!(result.stats.attack_count as usize, fired);
        }

        let world = sim.world();
        for entity in world.entities() {
            if let Some(health) = world.get::<Health>(entity) {
                prop_assert!(health.current_hp <= health.final_max_hp + 1e-9);
            }
            if let Some(debuffs) = world.get::<Debuffs>(entity) {
                let kinds: Vec<_> = debuffs.iter().map(|d| d.kind).collect();
                for (i, kind) in kinds.iter().enumerate() {
                    prop_assert!(!kinds[i + 1..].contains(kind));
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_report(board in board_strategy(), seed in any::<u64>()) {
        let config = SimulationConfig::default().with_seed(seed).with_max_time(8.0);
        let first = Simulation::with_defaults(&board, config.clone()).unwrap().run();
        let second = Simulation::with_defaults(&board, config).unwrap().run();

        prop_assert_eq!(first.archive.len(), second.archive.len());
        for (a, b) in first.results.iter().zip(&second.results) {
            prop_assert!((a.stats.total_damage - b.stats.total_damage).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equip_unequip_round_trip(picks in prop::collection::vec(0..ITEMS.len(), 1..=3)) {
        let catalog = Catalog::with_defaults();
        let mut world = World::new();
        let e = world.spawn();
        world.insert(e, Health::new(700.0, 30.0, 30.0));
        world.insert(e, Equipment::new());
        let before = world.get::<Health>(e).unwrap().clone();

        let mut equipped = Vec::new();
        for i in picks {
            if EquipmentManager::add_item(&mut world, &catalog, e, ITEMS[i]).is_ok() {
                equipped.push(ITEMS[i]);
            }
        }
        for item in equipped.iter().rev() {
            prop_assert!(EquipmentManager::remove_item(&mut world, &catalog, e, item).is_ok());
        }

        let after = world.get::<Health>(e).unwrap();
        prop_assert!((after.bonus_flat_hp - before.bonus_flat_hp).abs() < 1e-9);
        prop_assert!((after.bonus_percent_hp - before.bonus_percent_hp).abs() < 1e-9);
        prop_assert!((after.bonus_armor - before.bonus_armor).abs() < 1e-9);
        prop_assert!((after.bonus_mr - before.bonus_mr).abs() < 1e-9);
        let statics = world.get::<StaticItemBonus>(e).unwrap();
        prop_assert!(statics.applied.is_zero());
        prop_assert!(world.get::<Equipment>(e).unwrap().items.is_empty());
    }

    #[test]
    fn test_true_damage_ignores_defenses(
        raw in 0.0f64..5000.0,
        armor in -100.0f64..500.0,
        mr in -100.0f64..500.0,
        durability in 0.0f64..0.99,
    ) {
        let defenses = Defenses { armor, magic_resist: mr, durability };
        let m = mitigate(raw, 1.0, 0.0, DamageType::True, defenses);
        prop_assert!((m.final_damage - raw).abs() < 1e-9);
    }

    #[test]
    fn test_mitigation_never_amplifies(
        raw in 0.0f64..5000.0,
        armor in -100.0f64..500.0,
        durability in 0.0f64..0.99,
    ) {
        let defenses = Defenses { armor, magic_resist: 0.0, durability };
        let m = mitigate(raw, 1.0, 0.0, DamageType::Physical, defenses);
        prop_assert!(m.final_damage <= m.pre_mitigation + 1e-9);
        prop_assert!(m.final_damage >= 0.0);
    }
}

#[test]
fn test_dead_unit_dies_once() {
    let mut ctx = CombatContext::new(
        Arc::new(Catalog::with_defaults()),
        SimulationConfig::default().with_seed(2),
    );
    let source = ctx.world.spawn();
    ctx.world.insert(source, Team(0));
    let target = ctx.world.spawn();
    ctx.world.insert(target, Team(1));
    ctx.world.insert(target, Health::new(100.0, 0.0, 0.0));

    let hit = DamageApplied {
        source,
        target,
        damage_type: DamageType::True,
        damage_source: DamageSource::Attack,
        raw_damage: 150.0,
        pre_mitigation: 150.0,
        mitigated: 0.0,
        final_damage: 150.0,
        is_crit: false,
        is_ability_crit: false,
    };
    ctx.enqueue(Event::DamageApplied(hit.clone()), 1.0);
    ctx.enqueue(Event::DamageApplied(hit), 2.0);

    let mut bus = EventBus::new();
    bus.register(Box::new(DamageSystem));
    let mut deaths = 0;
    let mut kills = 0;
    while let Some(item) = ctx.queue.dequeue() {
        ctx.set_now(item.timestamp);
        bus.dispatch(&item.event, &mut ctx);
        match item.event {
            Event::Death { .. } => deaths += 1,
            Event::Kill { .. } => kills += 1,
            _ => {}
        }
    }
    assert_eq!(deaths, 1);
    assert_eq!(kills, 1);
}
