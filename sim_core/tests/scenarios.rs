//! Integration tests: fixed boards with hand-computed expected numbers
//!
//! The first three scenarios drive the damage pipeline directly, the rest run
//! full simulations through the public driver.

use sim_core::catalog::{ids, ChampionStats};
use sim_core::components::{
    ArchangelsState, Attack, Crit, DamageStats, Health, RapidfireEffect, Spell, Team, TitansState,
};
use sim_core::events::EventBus;
use sim_core::systems::DamageSystem;
use sim_core::{
    Board, BoardChampion, Catalog, ChampionData, CombatContext, Entity, Event, ItemData, Position,
    Simulation, SimulationConfig,
};
use std::sync::Arc;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn damage_context() -> (CombatContext, EventBus) {
    let ctx = CombatContext::new(
        Arc::new(Catalog::with_defaults()),
        SimulationConfig::default().with_seed(1),
    );
    let mut bus = EventBus::new();
    bus.register(Box::new(DamageSystem));
    (ctx, bus)
}

fn attacker(ctx: &mut CombatContext, damage_amp: f64) -> Entity {
    let e = ctx.world.spawn();
    ctx.world.insert(e, Team(0));
    ctx.world.insert(e, Position::new(0, 0));
    ctx.world.insert(e, Health::new(1000.0, 0.0, 0.0));
    let mut attack = Attack::new(100.0, 1.0, 1.0);
    attack.final_dmg_amp = damage_amp;
    ctx.world.insert(e, attack);
    ctx.world.insert(e, Crit::new(0.25, 1.5));
    ctx.world.insert(e, Spell::new(100.0, 0.5, 0.5));
    ctx.world.insert(e, DamageStats::new());
    e
}

fn defender(ctx: &mut CombatContext, durability: f64) -> Entity {
    let e = ctx.world.spawn();
    ctx.world.insert(e, Team(1));
    ctx.world.insert(e, Position::new(4, 3));
    let mut health = Health::new(10_000.0, 50.0, 50.0);
    health.final_durability = durability;
    ctx.world.insert(e, health);
    e
}

fn drain(ctx: &mut CombatContext, bus: &mut EventBus) -> Vec<Event> {
    let mut seen = Vec::new();
    while let Some(item) = ctx.queue.dequeue() {
        ctx.set_now(item.timestamp);
        bus.dispatch(&item.event, ctx);
        seen.push(item.event);
    }
    seen
}

fn applied(events: &[Event]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::DamageApplied(d) => Some(d.final_damage),
            _ => None,
        })
        .collect()
}

#[test]
fn test_raw_attack_math() {
    separator("Raw attack math");
    let (mut ctx, mut bus) = damage_context();
    let source = attacker(&mut ctx, 0.0);
    let target = defender(&mut ctx, 0.0);

    ctx.enqueue(Event::AttackLanded { source, target }, 0.0);
    let events = drain(&mut ctx, &mut bus);

    let hit = events
        .iter()
        .find_map(|e| match e {
            Event::DamageApplied(d) => Some(d.clone()),
            _ => None,
        })
        .unwrap();
    println!("  pre-mitigation {:.2}, final {:.2}", hit.pre_mitigation, hit.final_damage);
    assert!((hit.pre_mitigation - 112.5).abs() < 0.01);
    assert!((hit.final_damage - 75.0).abs() < 0.01);
    let hp = ctx.world.get::<Health>(target).unwrap().current_hp;
    assert!((10_000.0 - hp - 75.0).abs() < 0.01);
}

#[test]
fn test_damage_amp_and_durability() {
    separator("Damage amp and durability");
    let (mut ctx, mut bus) = damage_context();
    let source = attacker(&mut ctx, 0.10);
    let target = defender(&mut ctx, 0.20);

    ctx.enqueue(Event::AttackLanded { source, target }, 0.0);
    let events = drain(&mut ctx, &mut bus);

    let hit = events
        .iter()
        .find_map(|e| match e {
            Event::DamageApplied(d) => Some(d.clone()),
            _ => None,
        })
        .unwrap();
    assert!((hit.pre_mitigation - 123.75).abs() < 0.01);
    assert!((hit.final_damage - 66.0).abs() < 0.01);
}

#[test]
fn test_spell_mr_path() {
    separator("Spell magic resist path");
    let (mut ctx, mut bus) = damage_context();
    let source = attacker(&mut ctx, 0.0);
    let target = defender(&mut ctx, 0.0);

    ctx.enqueue(
        Event::SpellLanded {
            source,
            target: Some(target),
        },
        0.0,
    );
    let events = drain(&mut ctx, &mut bus);

    let damage = applied(&events);
    assert_eq!(damage.len(), 1);
    assert!((damage[0] - 66.67).abs() < 0.01);
    let stats = ctx.world.get::<DamageStats>(source).unwrap();
    assert!((stats.magic_damage - 66.67).abs() < 0.01);
    assert!((stats.spell_damage - 66.67).abs() < 0.01);
}

#[test]
fn test_archangels_ap_stacker() {
    separator("Archangel's Staff over 11 seconds");
    let board = Board::new().with_champion(
        BoardChampion::new("TFT_Garen", 1, Position::new(0, 0))
            .with_items(&[ids::ARCHANGELS_STAFF]),
    );
    let config = SimulationConfig::default().with_seed(7).with_max_time(11.0);
    let mut sim = Simulation::with_defaults(&board, config).unwrap();
    let report = sim.run();

    let garen = sim.champions()[0];
    let state = sim.world().get::<ArchangelsState>(garen).unwrap();
    let spell = sim.world().get::<Spell>(garen).unwrap();
    println!("  stacks {}, bonus AP {:.1}, final AP {:.1}", state.stacks, spell.bonus_ap, spell.final_ap);

    assert_eq!(state.stacks, 2);
    // 20 static AP plus two 30 AP ticks
    assert!((spell.bonus_ap - 80.0).abs() < 0.01);
    assert!((spell.final_ap - (spell.base_ap + 80.0)).abs() < 0.01);
    assert_eq!(report.events_of_kind("ArchangelsTick").count(), 2);
}

#[test]
fn test_titans_event_stacker() {
    separator("Titan's Resolve to the stack cap");
    let mut catalog = Catalog::with_defaults();
    catalog.insert_champion(ChampionData::new(
        "TFT_TestBruiser",
        "Test Bruiser",
        ChampionStats {
            hp: 1000.0,
            damage: 50.0,
            attack_speed: 0.5,
            mana: 0.0,
            range: 1.0,
            ..ChampionStats::default()
        },
    ));
    // AS 100 doubles the 0.5 base to one attack per second
    catalog.insert_item(
        ItemData::new(ids::TITANS_RESOLVE, "Titan's Resolve")
            .with_effect("AS", 100.0)
            .with_effect("Armor", 10.0)
            .with_effect("StackCap", 25.0)
            .with_effect("StackingAD", 0.02)
            .with_effect("StackingSP", 2.0)
            .with_effect("BonusResistsAtStackCap", 20.0),
    );
    let board = Board::new().with_champion(
        BoardChampion::new("TFT_TestBruiser", 1, Position::new(0, 0))
            .with_items(&[ids::TITANS_RESOLVE]),
    );
    let config = SimulationConfig::default().with_seed(11).with_max_time(26.0);
    let mut sim = Simulation::new(&board, Arc::new(catalog), config).unwrap();
    let report = sim.run();

    let unit = sim.champions()[0];
    let world = sim.world();
    let attack = world.get::<Attack>(unit).unwrap();
    let health = world.get::<Health>(unit).unwrap();
    println!("  attacks {}, final AS {:.2}", report.results[0].stats.attack_count, attack.final_as);

    assert!((attack.final_as - 1.0).abs() < 0.01);
    assert_eq!(world.get::<TitansState>(unit).unwrap().stacks, 25);
    assert!((attack.bonus_percent_ad - 0.50).abs() < 0.01);
    assert!((world.get::<Spell>(unit).unwrap().bonus_ap - 50.0).abs() < 0.01);
    assert!((health.bonus_armor - 30.0).abs() < 0.01);
    assert!((health.bonus_mr - 20.0).abs() < 0.01);
}

#[test]
fn test_rapidfire_team_trait() {
    separator("Rapidfire with two distinct carriers");
    let board = Board::new()
        .with_champion(BoardChampion::new("TFT_Jinx", 1, Position::new(0, 0)))
        .with_champion(BoardChampion::new("TFT_Jinx", 1, Position::new(0, 1)))
        .with_champion(BoardChampion::new("TFT_Kindred", 1, Position::new(0, 2)))
        .with_champion(BoardChampion::new("TFT_Garen", 1, Position::new(0, 3)));
    let config = SimulationConfig::default().with_seed(5).with_max_time(30.0);
    let mut sim = Simulation::with_defaults(&board, config).unwrap();
    sim.run();

    let champions = sim.champions().to_vec();
    let world = sim.world();
    for &carrier in &champions[..3] {
        let effect = world.get::<RapidfireEffect>(carrier).unwrap();
        assert_eq!(effect.stacks, 10);
        let attack = world.get::<Attack>(carrier).unwrap();
        assert!((attack.bonus_percent_as - 0.50).abs() < 0.01);
    }
    let garen = champions[3];
    assert!(!world.has::<RapidfireEffect>(garen));
    assert!((world.get::<Attack>(garen).unwrap().bonus_percent_as - 0.10).abs() < 0.01);
}
