//! Built-in catalog used when no data files are supplied

use super::champion::{ChampionData, ChampionStats};
use super::ids;
use super::item::ItemData;
use super::trait_data::{TraitData, TraitTier};
use super::Catalog;

pub(super) fn populate(catalog: &mut Catalog) {
    for champion in default_champions() {
        catalog.insert_champion(champion);
    }
    for item in default_items() {
        catalog.insert_item(item);
    }
    for data in default_traits() {
        catalog.insert_trait(data);
    }
}

fn default_champions() -> Vec<ChampionData> {
    vec![
        ChampionData::new(
            "TFT_Jinx",
            "Jinx",
            ChampionStats {
                hp: 500.0,
                armor: 20.0,
                magic_resist: 20.0,
                damage: 50.0,
                attack_speed: 0.75,
                initial_mana: 0.0,
                mana: 60.0,
                range: 4.0,
                ..ChampionStats::default()
            },
        )
        .with_cost(2)
        .with_traits(&[ids::RAPIDFIRE, "Rebel"])
        .with_ability_damage(&[200.0, 300.0, 460.0]),
        ChampionData::new(
            "TFT_Kindred",
            "Kindred",
            ChampionStats {
                hp: 500.0,
                armor: 20.0,
                magic_resist: 20.0,
                damage: 45.0,
                attack_speed: 0.7,
                initial_mana: 10.0,
                mana: 50.0,
                range: 4.0,
                ..ChampionStats::default()
            },
        )
        .with_cost(1)
        .with_traits(&[ids::RAPIDFIRE, "Nitro"])
        .with_ability_damage(&[180.0, 270.0, 405.0]),
        ChampionData::new(
            "TFT_Ahri",
            "Ahri",
            ChampionStats {
                hp: 550.0,
                armor: 20.0,
                magic_resist: 20.0,
                damage: 40.0,
                attack_speed: 0.7,
                initial_mana: 15.0,
                mana: 60.0,
                range: 4.0,
                ..ChampionStats::default()
            },
        )
        .with_cost(2)
        .with_traits(&["Arcana"])
        .with_ability_damage(&[240.0, 360.0, 560.0]),
        ChampionData::new(
            "TFT_Garen",
            "Garen",
            ChampionStats {
                hp: 650.0,
                armor: 40.0,
                magic_resist: 40.0,
                damage: 55.0,
                attack_speed: 0.6,
                initial_mana: 30.0,
                mana: 80.0,
                range: 1.0,
                ..ChampionStats::default()
            },
        )
        .with_cost(1)
        .with_traits(&["Bastion"])
        .with_ability_damage(&[120.0, 180.0, 270.0]),
        ChampionData::new(
            "TFT_Leona",
            "Leona",
            ChampionStats {
                hp: 700.0,
                armor: 45.0,
                magic_resist: 45.0,
                damage: 50.0,
                attack_speed: 0.55,
                initial_mana: 40.0,
                mana: 100.0,
                range: 1.0,
                ..ChampionStats::default()
            },
        )
        .with_cost(1)
        .with_traits(&["Bastion"]),
    ]
}

fn default_items() -> Vec<ItemData> {
    vec![
        // Components
        ItemData::new(ids::BF_SWORD, "B.F. Sword").with_effect("AD", 0.10),
        ItemData::new(ids::CHAIN_VEST, "Chain Vest").with_effect("Armor", 20.0),
        ItemData::new(ids::GIANTS_BELT, "Giant's Belt").with_effect("Health", 150.0),
        ItemData::new(ids::NEEDLESSLY_LARGE_ROD, "Needlessly Large Rod").with_effect("AP", 10.0),
        ItemData::new(ids::NEGATRON_CLOAK, "Negatron Cloak").with_effect("MagicResist", 20.0),
        ItemData::new(ids::RECURVE_BOW, "Recurve Bow").with_effect("AS", 10.0),
        ItemData::new(ids::SPARRING_GLOVES, "Sparring Gloves").with_effect("CritChance", 20.0),
        ItemData::new(ids::TEAR_OF_THE_GODDESS, "Tear of the Goddess").with_effect("Mana", 15.0),
        // Static completed items
        ItemData::new(ids::RABADONS_DEATHCAP, "Rabadon's Deathcap")
            .with_effect("AP", 50.0)
            .with_effect("BonusDamage", 0.15),
        ItemData::new(ids::DEATHBLADE, "Deathblade")
            .with_effect("AD", 0.55)
            .with_effect("BonusDamage", 0.10),
        ItemData::new(ids::WARMOGS_ARMOR, "Warmog's Armor")
            .with_effect("Health", 600.0)
            .with_effect("BonusPercentHP", 0.12),
        ItemData::new(ids::INFINITY_EDGE, "Infinity Edge")
            .with_effect("AD", 0.35)
            .with_effect("CritChance", 35.0)
            .with_effect("CritDamageToGive", 0.10),
        ItemData::new(ids::JEWELED_GAUNTLET, "Jeweled Gauntlet")
            .with_effect("AP", 35.0)
            .with_effect("CritChance", 35.0)
            .with_effect("CritDamageToGive", 0.10),
        // Dynamic items
        ItemData::new(ids::ARCHANGELS_STAFF, "Archangel's Staff")
            .with_effect("AP", 20.0)
            .with_effect("Mana", 15.0)
            .with_effect("IntervalSeconds", 5.0)
            .with_effect("APPerInterval", 30.0),
        ItemData::new(ids::GUINSOOS_RAGEBLADE, "Guinsoo's Rageblade")
            .with_effect("AS", 10.0)
            .with_effect("AP", 10.0)
            .with_effect("IntervalSeconds", 1.0)
            .with_effect("AttackSpeedPerStack", 5.0),
        ItemData::new(ids::TITANS_RESOLVE, "Titan's Resolve")
            .with_effect("AS", 10.0)
            .with_effect("Armor", 20.0)
            .with_effect("StackCap", 25.0)
            .with_effect("StackingAD", 0.02)
            .with_effect("StackingSP", 2.0)
            .with_effect("BonusResistsAtStackCap", 20.0),
        ItemData::new(ids::QUICKSILVER, "Quicksilver")
            .unique()
            .with_effect("AS", 30.0)
            .with_effect("CritChance", 20.0)
            .with_effect("MagicResist", 20.0)
            .with_effect("SpellShieldDuration", 18.0)
            .with_effect("ProcAttackSpeed", 0.03)
            .with_effect("ProcInterval", 2.0),
        ItemData::new(ids::NASHORS_TOOTH, "Nashor's Tooth")
            .with_effect("AS", 10.0)
            .with_effect("AP", 10.0)
            .with_effect("Health", 150.0)
            .with_effect("AttackSpeedToGive", 60.0)
            .with_effect("ASDuration", 5.0),
        ItemData::new(ids::BLUE_BUFF, "Blue Buff")
            .unique()
            .with_effect("AP", 15.0)
            .with_effect("Mana", 20.0)
            .with_effect("ManaRefund", 10.0)
            .with_effect("DamageAmp", 0.05)
            .with_effect("TakedownTimer", 8.0),
        ItemData::new(ids::EVENSHROUD, "Evenshroud")
            .unique()
            .with_effect("Health", 150.0)
            .with_effect("MagicResist", 20.0)
            .with_effect("ARReductionAmount", 30.0)
            .with_effect("HexRange", 2.0)
            .with_effect("BonusResists", 25.0)
            .with_effect("BonusResistDuration", 15.0),
        ItemData::new(ids::NAVORI_FLICKERBLADES, "Navori Flickerblades")
            .unique()
            .with_effect("AS", 10.0)
            .with_effect("ASPerStack", 0.03)
            .with_effect("ADPerBonus", 0.04)
            .with_effect("APPerBonus", 4.0)
            .with_effect("StacksPerBonus", 5.0),
        ItemData::new(ids::KRAKENS_FURY, "Kraken's Fury")
            .with_effect("AS", 10.0)
            .with_effect("AD", 0.10)
            .with_effect("ADOnAttack", 0.03),
        ItemData::new(ids::SPEAR_OF_SHOJIN, "Spear of Shojin")
            .with_effect("AD", 0.15)
            .with_effect("AP", 15.0)
            .with_effect("Mana", 15.0)
            .with_effect("FlatManaRestore", 5.0),
        ItemData::new(ids::SPIRIT_VISAGE, "Spirit Visage")
            .with_effect("Health", 250.0)
            .with_effect("Mana", 15.0)
            .with_effect("MissingHealthHeal", 0.15)
            .with_effect("HealTickRate", 5.0)
            .with_effect("MaxHeal", 100.0),
        ItemData::new(ids::VOID_STAFF, "Void Staff")
            .with_effect("AS", 10.0)
            .with_effect("AP", 15.0)
            .with_effect("Mana", 15.0)
            .with_effect("MRShred", 30.0)
            .with_effect("MRShredDuration", 3.0),
        ItemData::new(ids::RED_BUFF, "Red Buff")
            .unique()
            .with_effect("AS", 35.0)
            .with_effect("BonusDamage", 0.06)
            .with_effect("BurnPercent", 1.0)
            .with_effect("HealingReductionPct", 33.0)
            .with_effect("Duration", 5.0),
    ]
}

fn default_traits() -> Vec<TraitData> {
    vec![
        TraitData::new(
            ids::RAPIDFIRE,
            vec![
                TraitTier::new(2, 3)
                    .with_variable("TeamAttackSpeed", 0.10)
                    .with_variable("AttackSpeed", 0.04)
                    .with_variable("MaxStacks", 10.0),
                TraitTier::new(4, 5)
                    .with_variable("TeamAttackSpeed", 0.10)
                    .with_variable("AttackSpeed", 0.07)
                    .with_variable("MaxStacks", 10.0),
                TraitTier::new(6, 25)
                    .with_variable("TeamAttackSpeed", 0.10)
                    .with_variable("AttackSpeed", 0.11)
                    .with_variable("MaxStacks", 10.0),
            ],
        ),
        TraitData::new(
            "Bastion",
            vec![
                TraitTier::new(2, 3)
                    .with_variable("Armor", 20.0)
                    .with_variable("MagicResist", 20.0),
                TraitTier::new(4, 25)
                    .with_variable("Armor", 45.0)
                    .with_variable("MagicResist", 45.0),
            ],
        ),
        TraitData::new(
            "Arcana",
            vec![TraitTier::new(2, 25).with_variable("AP", 20.0)],
        ),
        TraitData::new("Rebel", vec![TraitTier::new(3, 25).with_variable("BonusDamage", 0.1)]),
        TraitData::new("Nitro", vec![TraitTier::new(3, 25).with_variable("AS", 15.0)]),
    ]
}
