//! Per-item dynamic state, attached to a holder while the item is equipped
//!
//! Each record keeps its tuning values (read from item data at attach time)
//! next to the running totals it has written into the holder's bonus fields,
//! so removal can reverse exactly what was added.

use super::bonus::StatBonus;
use crate::catalog::ItemData;

/// Shared behaviour of dynamic item records
pub trait ItemEffectState {
    /// Clear running state at combat start, keeping tuning values
    fn reset(&mut self);

    /// Everything this record has added to the holder's bonus fields
    fn accumulated_bonus(&self) -> StatBonus;
}

// === Timed stackers ===

#[derive(Debug, Clone, Default)]
pub struct ArchangelsState {
    pub interval: f64,
    pub ap_per_interval: f64,
    pub stacks: u32,
    pub total_ap: f64,
}

impl ArchangelsState {
    pub fn from_item(item: &ItemData) -> Self {
        ArchangelsState {
            interval: item.effect_or("IntervalSeconds", 5.0),
            ap_per_interval: item.effect_or("APPerInterval", 0.0),
            ..ArchangelsState::default()
        }
    }
}

impl ItemEffectState for ArchangelsState {
    fn reset(&mut self) {
        self.stacks = 0;
        self.total_ap = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            ability_power: self.total_ap,
            ..StatBonus::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuinsoosState {
    pub interval: f64,
    /// Decimal attack speed per stack
    pub as_per_stack: f64,
    pub stacks: u32,
    pub total_as: f64,
}

impl GuinsoosState {
    pub fn from_item(item: &ItemData) -> Self {
        GuinsoosState {
            interval: item.effect_or("IntervalSeconds", 1.0),
            as_per_stack: item.effect_or("AttackSpeedPerStack", 0.0) / 100.0,
            ..GuinsoosState::default()
        }
    }
}

impl ItemEffectState for GuinsoosState {
    fn reset(&mut self) {
        self.stacks = 0;
        self.total_as = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            percent_as: self.total_as,
            ..StatBonus::default()
        }
    }
}

// === Event stackers ===

#[derive(Debug, Clone, Default)]
pub struct TitansState {
    pub stack_cap: u32,
    pub ad_per_stack: f64,
    pub ap_per_stack: f64,
    pub resists_at_cap: f64,
    pub stacks: u32,
    pub cap_bonus_applied: bool,
}

impl TitansState {
    pub fn from_item(item: &ItemData) -> Self {
        TitansState {
            stack_cap: item.effect_or("StackCap", 25.0).max(0.0) as u32,
            ad_per_stack: item.effect_or("StackingAD", 0.0),
            ap_per_stack: item.effect_or("StackingSP", 0.0),
            resists_at_cap: item.effect_or("BonusResistsAtStackCap", 0.0),
            ..TitansState::default()
        }
    }
}

impl ItemEffectState for TitansState {
    fn reset(&mut self) {
        self.stacks = 0;
        self.cap_bonus_applied = false;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        let stacks = f64::from(self.stacks);
        let resists = if self.cap_bonus_applied {
            self.resists_at_cap
        } else {
            0.0
        };
        StatBonus {
            percent_ad: self.ad_per_stack * stacks,
            ability_power: self.ap_per_stack * stacks,
            armor: resists,
            magic_resist: resists,
            ..StatBonus::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlickerbladeState {
    pub as_per_stack: f64,
    pub ad_per_bonus: f64,
    pub ap_per_bonus: f64,
    pub stacks_per_bonus: u32,
    pub attack_counter: u32,
    pub total_as: f64,
    pub total_ad: f64,
    pub total_ap: f64,
}

impl FlickerbladeState {
    pub fn from_item(item: &ItemData) -> Self {
        FlickerbladeState {
            as_per_stack: item.effect_or("ASPerStack", 0.0),
            ad_per_bonus: item.effect_or("ADPerBonus", 0.0),
            ap_per_bonus: item.effect_or("APPerBonus", 0.0),
            stacks_per_bonus: item.effect_or("StacksPerBonus", 5.0).max(1.0) as u32,
            ..FlickerbladeState::default()
        }
    }
}

impl ItemEffectState for FlickerbladeState {
    fn reset(&mut self) {
        self.attack_counter = 0;
        self.total_as = 0.0;
        self.total_ad = 0.0;
        self.total_ap = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            percent_as: self.total_as,
            percent_ad: self.total_ad,
            ability_power: self.total_ap,
            ..StatBonus::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KrakensState {
    pub ad_per_stack: f64,
    pub stacks: u32,
    pub total_ad: f64,
}

impl KrakensState {
    pub fn from_item(item: &ItemData) -> Self {
        KrakensState {
            ad_per_stack: item.effect_or("ADOnAttack", 0.0),
            ..KrakensState::default()
        }
    }
}

impl ItemEffectState for KrakensState {
    fn reset(&mut self) {
        self.stacks = 0;
        self.total_ad = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            percent_ad: self.total_ad,
            ..StatBonus::default()
        }
    }
}

// === Timed buffs ===

#[derive(Debug, Clone, Default)]
pub struct QuicksilverState {
    pub duration: f64,
    pub proc_attack_speed: f64,
    pub proc_interval: f64,
    pub active: bool,
    pub stacks: u32,
    pub total_as: f64,
}

impl QuicksilverState {
    pub fn from_item(item: &ItemData) -> Self {
        QuicksilverState {
            duration: item.effect_or("SpellShieldDuration", 0.0),
            proc_attack_speed: item.effect_or("ProcAttackSpeed", 0.0),
            proc_interval: item.effect_or("ProcInterval", 2.0),
            ..QuicksilverState::default()
        }
    }
}

impl ItemEffectState for QuicksilverState {
    fn reset(&mut self) {
        self.active = false;
        self.stacks = 0;
        self.total_as = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            percent_as: self.total_as,
            ..StatBonus::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NashorsState {
    /// Decimal attack speed granted while active
    pub attack_speed: f64,
    pub duration: f64,
    pub active: bool,
    pub end_time: f64,
    pub sequence: u64,
    pub applied_as: f64,
}

impl NashorsState {
    pub fn from_item(item: &ItemData) -> Self {
        NashorsState {
            attack_speed: item.effect_or("AttackSpeedToGive", 0.0) / 100.0,
            duration: item.effect_or("ASDuration", 5.0),
            ..NashorsState::default()
        }
    }
}

impl ItemEffectState for NashorsState {
    fn reset(&mut self) {
        self.active = false;
        self.end_time = 0.0;
        self.sequence = 0;
        self.applied_as = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            percent_as: self.applied_as,
            ..StatBonus::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlueBuffState {
    pub mana_refund: f64,
    pub damage_amp: f64,
    pub takedown_timer: f64,
    pub active: bool,
    pub end_time: f64,
    pub sequence: u64,
    pub applied_amp: f64,
}

impl BlueBuffState {
    pub fn from_item(item: &ItemData) -> Self {
        BlueBuffState {
            mana_refund: item.effect_or("ManaRefund", 10.0),
            damage_amp: item.effect_or("DamageAmp", 0.05),
            takedown_timer: item.effect_or("TakedownTimer", 8.0),
            ..BlueBuffState::default()
        }
    }
}

impl ItemEffectState for BlueBuffState {
    fn reset(&mut self) {
        self.active = false;
        self.end_time = 0.0;
        self.sequence = 0;
        self.applied_amp = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            damage_amp: self.applied_amp,
            ..StatBonus::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvenshroudState {
    /// Flat armor removed from enemies in range
    pub armor_reduction: f64,
    pub hex_range: f64,
    pub bonus_resists: f64,
    pub resist_duration: f64,
    pub resists_active: bool,
    pub applied_resists: f64,
}

impl EvenshroudState {
    pub fn from_item(item: &ItemData) -> Self {
        EvenshroudState {
            armor_reduction: item.effect_or("ARReductionAmount", 0.0),
            hex_range: item.effect_or("HexRange", 2.0),
            bonus_resists: item.effect_or("BonusResists", 0.0),
            resist_duration: item.effect_or("BonusResistDuration", 0.0),
            ..EvenshroudState::default()
        }
    }
}

impl ItemEffectState for EvenshroudState {
    fn reset(&mut self) {
        self.resists_active = false;
        self.applied_resists = 0.0;
    }

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus {
            armor: self.applied_resists,
            magic_resist: self.applied_resists,
            ..StatBonus::default()
        }
    }
}

// === Stateless procs ===

#[derive(Debug, Clone, Default)]
pub struct ShojinState {
    pub mana_per_attack: f64,
}

impl ShojinState {
    pub fn from_item(item: &ItemData) -> Self {
        ShojinState {
            mana_per_attack: item.effect_or("FlatManaRestore", 0.0),
        }
    }
}

impl ItemEffectState for ShojinState {
    fn reset(&mut self) {}

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpiritVisageState {
    pub missing_health_rate: f64,
    pub tick_interval: f64,
    /// Floor for a single heal
    pub min_heal: f64,
}

impl SpiritVisageState {
    pub fn from_item(item: &ItemData) -> Self {
        SpiritVisageState {
            missing_health_rate: item.effect_or("MissingHealthHeal", 0.0),
            tick_interval: item.effect_or("HealTickRate", 5.0),
            min_heal: item.effect_or("MaxHeal", 0.0),
        }
    }
}

impl ItemEffectState for SpiritVisageState {
    fn reset(&mut self) {}

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct VoidStaffState {
    /// Flat magic resist removed from the target
    pub mr_shred: f64,
    pub duration: f64,
}

impl VoidStaffState {
    pub fn from_item(item: &ItemData) -> Self {
        VoidStaffState {
            mr_shred: item.effect_or("MRShred", 0.0),
            duration: item.effect_or("MRShredDuration", 3.0),
        }
    }
}

impl ItemEffectState for VoidStaffState {
    fn reset(&mut self) {}

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RedBuffState {
    /// Fraction of max HP burned per second
    pub burn_percent: f64,
    /// Fraction of healing removed
    pub heal_reduction: f64,
    pub duration: f64,
}

impl RedBuffState {
    pub fn from_item(item: &ItemData) -> Self {
        RedBuffState {
            burn_percent: item.effect_or("BurnPercent", 0.0) / 100.0,
            heal_reduction: item.effect_or("HealingReductionPct", 0.0) / 100.0,
            duration: item.effect_or("Duration", 5.0),
        }
    }
}

impl ItemEffectState for RedBuffState {
    fn reset(&mut self) {}

    fn accumulated_bonus(&self) -> StatBonus {
        StatBonus::default()
    }
}
