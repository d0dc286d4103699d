//! Entity-component store
//!
//! Every entity owns one [`ComponentRecord`] with a typed slot per component
//! kind. Iteration is in entity order, so runs are deterministic for a seed.

use crate::components::*;
use crate::types::{Entity, Position, TeamId};
use std::collections::BTreeMap;

/// All component slots of one entity
#[derive(Debug, Clone, Default)]
pub struct ComponentRecord {
    // === Identity ===
    pub info: Option<ChampionInfo>,
    pub team: Option<Team>,
    pub position: Option<Position>,
    pub traits: Option<Traits>,

    // === Stats ===
    pub health: Option<Health>,
    pub mana: Option<Mana>,
    pub attack: Option<Attack>,
    pub crit: Option<Crit>,
    pub spell: Option<Spell>,

    // === Combat bookkeeping ===
    pub action: Option<ActionState>,
    pub damage_stats: Option<DamageStats>,
    pub damage_log: Option<DamageLog>,
    pub debuffs: Option<Debuffs>,

    // === Equipment ===
    pub equipment: Option<Equipment>,
    pub static_bonus: Option<StaticItemBonus>,

    // === Markers ===
    pub ability_crit_items: Option<AbilityCritFromItems>,
    pub ability_crit_traits: Option<AbilityCritFromTraits>,
    pub immune_to_cc: Option<ImmuneToCc>,

    // === Dynamic item state ===
    pub archangels: Option<ArchangelsState>,
    pub guinsoos: Option<GuinsoosState>,
    pub titans: Option<TitansState>,
    pub quicksilver: Option<QuicksilverState>,
    pub nashors: Option<NashorsState>,
    pub blue_buff: Option<BlueBuffState>,
    pub evenshroud: Option<EvenshroudState>,
    pub flickerblade: Option<FlickerbladeState>,
    pub krakens: Option<KrakensState>,
    pub shojin: Option<ShojinState>,
    pub spirit_visage: Option<SpiritVisageState>,
    pub void_staff: Option<VoidStaffState>,
    pub red_buff: Option<RedBuffState>,

    // === Dynamic trait state ===
    pub rapidfire: Option<RapidfireEffect>,
    pub rapidfire_team: Option<RapidfireTeamBonus>,
}

/// Typed access to one slot of a [`ComponentRecord`]
pub trait Component: Sized + 'static {
    fn slot(record: &ComponentRecord) -> &Option<Self>;
    fn slot_mut(record: &mut ComponentRecord) -> &mut Option<Self>;
}

macro_rules! impl_component {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                fn slot(record: &ComponentRecord) -> &Option<Self> {
                    &record.$field
                }
                fn slot_mut(record: &mut ComponentRecord) -> &mut Option<Self> {
                    &mut record.$field
                }
            }
        )*
    };
}

impl_component! {
    ChampionInfo => info,
    Team => team,
    Position => position,
    Traits => traits,
    Health => health,
    Mana => mana,
    Attack => attack,
    Crit => crit,
    Spell => spell,
    ActionState => action,
    DamageStats => damage_stats,
    DamageLog => damage_log,
    Debuffs => debuffs,
    Equipment => equipment,
    StaticItemBonus => static_bonus,
    AbilityCritFromItems => ability_crit_items,
    AbilityCritFromTraits => ability_crit_traits,
    ImmuneToCc => immune_to_cc,
    ArchangelsState => archangels,
    GuinsoosState => guinsoos,
    TitansState => titans,
    QuicksilverState => quicksilver,
    NashorsState => nashors,
    BlueBuffState => blue_buff,
    EvenshroudState => evenshroud,
    FlickerbladeState => flickerblade,
    KrakensState => krakens,
    ShojinState => shojin,
    SpiritVisageState => spirit_visage,
    VoidStaffState => void_staff,
    RedBuffState => red_buff,
    RapidfireEffect => rapidfire,
    RapidfireTeamBonus => rapidfire_team,
}

#[derive(Debug, Clone, Default)]
pub struct World {
    next_id: u32,
    records: BTreeMap<Entity, ComponentRecord>,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }

    pub fn spawn(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        self.records.insert(entity, ComponentRecord::default());
        entity
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.records.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All entities in ascending id order
    pub fn entities(&self) -> Vec<Entity> {
        self.records.keys().copied().collect()
    }

    // === Typed access ===

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.records.get(&entity).and_then(|r| T::slot(r).as_ref())
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.records
            .get_mut(&entity)
            .and_then(|r| T::slot_mut(r).as_mut())
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.get::<T>(entity).is_some()
    }

    /// Set a component, replacing any previous value. Ignored for unknown entities.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) -> Option<T> {
        self.records
            .get_mut(&entity)
            .and_then(|r| T::slot_mut(r).replace(component))
    }

    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.records
            .get_mut(&entity)
            .and_then(|r| T::slot_mut(r).take())
    }

    /// Entities carrying a `T`, in id order
    pub fn query<T: Component>(&self) -> Vec<Entity> {
        self.records
            .iter()
            .filter(|(_, r)| T::slot(r).is_some())
            .map(|(e, _)| *e)
            .collect()
    }

    /// Whole record, for borrowing several slots at once
    pub fn record(&self, entity: Entity) -> Option<&ComponentRecord> {
        self.records.get(&entity)
    }

    pub fn record_mut(&mut self, entity: Entity) -> Option<&mut ComponentRecord> {
        self.records.get_mut(&entity)
    }

    // === Convenience ===

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.get::<Health>(entity).is_some_and(Health::is_alive)
    }

    pub fn team_of(&self, entity: Entity) -> Option<TeamId> {
        self.get::<Team>(entity).map(Team::id)
    }

    pub fn item_count(&self, entity: Entity, api_name: &str) -> usize {
        self.get::<Equipment>(entity)
            .map_or(0, |eq| eq.item_count(api_name))
    }
}
