//! Dynamic item handlers, grouped by how they are driven

/// `attach_state` / `detach_state` for a handler backed by one state record
macro_rules! state_slot {
    ($state:ty) => {
        fn attach_state(
            &self,
            holder: $crate::types::Entity,
            item: &$crate::catalog::ItemData,
            world: &mut $crate::ecs::World,
        ) {
            $crate::items::attach(world, holder, || <$state>::from_item(item));
        }

        fn detach_state(
            &self,
            holder: $crate::types::Entity,
            world: &mut $crate::ecs::World,
        ) -> $crate::components::StatBonus {
            $crate::items::detach::<$state>(world, holder)
        }
    };
}

mod buffs;
mod on_hit;
mod stacking;
mod timed;

pub use buffs::{BlueBuff, Evenshroud, NashorsTooth, Quicksilver};
pub use on_hit::{RedBuff, VoidStaff};
pub use stacking::{KrakensFury, NavoriFlickerblades, SpearOfShojin, TitansResolve};
pub use timed::{ArchangelsStaff, GuinsoosRageblade, SpiritVisage};
