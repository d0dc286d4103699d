//! Managers that keep several components consistent with each other

mod equipment;

pub use equipment::{EquipError, EquipmentManager};
