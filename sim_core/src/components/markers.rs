//! Zero-sized capability markers

use serde::{Deserialize, Serialize};

/// Abilities can crit because of an equipped item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCritFromItems;

/// Abilities can crit because of an active trait
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCritFromTraits;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmuneToCc;
