//! Pure damage math

use crate::types::DamageType;

/// Raw damage split by school
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageComponents {
    pub physical: f64,
    pub magic: f64,
    pub true_damage: f64,
}

impl DamageComponents {
    pub fn physical(amount: f64) -> Self {
        DamageComponents {
            physical: amount,
            ..DamageComponents::default()
        }
    }

    pub fn magic(amount: f64) -> Self {
        DamageComponents {
            magic: amount,
            ..DamageComponents::default()
        }
    }

    pub fn true_damage(amount: f64) -> Self {
        DamageComponents {
            true_damage: amount,
            ..DamageComponents::default()
        }
    }

    pub fn total(&self) -> f64 {
        self.physical + self.magic + self.true_damage
    }

    /// School with the largest raw value; ties prefer physical, then magic
    pub fn dominant_type(&self) -> DamageType {
        if self.physical >= self.magic && self.physical >= self.true_damage {
            DamageType::Physical
        } else if self.magic >= self.true_damage {
            DamageType::Magic
        } else {
            DamageType::True
        }
    }
}

/// Multiplier from a resistance value
pub fn resist_multiplier(resist: f64) -> f64 {
    100.0 / (100.0 + resist.max(0.0))
}

/// Defensive stats of the target
#[derive(Debug, Clone, Copy, Default)]
pub struct Defenses {
    pub armor: f64,
    pub magic_resist: f64,
    pub durability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mitigation {
    pub pre_mitigation: f64,
    pub final_damage: f64,
    pub mitigated: f64,
}

/// Apply crit, amp, resistance, and durability to a raw amount
pub fn mitigate(
    raw: f64,
    crit_factor: f64,
    damage_amp: f64,
    damage_type: DamageType,
    defenses: Defenses,
) -> Mitigation {
    let pre_mitigation = raw * crit_factor * (1.0 + damage_amp);
    let final_damage = match damage_type {
        DamageType::Physical => {
            pre_mitigation * resist_multiplier(defenses.armor) * (1.0 - defenses.durability)
        }
        DamageType::Magic => {
            pre_mitigation * resist_multiplier(defenses.magic_resist) * (1.0 - defenses.durability)
        }
        DamageType::True => pre_mitigation,
    };
    Mitigation {
        pre_mitigation,
        final_damage,
        mitigated: pre_mitigation - final_damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_attack_math() {
        let defenses = Defenses {
            armor: 50.0,
            ..Defenses::default()
        };
        let crit = (1.0 - 0.25) + 0.25 * 1.5;
        let m = mitigate(100.0, crit, 0.0, DamageType::Physical, defenses);
        assert!((m.pre_mitigation - 112.5).abs() < 0.01);
        assert!((m.final_damage - 75.0).abs() < 0.01);
        assert!((m.mitigated - 37.5).abs() < 0.01);
    }

    #[test]
    fn test_amp_and_durability() {
        let defenses = Defenses {
            armor: 50.0,
            durability: 0.2,
            ..Defenses::default()
        };
        let m = mitigate(100.0, 1.125, 0.10, DamageType::Physical, defenses);
        assert!((m.pre_mitigation - 123.75).abs() < 0.01);
        assert!((m.final_damage - 66.0).abs() < 0.01);
    }

    #[test]
    fn test_spell_mr_path() {
        let defenses = Defenses {
            magic_resist: 50.0,
            ..Defenses::default()
        };
        let m = mitigate(100.0, 1.0, 0.0, DamageType::Magic, defenses);
        assert!((m.final_damage - 66.67).abs() < 0.01);
    }

    #[test]
    fn test_true_damage_ignores_defenses() {
        let defenses = Defenses {
            armor: 200.0,
            magic_resist: 200.0,
            durability: 0.5,
        };
        let m = mitigate(100.0, 1.0, 0.0, DamageType::True, defenses);
        assert!((m.final_damage - 100.0).abs() < 0.01);
        assert_eq!(m.mitigated, 0.0);
    }

    #[test]
    fn test_negative_resist_floors_at_zero() {
        assert!((resist_multiplier(-40.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dominant_type_ties() {
        let tie = DamageComponents {
            physical: 50.0,
            magic: 50.0,
            true_damage: 50.0,
        };
        assert_eq!(tie.dominant_type(), DamageType::Physical);

        let magic_true = DamageComponents {
            physical: 0.0,
            magic: 30.0,
            true_damage: 30.0,
        };
        assert_eq!(magic_true.dominant_type(), DamageType::Magic);
        assert_eq!(DamageComponents::true_damage(5.0).dominant_type(), DamageType::True);
    }
}
