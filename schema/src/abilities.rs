use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of abilities the duel engine models. Provider ability
/// tags outside this set carry no effect and are dropped at the parsing
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Ability {
    Intimidate,
    HugePower,
    Blaze,
    Torrent,
    Overgrow,
    Swarm,
}

/// What an ability actually does, as data. Adding an ability means adding
/// a variant and a mapping here, not new control flow in the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbilityEffect {
    /// On entry, permanently cuts the opposing side's attack for the session.
    EntryAttackCut { multiplier: f64 },
    /// Unconditionally multiplies outgoing damage.
    FlatDamageBoost { multiplier: f64 },
    /// Multiplies outgoing damage while the attacker is below a third of
    /// its max HP.
    LowHpDamageBoost { multiplier: f64 },
}

impl Ability {
    /// Provider tag, as delivered by the external data API.
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Intimidate => "intimidate",
            Ability::HugePower => "huge-power",
            Ability::Blaze => "blaze",
            Ability::Torrent => "torrent",
            Ability::Overgrow => "overgrow",
            Ability::Swarm => "swarm",
        }
    }

    pub fn from_name(name: &str) -> Option<Ability> {
        let parsed = match name {
            "intimidate" => Ability::Intimidate,
            "huge-power" => Ability::HugePower,
            "blaze" => Ability::Blaze,
            "torrent" => Ability::Torrent,
            "overgrow" => Ability::Overgrow,
            "swarm" => Ability::Swarm,
            _ => return None,
        };
        Some(parsed)
    }

    pub fn effect(&self) -> AbilityEffect {
        match self {
            Ability::Intimidate => AbilityEffect::EntryAttackCut { multiplier: 0.66 },
            Ability::HugePower => AbilityEffect::FlatDamageBoost { multiplier: 2.0 },
            Ability::Blaze | Ability::Torrent | Ability::Overgrow | Ability::Swarm => {
                AbilityEffect::LowHpDamageBoost { multiplier: 1.5 }
            }
        }
    }

    /// Abilities worth surfacing in the battle view.
    pub fn is_notable(&self) -> bool {
        matches!(self, Ability::Intimidate | Ability::Blaze | Ability::HugePower)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_mapping() {
        assert_eq!(
            Ability::Intimidate.effect(),
            AbilityEffect::EntryAttackCut { multiplier: 0.66 }
        );
        assert_eq!(
            Ability::HugePower.effect(),
            AbilityEffect::FlatDamageBoost { multiplier: 2.0 }
        );
        for low_hp in [Ability::Blaze, Ability::Torrent, Ability::Overgrow, Ability::Swarm] {
            assert_eq!(
                low_hp.effect(),
                AbilityEffect::LowHpDamageBoost { multiplier: 1.5 }
            );
        }
    }

    #[test]
    fn unknown_tags_have_no_effect() {
        assert_eq!(Ability::from_name("static"), None);
        assert_eq!(Ability::from_name("huge-power"), Some(Ability::HugePower));
    }
}
