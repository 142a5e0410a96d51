use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All eighteen types. Useful for exhaustive table checks.
pub const ALL_TYPES: [PokemonType; 18] = [
    PokemonType::Normal,
    PokemonType::Fire,
    PokemonType::Water,
    PokemonType::Grass,
    PokemonType::Electric,
    PokemonType::Ice,
    PokemonType::Fighting,
    PokemonType::Poison,
    PokemonType::Ground,
    PokemonType::Flying,
    PokemonType::Psychic,
    PokemonType::Bug,
    PokemonType::Rock,
    PokemonType::Ghost,
    PokemonType::Dragon,
    PokemonType::Dark,
    PokemonType::Steel,
    PokemonType::Fairy,
];

impl PokemonType {
    /// Lowercase name as used by the external data provider.
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Grass => "grass",
            PokemonType::Electric => "electric",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Parse a provider type name. Returns None for anything outside the
    /// closed set; callers fall back to `Normal` (the neutral deck).
    pub fn from_name(name: &str) -> Option<PokemonType> {
        let parsed = match name {
            "normal" => PokemonType::Normal,
            "fire" => PokemonType::Fire,
            "water" => PokemonType::Water,
            "grass" => PokemonType::Grass,
            "electric" => PokemonType::Electric,
            "ice" => PokemonType::Ice,
            "fighting" => PokemonType::Fighting,
            "poison" => PokemonType::Poison,
            "ground" => PokemonType::Ground,
            "flying" => PokemonType::Flying,
            "psychic" => PokemonType::Psychic,
            "bug" => PokemonType::Bug,
            "rock" => PokemonType::Rock,
            "ghost" => PokemonType::Ghost,
            "dragon" => PokemonType::Dragon,
            "dark" => PokemonType::Dark,
            "steel" => PokemonType::Steel,
            "fairy" => PokemonType::Fairy,
            _ => return None,
        };
        Some(parsed)
    }

    /// Calculate type effectiveness multiplier for attacking type vs defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect.
    ///
    /// Looked up by attacking-type row; any pairing not listed in a row is
    /// neutral. The table is not symmetric.
    pub fn effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        use PokemonType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Rock) | (Normal, Steel) => 0.5,
            (Normal, Ghost) => 0.0,
            (Normal, _) => 1.0,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,
            (Fire, _) => 1.0,

            // Water
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
            (Water, _) => 1.0,

            // Grass
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug)
            | (Grass, Dragon)
            | (Grass, Steel) => 0.5,
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
            (Grass, _) => 1.0,

            // Electric
            (Electric, Grass) | (Electric, Electric) | (Electric, Dragon) => 0.5,
            (Electric, Ground) => 0.0,
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, _) => 1.0,

            // Ice
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,
            (Ice, _) => 1.0,

            // Fighting
            (Fighting, Poison)
            | (Fighting, Flying)
            | (Fighting, Psychic)
            | (Fighting, Bug)
            | (Fighting, Fairy) => 0.5,
            (Fighting, Ghost) => 0.0,
            (Fighting, Normal)
            | (Fighting, Ice)
            | (Fighting, Rock)
            | (Fighting, Dark)
            | (Fighting, Steel) => 2.0,
            (Fighting, _) => 1.0,

            // Poison
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
            (Poison, Steel) => 0.0,
            (Poison, Grass) | (Poison, Fairy) => 2.0,
            (Poison, _) => 1.0,

            // Ground
            (Ground, Water) | (Ground, Grass) | (Ground, Ice) => 0.5,
            (Ground, Flying) => 0.0,
            (Ground, Fire)
            | (Ground, Poison)
            | (Ground, Electric)
            | (Ground, Rock)
            | (Ground, Steel) => 2.0,
            (Ground, _) => 1.0,

            // Flying
            (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 0.5,
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
            (Flying, _) => 1.0,

            // Psychic
            (Psychic, Psychic) | (Psychic, Steel) => 0.5,
            (Psychic, Dark) => 0.0,
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, _) => 1.0,

            // Bug
            (Bug, Fire)
            | (Bug, Fighting)
            | (Bug, Poison)
            | (Bug, Flying)
            | (Bug, Ghost)
            | (Bug, Steel)
            | (Bug, Fairy) => 0.5,
            (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,
            (Bug, _) => 1.0,

            // Rock
            (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
            (Rock, _) => 1.0,

            // Ghost
            (Ghost, Normal) => 0.0,
            (Ghost, Psychic) | (Ghost, Ghost) => 2.0,
            (Ghost, Dark) => 0.5,
            (Ghost, _) => 1.0,

            // Dragon
            (Dragon, Dragon) => 2.0,
            (Dragon, Steel) => 0.5,
            (Dragon, Fairy) => 0.0,
            (Dragon, _) => 1.0,

            // Dark
            (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
            (Dark, Psychic) | (Dark, Ghost) => 2.0,
            (Dark, _) => 1.0,

            // Steel
            (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
            (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,
            (Steel, _) => 1.0,

            // Fairy
            (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => 0.5,
            (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,
            (Fairy, _) => 1.0,
        }
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::effectiveness(attacking, defending) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_stay_in_domain() {
        for attacking in ALL_TYPES {
            for defending in ALL_TYPES {
                let m = PokemonType::effectiveness(attacking, defending);
                assert!(
                    m == 0.0 || m == 0.5 || m == 1.0 || m == 2.0,
                    "{} vs {} produced {}",
                    attacking,
                    defending,
                    m
                );
            }
        }
    }

    #[test]
    fn unlisted_pairings_are_neutral() {
        // Pairings with no entry in the attacking row fall through to 1.0.
        assert_eq!(
            PokemonType::effectiveness(PokemonType::Fire, PokemonType::Normal),
            1.0
        );
        assert_eq!(
            PokemonType::effectiveness(PokemonType::Ghost, PokemonType::Fire),
            1.0
        );
    }

    #[test]
    fn table_is_not_symmetric() {
        assert_eq!(
            PokemonType::effectiveness(PokemonType::Fire, PokemonType::Grass),
            2.0
        );
        assert_eq!(
            PokemonType::effectiveness(PokemonType::Grass, PokemonType::Fire),
            0.5
        );
    }

    #[test]
    fn immunities() {
        assert!(PokemonType::is_immune(PokemonType::Normal, PokemonType::Ghost));
        assert!(PokemonType::is_immune(PokemonType::Electric, PokemonType::Ground));
        assert!(PokemonType::is_immune(PokemonType::Dragon, PokemonType::Fairy));
        assert!(!PokemonType::is_immune(PokemonType::Fire, PokemonType::Water));
    }

    #[test]
    fn names_round_trip() {
        for t in ALL_TYPES {
            assert_eq!(PokemonType::from_name(t.name()), Some(t));
        }
        assert_eq!(PokemonType::from_name("shadow"), None);
    }
}
