use crate::pokemon_types::PokemonType;
use serde::Serialize;

/// One of a combatant's four move slots. A power of zero marks the
/// status/heal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveSlot {
    pub name: &'static str,
    pub power: u32,
}

const fn slot(name: &'static str, power: u32) -> MoveSlot {
    MoveSlot { name, power }
}

/// The raw four-move pool for a type: weak move, strong move, signature
/// move, and the dedicated status/heal move.
pub fn move_pool(creature_type: PokemonType) -> [MoveSlot; 4] {
    use PokemonType::*;

    match creature_type {
        Normal => [
            slot("Tackle", 40),
            slot("Quick Attack", 40),
            slot("Hyper Beam", 120),
            slot("Rest", 0),
        ],
        Fire => [
            slot("Ember", 40),
            slot("Flamethrower", 90),
            slot("Fire Blast", 110),
            slot("Will-O-Wisp", 0),
        ],
        Water => [
            slot("Water Gun", 40),
            slot("Surf", 90),
            slot("Hydro Pump", 110),
            slot("Rain Dance", 0),
        ],
        Grass => [
            slot("Vine Whip", 45),
            slot("Razor Leaf", 55),
            slot("Solar Beam", 120),
            slot("Synthesis", 0),
        ],
        Electric => [
            slot("Thundershock", 40),
            slot("Thunderbolt", 90),
            slot("Thunder", 110),
            slot("Thunder Wave", 0),
        ],
        Ice => [
            slot("Ice Shard", 40),
            slot("Ice Beam", 90),
            slot("Blizzard", 110),
            slot("Hail", 0),
        ],
        Fighting => [
            slot("Karate Chop", 50),
            slot("Brick Break", 75),
            slot("Close Combat", 120),
            slot("Bulk Up", 0),
        ],
        Poison => [
            slot("Acid", 40),
            slot("Sludge Bomb", 90),
            slot("Gunk Shot", 120),
            slot("Toxic", 0),
        ],
        Ground => [
            slot("Mud Shot", 55),
            slot("Earthquake", 100),
            slot("Fissure", 120),
            slot("Sandstorm", 0),
        ],
        Flying => [
            slot("Peck", 35),
            slot("Aerial Ace", 60),
            slot("Brave Bird", 120),
            slot("Roost", 0),
        ],
        Psychic => [
            slot("Confusion", 50),
            slot("Psychic", 90),
            slot("Future Sight", 120),
            slot("Calm Mind", 0),
        ],
        Bug => [
            slot("Bug Bite", 60),
            slot("X-Scissor", 80),
            slot("Megahorn", 120),
            slot("Quiver Dance", 0),
        ],
        Rock => [
            slot("Rock Throw", 50),
            slot("Rock Slide", 75),
            slot("Stone Edge", 100),
            slot("Polish", 0),
        ],
        Ghost => [
            slot("Lick", 30),
            slot("Shadow Ball", 80),
            slot("Poltergeist", 110),
            slot("Confuse Ray", 0),
        ],
        Dragon => [
            slot("Twister", 40),
            slot("Dragon Claw", 80),
            slot("Outrage", 120),
            slot("Dragon Dance", 0),
        ],
        Dark => [
            slot("Bite", 60),
            slot("Crunch", 80),
            slot("Dark Pulse", 80),
            slot("Nasty Plot", 0),
        ],
        Steel => [
            slot("Metal Claw", 50),
            slot("Iron Head", 80),
            slot("Flash Cannon", 80),
            slot("Iron Defense", 0),
        ],
        Fairy => [
            slot("Fairy Wind", 40),
            slot("Moonblast", 95),
            slot("Play Rough", 90),
            slot("Moonlight", 0),
        ],
    }
}

/// Assemble the battle deck for a type: two type moves, the guaranteed
/// neutral move, and the type's heal/status move. Slot 3 is always the
/// zero-power slot.
pub fn move_deck(creature_type: PokemonType) -> [MoveSlot; 4] {
    let pool = move_pool(creature_type);
    let neutral = move_pool(PokemonType::Normal);
    [pool[0], pool[1], neutral[0], pool[3]]
}

/// Whether a move belongs to the given type's own pool. Used for the
/// same-type attack bonus; checked against the raw pool, not the deck,
/// so the borrowed neutral move never earns STAB for other types.
pub fn is_type_move(creature_type: PokemonType, move_name: &str) -> bool {
    move_pool(creature_type).iter().any(|m| m.name == move_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon_types::ALL_TYPES;

    #[test]
    fn every_deck_has_four_slots_with_heal_last() {
        for t in ALL_TYPES {
            let deck = move_deck(t);
            assert_eq!(deck.len(), 4);
            let zero_power = deck.iter().filter(|m| m.power == 0).count();
            assert_eq!(zero_power, 1, "{} deck has {} heal slots", t, zero_power);
            assert_eq!(deck[3].power, 0, "{} heal slot is not last", t);
        }
    }

    #[test]
    fn deck_borrows_the_neutral_move() {
        let deck = move_deck(PokemonType::Fire);
        assert_eq!(deck[2].name, "Tackle");
        assert_eq!(deck[0].name, "Ember");
        assert_eq!(deck[1].name, "Flamethrower");
        assert_eq!(deck[3].name, "Will-O-Wisp");
    }

    #[test]
    fn stab_checks_the_raw_pool() {
        assert!(is_type_move(PokemonType::Fire, "Flamethrower"));
        assert!(is_type_move(PokemonType::Normal, "Tackle"));
        // Tackle is in every deck, but only Normal owns it.
        assert!(!is_type_move(PokemonType::Fire, "Tackle"));
        assert!(!is_type_move(PokemonType::Fire, "Surf"));
    }
}
