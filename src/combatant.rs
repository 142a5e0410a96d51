use schema::{move_deck, Ability, BaseStats, MoveSlot, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a player on the chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a creature in the external data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frozen record of one side's combatant, assembled at challenge time from
/// the player's chosen creature and the provider profile. Never mutated;
/// the session derives its own live copy.
#[derive(Debug, Clone, Serialize)]
pub struct CombatantSnapshot {
    pub player: PlayerId,
    pub player_name: String,
    /// Creature display name (nickname if the player set one).
    pub name: String,
    pub creature_type: PokemonType,
    pub ability: Option<Ability>,
    pub stats: BaseStats,
}

/// One side of a live battle. Built once from a snapshot; attack and
/// defense live as floats so entry ability cuts apply fractionally.
#[derive(Debug, Clone, Serialize)]
pub struct Combatant {
    pub player: PlayerId,
    pub player_name: String,
    pub name: String,
    pub creature_type: PokemonType,
    pub ability: Option<Ability>,
    pub base_hp: u32,
    pub attack: f64,
    pub defense: f64,
    pub max_hp: u32,
    pub current_hp: u32,
    pub deck: [MoveSlot; 4],
}

impl Combatant {
    /// Level-50 approximation: max HP is twice the base HP plus 50,
    /// computed once and never changed.
    pub fn new(snapshot: CombatantSnapshot) -> Self {
        let max_hp = snapshot.stats.hp * 2 + 50;
        Combatant {
            player: snapshot.player,
            player_name: snapshot.player_name,
            name: snapshot.name,
            creature_type: snapshot.creature_type,
            ability: snapshot.ability,
            base_hp: snapshot.stats.hp,
            attack: snapshot.stats.attack as f64,
            defense: snapshot.stats.defense as f64,
            max_hp,
            current_hp: max_hp,
            deck: move_deck(snapshot.creature_type),
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, flooring at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Restore HP, capped at max. Returns the amount actually recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount).min(self.max_hp);
        self.current_hp - before
    }

    /// The low-HP ability threshold: strictly below a third of max HP.
    pub fn is_below_low_hp_threshold(&self) -> bool {
        (self.current_hp as f64) < self.max_hp as f64 / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(hp: u32) -> CombatantSnapshot {
        CombatantSnapshot {
            player: PlayerId(1),
            player_name: "Ash".to_string(),
            name: "Charizard".to_string(),
            creature_type: PokemonType::Fire,
            ability: Some(Ability::Blaze),
            stats: BaseStats {
                hp,
                attack: 84,
                defense: 78,
            },
        }
    }

    #[test]
    fn max_hp_is_level_50_approximation() {
        let c = Combatant::new(snapshot(78));
        assert_eq!(c.max_hp, 78 * 2 + 50);
        assert_eq!(c.current_hp, c.max_hp);
    }

    #[test]
    fn damage_floors_at_zero_and_heal_caps_at_max() {
        let mut c = Combatant::new(snapshot(78));
        c.take_damage(c.max_hp + 500);
        assert_eq!(c.current_hp, 0);
        assert!(c.is_fainted());

        c.current_hp = c.max_hp - 10;
        let recovered = c.heal(1000);
        assert_eq!(recovered, 10);
        assert_eq!(c.current_hp, c.max_hp);
    }

    #[test]
    fn low_hp_threshold_is_strict() {
        let mut c = Combatant::new(snapshot(75));
        // max_hp = 200, threshold at 66.67
        assert_eq!(c.max_hp, 200);
        c.current_hp = 67;
        assert!(!c.is_below_low_hp_threshold());
        c.current_hp = 66;
        assert!(c.is_below_low_hp_threshold());
    }
}
