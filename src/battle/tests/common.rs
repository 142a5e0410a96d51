use crate::battle::session::{BattleSession, SessionId};
use crate::combatant::{CombatantSnapshot, PlayerId};
use schema::{Ability, BaseStats, PokemonType};

/// A builder for creating test combatant snapshots with common defaults.
///
/// # Example
/// ```ignore
/// let snapshot = TestCombatantBuilder::new(1, "Ash", "Charizard")
///     .with_type(PokemonType::Fire)
///     .with_ability(Ability::Blaze)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    player: PlayerId,
    player_name: String,
    name: String,
    creature_type: PokemonType,
    ability: Option<Ability>,
    stats: BaseStats,
}

impl TestCombatantBuilder {
    pub fn new(player: u64, player_name: &str, name: &str) -> Self {
        Self {
            player: PlayerId(player),
            player_name: player_name.to_string(),
            name: name.to_string(),
            creature_type: PokemonType::Normal,
            ability: None,
            stats: BaseStats {
                hp: 100,
                attack: 100,
                defense: 100,
            },
        }
    }

    pub fn with_type(mut self, creature_type: PokemonType) -> Self {
        self.creature_type = creature_type;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn with_stats(mut self, hp: u32, attack: u32, defense: u32) -> Self {
        self.stats = BaseStats {
            hp,
            attack,
            defense,
        };
        self
    }

    pub fn build(self) -> CombatantSnapshot {
        CombatantSnapshot {
            player: self.player,
            player_name: self.player_name,
            name: self.name,
            creature_type: self.creature_type,
            ability: self.ability,
            stats: self.stats,
        }
    }
}

/// Two plain normal-type sides with identical stats; challenger is
/// player 1 ("Ash"), opponent player 2 ("Misty").
pub fn plain_session() -> BattleSession {
    BattleSession::new(
        SessionId(1),
        TestCombatantBuilder::new(1, "Ash", "Snorlax").build(),
        TestCombatantBuilder::new(2, "Misty", "Lapras").build(),
    )
}
