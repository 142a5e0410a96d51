use schema::{is_type_move, Ability, AbilityEffect, MoveSlot, PokemonType};

/// Every duel is fought at a fixed level 50.
pub const BATTLE_LEVEL: u32 = 50;

/// Result of resolving one damaging move, before the session applies the
/// low-HP ability boost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub damage: u32,
    /// Type effectiveness, kept for narration.
    pub multiplier: f64,
    /// Ability that modified the damage, if any.
    pub note: Option<Ability>,
}

/// Resolve a move against a defender. Pure computation over the inputs:
/// `attack` and `defense` are the live, possibly ability-modified values.
///
/// Zero-power moves short-circuit to zero damage; the heal they trigger is
/// owned by the session, as is the low-HP damage boost, because both read
/// session-mutable HP.
pub fn resolve_damage(
    mv: MoveSlot,
    attacker_type: PokemonType,
    defender_type: PokemonType,
    attack: f64,
    defense: f64,
    ability: Option<Ability>,
) -> DamageOutcome {
    if mv.power == 0 {
        return DamageOutcome {
            damage: 0,
            multiplier: 1.0,
            note: None,
        };
    }

    let level = BATTLE_LEVEL as f64;
    let mut damage =
        (((2.0 * level / 5.0 + 2.0) * mv.power as f64 * (attack / defense)) / 50.0) + 2.0;

    // Same-type attack bonus.
    if is_type_move(attacker_type, mv.name) {
        damage *= 1.5;
    }

    let multiplier = PokemonType::effectiveness(attacker_type, defender_type);
    damage *= multiplier;

    let mut note = None;
    if let Some(ability) = ability {
        if let AbilityEffect::FlatDamageBoost {
            multiplier: boost,
        } = ability.effect()
        {
            damage *= boost;
            note = Some(ability);
        }
    }

    DamageOutcome {
        damage: damage as u32,
        multiplier,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // A move no type owns, so STAB never interferes.
    const NEUTRAL_90: MoveSlot = MoveSlot {
        name: "Test Blast",
        power: 90,
    };

    #[test]
    fn zero_power_moves_deal_no_damage() {
        let heal = MoveSlot {
            name: "Synthesis",
            power: 0,
        };
        let outcome = resolve_damage(
            heal,
            PokemonType::Grass,
            PokemonType::Fire,
            999.0,
            1.0,
            Some(Ability::HugePower),
        );
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.multiplier, 1.0);
        assert_eq!(outcome.note, None);
    }

    #[test]
    fn weakness_beats_the_neutral_case() {
        // Fire (atk 80) vs Grass (def 60), power 90, no STAB, no ability.
        let weak = resolve_damage(
            NEUTRAL_90,
            PokemonType::Fire,
            PokemonType::Grass,
            80.0,
            60.0,
            None,
        );
        assert_eq!(weak.multiplier, 2.0);

        // Identical stats against a neutral defender.
        let neutral = resolve_damage(
            NEUTRAL_90,
            PokemonType::Fire,
            PokemonType::Normal,
            80.0,
            60.0,
            None,
        );
        assert_eq!(neutral.multiplier, 1.0);
        assert!(weak.damage > neutral.damage);
    }

    #[test]
    fn huge_power_exactly_doubles_damage() {
        // Power 50 at a 1.0 attack/defense ratio lands on a whole number
        // (22 + 2 = 24), so doubling is exact after truncation.
        let mv = MoveSlot {
            name: "Test Blast",
            power: 50,
        };
        let plain = resolve_damage(
            mv,
            PokemonType::Normal,
            PokemonType::Fire,
            100.0,
            100.0,
            None,
        );
        let boosted = resolve_damage(
            mv,
            PokemonType::Normal,
            PokemonType::Fire,
            100.0,
            100.0,
            Some(Ability::HugePower),
        );
        assert_eq!(plain.damage, 24);
        assert_eq!(boosted.damage, 48);
        assert_eq!(boosted.note, Some(Ability::HugePower));
    }

    #[test]
    fn stab_applies_only_to_own_type_moves() {
        let flamethrower = MoveSlot {
            name: "Flamethrower",
            power: 90,
        };
        let with_stab = resolve_damage(
            flamethrower,
            PokemonType::Fire,
            PokemonType::Normal,
            80.0,
            60.0,
            None,
        );
        let without_stab = resolve_damage(
            NEUTRAL_90,
            PokemonType::Fire,
            PokemonType::Normal,
            80.0,
            60.0,
            None,
        );
        // Same power and multiplier; only the STAB factor differs.
        assert!(with_stab.damage > without_stab.damage);
    }

    #[test]
    fn immunity_zeroes_the_damage() {
        let outcome = resolve_damage(
            NEUTRAL_90,
            PokemonType::Electric,
            PokemonType::Ground,
            120.0,
            40.0,
            None,
        );
        assert_eq!(outcome.multiplier, 0.0);
        assert_eq!(outcome.damage, 0);
    }

    #[test]
    fn low_hp_abilities_do_not_modify_the_pure_damage() {
        // Blaze is session-owned; the calculator must ignore it.
        let plain = resolve_damage(
            NEUTRAL_90,
            PokemonType::Fire,
            PokemonType::Normal,
            80.0,
            60.0,
            None,
        );
        let with_blaze = resolve_damage(
            NEUTRAL_90,
            PokemonType::Fire,
            PokemonType::Normal,
            80.0,
            60.0,
            Some(Ability::Blaze),
        );
        assert_eq!(plain.damage, with_blaze.damage);
        assert_eq!(with_blaze.note, None);
    }
}
