use crate::battle::state::BattleEvent;
use crate::combatant::Combatant;
use schema::AbilityEffect;

/// Apply entry-time ability effects to both sides. Each side's ability is
/// checked independently, so mutual Intimidate cuts both attacks.
///
/// Called exactly once, at session construction. The cut is permanent for
/// the session and deliberately not idempotent; the attack values live on
/// the session's own combatants, never on shared source data.
pub fn apply_entry_effects(side_a: &mut Combatant, side_b: &mut Combatant) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    apply_one(side_a, side_b, &mut events);
    apply_one(side_b, side_a, &mut events);
    events
}

fn apply_one(owner: &mut Combatant, opponent: &mut Combatant, events: &mut Vec<BattleEvent>) {
    let Some(ability) = owner.ability else {
        return;
    };
    if let AbilityEffect::EntryAttackCut { multiplier } = ability.effect() {
        opponent.attack *= multiplier;
        events.push(BattleEvent::AttackCut {
            source: owner.name.clone(),
            target: opponent.name.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{CombatantSnapshot, PlayerId};
    use pretty_assertions::assert_eq;
    use schema::{Ability, BaseStats, PokemonType};

    fn combatant(player: u64, ability: Option<Ability>) -> Combatant {
        Combatant::new(CombatantSnapshot {
            player: PlayerId(player),
            player_name: format!("Player {}", player),
            name: format!("Creature {}", player),
            creature_type: PokemonType::Normal,
            ability,
            stats: BaseStats {
                hp: 100,
                attack: 100,
                defense: 100,
            },
        })
    }

    #[test]
    fn intimidate_cuts_the_opponents_attack() {
        let mut a = combatant(1, Some(Ability::Intimidate));
        let mut b = combatant(2, None);

        let events = apply_entry_effects(&mut a, &mut b);

        assert_eq!(a.attack, 100.0);
        assert_eq!(b.attack, 66.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn mutual_intimidate_cuts_both_independently() {
        let mut a = combatant(1, Some(Ability::Intimidate));
        let mut b = combatant(2, Some(Ability::Intimidate));

        let events = apply_entry_effects(&mut a, &mut b);

        assert_eq!(a.attack, 66.0);
        assert_eq!(b.attack, 66.0);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn repeated_application_stacks() {
        // The single-application contract lives in session construction;
        // the function itself is intentionally not idempotent.
        let mut a = combatant(1, Some(Ability::Intimidate));
        let mut b = combatant(2, None);

        apply_entry_effects(&mut a, &mut b);
        apply_entry_effects(&mut a, &mut b);

        assert_eq!(b.attack, 100.0 * 0.66 * 0.66);
    }

    #[test]
    fn non_entry_abilities_do_nothing_on_entry() {
        let mut a = combatant(1, Some(Ability::Blaze));
        let mut b = combatant(2, Some(Ability::HugePower));

        let events = apply_entry_effects(&mut a, &mut b);

        assert_eq!(a.attack, 100.0);
        assert_eq!(b.attack, 100.0);
        assert!(events.is_empty());
    }
}
