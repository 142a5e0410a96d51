use crate::battle::abilities::apply_entry_effects;
use crate::battle::calculators::resolve_damage;
use crate::battle::state::{
    BattleEvent, BattleStatus, BattleView, SideView, TurnView, LOG_TAIL,
};
use crate::combatant::{Combatant, CombatantSnapshot, PlayerId};
use crate::errors::SessionError;
use schema::AbilityEffect;
use serde::Serialize;
use std::fmt;

/// Flat currency reward credited to the winner of a finished battle.
pub const WIN_REWARD: u32 = 50;

/// Opaque identifier for a live battle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal result of a battle, handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Display name of the fainted creature.
    pub loser_name: String,
}

/// What a single accepted move did to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReport {
    pub damage: u32,
    pub healed: u32,
    /// Present when the move ended the battle.
    pub outcome: Option<BattleOutcome>,
}

/// One in-progress battle between exactly two combatants.
///
/// State machine: `Active` (with the turn holder as sub-state) until a
/// faint or surrender transitions it to `Finished`. Mutated only through
/// `submit_move` and `surrender`; both reject anything after the terminal
/// transition, so late events leave HP, log, and winner untouched.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub id: SessionId,
    /// Index 0 is the challenger, index 1 the opponent.
    pub sides: [Combatant; 2],
    pub turn_holder: PlayerId,
    pub log: Vec<String>,
    pub status: BattleStatus,
}

impl BattleSession {
    /// Build a session from two frozen snapshots. Entry abilities are
    /// applied here, exactly once; the challenger holds the first turn.
    pub fn new(id: SessionId, challenger: CombatantSnapshot, opponent: CombatantSnapshot) -> Self {
        let mut side_a = Combatant::new(challenger);
        let mut side_b = Combatant::new(opponent);
        let turn_holder = side_a.player;

        let mut log = vec![BattleEvent::BattleStarted.format()];
        for event in apply_entry_effects(&mut side_a, &mut side_b) {
            log.push(event.format());
        }

        BattleSession {
            id,
            sides: [side_a, side_b],
            turn_holder,
            log,
            status: BattleStatus::Active,
        }
    }

    fn side_index(&self, player: PlayerId) -> Option<usize> {
        self.sides.iter().position(|s| s.player == player)
    }

    /// Submit the turn holder's move. Rejects out-of-turn actors, bad slot
    /// indices, and anything after the battle finished, all without state
    /// change.
    pub fn submit_move(
        &mut self,
        actor: PlayerId,
        slot: usize,
    ) -> Result<MoveReport, SessionError> {
        if self.status.is_finished() {
            return Err(SessionError::BattleOver);
        }
        let actor_index = self
            .side_index(actor)
            .ok_or(SessionError::NotAParticipant)?;
        if actor != self.turn_holder {
            return Err(SessionError::NotYourTurn);
        }
        let mv = *self
            .sides[actor_index]
            .deck
            .get(slot)
            .ok_or(SessionError::InvalidMoveSlot(slot))?;

        let defender_index = 1 - actor_index;

        if mv.power == 0 {
            // Status/heal move: restore half the base HP, capped at max.
            let attacker = &mut self.sides[actor_index];
            let healed = attacker.heal(attacker.base_hp / 2);
            self.push_event(BattleEvent::Healed {
                target: self.sides[actor_index].name.clone(),
                move_name: mv.name.to_string(),
                amount: healed,
            });
            self.turn_holder = self.sides[defender_index].player;
            return Ok(MoveReport {
                damage: 0,
                healed,
                outcome: None,
            });
        }

        let attacker = &self.sides[actor_index];
        let defender = &self.sides[defender_index];
        let resolved = resolve_damage(
            mv,
            attacker.creature_type,
            defender.creature_type,
            attacker.attack,
            defender.defense,
            attacker.ability,
        );
        let mut damage = resolved.damage;
        let mut note = resolved.note;

        // Low-HP boost is applied here, not in the calculator, because it
        // reads the attacker's live HP.
        if let Some(ability) = attacker.ability {
            if let AbilityEffect::LowHpDamageBoost { multiplier } = ability.effect() {
                if attacker.is_below_low_hp_threshold() {
                    damage = (damage as f64 * multiplier) as u32;
                    note = Some(ability);
                }
            }
        }

        self.sides[defender_index].take_damage(damage);
        self.push_event(BattleEvent::MoveUsed {
            attacker: self.sides[actor_index].name.clone(),
            move_name: mv.name.to_string(),
            multiplier: resolved.multiplier,
            note,
            damage,
        });

        // Faint check. If both sides are somehow at zero, the defender of
        // the acting side is deemed to have fainted first.
        let outcome = if self.sides[defender_index].is_fainted() {
            Some(self.finish(actor_index, defender_index))
        } else if self.sides[actor_index].is_fainted() {
            Some(self.finish(defender_index, actor_index))
        } else {
            self.turn_holder = self.sides[defender_index].player;
            None
        };

        Ok(MoveReport {
            damage,
            healed: 0,
            outcome,
        })
    }

    /// Give up. Sets the surrendering side's HP to zero and finishes the
    /// battle with the other side as winner, in one call.
    pub fn surrender(&mut self, actor: PlayerId) -> Result<BattleOutcome, SessionError> {
        if self.status.is_finished() {
            return Err(SessionError::BattleOver);
        }
        let actor_index = self
            .side_index(actor)
            .ok_or(SessionError::NotAParticipant)?;
        let winner_index = 1 - actor_index;

        self.sides[actor_index].current_hp = 0;
        self.push_event(BattleEvent::Surrendered {
            player_name: self.sides[actor_index].player_name.clone(),
        });
        Ok(self.finish(winner_index, actor_index))
    }

    fn finish(&mut self, winner_index: usize, loser_index: usize) -> BattleOutcome {
        let outcome = BattleOutcome {
            winner: self.sides[winner_index].player,
            winner_name: self.sides[winner_index].player_name.clone(),
            loser_name: self.sides[loser_index].name.clone(),
        };
        self.push_event(BattleEvent::BattleEnded {
            winner_name: outcome.winner_name.clone(),
            loser_name: outcome.loser_name.clone(),
        });
        self.status = BattleStatus::Finished {
            winner: outcome.winner,
            winner_name: outcome.winner_name.clone(),
            loser_name: outcome.loser_name.clone(),
        };
        outcome
    }

    fn push_event(&mut self, event: BattleEvent) {
        self.log.push(event.format());
    }

    /// The side currently holding the turn. None once finished.
    fn turn_side(&self) -> Option<&Combatant> {
        if self.status.is_finished() {
            return None;
        }
        self.side_index(self.turn_holder)
            .map(|index| &self.sides[index])
    }

    /// Renderable view for the transport: both sides' HP, the log tail,
    /// and the turn holder's move labels (or the winner once finished).
    pub fn view(&self) -> BattleView {
        let log_tail = self
            .log
            .iter()
            .rev()
            .take(LOG_TAIL)
            .rev()
            .cloned()
            .collect();

        let turn = self.turn_side().map(|side| TurnView {
            player: side.player,
            player_name: side.player_name.clone(),
            moves: [
                side.deck[0].name.to_string(),
                side.deck[1].name.to_string(),
                side.deck[2].name.to_string(),
                side.deck[3].name.to_string(),
            ],
        });

        let (winner, footer) = match &self.status {
            BattleStatus::Finished { winner_name, .. } => (
                Some(winner_name.clone()),
                format!("{} wins! Winner received {} Coins", winner_name, WIN_REWARD),
            ),
            BattleStatus::Active => {
                let waiting = turn
                    .as_ref()
                    .map(|t| t.player_name.as_str())
                    .unwrap_or("nobody");
                (
                    None,
                    format!("Waiting for {} to choose a move...", waiting),
                )
            }
        };

        BattleView {
            sides: [
                SideView::from_combatant(&self.sides[0]),
                SideView::from_combatant(&self.sides[1]),
            ],
            log_tail,
            turn,
            winner,
            footer,
        }
    }
}
