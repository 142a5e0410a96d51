use crate::combatant::{Combatant, PlayerId};
use schema::{Ability, AbilityEffect};
use serde::Serialize;

/// How many log entries the transport shows at once.
pub const LOG_TAIL: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BattleStatus {
    Active,
    Finished {
        winner: PlayerId,
        winner_name: String,
        loser_name: String,
    },
}

impl BattleStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, BattleStatus::Finished { .. })
    }
}

/// Everything that can land in the battle log. Events carry the display
/// names they need so formatting has no further lookups to do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BattleEvent {
    BattleStarted,
    /// An entry ability cut the opposing side's attack.
    AttackCut {
        source: String,
        target: String,
    },
    MoveUsed {
        attacker: String,
        move_name: String,
        multiplier: f64,
        note: Option<Ability>,
        damage: u32,
    },
    Healed {
        target: String,
        move_name: String,
        amount: u32,
    },
    Surrendered {
        player_name: String,
    },
    BattleEnded {
        winner_name: String,
        loser_name: String,
    },
}

impl BattleEvent {
    /// Formats the event into the log line the transport renders.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::BattleStarted => "Battle start!".to_string(),
            BattleEvent::AttackCut { source, target } => {
                format!("{}'s Intimidate cut {}'s Attack!", source, target)
            }
            BattleEvent::MoveUsed {
                attacker,
                move_name,
                multiplier,
                note,
                damage,
            } => {
                let effectiveness = match *multiplier {
                    m if m > 1.0 => " It's super effective!",
                    0.0 => " It had no effect!",
                    m if m < 1.0 => " It's not very effective...",
                    _ => "",
                };
                format!(
                    "{} used {}!{}{} (-{})",
                    attacker,
                    move_name,
                    effectiveness,
                    Self::format_note(*note),
                    damage
                )
            }
            BattleEvent::Healed {
                target,
                move_name,
                amount,
            } => {
                format!("{} used {} and healed {} HP!", target, move_name, amount)
            }
            BattleEvent::Surrendered { player_name } => {
                format!("{} surrendered!", player_name)
            }
            BattleEvent::BattleEnded {
                winner_name,
                loser_name,
            } => {
                format!("{}'s Pokemon fainted {}!", winner_name, loser_name)
            }
        }
    }

    fn format_note(note: Option<Ability>) -> String {
        let Some(ability) = note else {
            return String::new();
        };
        match ability.effect() {
            AbilityEffect::FlatDamageBoost { .. } => " (Huge Power!)".to_string(),
            AbilityEffect::LowHpDamageBoost { .. } => {
                format!(" ({}!)", ability.name().to_uppercase())
            }
            AbilityEffect::EntryAttackCut { .. } => String::new(),
        }
    }
}

/// Renderable state of one side.
#[derive(Debug, Clone, Serialize)]
pub struct SideView {
    pub player_name: String,
    pub creature_name: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub hp_bar: String,
    /// Ability tag, present only for the notable set.
    pub ability: Option<&'static str>,
}

/// The choices offered to the side currently holding the turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnView {
    pub player: PlayerId,
    pub player_name: String,
    pub moves: [String; 4],
}

/// Snapshot of the battle handed to the transport after every transition.
/// The engine never renders; this is the full set of renderable data.
#[derive(Debug, Clone, Serialize)]
pub struct BattleView {
    pub sides: [SideView; 2],
    pub log_tail: Vec<String>,
    /// None once the battle has finished.
    pub turn: Option<TurnView>,
    pub winner: Option<String>,
    pub footer: String,
}

impl SideView {
    pub fn from_combatant(side: &Combatant) -> Self {
        SideView {
            player_name: side.player_name.clone(),
            creature_name: side.name.clone(),
            current_hp: side.current_hp,
            max_hp: side.max_hp,
            hp_bar: hp_bar(side.current_hp, side.max_hp),
            ability: side
                .ability
                .filter(|a| a.is_notable())
                .map(|a| a.name()),
        }
    }
}

/// Ten-segment HP bar, filled proportionally.
pub fn hp_bar(current: u32, max: u32) -> String {
    let ratio = if max == 0 {
        0.0
    } else {
        current as f64 / max as f64
    };
    let filled = (ratio * 10.0) as usize;
    let mut bar = String::with_capacity(10);
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..10 {
        bar.push('-');
    }
    bar
}
