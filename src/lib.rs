// In: src/lib.rs

//! Pokemon Duel Battle Engine
//!
//! A turn-based duel engine for a chat-platform creature game: per-pair
//! battle sessions with a deterministic damage model, type effectiveness
//! and ability modifiers, a concurrent session registry, and inactivity
//! timeout supervision. The chat transport, the external creature-data
//! API and the currency store are collaborators behind traits; the engine
//! itself is a pure in-process state machine.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod provider;
pub mod registry;
pub mod timeout;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the static battle data definitions.
pub use schema::{
    is_type_move,
    move_deck,
    move_pool,
    Ability,
    AbilityEffect,
    BaseStats,
    MoveSlot,
    PokemonType,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::calculators::{resolve_damage, DamageOutcome, BATTLE_LEVEL};
pub use battle::session::{BattleOutcome, BattleSession, MoveReport, SessionId, WIN_REWARD};
pub use battle::state::{BattleEvent, BattleStatus, BattleView, SideView, TurnView};

// Core runtime types for a duel.
pub use combatant::{Combatant, CombatantSnapshot, CreatureId, PlayerId};
pub use registry::{Challenger, SessionRegistry, IDLE_TIMEOUT};
pub use timeout::SessionTimeoutSupervisor;

// Collaborator traits.
pub use provider::{CombatantProfile, CombatantSource, RewardLedger};

// Crate-specific error and result types.
pub use errors::{ChallengeError, DuelError, DuelResult, ProviderError, SessionError};
