use crate::combatant::{CreatureId, PlayerId};
use crate::errors::ProviderError;
use schema::BaseStats;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// What the external data provider knows about a creature. Type and
/// ability arrive as raw tags and are parsed at the registry boundary:
/// an unknown type falls back to the neutral deck, an unknown ability
/// simply has no effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantProfile {
    pub stats: BaseStats,
    pub primary_type: String,
    pub primary_ability: String,
}

/// External source of combatant profiles. The fetch happens once per side
/// at session creation, never per turn; a failure aborts the challenge.
pub trait CombatantSource: Send + Sync {
    fn fetch_combatant_profile(
        &self,
        creature: CreatureId,
    ) -> impl Future<Output = Result<CombatantProfile, ProviderError>> + Send;
}

/// Persistence collaborator that credits currency to the battle winner.
/// Called exactly once per finished session, for the winner only.
pub trait RewardLedger: Send + Sync {
    fn credit_currency(
        &self,
        player: PlayerId,
        amount: u32,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;
}
