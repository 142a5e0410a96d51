use crate::battle::session::{BattleOutcome, BattleSession, SessionId, WIN_REWARD};
use crate::battle::state::BattleView;
use crate::combatant::{CombatantSnapshot, CreatureId, PlayerId};
use crate::errors::{ChallengeError, DuelError, DuelResult};
use crate::provider::{CombatantProfile, CombatantSource, RewardLedger};
use crate::timeout::SessionTimeoutSupervisor;
use schema::{Ability, PokemonType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Inactivity window after which an idle session is abandoned.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// One side of a challenge request, as the transport sees it: who is
/// playing, and which creature they have set as their buddy.
#[derive(Debug, Clone)]
pub struct Challenger {
    pub player: PlayerId,
    pub player_name: String,
    pub creature: CreatureId,
    /// Display name (nickname if set) shown in the battle.
    pub creature_name: String,
    /// Non-player actors cannot be challenged.
    pub bot: bool,
}

/// Creates and tracks live battle sessions.
///
/// The session map is the only mutable state shared across battles; each
/// session is additionally behind its own mutex, so moves, surrenders and
/// expiry for one battle are serialized while independent battles proceed
/// concurrently. Whichever event wins the race is authoritative; whatever
/// arrives after eviction gets `SessionGone`.
pub struct SessionRegistry<S, L> {
    source: S,
    ledger: L,
    sessions: Mutex<HashMap<SessionId, Arc<Mutex<BattleSession>>>>,
    /// Normalized player pair -> live session, to reject duplicate challenges.
    pairs: Mutex<HashMap<(PlayerId, PlayerId), SessionId>>,
    timeouts: SessionTimeoutSupervisor,
    next_id: AtomicU64,
}

impl<S: CombatantSource, L: RewardLedger> SessionRegistry<S, L> {
    pub fn new(source: S, ledger: L) -> Self {
        Self::with_idle_window(source, ledger, IDLE_TIMEOUT)
    }

    pub fn with_idle_window(source: S, ledger: L, window: Duration) -> Self {
        SessionRegistry {
            source,
            ledger,
            sessions: Mutex::new(HashMap::new()),
            pairs: Mutex::new(HashMap::new()),
            timeouts: SessionTimeoutSupervisor::new(window),
            next_id: AtomicU64::new(1),
        }
    }

    /// Validate a challenge, fetch both combatant profiles, and start a
    /// session. Any provider failure aborts the whole attempt; no partial
    /// session is ever registered.
    pub async fn create(
        &self,
        challenger: Challenger,
        opponent: Challenger,
    ) -> DuelResult<SessionId> {
        if challenger.player == opponent.player {
            return Err(ChallengeError::SelfChallenge.into());
        }
        if opponent.bot {
            return Err(ChallengeError::InvalidOpponent.into());
        }

        // Claim the pairing before the fetches so two simultaneous
        // challenges between the same players cannot both proceed.
        let pair = pair_key(challenger.player, opponent.player);
        let id = {
            let mut pairs = self.pairs.lock().unwrap();
            if pairs.contains_key(&pair) {
                return Err(ChallengeError::DuplicateChallenge(pair.0, pair.1).into());
            }
            // Allocate the id only once the pairing is claimed, so rejected
            // challenges never consume ids.
            let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
            pairs.insert(pair, id);
            id
        };

        let profiles = self.fetch_both(challenger.creature, opponent.creature).await;
        let (challenger_profile, opponent_profile) = match profiles {
            Ok(profiles) => profiles,
            Err(err) => {
                self.pairs.lock().unwrap().remove(&pair);
                return Err(err);
            }
        };

        let session = BattleSession::new(
            id,
            snapshot_from(&challenger, challenger_profile),
            snapshot_from(&opponent, opponent_profile),
        );
        info!(
            session = %id,
            challenger = %challenger.player,
            opponent = %opponent.player,
            "battle session created"
        );

        self.sessions
            .lock()
            .unwrap()
            .insert(id, Arc::new(Mutex::new(session)));
        self.timeouts.track(id);
        Ok(id)
    }

    async fn fetch_both(
        &self,
        challenger: CreatureId,
        opponent: CreatureId,
    ) -> DuelResult<(CombatantProfile, CombatantProfile)> {
        let challenger_profile = self.source.fetch_combatant_profile(challenger).await?;
        let opponent_profile = self.source.fetch_combatant_profile(opponent).await?;
        Ok((challenger_profile, opponent_profile))
    }

    /// Apply the turn holder's move and return the refreshed view.
    /// Resets the session's idle deadline; on a terminal transition the
    /// session is evicted and the winner credited.
    pub async fn submit_move(
        &self,
        id: SessionId,
        actor: PlayerId,
        slot: usize,
    ) -> DuelResult<BattleView> {
        let session = self.get(id)?;
        let (view, outcome) = {
            let mut session = session.lock().unwrap();
            let report = session.submit_move(actor, slot)?;
            self.timeouts.touch(id);
            debug!(session = %id, actor = %actor, slot, damage = report.damage, "move accepted");
            (session.view(), report.outcome)
        };
        if let Some(outcome) = outcome {
            self.finalize(id, outcome).await;
        }
        Ok(view)
    }

    /// Surrender on behalf of a participant. Terminal in one call.
    pub async fn surrender(&self, id: SessionId, actor: PlayerId) -> DuelResult<BattleView> {
        let session = self.get(id)?;
        let (view, outcome) = {
            let mut session = session.lock().unwrap();
            let outcome = session.surrender(actor)?;
            (session.view(), outcome)
        };
        self.finalize(id, outcome).await;
        Ok(view)
    }

    /// Current renderable view of a live session.
    pub fn view(&self, id: SessionId) -> DuelResult<BattleView> {
        let session = self.get(id)?;
        let view = session.lock().unwrap().view();
        Ok(view)
    }

    /// Discard every session whose idle window has elapsed. No winner is
    /// declared and no payout occurs; the returned ids let the transport
    /// disable further interaction.
    pub fn expire_idle(&self) -> Vec<SessionId> {
        let mut dropped = Vec::new();
        for id in self.timeouts.take_expired(Instant::now()) {
            // A session that finished between the deadline passing and
            // this sweep has already been evicted; skip it silently.
            if self.drop_session(id) {
                info!(session = %id, "battle abandoned after idle window");
                dropped.push(id);
            }
        }
        dropped
    }

    /// Remove a session from tracking without declaring a winner. Used on
    /// terminal transitions and timeout expiry; also lets a host cancel a
    /// battle administratively. Returns false if the session was already
    /// gone.
    pub fn drop_session(&self, id: SessionId) -> bool {
        let Some(session) = self.sessions.lock().unwrap().remove(&id) else {
            return false;
        };
        let pair = {
            let session = session.lock().unwrap();
            pair_key(session.sides[0].player, session.sides[1].player)
        };
        self.pairs.lock().unwrap().remove(&pair);
        self.timeouts.untrack(id);
        true
    }

    /// Ticker loop around `expire_idle`, to be spawned by the host.
    pub async fn run_expiry(&self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            self.expire_idle();
        }
    }

    /// Number of live sessions.
    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn get(&self, id: SessionId) -> DuelResult<Arc<Mutex<BattleSession>>> {
        self.sessions
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(DuelError::SessionGone)
    }

    async fn finalize(&self, id: SessionId, outcome: BattleOutcome) {
        self.drop_session(id);
        info!(
            session = %id,
            winner = %outcome.winner,
            loser = %outcome.loser_name,
            "battle finished"
        );
        if let Err(err) = self
            .ledger
            .credit_currency(outcome.winner, WIN_REWARD)
            .await
        {
            // The battle result stands even if the payout fails.
            warn!(session = %id, winner = %outcome.winner, %err, "reward credit failed");
        }
    }
}

fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn snapshot_from(who: &Challenger, profile: CombatantProfile) -> CombatantSnapshot {
    // Unknown provider tags degrade gracefully: an unrecognized type uses
    // the neutral deck, an unrecognized ability does nothing.
    let creature_type =
        PokemonType::from_name(&profile.primary_type).unwrap_or(PokemonType::Normal);
    let ability = Ability::from_name(&profile.primary_ability);
    CombatantSnapshot {
        player: who.player,
        player_name: who.player_name.clone(),
        name: who.creature_name.clone(),
        creature_type,
        ability,
        stats: profile.stats,
    }
}
