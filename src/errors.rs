use crate::combatant::PlayerId;
use std::fmt;

/// Main error type for the duel engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelError {
    /// Error validating a challenge request
    Challenge(ChallengeError),
    /// Error applying an action to a live session
    Session(SessionError),
    /// Error fetching data from the external provider
    Provider(ProviderError),
    /// The session has already finished or been evicted; benign for the
    /// engine, reported to the caller as "battle no longer active"
    SessionGone,
}

/// Errors rejecting a challenge before any session exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// A player challenged themselves
    SelfChallenge,
    /// The opponent is not a valid target (e.g. a bot)
    InvalidOpponent,
    /// These two players already have a live battle
    DuplicateChallenge(PlayerId, PlayerId),
}

/// Errors rejecting an action against a live session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The actor is not a participant in this battle
    NotAParticipant,
    /// The actor does not hold the turn
    NotYourTurn,
    /// Move slot index is out of bounds
    InvalidMoveSlot(usize),
    /// The battle has already finished
    BattleOver,
}

/// Errors from the external collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or returned a failure
    Unavailable(String),
    /// The provider answered with data the engine cannot use
    MalformedProfile(String),
}

impl fmt::Display for DuelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuelError::Challenge(err) => write!(f, "Challenge error: {}", err),
            DuelError::Session(err) => write!(f, "Session error: {}", err),
            DuelError::Provider(err) => write!(f, "Provider error: {}", err),
            DuelError::SessionGone => write!(f, "This battle is no longer active"),
        }
    }
}

impl fmt::Display for ChallengeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChallengeError::SelfChallenge => write!(f, "You cannot challenge yourself"),
            ChallengeError::InvalidOpponent => write!(f, "Invalid opponent"),
            ChallengeError::DuplicateChallenge(a, b) => {
                write!(f, "Players {} and {} already have a battle running", a, b)
            }
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotAParticipant => write!(f, "You are not part of this battle"),
            SessionError::NotYourTurn => write!(f, "Not your turn!"),
            SessionError::InvalidMoveSlot(slot) => write!(f, "Invalid move slot: {}", slot),
            SessionError::BattleOver => write!(f, "The battle is already over"),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(details) => write!(f, "Data provider unavailable: {}", details),
            ProviderError::MalformedProfile(details) => write!(f, "Malformed combatant profile: {}", details),
        }
    }
}

impl std::error::Error for DuelError {}
impl std::error::Error for ChallengeError {}
impl std::error::Error for SessionError {}
impl std::error::Error for ProviderError {}

impl From<ChallengeError> for DuelError {
    fn from(err: ChallengeError) -> Self {
        DuelError::Challenge(err)
    }
}

impl From<SessionError> for DuelError {
    fn from(err: SessionError) -> Self {
        DuelError::Session(err)
    }
}

impl From<ProviderError> for DuelError {
    fn from(err: ProviderError) -> Self {
        DuelError::Provider(err)
    }
}

/// Type alias for Results using DuelError
pub type DuelResult<T> = Result<T, DuelError>;
