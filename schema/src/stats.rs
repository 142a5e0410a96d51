use serde::{Deserialize, Serialize};

/// Base stats as delivered by the external data provider. Only the three
/// stats the duel formula reads are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}
