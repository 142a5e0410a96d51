// Pokemon Duel Schema - Shared type definitions
// This crate contains the static battle data shared by the duel engine:
// elemental types and their matchup table, the per-type move pools, the
// closed ability set, and provider base stats.

// Re-export the main types
pub use abilities::*;
pub use moves::*;
pub use pokemon_types::*;
pub use stats::*;

pub mod abilities;
pub mod moves;
pub mod pokemon_types;
pub mod stats;
