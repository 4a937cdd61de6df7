//! Domain layer: pure game logic types and helpers.

pub mod auction;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand_eval;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod takes;
pub mod trick_memory;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_auction;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use auction::{AuctionResult, AuctionState, TrumpBid};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit, Trump};
pub use dealing::deal_hands;
pub use hand_eval::{evaluate, HandProfile};
pub use player_view::SeatView;
pub use session::{EndReason, GameOutcome, GameSession, GamletRecord, SeatAction};
pub use state::{GameState, HandType, Phase, Seat};
