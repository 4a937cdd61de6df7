//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::SeatView;
use crate::domain::{Card, TrumpBid};

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI had no legal move to choose from, or produced an illegal one
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Phase 1 decision: stay out, or commit to a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrumpCall {
    Pass,
    Bid(TrumpBid),
}

/// Trait for AI players.
///
/// Implementations receive the game state visible to their seat and must
/// choose a legal action. Legal moves are precomputed on the view; an AI
/// never needs to re-derive rules.
pub trait AiPlayer: Send + Sync {
    /// Implementation name, for display and registries.
    fn name(&self) -> &'static str;

    /// Phase 1: bid a contract or pass.
    ///
    /// A returned bid must come from `view.legal_trump_bids`.
    fn call_trump(&self, view: &SeatView) -> Result<TrumpCall, AiError>;

    /// Phase 2: commit to a takes count from `view.legal_takes`.
    fn call_takes(&self, view: &SeatView) -> Result<u8, AiError>;

    /// Phase 3: choose a card from `view.legal_plays`.
    fn choose_play(&self, view: &SeatView) -> Result<Card, AiError>;
}
