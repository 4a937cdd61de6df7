//! Seat view of game state: what one seat can see at a decision point.
//!
//! This is the primary interface between the engine and AI players, and the
//! query surface a presentation layer renders from. It contains only
//! information visible to the seat (its own hand, public bids, the table)
//! plus precomputed legal moves, so consumers never re-implement rules.

use crate::ai::bid_memory::BidStats;
use crate::domain::auction::AuctionState;
use crate::domain::rules::SEATS;
use crate::domain::state::{HandType, Phase, Seat};
use crate::domain::trick_memory::CompletedTrick;
use crate::domain::{Card, Suit, Trump, TrumpBid};

/// Everything one seat can see at its decision point, with legal moves
/// precomputed by the engine.
#[derive(Debug, Clone)]
pub struct SeatView {
    /// The seat this view belongs to.
    pub seat: Seat,
    pub phase: Phase,
    /// Gamlet number within the full game (1-based).
    pub gamlet_no: u8,
    /// The seat's own hand, sorted.
    pub hand: Vec<Card>,
    /// Public Phase 1 auction record.
    pub auction: AuctionState,
    /// Winning contract, once the auction resolved.
    pub contract: Option<TrumpBid>,
    pub declarer: Option<Seat>,
    pub trump: Option<Trump>,
    /// Phase 2 takes bids placed so far, by seat.
    pub takes: [Option<u8>; SEATS],
    pub hand_type: Option<HandType>,
    /// Current trick number (1-based, Trick phase only).
    pub trick_no: Option<u8>,
    /// Ordered plays of the trick in progress.
    pub current_trick_plays: Vec<(Seat, Card)>,
    pub trick_lead: Option<Suit>,
    pub tricks_won: [u8; SEATS],
    pub scores_total: [i16; SEATS],
    /// Completed tricks of this hand, in play order.
    pub completed_tricks: Vec<CompletedTrick>,
    /// Bid-accuracy stats per seat, accumulated across the full game.
    pub bid_stats: [BidStats; SEATS],
    /// Legal Phase 1 bids for this seat (empty outside its auction turn).
    pub legal_trump_bids: Vec<TrumpBid>,
    /// Legal Phase 2 takes for this seat (empty outside its takes turn).
    pub legal_takes: Vec<u8>,
    /// Legal cards for this seat (empty outside the trick phase).
    pub legal_plays: Vec<Card>,
}

impl SeatView {
    /// This seat's takes bid, if placed.
    pub fn my_takes(&self) -> Option<u8> {
        self.takes[self.seat as usize]
    }

    /// Tricks this seat has won so far this hand.
    pub fn my_tricks_won(&self) -> u8 {
        self.tricks_won[self.seat as usize]
    }

    /// Whether this seat won the auction.
    pub fn is_declarer(&self) -> bool {
        self.declarer == Some(self.seat)
    }

    /// Tricks still to be played, including the one in progress.
    pub fn tricks_remaining(&self) -> u8 {
        let done: u8 = self.tricks_won.iter().sum();
        crate::domain::rules::HAND_SIZE - done
    }

    /// Position of this seat within the current trick (0 = leading).
    pub fn trick_position(&self) -> usize {
        self.current_trick_plays.len()
    }

    /// Sum of takes recorded so far in Phase 2.
    pub fn takes_placed_sum(&self) -> u8 {
        self.takes.iter().flatten().sum()
    }
}
