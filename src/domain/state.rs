use serde::{Deserialize, Serialize};

use crate::domain::auction::AuctionState;
use crate::domain::rules::SEATS;
use crate::domain::trick_memory::CompletedTrick;
use crate::domain::{Card, Suit, Trump, TrumpBid};
use crate::errors::DomainError;

pub type Seat = u8; // 0..=3, fixed clockwise rotation

/// Hand progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Session created but no hand dealt yet.
    Init,
    /// Phase 1: seats bid (takes, trump) or pass in rotation.
    TrumpBidding,
    /// Phase 2: each seat commits to a takes count, declarer first.
    TakesBidding,
    /// Phase 3: trick play; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// Tally hand scores.
    Scoring,
    /// Hand complete; awaiting `start_new_hand`.
    HandComplete,
    /// Full game over.
    GameOver,
}

/// Over/under classification of a hand by its takes total.
///
/// Set once Phase 2 completes; a total of exactly 13 is unreachable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandType {
    /// Takes total above 13.
    Over,
    /// Takes total below 13.
    Under,
}

/// Per-hand state spanning the auction, takes bidding, and trick play.
#[derive(Debug, Clone)]
pub struct HandState {
    /// Phase 1 auction record.
    pub auction: AuctionState,
    /// Winning Phase 1 bid, once the auction resolves.
    pub contract: Option<TrumpBid>,
    /// Seat that won the auction and leads the first trick.
    pub declarer: Option<Seat>,
    /// Trump declaration for the hand (from the contract).
    pub trump: Option<Trump>,
    /// Phase 2 takes bids per seat.
    pub takes: [Option<u8>; SEATS],
    /// Over/under classification, set when Phase 2 completes.
    pub hand_type: Option<HandType>,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Lead suit for the current trick.
    pub trick_lead: Option<Suit>,
    /// Tricks won per seat this hand.
    pub tricks_won: [u8; SEATS],
    /// Last completed trick (4 cards) for display purposes.
    pub last_trick: Option<Vec<(Seat, Card)>>,
    /// Completed tricks of this hand, in play order.
    pub completed_tricks: Vec<CompletedTrick>,
}

impl HandState {
    pub fn empty() -> Self {
        Self {
            auction: AuctionState::empty(),
            contract: None,
            declarer: None,
            trump: None,
            takes: [None; SEATS],
            hand_type: None,
            trick_plays: Vec::with_capacity(SEATS),
            trick_lead: None,
            tricks_won: [0; SEATS],
            last_trick: None,
            completed_tricks: Vec::new(),
        }
    }

    /// Sum of takes recorded so far.
    pub fn takes_placed_sum(&self) -> u8 {
        self.takes.iter().flatten().sum()
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase of the hand.
    pub phase: Phase,
    /// Gamlet number within the full game (1-based).
    pub gamlet_no: u8,
    /// Seats' hands.
    pub hands: [Vec<Card>; SEATS],
    /// Seat whose turn it is to act; None when nobody can act.
    pub turn: Option<Seat>,
    /// Seat that leads the current trick (Trick phase only).
    pub leader: Option<Seat>,
    /// Current trick number (1-based, Trick phase only).
    pub trick_no: Option<u8>,
    /// Seat the auction opens from, fixed for the session.
    pub opening_seat: Seat,
    /// Cumulative scores across gamlets of the full game.
    pub scores_total: [i16; SEATS],
    /// Per-hand container.
    pub round: HandState,
}

impl GameState {
    /// Fresh session state, before any deal.
    pub fn new(opening_seat: Seat) -> Self {
        Self {
            phase: Phase::Init,
            gamlet_no: 0,
            hands: Default::default(),
            turn: None,
            leader: None,
            trick_no: None,
            opening_seat,
            scores_total: [0; SEATS],
            round: HandState::empty(),
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(SEATS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(s: Seat) -> Seat {
    seat_offset(s, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

pub fn require_trick_no(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state.trick_no.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: trick_no must be set ({ctx})"))
    })
}

pub fn require_declarer(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.round.declarer.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: declarer must be set ({ctx})"))
    })
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Trump, DomainError> {
    state.round.trump.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: trump must be set ({ctx})"))
    })
}
