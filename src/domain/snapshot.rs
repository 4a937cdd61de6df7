//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots carry only public information (no hands); a presentation layer
//! renders from them and queries per-seat hands separately.

use serde::{Deserialize, Serialize};

use crate::domain::rules::SEATS;
use crate::domain::state::{GameState, HandType, Phase, Seat};
use crate::domain::{Card, Trump, TrumpBid};

/// Public info about a single seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub is_ai: bool,
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    /// Gamlet number within the full game (1-based; 0 before the first deal).
    pub gamlet_no: u8,
    pub gamlets_played: u8,
    pub seating: [SeatPublic; SEATS],
    pub scores_total: [i16; SEATS],
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Init,
    TrumpBidding(AuctionSnapshot),
    TakesBidding(TakesSnapshot),
    Trick(TrickSnapshot),
    Scoring(HandSummary),
    HandComplete(HandSummary),
    GameOver,
}

/// Phase 1 snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuctionSnapshot {
    pub to_act: Option<Seat>,
    pub bids: [Option<TrumpBid>; SEATS],
    pub passed: [bool; SEATS],
    pub highest: Option<(Seat, TrumpBid)>,
}

/// Phase 2 snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TakesSnapshot {
    pub to_act: Option<Seat>,
    pub contract: TrumpBid,
    pub declarer: Seat,
    pub takes: [Option<u8>; SEATS],
}

/// Phase 3 snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub trick_no: u8,
    pub to_act: Option<Seat>,
    pub leader: Option<Seat>,
    pub trump: Trump,
    pub takes: [Option<u8>; SEATS],
    pub tricks_won: [u8; SEATS],
    /// Ordered plays of the trick in progress.
    pub plays: Vec<(Seat, Card)>,
    /// Last completed trick (4 cards) for display purposes.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

/// End-of-hand facts shared by the Scoring and HandComplete snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandSummary {
    pub takes: [Option<u8>; SEATS],
    pub tricks_won: [u8; SEATS],
    pub hand_type: Option<HandType>,
}

/// Capture a public snapshot of the given state.
pub fn capture(state: &GameState, is_ai: [bool; SEATS], gamlets_played: u8) -> GameSnapshot {
    let seating = [0, 1, 2, 3].map(|s| SeatPublic {
        seat: s,
        is_ai: is_ai[s as usize],
    });
    let game = GameHeader {
        gamlet_no: state.gamlet_no,
        gamlets_played,
        seating,
        scores_total: state.scores_total,
    };

    let phase = match state.phase {
        Phase::Init => PhaseSnapshot::Init,
        Phase::TrumpBidding => PhaseSnapshot::TrumpBidding(AuctionSnapshot {
            to_act: state.turn,
            bids: state.round.auction.bids,
            passed: state.round.auction.passed,
            highest: state.round.auction.highest,
        }),
        Phase::TakesBidding => {
            // Both are set at auction resolution; fall back to Init if not.
            match (state.round.contract, state.round.declarer) {
                (Some(contract), Some(declarer)) => PhaseSnapshot::TakesBidding(TakesSnapshot {
                    to_act: state.turn,
                    contract,
                    declarer,
                    takes: state.round.takes,
                }),
                _ => PhaseSnapshot::Init,
            }
        }
        Phase::Trick { trick_no } => PhaseSnapshot::Trick(TrickSnapshot {
            trick_no,
            to_act: state.turn,
            leader: state.leader,
            trump: state.round.trump.unwrap_or(Trump::NoTrump),
            takes: state.round.takes,
            tricks_won: state.round.tricks_won,
            plays: state.round.trick_plays.clone(),
            last_trick: state.round.last_trick.clone(),
        }),
        Phase::Scoring => PhaseSnapshot::Scoring(hand_summary(state)),
        Phase::HandComplete => PhaseSnapshot::HandComplete(hand_summary(state)),
        Phase::GameOver => PhaseSnapshot::GameOver,
    };

    GameSnapshot { game, phase }
}

fn hand_summary(state: &GameState) -> HandSummary {
    HandSummary {
        takes: state.round.takes,
        tricks_won: state.round.tricks_won,
        hand_type: state.round.hand_type,
    }
}
