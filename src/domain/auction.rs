//! Phase 1 auction: trump bidding.
//!
//! Seats bid `(takes, trump)` or pass in clockwise rotation from the
//! session's opening seat. A pass is permanent for the hand. The auction
//! resolves when three seats have passed and the remaining seat holds a
//! bid; four passes with no bid void the hand for a redeal.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::rules::{HAND_SIZE, MIN_TRUMP_TAKES, SEATS};
use crate::domain::state::{next_seat, require_turn, GameState, Phase, Seat};
use crate::domain::Trump;
use crate::errors::{DomainError, ValidationKind};

/// A Phase 1 bid: a commitment to at least `takes` tricks under `trump`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrumpBid {
    pub takes: u8,
    pub trump: Trump,
}

impl TrumpBid {
    pub fn new(takes: u8, trump: Trump) -> Self {
        Self { takes, trump }
    }
}

// Auction total order: higher takes wins; equal takes fall back to the
// trump auction rank (clubs lowest, no-trump highest).
impl Ord for TrumpBid {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.takes.cmp(&other.takes) {
            Ordering::Equal => self.trump.auction_rank().cmp(&other.trump.auction_rank()),
            ord => ord,
        }
    }
}

impl PartialOrd for TrumpBid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-seat auction record.
#[derive(Debug, Clone)]
pub struct AuctionState {
    /// Last standing bid per seat.
    pub bids: [Option<TrumpBid>; SEATS],
    /// Seats that have passed (permanent for the hand).
    pub passed: [bool; SEATS],
    /// Highest standing bid and its owner.
    pub highest: Option<(Seat, TrumpBid)>,
}

impl AuctionState {
    pub fn empty() -> Self {
        Self {
            bids: [None; SEATS],
            passed: [false; SEATS],
            highest: None,
        }
    }

    pub fn pass_count(&self) -> u8 {
        self.passed.iter().filter(|&&p| p).count() as u8
    }

    /// The one seat still in the auction, if exactly three have passed.
    pub fn sole_unpassed(&self) -> Option<Seat> {
        if self.pass_count() != 3 {
            return None;
        }
        self.passed.iter().position(|&p| !p).map(|s| s as Seat)
    }
}

/// Result of an auction action, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionResult {
    /// Declarer and contract, when this action resolved the auction.
    pub resolved: Option<(Seat, TrumpBid)>,
    /// All four seats passed; the hand is void and must be redealt.
    pub redeal: bool,
    /// Phase transitioned to, if any.
    pub phase_transitioned: Option<Phase>,
}

impl AuctionResult {
    fn pending() -> Self {
        Self {
            resolved: None,
            redeal: false,
            phase_transitioned: None,
        }
    }
}

/// Compute the legal bids for a seat, in ascending auction order.
///
/// Empty when the phase or seat cannot bid, or when no legal raise exists
/// (the seat can only pass).
pub fn legal_trump_bids(state: &GameState, who: Seat) -> Vec<TrumpBid> {
    if state.phase != Phase::TrumpBidding {
        return Vec::new();
    }
    let auction = &state.round.auction;
    if auction.passed[who as usize] {
        return Vec::new();
    }

    let floor = auction.highest.map(|(_, b)| b);
    let mut bids = Vec::new();
    for takes in MIN_TRUMP_TAKES..=HAND_SIZE {
        for trump in Trump::ALL {
            let bid = TrumpBid::new(takes, trump);
            if floor.is_none_or(|f| bid > f) {
                bids.push(bid);
            }
        }
    }
    bids
}

/// Place a Phase 1 bid, enforcing phase, turn, and auction ordering.
pub fn place_trump_bid(
    state: &mut GameState,
    who: Seat,
    bid: TrumpBid,
) -> Result<AuctionResult, DomainError> {
    check_auction_action(state, who)?;

    if bid.takes < MIN_TRUMP_TAKES || bid.takes > HAND_SIZE {
        return Err(DomainError::validation(
            ValidationKind::IllegalBid,
            format!("Bid takes must be {MIN_TRUMP_TAKES}..={HAND_SIZE}"),
        ));
    }
    if let Some((_, highest)) = state.round.auction.highest {
        if bid <= highest {
            return Err(DomainError::validation(
                ValidationKind::IllegalBid,
                "Bid must strictly exceed the standing bid",
            ));
        }
    }

    state.round.auction.bids[who as usize] = Some(bid);
    state.round.auction.highest = Some((who, bid));
    debug!(seat = who, takes = bid.takes, trump = ?bid.trump, "trump bid recorded");

    let mut result = AuctionResult::pending();
    if state.round.auction.pass_count() == 3 {
        // Everyone else is out; this bid stands.
        resolve_auction(state, who, bid);
        result.resolved = Some((who, bid));
        result.phase_transitioned = Some(Phase::TakesBidding);
        return Ok(result);
    }

    state.turn = next_unpassed(state, who);
    Ok(result)
}

/// Pass, permanently for this hand.
pub fn pass_auction(state: &mut GameState, who: Seat) -> Result<AuctionResult, DomainError> {
    check_auction_action(state, who)?;

    state.round.auction.passed[who as usize] = true;
    debug!(seat = who, "auction pass recorded");

    let mut result = AuctionResult::pending();
    match state.round.auction.pass_count() {
        4 => {
            // Void hand: nobody bid.
            info!("all four seats passed, hand is void");
            state.phase = Phase::Init;
            state.turn = None;
            result.redeal = true;
            result.phase_transitioned = Some(Phase::Init);
        }
        3 => {
            let sole = state
                .round
                .auction
                .sole_unpassed()
                .ok_or_else(|| DomainError::validation_other("pass count 3 without a sole seat"))?;
            if let Some(bid) = state.round.auction.bids[sole as usize] {
                resolve_auction(state, sole, bid);
                result.resolved = Some((sole, bid));
                result.phase_transitioned = Some(Phase::TakesBidding);
            } else {
                // The last seat has not acted yet; it may still bid or pass.
                state.turn = Some(sole);
            }
        }
        _ => {
            state.turn = next_unpassed(state, who);
        }
    }
    Ok(result)
}

fn check_auction_action(state: &GameState, who: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::TrumpBidding {
        return Err(DomainError::validation(
            ValidationKind::PrematureAction,
            "Not in the trump bidding phase",
        ));
    }
    let turn = require_turn(state, "auction")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::PrematureAction,
            "Out of turn",
        ));
    }
    Ok(())
}

fn resolve_auction(state: &mut GameState, declarer: Seat, contract: TrumpBid) {
    debug_assert_eq!(
        state.round.auction.highest.map(|(_, b)| b),
        Some(contract),
        "resolved contract must be the highest standing bid"
    );
    state.round.contract = Some(contract);
    state.round.declarer = Some(declarer);
    state.round.trump = Some(contract.trump);
    state.phase = Phase::TakesBidding;
    state.turn = Some(declarer);
    info!(
        declarer,
        takes = contract.takes,
        trump = ?contract.trump,
        "auction resolved"
    );
}

/// First un-passed seat strictly after `from`, clockwise.
fn next_unpassed(state: &GameState, from: Seat) -> Option<Seat> {
    let mut seat = next_seat(from);
    for _ in 0..SEATS {
        if !state.round.auction.passed[seat as usize] {
            return Some(seat);
        }
        seat = next_seat(seat);
    }
    None
}
