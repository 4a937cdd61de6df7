//! Phase 2: takes bidding.
//!
//! One clockwise round starting at the declarer; no passing. The declarer
//! may not bid below its contract. No bid may bring the running total of
//! recorded takes to exactly 13: `place_takes` rejects such a value, and
//! `deflect_takes` computes the nearest permissible replacement for callers
//! that want the engine's deflection instead of a rejection.

use tracing::{debug, info};

use crate::domain::rules::{valid_takes_range, FORBIDDEN_TAKES_TOTAL, HAND_SIZE};
use crate::domain::state::{
    next_seat, require_declarer, require_turn, GameState, HandType, Phase, Seat,
};
use crate::errors::{DomainError, ValidationKind};

/// Result of recording a takes bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakesResult {
    /// All four seats have bid.
    pub completed: bool,
    /// Over/under classification, set when the phase completed.
    pub hand_type: Option<HandType>,
    /// Phase transitioned to, if any.
    pub phase_transitioned: Option<Phase>,
}

/// Compute the legal takes values for a seat, ascending.
///
/// Empty when the phase or seat cannot act. A declarer holding a 13
/// contract has no alternative to 13: that single value stays legal even
/// though it lands the running total on 13 (later seats cannot finish the
/// sum there, so the final-total invariant still holds).
pub fn legal_takes(state: &GameState, who: Seat) -> Vec<u8> {
    if state.phase != Phase::TakesBidding || state.turn != Some(who) {
        return Vec::new();
    }
    let floor = takes_floor(state, who);
    let placed = state.round.takes_placed_sum();
    let mut legal: Vec<u8> = valid_takes_range()
        .filter(|&v| v >= floor && placed + v != FORBIDDEN_TAKES_TOTAL)
        .collect();
    if legal.is_empty() {
        legal.push(floor);
    }
    legal
}

/// Minimum takes the seat may commit to: the contract for the declarer,
/// zero for everyone else.
pub fn takes_floor(state: &GameState, who: Seat) -> u8 {
    match (state.round.declarer, state.round.contract) {
        (Some(declarer), Some(contract)) if declarer == who => contract.takes,
        _ => 0,
    }
}

/// Nearest permissible takes value to `candidate`, preferring one higher.
///
/// `placed_sum` is the running total of already-recorded bids and `floor`
/// the seat's minimum. The result never brings the total to 13.
pub fn deflect_takes(candidate: u8, placed_sum: u8, floor: u8) -> u8 {
    let legal = |v: u8| v >= floor && v <= HAND_SIZE && placed_sum + v != FORBIDDEN_TAKES_TOTAL;
    let candidate = candidate.clamp(floor, HAND_SIZE);
    if legal(candidate) {
        return candidate;
    }
    for delta in 1..=HAND_SIZE {
        if let Some(up) = candidate.checked_add(delta) {
            if legal(up) {
                return up;
            }
        }
        if let Some(down) = candidate.checked_sub(delta) {
            if legal(down) {
                return down;
            }
        }
    }
    // Only reachable for a 13 contract with nothing placed, where the
    // declarer is forced onto the forbidden prefix.
    candidate
}

/// Record a takes bid, enforcing phase, turn, floor, and the forbidden total.
pub fn place_takes(state: &mut GameState, who: Seat, takes: u8) -> Result<TakesResult, DomainError> {
    if state.phase != Phase::TakesBidding {
        return Err(DomainError::validation(
            ValidationKind::PrematureAction,
            "Not in the takes bidding phase",
        ));
    }
    let turn = require_turn(state, "place_takes")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::PrematureAction,
            "Out of turn",
        ));
    }

    if takes > HAND_SIZE {
        return Err(DomainError::validation(
            ValidationKind::IllegalTakes,
            format!("Takes must be 0..={HAND_SIZE}"),
        ));
    }
    let floor = takes_floor(state, who);
    if takes < floor {
        return Err(DomainError::validation(
            ValidationKind::IllegalTakes,
            format!("Declarer must bid at least the contract ({floor})"),
        ));
    }
    let placed = state.round.takes_placed_sum();
    // A 13 contract leaves the declarer no alternative; everyone else
    // deflects around the forbidden total.
    let forced = floor == HAND_SIZE && takes == HAND_SIZE;
    if placed + takes == FORBIDDEN_TAKES_TOTAL && !forced {
        return Err(DomainError::validation(
            ValidationKind::IllegalTakes,
            "Takes total may not reach exactly 13",
        ));
    }

    state.round.takes[who as usize] = Some(takes);
    debug!(seat = who, takes, "takes bid recorded");

    let mut result = TakesResult {
        completed: false,
        hand_type: None,
        phase_transitioned: None,
    };

    if state.round.takes.iter().all(|t| t.is_some()) {
        let total = state.round.takes_placed_sum();
        // Exactly 13 is unreachable by the rule above.
        let hand_type = if total > FORBIDDEN_TAKES_TOTAL {
            HandType::Over
        } else {
            HandType::Under
        };
        state.round.hand_type = Some(hand_type);

        let declarer = require_declarer(state, "takes complete")?;
        state.phase = Phase::Trick { trick_no: 1 };
        state.trick_no = Some(1);
        state.leader = Some(declarer);
        state.turn = Some(declarer);

        info!(total, hand_type = ?hand_type, "takes bidding complete");
        result.completed = true;
        result.hand_type = Some(hand_type);
        result.phase_transitioned = Some(Phase::Trick { trick_no: 1 });
    } else {
        state.turn = Some(next_seat(who));
    }

    Ok(result)
}
