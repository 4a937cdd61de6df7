//! Per-hand scoring.
//!
//! An exact non-zero bid earns `tricks² + 10`; a missed non-zero bid costs
//! `10` per trick of deviation. Zero bids are special-cased: a clean zero
//! pays 50 on an under hand and 25 on an over hand, a single trick costs 50,
//! and every further trick claws 10 back.

use tracing::{info, warn};

use crate::domain::rules::{HAND_SIZE, SEATS};
use crate::domain::state::{GameState, HandType, Phase};

/// Result of applying hand scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringResult {
    /// Per-seat score deltas for the hand ([0; 4] when scoring no-ops).
    pub round_score_deltas: [i16; SEATS],
    /// Phase transitioned to, if any.
    pub phase_transitioned: Option<Phase>,
}

/// Score for one seat's hand, given its takes bid and tricks won.
pub fn hand_score(bid: u8, tricks_won: u8, hand_type: HandType) -> i16 {
    if bid == 0 {
        return zero_bid_score(tricks_won, hand_type);
    }
    let tricks = tricks_won as i16;
    if bid == tricks_won {
        tricks * tricks + 10
    } else {
        let diff = (bid as i16 - tricks).abs();
        -10 * diff
    }
}

/// Zero-bid scoring ladder, gated by the hand's over/under classification.
pub fn zero_bid_score(tricks_won: u8, hand_type: HandType) -> i16 {
    match tricks_won {
        0 => match hand_type {
            HandType::Under => 50,
            HandType::Over => 25,
        },
        1 => -50,
        n => -50 + 10 * (n as i16 - 1),
    }
}

/// Apply hand scoring and transition to HandComplete.
///
/// No-ops (with a warning) outside the Scoring phase or when the per-seat
/// trick counts do not sum to 13, so a violated invariant never corrupts
/// the cumulative totals. Applying twice is therefore harmless.
pub fn apply_hand_scoring(state: &mut GameState) -> ScoringResult {
    let noop = ScoringResult {
        round_score_deltas: [0; SEATS],
        phase_transitioned: None,
    };

    if state.phase != Phase::Scoring {
        return noop;
    }

    let tricks_sum: u8 = state.round.tricks_won.iter().sum();
    if tricks_sum != HAND_SIZE {
        warn!(tricks_sum, "trick counts do not sum to 13, scoring skipped");
        return noop;
    }
    let Some(hand_type) = state.round.hand_type else {
        warn!("hand type missing at scoring, scoring skipped");
        return noop;
    };

    let mut deltas = [0i16; SEATS];
    for seat in 0..SEATS {
        let Some(bid) = state.round.takes[seat] else {
            warn!(seat, "takes bid missing at scoring, scoring skipped");
            return noop;
        };
        deltas[seat] = hand_score(bid, state.round.tricks_won[seat], hand_type);
    }

    for seat in 0..SEATS {
        state.scores_total[seat] += deltas[seat];
    }
    state.phase = Phase::HandComplete;
    info!(?deltas, totals = ?state.scores_total, "hand scored");

    ScoringResult {
        round_score_deltas: deltas,
        phase_transitioned: Some(Phase::HandComplete),
    }
}
