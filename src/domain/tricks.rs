//! Phase 3: trick play.
//!
//! The declarer leads the first trick; each trick's winner leads the next.
//! Follow-suit legality and trump/no-trump winner resolution live here.

use tracing::debug;

use crate::domain::rules::{HAND_SIZE, SEATS};
use crate::domain::state::{
    next_seat, require_trick_no, require_trump, require_turn, GameState, HandState, Phase, Seat,
};
use crate::domain::trick_memory::CompletedTrick;
use crate::domain::{card_beats, hand_has_suit, Card};
use crate::errors::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Trick number after this play (may have incremented if trick completed).
    pub trick_no_after: u8,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
}

/// Compute legal cards the seat may play, independent of turn enforcement.
pub fn legal_plays(state: &GameState, who: Seat) -> Vec<Card> {
    let Phase::Trick { .. } = state.phase else {
        return Vec::new();
    };

    let hand = &state.hands[who as usize];
    if hand.is_empty() {
        return Vec::new();
    }

    if let Some(lead) = state.round.trick_lead {
        if hand_has_suit(hand, lead) {
            let mut v: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.clone();
    any.sort();
    any
}

/// Play a card into the current trick, enforcing turn, suit-following, and phase.
pub fn play_card(
    state: &mut GameState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let Phase::Trick {
        trick_no: trick_no_phase,
    } = state.phase
    else {
        return Err(DomainError::validation(
            ValidationKind::PrematureAction,
            "Not in the trick phase",
        ));
    };

    // Invariant: in Trick phase, state.trick_no matches the phase payload.
    let trick_no = require_trick_no(state, "play_card")?;
    if trick_no != trick_no_phase {
        return Err(DomainError::validation_other(
            "Invariant violated: state.trick_no must match Phase::Trick.trick_no",
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::PrematureAction,
            "Out of turn",
        ));
    }

    // Card in hand (immutable check first to avoid borrow conflicts)
    let pos_opt = state.hands[who as usize].iter().position(|&c| c == card);
    let Some(pos) = pos_opt else {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            "Card not in hand",
        ));
    };

    let legal = legal_plays(state, who);
    if !legal.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            "Must follow suit",
        ));
    }

    // On first play, set lead + leader
    if state.round.trick_plays.is_empty() {
        state.round.trick_lead = Some(card.suit);
        state.leader = Some(who);
    }

    let removed = state.hands[who as usize].remove(pos);
    state.round.trick_plays.push((who, removed));
    state.turn = Some(next_seat(who));

    let trick_completed = state.round.trick_plays.len() == SEATS;
    let mut result = PlayCardResult {
        trick_completed,
        trick_winner: None,
        trick_no_after: trick_no,
        phase_transitioned: None,
    };

    if !trick_completed {
        return Ok(result);
    }

    // Resolve completed trick
    let trump = require_trump(state, "resolve trick")?;
    let winner = resolve_current_trick(&state.round).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: complete trick must resolve")
    })?;

    state.round.tricks_won[winner as usize] += 1;
    let leader = state.leader.unwrap_or(who);
    state.round.completed_tricks.push(CompletedTrick {
        trick_no,
        leader,
        winner,
        plays: state.round.trick_plays.clone(),
    });
    state.round.last_trick = Some(state.round.trick_plays.clone());
    state.leader = Some(winner);
    state.turn = Some(winner);
    result.trick_winner = Some(winner);
    debug!(trick_no, winner, trump = ?trump, "trick resolved");

    // Prepare next trick
    state.round.trick_plays.clear();
    state.round.trick_lead = None;

    let next_trick_no = trick_no.saturating_add(1);
    if next_trick_no > HAND_SIZE {
        state.phase = Phase::Scoring;
        state.turn = None;
        state.leader = None;
        state.trick_no = None;

        result.trick_no_after = next_trick_no;
        result.phase_transitioned = Some(Phase::Scoring);
        return Ok(result);
    }

    state.trick_no = Some(next_trick_no);
    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };
    result.trick_no_after = next_trick_no;

    Ok(result)
}

/// Resolve the current trick winner if complete.
pub fn resolve_current_trick(round: &HandState) -> Option<Seat> {
    if round.trick_plays.len() < SEATS {
        return None;
    }
    let lead = round.trick_lead?;
    let trump = round.trump?;

    let mut best_idx = 0usize;
    for i in 1..SEATS {
        let (_, card_i) = round.trick_plays[i];
        let (_, card_best) = round.trick_plays[best_idx];
        if card_beats(card_i, card_best, lead, trump) {
            best_idx = i;
        }
    }
    Some(round.trick_plays[best_idx].0)
}
