//! Completed-trick memory for the current hand.
//!
//! The engine records every resolved trick; AI seats consult the record for
//! card counting and void inference. The current trick in progress is not
//! included here (it lives in `HandState::trick_plays`).

use crate::domain::rules::SEATS;
use crate::domain::state::Seat;
use crate::domain::Card;

/// One resolved trick, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTrick {
    /// Trick number (1-based).
    pub trick_no: u8,
    pub leader: Seat,
    pub winner: Seat,
    pub plays: Vec<(Seat, Card)>,
}

/// Suits each seat has shown void in, inferred from discards.
///
/// A seat that did not follow the lead suit of a completed trick holds no
/// card of that suit for the rest of the hand.
pub fn observed_voids(tricks: &[CompletedTrick]) -> [[bool; 4]; SEATS] {
    let mut voids = [[false; 4]; SEATS];
    for trick in tricks {
        let Some(&(_, lead_card)) = trick.plays.first() else {
            continue;
        };
        let lead = lead_card.suit;
        for &(seat, card) in trick.plays.iter().skip(1) {
            if card.suit != lead {
                voids[seat as usize][lead.index()] = true;
            }
        }
    }
    voids
}

/// All cards visible so far: completed tricks plus the current trick.
pub fn seen_cards(tricks: &[CompletedTrick], current: &[(Seat, Card)]) -> Vec<Card> {
    let mut seen: Vec<Card> = tricks
        .iter()
        .flat_map(|t| t.plays.iter().map(|&(_, c)| c))
        .collect();
    seen.extend(current.iter().map(|&(_, c)| c));
    seen
}
