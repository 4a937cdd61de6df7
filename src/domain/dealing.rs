//! Deterministic card dealing: deck construction, Fisher–Yates shuffle,
//! round-robin deal, and post-deal completeness validation.
//!
//! Deal validation failure is an internal fault (`InvalidDeckState`), not a
//! player error: `deal_checked` heals it by reshuffling with a perturbed
//! seed instead of surfacing the error.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::domain::rules::{HAND_SIZE, SEATS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{nth_from, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::{DomainError, ValidationKind};

const DECK_SIZE: usize = 52;

/// Retry cap for self-healing redeals; unreachable unless the deck builder
/// itself is broken.
const MAX_DEAL_ATTEMPTS: u32 = 8;

/// Generate a full 52-card deck in standard order.
fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher–Yates shuffle driven by a seeded ChaCha generator.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Deal 13 cards to each of 4 seats, one card at a time clockwise from
/// `first_seat`, exhausting the deck exactly. Hands are sorted for stable
/// display.
fn deal_round_robin(mut deck: Vec<Card>, first_seat: Seat) -> Result<[Vec<Card>; SEATS], DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeckState,
            format!("Deck has {} cards before dealing", deck.len()),
        ));
    }

    let mut hands: [Vec<Card>; SEATS] = Default::default();
    for round in 0..HAND_SIZE {
        for step in 0..SEATS as u8 {
            let seat = nth_from(first_seat, step);
            let card = deck.pop().ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidDeckState,
                    format!("Deck exhausted mid-deal at round {round}"),
                )
            })?;
            hands[seat as usize].push(card);
        }
    }

    for hand in &mut hands {
        hand.sort();
    }
    Ok(hands)
}

/// Re-derive per-suit and per-rank counts across all four hands and check
/// them against a complete deck: 13 cards per hand, 13 per suit, 4 per rank,
/// no duplicate (suit, rank) identity.
pub fn validate_deal(hands: &[Vec<Card>; SEATS]) -> Result<(), DomainError> {
    let mut seen = [[false; 13]; 4];
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 13];

    for (seat, hand) in hands.iter().enumerate() {
        if hand.len() != HAND_SIZE as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeckState,
                format!("Seat {seat} holds {} cards after dealing", hand.len()),
            ));
        }
        for card in hand {
            let s = card.suit.index();
            let r = card.rank as usize;
            if seen[s][r] {
                return Err(DomainError::validation(
                    ValidationKind::InvalidDeckState,
                    format!("Duplicate card {card} in deal"),
                ));
            }
            seen[s][r] = true;
            suit_counts[s] += 1;
            rank_counts[r] += 1;
        }
    }

    if suit_counts.iter().any(|&c| c != 13) {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeckState,
            format!("Per-suit counts {suit_counts:?} do not match 13 each"),
        ));
    }
    if rank_counts.iter().any(|&c| c != 4) {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeckState,
            format!("Per-rank counts {rank_counts:?} do not match 4 each"),
        ));
    }
    Ok(())
}

/// Shuffle and deal one attempt. Exposed for tests; callers wanting the
/// self-healing behavior use `deal_checked`.
pub fn deal_hands(seed: u64, first_seat: Seat) -> Result<[Vec<Card>; SEATS], DomainError> {
    let mut deck = full_deck();
    shuffle_with_seed(&mut deck, seed);
    let hands = deal_round_robin(deck, first_seat)?;
    validate_deal(&hands)?;
    Ok(hands)
}

/// Deal with self-healing: on `InvalidDeckState` the deal is retried with a
/// perturbed seed rather than surfacing the fault to the caller.
///
/// `base_attempt` distinguishes intentional redeals (all-pass auctions) so
/// a void hand reshuffles into a genuinely different deal.
pub fn deal_checked(
    game_seed: u64,
    gamlet_no: u8,
    base_attempt: u32,
    first_seat: Seat,
) -> Result<[Vec<Card>; SEATS], DomainError> {
    let mut last_err = None;
    for attempt in base_attempt..base_attempt + MAX_DEAL_ATTEMPTS {
        let seed = derive_dealing_seed(game_seed, gamlet_no, attempt);
        match deal_hands(seed, first_seat) {
            Ok(hands) => return Ok(hands),
            Err(e) => {
                warn!(gamlet_no, attempt, error = %e, "deal failed validation, reshuffling");
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        DomainError::validation(ValidationKind::InvalidDeckState, "Deal retries exhausted")
    }))
}
