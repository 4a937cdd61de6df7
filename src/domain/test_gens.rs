// Proptest generators for domain types.
// These generators ensure unique cards and valid states for property-based testing.

use proptest::prelude::*;

use crate::domain::{Card, Rank, Seat, Suit, Trump};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Trump (including no-trump)
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![
        Just(Trump::Clubs),
        Just(Trump::Diamonds),
        Just(Trump::Hearts),
        Just(Trump::Spades),
        Just(Trump::NoTrump),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a Seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Generate by creating a shuffled subset of all possible cards
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                all_cards.push(Card { suit, rank });
            }
        }
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a hand of 1 to 13 unique cards
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=13usize).prop_flat_map(unique_cards)
}

/// Complete trick: 4 unique cards with seat associations.
/// Returns (leader, plays, trump, lead_suit).
pub fn complete_trick() -> impl Strategy<Value = (Seat, Vec<(Seat, Card)>, Trump, Suit)> {
    (seat(), unique_cards(4), trump()).prop_map(|(leader, cards, trump)| {
        let lead_suit = cards[0].suit;
        let mut plays = Vec::with_capacity(4);
        for (i, &card) in cards.iter().enumerate().take(4) {
            let s = (leader + i as u8) % 4;
            plays.push((s, card));
        }
        (leader, plays, trump, lead_suit)
    })
}
