//! Hand evaluation: converts a hand into a strength profile.
//!
//! The profile is a pure function of the hand contents and is the sole
//! input both AI components read. Honor weights and length bonuses follow
//! the trick-taking estimates the play engine's resolution rules reward:
//! aces are near-certain tricks, kings usually need one round of cover,
//! queens need support, and long suits establish low cards once the
//! opposition runs out.

use crate::domain::cards_types::{Card, Rank, Suit, Trump};

/// Per-suit slice of the profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuitProfile {
    pub length: u8,
    /// High-card points in the suit (A=4, K=3, Q=2, J=1, T=0.5).
    pub hcp: f32,
    /// Length/honor/sequence-adjusted quality score.
    pub quality: f32,
    /// Quick tricks contributed by the suit's top cards.
    pub quick_tricks: f32,
}

/// Multi-dimensional strength profile of one hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandProfile {
    /// Weighted high-card points over the whole hand.
    pub hcp: f32,
    pub suits: [SuitProfile; 4],
    /// Total quick tricks (sure winners in the first rounds of each suit).
    pub quick_tricks: f32,
    /// Control count: 2 per ace, 1 per king.
    pub controls: u8,
    /// Distribution bonus from voids, singletons, and long suits.
    pub shape_bonus: f32,
    /// Estimated playing tricks per candidate declaration, indexed in
    /// `Trump::ALL` order (clubs, diamonds, hearts, spades, no-trump).
    pub playing_tricks: [f32; 5],
    /// Estimated tricks on defense, with no say over trump.
    pub defensive_tricks: f32,
}

impl HandProfile {
    /// Playing-trick estimate for a specific declaration.
    pub fn playing_tricks_for(&self, trump: Trump) -> f32 {
        self.playing_tricks[trump.auction_rank() as usize - 1]
    }

    /// The suit with the best quality score, if the hand holds any card.
    pub fn best_suit(&self) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .filter(|s| self.suits[s.index()].length > 0)
            .max_by(|a, b| {
                let qa = self.suits[a.index()].quality;
                let qb = self.suits[b.index()].quality;
                qa.partial_cmp(&qb).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Best declaration for this hand: no-trump for balanced hands with
    /// enough controls, the best suit otherwise.
    pub fn best_trump(&self) -> Trump {
        if self.is_balanced() && self.controls >= 5 {
            return Trump::NoTrump;
        }
        self.best_suit().map(Trump::from).unwrap_or(Trump::NoTrump)
    }

    /// Balanced: no void or singleton, and no suit longer than five.
    pub fn is_balanced(&self) -> bool {
        self.suits.iter().all(|s| (2..=5).contains(&s.length))
    }
}

/// Honor weight toward playing tricks (how often the card wins a trick).
fn honor_trick_weight(rank: Rank) -> f32 {
    match rank {
        Rank::Ace => 0.95,
        Rank::King => 0.55,
        Rank::Queen => 0.30,
        Rank::Jack => 0.15,
        Rank::Ten => 0.08,
        _ => 0.0,
    }
}

/// High-card points: A=4, K=3, Q=2, J=1, T=0.5.
fn hcp_weight(rank: Rank) -> f32 {
    match rank {
        Rank::Ace => 4.0,
        Rank::King => 3.0,
        Rank::Queen => 2.0,
        Rank::Jack => 1.0,
        Rank::Ten => 0.5,
        _ => 0.0,
    }
}

/// Quick tricks from a suit's top holdings (AK=2, AQ=1.5, A=1, KQ=1, Kx=0.5).
fn suit_quick_tricks(ranks: &[Rank]) -> f32 {
    let has = |r: Rank| ranks.contains(&r);
    if has(Rank::Ace) && has(Rank::King) {
        2.0
    } else if has(Rank::Ace) && has(Rank::Queen) {
        1.5
    } else if has(Rank::Ace) {
        1.0
    } else if has(Rank::King) && has(Rank::Queen) {
        1.0
    } else if has(Rank::King) && ranks.len() >= 2 {
        0.5
    } else {
        0.0
    }
}

/// Bonus for touching honors (sequences win against splits more reliably).
fn sequence_bonus(ranks: &[Rank]) -> f32 {
    let mut sorted: Vec<u8> = ranks.iter().map(|&r| r as u8).collect();
    sorted.sort_unstable();
    let mut bonus = 0.0;
    for w in sorted.windows(2) {
        // Only sequences in honor territory (ten and up) matter.
        if w[1] == w[0] + 1 && w[0] >= Rank::Ten as u8 {
            bonus += 0.25;
        }
    }
    bonus
}

/// Evaluate a hand into its strength profile.
pub fn evaluate(hand: &[Card]) -> HandProfile {
    let mut suit_ranks: [Vec<Rank>; 4] = Default::default();
    for card in hand {
        suit_ranks[card.suit.index()].push(card.rank);
    }

    let mut suits = [SuitProfile {
        length: 0,
        hcp: 0.0,
        quality: 0.0,
        quick_tricks: 0.0,
    }; 4];
    let mut hcp = 0.0;
    let mut quick_tricks = 0.0;
    let mut controls = 0u8;
    let mut honors_total = 0.0;

    for suit in Suit::ALL {
        let ranks = &suit_ranks[suit.index()];
        let length = ranks.len() as u8;
        let suit_hcp: f32 = ranks.iter().map(|&r| hcp_weight(r)).sum();
        let honors: f32 = ranks.iter().map(|&r| honor_trick_weight(r)).sum();
        let qt = suit_quick_tricks(ranks);
        honors_total += honors;

        let length_quality = if length >= 4 {
            (length as f32 - 3.0) * 0.5
        } else {
            0.0
        };
        let quality = honors + length_quality + sequence_bonus(ranks);

        suits[suit.index()] = SuitProfile {
            length,
            hcp: suit_hcp,
            quality,
            quick_tricks: qt,
        };
        hcp += suit_hcp;
        quick_tricks += qt;
        controls += ranks
            .iter()
            .map(|&r| match r {
                Rank::Ace => 2,
                Rank::King => 1,
                _ => 0,
            })
            .sum::<u8>();
    }

    let voids = suits.iter().filter(|s| s.length == 0).count() as f32;
    let singletons = suits.iter().filter(|s| s.length == 1).count() as f32;
    let long_cards: f32 = suits
        .iter()
        .map(|s| (s.length.saturating_sub(5)) as f32)
        .sum();
    let shape_bonus = voids * 0.75 + singletons * 0.4 + long_cards * 0.3;

    let mut playing_tricks = [0.0f32; 5];
    for trump in Trump::ALL {
        playing_tricks[trump.auction_rank() as usize - 1] =
            playing_tricks_estimate(&suits, trump);
    }

    // On defense the hand cashes its quick tricks plus a sliver of its
    // remaining honor strength.
    let defensive_tricks = quick_tricks + (honors_total - quick_tricks).max(0.0) * 0.2;

    HandProfile {
        hcp,
        suits,
        quick_tricks,
        controls,
        shape_bonus,
        playing_tricks,
        defensive_tricks,
    }
}

/// Playing-trick estimate for one candidate declaration.
fn playing_tricks_estimate(suits: &[SuitProfile; 4], trump: Trump) -> f32 {
    let trump_idx = trump.suit().map(|s| s.index());
    let mut estimate = 0.0;

    for (idx, suit) in suits.iter().enumerate() {
        if suit.length == 0 {
            continue;
        }
        let count = suit.length as f32;
        let is_trump = trump_idx == Some(idx);

        // Honor tricks approximated from quality minus its length component.
        let length_quality = if suit.length >= 4 { (count - 3.0) * 0.5 } else { 0.0 };
        let honors = (suit.quality - length_quality).max(0.0);
        let mut suit_tricks = honors;

        if suit.length >= 4 {
            suit_tricks += if is_trump {
                (count - 3.0) * 0.5
            } else {
                (count - 3.0) * 0.25
            };
        }
        if is_trump {
            // Each trump has extra value for the declaring side.
            suit_tricks += count * 0.15;
        }
        estimate += suit_tricks;
    }

    // Ruffing potential only exists with real trumps to spare.
    if let Some(idx) = trump_idx {
        let trump_count = suits[idx].length;
        if trump_count >= 2 {
            let voids = suits.iter().filter(|s| s.length == 0).count() as f32;
            let singletons = suits.iter().filter(|s| s.length == 1).count() as f32;
            estimate += voids * 0.5 + singletons * 0.25;
        }
    }

    estimate
}
