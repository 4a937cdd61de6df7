//! Play decisions for Phase 3.
//!
//! The seat's pace relative to its takes bid picks the strategy: trick
//! seeking when under, trick avoidance when over, and a risk-averse middle
//! path when exactly on target. Each legal candidate is scored by the
//! active strategy and the highest-scoring card is played.

use crate::domain::player_view::SeatView;
use crate::domain::trick_memory::{observed_voids, seen_cards};
use crate::domain::{card_beats, Card, Rank, Suit, Trump};

/// Pace of a seat relative to its takes bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Still needs tricks.
    Under { needed: u8 },
    /// Already past its bid.
    Over { excess: u8 },
    /// Exactly on its bid.
    Exact,
}

/// Inputs to a play decision.
#[derive(Debug)]
pub struct PlayContext<'a> {
    pub view: &'a SeatView,
    pub pace: Pace,
    /// 0.0..=1.0: how urgently the pace must be corrected or protected.
    pub urgency: f64,
}

impl<'a> PlayContext<'a> {
    /// Derive pace and urgency from the seat's bid progress.
    pub fn derive(view: &'a SeatView) -> Self {
        let bid = view.my_takes().unwrap_or(0);
        let won = view.my_tricks_won();
        let remaining = view.tricks_remaining().max(1);

        let (pace, urgency) = if won > bid {
            (Pace::Over { excess: won - bid }, 0.9)
        } else if won == bid {
            (Pace::Exact, 1.0)
        } else {
            let needed = bid - won;
            let urgency = if needed >= remaining {
                1.0
            } else {
                (needed as f64 / remaining as f64).max(0.1)
            };
            (Pace::Under { needed }, urgency)
        };

        Self {
            view,
            pace,
            urgency,
        }
    }
}

/// Choose the highest-scoring legal card for the context.
///
/// Only ever returns a card from `view.legal_plays`.
pub fn choose_card(cx: &PlayContext<'_>) -> Option<Card> {
    let legal = &cx.view.legal_plays;
    let mut best: Option<(f64, Card)> = None;
    for &card in legal {
        let score = score_candidate(card, cx);
        let better = match best {
            None => true,
            // Ties break to the lower card: spend the cheaper of equals.
            Some((bs, bc)) => score > bs + 1e-9 || ((score - bs).abs() <= 1e-9 && card < bc),
        };
        if better {
            best = Some((score, card));
        }
    }
    best.map(|(_, c)| c)
}

fn score_candidate(card: Card, cx: &PlayContext<'_>) -> f64 {
    match cx.pace {
        Pace::Under { .. } => score_win_seeking(card, cx),
        Pace::Over { .. } => score_avoiding(card, cx),
        Pace::Exact => score_exact(card, cx),
    }
}

/// Card currently winning the trick, if any plays have been made.
fn current_winner(view: &SeatView, trump: Trump) -> Option<Card> {
    let lead = view.trick_lead?;
    let mut winner = view.current_trick_plays.first()?.1;
    for &(_, c) in view.current_trick_plays.iter().skip(1) {
        if card_beats(c, winner, lead, trump) {
            winner = c;
        }
    }
    Some(winner)
}

fn rank_value(card: Card) -> f64 {
    card.rank as u8 as f64
}

/// Would this card take the trick over the cards on the table so far?
/// Later positions make the answer more reliable; the leader knows least.
fn beats_table(card: Card, view: &SeatView, trump: Trump) -> bool {
    match (view.trick_lead, current_winner(view, trump)) {
        (Some(lead), Some(winner)) => card_beats(card, winner, lead, trump),
        _ => true,
    }
}

/// How many seats still play after us this trick (0 when last to play).
fn seats_after(view: &SeatView) -> usize {
    3usize.saturating_sub(view.trick_position())
}

/// Is this card the highest of its suit still out, as far as we can see?
///
/// Every higher card of the suit is either in our hand or already played.
fn is_boss(card: Card, view: &SeatView) -> bool {
    let seen = seen_cards(&view.completed_tricks, &view.current_trick_plays);
    Rank::ALL.iter().filter(|&&r| r > card.rank).all(|&r| {
        let higher = Card {
            suit: card.suit,
            rank: r,
        };
        view.hand.contains(&higher) || seen.contains(&higher)
    })
}

/// Does any seat still to play sit void in this suit (a ruff threat)?
fn ruff_threat(view: &SeatView, suit: Suit, trump: Trump) -> bool {
    if trump.suit().is_none() {
        return false;
    }
    let voids = observed_voids(&view.completed_tricks);
    let played: Vec<_> = view.current_trick_plays.iter().map(|&(s, _)| s).collect();
    (0..4u8).any(|seat| {
        seat != view.seat && !played.contains(&seat) && voids[seat as usize][suit.index()]
    })
}

/// Under bid: chase tricks, cheaply.
fn score_win_seeking(card: Card, cx: &PlayContext<'_>) -> f64 {
    let view = cx.view;
    let trump = view.trump.unwrap_or(Trump::NoTrump);

    if view.trick_position() == 0 {
        // Leading. High cards press for the trick; urgency decides whether
        // to cash now or build the long suit from below.
        let mut score = rank_value(card) * (1.0 + 2.0 * cx.urgency);
        // A known boss card is a near-certain trick when cashed.
        if is_boss(card, view) {
            score += 10.0 * cx.urgency;
        }
        if ruff_threat(view, card.suit, trump) {
            score -= 15.0;
        }
        // Leading trump drains ruffers but spends our own control.
        if trump.suit() == Some(card.suit) {
            score -= 3.0 * (1.0 - cx.urgency);
        }
        return score;
    }

    if beats_table(card, view, trump) {
        // Winning candidate: prefer the cheapest winner, trust it more when
        // few seats remain behind us.
        let certainty = 1.0 - seats_after(view) as f64 * 0.25;
        50.0 + (12.0 - rank_value(card)) + 20.0 * certainty * cx.urgency
    } else {
        // Cannot win: shed the lowest card.
        12.0 - rank_value(card)
    }
}

/// Over bid: every further trick costs 10 points, so duck and discard.
fn score_avoiding(card: Card, cx: &PlayContext<'_>) -> f64 {
    let view = cx.view;
    let trump = view.trump.unwrap_or(Trump::NoTrump);

    if view.trick_position() == 0 {
        // Lead low, and not trump: someone else should take this.
        let mut score = 2.0 * (12.0 - rank_value(card));
        if trump.suit() == Some(card.suit) {
            score -= 10.0;
        }
        return score;
    }

    if beats_table(card, view, trump) {
        // Forced winners: the cheapest one wastes least.
        -rank_value(card)
    } else {
        // Safe plays: unload the most dangerous card that still loses.
        30.0 + rank_value(card)
    }
}

/// Exactly on bid: protect the score with low-risk middle play.
fn score_exact(card: Card, cx: &PlayContext<'_>) -> f64 {
    let view = cx.view;
    let trump = view.trump.unwrap_or(Trump::NoTrump);

    if view.trick_position() == 0 {
        // Lead the lowest card; avoid suits an opponent can ruff over us.
        let mut score = 2.0 * (12.0 - rank_value(card));
        if ruff_threat(view, card.suit, trump) {
            score += 2.0; // a ruffed trick is somebody else's problem now
        }
        if trump.suit() == Some(card.suit) {
            score -= 10.0;
        }
        return score;
    }

    if beats_table(card, view, trump) {
        -5.0 - rank_value(card)
    } else {
        20.0 + (12.0 - rank_value(card))
    }
}
