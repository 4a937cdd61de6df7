//! Bidding decisions for Phases 1 and 2.
//!
//! Both decisions read a `BidContext` (the seat's view, its hand profile,
//! and its effective risk profile) and a caller-supplied RNG for the
//! probabilistic accept/reject on contested auctions.

use rand::Rng;

use crate::ai::personality::RiskProfile;
use crate::ai::trait_def::TrumpCall;
use crate::domain::hand_eval::HandProfile;
use crate::domain::player_view::SeatView;
use crate::domain::rules::{HAND_SIZE, MIN_TRUMP_TAKES};
use crate::domain::takes::deflect_takes;
use crate::domain::{Trump, TrumpBid};

/// Inputs to a bidding decision.
pub struct BidContext<'a> {
    pub view: &'a SeatView,
    pub profile: HandProfile,
    pub risk: RiskProfile,
}

/// Phase 1: open, compete, or pass.
pub fn choose_trump_call<R: Rng>(cx: &BidContext<'_>, rng: &mut R) -> TrumpCall {
    let legal = &cx.view.legal_trump_bids;
    if legal.is_empty() {
        return TrumpCall::Pass;
    }

    let best_trump = cx.profile.best_trump();
    let estimate = cx.profile.playing_tricks_for(best_trump);

    match cx.view.auction.highest {
        None => choose_opening(cx, best_trump, estimate),
        Some((owner, _)) => choose_raise(cx, best_trump, estimate, owner, rng),
    }
}

/// Opening decision: bid the best-fitting trump at the estimate, or pass.
fn choose_opening(cx: &BidContext<'_>, best_trump: Trump, estimate: f32) -> TrumpCall {
    if estimate < cx.risk.open_threshold {
        return TrumpCall::Pass;
    }
    let takes = (estimate.round() as u8).clamp(MIN_TRUMP_TAKES, HAND_SIZE);
    let bid = TrumpBid::new(takes, best_trump);
    if cx.view.legal_trump_bids.contains(&bid) {
        TrumpCall::Bid(bid)
    } else {
        TrumpCall::Pass
    }
}

/// Competing decision: construct the cheapest strictly-higher bid, prefer
/// our best suit over merely raising the number, then accept it with a
/// personality-weighted probability.
fn choose_raise<R: Rng>(
    cx: &BidContext<'_>,
    best_trump: Trump,
    estimate: f32,
    owner: crate::domain::Seat,
    rng: &mut R,
) -> TrumpCall {
    let legal = &cx.view.legal_trump_bids;

    // A chronic overbidder's contract is worth challenging a bit more freely.
    let owner_stats = cx.view.bid_stats[owner as usize];
    let overbid_discount = if owner_stats.gamlets >= 2 {
        (owner_stats.mean_error * 0.15).clamp(0.0, 0.5)
    } else {
        0.0
    };

    // Cheapest raise in our best suit, else the cheapest raise at all.
    let candidate = legal
        .iter()
        .copied()
        .find(|b| b.trump == best_trump)
        .or_else(|| legal.first().copied());
    let Some(candidate) = candidate else {
        return TrumpCall::Pass;
    };

    let support = estimate + cx.risk.compete_margin + overbid_discount;
    if (candidate.takes as f32) > support {
        return TrumpCall::Pass;
    }

    let slack = (support - candidate.takes as f32).clamp(0.0, 2.0) as f64;
    let accept = (cx.risk.accept_base + slack * 0.2).clamp(0.0, 0.95);
    if rng.random_bool(accept) {
        TrumpCall::Bid(candidate)
    } else {
        TrumpCall::Pass
    }
}

/// Phase 2: commit to a takes count.
pub fn choose_takes<R: Rng>(cx: &BidContext<'_>, rng: &mut R) -> u8 {
    let view = cx.view;
    let trump = view.trump.unwrap_or(Trump::NoTrump);

    // Declarer plays its own trump; defenders temper the playing estimate
    // with the defensive one, since they do not control the hand.
    let mut estimate = if view.is_declarer() {
        cx.profile.playing_tricks_for(trump)
    } else {
        0.5 * cx.profile.playing_tricks_for(trump) + 0.5 * cx.profile.defensive_tricks
    };
    estimate += cx.risk.takes_bias;
    // Small jitter so identical hands do not always bid identically.
    estimate += rng.random_range(-0.25..0.25f32);

    let floor = if view.is_declarer() {
        view.contract.map(|c| c.takes).unwrap_or(0)
    } else {
        0
    };
    let placed = view.takes_placed_sum();
    let rounded = (estimate.round().max(0.0) as u8).clamp(floor, HAND_SIZE);
    let mut target = deflect_takes(rounded, placed, floor);

    // The last bidder sees the whole table: steer the total toward a safe
    // 14 or 12 when that costs at most a trick and a half of accuracy.
    if view.takes.iter().flatten().count() == 3 {
        for safe_total in [14i16, 12] {
            let v = safe_total - placed as i16;
            if (0..=HAND_SIZE as i16).contains(&v)
                && v >= floor as i16
                && (v as f32 - estimate).abs() <= 1.5
            {
                target = v as u8;
                break;
            }
        }
    }

    nearest_legal(&view.legal_takes, target)
}

/// Pick the legal value closest to the target (ties go higher, matching the
/// deflection preference).
fn nearest_legal(legal: &[u8], target: u8) -> u8 {
    let mut best = legal.first().copied().unwrap_or(target);
    let mut best_delta = i16::MAX;
    for &v in legal {
        let d = (v as i16 - target as i16).abs();
        if d < best_delta || (d == best_delta && v > best) {
            best = v;
            best_delta = d;
        }
    }
    best
}
