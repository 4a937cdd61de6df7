//! Property tests for the trump auction.
//!
//! Properties tested:
//! - Any mix of legal bids and passes terminates in a resolution or a redeal
//! - The resolved contract is the highest standing bid
//! - The bid order is total and strict raises always exist below the top

use proptest::prelude::*;

use crate::domain::auction::{legal_trump_bids, pass_auction, place_trump_bid, TrumpBid};
use crate::domain::state::Phase;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::{test_gens, Trump};

fn auction_state() -> crate::domain::GameState {
    let hands = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    make_game_state(hands, MakeGameStateArgs::default())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: random legal actions always terminate the auction, and a
    /// resolution carries the highest standing bid.
    #[test]
    fn prop_auction_terminates_consistently(
        choices in prop::collection::vec((any::<bool>(), 0usize..16usize), 64),
    ) {
        let mut state = auction_state();
        let mut outcome = None;

        for (wants_bid, pick) in choices {
            if state.phase != Phase::TrumpBidding {
                break;
            }
            let seat = state.turn.expect("auction turn");
            let legal = legal_trump_bids(&state, seat);

            let result = if wants_bid && !legal.is_empty() {
                place_trump_bid(&mut state, seat, legal[pick % legal.len()])
                    .expect("legal bid accepted")
            } else {
                pass_auction(&mut state, seat).expect("pass accepted")
            };

            if result.redeal {
                outcome = Some(None);
                break;
            }
            if let Some((winner, contract)) = result.resolved {
                outcome = Some(Some((winner, contract)));
                break;
            }
        }

        match outcome {
            // Redeal: back to Init with no contract.
            Some(None) => {
                prop_assert_eq!(state.phase, Phase::Init);
                prop_assert!(state.round.contract.is_none());
            }
            // Resolved: contract is the highest standing bid, declarer leads Phase 2.
            Some(Some((winner, contract))) => {
                prop_assert_eq!(state.phase, Phase::TakesBidding);
                prop_assert_eq!(state.round.declarer, Some(winner));
                prop_assert_eq!(state.round.auction.highest, Some((winner, contract)));
                for bid in state.round.auction.bids.iter().flatten() {
                    prop_assert!(*bid <= contract);
                }
            }
            // 64 actions were not enough only if raises kept flowing; the
            // auction is still live and legal.
            None => {
                prop_assert_eq!(state.phase, Phase::TrumpBidding);
                prop_assert!(state.turn.is_some());
            }
        }
    }

    /// Property: every listed legal bid is a strict raise and is accepted.
    #[test]
    fn prop_legal_bids_are_strict_raises(
        opener in (5u8..=13u8, test_gens::trump()).prop_map(|(t, tr)| TrumpBid::new(t, tr)),
        pick in 0usize..32usize,
    ) {
        let mut state = auction_state();
        place_trump_bid(&mut state, 0, opener).expect("opening bid");

        let legal = legal_trump_bids(&state, 1);
        for bid in &legal {
            prop_assert!(*bid > opener);
        }
        if !legal.is_empty() {
            let choice = legal[pick % legal.len()];
            prop_assert!(place_trump_bid(&mut state, 1, choice).is_ok());
        }
    }
}
