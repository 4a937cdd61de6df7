//! End-to-end domain scenario with fixed hands: deal substitute, auction,
//! takes, thirteen tricks, scoring, and the gamlet record shape.

use crate::domain::auction::{pass_auction, place_trump_bid, TrumpBid};
use crate::domain::scoring::apply_hand_scoring;
use crate::domain::state::{next_seat, HandType, Phase};
use crate::domain::takes::place_takes;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::tricks::{legal_plays, play_card};
use crate::domain::{Card, Rank, Suit, Trump};

/// One full suit per seat: seat 0 all spades, 1 hearts, 2 diamonds, 3 clubs.
fn one_suit_hands() -> [Vec<Card>; 4] {
    let suit_for = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    suit_for.map(|suit| Rank::ALL.iter().map(|&rank| Card { suit, rank }).collect())
}

#[test]
fn scripted_hand_runs_deal_to_scoring() {
    let mut state = make_game_state(one_suit_hands(), MakeGameStateArgs::default());

    // Phase 1: seat 0 opens in spades, everyone else passes.
    assert!(place_trump_bid(&mut state, 0, TrumpBid::new(5, Trump::Spades)).is_ok());
    assert!(pass_auction(&mut state, 1).is_ok());
    assert!(pass_auction(&mut state, 2).is_ok());
    let auction = pass_auction(&mut state, 3).expect("resolving pass");
    assert_eq!(auction.resolved, Some((0, TrumpBid::new(5, Trump::Spades))));

    // Phase 2: 12 + 0 + 0 + 0 = 12, an under hand.
    assert!(place_takes(&mut state, 0, 12).is_ok());
    assert!(place_takes(&mut state, 1, 0).is_ok());
    assert!(place_takes(&mut state, 2, 0).is_ok());
    let takes = place_takes(&mut state, 3, 0).expect("last takes");
    assert_eq!(takes.hand_type, Some(HandType::Under));
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.turn, Some(0));

    // Phase 3: the declarer holds every trump and wins all thirteen tricks.
    for trick in 1..=13u8 {
        assert_eq!(state.phase, Phase::Trick { trick_no: trick });
        for _ in 0..4 {
            let seat = state.turn.expect("someone to act");
            let legal = legal_plays(&state, seat);
            assert!(!legal.is_empty(), "seat {seat} has a legal play");
            let card = legal[0];
            let result = play_card(&mut state, seat, card).expect("legal play");
            if result.trick_completed {
                assert_eq!(result.trick_winner, Some(0));
                if trick < 13 {
                    assert_eq!(state.turn, Some(0));
                }
            } else {
                assert_eq!(state.turn, Some(next_seat(seat)));
            }
        }
    }

    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.round.tricks_won, [13, 0, 0, 0]);
    assert_eq!(state.round.completed_tricks.len(), 13);

    // Scoring: 12 bid vs 13 won costs 10; clean zeros on an under hand pay 50.
    let scoring = apply_hand_scoring(&mut state);
    assert_eq!(scoring.round_score_deltas, [-10, 50, 50, 50]);
    assert_eq!(state.scores_total, [-10, 50, 50, 50]);
    assert_eq!(state.phase, Phase::HandComplete);
}

#[test]
fn every_trick_winner_satisfies_the_winner_rule() {
    let mut state = make_game_state(one_suit_hands(), MakeGameStateArgs::default());

    assert!(place_trump_bid(&mut state, 0, TrumpBid::new(5, Trump::Diamonds)).is_ok());
    for seat in [1, 2, 3] {
        assert!(pass_auction(&mut state, seat).is_ok());
    }
    assert!(place_takes(&mut state, 0, 5).is_ok());
    assert!(place_takes(&mut state, 1, 0).is_ok());
    assert!(place_takes(&mut state, 2, 7).is_ok());
    assert!(place_takes(&mut state, 3, 0).is_ok());

    while let Phase::Trick { .. } = state.phase {
        let seat = state.turn.expect("someone to act");
        let legal = legal_plays(&state, seat);
        play_card(&mut state, seat, legal[0]).expect("legal play");
    }

    // The winner of each completed trick holds the highest trump played,
    // or the highest lead-suit card when no trump appeared.
    for trick in &state.round.completed_tricks {
        let lead = trick.plays[0].1.suit;
        let trumps: Vec<_> = trick
            .plays
            .iter()
            .filter(|(_, c)| c.suit == Suit::Diamonds)
            .collect();
        let winning_play = trick
            .plays
            .iter()
            .find(|&&(s, _)| s == trick.winner)
            .expect("winner played");
        if let Some(best_trump) = trumps.iter().map(|(_, c)| c.rank).max() {
            assert_eq!(winning_play.1.suit, Suit::Diamonds);
            assert_eq!(winning_play.1.rank, best_trump);
        } else {
            let best_lead = trick
                .plays
                .iter()
                .filter(|(_, c)| c.suit == lead)
                .map(|(_, c)| c.rank)
                .max()
                .expect("lead suit present");
            assert_eq!(winning_play.1.suit, lead);
            assert_eq!(winning_play.1.rank, best_lead);
        }
    }
}
