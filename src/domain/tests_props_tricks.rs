//! Property tests for trick-taking logic.
//!
//! Properties tested:
//! - First card of a trick establishes the lead suit
//! - Players must follow suit if they can
//! - If void in the lead suit, any card is legal
//! - Trick winner is highest lead-suit card, or highest trump if any played

use proptest::prelude::*;

use crate::domain::auction::TrumpBid;
use crate::domain::state::{HandState, Phase};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{make_game_state, resolve_contract, MakeGameStateArgs};
use crate::domain::tricks::{legal_plays, play_card, resolve_current_trick};
use crate::domain::{card_beats, test_gens, Card, Rank, Suit, Trump};
use crate::errors::{DomainError, ValidationKind};

fn trick_state_for(hands: [Vec<Card>; 4], trump: Trump) -> crate::domain::GameState {
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Trick { trick_no: 1 },
            turn: Some(0),
            leader: Some(0),
            trick_no: Some(1),
            ..Default::default()
        },
    );
    resolve_contract(&mut state, 0, TrumpBid::new(5, trump));
    state
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: first card establishes the lead suit
    #[test]
    fn prop_first_card_establishes_lead(card in test_gens::card(), trump in test_gens::trump()) {
        let hands = [vec![card], vec![], vec![], vec![]];
        let mut state = trick_state_for(hands, trump);

        let result = play_card(&mut state, 0, card);
        prop_assert!(result.is_ok(), "first card play should succeed");
        prop_assert_eq!(state.round.trick_lead, Some(card.suit));
    }

    /// Property: must follow suit when able
    #[test]
    fn prop_must_follow_suit_when_able(
        (lead_suit, lead_rank, off_suit_card) in test_gens::suit().prop_flat_map(|lead| {
            let other_suits: Vec<Suit> = Suit::ALL.into_iter().filter(|s| *s != lead).collect();
            (
                Just(lead),
                test_gens::rank(),
                (prop::sample::select(other_suits), test_gens::rank())
                    .prop_map(|(s, r)| Card { suit: s, rank: r }),
            )
        }),
    ) {
        let held = Card { suit: lead_suit, rank: lead_rank };
        let hands = [vec![held, off_suit_card], vec![], vec![], vec![]];
        let mut state = trick_state_for(hands, Trump::NoTrump);

        // As if seat 3 already led the suit.
        state.round.trick_lead = Some(lead_suit);
        state.round.trick_plays.push((3, Card { suit: lead_suit, rank: Rank::Two }));

        // Skip the degenerate case where the held card IS the led two.
        prop_assume!(held != Card { suit: lead_suit, rank: Rank::Two });

        let result = play_card(&mut state, 0, off_suit_card);
        prop_assert!(result.is_err(), "off-suit play while holding lead suit must fail");
        if let Err(DomainError::Validation(kind, _)) = result {
            prop_assert_eq!(kind, ValidationKind::IllegalPlay);
        }
    }

    /// Property: any card is legal when void in the lead suit
    #[test]
    fn prop_any_card_legal_when_void(
        (lead_suit, held) in test_gens::suit().prop_flat_map(|lead| {
            let other_suits: Vec<Suit> = Suit::ALL.into_iter().filter(|s| *s != lead).collect();
            (
                Just(lead),
                (prop::sample::select(other_suits), test_gens::rank())
                    .prop_map(|(s, r)| Card { suit: s, rank: r }),
            )
        }),
    ) {
        let hands = [vec![held], vec![], vec![], vec![]];
        let mut state = trick_state_for(hands, Trump::NoTrump);
        state.round.trick_lead = Some(lead_suit);
        state.round.trick_plays.push((3, Card { suit: lead_suit, rank: Rank::Ace }));

        let legal = legal_plays(&state, 0);
        prop_assert!(legal.contains(&held));
    }

    /// Property: the resolved winner's card beats every other card played
    #[test]
    fn prop_winner_beats_all_other_plays(
        (_, plays, trump, lead) in test_gens::complete_trick(),
    ) {
        let mut round = HandState::empty();
        round.trump = Some(trump);
        round.trick_lead = Some(lead);
        round.trick_plays = plays.clone();

        let winner = resolve_current_trick(&round).expect("complete trick resolves");
        let winning_card = plays
            .iter()
            .find(|&&(s, _)| s == winner)
            .map(|&(_, c)| c)
            .expect("winner played a card");

        for &(seat, card) in &plays {
            if seat != winner {
                prop_assert!(
                    !card_beats(card, winning_card, lead, trump),
                    "{card:?} should not beat the winning {winning_card:?}"
                );
            }
        }
    }

    /// Property: with trump declared, any trump in the trick wins it
    #[test]
    fn prop_trump_in_trick_takes_it(
        (_, plays, _, lead) in test_gens::complete_trick(),
        trump_suit in test_gens::suit(),
    ) {
        let trump = Trump::from(trump_suit);
        let mut round = HandState::empty();
        round.trump = Some(trump);
        round.trick_lead = Some(lead);
        round.trick_plays = plays.clone();

        let winner = resolve_current_trick(&round).expect("complete trick resolves");
        let winning_card = plays
            .iter()
            .find(|&&(s, _)| s == winner)
            .map(|&(_, c)| c)
            .expect("winner played a card");

        if plays.iter().any(|&(_, c)| c.suit == trump_suit) {
            prop_assert_eq!(winning_card.suit, trump_suit);
        } else {
            prop_assert_eq!(winning_card.suit, lead);
        }
    }
}
