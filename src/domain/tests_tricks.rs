use crate::domain::auction::TrumpBid;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{
    hand_of, make_game_state, resolve_contract, MakeGameStateArgs,
};
use crate::domain::tricks::{legal_plays, play_card};
use crate::domain::{Card, Rank, Suit, Trump};
use crate::errors::ValidationKind;

fn card(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank }
}

fn trick_state(hands: [Vec<Card>; 4], trump: Trump, leader: u8) -> crate::domain::GameState {
    let mut state = make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Trick { trick_no: 1 },
            turn: Some(leader),
            leader: Some(leader),
            trick_no: Some(1),
            ..Default::default()
        },
    );
    resolve_contract(&mut state, leader, TrumpBid::new(5, trump));
    state
}

#[test]
fn legal_plays_follow_the_lead_suit() {
    let hands = [hand_of(&["2H", "5H", "7C"]), vec![], vec![], vec![]];
    let mut state = trick_state(hands, Trump::NoTrump, 0);
    state.round.trick_lead = Some(Suit::Hearts);

    let legal = legal_plays(&state, 0);
    assert_eq!(legal, hand_of(&["2H", "5H"]));
}

#[test]
fn legal_plays_any_card_when_void() {
    let hands = [hand_of(&["7C", "KD", "AS"]), vec![], vec![], vec![]];
    let mut state = trick_state(hands, Trump::NoTrump, 0);
    state.round.trick_lead = Some(Suit::Hearts);

    let legal = legal_plays(&state, 0);
    assert_eq!(legal.len(), 3);
}

#[test]
fn legal_plays_unrestricted_when_leading() {
    let hands = [hand_of(&["2H", "5H", "7C"]), vec![], vec![], vec![]];
    let state = trick_state(hands, Trump::NoTrump, 0);

    assert_eq!(legal_plays(&state, 0).len(), 3);
}

#[test]
fn off_suit_play_is_illegal_while_holding_lead_suit() {
    let hands = [hand_of(&["2H", "7C"]), vec![], vec![], vec![]];
    let mut state = trick_state(hands, Trump::NoTrump, 0);
    state.round.trick_lead = Some(Suit::Hearts);
    state
        .round
        .trick_plays
        .push((3, card(Suit::Hearts, Rank::Nine)));

    let err = play_card(&mut state, 0, card(Suit::Clubs, Rank::Seven)).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::IllegalPlay);
    // Rejection leaves the hand untouched.
    assert_eq!(state.hands[0].len(), 2);
}

#[test]
fn playing_a_card_not_held_is_illegal() {
    let hands = [hand_of(&["2H"]), vec![], vec![], vec![]];
    let mut state = trick_state(hands, Trump::NoTrump, 0);

    let err = play_card(&mut state, 0, card(Suit::Spades, Rank::Ace)).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::IllegalPlay);
}

#[test]
fn playing_out_of_turn_is_premature() {
    let hands = [vec![], hand_of(&["2H"]), vec![], vec![]];
    let mut state = trick_state(hands, Trump::NoTrump, 0);

    let err = play_card(&mut state, 1, card(Suit::Hearts, Rank::Two)).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::PrematureAction);
}

#[test]
fn playing_in_wrong_phase_is_premature() {
    let hands = [hand_of(&["2H"]), vec![], vec![], vec![]];
    let mut state = make_game_state(hands, MakeGameStateArgs::default());

    let err = play_card(&mut state, 0, card(Suit::Hearts, Rank::Two)).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::PrematureAction);
}

#[test]
fn highest_lead_suit_card_wins_without_trump() {
    let hands = [
        hand_of(&["5H"]),
        hand_of(&["AH"]),
        hand_of(&["3H"]),
        hand_of(&["KC"]),
    ];
    let mut state = trick_state(hands, Trump::NoTrump, 0);

    assert!(play_card(&mut state, 0, card(Suit::Hearts, Rank::Five)).is_ok());
    assert!(play_card(&mut state, 1, card(Suit::Hearts, Rank::Ace)).is_ok());
    assert!(play_card(&mut state, 2, card(Suit::Hearts, Rank::Three)).is_ok());
    let result = play_card(&mut state, 3, card(Suit::Clubs, Rank::King)).expect("fourth play");

    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(1));
    assert_eq!(state.round.tricks_won[1], 1);
    assert_eq!(state.leader, Some(1));
    assert_eq!(state.turn, Some(1));
}

#[test]
fn highest_trump_wins_over_the_lead_suit() {
    let hands = [
        hand_of(&["AH"]),
        hand_of(&["KH"]),
        hand_of(&["2S"]),
        hand_of(&["5S"]),
    ];
    let mut state = trick_state(hands, Trump::Spades, 0);

    assert!(play_card(&mut state, 0, card(Suit::Hearts, Rank::Ace)).is_ok());
    assert!(play_card(&mut state, 1, card(Suit::Hearts, Rank::King)).is_ok());
    assert!(play_card(&mut state, 2, card(Suit::Spades, Rank::Two)).is_ok());
    let result = play_card(&mut state, 3, card(Suit::Spades, Rank::Five)).expect("fourth play");

    assert_eq!(result.trick_winner, Some(3));
    assert_eq!(state.round.tricks_won[3], 1);
}

#[test]
fn completed_trick_is_remembered_and_displayed() {
    let hands = [
        hand_of(&["5H"]),
        hand_of(&["AH"]),
        hand_of(&["3H"]),
        hand_of(&["KC"]),
    ];
    let mut state = trick_state(hands, Trump::NoTrump, 0);

    for (seat, c) in [
        (0, card(Suit::Hearts, Rank::Five)),
        (1, card(Suit::Hearts, Rank::Ace)),
        (2, card(Suit::Hearts, Rank::Three)),
        (3, card(Suit::Clubs, Rank::King)),
    ] {
        assert!(play_card(&mut state, seat, c).is_ok());
    }

    assert_eq!(state.round.completed_tricks.len(), 1);
    let memory = &state.round.completed_tricks[0];
    assert_eq!(memory.trick_no, 1);
    assert_eq!(memory.leader, 0);
    assert_eq!(memory.winner, 1);
    assert_eq!(memory.plays.len(), 4);
    assert_eq!(state.round.last_trick.as_deref(), Some(&memory.plays[..]));
    // Table cleared for the next trick.
    assert!(state.round.trick_plays.is_empty());
    assert!(state.round.trick_lead.is_none());
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
}

#[test]
fn thirteenth_trick_moves_the_hand_to_scoring() {
    let hands = [
        hand_of(&["2H"]),
        hand_of(&["3H"]),
        hand_of(&["4H"]),
        hand_of(&["5H"]),
    ];
    let mut state = trick_state(hands, Trump::NoTrump, 0);
    // Twelve tricks already resolved.
    state.phase = Phase::Trick { trick_no: 13 };
    state.trick_no = Some(13);
    state.round.tricks_won = [3, 3, 3, 3];

    for (seat, c) in [
        (0, card(Suit::Hearts, Rank::Two)),
        (1, card(Suit::Hearts, Rank::Three)),
        (2, card(Suit::Hearts, Rank::Four)),
        (3, card(Suit::Hearts, Rank::Five)),
    ] {
        assert!(play_card(&mut state, seat, c).is_ok());
    }

    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.turn, None);
    assert_eq!(state.leader, None);
    let total: u8 = state.round.tricks_won.iter().sum();
    assert_eq!(total, 13);
}
