//! Test-only game state helpers for domain unit tests.

use crate::domain::rules::SEATS;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::{Card, TrumpBid};

pub struct MakeGameStateArgs {
    pub phase: Phase,
    pub gamlet_no: u8,
    pub opening_seat: Seat,
    pub turn: Option<Seat>,
    pub leader: Option<Seat>,
    pub trick_no: Option<u8>,
    pub scores_total: [i16; SEATS],
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::TrumpBidding,
            gamlet_no: 1,
            opening_seat: 0,
            turn: Some(0),
            leader: None,
            trick_no: None,
            scores_total: [0; SEATS],
        }
    }
}

/// Build a `GameState` at an arbitrary point, for tests.
pub fn make_game_state(hands: [Vec<Card>; SEATS], args: MakeGameStateArgs) -> GameState {
    let mut state = GameState::new(args.opening_seat);
    state.phase = args.phase;
    state.gamlet_no = args.gamlet_no;
    state.hands = hands;
    state.turn = args.turn;
    state.leader = args.leader;
    state.trick_no = args.trick_no;
    state.scores_total = args.scores_total;
    state
}

/// Mark the auction resolved: contract, declarer, and trump set directly.
pub fn resolve_contract(state: &mut GameState, declarer: Seat, contract: TrumpBid) {
    state.round.contract = Some(contract);
    state.round.declarer = Some(declarer);
    state.round.trump = Some(contract.trump);
}

/// Parse a hand from two-character card strings.
pub fn hand_of(cards: &[&str]) -> Vec<Card> {
    cards.iter().map(|s| s.parse().expect("card")).collect()
}
