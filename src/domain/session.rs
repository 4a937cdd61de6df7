//! Session controller: the single owner of all mutable game state.
//!
//! A `GameSession` drives the deal → auction → takes → tricks → scoring
//! loop, carries cumulative scores and gamlet history across hands, and
//! dispatches AI seats. All transitions are synchronous; pacing belongs to
//! the caller. Commands either succeed and return the resulting transition
//! or reject without mutating state.

use serde::Serialize;
use tracing::{debug, info};

use crate::ai::{AiPlayer, BidMemory, BidStats, TrumpCall};
use crate::domain::auction::{
    legal_trump_bids, pass_auction, place_trump_bid, AuctionResult, TrumpBid,
};
use crate::domain::dealing::deal_checked;
use crate::domain::player_view::SeatView;
use crate::domain::rules::{MAX_GAMLETS, SEATS, TARGET_SCORE};
use crate::domain::scoring::apply_hand_scoring;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::domain::state::{GameState, HandState, HandType, Phase, Seat};
use crate::domain::takes::{legal_takes, place_takes, TakesResult};
use crate::domain::tricks::{legal_plays, play_card, PlayCardResult};
use crate::domain::{Card, Trump};
use crate::errors::{DomainError, ValidationKind};

/// Immutable record of one finished gamlet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamletRecord {
    pub gamlet_no: u8,
    pub contract: TrumpBid,
    pub declarer: Seat,
    pub hand_type: HandType,
    pub takes: [u8; SEATS],
    pub tricks_won: [u8; SEATS],
    pub score_deltas: [i16; SEATS],
    pub totals_after: [i16; SEATS],
}

/// Why the full game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// Some seat reached the target score.
    TargetScore,
    /// The gamlet limit was played out.
    GamletLimit,
}

/// Final result of a full game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOutcome {
    pub winner: Seat,
    pub reason: EndReason,
    pub totals: [i16; SEATS],
}

/// One discrete action taken by an AI seat while advancing.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatAction {
    TrumpBid(Seat, TrumpBid),
    Pass(Seat),
    Takes(Seat, u8),
    Play(Seat, Card),
    /// All four seats passed; the hand was redealt.
    Redeal,
}

/// The session: game state, history, and the AI roster.
pub struct GameSession {
    state: GameState,
    game_seed: u64,
    /// All-pass redeals of the current hand, folded into the dealing seed.
    redeals_this_hand: u32,
    gamlets_played: u8,
    history: Vec<GamletRecord>,
    bid_memory: BidMemory,
    ai: [Option<Box<dyn AiPlayer>>; SEATS],
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Create a session with all seats human.
    ///
    /// `opening_seat` is the fixed seat the auction starts from every hand
    /// (conventionally the human seat's position).
    pub fn new(game_seed: u64, opening_seat: Seat) -> Self {
        Self {
            state: GameState::new(opening_seat),
            game_seed,
            redeals_this_hand: 0,
            gamlets_played: 0,
            history: Vec::new(),
            bid_memory: BidMemory::new(),
            ai: [None, None, None, None],
            outcome: None,
        }
    }

    /// Install an AI player for a seat; `None` makes the seat human again.
    pub fn set_ai(&mut self, seat: Seat, player: Option<Box<dyn AiPlayer>>) {
        self.ai[seat as usize] = player;
    }

    pub fn is_human(&self, seat: Seat) -> bool {
        self.ai[seat as usize].is_none()
    }

    fn ai_mask(&self) -> [bool; SEATS] {
        [0, 1, 2, 3].map(|s: usize| self.ai[s].is_some())
    }

    // ---------- Commands ----------

    /// Reset scores, history, and memory, and deal the first hand.
    pub fn start_new_full_game(&mut self) -> Result<(), DomainError> {
        let opening_seat = self.state.opening_seat;
        self.state = GameState::new(opening_seat);
        self.gamlets_played = 0;
        self.history.clear();
        self.bid_memory.reset();
        self.outcome = None;
        info!(game_seed = self.game_seed, "new full game");
        self.start_new_hand()
    }

    /// Deal the next hand and open the auction.
    pub fn start_new_hand(&mut self) -> Result<(), DomainError> {
        if self.outcome.is_some() {
            return Err(DomainError::validation(
                ValidationKind::PrematureAction,
                "Full game is over; start a new full game",
            ));
        }
        if !matches!(self.state.phase, Phase::Init | Phase::HandComplete) {
            return Err(DomainError::validation(
                ValidationKind::PrematureAction,
                "A hand is already in progress",
            ));
        }
        self.state.gamlet_no += 1;
        self.redeals_this_hand = 0;
        self.deal_and_open()
    }

    fn deal_and_open(&mut self) -> Result<(), DomainError> {
        let hands = deal_checked(
            self.game_seed,
            self.state.gamlet_no,
            self.redeals_this_hand.wrapping_mul(100),
            self.state.opening_seat,
        )?;
        self.state.hands = hands;
        self.state.round = HandState::empty();
        self.state.phase = Phase::TrumpBidding;
        self.state.turn = Some(self.state.opening_seat);
        self.state.leader = None;
        self.state.trick_no = None;
        info!(gamlet_no = self.state.gamlet_no, "hand dealt, auction open");
        Ok(())
    }

    /// Phase 1: place a trump bid for a seat.
    pub fn place_trump_bid(
        &mut self,
        seat: Seat,
        bid: TrumpBid,
    ) -> Result<AuctionResult, DomainError> {
        place_trump_bid(&mut self.state, seat, bid)
    }

    /// Phase 1: pass. An all-pass auction voids the hand and redeals
    /// immediately with a fresh shuffle.
    pub fn pass(&mut self, seat: Seat) -> Result<AuctionResult, DomainError> {
        let result = pass_auction(&mut self.state, seat)?;
        if result.redeal {
            self.redeals_this_hand += 1;
            self.deal_and_open()?;
        }
        Ok(result)
    }

    /// Phase 2: commit a takes bid for a seat.
    pub fn place_takes(&mut self, seat: Seat, takes: u8) -> Result<TakesResult, DomainError> {
        place_takes(&mut self.state, seat, takes)
    }

    /// Phase 3: play a card. Completing the 13th trick scores the hand and
    /// appends its gamlet record.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
        let result = play_card(&mut self.state, seat, card)?;
        if result.phase_transitioned == Some(Phase::Scoring) {
            self.finish_hand()?;
        }
        Ok(result)
    }

    /// Run AI seats until a human must act, the phase blocks, or the game
    /// ends. Returns the actions taken, in order.
    pub fn advance_ai(&mut self) -> Result<Vec<SeatAction>, DomainError> {
        let mut actions = Vec::new();
        // Runaway backstop: a hand is ~60 actions, plus room for raise wars
        // and all-pass redeals.
        for _ in 0..1024 {
            let Some(seat) = self.state.turn else { break };
            if self.is_human(seat) {
                break;
            }
            match self.state.phase {
                Phase::TrumpBidding => {
                    let view = self.seat_view(seat);
                    let call = self.consult(seat, |ai| ai.call_trump(&view))?;
                    match call {
                        TrumpCall::Bid(bid) => {
                            self.place_trump_bid(seat, bid)?;
                            actions.push(SeatAction::TrumpBid(seat, bid));
                        }
                        TrumpCall::Pass => {
                            let result = self.pass(seat)?;
                            actions.push(SeatAction::Pass(seat));
                            if result.redeal {
                                actions.push(SeatAction::Redeal);
                            }
                        }
                    }
                }
                Phase::TakesBidding => {
                    let view = self.seat_view(seat);
                    let takes = self.consult(seat, |ai| ai.call_takes(&view))?;
                    self.place_takes(seat, takes)?;
                    actions.push(SeatAction::Takes(seat, takes));
                }
                Phase::Trick { .. } => {
                    let view = self.seat_view(seat);
                    let card = self.consult(seat, |ai| ai.choose_play(&view))?;
                    self.play_card(seat, card)?;
                    actions.push(SeatAction::Play(seat, card));
                }
                _ => break,
            }
        }
        Ok(actions)
    }

    fn consult<T>(
        &self,
        seat: Seat,
        decide: impl FnOnce(&dyn AiPlayer) -> Result<T, crate::ai::AiError>,
    ) -> Result<T, DomainError> {
        let ai = self.ai[seat as usize]
            .as_deref()
            .ok_or_else(|| DomainError::validation_other(format!("Seat {seat} has no AI")))?;
        decide(ai).map_err(|e| DomainError::validation_other(format!("AI seat {seat}: {e}")))
    }

    fn finish_hand(&mut self) -> Result<(), DomainError> {
        let scoring = apply_hand_scoring(&mut self.state);
        if scoring.phase_transitioned != Some(Phase::HandComplete) {
            return Err(DomainError::validation_other(
                "Scoring did not complete the hand",
            ));
        }

        let round = &self.state.round;
        let mut takes = [0u8; SEATS];
        for (seat, slot) in round.takes.iter().enumerate() {
            takes[seat] = slot.ok_or_else(|| {
                DomainError::validation_other("Takes missing in a scored hand")
            })?;
        }
        let contract = round
            .contract
            .ok_or_else(|| DomainError::validation_other("Contract missing in a scored hand"))?;
        let declarer = round
            .declarer
            .ok_or_else(|| DomainError::validation_other("Declarer missing in a scored hand"))?;
        let hand_type = round
            .hand_type
            .ok_or_else(|| DomainError::validation_other("Hand type missing in a scored hand"))?;

        let record = GamletRecord {
            gamlet_no: self.state.gamlet_no,
            contract,
            declarer,
            hand_type,
            takes,
            tricks_won: round.tricks_won,
            score_deltas: scoring.round_score_deltas,
            totals_after: self.state.scores_total,
        };
        self.bid_memory.record_gamlet(takes, round.tricks_won);
        self.history.push(record);
        self.gamlets_played += 1;

        self.check_termination();
        Ok(())
    }

    /// The target-score check runs before the gamlet-limit check; ties at
    /// the winning score break to the earliest seat in clockwise order.
    fn check_termination(&mut self) {
        let totals = self.state.scores_total;
        let reason = if totals.iter().any(|&t| t >= TARGET_SCORE) {
            Some(EndReason::TargetScore)
        } else if self.gamlets_played >= MAX_GAMLETS {
            Some(EndReason::GamletLimit)
        } else {
            None
        };

        if let Some(reason) = reason {
            let mut winner: Seat = 0;
            for seat in 1..SEATS {
                if totals[seat] > totals[winner as usize] {
                    winner = seat as Seat;
                }
            }
            info!(winner, ?reason, ?totals, "full game over");
            self.state.phase = Phase::GameOver;
            self.state.turn = None;
            self.outcome = Some(GameOutcome {
                winner,
                reason,
                totals,
            });
        }
    }

    // ---------- Queries ----------

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Seat expected to act, if any.
    pub fn acting_seat(&self) -> Option<Seat> {
        self.state.turn
    }

    pub fn gamlet_no(&self) -> u8 {
        self.state.gamlet_no
    }

    pub fn gamlets_played(&self) -> u8 {
        self.gamlets_played
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.state.hands[seat as usize]
    }

    pub fn scores_total(&self) -> [i16; SEATS] {
        self.state.scores_total
    }

    pub fn trump(&self) -> Option<Trump> {
        self.state.round.trump
    }

    pub fn contract(&self) -> Option<TrumpBid> {
        self.state.round.contract
    }

    pub fn declarer(&self) -> Option<Seat> {
        self.state.round.declarer
    }

    pub fn takes(&self) -> [Option<u8>; SEATS] {
        self.state.round.takes
    }

    pub fn tricks_won(&self) -> [u8; SEATS] {
        self.state.round.tricks_won
    }

    /// Ordered plays of the trick in progress.
    pub fn current_trick(&self) -> &[(Seat, Card)] {
        &self.state.round.trick_plays
    }

    pub fn history(&self) -> &[GamletRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn bid_stats(&self) -> [BidStats; SEATS] {
        self.bid_memory.all_stats()
    }

    /// Legal Phase 1 bids for a seat (empty when it cannot bid).
    pub fn legal_trump_bids(&self, seat: Seat) -> Vec<TrumpBid> {
        legal_trump_bids(&self.state, seat)
    }

    /// Legal Phase 2 takes for a seat (empty outside its turn).
    pub fn legal_takes(&self, seat: Seat) -> Vec<u8> {
        legal_takes(&self.state, seat)
    }

    /// Legal cards for a seat in the current trick.
    pub fn legal_plays(&self, seat: Seat) -> Vec<Card> {
        legal_plays(&self.state, seat)
    }

    /// Public snapshot for presentation.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::capture(&self.state, self.ai_mask(), self.gamlets_played)
    }

    /// Everything `seat` can see right now, with legal moves precomputed.
    pub fn seat_view(&self, seat: Seat) -> SeatView {
        let state = &self.state;
        debug!(seat, phase = ?state.phase, "building seat view");
        SeatView {
            seat,
            phase: state.phase,
            gamlet_no: state.gamlet_no,
            hand: state.hands[seat as usize].clone(),
            auction: state.round.auction.clone(),
            contract: state.round.contract,
            declarer: state.round.declarer,
            trump: state.round.trump,
            takes: state.round.takes,
            hand_type: state.round.hand_type,
            trick_no: state.trick_no,
            current_trick_plays: state.round.trick_plays.clone(),
            trick_lead: state.round.trick_lead,
            tricks_won: state.round.tricks_won,
            scores_total: state.scores_total,
            completed_tricks: state.round.completed_tricks.clone(),
            bid_stats: self.bid_memory.all_stats(),
            legal_trump_bids: legal_trump_bids(state, seat),
            legal_takes: legal_takes(state, seat),
            legal_plays: legal_plays(state, seat),
        }
    }
}
