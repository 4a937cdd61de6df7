//! Strategist — the default opponent AI.
//!
//! Bidding runs through the hand evaluator plus a per-seat personality
//! (adapted over the game from observed bid accuracy); play runs through
//! pace-aware candidate scoring. All choices come from the precomputed
//! legal moves on the seat view, so the Strategist is structurally legal
//! by construction.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::bidder::{choose_takes, choose_trump_call, BidContext};
use crate::ai::config::AiConfig;
use crate::ai::personality::{Personality, RiskProfile};
use crate::ai::play::{choose_card, PlayContext};
use crate::ai::trait_def::{AiError, AiPlayer, TrumpCall};
use crate::domain::hand_eval::evaluate;
use crate::domain::player_view::SeatView;
use crate::domain::Card;

pub struct Strategist {
    personality: Personality,
    rng: Mutex<StdRng>,
}

impl Strategist {
    pub const NAME: &'static str = "Strategist";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new Strategist.
    ///
    /// `seed` makes the probabilistic bidding deterministic for tests and
    /// replays; without it the RNG is OS-seeded.
    pub fn new(seed: Option<u64>, personality: Personality) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            personality,
            rng: Mutex::new(rng),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(config.seed(), config.personality())
    }

    /// Effective risk profile: the personality adapted to this seat's own
    /// bid accuracy so far.
    fn risk(&self, view: &SeatView) -> RiskProfile {
        self.personality
            .adapted(&view.bid_stats[view.seat as usize])
    }
}

impl AiPlayer for Strategist {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn call_trump(&self, view: &SeatView) -> Result<TrumpCall, AiError> {
        let cx = BidContext {
            view,
            profile: evaluate(&view.hand),
            risk: self.risk(view),
        };
        let mut rng = self.rng.lock();
        Ok(choose_trump_call(&cx, &mut *rng))
    }

    fn call_takes(&self, view: &SeatView) -> Result<u8, AiError> {
        if view.legal_takes.is_empty() {
            return Err(AiError::InvalidMove("No legal takes".into()));
        }
        let cx = BidContext {
            view,
            profile: evaluate(&view.hand),
            risk: self.risk(view),
        };
        let mut rng = self.rng.lock();
        let takes = choose_takes(&cx, &mut *rng);
        debug_assert!(view.legal_takes.contains(&takes));
        Ok(takes)
    }

    fn choose_play(&self, view: &SeatView) -> Result<Card, AiError> {
        let cx = PlayContext::derive(view);
        choose_card(&cx).ok_or_else(|| AiError::InvalidMove("No legal plays".into()))
    }
}
