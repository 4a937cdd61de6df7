//! Seat personalities: risk parameters for the bidding AI.
//!
//! A personality is a named starting point; the effective risk profile is
//! adapted each hand from the seat's own observed bid accuracy, so a seat
//! that keeps overshooting tightens up over the course of a full game.

use serde::{Deserialize, Serialize};

use crate::ai::bid_memory::BidStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Conservative,
    Balanced,
    Aggressive,
}

impl Default for Personality {
    fn default() -> Self {
        Personality::Balanced
    }
}

/// Concrete risk parameters derived from a personality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskProfile {
    /// Playing tricks needed to open the auction.
    pub open_threshold: f32,
    /// How far beyond its own estimate the seat will compete for a contract.
    pub compete_margin: f32,
    /// Base probability of accepting a marginal raise.
    pub accept_base: f64,
    /// Shading applied to the Phase 2 estimate (positive bids up).
    pub takes_bias: f32,
}

impl Personality {
    pub fn risk_profile(self) -> RiskProfile {
        match self {
            Personality::Conservative => RiskProfile {
                open_threshold: 5.6,
                compete_margin: 0.2,
                accept_base: 0.35,
                takes_bias: -0.4,
            },
            Personality::Balanced => RiskProfile {
                open_threshold: 5.2,
                compete_margin: 0.5,
                accept_base: 0.55,
                takes_bias: 0.0,
            },
            Personality::Aggressive => RiskProfile {
                open_threshold: 4.8,
                compete_margin: 0.9,
                accept_base: 0.75,
                takes_bias: 0.35,
            },
        }
    }

    /// Risk profile adapted to the seat's own observed accuracy.
    ///
    /// A positive mean error means the seat has been overbidding, so the
    /// profile shades down; chronic underbidding loosens it the same way.
    pub fn adapted(self, own: &BidStats) -> RiskProfile {
        let mut profile = self.risk_profile();
        if own.gamlets >= 2 {
            let shift = own.mean_error.clamp(-2.0, 2.0);
            profile.takes_bias -= shift * 0.3;
            profile.open_threshold += shift * 0.2;
            profile.accept_base = (profile.accept_base - shift as f64 * 0.08).clamp(0.1, 0.95);
        }
        profile
    }
}
