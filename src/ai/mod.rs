//! AI player module - automated decisions for non-human seats.
//!
//! This module provides:
//! - The `AiPlayer` trait the session dispatches through
//! - `Strategist`: hand-profile bidding plus pace-aware play
//! - Per-seat bid-accuracy memory feeding personality adaptation
//! - A factory from ai-type string + JSON config

pub mod bid_memory;
pub mod bidder;
pub mod config;
pub mod personality;
pub mod play;
mod strategist;
mod trait_def;

pub use bid_memory::{BidMemory, BidRecord, BidStats};
pub use config::AiConfig;
pub use personality::Personality;
use serde_json::Value as JsonValue;
pub use strategist::Strategist;
pub use trait_def::{AiError, AiPlayer, TrumpCall};

/// Create an AI player from an ai_type string and optional config.
///
/// Currently supports:
/// - "strategist": `Strategist` with optional seed/personality from config
///
/// Returns None if ai_type is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "strategist" => {
            let config = AiConfig::from_json(config);
            Some(Box::new(Strategist::from_config(&config)))
        }
        _ => None,
    }
}
