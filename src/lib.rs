//! Rules engine and opponent AI for four-player Israeli Whist.
//!
//! The crate is the presentation-independent core of the game: dealing,
//! the trump auction, takes bidding, trick play, scoring, and the heuristic
//! AI that drives non-human seats. A presentation layer talks to it purely
//! through [`domain::GameSession`] commands and queries; the core never
//! touches rendering, timers, or persistence.
//!
//! ```
//! use israeli_whist::ai::create_ai;
//! use israeli_whist::domain::GameSession;
//!
//! let mut session = GameSession::new(42, 0);
//! for seat in 1..4u8 {
//!     session.set_ai(seat, create_ai("strategist", None));
//! }
//! session.start_new_full_game().expect("deal");
//! // Seat 0 (human) is now expected to bid or pass; AI seats advance with
//! // session.advance_ai().
//! ```

pub mod ai;
pub mod domain;
pub mod errors;
