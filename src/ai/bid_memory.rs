//! Per-seat bidding history: committed takes vs. tricks actually won.
//!
//! The session records every seat's result after each gamlet. AI seats read
//! the aggregate stats for two purposes: discounting chronic overbidders
//! when competing in the auction, and adapting their own risk profile when
//! their recent bids keep missing.

use crate::domain::rules::SEATS;
use crate::domain::state::Seat;

/// One seat's committed takes and actual tricks for one gamlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidRecord {
    pub takes: u8,
    pub won: u8,
}

impl BidRecord {
    /// Signed error: positive means the seat overbid.
    pub fn error(&self) -> i16 {
        self.takes as i16 - self.won as i16
    }
}

/// Aggregate accuracy stats for one seat.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BidStats {
    pub gamlets: u32,
    pub exact: u32,
    /// Mean signed error across gamlets; positive means the seat overbids.
    pub mean_error: f32,
}

impl BidStats {
    /// Share of gamlets where the seat hit its bid exactly (0.0 with no data).
    pub fn accuracy(&self) -> f32 {
        if self.gamlets == 0 {
            0.0
        } else {
            self.exact as f32 / self.gamlets as f32
        }
    }
}

/// Bid-accuracy memory for all four seats across a full game.
#[derive(Debug, Clone, Default)]
pub struct BidMemory {
    records: [Vec<BidRecord>; SEATS],
}

impl BidMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed gamlet's takes and tricks for every seat.
    pub fn record_gamlet(&mut self, takes: [u8; SEATS], won: [u8; SEATS]) {
        for seat in 0..SEATS {
            self.records[seat].push(BidRecord {
                takes: takes[seat],
                won: won[seat],
            });
        }
    }

    pub fn stats(&self, seat: Seat) -> BidStats {
        let records = &self.records[seat as usize];
        if records.is_empty() {
            return BidStats::default();
        }
        let gamlets = records.len() as u32;
        let exact = records.iter().filter(|r| r.error() == 0).count() as u32;
        let mean_error =
            records.iter().map(|r| r.error() as f32).sum::<f32>() / gamlets as f32;
        BidStats {
            gamlets,
            exact,
            mean_error,
        }
    }

    pub fn all_stats(&self) -> [BidStats; SEATS] {
        [self.stats(0), self.stats(1), self.stats(2), self.stats(3)]
    }

    /// Drop all records (new full game).
    pub fn reset(&mut self) {
        for records in &mut self.records {
            records.clear();
        }
    }
}
