//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Derives unique-but-deterministic seeds for different game contexts
//! (dealing, AI jitter) from a base game seed, so a session can be replayed
//! from one number.

/// Derive a seed for dealing a gamlet's hands.
///
/// `attempt` distinguishes the reshuffles a self-healing redeal performs,
/// so retries do not repeat the failed permutation.
pub fn derive_dealing_seed(game_seed: u64, gamlet_no: u8, attempt: u32) -> u64 {
    game_seed
        .wrapping_add((gamlet_no as u64).wrapping_mul(1_000_000))
        .wrapping_add((attempt as u64).wrapping_mul(10_000))
        .wrapping_add(2)
}

/// Derive a seed for a seat's AI decision jitter.
///
/// Unique per (game, seat) so seats with identical personalities do not
/// mirror each other's probabilistic choices.
pub fn derive_ai_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
