//! Domain-level error type used across the engine.
//!
//! Every command either succeeds or rejects with a `DomainError` and leaves
//! state untouched. The single exception is `InvalidDeckState`, which the
//! deal engine heals internally with a reshuffle instead of surfacing.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rejection categories for game commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Phase 1 bid not strictly above the standing bid, or below the table minimum.
    IllegalBid,
    /// Phase 2 takes below the declarer floor, out of range, or hitting the forbidden total.
    IllegalTakes,
    /// Phase 3 card not held, or a follow-suit violation.
    IllegalPlay,
    /// Deck or hand count invariant violation. Internal: healed by a reshuffle.
    InvalidDeckState,
    /// Command issued for a seat out of turn, or for a phase that does not accept it.
    PrematureAction,
    /// Card string could not be parsed.
    ParseCard,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation.
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("INVARIANT".into()), detail.into())
    }

    /// The kind of a validation error.
    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
