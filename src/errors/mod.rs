//! Error handling for the Israeli Whist core.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
