//! Error types for rust-gametree.
//!
//! The search engine itself reports outcomes as values (`bool`, `Option`).
//! These errors surface on the session and configuration APIs.

use thiserror::Error;

use crate::core::OperatorId;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("operator {operator} is not applicable in the current state")]
    IllegalOperator { operator: OperatorId },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,

    #[error("invalid operator '{input}' (expected a non-negative integer)")]
    ParseOperator { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
