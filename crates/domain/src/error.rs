//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while validating inventory data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A monetary value could not be parsed as a decimal.
    #[error("invalid money value: {0}")]
    InvalidMoney(String),

    /// An entity carries a negative cost.
    #[error("pet {pet_id} has negative cost {cost}")]
    NegativeCost {
        /// Identifier of the offending entity.
        pet_id: u32,
        /// The rejected cost, as rendered.
        cost: String,
    },

    /// Two entities in one snapshot share an identifier.
    #[error("duplicate pet identifier: {0}")]
    DuplicateId(u32),

    /// A header name is empty or otherwise unusable.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
