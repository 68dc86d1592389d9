//! Error types for fallible loading and parsing.
//!
//! Deck operations never fail; only data coming in from outside the
//! crate (card catalogs, easing names) can be rejected.

use thiserror::Error;

use crate::cards::CardId;

/// Errors raised while building a `CardCatalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card id {0}")]
    DuplicateId(CardId),

    #[error("duplicate card slug `{0}`")]
    DuplicateSlug(String),
}

/// Error raised when an easing name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing `{0}`")]
pub struct EasingParseError(pub String);
