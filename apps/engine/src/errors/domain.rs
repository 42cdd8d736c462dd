//! Domain-level error type used across the session engine.
//!
//! Every rejected action reports a typed reason instead of silently leaving
//! state unchanged, so callers and tests can distinguish "accepted" from
//! "rejected" without diffing the session record.

use thiserror::Error;

/// Validation failure kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Action invoked outside the phase it belongs to.
    PhaseMismatch,
    /// Fewer players than the game minimum.
    RosterTooSmall,
    /// Player name is empty after trimming.
    BlankPlayerName,
    /// Requested impostor count outside the configured bounds.
    ImpostorCountOutOfRange,
    Other(String),
}

/// Missing resources in domain terms (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Category,
    Player,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or business rule violation
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::PhaseMismatch, detail.into())
    }
}
