//! Domain-level error type used by the rules engine and the interaction core.
//!
//! Illegal *selections* are never errors; they are absorbed by the move
//! controller. A `DomainError` means a rules-engine call was rejected or an
//! internal invariant no longer holds, both of which are programming faults.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why the rules engine rejected a call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Destination is not a legal next hop for the piece.
    IllegalHop,
    /// A finished move was committed without any hop in progress.
    NoMoveInProgress,
    /// The finished move does not match the hops that were committed.
    MoveMismatch,
    /// A finished move was committed while a further capture was still open.
    UnfinishedCapture,
    /// Square notation could not be parsed.
    ParsePosition,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rules engine refused the operation
    Validation(ValidationKind, String),
    /// Core state disagrees with the rules engine
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
