//! Error classification shared across the system
//!
//! Every domain and application error maps onto one [`ErrorKind`]. The kind
//! decides the transport status and whether the message may be shown to the
//! caller; the concrete error keeps the detail for logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of every failure the registration pipeline can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed or out-of-range input
    Validation,
    /// Input is well-formed but breaks a labor regulation
    LegalRuleViolation,
    /// A uniqueness constraint was hit
    AlreadyExists,
    /// Transient or infrastructure failure in the store
    StoreFailure,
    /// Wiring or configuration mistake (unknown person type, jurisdiction, ...)
    Configuration,
}

impl ErrorKind {
    /// Stable code used on the wire and in logs
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::LegalRuleViolation => "LEGAL_RULE_VIOLATION",
            ErrorKind::AlreadyExists => "ALREADY_EXISTS",
            ErrorKind::StoreFailure => "STORE_FAILURE",
            ErrorKind::Configuration => "CONFIGURATION",
        }
    }

    /// Whether the underlying message is safe to hand to an end user
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ErrorKind::Validation | ErrorKind::LegalRuleViolation | ErrorKind::AlreadyExists
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Implemented by every error that crosses a crate boundary
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}
