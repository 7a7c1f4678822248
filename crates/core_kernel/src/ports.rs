//! Ports and Adapters Infrastructure
//!
//! Foundational contracts for the hexagonal layout used by the registration
//! crates.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! │          (RegisterEmployee, UnitOfWork, Transactional)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │           (Store, PersonPort, EmployeePort)                  │
//! │   Defined in core_kernel and the domain crates               │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  PostgreSQL store │     │  In-memory store │
//!         │   and adapters    │     │   and adapters   │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! A [`Store`] hands out transaction handles. Persistence ports accept an
//! optional `&mut Store::Tx`; with `None` they fall back to a
//! non-transactional handle.

use std::fmt;
use thiserror::Error;

use crate::error::{Classify, ErrorKind};

/// Error type for port operations
///
/// All adapters, Postgres or in-memory, report failures through this type so
/// the application layer classifies them the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The store rejected the data as malformed
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// A uniqueness constraint was violated
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Begin, commit or rollback failed
    #[error("Transaction error: {message}")]
    Transaction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Transaction error
    pub fn transaction(message: impl Into<String>) -> Self {
        PortError::Transaction {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. } | PortError::Transaction { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if a uniqueness constraint was hit
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

impl Classify for PortError {
    fn kind(&self) -> ErrorKind {
        match self {
            PortError::Conflict { .. } => ErrorKind::AlreadyExists,
            PortError::Validation { .. } | PortError::NotFound { .. } => ErrorKind::Validation,
            PortError::Connection { .. }
            | PortError::Transaction { .. }
            | PortError::Internal { .. } => ErrorKind::StoreFailure,
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they are thread-safe and usable
/// from async tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Begin/commit/rollback capability over a transaction handle
///
/// Dropping a handle without committing must discard its writes; the
/// application relies on this when a request is cancelled mid-flight.
#[async_trait::async_trait]
pub trait Store: DomainPort {
    /// Transaction handle threaded through the persistence ports
    type Tx: Send + 'static;

    async fn begin(&self) -> Result<Self::Tx, PortError>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), PortError>;

    async fn rollback(&self, tx: Self::Tx) -> Result<(), PortError>;
}
