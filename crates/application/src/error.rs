//! Application error types
//!
//! A [`UseCaseError`] records which pipeline stage failed and keeps the
//! failing domain or port error as its source, so callers can walk the
//! cause chain.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use core_kernel::{Classify, ErrorKind, PortError};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Message returned to callers for failures that must not leak details
pub const GENERIC_FAILURE: &str = "the request could not be completed";

/// Pipeline stage at which a use case failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CreatePerson,
    BuildEmployee,
    ValidateLaborRules,
    CalculateBenefits,
    PersistPerson,
    PersistEmployee,
    /// Begin, commit or rollback of the surrounding transaction
    Transaction,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::CreatePerson => "create person",
            Stage::BuildEmployee => "build employee",
            Stage::ValidateLaborRules => "validate labor rules",
            Stage::CalculateBenefits => "calculate benefits",
            Stage::PersistPerson => "persist person",
            Stage::PersistEmployee => "persist employee",
            Stage::Transaction => "transaction",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by use cases and units of work
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// A stage failed; `source` is the original error
    #[error("{stage} failed: {source}")]
    Failed {
        stage: Stage,
        kind: ErrorKind,
        #[source]
        source: BoxError,
    },

    /// The use case failed and the rollback that followed failed too
    #[error("{error}; rollback failed: {rollback}")]
    RollbackFailed {
        #[source]
        error: Box<UseCaseError>,
        rollback: PortError,
    },
}

impl UseCaseError {
    /// Wraps a classified error with the stage it came from
    pub fn at<E>(stage: Stage, error: E) -> Self
    where
        E: Classify + StdError + Send + Sync + 'static,
    {
        UseCaseError::Failed {
            stage,
            kind: error.kind(),
            source: Box::new(error),
        }
    }

    /// Failure to open or commit the transaction
    pub fn transaction(error: PortError) -> Self {
        Self::at(Stage::Transaction, error)
    }

    pub fn rollback_failed(error: UseCaseError, rollback: PortError) -> Self {
        UseCaseError::RollbackFailed {
            error: Box::new(error),
            rollback,
        }
    }

    /// Stage of the original failure
    pub fn stage(&self) -> Stage {
        match self {
            UseCaseError::Failed { stage, .. } => *stage,
            UseCaseError::RollbackFailed { error, .. } => error.stage(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UseCaseError::Failed { kind, .. } => *kind,
            UseCaseError::RollbackFailed { .. } => ErrorKind::StoreFailure,
        }
    }

    pub fn is_user_facing(&self) -> bool {
        self.kind().is_user_facing()
    }

    /// Message safe to show to the caller
    ///
    /// User-facing kinds expose the original error's message; everything
    /// else collapses to [`GENERIC_FAILURE`].
    pub fn public_message(&self) -> String {
        match self {
            UseCaseError::Failed { kind, source, .. } if kind.is_user_facing() => source.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// The original error, if it is of type `E`
    pub fn cause<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            UseCaseError::Failed { source, .. } => source.downcast_ref::<E>(),
            UseCaseError::RollbackFailed { error, .. } => (**error).cause::<E>(),
        }
    }
}

impl Classify for UseCaseError {
    fn kind(&self) -> ErrorKind {
        UseCaseError::kind(self)
    }
}
