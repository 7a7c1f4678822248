//! Use-case contract and transaction boundary
//!
//! A [`UseCase`] receives an optional transaction handle. A [`UnitOfWork`]
//! supplies that handle: [`StoreUnitOfWork`] opens a store transaction,
//! commits on success and rolls back on failure, while [`NoopUnitOfWork`]
//! runs the use case without one. [`Transactional`] combines the two into a
//! use case with the same contract.

use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use core_kernel::Store;

use crate::error::UseCaseError;

/// A single application operation
#[async_trait]
pub trait UseCase<Tx: Send + 'static>: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Runs the operation, writing through `tx` when one is given
    async fn execute(
        &self,
        tx: Option<&mut Tx>,
        input: Self::Input,
    ) -> Result<Self::Output, UseCaseError>;
}

/// Runs a use case inside an atomic boundary
#[async_trait]
pub trait UnitOfWork<Tx: Send + 'static>: Send + Sync {
    async fn execute<U>(&self, use_case: &U, input: U::Input) -> Result<U::Output, UseCaseError>
    where
        U: UseCase<Tx> + ?Sized;
}

/// Unit of work backed by a [`Store`] transaction
///
/// If the future is dropped before it completes, the open transaction is
/// dropped with it and the store discards its writes.
#[derive(Debug, Clone)]
pub struct StoreUnitOfWork<S> {
    store: S,
}

impl<S: Store> StoreUnitOfWork<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: Store> UnitOfWork<S::Tx> for StoreUnitOfWork<S> {
    #[instrument(skip_all)]
    async fn execute<U>(&self, use_case: &U, input: U::Input) -> Result<U::Output, UseCaseError>
    where
        U: UseCase<S::Tx> + ?Sized,
    {
        let mut tx = self.store.begin().await.map_err(UseCaseError::transaction)?;

        match use_case.execute(Some(&mut tx), input).await {
            Ok(output) => {
                self.store
                    .commit(tx)
                    .await
                    .map_err(UseCaseError::transaction)?;
                debug!("Transaction committed");
                Ok(output)
            }
            Err(err) => {
                warn!(stage = %err.stage(), kind = %err.kind(), "Rolling back transaction");
                if let Err(rollback) = self.store.rollback(tx).await {
                    error!(error = %rollback, "Rollback failed");
                    return Err(UseCaseError::rollback_failed(err, rollback));
                }
                Err(err)
            }
        }
    }
}

/// Unit of work that runs the use case without a transaction
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUnitOfWork;

#[async_trait]
impl<Tx: Send + 'static> UnitOfWork<Tx> for NoopUnitOfWork {
    async fn execute<U>(&self, use_case: &U, input: U::Input) -> Result<U::Output, UseCaseError>
    where
        U: UseCase<Tx> + ?Sized,
    {
        use_case.execute(None, input).await
    }
}

/// Decorates a use case with a unit of work
///
/// When called with a transaction already open, the inner use case joins it
/// instead of starting a new one.
#[derive(Debug, Clone)]
pub struct Transactional<U, W> {
    inner: U,
    unit_of_work: W,
}

impl<U, W> Transactional<U, W> {
    pub fn new(inner: U, unit_of_work: W) -> Self {
        Self {
            inner,
            unit_of_work,
        }
    }

    pub fn inner(&self) -> &U {
        &self.inner
    }
}

#[async_trait]
impl<Tx, U, W> UseCase<Tx> for Transactional<U, W>
where
    Tx: Send + 'static,
    U: UseCase<Tx>,
    W: UnitOfWork<Tx>,
{
    type Input = U::Input;
    type Output = U::Output;

    async fn execute(
        &self,
        tx: Option<&mut Tx>,
        input: Self::Input,
    ) -> Result<Self::Output, UseCaseError> {
        match tx {
            Some(tx) => self.inner.execute(Some(tx), input).await,
            None => self.unit_of_work.execute(&self.inner, input).await,
        }
    }
}
