//! PostgreSQL implementation of the [`Store`] contract

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError, Store};

use crate::error::DatabaseError;

/// Transaction handle threaded through the Postgres adapters
pub type PgTx = Transaction<'static, Postgres>;

/// Hands out SQLx transactions from a connection pool
///
/// A [`PgTx`] dropped without commit is rolled back by SQLx when its
/// connection returns to the pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl DomainPort for PostgresStore {}

fn tx_error(stage: &str, error: sqlx::Error) -> PortError {
    let db = DatabaseError::from(&error);
    match db {
        DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => db.into(),
        _ => PortError::Transaction {
            message: format!("{} failed: {}", stage, error),
            source: Some(Box::new(error)),
        },
    }
}

#[async_trait]
impl Store for PostgresStore {
    type Tx = PgTx;

    #[instrument(skip(self))]
    async fn begin(&self) -> Result<PgTx, PortError> {
        debug!("Beginning transaction");
        self.pool.begin().await.map_err(|e| tx_error("begin", e))
    }

    #[instrument(skip(self, tx))]
    async fn commit(&self, tx: PgTx) -> Result<(), PortError> {
        debug!("Committing transaction");
        tx.commit().await.map_err(|e| tx_error("commit", e))
    }

    #[instrument(skip(self, tx))]
    async fn rollback(&self, tx: PgTx) -> Result<(), PortError> {
        debug!("Rolling back transaction");
        tx.rollback().await.map_err(|e| tx_error("rollback", e))
    }
}
