//! Infrastructure Database Layer
//!
//! Storage for the registration pipeline. Two interchangeable stores
//! implement [`core_kernel::Store`]:
//!
//! - [`PostgresStore`] hands out SQLx transactions; its adapters write
//!   through the repository layer
//! - [`MemoryStore`] keeps staged writes in memory with the same commit and
//!   rollback behavior, for tests and local runs
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/employees")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresStore::new(pool.clone());
//! ```

pub mod adapters;
pub mod error;
pub mod memory;
pub mod pool;
pub mod repositories;
pub mod store;

pub use adapters::{PostgresEmployeeAdapter, PostgresPersonAdapter};
pub use error::DatabaseError;
pub use memory::{MemoryEmployeeAdapter, MemoryPersonAdapter, MemoryStore, MemoryTx};
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use store::{PgTx, PostgresStore};
