//! Domain Adapters
//!
//! Implementations of the domain ports backed by PostgreSQL.
//!
//! Each adapter:
//! - Implements the domain's port trait over [`PgTx`](crate::store::PgTx)
//! - Translates between domain models and database row types
//! - Uses the repository layer for database operations
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresPersonAdapter;
//! use domain_person::PersonPort;
//!
//! let adapter = PostgresPersonAdapter::new(pool);
//! let person = adapter.get_person(None, person_id).await?;
//! ```

pub mod employee;
pub mod person;

pub use employee::PostgresEmployeeAdapter;
pub use person::PostgresPersonAdapter;
