//! Person Domain Ports
//!
//! The `PersonPort` trait is what the registration pipeline needs from
//! person storage. Implementations:
//!
//! - **Postgres adapter** (infra_db): writes `persons` plus the variant table
//! - **In-memory adapter** (infra_db): same semantics over a [`Store`] in memory
//! - **Mock adapter**: for tests that do not care about transactions
//!
//! The port is generic over the transaction handle of the store it writes
//! through. Passing `None` uses a non-transactional handle.
//!
//! ```rust,ignore
//! async fn persist<S: Store>(
//!     store: &S,
//!     persons: &dyn PersonPort<S::Tx>,
//!     aggregate: &PersonAggregate,
//! ) -> Result<(), PortError> {
//!     let mut tx = store.begin().await?;
//!     persons.save_person(Some(&mut tx), aggregate).await?;
//!     store.commit(tx).await
//! }
//! ```
//!
//! [`Store`]: core_kernel::Store

use async_trait::async_trait;

use core_kernel::{DomainPort, PersonId, PortError};

use crate::person::PersonAggregate;

/// Port for person persistence
#[async_trait]
pub trait PersonPort<Tx: Send + 'static>: DomainPort {
    /// Stores the base record and its variant
    ///
    /// # Errors
    ///
    /// [`PortError::Conflict`] when the document number is already registered.
    async fn save_person(
        &self,
        tx: Option<&mut Tx>,
        person: &PersonAggregate,
    ) -> Result<(), PortError>;

    /// Loads a person with its variant
    async fn get_person(
        &self,
        tx: Option<&mut Tx>,
        id: PersonId,
    ) -> Result<PersonAggregate, PortError>;
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::marker::PhantomData;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of PersonPort; ignores transactions
    #[derive(Debug)]
    pub struct MockPersonPort<Tx> {
        persons: Arc<RwLock<HashMap<PersonId, PersonAggregate>>>,
        _tx: PhantomData<fn() -> Tx>,
    }

    impl<Tx> Default for MockPersonPort<Tx> {
        fn default() -> Self {
            Self {
                persons: Arc::default(),
                _tx: PhantomData,
            }
        }
    }

    impl<Tx> MockPersonPort<Tx> {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored persons
        pub async fn len(&self) -> usize {
            self.persons.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.persons.read().await.is_empty()
        }
    }

    impl<Tx: 'static> DomainPort for MockPersonPort<Tx> {}

    #[async_trait]
    impl<Tx: Send + 'static> PersonPort<Tx> for MockPersonPort<Tx> {
        async fn save_person(
            &self,
            _tx: Option<&mut Tx>,
            person: &PersonAggregate,
        ) -> Result<(), PortError> {
            let mut persons = self.persons.write().await;
            if persons
                .values()
                .any(|p| p.document_number() == person.document_number())
            {
                return Err(PortError::conflict(format!(
                    "document {} already registered",
                    person.document_number()
                )));
            }
            persons.insert(person.id(), person.clone());
            Ok(())
        }

        async fn get_person(
            &self,
            _tx: Option<&mut Tx>,
            id: PersonId,
        ) -> Result<PersonAggregate, PortError> {
            self.persons
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Person", id))
        }
    }
}
