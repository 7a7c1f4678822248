//! Employment Domain Ports
//!
//! [`EmployeePort`] stores employee records. Like the person port it is
//! generic over the store's transaction handle and falls back to a
//! non-transactional handle when given `None`.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::employee::Employee;

/// Port for employee persistence
#[async_trait]
pub trait EmployeePort<Tx: Send + 'static>: DomainPort {
    /// Stores the employee with its computed benefits
    async fn save_employee(&self, tx: Option<&mut Tx>, employee: &Employee)
        -> Result<(), PortError>;
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::EmployeeId;
    use std::collections::HashMap;
    use std::marker::PhantomData;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of EmployeePort
    ///
    /// Can be switched to fail every save, for exercising rollback paths.
    #[derive(Debug)]
    pub struct MockEmployeePort<Tx> {
        employees: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
        fail_saves: AtomicBool,
        _tx: PhantomData<fn() -> Tx>,
    }

    impl<Tx> Default for MockEmployeePort<Tx> {
        fn default() -> Self {
            Self {
                employees: Arc::default(),
                fail_saves: AtomicBool::new(false),
                _tx: PhantomData,
            }
        }
    }

    impl<Tx> MockEmployeePort<Tx> {
        pub fn new() -> Self {
            Self::default()
        }

        /// A port whose saves always fail with an internal error
        pub fn failing() -> Self {
            let port = Self::default();
            port.fail_saves.store(true, Ordering::SeqCst);
            port
        }

        pub async fn get(&self, id: EmployeeId) -> Option<Employee> {
            self.employees.read().await.get(&id).cloned()
        }

        pub async fn len(&self) -> usize {
            self.employees.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.employees.read().await.is_empty()
        }
    }

    impl<Tx: 'static> DomainPort for MockEmployeePort<Tx> {}

    #[async_trait]
    impl<Tx: Send + 'static> EmployeePort<Tx> for MockEmployeePort<Tx> {
        async fn save_employee(
            &self,
            _tx: Option<&mut Tx>,
            employee: &Employee,
        ) -> Result<(), PortError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(PortError::internal("employee store unavailable"));
            }
            self.employees
                .write()
                .await
                .insert(employee.id(), employee.clone());
            Ok(())
        }
    }
}
