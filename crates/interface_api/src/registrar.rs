//! Wiring of the registration pipeline
//!
//! Handlers see registration through the store-agnostic [`Registrar`]
//! trait. [`build_registrar`] assembles the transactional pipeline over any
//! [`Store`] and its adapters; [`postgres_registrar`] and
//! [`memory_registrar`] are the two deployments.

use std::sync::Arc;

use async_trait::async_trait;

use application::{
    RegisterEmployee, RegistrationCommand, RegistrationResult, StoreUnitOfWork, Transactional,
    UnitOfWork, UseCase, UseCaseError,
};
use core_kernel::{Clock, Store};
use domain_employee::{build_labor_rules, EmployeeError, EmployeePort, LaborRulesConfig};
use domain_person::{PersonFactoryRegistry, PersonPort};
use infra_db::{DatabasePool, MemoryStore, PostgresEmployeeAdapter, PostgresPersonAdapter, PostgresStore};

/// Registers employees, whatever the backing store
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(
        &self,
        command: RegistrationCommand,
    ) -> Result<RegistrationResult, UseCaseError>;
}

#[async_trait]
impl<Tx, W> Registrar for Transactional<RegisterEmployee<Tx>, W>
where
    Tx: Send + 'static,
    W: UnitOfWork<Tx>,
{
    async fn register(
        &self,
        command: RegistrationCommand,
    ) -> Result<RegistrationResult, UseCaseError> {
        UseCase::<Tx>::execute(self, None, command).await
    }
}

/// Builds the transactional registration pipeline over `store`
///
/// # Errors
///
/// [`EmployeeError::UnsupportedJurisdiction`] if `labor` names a jurisdiction
/// without rules.
pub fn build_registrar<S: Store>(
    store: S,
    persons: Arc<dyn PersonPort<S::Tx>>,
    employees: Arc<dyn EmployeePort<S::Tx>>,
    labor: &LaborRulesConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn Registrar>, EmployeeError> {
    let rules = build_labor_rules(labor)?;
    let register = RegisterEmployee::new(
        Arc::new(PersonFactoryRegistry::with_defaults()),
        rules,
        persons,
        employees,
        clock,
    );
    Ok(Arc::new(Transactional::new(
        register,
        StoreUnitOfWork::new(store),
    )))
}

pub fn postgres_registrar(
    pool: DatabasePool,
    labor: &LaborRulesConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn Registrar>, EmployeeError> {
    build_registrar(
        PostgresStore::new(pool.clone()),
        Arc::new(PostgresPersonAdapter::new(pool.clone())),
        Arc::new(PostgresEmployeeAdapter::new(pool)),
        labor,
        clock,
    )
}

pub fn memory_registrar(
    store: &MemoryStore,
    labor: &LaborRulesConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn Registrar>, EmployeeError> {
    build_registrar(
        store.clone(),
        Arc::new(store.person_adapter()),
        Arc::new(store.employee_adapter()),
        labor,
        clock,
    )
}
