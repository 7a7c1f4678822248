//! In-memory store
//!
//! [`MemoryStore`] gives the same observable transaction semantics as the
//! PostgreSQL store without a database:
//!
//! - writes made through a [`MemoryTx`] stay invisible until commit
//! - a document number is reserved as soon as a transaction writes it, so a
//!   concurrent registration of the same document fails with a conflict
//! - rollback, or dropping the transaction, discards staged writes and
//!   releases reservations
//! - an employee must reference a person that exists, committed or staged in
//!   the same transaction
//!
//! Used by the HTTP layer in tests and by the application tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, EmployeeId, PersonId, PortError, Store};
use domain_employee::{Employee, EmployeePort};
use domain_person::{PersonAggregate, PersonPort};

#[derive(Debug, Default)]
struct MemoryState {
    persons: HashMap<PersonId, PersonAggregate>,
    employees: HashMap<EmployeeId, Employee>,
    // committed documents plus those reserved by open transactions
    documents: HashSet<String>,
}

type SharedState = Arc<Mutex<MemoryState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, MemoryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared in-memory storage with transactional writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: SharedState,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every adapter write by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn person_adapter(&self) -> MemoryPersonAdapter {
        MemoryPersonAdapter {
            store: self.clone(),
        }
    }

    pub fn employee_adapter(&self) -> MemoryEmployeeAdapter {
        MemoryEmployeeAdapter {
            store: self.clone(),
        }
    }

    /// Number of committed persons
    pub fn person_count(&self) -> usize {
        lock(&self.state).persons.len()
    }

    /// Number of committed employees
    pub fn employee_count(&self) -> usize {
        lock(&self.state).employees.len()
    }

    pub fn employee(&self, id: EmployeeId) -> Option<Employee> {
        lock(&self.state).employees.get(&id).cloned()
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

/// Staged writes of one in-memory transaction
#[derive(Debug)]
pub struct MemoryTx {
    state: SharedState,
    persons: Vec<PersonAggregate>,
    employees: Vec<Employee>,
    reserved: Vec<String>,
    finished: bool,
}

impl MemoryTx {
    fn staged_person(&self, id: PersonId) -> Option<&PersonAggregate> {
        self.persons.iter().find(|p| p.id() == id)
    }

    fn release(&mut self) {
        if self.finished {
            return;
        }
        let mut state = lock(&self.state);
        for document in self.reserved.drain(..) {
            state.documents.remove(&document);
        }
        self.persons.clear();
        self.employees.clear();
        self.finished = true;
    }
}

impl Drop for MemoryTx {
    fn drop(&mut self) {
        self.release();
    }
}

impl DomainPort for MemoryStore {}

#[async_trait]
impl Store for MemoryStore {
    type Tx = MemoryTx;

    async fn begin(&self) -> Result<MemoryTx, PortError> {
        Ok(MemoryTx {
            state: Arc::clone(&self.state),
            persons: Vec::new(),
            employees: Vec::new(),
            reserved: Vec::new(),
            finished: false,
        })
    }

    #[instrument(skip(self, tx))]
    async fn commit(&self, mut tx: MemoryTx) -> Result<(), PortError> {
        if !Arc::ptr_eq(&self.state, &tx.state) {
            return Err(PortError::transaction(
                "transaction belongs to a different store",
            ));
        }
        debug!("Committing in-memory transaction");
        let mut state = lock(&self.state);
        for person in tx.persons.drain(..) {
            state.persons.insert(person.id(), person);
        }
        for employee in tx.employees.drain(..) {
            state.employees.insert(employee.id(), employee);
        }
        // reservations become committed documents
        tx.reserved.clear();
        tx.finished = true;
        Ok(())
    }

    async fn rollback(&self, mut tx: MemoryTx) -> Result<(), PortError> {
        debug!("Rolling back in-memory transaction");
        tx.release();
        Ok(())
    }
}

/// [`PersonPort`] over a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryPersonAdapter {
    store: MemoryStore,
}

impl DomainPort for MemoryPersonAdapter {}

#[async_trait]
impl PersonPort<MemoryTx> for MemoryPersonAdapter {
    async fn save_person(
        &self,
        tx: Option<&mut MemoryTx>,
        person: &PersonAggregate,
    ) -> Result<(), PortError> {
        self.store.simulate_latency().await;

        let document = person.document_number().to_string();
        let mut state = lock(&self.store.state);
        if state.documents.contains(&document) {
            return Err(PortError::conflict(format!(
                "a person with document {} is already registered",
                document
            )));
        }
        state.documents.insert(document.clone());

        match tx {
            Some(tx) => {
                tx.reserved.push(document);
                tx.persons.push(person.clone());
            }
            None => {
                state.persons.insert(person.id(), person.clone());
            }
        }
        Ok(())
    }

    async fn get_person(
        &self,
        tx: Option<&mut MemoryTx>,
        id: PersonId,
    ) -> Result<PersonAggregate, PortError> {
        if let Some(person) = tx.and_then(|tx| tx.staged_person(id).cloned()) {
            return Ok(person);
        }
        lock(&self.store.state)
            .persons
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Person", id))
    }
}

/// [`EmployeePort`] over a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryEmployeeAdapter {
    store: MemoryStore,
}

impl DomainPort for MemoryEmployeeAdapter {}

#[async_trait]
impl EmployeePort<MemoryTx> for MemoryEmployeeAdapter {
    async fn save_employee(
        &self,
        tx: Option<&mut MemoryTx>,
        employee: &Employee,
    ) -> Result<(), PortError> {
        self.store.simulate_latency().await;

        let person_id = employee.person_id();
        let mut state = lock(&self.store.state);
        match tx {
            Some(tx) => {
                if tx.staged_person(person_id).is_none() && !state.persons.contains_key(&person_id)
                {
                    return Err(missing_person(person_id));
                }
                tx.employees.push(employee.clone());
            }
            None => {
                if !state.persons.contains_key(&person_id) {
                    return Err(missing_person(person_id));
                }
                state.employees.insert(employee.id(), employee.clone());
            }
        }
        Ok(())
    }
}

fn missing_person(person_id: PersonId) -> PortError {
    PortError::validation_field(
        format!("person {} does not exist", person_id),
        "person_id",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::FixedClock;
    use domain_employee::{BenefitFlags, EmployeeBuilder, JobDetails, PayrollDetails};
    use domain_person::{PersonFactoryParams, PersonFactoryRegistry};
    use rust_decimal_macros::dec;

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn person(document: &str) -> PersonAggregate {
        PersonFactoryRegistry::with_defaults()
            .create_person(
                PersonFactoryParams {
                    person_type: "NATURAL".to_string(),
                    email: "rosa@example.pe".to_string(),
                    phone: "987654321".to_string(),
                    address: "Jr. Ucayali 120".to_string(),
                    country: "Peru".to_string(),
                    document_number: document.to_string(),
                    first_name: Some("Rosa".to_string()),
                    last_name_paternal: Some("Quispe".to_string()),
                    birth_date: NaiveDate::from_ymd_opt(1990, 5, 14),
                    gender: Some("F".to_string()),
                    ..Default::default()
                },
                &clock(),
            )
            .unwrap()
    }

    fn employee(person_id: PersonId) -> Employee {
        EmployeeBuilder::new(
            person_id,
            dec!(3000),
            "FIJO",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .job_details(JobDetails::new("Cashier", "Sales", "Full-time", "Lima"))
        .payroll(PayrollDetails::new("191-0000001", "Integra", "Pacifico"))
        .benefit_flags(BenefitFlags::all())
        .build(&clock())
        .unwrap()
    }

    #[tokio::test]
    async fn test_commit_makes_writes_visible() {
        let store = MemoryStore::new();
        let persons = store.person_adapter();
        let employees = store.employee_adapter();
        let person = person("12345678");

        let mut tx = store.begin().await.unwrap();
        persons.save_person(Some(&mut tx), &person).await.unwrap();
        employees
            .save_employee(Some(&mut tx), &employee(person.id()))
            .await
            .unwrap();
        assert_eq!(store.person_count(), 0);

        store.commit(tx).await.unwrap();
        assert_eq!(store.person_count(), 1);
        assert_eq!(store.employee_count(), 1);
    }

    #[tokio::test]
    async fn test_rollback_discards_and_releases_document() {
        let store = MemoryStore::new();
        let persons = store.person_adapter();

        let mut tx = store.begin().await.unwrap();
        persons
            .save_person(Some(&mut tx), &person("12345678"))
            .await
            .unwrap();
        store.rollback(tx).await.unwrap();
        assert_eq!(store.person_count(), 0);

        persons
            .save_person(None, &person("12345678"))
            .await
            .unwrap();
        assert_eq!(store.person_count(), 1);
    }

    #[tokio::test]
    async fn test_dropped_transaction_releases_document() {
        let store = MemoryStore::new();
        let persons = store.person_adapter();

        {
            let mut tx = store.begin().await.unwrap();
            persons
                .save_person(Some(&mut tx), &person("12345678"))
                .await
                .unwrap();
        }

        let mut tx = store.begin().await.unwrap();
        persons
            .save_person(Some(&mut tx), &person("12345678"))
            .await
            .unwrap();
        store.commit(tx).await.unwrap();
        assert_eq!(store.person_count(), 1);
    }

    #[tokio::test]
    async fn test_open_transaction_reserves_document() {
        let store = MemoryStore::new();
        let persons = store.person_adapter();

        let mut first = store.begin().await.unwrap();
        persons
            .save_person(Some(&mut first), &person("12345678"))
            .await
            .unwrap();

        let mut second = store.begin().await.unwrap();
        let err = persons
            .save_person(Some(&mut second), &person("12345678"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_employee_requires_existing_person() {
        let store = MemoryStore::new();
        let err = store
            .employee_adapter()
            .save_employee(None, &employee(PersonId::new_v7()))
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::Validation { .. }));
        assert_eq!(store.employee_count(), 0);
    }

    #[tokio::test]
    async fn test_staged_person_readable_inside_transaction() {
        let store = MemoryStore::new();
        let persons = store.person_adapter();
        let person = person("12345678");

        let mut tx = store.begin().await.unwrap();
        persons.save_person(Some(&mut tx), &person).await.unwrap();

        let loaded = persons.get_person(Some(&mut tx), person.id()).await.unwrap();
        assert_eq!(loaded, person);
        assert!(persons.get_person(None, person.id()).await.unwrap_err().is_not_found());
    }
}
