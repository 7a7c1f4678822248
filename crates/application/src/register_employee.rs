//! Employee registration
//!
//! [`RegisterEmployee`] runs five stages in order, stopping at the first
//! failure:
//!
//! 1. build the person aggregate through the factory registry
//! 2. build the employee
//! 3. check the jurisdiction's labor rules
//! 4. compute and attach benefits
//! 5. persist the person, then the employee
//!
//! Only stage 5 has side effects. Atomicity comes from the caller: wrap the
//! use case in [`Transactional`](crate::Transactional) or pass a transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use core_kernel::{Clock, EmployeeId, PersonId};
use domain_employee::{
    BenefitFlags, Benefits, ContractType, Employee, EmployeeBuilder, EmployeePort,
    EmploymentFacts, JobDetails, LaborRules, PayrollDetails,
};
use domain_person::{
    PersonAggregate, PersonFactoryParams, PersonFactoryRegistry, PersonIdentity, PersonPort,
    PersonType,
};

use crate::error::{Stage, UseCaseError};
use crate::use_case::UseCase;

/// Employment terms of a registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmploymentData {
    pub salary: Decimal,
    pub contract_type: String,
    pub start_date: NaiveDate,
    pub position: String,
    pub work_schedule: String,
    pub department: String,
    pub work_location: String,
    pub bank_account: String,
    pub afp: String,
    pub eps: String,
    pub has_cts: bool,
    pub has_gratification: bool,
    pub has_vacation: bool,
}

/// Input of [`RegisterEmployee`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCommand {
    pub person: PersonFactoryParams,
    pub employment: EmploymentData,
}

/// Read model of a completed registration
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationResult {
    pub person_id: PersonId,
    pub person_type: PersonType,
    pub document_number: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub identity: PersonIdentity,
    pub employee_id: EmployeeId,
    pub salary: Decimal,
    pub contract_type: ContractType,
    pub start_date: NaiveDate,
    pub job: JobDetails,
    pub payroll: PayrollDetails,
    pub flags: BenefitFlags,
    pub benefits: Benefits,
    pub registered_at: DateTime<Utc>,
}

impl RegistrationResult {
    pub fn new(person: &PersonAggregate, employee: &Employee) -> Self {
        let base = person.person();
        Self {
            person_id: person.id(),
            person_type: base.person_type,
            document_number: person.document_number().to_string(),
            display_name: person.display_name(),
            email: base.email.as_str().to_string(),
            phone: base.phone.as_str().to_string(),
            address: base.address.clone(),
            country: base.country.clone(),
            identity: person.identity().clone(),
            employee_id: employee.id(),
            salary: employee.salary(),
            contract_type: employee.contract_type(),
            start_date: employee.start_date(),
            job: employee.job().clone(),
            payroll: employee.payroll().clone(),
            flags: employee.flags(),
            benefits: *employee.benefits(),
            registered_at: employee.created_at(),
        }
    }
}

/// Registers a person together with their employment record
pub struct RegisterEmployee<Tx: Send + 'static> {
    factories: Arc<PersonFactoryRegistry>,
    rules: Arc<dyn LaborRules>,
    persons: Arc<dyn PersonPort<Tx>>,
    employees: Arc<dyn EmployeePort<Tx>>,
    clock: Arc<dyn Clock>,
}

impl<Tx: Send + 'static> RegisterEmployee<Tx> {
    pub fn new(
        factories: Arc<PersonFactoryRegistry>,
        rules: Arc<dyn LaborRules>,
        persons: Arc<dyn PersonPort<Tx>>,
        employees: Arc<dyn EmployeePort<Tx>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            factories,
            rules,
            persons,
            employees,
            clock,
        }
    }

    fn build_employee(
        &self,
        person_id: PersonId,
        employment: EmploymentData,
    ) -> Result<Employee, UseCaseError> {
        EmployeeBuilder::new(
            person_id,
            employment.salary,
            employment.contract_type,
            employment.start_date,
        )
        .job_details(JobDetails::new(
            employment.position,
            employment.department,
            employment.work_schedule,
            employment.work_location,
        ))
        .payroll(PayrollDetails::new(
            employment.bank_account,
            employment.afp,
            employment.eps,
        ))
        .benefit_flags(BenefitFlags::new(
            employment.has_cts,
            employment.has_gratification,
            employment.has_vacation,
        ))
        .build(self.clock.as_ref())
        .map_err(|e| UseCaseError::at(Stage::BuildEmployee, e))
    }
}

impl<Tx: Send + 'static> std::fmt::Debug for RegisterEmployee<Tx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterEmployee")
            .field("factories", &self.factories)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<Tx: Send + 'static> UseCase<Tx> for RegisterEmployee<Tx> {
    type Input = RegistrationCommand;
    type Output = RegistrationResult;

    #[instrument(
        skip_all,
        fields(
            person_type = %input.person.person_type,
            jurisdiction = self.rules.jurisdiction(),
            transactional = tx.is_some(),
        )
    )]
    async fn execute(
        &self,
        mut tx: Option<&mut Tx>,
        input: RegistrationCommand,
    ) -> Result<RegistrationResult, UseCaseError> {
        let RegistrationCommand { person, employment } = input;

        let aggregate = self
            .factories
            .create_person(person, self.clock.as_ref())
            .map_err(|e| UseCaseError::at(Stage::CreatePerson, e))?;
        debug!(person_id = %aggregate.id(), "Person aggregate created");

        let mut employee = self.build_employee(aggregate.id(), employment)?;
        debug!(employee_id = %employee.id(), "Employee built");

        let facts = EmploymentFacts::from_clock(self.clock.as_ref());
        self.rules
            .validate_employee_registration(&employee, &facts)
            .map_err(|e| {
                warn!(error = %e, "Labor rule violated");
                UseCaseError::at(Stage::ValidateLaborRules, e)
            })?;

        let benefits = self
            .rules
            .calculate_benefits(&employee, &facts)
            .map_err(|e| UseCaseError::at(Stage::CalculateBenefits, e))?;
        employee.assign_benefits(benefits);

        self.persons
            .save_person(tx.as_deref_mut(), &aggregate)
            .await
            .map_err(|e| UseCaseError::at(Stage::PersistPerson, e))?;
        self.employees
            .save_employee(tx.as_deref_mut(), &employee)
            .await
            .map_err(|e| UseCaseError::at(Stage::PersistEmployee, e))?;

        info!(
            person_id = %aggregate.id(),
            employee_id = %employee.id(),
            "Employee registered"
        );
        Ok(RegistrationResult::new(&aggregate, &employee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ErrorKind, FixedClock};
    use domain_employee::ports::mock::MockEmployeePort;
    use domain_employee::PeruvianLaborRules;
    use domain_person::ports::mock::MockPersonPort;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn use_case(
        employees: Arc<MockEmployeePort<()>>,
    ) -> (RegisterEmployee<()>, Arc<MockPersonPort<()>>) {
        let persons: Arc<MockPersonPort<()>> = Arc::new(MockPersonPort::new());
        let use_case = RegisterEmployee::new(
            Arc::new(PersonFactoryRegistry::with_defaults()),
            Arc::new(PeruvianLaborRules::new()),
            persons.clone(),
            employees,
            Arc::new(FixedClock::at_date(today())),
        );
        (use_case, persons)
    }

    fn command(salary: Decimal) -> RegistrationCommand {
        RegistrationCommand {
            person: PersonFactoryParams {
                person_type: "NATURAL".to_string(),
                email: "ana@example.pe".to_string(),
                phone: "987654321".to_string(),
                address: "Av. Arequipa 1234".to_string(),
                country: "Peru".to_string(),
                document_number: "12345678".to_string(),
                first_name: Some("Ana".to_string()),
                last_name_paternal: Some("Torres".to_string()),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 15),
                gender: Some("F".to_string()),
                ..Default::default()
            },
            employment: EmploymentData {
                salary,
                contract_type: "fijo".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                position: "Analyst".to_string(),
                work_schedule: "Full-time".to_string(),
                department: "Finance".to_string(),
                work_location: "Lima".to_string(),
                bank_account: "191-1234567-0-12".to_string(),
                afp: "Prima AFP".to_string(),
                eps: "Rimac".to_string(),
                has_cts: true,
                has_gratification: true,
                has_vacation: true,
            },
        }
    }

    #[tokio::test]
    async fn test_registers_without_transaction() {
        let employees = Arc::new(MockEmployeePort::new());
        let (use_case, persons) = use_case(employees.clone());

        let result = use_case.execute(None, command(dec!(3000))).await.unwrap();

        assert_eq!(result.contract_type, ContractType::Fijo);
        assert_eq!(result.benefits.gratification(), dec!(3000));
        assert_eq!(persons.len().await, 1);
        assert!(employees.get(result.employee_id).await.is_some());
    }

    #[tokio::test]
    async fn test_legal_rule_stops_before_persistence() {
        let employees = Arc::new(MockEmployeePort::new());
        let (use_case, persons) = use_case(employees.clone());

        let err = use_case.execute(None, command(dec!(900))).await.unwrap_err();

        assert_eq!(err.stage(), Stage::ValidateLaborRules);
        assert_eq!(err.kind(), ErrorKind::LegalRuleViolation);
        assert!(persons.is_empty().await);
        assert!(employees.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_salary_fails_at_build() {
        let (use_case, _) = use_case(Arc::new(MockEmployeePort::new()));
        let err = use_case.execute(None, command(dec!(-1))).await.unwrap_err();
        assert_eq!(err.stage(), Stage::BuildEmployee);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_employee_save_failure_is_store_failure() {
        let (use_case, persons) = use_case(Arc::new(MockEmployeePort::failing()));
        let err = use_case.execute(None, command(dec!(3000))).await.unwrap_err();
        assert_eq!(err.stage(), Stage::PersistEmployee);
        assert_eq!(err.kind(), ErrorKind::StoreFailure);
        // without a transaction the person write is not undone
        assert_eq!(persons.len().await, 1);
    }
}
