//! Test Data Builders
//!
//! Builds employees with sensible defaults so tests only spell out the
//! fields they care about.

use chrono::NaiveDate;
use core_kernel::{Clock, PersonId};
use domain_employee::{
    BenefitFlags, Employee, EmployeeBuilder, EmployeeError, JobDetails, PayrollDetails,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{IdFixtures, TemporalFixtures};

/// Builder for constructing test employees
#[derive(Debug, Clone)]
pub struct TestEmployeeBuilder {
    person_id: PersonId,
    salary: Decimal,
    contract_type: String,
    start_date: NaiveDate,
    job: JobDetails,
    payroll: PayrollDetails,
    flags: BenefitFlags,
}

impl Default for TestEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEmployeeBuilder {
    /// A FIJO contract at 5000 starting 40 days before the fixture date
    pub fn new() -> Self {
        Self {
            person_id: IdFixtures::person_id(),
            salary: dec!(5000),
            contract_type: "FIJO".to_string(),
            start_date: TemporalFixtures::days_ago(40),
            job: JobDetails::new("Software Engineer", "Technology", "Full-time", "Lima"),
            payroll: PayrollDetails::new("191-1234567-0-12", "Prima AFP", "Rimac"),
            flags: BenefitFlags::all(),
        }
    }

    pub fn with_person_id(mut self, person_id: PersonId) -> Self {
        self.person_id = person_id;
        self
    }

    pub fn with_salary(mut self, salary: Decimal) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_contract_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = contract_type.into();
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_job(mut self, job: JobDetails) -> Self {
        self.job = job;
        self
    }

    pub fn with_payroll(mut self, payroll: PayrollDetails) -> Self {
        self.payroll = payroll;
        self
    }

    pub fn with_flags(mut self, flags: BenefitFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Runs the real builder against `clock`
    pub fn try_build(self, clock: &dyn Clock) -> Result<Employee, EmployeeError> {
        EmployeeBuilder::new(self.person_id, self.salary, self.contract_type, self.start_date)
            .job_details(self.job)
            .payroll(self.payroll)
            .benefit_flags(self.flags)
            .build(clock)
    }

    /// Builds against the fixture clock
    ///
    /// # Panics
    ///
    /// Panics if the configured fields are invalid
    pub fn build(self) -> Employee {
        self.try_build(&TemporalFixtures::clock())
            .expect("test employee should be valid")
    }
}
