//! Employee entity and its staged builder
//!
//! An [`Employee`] references its person by id only. Once built, the only
//! mutation allowed is [`Employee::assign_benefits`].

use chrono::{DateTime, Months, NaiveDate, Utc};
use core_kernel::temporal::within;
use core_kernel::{Clock, EmployeeId, PersonId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::benefits::Benefits;
use crate::contract::ContractType;
use crate::error::EmployeeError;

const POSITION_MAX: usize = 50;
const DEPARTMENT_MAX: usize = 50;
const WORK_SCHEDULE_MAX: usize = 30;
const WORK_LOCATION_MAX: usize = 100;
const BANK_ACCOUNT_MAX: usize = 30;
const AFP_MAX: usize = 30;
const EPS_MAX: usize = 50;

/// Largest salary the `employees.salary NUMERIC(12,2)` column holds
pub const SALARY_MAX: Decimal = dec!(9999999999.99);
/// Salaries carry at most cents
pub const SALARY_SCALE: u32 = 2;

/// Earliest accepted contract start date
pub fn earliest_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Where and when the employee works
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub position: String,
    pub department: String,
    pub work_schedule: String,
    pub work_location: String,
}

impl JobDetails {
    pub fn new(
        position: impl Into<String>,
        department: impl Into<String>,
        work_schedule: impl Into<String>,
        work_location: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            department: department.into(),
            work_schedule: work_schedule.into(),
            work_location: work_location.into(),
        }
    }
}

/// Payroll routing: bank account, pension fund (AFP) and health provider (EPS)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDetails {
    pub bank_account: String,
    pub afp: String,
    pub eps: String,
}

impl PayrollDetails {
    pub fn new(
        bank_account: impl Into<String>,
        afp: impl Into<String>,
        eps: impl Into<String>,
    ) -> Self {
        Self {
            bank_account: bank_account.into(),
            afp: afp.into(),
            eps: eps.into(),
        }
    }
}

/// Which statutory benefits the employee is eligible for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitFlags {
    pub has_cts: bool,
    pub has_gratification: bool,
    pub has_vacation: bool,
}

impl BenefitFlags {
    pub fn new(has_cts: bool, has_gratification: bool, has_vacation: bool) -> Self {
        Self {
            has_cts,
            has_gratification,
            has_vacation,
        }
    }

    /// Eligible for every benefit
    pub fn all() -> Self {
        Self::new(true, true, true)
    }
}

/// An employment record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    person_id: PersonId,
    salary: Decimal,
    contract_type: ContractType,
    start_date: NaiveDate,
    job: JobDetails,
    payroll: PayrollDetails,
    flags: BenefitFlags,
    benefits: Benefits,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn job(&self) -> &JobDetails {
        &self.job
    }

    pub fn payroll(&self) -> &PayrollDetails {
        &self.payroll
    }

    pub fn flags(&self) -> BenefitFlags {
        self.flags
    }

    pub fn benefits(&self) -> &Benefits {
        &self.benefits
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Attaches the benefits computed by the labor rules
    pub fn assign_benefits(&mut self, benefits: Benefits) {
        self.benefits = benefits;
    }
}

/// Builder for [`Employee`]
///
/// The four mandatory values are taken up front; job, payroll and benefit
/// eligibility are configured in groups before [`EmployeeBuilder::build`]
/// validates everything.
///
/// ```rust,ignore
/// let employee = EmployeeBuilder::new(person_id, dec!(3500), "FIJO", start)
///     .job_details(job)
///     .payroll(payroll)
///     .benefit_flags(BenefitFlags::all())
///     .build(&clock)?;
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeBuilder {
    person_id: PersonId,
    salary: Decimal,
    contract_type: String,
    start_date: NaiveDate,
    job: JobDetails,
    payroll: PayrollDetails,
    flags: BenefitFlags,
}

impl EmployeeBuilder {
    pub fn new(
        person_id: PersonId,
        salary: Decimal,
        contract_type: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            person_id,
            salary,
            contract_type: contract_type.into(),
            start_date,
            job: JobDetails::default(),
            payroll: PayrollDetails::default(),
            flags: BenefitFlags::default(),
        }
    }

    /// Sets position, department, schedule and location
    pub fn job_details(mut self, job: JobDetails) -> Self {
        self.job = job;
        self
    }

    /// Sets bank account, AFP and EPS
    pub fn payroll(mut self, payroll: PayrollDetails) -> Self {
        self.payroll = payroll;
        self
    }

    /// Sets benefit eligibility
    pub fn benefit_flags(mut self, flags: BenefitFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builds the employee
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeError::Validation`] naming the first rule violated,
    /// checked in this order: person, salary, contract type, job details,
    /// payroll details, start date.
    pub fn build(self, clock: &dyn Clock) -> Result<Employee, EmployeeError> {
        if self.person_id.as_uuid().is_nil() {
            return Err(EmployeeError::required("person_id"));
        }
        if self.salary <= Decimal::ZERO {
            return Err(EmployeeError::invalid(
                "salary",
                format!("must be greater than 0, got {}", self.salary),
            ));
        }
        if self.salary > SALARY_MAX {
            return Err(EmployeeError::invalid(
                "salary",
                format!("must be at most {}, got {}", SALARY_MAX, self.salary),
            ));
        }
        if self.salary.normalize().scale() > SALARY_SCALE {
            return Err(EmployeeError::invalid(
                "salary",
                format!(
                    "must have at most {} decimal places, got {}",
                    SALARY_SCALE, self.salary
                ),
            ));
        }
        let contract_type: ContractType = self.contract_type.parse()?;

        required("position", &self.job.position, POSITION_MAX)?;
        required("department", &self.job.department, DEPARTMENT_MAX)?;
        required("work_schedule", &self.job.work_schedule, WORK_SCHEDULE_MAX)?;
        required("work_location", &self.job.work_location, WORK_LOCATION_MAX)?;
        required("bank_account", &self.payroll.bank_account, BANK_ACCOUNT_MAX)?;
        required("afp", &self.payroll.afp, AFP_MAX)?;
        required("eps", &self.payroll.eps, EPS_MAX)?;

        let today = clock.today();
        let latest = today
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        if !within(self.start_date, earliest_start_date(), latest) {
            return Err(EmployeeError::invalid(
                "start_date",
                format!(
                    "{} must be between {} and {}",
                    self.start_date,
                    earliest_start_date(),
                    latest
                ),
            ));
        }

        let now = clock.now();
        Ok(Employee {
            id: EmployeeId::new_v7(),
            person_id: self.person_id,
            salary: self.salary,
            contract_type,
            start_date: self.start_date,
            job: self.job,
            payroll: self.payroll,
            flags: self.flags,
            benefits: Benefits::ZERO,
            created_at: now,
            updated_at: now,
        })
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), EmployeeError> {
    if value.trim().is_empty() {
        return Err(EmployeeError::required(field));
    }
    if value.chars().count() > max {
        return Err(EmployeeError::invalid(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(())
}
