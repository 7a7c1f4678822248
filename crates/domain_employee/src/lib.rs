//! Employment Domain
//!
//! This crate owns the employee record and the labor rules applied to it:
//!
//! - [`Employee`] built through the staged [`EmployeeBuilder`]
//! - [`Benefits`], the computed CTS, gratification and vacation entitlement
//! - [`LaborRules`], one implementation per jurisdiction, selected at startup
//!   from [`LaborRulesConfig`]
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::{FixedClock, PersonId};
//! use domain_employee::{BenefitFlags, EmployeeBuilder, JobDetails, PayrollDetails};
//! use rust_decimal_macros::dec;
//!
//! let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//! let employee = EmployeeBuilder::new(
//!     PersonId::new_v7(),
//!     dec!(5000),
//!     "INDEFINIDO",
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//! )
//! .job_details(JobDetails::new("Analyst", "Finance", "Full-time", "Lima"))
//! .payroll(PayrollDetails::new("191-1234567-0-12", "Prima AFP", "Rimac"))
//! .benefit_flags(BenefitFlags::all())
//! .build(&clock)
//! .unwrap();
//!
//! assert!(employee.benefits().is_zero());
//! ```

pub mod benefits;
pub mod contract;
pub mod employee;
pub mod error;
pub mod labor;
pub mod peru;
pub mod ports;
pub mod vacation;

pub use benefits::Benefits;
pub use contract::ContractType;
pub use employee::{
    BenefitFlags, Employee, EmployeeBuilder, JobDetails, PayrollDetails, SALARY_MAX, SALARY_SCALE,
};
pub use error::{EmployeeError, LaborRule};
pub use labor::{build_labor_rules, EmploymentFacts, LaborRules, LaborRulesConfig, VacationPolicyConfig};
pub use peru::PeruvianLaborRules;
pub use ports::EmployeePort;
pub use vacation::{FlatVacationPolicy, TenureVacationPolicy, VacationPolicy};
