//! Jurisdiction labor rules
//!
//! Each jurisdiction is its own [`LaborRules`] implementation; rules and
//! formulas are carried as data on that implementation. The implementation
//! is chosen once at startup by [`build_labor_rules`].

use std::fmt::Debug;
use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::Clock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::benefits::Benefits;
use crate::employee::Employee;
use crate::error::EmployeeError;
use crate::peru::PeruvianLaborRules;
use crate::vacation::{FlatVacationPolicy, TenureVacationPolicy, VacationPolicy};

/// Facts about the registration that are not part of the employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmploymentFacts {
    /// Date the registration is evaluated on
    pub as_of: NaiveDate,
}

impl EmploymentFacts {
    pub fn as_of(date: NaiveDate) -> Self {
        Self { as_of: date }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::as_of(clock.today())
    }
}

/// Labor regulations of one jurisdiction
pub trait LaborRules: Send + Sync + Debug {
    /// ISO 3166-1 alpha-2 code of the jurisdiction
    fn jurisdiction(&self) -> &'static str;

    /// Checks the employee against the jurisdiction's legal rules
    ///
    /// # Errors
    ///
    /// [`EmployeeError::LegalRule`] naming the first rule broken.
    fn validate_employee_registration(
        &self,
        employee: &Employee,
        facts: &EmploymentFacts,
    ) -> Result<(), EmployeeError>;

    /// Computes the benefits the employee is entitled to
    ///
    /// # Errors
    ///
    /// [`EmployeeError::BenefitPolicy`] if any component would be negative.
    fn calculate_benefits(
        &self,
        employee: &Employee,
        facts: &EmploymentFacts,
    ) -> Result<Benefits, EmployeeError>;
}

/// Vacation policy selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum VacationPolicyConfig {
    Flat { days: i32 },
    Tenure { days_per_year: i32 },
}

impl Default for VacationPolicyConfig {
    fn default() -> Self {
        VacationPolicyConfig::Flat { days: 30 }
    }
}

impl VacationPolicyConfig {
    pub fn build(&self) -> Arc<dyn VacationPolicy> {
        match *self {
            VacationPolicyConfig::Flat { days } => Arc::new(FlatVacationPolicy { days }),
            VacationPolicyConfig::Tenure { days_per_year } => {
                Arc::new(TenureVacationPolicy { days_per_year })
            }
        }
    }
}

/// Startup configuration for labor rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborRulesConfig {
    /// Jurisdiction code, e.g. "PE"
    pub jurisdiction: String,
    /// Monthly minimum wage in local currency
    pub minimum_wage: Decimal,
    /// Days an indefinite contract must have run before registration
    pub indefinite_min_tenure_days: u32,
    pub vacation: VacationPolicyConfig,
}

impl Default for LaborRulesConfig {
    fn default() -> Self {
        Self {
            jurisdiction: "PE".to_string(),
            minimum_wage: dec!(1130),
            indefinite_min_tenure_days: 30,
            vacation: VacationPolicyConfig::default(),
        }
    }
}

/// Selects the rules implementation for the configured jurisdiction
///
/// # Errors
///
/// [`EmployeeError::UnsupportedJurisdiction`] for an unknown code.
pub fn build_labor_rules(config: &LaborRulesConfig) -> Result<Arc<dyn LaborRules>, EmployeeError> {
    match config.jurisdiction.trim().to_ascii_uppercase().as_str() {
        "PE" => Ok(Arc::new(PeruvianLaborRules::from_config(config))),
        other => Err(EmployeeError::UnsupportedJurisdiction(other.to_string())),
    }
}
