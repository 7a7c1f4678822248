//! Peruvian labor rules
//!
//! - Minimum wage (remuneración mínima vital): S/ 1,130 by default
//! - INDEFINIDO contracts must have started at least 30 days before registration
//! - CTS: `(salary + salary / 6) / 12` when eligible
//! - Gratification: one monthly salary when eligible
//! - Vacation: from the configured [`VacationPolicy`], flat 30 days by default

use std::sync::Arc;

use chrono::Days;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::benefits::Benefits;
use crate::contract::ContractType;
use crate::employee::Employee;
use crate::error::{EmployeeError, LaborRule};
use crate::labor::{EmploymentFacts, LaborRules, LaborRulesConfig};
use crate::vacation::{FlatVacationPolicy, VacationPolicy};

#[derive(Debug, Clone)]
pub struct PeruvianLaborRules {
    minimum_wage: Decimal,
    indefinite_min_tenure_days: u32,
    vacation: Arc<dyn VacationPolicy>,
}

impl PeruvianLaborRules {
    pub fn new() -> Self {
        Self {
            minimum_wage: dec!(1130),
            indefinite_min_tenure_days: 30,
            vacation: Arc::new(FlatVacationPolicy::default()),
        }
    }

    pub fn from_config(config: &LaborRulesConfig) -> Self {
        Self {
            minimum_wage: config.minimum_wage,
            indefinite_min_tenure_days: config.indefinite_min_tenure_days,
            vacation: config.vacation.build(),
        }
    }

    pub fn with_minimum_wage(mut self, minimum_wage: Decimal) -> Self {
        self.minimum_wage = minimum_wage;
        self
    }

    pub fn with_vacation_policy(mut self, policy: Arc<dyn VacationPolicy>) -> Self {
        self.vacation = policy;
        self
    }

    pub fn minimum_wage(&self) -> Decimal {
        self.minimum_wage
    }

    fn cts(salary: Decimal) -> Result<Decimal, EmployeeError> {
        salary
            .checked_div(dec!(6))
            .and_then(|sixth| salary.checked_add(sixth))
            .and_then(|base| base.checked_div(dec!(12)))
            .ok_or_else(|| {
                EmployeeError::BenefitPolicy(format!("CTS overflows for salary {}", salary))
            })
    }

    fn gratification(salary: Decimal) -> Decimal {
        salary
    }
}

impl Default for PeruvianLaborRules {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(component: &str, value: Decimal) -> Result<Decimal, EmployeeError> {
    if value < Decimal::ZERO {
        return Err(EmployeeError::BenefitPolicy(format!(
            "{} computed as {}, must not be negative",
            component, value
        )));
    }
    Ok(value)
}

impl LaborRules for PeruvianLaborRules {
    fn jurisdiction(&self) -> &'static str {
        "PE"
    }

    fn validate_employee_registration(
        &self,
        employee: &Employee,
        facts: &EmploymentFacts,
    ) -> Result<(), EmployeeError> {
        if employee.salary() < self.minimum_wage {
            return Err(EmployeeError::legal(
                LaborRule::MinimumWage,
                format!(
                    "salary {} is below the minimum wage of S/ {}",
                    employee.salary(),
                    self.minimum_wage
                ),
            ));
        }

        if employee.contract_type() == ContractType::Indefinido {
            let latest_start = facts
                .as_of
                .checked_sub_days(Days::new(u64::from(self.indefinite_min_tenure_days)))
                .unwrap_or(chrono::NaiveDate::MIN);
            if employee.start_date() > latest_start {
                return Err(EmployeeError::legal(
                    LaborRule::IndefiniteContractTenure,
                    format!(
                        "an INDEFINIDO contract must have started at least {} days before {}",
                        self.indefinite_min_tenure_days, facts.as_of
                    ),
                ));
            }
        }

        Ok(())
    }

    fn calculate_benefits(
        &self,
        employee: &Employee,
        facts: &EmploymentFacts,
    ) -> Result<Benefits, EmployeeError> {
        let flags = employee.flags();
        let salary = employee.salary();

        let cts = if flags.has_cts {
            non_negative("CTS", Self::cts(salary)?)?
        } else {
            Decimal::ZERO
        };
        let gratification = if flags.has_gratification {
            non_negative("gratification", Self::gratification(salary))?
        } else {
            Decimal::ZERO
        };
        let vacation_days = self
            .vacation
            .vacation_days(employee.start_date(), facts.as_of);

        debug!(
            employee_id = %employee.id(),
            %cts,
            %gratification,
            vacation_days,
            "benefits calculated"
        );
        Benefits::new(cts, gratification, vacation_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cts_formula() {
        let cts = PeruvianLaborRules::cts(dec!(1200)).unwrap();
        assert!((cts - dec!(116.67)).abs() < dec!(0.01));
    }

    #[test]
    fn test_cts_overflow_is_benefit_policy_error() {
        let err = PeruvianLaborRules::cts(Decimal::MAX).unwrap_err();
        assert!(matches!(err, EmployeeError::BenefitPolicy(_)));
    }

    #[test]
    fn test_negative_component_is_reported() {
        let err = non_negative("CTS", dec!(-1)).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
        assert_eq!(non_negative("CTS", dec!(0)).unwrap(), Decimal::ZERO);
    }
}
