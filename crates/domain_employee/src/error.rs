//! Employment domain errors

use core_kernel::{Classify, ErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Labor regulations a registration can break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborRule {
    /// Salary must reach the statutory minimum wage
    MinimumWage,
    /// Indefinite contracts must have started at least the tenure window ago
    IndefiniteContractTenure,
}

impl fmt::Display for LaborRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaborRule::MinimumWage => f.write_str("minimum_wage"),
            LaborRule::IndefiniteContractTenure => f.write_str("indefinite_contract_tenure"),
        }
    }
}

/// Errors that can occur in the employment domain
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// A field failed a structural rule when building the employee
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The employee breaks a jurisdiction labor rule
    #[error("Labor rule {rule} violated: {message}")]
    LegalRule { rule: LaborRule, message: String },

    /// A benefit computation produced an impossible value
    #[error("Benefit policy error: {0}")]
    BenefitPolicy(String),

    /// No rules implementation exists for the configured jurisdiction
    #[error("Unsupported jurisdiction: {0}")]
    UnsupportedJurisdiction(String),
}

impl EmployeeError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        EmployeeError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        EmployeeError::invalid(field, "is required")
    }

    pub fn legal(rule: LaborRule, message: impl Into<String>) -> Self {
        EmployeeError::LegalRule {
            rule,
            message: message.into(),
        }
    }

    /// Violated labor rule, if this is a legal-rule error
    pub fn rule(&self) -> Option<LaborRule> {
        match self {
            EmployeeError::LegalRule { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            EmployeeError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl Classify for EmployeeError {
    fn kind(&self) -> ErrorKind {
        match self {
            EmployeeError::Validation { .. } => ErrorKind::Validation,
            EmployeeError::LegalRule { .. } => ErrorKind::LegalRuleViolation,
            EmployeeError::BenefitPolicy(_) | EmployeeError::UnsupportedJurisdiction(_) => {
                ErrorKind::Configuration
            }
        }
    }
}
