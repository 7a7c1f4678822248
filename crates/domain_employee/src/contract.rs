//! Contract types accepted for registration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EmployeeError;

/// Longest contract type code accepted as input
pub const CONTRACT_TYPE_MAX: usize = 30;

/// Employment contract modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    /// Open-ended contract
    Indefinido,
    /// Fixed-term contract
    Fijo,
    /// Internship agreement
    Practicante,
}

impl ContractType {
    pub fn code(&self) -> &'static str {
        match self {
            ContractType::Indefinido => "INDEFINIDO",
            ContractType::Fijo => "FIJO",
            ContractType::Practicante => "PRACTICANTE",
        }
    }
}

impl FromStr for ContractType {
    type Err = EmployeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmployeeError::required("contract_type"));
        }
        if trimmed.chars().count() > CONTRACT_TYPE_MAX {
            return Err(EmployeeError::invalid(
                "contract_type",
                format!("must be at most {} characters", CONTRACT_TYPE_MAX),
            ));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "INDEFINIDO" => Ok(ContractType::Indefinido),
            "FIJO" => Ok(ContractType::Fijo),
            "PRACTICANTE" => Ok(ContractType::Practicante),
            _ => Err(EmployeeError::invalid(
                "contract_type",
                format!("'{}' is not one of INDEFINIDO, FIJO, PRACTICANTE", trimmed),
            )),
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("indefinido".parse::<ContractType>().unwrap(), ContractType::Indefinido);
        assert_eq!(" Fijo ".parse::<ContractType>().unwrap(), ContractType::Fijo);
    }

    #[test]
    fn test_parse_rejects_unknown_and_long_codes() {
        assert!("TEMPORAL".parse::<ContractType>().is_err());
        let long = "X".repeat(CONTRACT_TYPE_MAX + 1);
        let err = long.parse::<ContractType>().unwrap_err();
        assert!(err.to_string().contains("at most"));
    }
}
