//! Self-validating primitives shared by both person variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

use crate::error::PersonError;

/// RFC-validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, PersonError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        // validator accepts dotless hosts; registrations require a TLD
        let has_tld = trimmed
            .rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit_once('.'))
            .is_some_and(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

        if !trimmed.validate_email() || !has_tld {
            return Err(PersonError::invalid("email", format!("'{}' is not a valid address", raw)));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = PersonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number, between 6 and 20 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MIN_LEN: usize = 6;
    pub const MAX_LEN: usize = 20;

    pub fn parse(raw: impl Into<String>) -> Result<Self, PersonError> {
        let raw = raw.into();
        let len = raw.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(PersonError::invalid(
                "phone",
                format!(
                    "must be between {} and {} characters, got {}",
                    Self::MIN_LEN,
                    Self::MAX_LEN,
                    len
                ),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PersonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of person variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    /// An individual, identified by DNI
    Natural,
    /// A legal entity, identified by RUC
    Juridical,
}

impl PersonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Natural => "NATURAL",
            PersonType::Juridical => "JURIDICAL",
        }
    }
}

impl FromStr for PersonType {
    type Err = PersonError;

    /// Accepts any casing and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NATURAL" => Ok(PersonType::Natural),
            "JURIDICAL" => Ok(PersonType::Juridical),
            _ => Err(PersonError::invalid(
                "type",
                format!("'{}' is not NATURAL or JURIDICAL", s),
            )),
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender of a natural person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }
}

impl FromStr for Gender {
    type Err = PersonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            "O" => Ok(Gender::Other),
            other => Err(PersonError::invalid(
                "gender",
                format!("'{}' must be one of M, F, O", other),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
