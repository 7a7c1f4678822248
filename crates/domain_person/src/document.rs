//! Peruvian identity documents
//!
//! A DNI identifies a natural person and is exactly 8 digits. A RUC
//! identifies a taxpayer entity and is exactly 11 digits. Neither accepts
//! separators or surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PersonError;

fn exact_digits(field: &'static str, raw: &str, len: usize) -> Result<(), PersonError> {
    if raw.len() != len {
        return Err(PersonError::invalid(
            field,
            format!("must have exactly {} digits, got {}", len, raw.chars().count()),
        ));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PersonError::invalid(field, "must contain only digits"));
    }
    Ok(())
}

/// Documento Nacional de Identidad
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dni(String);

impl Dni {
    pub const LEN: usize = 8;

    pub fn parse(raw: impl Into<String>) -> Result<Self, PersonError> {
        let raw = raw.into();
        exact_digits("document_number", &raw, Self::LEN)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registro Único de Contribuyentes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ruc(String);

impl Ruc {
    pub const LEN: usize = 11;

    pub fn parse(raw: impl Into<String>) -> Result<Self, PersonError> {
        let raw = raw.into();
        exact_digits("document_number", &raw, Self::LEN)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! document_conversions {
    ($name:ident) => {
        impl TryFrom<String> for $name {
            type Error = PersonError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $name::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(doc: $name) -> String {
                doc.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

document_conversions!(Dni);
document_conversions!(Ruc);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dni_requires_eight_digits() {
        assert!(Dni::parse("12345678").is_ok());
        assert!(Dni::parse("1234567").is_err());
        assert!(Dni::parse("123456789").is_err());
        assert!(Dni::parse("1234567a").is_err());
    }

    #[test]
    fn test_ruc_requires_eleven_digits() {
        assert!(Ruc::parse("20123456789").is_ok());
        assert!(Ruc::parse("2012345678").is_err());
        assert!(Ruc::parse("20123-56789").is_err());
    }

    #[test]
    fn test_document_error_names_field() {
        let err = Dni::parse("abc").unwrap_err();
        assert_eq!(err.field(), Some("document_number"));
    }
}
