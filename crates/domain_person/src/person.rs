//! Person aggregate and its variants
//!
//! The base [`Person`] record carries contact data common to every person.
//! Exactly one variant payload accompanies it, wrapped in [`PersonIdentity`].
//! [`PersonAggregate::new`] is the only way to pair the two and rejects a
//! payload whose variant disagrees with `Person::person_type`.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::PersonId;
use serde::{Deserialize, Serialize};

use crate::document::{Dni, Ruc};
use crate::error::PersonError;
use crate::validation::{
    historical_date, max_len, required_text, ADDRESS_MAX, COUNTRY_MAX, ENTITY_NAME_MAX, NAME_MAX,
    REPRESENTATIVE_DOCUMENT_MAX,
};
use crate::value_objects::{Email, Gender, PersonType, Phone};

/// Base record shared by natural and juridical persons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Time-ordered identifier
    pub id: PersonId,
    pub person_type: PersonType,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Creates a new base record with a fresh identifier
    pub fn new(
        person_type: PersonType,
        email: Email,
        phone: Phone,
        address: impl Into<String>,
        country: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, PersonError> {
        let address = address.into();
        let country = country.into();
        required_text("address", &address, ADDRESS_MAX)?;
        required_text("country", &country, COUNTRY_MAX)?;

        Ok(Self {
            id: PersonId::new_v7(),
            person_type,
            email,
            phone,
            address,
            country,
            created_at: now,
            updated_at: now,
        })
    }
}

/// An individual identified by DNI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalPerson {
    pub person_id: PersonId,
    pub document_number: Dni,
    pub first_name: String,
    pub last_name_paternal: String,
    pub last_name_maternal: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

impl NaturalPerson {
    /// Validates and assembles the natural-person payload
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        person_id: PersonId,
        document_number: Dni,
        first_name: String,
        last_name_paternal: String,
        last_name_maternal: Option<String>,
        birth_date: NaiveDate,
        gender: Gender,
        today: NaiveDate,
    ) -> Result<Self, PersonError> {
        required_text("first_name", &first_name, NAME_MAX)?;
        required_text("last_name_paternal", &last_name_paternal, NAME_MAX)?;
        if let Some(maternal) = &last_name_maternal {
            max_len("last_name_maternal", maternal, NAME_MAX)?;
        }
        historical_date("birth_date", birth_date, today)?;

        Ok(Self {
            person_id,
            document_number,
            first_name,
            last_name_paternal,
            last_name_maternal,
            birth_date,
            gender,
        })
    }

    /// "First Paternal Maternal", omitting an absent maternal surname
    pub fn full_name(&self) -> String {
        match &self.last_name_maternal {
            Some(maternal) if !maternal.is_empty() => format!(
                "{} {} {}",
                self.first_name, self.last_name_paternal, maternal
            ),
            _ => format!("{} {}", self.first_name, self.last_name_paternal),
        }
    }
}

/// A legal entity identified by RUC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuridicalPerson {
    pub person_id: PersonId,
    pub document_number: Ruc,
    pub business_name: String,
    pub trade_name: String,
    pub constitution_date: NaiveDate,
    pub representative_name: String,
    pub representative_document: String,
}

impl JuridicalPerson {
    /// Validates and assembles the juridical-person payload
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        person_id: PersonId,
        document_number: Ruc,
        business_name: String,
        trade_name: String,
        constitution_date: NaiveDate,
        representative_name: String,
        representative_document: String,
        today: NaiveDate,
    ) -> Result<Self, PersonError> {
        required_text("business_name", &business_name, ENTITY_NAME_MAX)?;
        required_text("trade_name", &trade_name, ENTITY_NAME_MAX)?;
        historical_date("constitution_date", constitution_date, today)?;
        required_text("representative_name", &representative_name, ENTITY_NAME_MAX)?;
        required_text(
            "representative_document",
            &representative_document,
            REPRESENTATIVE_DOCUMENT_MAX,
        )?;

        Ok(Self {
            person_id,
            document_number,
            business_name,
            trade_name,
            constitution_date,
            representative_name,
            representative_document,
        })
    }
}

/// Variant payload of a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonIdentity {
    Natural(NaturalPerson),
    Juridical(JuridicalPerson),
}

impl PersonIdentity {
    pub fn person_type(&self) -> PersonType {
        match self {
            PersonIdentity::Natural(_) => PersonType::Natural,
            PersonIdentity::Juridical(_) => PersonType::Juridical,
        }
    }

    pub fn person_id(&self) -> PersonId {
        match self {
            PersonIdentity::Natural(natural) => natural.person_id,
            PersonIdentity::Juridical(juridical) => juridical.person_id,
        }
    }

    /// DNI or RUC, as stored
    pub fn document_number(&self) -> &str {
        match self {
            PersonIdentity::Natural(natural) => natural.document_number.as_str(),
            PersonIdentity::Juridical(juridical) => juridical.document_number.as_str(),
        }
    }
}

/// A person together with exactly one matching variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonAggregate {
    person: Person,
    identity: PersonIdentity,
}

impl PersonAggregate {
    /// Pairs a base record with its variant
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::TypeMismatch`] when the variant disagrees with
    /// `person.person_type` or belongs to a different person id.
    pub fn new(person: Person, identity: PersonIdentity) -> Result<Self, PersonError> {
        if identity.person_type() != person.person_type {
            return Err(PersonError::TypeMismatch {
                declared: person.person_type.to_string(),
                actual: identity.person_type().to_string(),
            });
        }
        if identity.person_id() != person.id {
            return Err(PersonError::TypeMismatch {
                declared: person.id.to_string(),
                actual: identity.person_id().to_string(),
            });
        }
        Ok(Self { person, identity })
    }

    pub fn id(&self) -> PersonId {
        self.person.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn identity(&self) -> &PersonIdentity {
        &self.identity
    }

    pub fn natural(&self) -> Option<&NaturalPerson> {
        match &self.identity {
            PersonIdentity::Natural(natural) => Some(natural),
            PersonIdentity::Juridical(_) => None,
        }
    }

    pub fn juridical(&self) -> Option<&JuridicalPerson> {
        match &self.identity {
            PersonIdentity::Juridical(juridical) => Some(juridical),
            PersonIdentity::Natural(_) => None,
        }
    }

    pub fn document_number(&self) -> &str {
        self.identity.document_number()
    }

    /// Name shown to users: full name or business name
    pub fn display_name(&self) -> String {
        match &self.identity {
            PersonIdentity::Natural(natural) => natural.full_name(),
            PersonIdentity::Juridical(juridical) => juridical.business_name.clone(),
        }
    }

    pub fn into_parts(self) -> (Person, PersonIdentity) {
        (self.person, self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn base(person_type: PersonType) -> Person {
        Person::new(
            person_type,
            Email::parse("contacto@example.pe").unwrap(),
            Phone::parse("014567890").unwrap(),
            "Jr. Lampa 456",
            "Peru",
            Utc::now(),
        )
        .unwrap()
    }

    fn natural_for(person_id: PersonId) -> NaturalPerson {
        NaturalPerson::new(
            person_id,
            Dni::parse("12345678").unwrap(),
            "Luis".to_string(),
            "Torres".to_string(),
            None,
            NaiveDate::from_ymd_opt(1985, 1, 20).unwrap(),
            Gender::Male,
            today(),
        )
        .unwrap()
    }

    #[test]
    fn test_aggregate_accepts_matching_variant() {
        let person = base(PersonType::Natural);
        let natural = natural_for(person.id);
        let aggregate = PersonAggregate::new(person, PersonIdentity::Natural(natural)).unwrap();
        assert!(aggregate.natural().is_some());
        assert!(aggregate.juridical().is_none());
        assert_eq!(aggregate.document_number(), "12345678");
        assert_eq!(aggregate.display_name(), "Luis Torres");
    }

    #[test]
    fn test_aggregate_rejects_mismatched_variant() {
        let person = base(PersonType::Juridical);
        let natural = natural_for(person.id);
        let err = PersonAggregate::new(person, PersonIdentity::Natural(natural)).unwrap_err();
        assert!(matches!(err, PersonError::TypeMismatch { .. }));
    }

    #[test]
    fn test_aggregate_rejects_foreign_person_id() {
        let person = base(PersonType::Natural);
        let natural = natural_for(PersonId::new_v7());
        assert!(PersonAggregate::new(person, PersonIdentity::Natural(natural)).is_err());
    }

    #[test]
    fn test_person_requires_address() {
        let result = Person::new(
            PersonType::Natural,
            Email::parse("a.b@example.pe").unwrap(),
            Phone::parse("987654321").unwrap(),
            "",
            "Peru",
            Utc::now(),
        );
        assert_eq!(result.unwrap_err().field(), Some("address"));
    }

    #[test]
    fn test_full_name_includes_maternal_surname() {
        let mut natural = natural_for(PersonId::new_v7());
        natural.last_name_maternal = Some("Vega".to_string());
        assert_eq!(natural.full_name(), "Luis Torres Vega");
    }
}
