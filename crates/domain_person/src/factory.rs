//! Polymorphic person construction
//!
//! A [`PersonFactoryRegistry`] maps each [`PersonType`] to the
//! [`PersonFactory`] that builds it. The registry is assembled once at
//! startup and shared; a type with no registered factory is a wiring mistake
//! and surfaces as a configuration error rather than a validation error.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::Clock;
use tracing::debug;

use crate::document::{Dni, Ruc};
use crate::error::PersonError;
use crate::person::{JuridicalPerson, NaturalPerson, Person, PersonAggregate, PersonIdentity};
use crate::validation::present;
use crate::value_objects::{Email, Gender, PersonType, Phone};

/// Raw input for building a person of any type
///
/// Variant-specific fields are `None` when not provided, so "absent" is never
/// confused with "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFactoryParams {
    pub person_type: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub document_number: String,

    // Natural
    pub first_name: Option<String>,
    pub last_name_paternal: Option<String>,
    pub last_name_maternal: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,

    // Juridical
    pub business_name: Option<String>,
    pub trade_name: Option<String>,
    pub constitution_date: Option<NaiveDate>,
    pub representative_name: Option<String>,
    pub representative_document: Option<String>,
}

/// Builds one variant of [`PersonAggregate`]
pub trait PersonFactory: Send + Sync {
    /// Whether this factory builds persons of `person_type`
    fn supports(&self, person_type: PersonType) -> bool;

    /// Builds and validates the aggregate in memory; never persists
    fn create(
        &self,
        params: PersonFactoryParams,
        clock: &dyn Clock,
    ) -> Result<PersonAggregate, PersonError>;
}

fn base_person(
    person_type: PersonType,
    params: &PersonFactoryParams,
    clock: &dyn Clock,
) -> Result<Person, PersonError> {
    let email = Email::parse(params.email.as_str())?;
    let phone = Phone::parse(params.phone.as_str())?;
    Person::new(
        person_type,
        email,
        phone,
        params.address.as_str(),
        params.country.as_str(),
        clock.now(),
    )
}

/// Factory for natural persons (DNI holders)
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalPersonFactory;

impl PersonFactory for NaturalPersonFactory {
    fn supports(&self, person_type: PersonType) -> bool {
        person_type == PersonType::Natural
    }

    fn create(
        &self,
        params: PersonFactoryParams,
        clock: &dyn Clock,
    ) -> Result<PersonAggregate, PersonError> {
        let person = base_person(PersonType::Natural, &params, clock)?;

        let document = Dni::parse(params.document_number)?;
        let first_name = present("first_name", params.first_name)?;
        let paternal = present("last_name_paternal", params.last_name_paternal)?;
        let birth_date = present("birth_date", params.birth_date)?;
        let gender: Gender = present("gender", params.gender)?.parse()?;
        let maternal = params.last_name_maternal.filter(|m| !m.trim().is_empty());

        let natural = NaturalPerson::new(
            person.id,
            document,
            first_name,
            paternal,
            maternal,
            birth_date,
            gender,
            clock.today(),
        )?;

        debug!(person_id = %person.id, "natural person built");
        PersonAggregate::new(person, PersonIdentity::Natural(natural))
    }
}

/// Factory for juridical persons (RUC holders)
#[derive(Debug, Clone, Copy, Default)]
pub struct JuridicalPersonFactory;

impl PersonFactory for JuridicalPersonFactory {
    fn supports(&self, person_type: PersonType) -> bool {
        person_type == PersonType::Juridical
    }

    fn create(
        &self,
        params: PersonFactoryParams,
        clock: &dyn Clock,
    ) -> Result<PersonAggregate, PersonError> {
        let person = base_person(PersonType::Juridical, &params, clock)?;

        let document = Ruc::parse(params.document_number)?;
        let juridical = JuridicalPerson::new(
            person.id,
            document,
            present("business_name", params.business_name)?,
            present("trade_name", params.trade_name)?,
            present("constitution_date", params.constitution_date)?,
            present("representative_name", params.representative_name)?,
            present("representative_document", params.representative_document)?,
            clock.today(),
        )?;

        debug!(person_id = %person.id, "juridical person built");
        PersonAggregate::new(person, PersonIdentity::Juridical(juridical))
    }
}

/// Maps person types to the factory that builds them
#[derive(Clone, Default)]
pub struct PersonFactoryRegistry {
    factories: HashMap<PersonType, Arc<dyn PersonFactory>>,
}

impl PersonFactoryRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the natural and juridical factories
    pub fn with_defaults() -> Self {
        let mut factories: HashMap<PersonType, Arc<dyn PersonFactory>> = HashMap::new();
        factories.insert(PersonType::Natural, Arc::new(NaturalPersonFactory));
        factories.insert(PersonType::Juridical, Arc::new(JuridicalPersonFactory));
        Self { factories }
    }

    /// Registers `factory` for `person_type`, replacing any previous entry
    ///
    /// # Errors
    ///
    /// [`PersonError::FactoryMismatch`] if the factory does not support the type.
    pub fn register(
        &mut self,
        person_type: PersonType,
        factory: Arc<dyn PersonFactory>,
    ) -> Result<(), PersonError> {
        if !factory.supports(person_type) {
            return Err(PersonError::FactoryMismatch(person_type.to_string()));
        }
        self.factories.insert(person_type, factory);
        Ok(())
    }

    pub fn supports(&self, person_type: PersonType) -> bool {
        self.factories.contains_key(&person_type)
    }

    /// Parses the requested type and delegates to its factory
    ///
    /// # Errors
    ///
    /// - [`PersonError::Validation`] when the type string is not a known type
    ///   or any field fails validation
    /// - [`PersonError::UnsupportedPersonType`] when no factory is registered
    pub fn create_person(
        &self,
        params: PersonFactoryParams,
        clock: &dyn Clock,
    ) -> Result<PersonAggregate, PersonError> {
        let person_type: PersonType = params.person_type.parse()?;
        let factory = self
            .factories
            .get(&person_type)
            .ok_or_else(|| PersonError::UnsupportedPersonType(person_type.to_string()))?;
        factory.create(params, clock)
    }
}

impl std::fmt::Debug for PersonFactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<_> = self.factories.keys().map(PersonType::as_str).collect();
        types.sort_unstable();
        f.debug_struct("PersonFactoryRegistry")
            .field("types", &types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Classify, ErrorKind, FixedClock};

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn juridical_params() -> PersonFactoryParams {
        PersonFactoryParams {
            person_type: "JURIDICAL".to_string(),
            email: "rrhh@andina.com.pe".to_string(),
            phone: "016543210".to_string(),
            address: "Av. Javier Prado 999".to_string(),
            country: "Peru".to_string(),
            document_number: "20123456789".to_string(),
            business_name: Some("Andina Servicios S.A.C.".to_string()),
            trade_name: Some("Andina".to_string()),
            constitution_date: NaiveDate::from_ymd_opt(2010, 5, 4),
            representative_name: Some("Carla Ruiz".to_string()),
            representative_document: Some("44556677".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_registry_reports_configuration_error() {
        let registry = PersonFactoryRegistry::new();
        let err = registry.create_person(juridical_params(), &clock()).unwrap_err();
        assert!(matches!(err, PersonError::UnsupportedPersonType(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_register_rejects_mismatched_factory() {
        let mut registry = PersonFactoryRegistry::new();
        let err = registry
            .register(PersonType::Natural, Arc::new(JuridicalPersonFactory))
            .unwrap_err();
        assert!(matches!(err, PersonError::FactoryMismatch(_)));
    }

    #[test]
    fn test_registered_factory_is_used() {
        let mut registry = PersonFactoryRegistry::new();
        registry
            .register(PersonType::Juridical, Arc::new(JuridicalPersonFactory))
            .unwrap();
        let aggregate = registry.create_person(juridical_params(), &clock()).unwrap();
        assert_eq!(aggregate.juridical().unwrap().trade_name, "Andina");
        assert!(!registry.supports(PersonType::Natural));
    }

    #[test]
    fn test_unknown_type_is_validation_error() {
        let registry = PersonFactoryRegistry::with_defaults();
        let params = PersonFactoryParams {
            person_type: "TRUST".to_string(),
            ..juridical_params()
        };
        let err = registry.create_person(params, &clock()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_missing_variant_field_is_reported() {
        let registry = PersonFactoryRegistry::with_defaults();
        let params = PersonFactoryParams {
            trade_name: None,
            ..juridical_params()
        };
        let err = registry.create_person(params, &clock()).unwrap_err();
        assert_eq!(err.field(), Some("trade_name"));
    }
}
