//! Person Domain
//!
//! A person is either a natural person (an individual identified by a DNI)
//! or a juridical person (a legal entity identified by a RUC). Both share a
//! base [`Person`] record; the variant payload lives in [`PersonIdentity`].
//!
//! # Construction
//!
//! Persons are never built field by field. Raw input goes through a
//! [`PersonFactoryRegistry`], which dispatches on [`PersonType`] to the
//! factory registered for it and returns a validated [`PersonAggregate`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::FixedClock;
//! use domain_person::{PersonFactoryParams, PersonFactoryRegistry, PersonType};
//!
//! let registry = PersonFactoryRegistry::with_defaults();
//! let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//!
//! let params = PersonFactoryParams {
//!     person_type: "natural".to_string(),
//!     email: "ana.quispe@example.pe".to_string(),
//!     phone: "987654321".to_string(),
//!     address: "Av. Arequipa 123".to_string(),
//!     country: "Peru".to_string(),
//!     document_number: "12345678".to_string(),
//!     first_name: Some("Ana".to_string()),
//!     last_name_paternal: Some("Quispe".to_string()),
//!     birth_date: NaiveDate::from_ymd_opt(1990, 3, 14),
//!     gender: Some("F".to_string()),
//!     ..Default::default()
//! };
//!
//! let aggregate = registry.create_person(params, &clock).unwrap();
//! assert_eq!(aggregate.person().person_type, PersonType::Natural);
//! assert!(aggregate.juridical().is_none());
//! ```

pub mod document;
pub mod error;
pub mod factory;
pub mod person;
pub mod ports;
pub mod validation;
pub mod value_objects;

pub use document::{Dni, Ruc};
pub use error::PersonError;
pub use factory::{
    JuridicalPersonFactory, NaturalPersonFactory, PersonFactory, PersonFactoryParams,
    PersonFactoryRegistry,
};
pub use person::{JuridicalPerson, NaturalPerson, Person, PersonAggregate, PersonIdentity};
pub use ports::PersonPort;
pub use value_objects::{Email, Gender, PersonType, Phone};
