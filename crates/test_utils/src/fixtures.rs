//! Pre-built Test Fixtures
//!
//! Ready-to-use inputs for the person factories and a fixed calendar. All
//! fixture dates are relative to [`TemporalFixtures::today`], so tests that
//! use [`TemporalFixtures::clock`] are deterministic.

use chrono::{Days, NaiveDate};
use core_kernel::{FixedClock, PersonId};
use domain_person::PersonFactoryParams;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use once_cell::sync::Lazy;
use uuid::Uuid;

static TODAY: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid fixture date"));

/// Fixture for dates and clocks
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The fixed "today" of the test calendar (June 1, 2024)
    pub fn today() -> NaiveDate {
        *TODAY
    }

    /// A clock frozen at midnight of [`Self::today`]
    pub fn clock() -> FixedClock {
        FixedClock::at_date(Self::today())
    }

    pub fn days_ago(days: u64) -> NaiveDate {
        Self::today() - Days::new(days)
    }

    pub fn days_ahead(days: u64) -> NaiveDate {
        Self::today() + Days::new(days)
    }

    /// Birth date of an adult natural person
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 15).expect("valid fixture date")
    }

    /// Constitution date of a company
    pub fn constitution_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 3, 1).expect("valid fixture date")
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A deterministic person ID
    pub fn person_id() -> PersonId {
        PersonId::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001))
    }
}

/// Fixture for person factory parameters
pub struct PersonFixtures;

impl PersonFixtures {
    /// Valid parameters for a natural person holding `dni`
    pub fn natural(dni: &str) -> PersonFactoryParams {
        PersonFactoryParams {
            person_type: "NATURAL".to_string(),
            email: "ana.torres@example.pe".to_string(),
            phone: "987654321".to_string(),
            address: "Av. Arequipa 1234, Lima".to_string(),
            country: "Peru".to_string(),
            document_number: dni.to_string(),
            first_name: Some("Ana".to_string()),
            last_name_paternal: Some("Torres".to_string()),
            last_name_maternal: Some("Rojas".to_string()),
            birth_date: Some(TemporalFixtures::birth_date()),
            gender: Some("F".to_string()),
            ..Default::default()
        }
    }

    /// Valid parameters for a juridical person holding `ruc`
    pub fn juridical(ruc: &str) -> PersonFactoryParams {
        PersonFactoryParams {
            person_type: "JURIDICAL".to_string(),
            email: "contacto@andina.com.pe".to_string(),
            phone: "014567890".to_string(),
            address: "Calle Los Olivos 455, San Isidro".to_string(),
            country: "Peru".to_string(),
            document_number: ruc.to_string(),
            business_name: Some("Servicios Andinos S.A.C.".to_string()),
            trade_name: Some("Andina".to_string()),
            constitution_date: Some(TemporalFixtures::constitution_date()),
            representative_name: Some("Luis Mendoza".to_string()),
            representative_document: Some("40123456".to_string()),
            ..Default::default()
        }
    }

    /// A natural person with randomized email and names
    pub fn random_natural(dni: &str) -> PersonFactoryParams {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        PersonFactoryParams {
            email: SafeEmail().fake(),
            first_name: Some(first_name),
            last_name_paternal: Some(last_name),
            last_name_maternal: None,
            ..Self::natural(dni)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_person::PersonFactoryRegistry;

    #[test]
    fn test_fixtures_build_valid_persons() {
        let registry = PersonFactoryRegistry::with_defaults();
        let clock = TemporalFixtures::clock();

        assert!(registry
            .create_person(PersonFixtures::natural("12345678"), &clock)
            .is_ok());
        assert!(registry
            .create_person(PersonFixtures::juridical("20123456789"), &clock)
            .is_ok());
        assert!(registry
            .create_person(PersonFixtures::random_natural("87654321"), &clock)
            .is_ok());
    }

    #[test]
    fn test_relative_dates() {
        assert_eq!(
            TemporalFixtures::days_ago(40),
            NaiveDate::from_ymd_opt(2024, 4, 22).unwrap()
        );
        assert!(TemporalFixtures::days_ahead(1) > TemporalFixtures::today());
    }
}
