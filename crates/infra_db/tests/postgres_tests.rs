//! PostgreSQL adapter tests
//!
//! These start a PostgreSQL container and are ignored by default:
//! `cargo test -p infra_db -- --ignored`

use chrono::{Duration, TimeZone, Utc};
use core_kernel::{FixedClock, PortError, Store};
use domain_employee::{EmployeePort, SALARY_MAX};
use domain_person::{PersonAggregate, PersonFactoryRegistry, PersonPort};
use infra_db::{PostgresEmployeeAdapter, PostgresPersonAdapter, PostgresStore};
use test_utils::{create_isolated_test_database, PersonFixtures, TemporalFixtures, TestEmployeeBuilder};

fn build(params: domain_person::PersonFactoryParams) -> PersonAggregate {
    PersonFactoryRegistry::with_defaults()
        .create_person(params, &TemporalFixtures::clock())
        .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_natural_person_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresPersonAdapter::new(db.pool().clone());
    let person = build(PersonFixtures::natural("12345678"));

    adapter.save_person(None, &person).await.unwrap();
    let loaded = adapter.get_person(None, person.id()).await.unwrap();

    assert_eq!(loaded, person);
    assert!(loaded.juridical().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_round_trip_keeps_sub_second_timestamps() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresPersonAdapter::new(db.pool().clone());
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 15, 30).unwrap() + Duration::nanoseconds(123_456_789);
    let person = PersonFactoryRegistry::with_defaults()
        .create_person(PersonFixtures::natural("12345678"), &FixedClock::new(at))
        .unwrap();

    adapter.save_person(None, &person).await.unwrap();
    let loaded = adapter.get_person(None, person.id()).await.unwrap();

    assert_eq!(loaded, person);
    assert_eq!(loaded.person().created_at, person.person().created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_largest_salary_fits_the_column() {
    let db = create_isolated_test_database().await.unwrap();
    let persons = PostgresPersonAdapter::new(db.pool().clone());
    let employees = PostgresEmployeeAdapter::new(db.pool().clone());
    let person = build(PersonFixtures::natural("12345678"));
    let employee = TestEmployeeBuilder::new()
        .with_person_id(person.id())
        .with_salary(SALARY_MAX)
        .build();

    persons.save_person(None, &person).await.unwrap();
    employees.save_employee(None, &employee).await.unwrap();

    assert_eq!(db.count_rows("employees").await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_juridical_person_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresPersonAdapter::new(db.pool().clone());
    let person = build(PersonFixtures::juridical("20123456789"));

    adapter.save_person(None, &person).await.unwrap();
    let loaded = adapter.get_person(None, person.id()).await.unwrap();

    assert_eq!(loaded, person);
    assert!(loaded.natural().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_document_is_conflict() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresPersonAdapter::new(db.pool().clone());

    adapter
        .save_person(None, &build(PersonFixtures::natural("12345678")))
        .await
        .unwrap();
    let err = adapter
        .save_person(None, &build(PersonFixtures::natural("12345678")))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    // the base row of the rejected person was not kept
    assert_eq!(db.count_rows("persons").await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_employee_without_person_is_rejected() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresEmployeeAdapter::new(db.pool().clone());

    let err = adapter
        .save_employee(None, &TestEmployeeBuilder::new().build())
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::Validation { .. }));
    assert_eq!(db.count_rows("employees").await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_rollback_discards_both_rows() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresStore::new(db.pool().clone());
    let persons = PostgresPersonAdapter::new(db.pool().clone());
    let employees = PostgresEmployeeAdapter::new(db.pool().clone());
    let person = build(PersonFixtures::natural("12345678"));
    let employee = TestEmployeeBuilder::new().with_person_id(person.id()).build();

    let mut tx = store.begin().await.unwrap();
    persons.save_person(Some(&mut tx), &person).await.unwrap();
    employees.save_employee(Some(&mut tx), &employee).await.unwrap();
    store.rollback(tx).await.unwrap();

    assert_eq!(db.total_rows().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_commit_persists_person_and_employee() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresStore::new(db.pool().clone());
    let persons = PostgresPersonAdapter::new(db.pool().clone());
    let employees = PostgresEmployeeAdapter::new(db.pool().clone());
    let person = build(PersonFixtures::juridical("20123456789"));
    let employee = TestEmployeeBuilder::new().with_person_id(person.id()).build();

    let mut tx = store.begin().await.unwrap();
    persons.save_person(Some(&mut tx), &person).await.unwrap();
    employees.save_employee(Some(&mut tx), &employee).await.unwrap();
    store.commit(tx).await.unwrap();

    assert_eq!(db.count_rows("persons").await.unwrap(), 1);
    assert_eq!(db.count_rows("juridical_persons").await.unwrap(), 1);
    assert_eq!(db.count_rows("employees").await.unwrap(), 1);
}
