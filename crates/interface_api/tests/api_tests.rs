//! HTTP tests for the registration API over the in-memory store

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_employee::LaborRulesConfig;
use infra_db::MemoryStore;
use interface_api::{create_router, registrar::memory_registrar, AppState};
use test_utils::TemporalFixtures;

fn app_with(store: &MemoryStore, timeout: Duration) -> Router {
    let registrar = memory_registrar(
        store,
        &LaborRulesConfig::default(),
        Arc::new(TemporalFixtures::clock()),
    )
    .unwrap();
    create_router(AppState::new(registrar, timeout))
}

fn app(store: &MemoryStore) -> Router {
    app_with(store, Duration::from_secs(5))
}

fn natural_request(dni: &str, salary: &str) -> Value {
    json!({
        "person": {
            "type": "NATURAL",
            "email": "ana.torres@example.pe",
            "phone": "987654321",
            "address": "Av. Arequipa 1234, Lima",
            "country": "Peru",
            "documentNumber": dni,
            "firstName": "Ana",
            "lastNamePaternal": "Torres",
            "lastNameMaternal": "Rojas",
            "birthDate": TemporalFixtures::birth_date(),
            "gender": "F"
        },
        "employment": {
            "salary": salary,
            "contractType": "INDEFINIDO",
            "startDate": TemporalFixtures::days_ago(40),
            "position": "Analyst",
            "workSchedule": "Full-time",
            "department": "Finance",
            "workLocation": "Lima",
            "bankAccount": "191-1234567-0-12",
            "afp": "Integra",
            "eps": "Rimac",
            "hasCTS": true,
            "hasGratification": true,
            "hasVacation": true
        }
    })
}

async fn post(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/employees")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_register_returns_created() {
    let store = MemoryStore::new();
    let (status, body) = post(app(&store), natural_request("12345678", "5000").to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");

    let person = &body["data"]["person"];
    assert_eq!(person["type"], "NATURAL");
    assert_eq!(person["documentNumber"], "12345678");
    assert_eq!(person["displayName"], "Ana Torres Rojas");
    assert!(person.get("businessName").is_none());

    let employment = &body["data"]["employment"];
    assert_eq!(employment["personId"], person["id"]);
    assert_eq!(employment["contractType"], "INDEFINIDO");
    assert_eq!(employment["hasCTS"], true);
    assert_eq!(decimal(&employment["benefits"]["gratification"]), dec!(5000));
    assert_eq!(employment["benefits"]["vacationDays"], 30);
    let cts = decimal(&employment["benefits"]["cts"]);
    assert!((cts - dec!(486.11)).abs() <= dec!(0.01), "cts was {cts}");

    assert_eq!(store.person_count(), 1);
    assert_eq!(store.employee_count(), 1);
}

#[tokio::test]
async fn test_register_juridical_person() {
    let store = MemoryStore::new();
    let mut request = natural_request("20123456789", "3000");
    request["person"] = json!({
        "type": "JURIDICAL",
        "email": "contacto@andina.pe",
        "phone": "014567890",
        "address": "Av. Javier Prado 500, Lima",
        "country": "Peru",
        "documentNumber": "20123456789",
        "businessName": "Servicios Andinos S.A.C.",
        "tradeName": "Andina",
        "constitutionDate": TemporalFixtures::constitution_date(),
        "representativeName": "Luis Rojas",
        "representativeDocument": "87654321"
    });

    let (status, body) = post(app(&store), request.to_string()).await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["person"]["type"], "JURIDICAL");
    assert_eq!(
        body["data"]["person"]["displayName"],
        "Servicios Andinos S.A.C."
    );
    assert!(body["data"]["person"].get("firstName").is_none());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let store = MemoryStore::new();
    let (status, body) = post(app(&store), "{\"person\":".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_invalid_field_is_bad_request() {
    let store = MemoryStore::new();
    let mut request = natural_request("12345678", "5000");
    request["person"]["email"] = json!("not-an-email");

    let (status, body) = post(app(&store), request.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(store.person_count(), 0);
}

#[tokio::test]
async fn test_out_of_range_salary_is_bad_request() {
    let store = MemoryStore::new();
    for salary in ["79228162514264337593543950335", "10000000000", "5000.125"] {
        let (status, body) =
            post(app(&store), natural_request("12345678", salary).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "salary {salary}: {body}");
        assert!(body["message"].as_str().unwrap().contains("salary"));
    }
    assert_eq!(store.person_count(), 0);
}

#[tokio::test]
async fn test_salary_below_minimum_wage_is_unprocessable() {
    let store = MemoryStore::new();
    let (status, body) = post(app(&store), natural_request("12345678", "1000").to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(store.person_count(), 0);
    assert_eq!(store.employee_count(), 0);
}

#[tokio::test]
async fn test_duplicate_document_is_conflict() {
    let store = MemoryStore::new();
    let request = natural_request("12345678", "5000").to_string();

    let (first, _) = post(app(&store), request.clone()).await;
    let (second, body) = post(app(&store), request).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("12345678"));
    assert_eq!(store.person_count(), 1);
}

#[tokio::test]
async fn test_slow_registration_times_out_and_rolls_back() {
    let store = MemoryStore::new().with_latency(Duration::from_millis(200));
    let app = app_with(&store, Duration::from_millis(100));

    let (status, body) = post(app, natural_request("12345678", "5000").to_string()).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["status"], "error");
    assert_eq!(store.person_count(), 0);
    assert_eq!(store.employee_count(), 0);
}

#[tokio::test]
async fn test_health_check() {
    let response = app(&MemoryStore::new())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = app(&MemoryStore::new())
        .oneshot(
            Request::builder()
                .uri("/api/v1/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
