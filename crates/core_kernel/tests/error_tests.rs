//! Tests for core_kernel error classification

use core_kernel::{Classify, ErrorKind, PortError};

#[test]
fn test_error_kind_codes() {
    assert_eq!(ErrorKind::Validation.code(), "VALIDATION");
    assert_eq!(ErrorKind::LegalRuleViolation.code(), "LEGAL_RULE_VIOLATION");
    assert_eq!(ErrorKind::AlreadyExists.code(), "ALREADY_EXISTS");
    assert_eq!(ErrorKind::StoreFailure.code(), "STORE_FAILURE");
    assert_eq!(ErrorKind::Configuration.code(), "CONFIGURATION");
}

#[test]
fn test_error_kind_display_matches_code() {
    assert_eq!(ErrorKind::AlreadyExists.to_string(), "ALREADY_EXISTS");
}

#[test]
fn test_only_business_kinds_are_user_facing() {
    assert!(ErrorKind::Validation.is_user_facing());
    assert!(ErrorKind::LegalRuleViolation.is_user_facing());
    assert!(ErrorKind::AlreadyExists.is_user_facing());
    assert!(!ErrorKind::StoreFailure.is_user_facing());
    assert!(!ErrorKind::Configuration.is_user_facing());
}

#[test]
fn test_error_kind_serializes_screaming_snake_case() {
    let json = serde_json::to_string(&ErrorKind::LegalRuleViolation).unwrap();
    assert_eq!(json, "\"LEGAL_RULE_VIOLATION\"");
}

#[test]
fn test_port_error_validation_field() {
    let error = PortError::validation_field("too long", "email");
    match &error {
        PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("email")),
        _ => panic!("Expected Validation error"),
    }
    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[test]
fn test_port_error_conflict_is_already_exists() {
    let error = PortError::conflict("document 12345678 already registered");
    assert!(error.is_conflict());
    assert_eq!(error.kind(), ErrorKind::AlreadyExists);
}
