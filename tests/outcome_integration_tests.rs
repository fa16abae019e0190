//! Integration tests for smooth-result
//!
//! These tests exercise the public API the way a consuming service would:
//! building outcomes in a service layer, propagating failures with `?`,
//! and embedding outcome values in serialized payloads.

use anyhow::Context;
use serde_json::json;
use smooth_result::{
    descriptor_for, DataOutcome, ErrorCategory, ErrorDescriptor, InvalidOutcomeError, Outcome,
    OutcomeError, OutcomeResult,
};

/// Minimal in-memory service used to drive the outcome types.
struct AccountService {
    accounts: Vec<(u32, String)>,
}

impl AccountService {
    fn new() -> Self {
        Self {
            accounts: vec![(1, "alice".to_string()), (2, "bob".to_string())],
        }
    }

    fn find(&self, id: u32) -> DataOutcome<String> {
        match self.accounts.iter().find(|(account_id, _)| *account_id == id) {
            Some((_, name)) => DataOutcome::ok_with(name.clone()),
            None => DataOutcome::failure_with(&descriptor_for(ErrorCategory::NotFound)),
        }
    }

    fn register(&mut self, id: u32, name: &str) -> Outcome {
        if self.accounts.iter().any(|(account_id, _)| *account_id == id) {
            return Outcome::failure_with_message(
                &descriptor_for(ErrorCategory::Conflict),
                format!("Account {id} already exists"),
            );
        }
        self.accounts.push((id, name.to_string()));
        Outcome::success()
    }

    fn rename(&mut self, id: u32, name: &str) -> OutcomeResult<String> {
        let previous = self
            .find(id)
            .into_result()?
            .unwrap_or_default();
        self.register_rename(id, name).into_result()?;
        Ok(previous)
    }

    fn register_rename(&mut self, id: u32, name: &str) -> Outcome {
        if name.is_empty() {
            return Outcome::failure_with(&descriptor_for(ErrorCategory::UnprocessableContent));
        }
        for account in self.accounts.iter_mut().filter(|(account_id, _)| *account_id == id) {
            account.1 = name.to_string();
        }
        Outcome::success()
    }
}

#[test]
fn test_service_lookup_success_and_failure() {
    let service = AccountService::new();

    let found = service.find(1);
    assert!(found.is_success());
    assert_eq!(found.data().map(String::as_str), Some("alice"));

    let missing = service.find(99);
    assert!(missing.is_failure());
    assert_eq!(missing.status_code(), Some(404));
    assert_eq!(
        missing.error_message(),
        Some("NotFound: The requested resource could not be found.")
    );
    assert!(missing.data().is_none());
}

#[test]
fn test_service_conflict_uses_custom_message() {
    let mut service = AccountService::new();

    assert!(service.register(3, "carol").is_success());

    let duplicate = service.register(3, "carol");
    assert_eq!(duplicate.status_code(), Some(ErrorCategory::Conflict.code()));
    assert_eq!(duplicate.error_message(), Some("Account 3 already exists"));
}

#[test]
fn test_question_mark_propagation() {
    let mut service = AccountService::new();

    assert_eq!(service.rename(2, "robert"), Ok("bob".to_string()));
    assert_eq!(service.find(2).into_data(), Some("robert".to_string()));

    let err = service.rename(42, "nobody").unwrap_err();
    assert_eq!(err.category(), Some(ErrorCategory::NotFound));

    let err = service.rename(1, "").unwrap_err();
    assert_eq!(err.status_code(), Some(422));
}

#[test]
fn test_outcome_error_converts_into_anyhow() {
    fn load() -> anyhow::Result<()> {
        Outcome::failure_with(&descriptor_for(ErrorCategory::Forbidden))
            .into_result()
            .context("loading settings")?;
        Ok(())
    }

    let err = load().unwrap_err();
    let root = err
        .downcast_ref::<OutcomeError>()
        .expect("root cause should be the outcome error");

    assert_eq!(root.status_code(), Some(403));
    assert_eq!(format!("{err}"), "loading settings");
}

#[test]
fn test_outcome_serializes_with_explicit_nulls() {
    let value = serde_json::to_value(Outcome::success()).unwrap();

    assert_eq!(
        value,
        json!({ "success": true, "status_code": null, "error_message": null })
    );
}

#[test]
fn test_data_outcome_serializes_payload() {
    let value = serde_json::to_value(DataOutcome::ok_with(vec![1, 2, 3])).unwrap();

    assert_eq!(
        value,
        json!({
            "success": true,
            "status_code": null,
            "error_message": "",
            "data": [1, 2, 3]
        })
    );
}

#[test]
fn test_descriptor_serializes_category_by_name() {
    let value = serde_json::to_value(descriptor_for(ErrorCategory::Gone)).unwrap();

    assert_eq!(value["category"], "Gone");
    assert_eq!(
        value["message"],
        "The requested resource is no longer available at the server and no forwarding address is known."
    );
}

#[test]
fn test_descriptor_deserializes_from_payload() {
    let payload = r#"{ "category": "Locked", "message": "Row is locked by another writer" }"#;

    let descriptor: ErrorDescriptor = serde_json::from_str(payload).unwrap();

    assert_eq!(descriptor.category(), ErrorCategory::Locked);
    assert_eq!(descriptor.to_string(), "Locked: Row is locked by another writer");
}

#[test]
fn test_category_deserialization_rejects_unknown_names() {
    let result = serde_json::from_str::<ErrorCategory>(r#""Teapot""#);

    assert!(result.is_err());
}

#[test]
fn test_outcomes_survive_a_serialization_round_trip() {
    let outcomes = vec![
        Outcome::success(),
        Outcome::failure(),
        Outcome::failure_with(&descriptor_for(ErrorCategory::BadGateway)),
        Outcome::failure_with_message(&descriptor_for(ErrorCategory::Locked), "Row locked"),
    ];

    for outcome in outcomes {
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: Outcome = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, outcome);
    }

    let with_data = DataOutcome::ok_with("report".to_string());
    let encoded = serde_json::to_string(&with_data).unwrap();
    let decoded: DataOutcome<String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, with_data);
}

#[test]
fn test_success_with_status_code_is_rejected() {
    let payload = r#"{ "success": true, "status_code": 404, "error_message": "boom" }"#;

    let err = serde_json::from_str::<Outcome>(payload).unwrap_err();

    assert!(err
        .to_string()
        .contains(&InvalidOutcomeError::SuccessWithStatusCode { status_code: 404 }.to_string()));
}

#[test]
fn test_success_with_error_message_is_rejected() {
    let payload = r#"{ "success": true, "status_code": null, "error_message": "boom" }"#;

    assert!(serde_json::from_str::<Outcome>(payload).is_err());
    assert!(serde_json::from_str::<DataOutcome<u32>>(payload).is_err());
}

#[test]
fn test_failure_with_data_is_rejected() {
    let payload = r#"{ "success": false, "status_code": 500, "error_message": "boom", "data": 7 }"#;

    let err = serde_json::from_str::<DataOutcome<u32>>(payload).unwrap_err();

    assert!(err
        .to_string()
        .contains(&InvalidOutcomeError::FailureWithData.to_string()));
}

#[test]
fn test_failure_without_data_is_accepted() {
    let payload = r#"{ "success": false, "status_code": 500, "error_message": "boom", "data": null }"#;

    let outcome: DataOutcome<u32> = serde_json::from_str(payload).unwrap();

    assert!(outcome.is_failure());
    assert_eq!(outcome.status_code(), Some(500));
    assert_eq!(outcome.data(), None);
}
