use fractic_app_store_receipts::{
    domain::{
        entities::{
            common::{Environment, ReceiptType},
            server_notification::{NotificationType, ServerNotification},
            verify_receipt_result::VerifyReceiptResult,
            verify_receipt_status::VerifyReceiptStatus,
        },
        repositories::receipts_repository::ReceiptsRepository,
    },
    errors::ReceiptPayloadError,
    util::{
        classify_server_notification, classify_verify_receipt_response, parse_server_notification,
        parse_verify_receipt_response, AppStoreReceiptsUtil,
    },
};
use rstest::{fixture, rstest};
use serde_json::{json, Value};

#[fixture]
fn receipt() -> Value {
    json!({
        "receipt_type": "ProductionSandbox",
        "adam_id": 0,
        "app_item_id": 0,
        "bundle_id": "com.example.app",
        "application_version": "42",
        "download_id": 0,
        "version_external_identifier": 0,
        "receipt_creation_date": "2020-11-13 02:27:10 Etc/GMT",
        "receipt_creation_date_ms": "1605234430000",
        "receipt_creation_date_pst": "2020-11-12 18:27:10 America/Los_Angeles",
        "request_date": "2020-11-13 02:30:00 Etc/GMT",
        "request_date_ms": "1605234600000",
        "request_date_pst": "2020-11-12 18:30:00 America/Los_Angeles",
        "original_purchase_date": "2013-08-01 07:00:00 Etc/GMT",
        "original_purchase_date_ms": "1375340400000",
        "original_purchase_date_pst": "2013-08-01 00:00:00 America/Los_Angeles",
        "original_application_version": "1.0",
        "in_app": [{
            "quantity": "1",
            "product_id": "com.example.monthly",
            "transaction_id": "1000000000000001",
            "original_transaction_id": "1000000000000001",
            "purchase_date": "2020-11-13 02:27:08 Etc/GMT",
            "purchase_date_ms": "1605234428000",
            "purchase_date_pst": "2020-11-12 18:27:08 America/Los_Angeles",
            "original_purchase_date": "2020-11-13 02:27:08 Etc/GMT",
            "original_purchase_date_ms": "1605234428000",
            "original_purchase_date_pst": "2020-11-12 18:27:08 America/Los_Angeles",
            "is_trial_period": "false",
        }],
    })
}

#[fixture]
fn success_body(receipt: Value) -> Value {
    json!({
        "status": 0,
        "environment": "Sandbox",
        "receipt": receipt,
        "latest_receipt": "YWJj",
        "latest_receipt_info": [{
            "quantity": "1",
            "product_id": "com.example.monthly",
            "transaction_id": "1000000000000002",
            "original_transaction_id": "1000000000000001",
            "purchase_date": "2020-12-13 02:27:08 Etc/GMT",
            "purchase_date_ms": "1607826428000",
            "purchase_date_pst": "2020-12-12 18:27:08 America/Los_Angeles",
            "original_purchase_date": "2020-11-13 02:27:08 Etc/GMT",
            "original_purchase_date_ms": "1605234428000",
            "original_purchase_date_pst": "2020-11-12 18:27:08 America/Los_Angeles",
            "expires_date": "2021-01-13 02:27:08 Etc/GMT",
            "expires_date_ms": "1610504828000",
            "expires_date_pst": "2021-01-12 18:27:08 America/Los_Angeles",
            "subscription_group_identifier": "20675121",
        }],
        "pending_renewal_info": [{
            "auto_renew_status": "1",
            "original_transaction_id": "1000000000000001",
            "product_id": "com.example.monthly",
        }],
    })
}

#[fixture]
fn notification_body() -> Value {
    json!({
        "notification_type": "DID_RENEW",
        "password": "shared-secret",
        "environment": "Sandbox",
        "unified_receipt": {
            "environment": "Sandbox",
            "latest_receipt": "YWJj",
            "latest_receipt_info": [],
            "pending_renewal_info": [],
            "status": 0,
        },
    })
}

#[rstest]
fn success_body_is_classified_as_success(success_body: Value) {
    let result = classify_verify_receipt_response(&success_body).unwrap();
    let VerifyReceiptResult::Success(success) = &result else {
        panic!("expected success, got {result:?}");
    };
    assert_eq!(success.status, 0);
    assert_eq!(success.status_kind(), VerifyReceiptStatus::Valid);
    assert_eq!(success.environment, Some(Environment::Sandbox));
    assert_eq!(success.receipt.bundle_id, "com.example.app");
    assert_eq!(success.receipt.receipt_type, ReceiptType::ProductionSandbox);
    assert_eq!(success.receipt.in_app.len(), 1);
    assert_eq!(success.receipt.expiration_date, None);
    assert_eq!(
        success.receipt.original_purchase_date.to_utc().unwrap().timestamp_millis(),
        1375340400000
    );
    assert_eq!(success.latest_receipt_info_for("1000000000000001").count(), 1);
    assert!(success.pending_renewal_info_for("1000000000000001").is_some());
    assert!(success.pending_renewal_info_for("unknown").is_none());
    assert_eq!(success.decode_latest_receipt().unwrap(), Some(b"abc".to_vec()));
}

#[rstest]
#[case(21006)]
#[case(21105)]
#[case(21002)]
#[case(31337)]
fn success_status_is_kept_verbatim(mut success_body: Value, #[case] status: i64) {
    success_body["status"] = json!(status);
    let result = classify_verify_receipt_response(&success_body).unwrap();
    assert!(result.is_success());
    assert_eq!(result.status(), status);
}

#[rstest]
#[case(21000)]
#[case(21007)]
#[case(21150)]
#[case(0)]
fn body_without_receipt_is_error(#[case] status: i64) {
    let result = classify_verify_receipt_response(&json!({ "status": status })).unwrap();
    assert_eq!(result, VerifyReceiptResult::Error { status });
}

#[test]
fn error_body_keeps_documented_meaning() {
    let result = classify_verify_receipt_response(&json!({ "status": 21007 })).unwrap();
    assert_eq!(
        result.status_kind().redirect_environment(),
        Some(Environment::Sandbox)
    );
}

#[rstest]
#[case(json!({}))]
#[case(json!([]))]
#[case(json!("status"))]
#[case(json!(null))]
#[case(json!({ "status": "0" }))]
#[case(json!({ "receipt": {} }))]
fn verify_receipt_shape_violations_are_malformed(#[case] raw: Value) {
    let err = classify_verify_receipt_response(&raw).unwrap_err();
    assert!(err.is_malformed(), "{err:?}");
}

#[rstest]
fn missing_status_is_malformed_even_with_receipt(mut success_body: Value) {
    success_body.as_object_mut().unwrap().remove("status");
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn broken_receipt_is_not_downgraded_to_error(mut success_body: Value) {
    success_body["receipt"].as_object_mut().unwrap().remove("bundle_id");
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
#[case("receipt_creation_date")]
#[case("receipt_creation_date_ms")]
#[case("receipt_creation_date_pst")]
#[case("request_date")]
#[case("request_date_ms")]
#[case("request_date_pst")]
#[case("original_purchase_date")]
#[case("original_purchase_date_ms")]
#[case("original_purchase_date_pst")]
fn missing_member_of_required_receipt_date_is_malformed(
    mut success_body: Value,
    #[case] field: &str,
) {
    success_body["receipt"].as_object_mut().unwrap().remove(field);
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
#[case("purchase_date")]
#[case("purchase_date_ms")]
#[case("purchase_date_pst")]
#[case("original_purchase_date")]
#[case("original_purchase_date_ms")]
#[case("original_purchase_date_pst")]
fn missing_member_of_required_transaction_date_is_malformed(
    mut success_body: Value,
    #[case] field: &str,
) {
    success_body["receipt"]["in_app"][0]
        .as_object_mut()
        .unwrap()
        .remove(field);
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
#[case("expires_date")]
#[case("expires_date_ms")]
#[case("expires_date_pst")]
fn partial_optional_date_is_malformed(mut success_body: Value, #[case] field: &str) {
    success_body["latest_receipt_info"][0]
        .as_object_mut()
        .unwrap()
        .remove(field);
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn notification_is_classified(notification_body: Value) {
    let n = classify_server_notification(&notification_body).unwrap();
    assert_eq!(n.notification_type, NotificationType::DidRenew);
    assert_eq!(n.password, "shared-secret");
    assert!(n.unified_receipt.latest_receipt_info.is_empty());
    assert_eq!(n.unified_receipt.status, Some(0));
    assert!(!format!("{n:?}").contains("shared-secret"));
}

#[rstest]
fn every_known_notification_type_is_accepted(mut notification_body: Value) {
    for t in NotificationType::ALL {
        notification_body["notification_type"] = json!(t.as_str());
        let n = classify_server_notification(&notification_body).unwrap();
        assert_eq!(n.notification_type, t);
    }
}

#[rstest]
fn unknown_notification_type_is_distinct_from_malformed(mut notification_body: Value) {
    notification_body["notification_type"] = json!("SOME_FUTURE_TYPE");
    let err = classify_server_notification(&notification_body).unwrap_err();
    assert_eq!(
        err,
        ReceiptPayloadError::UnknownNotificationType("SOME_FUTURE_TYPE".to_string())
    );
    assert!(!err.is_malformed());
}

#[rstest]
#[case("notification_type")]
#[case("password")]
#[case("unified_receipt")]
fn missing_notification_field_is_malformed(mut notification_body: Value, #[case] field: &str) {
    notification_body.as_object_mut().unwrap().remove(field);
    let err = classify_server_notification(&notification_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
#[case("latest_receipt")]
#[case("latest_receipt_info")]
fn missing_unified_receipt_field_is_malformed(
    mut notification_body: Value,
    #[case] field: &str,
) {
    notification_body["unified_receipt"]
        .as_object_mut()
        .unwrap()
        .remove(field);
    let err = classify_server_notification(&notification_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn empty_password_is_malformed(mut notification_body: Value) {
    notification_body["password"] = json!("");
    let err = classify_server_notification(&notification_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn partial_deprecated_date_is_malformed(mut notification_body: Value) {
    notification_body["auto_renew_status_change_date_ms"] = json!("1605234428000");
    let err = classify_server_notification(&notification_body).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn empty_object_is_malformed_for_both() {
    assert!(classify_verify_receipt_response(&json!({}))
        .unwrap_err()
        .is_malformed());
    assert!(classify_server_notification(&json!({}))
        .unwrap_err()
        .is_malformed());
}

#[rstest]
fn classification_is_idempotent(success_body: Value, notification_body: Value) {
    assert_eq!(
        classify_verify_receipt_response(&success_body).unwrap(),
        classify_verify_receipt_response(&success_body).unwrap()
    );
    assert_eq!(
        classify_server_notification(&notification_body).unwrap(),
        classify_server_notification(&notification_body).unwrap()
    );
}

#[rstest]
fn string_bodies_are_accepted(success_body: Value, notification_body: Value) {
    let result = parse_verify_receipt_response(&success_body.to_string()).unwrap();
    assert!(result.is_success());
    let n = parse_server_notification(&notification_body.to_string()).unwrap();
    assert_eq!(n.notification_type, NotificationType::DidRenew);
    assert!(parse_verify_receipt_response("{\"status\": ")
        .unwrap_err()
        .is_malformed());
    assert!(parse_server_notification("not json")
        .unwrap_err()
        .is_malformed());
}

/// Repository that answers every verifyReceipt body with a fixed status.
struct FixedStatusRepository(i64);

impl ReceiptsRepository for FixedStatusRepository {
    fn classify_verify_receipt_response(
        &self,
        _raw: &Value,
    ) -> Result<VerifyReceiptResult, ReceiptPayloadError> {
        Ok(VerifyReceiptResult::Error { status: self.0 })
    }

    fn classify_server_notification(
        &self,
        _raw: &Value,
    ) -> Result<ServerNotification, ReceiptPayloadError> {
        Err(ReceiptPayloadError::UnknownNotificationType("TEST".to_string()))
    }
}

#[test]
fn util_delegates_to_provided_repository() {
    let util = AppStoreReceiptsUtil::with_repository(FixedStatusRepository(21005));
    let result = util.parse_verify_receipt_response("{}").unwrap();
    assert_eq!(result, VerifyReceiptResult::Error { status: 21005 });
    assert!(util
        .classify_server_notification(&json!({}))
        .unwrap_err()
        .is_unknown_notification_type());
    assert!(util
        .parse_server_notification("{")
        .unwrap_err()
        .is_malformed());
}

#[rstest]
#[case("original_purchase_date")]
#[case("original_purchase_date_ms")]
#[case("original_purchase_date_pst")]
fn missing_member_of_latest_receipt_info_original_purchase_date_is_malformed(
    mut success_body: Value,
    #[case] field: &str,
) {
    success_body["latest_receipt_info"][0]
        .as_object_mut()
        .unwrap()
        .remove(field);
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn complete_grace_period_is_kept(mut success_body: Value) {
    let renewal = &mut success_body["pending_renewal_info"][0];
    renewal["grace_period_expires_date"] = json!("2021-01-29 02:27:08 Etc/GMT");
    renewal["grace_period_expires_date_ms"] = json!("1611887228000");
    renewal["grace_period_expires_date_pst"] = json!("2021-01-28 18:27:08 America/Los_Angeles");
    let result = classify_verify_receipt_response(&success_body).unwrap();
    let renewal = result
        .success()
        .unwrap()
        .pending_renewal_info_for("1000000000000001")
        .unwrap();
    assert!(renewal.is_in_grace_period());
    assert_eq!(
        renewal.grace_period_expires_date.as_ref().unwrap().date_ms,
        "1611887228000"
    );
}

#[rstest]
#[case("grace_period_expires_date")]
#[case("grace_period_expires_date_ms")]
#[case("grace_period_expires_date_pst")]
fn partial_grace_period_is_malformed(mut success_body: Value, #[case] only: &str) {
    success_body["pending_renewal_info"][0][only] = json!("1611887228000");
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn empty_renewal_original_transaction_id_is_malformed(mut success_body: Value) {
    success_body["pending_renewal_info"][0]["original_transaction_id"] = json!("");
    let err = classify_verify_receipt_response(&success_body).unwrap_err();
    assert!(err.is_malformed());
}

#[rstest]
fn null_transaction_lists_are_absent(mut success_body: Value) {
    success_body["receipt"]["in_app"] = Value::Null;
    success_body["latest_receipt_info"] = Value::Null;
    success_body["pending_renewal_info"] = Value::Null;
    let result = classify_verify_receipt_response(&success_body).unwrap();
    let success = result.success().unwrap();
    assert!(success.receipt.in_app.is_empty());
    assert_eq!(success.latest_receipt_info, None);
    assert_eq!(success.pending_renewal_info, None);
}
