use serde_json::Value;

use crate::{
    data::{
        datasources::app_store_receipts_datasource::AppStoreReceiptsDatasourceImpl,
        repositories::receipts_repository_impl::ReceiptsRepositoryImpl,
    },
    domain::{
        entities::{
            server_notification::ServerNotification, verify_receipt_result::VerifyReceiptResult,
        },
        repositories::receipts_repository::ReceiptsRepository,
    },
    errors::ReceiptPayloadError,
};

pub struct AppStoreReceiptsUtil<R: ReceiptsRepository> {
    receipts_repository: R,
}

impl<R: ReceiptsRepository> AppStoreReceiptsUtil<R> {
    pub fn classify_verify_receipt_response(
        &self,
        raw: &Value,
    ) -> Result<VerifyReceiptResult, ReceiptPayloadError> {
        self.receipts_repository.classify_verify_receipt_response(raw)
    }

    pub fn classify_server_notification(
        &self,
        raw: &Value,
    ) -> Result<ServerNotification, ReceiptPayloadError> {
        self.receipts_repository.classify_server_notification(raw)
    }

    /// body:
    ///   The raw body returned by the verifyReceipt endpoint.
    pub fn parse_verify_receipt_response(
        &self,
        body: &str,
    ) -> Result<VerifyReceiptResult, ReceiptPayloadError> {
        self.classify_verify_receipt_response(&parse_body(
            "AppStoreReceiptsUtil::parse_verify_receipt_response",
            body,
        )?)
    }

    /// body:
    ///   The raw POST body of the notification.
    pub fn parse_server_notification(
        &self,
        body: &str,
    ) -> Result<ServerNotification, ReceiptPayloadError> {
        self.classify_server_notification(&parse_body(
            "AppStoreReceiptsUtil::parse_server_notification",
            body,
        )?)
    }
}

impl<R: ReceiptsRepository> AppStoreReceiptsUtil<R> {
    /// Wraps a caller-provided repository, for example a stub in tests.
    pub fn with_repository(receipts_repository: R) -> Self {
        Self {
            receipts_repository,
        }
    }
}

impl AppStoreReceiptsUtil<ReceiptsRepositoryImpl<AppStoreReceiptsDatasourceImpl>> {
    pub(crate) fn new() -> Self {
        Self::with_repository(ReceiptsRepositoryImpl::new())
    }
}

/// Classifies a decoded verifyReceipt response body with the default wiring.
pub fn classify_verify_receipt_response(
    raw: &Value,
) -> Result<VerifyReceiptResult, ReceiptPayloadError> {
    AppStoreReceiptsUtil::new().classify_verify_receipt_response(raw)
}

/// Classifies a decoded version 1 server notification with the default
/// wiring.
pub fn classify_server_notification(
    raw: &Value,
) -> Result<ServerNotification, ReceiptPayloadError> {
    AppStoreReceiptsUtil::new().classify_server_notification(raw)
}

/// body:
///   The raw body returned by the verifyReceipt endpoint.
pub fn parse_verify_receipt_response(
    body: &str,
) -> Result<VerifyReceiptResult, ReceiptPayloadError> {
    AppStoreReceiptsUtil::new().parse_verify_receipt_response(body)
}

/// body:
///   The raw POST body of the notification.
pub fn parse_server_notification(body: &str) -> Result<ServerNotification, ReceiptPayloadError> {
    AppStoreReceiptsUtil::new().parse_server_notification(body)
}

fn parse_body(cxt: &str, body: &str) -> Result<Value, ReceiptPayloadError> {
    serde_json::from_str(body)
        .map_err(|e| ReceiptPayloadError::malformed_with_debug(cxt, "body is not valid JSON", &e))
}
