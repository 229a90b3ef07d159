use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    data::{
        datasources::utils::{require_i64, require_object, require_str},
        models::{
            app_store_server_notifications::response_body_v1_model::ResponseBodyV1Model,
            verify_receipt::response_body_model::{
                VerifyReceiptResponseModel, VerifyReceiptSuccessModel,
            },
        },
    },
    domain::entities::{
        server_notification::NotificationType, verify_receipt_status::VerifyReceiptStatus,
    },
    errors::ReceiptPayloadError,
};

pub(crate) trait AppStoreReceiptsDatasource: Send + Sync {
    /// Discriminate a verifyReceipt response body:
    /// https://developer.apple.com/documentation/appstorereceipts/responsebody
    ///
    /// raw:
    ///   The decoded JSON body returned by the verifyReceipt endpoint.
    fn parse_verify_receipt_response(
        &self,
        raw: &Value,
    ) -> Result<VerifyReceiptResponseModel, ReceiptPayloadError>;

    /// Parse a version 1 App Store Server Notification:
    /// https://developer.apple.com/documentation/appstoreservernotifications/responsebodyv1
    ///
    /// raw:
    ///   The decoded JSON body of the notification POST request.
    fn parse_server_notification(
        &self,
        raw: &Value,
    ) -> Result<(NotificationType, ResponseBodyV1Model), ReceiptPayloadError>;
}

pub(crate) struct AppStoreReceiptsDatasourceImpl;

impl AppStoreReceiptsDatasource for AppStoreReceiptsDatasourceImpl {
    fn parse_verify_receipt_response(
        &self,
        raw: &Value,
    ) -> Result<VerifyReceiptResponseModel, ReceiptPayloadError> {
        const CXT: &str = "AppStoreReceiptsDatasourceImpl::parse_verify_receipt_response";
        let object = require_object(CXT, raw)?;
        let status = require_i64(CXT, object, "status")?;
        if !VerifyReceiptStatus::from_code(status).is_documented() {
            warn!("verifyReceipt returned undocumented status {status}");
        }

        // A body carrying `receipt` is a success body, whatever its status. If
        // the receipt is broken, the whole body is malformed.
        let Some(receipt) = object.get("receipt") else {
            debug!("classified verifyReceipt response as error (status {status})");
            return Ok(VerifyReceiptResponseModel::Error { status });
        };
        if !receipt.is_object() {
            return Err(ReceiptPayloadError::malformed(
                CXT,
                "field `receipt` should be an object",
            ));
        }
        let model = VerifyReceiptSuccessModel::deserialize(raw).map_err(|e| {
            ReceiptPayloadError::malformed_with_debug(CXT, "failed to parse success body", &e)
        })?;
        debug!("classified verifyReceipt response as success (status {status})");
        Ok(VerifyReceiptResponseModel::Success(model))
    }

    fn parse_server_notification(
        &self,
        raw: &Value,
    ) -> Result<(NotificationType, ResponseBodyV1Model), ReceiptPayloadError> {
        const CXT: &str = "AppStoreReceiptsDatasourceImpl::parse_server_notification";
        let object = require_object(CXT, raw)?;
        let notification_type = require_str(CXT, object, "notification_type")?
            .parse::<NotificationType>()
            .inspect_err(|e| warn!("ignoring server notification: {e}"))?;

        if require_str(CXT, object, "password")?.is_empty() {
            return Err(ReceiptPayloadError::malformed(CXT, "field `password` is empty"));
        }
        if !object.get("unified_receipt").is_some_and(Value::is_object) {
            return Err(ReceiptPayloadError::malformed(
                CXT,
                "field `unified_receipt` should be an object",
            ));
        }

        let model = ResponseBodyV1Model::deserialize(raw).map_err(|e| {
            ReceiptPayloadError::malformed_with_debug(CXT, "failed to parse notification", &e)
        })?;
        debug!("classified server notification as {notification_type}");
        Ok((notification_type, model))
    }
}

impl AppStoreReceiptsDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}
