use serde_json::Value;

use crate::{
    domain::entities::{
        server_notification::ServerNotification, verify_receipt_result::VerifyReceiptResult,
    },
    errors::ReceiptPayloadError,
};

pub trait ReceiptsRepository: Send + Sync {
    /// Classifies a decoded verifyReceipt response body. A body is a success
    /// if it carries a `receipt` object, and an error otherwise. `status` is
    /// kept verbatim in both cases.
    fn classify_verify_receipt_response(
        &self,
        raw: &Value,
    ) -> Result<VerifyReceiptResult, ReceiptPayloadError>;

    /// Classifies a decoded version 1 server notification body. Does not check
    /// `password` against the expected shared secret.
    fn classify_server_notification(
        &self,
        raw: &Value,
    ) -> Result<ServerNotification, ReceiptPayloadError>;
}
