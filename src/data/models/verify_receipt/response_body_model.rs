use serde::Deserialize;

use crate::domain::entities::common::Environment;

use super::{
    in_app_purchase_transaction_model::LatestReceiptInfoModel,
    pending_renewal_info_model::PendingRenewalInfoModel, receipt_model::ReceiptModel,
};

/// Response body of the verifyReceipt endpoint, after discrimination.
///
/// Apple returns either a full body with a decoded `receipt`, or a body with
/// only a `status`. There is no explicit tag, so this is not deserialized
/// directly; see `AppStoreReceiptsDatasource::parse_verify_receipt_response`.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
#[derive(Debug)]
pub(crate) enum VerifyReceiptResponseModel {
    Success(VerifyReceiptSuccessModel),
    Error { status: i64 },
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyReceiptSuccessModel {
    /// The environment for which the receipt was generated.
    pub(crate) environment: Option<Environment>,
    /// The latest Base64 encoded app receipt. Only returned for receipts that
    /// contain auto-renewable subscriptions.
    pub(crate) latest_receipt: Option<String>,
    /// All in-app purchase transactions, excluding transactions for
    /// consumables marked as finished by the app. Only returned for receipts
    /// that contain auto-renewable subscriptions.
    pub(crate) latest_receipt_info: Option<Vec<LatestReceiptInfoModel>>,
    /// Pending renewal information for each auto-renewable subscription
    /// identified by the product_id. Only returned for app receipts that
    /// contain auto-renewable subscriptions.
    pub(crate) pending_renewal_info: Option<Vec<PendingRenewalInfoModel>>,
    /// The decoded receipt that was sent for verification.
    pub(crate) receipt: ReceiptModel,
    /// Either 0 if the receipt is valid, or a status code if there is an
    /// error.
    pub(crate) status: i64,
}
