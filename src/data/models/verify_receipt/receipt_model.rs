use serde::Deserialize;

use crate::{data::models::common::null_as_empty, domain::entities::common::ReceiptType};

use super::in_app_purchase_transaction_model::InAppPurchaseTransactionModel;

/// Data structure for the decoded receipt, returned in `receipt` by the
/// verifyReceipt endpoint.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt
#[derive(Debug, Deserialize)]
pub(crate) struct ReceiptModel {
    /// See app_item_id.
    pub(crate) adam_id: u64,
    /// Generated by App Store Connect and used by the App Store to uniquely
    /// identify the app purchased. Treat as a 64-bit integer.
    pub(crate) app_item_id: u64,
    /// The app's version number.
    pub(crate) application_version: String,
    /// The bundle identifier for the app to which the receipt belongs.
    pub(crate) bundle_id: String,
    /// A unique identifier for the app download transaction.
    pub(crate) download_id: u64,
    /// The time the receipt expires for apps purchased through the Volume
    /// Purchase Program.
    pub(crate) expiration_date: Option<String>,
    pub(crate) expiration_date_ms: Option<String>,
    pub(crate) expiration_date_pst: Option<String>,
    /// The in-app purchase receipt fields for all in-app purchase
    /// transactions. Absent and `null` both mean no transactions.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) in_app: Vec<InAppPurchaseTransactionModel>,
    /// The version of the app that the user originally purchased.
    pub(crate) original_application_version: String,
    /// The time of the original app purchase.
    pub(crate) original_purchase_date: Option<String>,
    pub(crate) original_purchase_date_ms: Option<String>,
    pub(crate) original_purchase_date_pst: Option<String>,
    /// The time the user ordered the app available for pre-order.
    pub(crate) preorder_date: Option<String>,
    pub(crate) preorder_date_ms: Option<String>,
    pub(crate) preorder_date_pst: Option<String>,
    /// The time the App Store generated the receipt.
    pub(crate) receipt_creation_date: Option<String>,
    pub(crate) receipt_creation_date_ms: Option<String>,
    pub(crate) receipt_creation_date_pst: Option<String>,
    /// The type of receipt generated.
    pub(crate) receipt_type: ReceiptType,
    /// The time the request to the verifyReceipt endpoint was processed and
    /// the response was generated.
    pub(crate) request_date: Option<String>,
    pub(crate) request_date_ms: Option<String>,
    pub(crate) request_date_pst: Option<String>,
    /// An arbitrary number that identifies a revision of your app. In the
    /// sandbox, this key's value is "0".
    pub(crate) version_external_identifier: u64,
}
