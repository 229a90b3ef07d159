use super::{apple_date::AppleDate, common::ReceiptType, transaction::InAppPurchaseTransaction};

/// JSON representation of the receipt sent for verification.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub adam_id: u64,
    pub app_item_id: u64,
    /// The app's version number (CFBundleVersion).
    pub application_version: String,
    pub bundle_id: String,
    pub download_id: u64,
    /// Only present if the app was purchased through the Volume Purchase
    /// Program.
    pub expiration_date: Option<AppleDate>,
    /// Transactions for non-consumables, non-renewing subscriptions and
    /// auto-renewable subscriptions previously purchased. Empty if the field
    /// was absent.
    pub in_app: Vec<InAppPurchaseTransaction>,
    pub original_application_version: String,
    pub original_purchase_date: AppleDate,
    /// Only present if the app was ordered through pre-order.
    pub preorder_date: Option<AppleDate>,
    pub receipt_creation_date: AppleDate,
    pub receipt_type: ReceiptType,
    pub request_date: AppleDate,
    pub version_external_identifier: u64,
}
