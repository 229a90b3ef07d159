use super::{apple_date::AppleDate, common::CancellationReason};

/// One purchase or renewal event, as found in `receipt.in_app`.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt/in_app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InAppPurchaseTransaction {
    /// The unique identifier of the product purchased. Never empty.
    pub product_id: String,
    /// The unique identifier of this transaction. Never empty.
    pub transaction_id: String,
    /// The transaction identifier of the original purchase. For
    /// auto-renewable subscriptions this stays the same across renewals.
    pub original_transaction_id: String,
    pub purchase_date: AppleDate,
    pub original_purchase_date: AppleDate,

    /// Present if Apple refunded the transaction, or it was canceled because
    /// of an upgrade.
    pub cancellation: Option<Cancellation>,
    /// Time the subscription expires or will renew. Only present for
    /// auto-renewable subscriptions.
    pub expires_date: Option<AppleDate>,
    pub is_in_intro_offer_period: Option<bool>,
    pub is_trial_period: Option<bool>,
    pub promotional_offer_id: Option<String>,
    /// Number of consumable products purchased.
    pub quantity: Option<u32>,
    /// Only present for subscription purchases.
    pub web_order_line_item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    pub date: AppleDate,
    pub reason: Option<CancellationReason>,
}

/// A transaction from `latest_receipt_info`: the same shape as an in-app
/// transaction, plus a few subscription-related fields. Each extra field is
/// independently optional.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/latest_receipt_info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestReceiptInfo {
    pub transaction: InAppPurchaseTransaction,
    /// Only present (and `true`) for a subscription canceled because of an
    /// upgrade.
    pub is_upgraded: Option<bool>,
    pub offer_code_ref_name: Option<String>,
    /// Only present for auto-renewable subscriptions.
    pub subscription_group_identifier: Option<String>,
}

impl InAppPurchaseTransaction {
    pub fn is_canceled(&self) -> bool {
        self.cancellation.is_some()
    }
}

impl LatestReceiptInfo {
    pub fn original_transaction_id(&self) -> &str {
        &self.transaction.original_transaction_id
    }
}
