use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::entities::common::CancellationReason;

/// Data structure for a single in-app purchase transaction, returned in
/// `receipt.in_app` by the verifyReceipt endpoint.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt/in_app
///
/// Every member of a date triple is read as optional here; whether the triple
/// as a whole is required is decided when converting to the domain entity.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct InAppPurchaseTransactionModel {
    /// The time the App Store refunded a transaction or revoked it from family
    /// sharing.
    pub(crate) cancellation_date: Option<String>,
    pub(crate) cancellation_date_ms: Option<String>,
    pub(crate) cancellation_date_pst: Option<String>,
    /// The reason for a refunded or revoked transaction.
    pub(crate) cancellation_reason: Option<CancellationReason>,
    /// The time a subscription expires or when it will renew.
    pub(crate) expires_date: Option<String>,
    pub(crate) expires_date_ms: Option<String>,
    pub(crate) expires_date_pst: Option<String>,
    /// Whether the subscription is in the introductory price period.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub(crate) is_in_intro_offer_period: Option<bool>,
    /// Whether the subscription is in the free trial period.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub(crate) is_trial_period: Option<bool>,
    /// The time of the original app purchase.
    pub(crate) original_purchase_date: Option<String>,
    pub(crate) original_purchase_date_ms: Option<String>,
    pub(crate) original_purchase_date_pst: Option<String>,
    /// The transaction identifier of the original purchase.
    pub(crate) original_transaction_id: String,
    /// The unique identifier of the product purchased.
    pub(crate) product_id: String,
    /// The identifier of the subscription offer redeemed by the user.
    pub(crate) promotional_offer_id: Option<String>,
    /// The time the App Store charged the user's account for a purchased or
    /// restored product, or for a subscription purchase or renewal after a
    /// lapse.
    pub(crate) purchase_date: Option<String>,
    pub(crate) purchase_date_ms: Option<String>,
    pub(crate) purchase_date_pst: Option<String>,
    /// The number of consumable products purchased, as a string.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub(crate) quantity: Option<u32>,
    /// A unique identifier for a transaction such as a purchase, restore, or
    /// renewal.
    pub(crate) transaction_id: String,
    /// A unique identifier for purchase events across devices, including
    /// subscription-renewal events.
    pub(crate) web_order_line_item_id: Option<String>,
}

/// Data structure for an entry of `latest_receipt_info`. Same as an in-app
/// transaction, with a few additional fields.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/latest_receipt_info
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct LatestReceiptInfoModel {
    #[serde(flatten)]
    pub(crate) transaction: InAppPurchaseTransactionModel,
    /// Indicates that a subscription has been canceled because of an upgrade.
    /// Only present for upgrade transactions.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub(crate) is_upgraded: Option<bool>,
    /// The reference name of a subscription offer code that the customer
    /// redeemed.
    pub(crate) offer_code_ref_name: Option<String>,
    /// The identifier of the subscription group to which the subscription
    /// belongs.
    pub(crate) subscription_group_identifier: Option<String>,
}
