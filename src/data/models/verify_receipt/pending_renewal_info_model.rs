use serde::Deserialize;

use crate::{
    data::models::common::numeric_flag_option,
    domain::entities::common::{AutoRenewStatus, ExpirationIntent, PriceConsentStatus},
};

/// Data structure for an entry of `pending_renewal_info`, one per
/// auto-renewable subscription lineage.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/pending_renewal_info
#[derive(Debug, Deserialize)]
pub(crate) struct PendingRenewalInfoModel {
    /// The product identifier of the product that renews at the next billing
    /// period. Differs from `product_id` if the customer downgraded or
    /// crossgraded.
    pub(crate) auto_renew_product_id: Option<String>,
    /// The renewal status for the auto-renewable subscription.
    pub(crate) auto_renew_status: AutoRenewStatus,
    /// The reason a subscription expired.
    pub(crate) expiration_intent: Option<ExpirationIntent>,
    /// The time at which the grace period for subscription renewals expires.
    pub(crate) grace_period_expires_date: Option<String>,
    pub(crate) grace_period_expires_date_ms: Option<String>,
    pub(crate) grace_period_expires_date_pst: Option<String>,
    /// Whether Apple is attempting to automatically renew an expired
    /// subscription.
    #[serde(default, deserialize_with = "numeric_flag_option")]
    pub(crate) is_in_billing_retry_period: Option<bool>,
    /// The reference name of a subscription offer code that the customer
    /// redeemed.
    pub(crate) offer_code_ref_name: Option<String>,
    /// The transaction identifier of the original purchase.
    pub(crate) original_transaction_id: String,
    /// The price consent status for an auto-renewable subscription price
    /// increase.
    pub(crate) price_consent_status: Option<PriceConsentStatus>,
    /// The unique identifier of the product purchased.
    pub(crate) product_id: String,
}
