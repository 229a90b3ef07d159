use super::{
    apple_date::AppleDate,
    common::{AutoRenewStatus, ExpirationIntent, PriceConsentStatus},
};

/// Renewal intent for one subscription lineage. Correlates with transactions
/// through `original_transaction_id`.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/pending_renewal_info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRenewalInfo {
    /// The product the customer will downgrade or crossgrade to at the end of
    /// the current period.
    pub auto_renew_product_id: Option<String>,
    pub auto_renew_status: AutoRenewStatus,
    /// Present for an expired auto-renewable subscription.
    pub expiration_intent: Option<ExpirationIntent>,
    /// When Apple stops retrying the renewal. Present while in a grace period.
    pub grace_period_expires_date: Option<AppleDate>,
    /// Whether Apple is still trying to renew an expired subscription.
    pub is_in_billing_retry_period: Option<bool>,
    pub offer_code_ref_name: Option<String>,
    pub original_transaction_id: String,
    /// Present if the customer was notified of a price increase.
    pub price_consent_status: Option<PriceConsentStatus>,
    pub product_id: String,
}

impl PendingRenewalInfo {
    pub fn is_in_grace_period(&self) -> bool {
        self.grace_period_expires_date.is_some()
    }
}
