use std::{fmt, str::FromStr};

use crate::errors::ReceiptPayloadError;

use super::{
    apple_date::AppleDate,
    common::{Environment, ExpirationIntent},
    pending_renewal_info::PendingRenewalInfo,
    transaction::LatestReceiptInfo,
    verify_receipt_result::decode_receipt_data,
};

/// A version 1 App Store server notification.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/responsebodyv1
#[derive(Clone, PartialEq, Eq)]
pub struct ServerNotification {
    pub notification_type: NotificationType,
    /// The shared secret configured in App Store Connect. Never empty. Only
    /// checked for presence here; comparing it against the expected secret is
    /// up to the caller.
    pub password: String,
    pub unified_receipt: UnifiedReceipt,
    pub environment: Option<Environment>,
    /// Bundle identifier of the app.
    pub bid: Option<String>,
    /// Bundle version of the app.
    pub bvrs: Option<String>,

    // Deprecated top-level fields, superseded by `unified_receipt`.
    pub auto_renew_adam_id: Option<String>,
    pub auto_renew_product_id: Option<String>,
    pub auto_renew_status: Option<bool>,
    pub auto_renew_status_change_date: Option<AppleDate>,
    pub expiration_intent: Option<ExpirationIntent>,
}

impl fmt::Debug for ServerNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerNotification")
            .field("notification_type", &self.notification_type)
            .field("password", &"<redacted>")
            .field("unified_receipt", &self.unified_receipt)
            .field("environment", &self.environment)
            .field("bid", &self.bid)
            .field("bvrs", &self.bvrs)
            .field("auto_renew_adam_id", &self.auto_renew_adam_id)
            .field("auto_renew_product_id", &self.auto_renew_product_id)
            .field("auto_renew_status", &self.auto_renew_status)
            .field(
                "auto_renew_status_change_date",
                &self.auto_renew_status_change_date,
            )
            .field("expiration_intent", &self.expiration_intent)
            .finish()
    }
}

/// The latest transactions for the customer, embedded in every notification.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/unified_receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedReceipt {
    pub environment: Option<Environment>,
    /// Base64 encoded latest receipt.
    pub latest_receipt: String,
    /// Up to the latest 100 transactions, excluding finished consumables. May
    /// be empty.
    pub latest_receipt_info: Vec<LatestReceiptInfo>,
    pub pending_renewal_info: Vec<PendingRenewalInfo>,
    pub status: Option<i64>,
}

impl UnifiedReceipt {
    pub fn latest_receipt_info_for<'a>(
        &'a self,
        original_transaction_id: &'a str,
    ) -> impl Iterator<Item = &'a LatestReceiptInfo> + 'a {
        self.latest_receipt_info
            .iter()
            .filter(move |i| i.original_transaction_id() == original_transaction_id)
    }

    pub fn pending_renewal_info_for(
        &self,
        original_transaction_id: &str,
    ) -> Option<&PendingRenewalInfo> {
        self.pending_renewal_info
            .iter()
            .find(|i| i.original_transaction_id == original_transaction_id)
    }

    pub fn decode_latest_receipt(&self) -> Result<Vec<u8>, ReceiptPayloadError> {
        decode_receipt_data("UnifiedReceipt::decode_latest_receipt", &self.latest_receipt)
    }
}

/// The reason Apple sent a version 1 notification.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/notification_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Apple customer support canceled the subscription and refunded the
    /// customer.
    Cancel,
    /// The customer made a change in their subscription plan that takes effect
    /// at the next renewal.
    DidChangeRenewalPref,
    /// The subscription renewal status changed.
    DidChangeRenewalStatus,
    /// The subscription failed to renew due to a billing issue.
    DidFailToRenew,
    /// An expired subscription recovered through a billing retry.
    DidRecover,
    /// A subscription successfully auto-renewed for a new period.
    DidRenew,
    /// The first purchase of a subscription.
    InitialBuy,
    /// The customer renewed a subscription interactively, after it lapsed or
    /// by upgrading.
    InteractiveRenewal,
    /// The customer consented to a subscription price increase.
    PriceIncreaseConsent,
    /// The App Store refunded a transaction.
    Refund,
}

impl NotificationType {
    pub const ALL: [NotificationType; 10] = [
        Self::Cancel,
        Self::DidChangeRenewalPref,
        Self::DidChangeRenewalStatus,
        Self::DidFailToRenew,
        Self::DidRecover,
        Self::DidRenew,
        Self::InitialBuy,
        Self::InteractiveRenewal,
        Self::PriceIncreaseConsent,
        Self::Refund,
    ];

    /// The value as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cancel => "CANCEL",
            Self::DidChangeRenewalPref => "DID_CHANGE_RENEWAL_PREF",
            Self::DidChangeRenewalStatus => "DID_CHANGE_RENEWAL_STATUS",
            Self::DidFailToRenew => "DID_FAIL_TO_RENEW",
            Self::DidRecover => "DID_RECOVER",
            Self::DidRenew => "DID_RENEW",
            Self::InitialBuy => "INITIAL_BUY",
            Self::InteractiveRenewal => "INTERACTIVE_RENEWAL",
            Self::PriceIncreaseConsent => "PRICE_INCREASE_CONSENT",
            Self::Refund => "REFUND",
        }
    }
}

impl FromStr for NotificationType {
    type Err = ReceiptPayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ReceiptPayloadError::UnknownNotificationType(s.to_string()))
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
