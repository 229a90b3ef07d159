use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Environment {
    /// The receipt or notification was generated for the sandbox environment.
    Sandbox,
    /// The receipt or notification was generated for the production
    /// environment. Server notifications spell this "PROD".
    #[serde(alias = "PROD")]
    Production,

    #[serde(untagged)]
    Unknown(String),
}

/// https://developer.apple.com/documentation/appstorereceipts/receipt_type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum ReceiptType {
    Production,
    #[serde(rename = "ProductionVPP")]
    ProductionVpp,
    ProductionSandbox,
    #[serde(rename = "ProductionVPPSandbox")]
    ProductionVppSandbox,

    #[serde(untagged)]
    Unknown(String),
}

/// https://developer.apple.com/documentation/appstorereceipts/auto_renew_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AutoRenewStatus {
    /// The customer turned off automatic renewal.
    #[serde(rename = "0")]
    Off,
    /// The subscription will renew at the end of the current period.
    #[serde(rename = "1")]
    On,
}

/// https://developer.apple.com/documentation/appstorereceipts/expiration_intent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum ExpirationIntent {
    /// The customer canceled their subscription.
    #[serde(rename = "1")]
    VoluntaryCancellation,
    /// Billing error; for example, the customer's payment information is no
    /// longer valid.
    #[serde(rename = "2")]
    BillingError,
    /// The customer didn't consent to a recent price increase.
    #[serde(rename = "3")]
    PriceIncreaseDecline,
    /// The product wasn't available for purchase at the time of renewal.
    #[serde(rename = "4")]
    ProductUnavailable,
    /// The subscription expired for some other reason.
    #[serde(rename = "5")]
    Other,

    #[serde(untagged)]
    Unknown(String),
}

/// https://developer.apple.com/documentation/appstorereceipts/cancellation_reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CancellationReason {
    /// The customer canceled for another reason, for example an accidental
    /// purchase.
    #[serde(rename = "0")]
    Other,
    /// The customer canceled due to an actual or perceived issue within the
    /// app.
    #[serde(rename = "1")]
    AppIssue,
}

/// https://developer.apple.com/documentation/appstorereceipts/price_consent_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PriceConsentStatus {
    #[serde(rename = "0")]
    NotYetConsented,
    #[serde(rename = "1")]
    Consented,
}
