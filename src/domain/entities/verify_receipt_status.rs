use crate::constants::*;

use super::common::Environment;

/// Interpretation of the numeric `status` returned by verifyReceipt.
///
/// Results always carry the raw integer; this is a lookup on top of it, so
/// that undocumented codes never cause a decode failure.
///
/// https://developer.apple.com/documentation/appstorereceipts/status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyReceiptStatus {
    /// The receipt is valid.
    Valid,
    /// The receipt is valid but the subscription has expired. The decoded
    /// receipt is still returned.
    ValidButSubscriptionExpired,
    /// The request to the App Store was not made using HTTP POST, or the JSON
    /// body could not be read.
    NotPost,
    /// No longer sent by the App Store.
    NoLongerSent,
    /// The receipt data is malformed, or the service had a temporary issue.
    MalformedReceiptData,
    /// The receipt could not be authenticated.
    NotAuthenticated,
    /// The shared secret does not match the one on file for the account.
    SharedSecretMismatch,
    /// The receipt server was temporarily unable to provide the receipt.
    ServerUnavailable,
    /// The receipt is from the test environment but was sent to production.
    SandboxReceiptSentToProduction,
    /// The receipt is from production but was sent to the test environment.
    ProductionReceiptSentToSandbox,
    /// Internal data access error.
    InternalDataAccessError,
    /// The user account cannot be found or has been deleted.
    UserAccountNotFound,
    /// A code in the 21100-21199 range, documented only as "internal data
    /// access error".
    Reserved(i64),
    /// Any other code.
    Undocumented(i64),
}

impl VerifyReceiptStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            STATUS_VALID => Self::Valid,
            STATUS_VALID_BUT_SUBSCRIPTION_EXPIRED => Self::ValidButSubscriptionExpired,
            STATUS_NOT_POST => Self::NotPost,
            STATUS_NO_LONGER_SENT => Self::NoLongerSent,
            STATUS_MALFORMED_RECEIPT_DATA => Self::MalformedReceiptData,
            STATUS_NOT_AUTHENTICATED => Self::NotAuthenticated,
            STATUS_SHARED_SECRET_MISMATCH => Self::SharedSecretMismatch,
            STATUS_SERVER_UNAVAILABLE => Self::ServerUnavailable,
            STATUS_SANDBOX_RECEIPT_SENT_TO_PRODUCTION => Self::SandboxReceiptSentToProduction,
            STATUS_PRODUCTION_RECEIPT_SENT_TO_SANDBOX => Self::ProductionReceiptSentToSandbox,
            STATUS_INTERNAL_DATA_ACCESS_ERROR => Self::InternalDataAccessError,
            STATUS_USER_ACCOUNT_NOT_FOUND => Self::UserAccountNotFound,
            c if RESERVED_STATUS_RANGE.contains(&c) => Self::Reserved(c),
            c => Self::Undocumented(c),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Valid => STATUS_VALID,
            Self::ValidButSubscriptionExpired => STATUS_VALID_BUT_SUBSCRIPTION_EXPIRED,
            Self::NotPost => STATUS_NOT_POST,
            Self::NoLongerSent => STATUS_NO_LONGER_SENT,
            Self::MalformedReceiptData => STATUS_MALFORMED_RECEIPT_DATA,
            Self::NotAuthenticated => STATUS_NOT_AUTHENTICATED,
            Self::SharedSecretMismatch => STATUS_SHARED_SECRET_MISMATCH,
            Self::ServerUnavailable => STATUS_SERVER_UNAVAILABLE,
            Self::SandboxReceiptSentToProduction => STATUS_SANDBOX_RECEIPT_SENT_TO_PRODUCTION,
            Self::ProductionReceiptSentToSandbox => STATUS_PRODUCTION_RECEIPT_SENT_TO_SANDBOX,
            Self::InternalDataAccessError => STATUS_INTERNAL_DATA_ACCESS_ERROR,
            Self::UserAccountNotFound => STATUS_USER_ACCOUNT_NOT_FOUND,
            Self::Reserved(c) | Self::Undocumented(c) => *c,
        }
    }

    /// Whether Apple returns the decoded receipt alongside this status.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Valid | Self::ValidButSubscriptionExpired)
    }

    /// Whether Apple documents this status as a temporary issue worth
    /// retrying later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::MalformedReceiptData
                | Self::ServerUnavailable
                | Self::InternalDataAccessError
                | Self::Reserved(_)
        )
    }

    /// Whether the code is one Apple documents individually.
    pub fn is_documented(&self) -> bool {
        !matches!(self, Self::Reserved(_) | Self::Undocumented(_))
    }

    /// The environment the receipt should be re-sent to, if the status says it
    /// was sent to the wrong one.
    pub fn redirect_environment(&self) -> Option<Environment> {
        match self {
            Self::SandboxReceiptSentToProduction => Some(Environment::Sandbox),
            Self::ProductionReceiptSentToSandbox => Some(Environment::Production),
            _ => None,
        }
    }
}
