use std::ops::RangeInclusive;

/// Production endpoint of the (deprecated) verifyReceipt API. This crate never
/// calls it; the constants are exposed for the caller's HTTP client.
///
/// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
pub const VERIFY_RECEIPT_PRODUCTION_URL: &str = "https://buy.itunes.apple.com/verifyReceipt";
pub const VERIFY_RECEIPT_SANDBOX_URL: &str = "https://sandbox.itunes.apple.com/verifyReceipt";

// Status codes:
// https://developer.apple.com/documentation/appstorereceipts/status
// ----------------------------

pub const STATUS_VALID: i64 = 0;
pub const STATUS_VALID_BUT_SUBSCRIPTION_EXPIRED: i64 = 21006;

pub const STATUS_NOT_POST: i64 = 21000;
pub const STATUS_NO_LONGER_SENT: i64 = 21001;
pub const STATUS_MALFORMED_RECEIPT_DATA: i64 = 21002;
pub const STATUS_NOT_AUTHENTICATED: i64 = 21003;
pub const STATUS_SHARED_SECRET_MISMATCH: i64 = 21004;
pub const STATUS_SERVER_UNAVAILABLE: i64 = 21005;
pub const STATUS_SANDBOX_RECEIPT_SENT_TO_PRODUCTION: i64 = 21007;
pub const STATUS_PRODUCTION_RECEIPT_SENT_TO_SANDBOX: i64 = 21008;
pub const STATUS_INTERNAL_DATA_ACCESS_ERROR: i64 = 21009;
pub const STATUS_USER_ACCOUNT_NOT_FOUND: i64 = 21010;

/// Apple documents that codes in this range may be returned, without
/// describing them individually.
pub const RESERVED_STATUS_RANGE: RangeInclusive<i64> = 21100..=21199;
