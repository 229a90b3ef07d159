use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::{
    data::models::{
        common::null_as_empty,
        verify_receipt::{
            in_app_purchase_transaction_model::LatestReceiptInfoModel,
            pending_renewal_info_model::PendingRenewalInfoModel,
        },
    },
    domain::entities::common::{Environment, ExpirationIntent},
};

/// Data structure sent by version 1 App Store Server Notifications.
///
/// `notification_type` is not part of this model: it is checked before the
/// rest of the body, so that an unrecognized value can be reported separately
/// from a structural problem.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/responsebodyv1
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBodyV1Model {
    /// An identifier that App Store Connect generates and the App Store uses
    /// to uniquely identify the auto-renewable subscription that the user's
    /// subscription renews.
    pub(crate) auto_renew_adam_id: Option<String>,
    /// The product identifier of the auto-renewable subscription that the
    /// user's subscription renews.
    pub(crate) auto_renew_product_id: Option<String>,
    /// The current renewal status for an auto-renewable subscription product.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub(crate) auto_renew_status: Option<bool>,
    /// The time at which the user turned on or off the renewal status.
    pub(crate) auto_renew_status_change_date: Option<String>,
    pub(crate) auto_renew_status_change_date_ms: Option<String>,
    pub(crate) auto_renew_status_change_date_pst: Option<String>,
    /// The environment for which the App Store generated the receipt.
    pub(crate) environment: Option<Environment>,
    /// The reason a subscription expired.
    pub(crate) expiration_intent: Option<ExpirationIntent>,
    /// The same value as the shared secret submitted in the password field of
    /// the requestBody when validating receipts.
    pub(crate) password: String,
    /// An object that contains information about the most recent in-app
    /// purchase transactions for the app.
    pub(crate) unified_receipt: UnifiedReceiptModel,
    /// The bundle identifier of the app.
    pub(crate) bid: Option<String>,
    /// The bundle version of the app.
    pub(crate) bvrs: Option<String>,
}

/// https://developer.apple.com/documentation/appstoreservernotifications/unified_receipt
#[derive(Debug, Deserialize)]
pub(crate) struct UnifiedReceiptModel {
    /// The environment for which the App Store generated the receipt.
    pub(crate) environment: Option<Environment>,
    /// The latest Base64-encoded app receipt.
    pub(crate) latest_receipt: String,
    /// An array that contains the latest 100 in-app purchase transactions of
    /// the decoded value in latest_receipt.
    pub(crate) latest_receipt_info: Vec<LatestReceiptInfoModel>,
    /// An array where each element contains the pending renewal information
    /// for each auto-renewable subscription identified in product_id.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) pending_renewal_info: Vec<PendingRenewalInfoModel>,
    /// The status code, where 0 indicates that the notification is valid.
    pub(crate) status: Option<i64>,
}
