use base64::{prelude::BASE64_STANDARD, Engine as _};

use crate::errors::ReceiptPayloadError;

use super::{
    common::Environment, pending_renewal_info::PendingRenewalInfo, receipt::Receipt,
    transaction::LatestReceiptInfo, verify_receipt_status::VerifyReceiptStatus,
};

/// Classified response body of the verifyReceipt endpoint.
///
/// Apple does not tag the two shapes; a body is a success if and only if it
/// carries a `receipt` object.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyReceiptResult {
    Success(VerifyReceiptSuccess),
    Error {
        /// Raw status, verbatim.
        status: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReceiptSuccess {
    /// Raw status, verbatim. Usually 0 or 21006, but not restricted to those.
    pub status: i64,
    pub environment: Option<Environment>,
    pub receipt: Receipt,
    /// Base64 encoded latest receipt. Only present if the receipt contains
    /// auto-renewable subscriptions.
    pub latest_receipt: Option<String>,
    /// All in-app purchase transactions, except finished consumables. `None`
    /// if the field was absent from the response.
    pub latest_receipt_info: Option<Vec<LatestReceiptInfo>>,
    /// `None` if the field was absent from the response.
    pub pending_renewal_info: Option<Vec<PendingRenewalInfo>>,
}

impl VerifyReceiptResult {
    pub fn status(&self) -> i64 {
        match self {
            Self::Success(s) => s.status,
            Self::Error { status } => *status,
        }
    }

    pub fn status_kind(&self) -> VerifyReceiptStatus {
        VerifyReceiptStatus::from_code(self.status())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&VerifyReceiptSuccess> {
        match self {
            Self::Success(s) => Some(s),
            Self::Error { .. } => None,
        }
    }
}

impl VerifyReceiptSuccess {
    pub fn status_kind(&self) -> VerifyReceiptStatus {
        VerifyReceiptStatus::from_code(self.status)
    }

    /// All `latest_receipt_info` entries belonging to one subscription
    /// lineage.
    pub fn latest_receipt_info_for<'a>(
        &'a self,
        original_transaction_id: &'a str,
    ) -> impl Iterator<Item = &'a LatestReceiptInfo> + 'a {
        self.latest_receipt_info
            .iter()
            .flatten()
            .filter(move |i| i.original_transaction_id() == original_transaction_id)
    }

    pub fn pending_renewal_info_for(
        &self,
        original_transaction_id: &str,
    ) -> Option<&PendingRenewalInfo> {
        self.pending_renewal_info
            .iter()
            .flatten()
            .find(|i| i.original_transaction_id == original_transaction_id)
    }

    /// Base64-decodes `latest_receipt`, if present.
    pub fn decode_latest_receipt(&self) -> Result<Option<Vec<u8>>, ReceiptPayloadError> {
        self.latest_receipt
            .as_deref()
            .map(|r| decode_receipt_data("VerifyReceiptSuccess::decode_latest_receipt", r))
            .transpose()
    }
}

pub(crate) fn decode_receipt_data(
    context: &str,
    data: &str,
) -> Result<Vec<u8>, ReceiptPayloadError> {
    BASE64_STANDARD.decode(data).map_err(|e| {
        ReceiptPayloadError::malformed_with_debug(context, "failed to base64-decode receipt", &e)
    })
}
