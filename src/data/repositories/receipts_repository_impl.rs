use serde_json::Value;

use crate::{
    data::{
        datasources::{
            app_store_receipts_datasource::{
                AppStoreReceiptsDatasource, AppStoreReceiptsDatasourceImpl,
            },
            utils::{non_empty, optional_date, required_date},
        },
        models::{
            app_store_server_notifications::response_body_v1_model as an,
            verify_receipt::{
                in_app_purchase_transaction_model as vt, pending_renewal_info_model as vp,
                receipt_model as vr, response_body_model as vb,
            },
        },
    },
    domain::{
        entities::{
            pending_renewal_info::PendingRenewalInfo,
            receipt::Receipt,
            server_notification::{NotificationType, ServerNotification, UnifiedReceipt},
            transaction::{Cancellation, InAppPurchaseTransaction, LatestReceiptInfo},
            verify_receipt_result::{VerifyReceiptResult, VerifyReceiptSuccess},
        },
        repositories::receipts_repository::ReceiptsRepository,
    },
    errors::ReceiptPayloadError,
};

pub(crate) struct ReceiptsRepositoryImpl<D: AppStoreReceiptsDatasource> {
    app_store_receipts_datasource: D,
}

impl<D: AppStoreReceiptsDatasource> ReceiptsRepository for ReceiptsRepositoryImpl<D> {
    fn classify_verify_receipt_response(
        &self,
        raw: &Value,
    ) -> Result<VerifyReceiptResult, ReceiptPayloadError> {
        Ok(
            match self
                .app_store_receipts_datasource
                .parse_verify_receipt_response(raw)?
            {
                vb::VerifyReceiptResponseModel::Success(m) => {
                    VerifyReceiptResult::Success(VerifyReceiptSuccess::from_model(m)?)
                }
                vb::VerifyReceiptResponseModel::Error { status } => {
                    VerifyReceiptResult::Error { status }
                }
            },
        )
    }

    fn classify_server_notification(
        &self,
        raw: &Value,
    ) -> Result<ServerNotification, ReceiptPayloadError> {
        let (notification_type, m) = self
            .app_store_receipts_datasource
            .parse_server_notification(raw)?;
        ServerNotification::from_model(notification_type, m)
    }
}

impl ReceiptsRepositoryImpl<AppStoreReceiptsDatasourceImpl> {
    pub(crate) fn new() -> Self {
        Self {
            app_store_receipts_datasource: AppStoreReceiptsDatasourceImpl::new(),
        }
    }
}

impl VerifyReceiptSuccess {
    fn from_model(m: vb::VerifyReceiptSuccessModel) -> Result<Self, ReceiptPayloadError> {
        Ok(VerifyReceiptSuccess {
            status: m.status,
            environment: m.environment,
            receipt: Receipt::from_model(m.receipt)?,
            latest_receipt: m.latest_receipt,
            latest_receipt_info: m
                .latest_receipt_info
                .map(|infos| {
                    infos
                        .into_iter()
                        .map(LatestReceiptInfo::from_model)
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?,
            pending_renewal_info: m
                .pending_renewal_info
                .map(|infos| {
                    infos
                        .into_iter()
                        .map(PendingRenewalInfo::from_model)
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?,
        })
    }
}

impl Receipt {
    fn from_model(m: vr::ReceiptModel) -> Result<Self, ReceiptPayloadError> {
        const CXT: &str = "Receipt::from_model";
        Ok(Receipt {
            adam_id: m.adam_id,
            app_item_id: m.app_item_id,
            application_version: m.application_version,
            bundle_id: non_empty(CXT, "bundle_id", m.bundle_id)?,
            download_id: m.download_id,
            expiration_date: optional_date(
                CXT,
                "expiration_date",
                m.expiration_date,
                m.expiration_date_ms,
                m.expiration_date_pst,
            )?,
            in_app: m
                .in_app
                .into_iter()
                .map(InAppPurchaseTransaction::from_model)
                .collect::<Result<Vec<_>, _>>()?,
            original_application_version: m.original_application_version,
            original_purchase_date: required_date(
                CXT,
                "original_purchase_date",
                m.original_purchase_date,
                m.original_purchase_date_ms,
                m.original_purchase_date_pst,
            )?,
            preorder_date: optional_date(
                CXT,
                "preorder_date",
                m.preorder_date,
                m.preorder_date_ms,
                m.preorder_date_pst,
            )?,
            receipt_creation_date: required_date(
                CXT,
                "receipt_creation_date",
                m.receipt_creation_date,
                m.receipt_creation_date_ms,
                m.receipt_creation_date_pst,
            )?,
            receipt_type: m.receipt_type,
            request_date: required_date(
                CXT,
                "request_date",
                m.request_date,
                m.request_date_ms,
                m.request_date_pst,
            )?,
            version_external_identifier: m.version_external_identifier,
        })
    }
}

impl InAppPurchaseTransaction {
    fn from_model(m: vt::InAppPurchaseTransactionModel) -> Result<Self, ReceiptPayloadError> {
        const CXT: &str = "InAppPurchaseTransaction::from_model";
        let cancellation_date = optional_date(
            CXT,
            "cancellation_date",
            m.cancellation_date,
            m.cancellation_date_ms,
            m.cancellation_date_pst,
        )?;
        if cancellation_date.is_none() && m.cancellation_reason.is_some() {
            return Err(ReceiptPayloadError::malformed(
                CXT,
                "`cancellation_reason` present without `cancellation_date`",
            ));
        }
        Ok(InAppPurchaseTransaction {
            product_id: non_empty(CXT, "product_id", m.product_id)?,
            transaction_id: non_empty(CXT, "transaction_id", m.transaction_id)?,
            original_transaction_id: m.original_transaction_id,
            purchase_date: required_date(
                CXT,
                "purchase_date",
                m.purchase_date,
                m.purchase_date_ms,
                m.purchase_date_pst,
            )?,
            original_purchase_date: required_date(
                CXT,
                "original_purchase_date",
                m.original_purchase_date,
                m.original_purchase_date_ms,
                m.original_purchase_date_pst,
            )?,
            cancellation: cancellation_date.map(|date| Cancellation {
                date,
                reason: m.cancellation_reason,
            }),
            expires_date: optional_date(
                CXT,
                "expires_date",
                m.expires_date,
                m.expires_date_ms,
                m.expires_date_pst,
            )?,
            is_in_intro_offer_period: m.is_in_intro_offer_period,
            is_trial_period: m.is_trial_period,
            promotional_offer_id: m.promotional_offer_id,
            quantity: m.quantity,
            web_order_line_item_id: m.web_order_line_item_id,
        })
    }
}

impl LatestReceiptInfo {
    fn from_model(m: vt::LatestReceiptInfoModel) -> Result<Self, ReceiptPayloadError> {
        Ok(LatestReceiptInfo {
            transaction: InAppPurchaseTransaction::from_model(m.transaction)?,
            is_upgraded: m.is_upgraded,
            offer_code_ref_name: m.offer_code_ref_name,
            subscription_group_identifier: m.subscription_group_identifier,
        })
    }
}

impl PendingRenewalInfo {
    fn from_model(m: vp::PendingRenewalInfoModel) -> Result<Self, ReceiptPayloadError> {
        const CXT: &str = "PendingRenewalInfo::from_model";
        Ok(PendingRenewalInfo {
            auto_renew_product_id: m.auto_renew_product_id,
            auto_renew_status: m.auto_renew_status,
            expiration_intent: m.expiration_intent,
            grace_period_expires_date: optional_date(
                CXT,
                "grace_period_expires_date",
                m.grace_period_expires_date,
                m.grace_period_expires_date_ms,
                m.grace_period_expires_date_pst,
            )?,
            is_in_billing_retry_period: m.is_in_billing_retry_period,
            offer_code_ref_name: m.offer_code_ref_name,
            original_transaction_id: non_empty(
                CXT,
                "original_transaction_id",
                m.original_transaction_id,
            )?,
            price_consent_status: m.price_consent_status,
            product_id: m.product_id,
        })
    }
}

impl ServerNotification {
    fn from_model(
        notification_type: NotificationType,
        m: an::ResponseBodyV1Model,
    ) -> Result<Self, ReceiptPayloadError> {
        const CXT: &str = "ServerNotification::from_model";
        Ok(ServerNotification {
            notification_type,
            password: m.password,
            unified_receipt: UnifiedReceipt::from_model(m.unified_receipt)?,
            environment: m.environment,
            bid: m.bid,
            bvrs: m.bvrs,
            auto_renew_adam_id: m.auto_renew_adam_id,
            auto_renew_product_id: m.auto_renew_product_id,
            auto_renew_status: m.auto_renew_status,
            auto_renew_status_change_date: optional_date(
                CXT,
                "auto_renew_status_change_date",
                m.auto_renew_status_change_date,
                m.auto_renew_status_change_date_ms,
                m.auto_renew_status_change_date_pst,
            )?,
            expiration_intent: m.expiration_intent,
        })
    }
}

impl UnifiedReceipt {
    fn from_model(m: an::UnifiedReceiptModel) -> Result<Self, ReceiptPayloadError> {
        Ok(UnifiedReceipt {
            environment: m.environment,
            latest_receipt: m.latest_receipt,
            latest_receipt_info: m
                .latest_receipt_info
                .into_iter()
                .map(LatestReceiptInfo::from_model)
                .collect::<Result<Vec<_>, _>>()?,
            pending_renewal_info: m
                .pending_renewal_info
                .into_iter()
                .map(PendingRenewalInfo::from_model)
                .collect::<Result<Vec<_>, _>>()?,
            status: m.status,
        })
    }
}
