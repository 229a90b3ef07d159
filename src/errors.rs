use thiserror::Error;

/// Errors raised while classifying a receipt or notification payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptPayloadError {
    /// The payload does not have the structure documented by Apple (missing
    /// mandatory field, wrong JSON type, partial timestamp triple, ...).
    #[error("malformed payload ({context}): {details}")]
    MalformedPayload { context: String, details: String },

    /// The notification is structurally valid but carries a
    /// `notification_type` this crate does not know about. Usually means Apple
    /// added a new type; callers can log and ignore it.
    #[error("unknown notification type: {0}")]
    UnknownNotificationType(String),
}

impl ReceiptPayloadError {
    pub(crate) fn malformed(context: &str, details: impl Into<String>) -> Self {
        Self::MalformedPayload {
            context: context.to_string(),
            details: details.into(),
        }
    }

    pub(crate) fn malformed_with_debug(
        context: &str,
        details: &str,
        debug: &impl std::fmt::Debug,
    ) -> Self {
        Self::malformed(context, format!("{details}: {debug:?}"))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload { .. })
    }

    pub fn is_unknown_notification_type(&self) -> bool {
        matches!(self, Self::UnknownNotificationType(_))
    }
}
