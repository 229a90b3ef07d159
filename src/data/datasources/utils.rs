use serde_json::{Map, Value};

use crate::{domain::entities::apple_date::AppleDate, errors::ReceiptPayloadError};

pub(crate) fn require_object<'a>(
    cxt: &str,
    raw: &'a Value,
) -> Result<&'a Map<String, Value>, ReceiptPayloadError> {
    raw.as_object().ok_or_else(|| {
        ReceiptPayloadError::malformed(cxt, format!("expected a JSON object, got {}", kind(raw)))
    })
}

pub(crate) fn require_str<'a>(
    cxt: &str,
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, ReceiptPayloadError> {
    match object.get(field) {
        None => Err(ReceiptPayloadError::malformed(
            cxt,
            format!("missing field `{field}`"),
        )),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ReceiptPayloadError::malformed(
            cxt,
            format!("field `{field}` should be a string, got {}", kind(other)),
        )),
    }
}

pub(crate) fn require_i64(
    cxt: &str,
    object: &Map<String, Value>,
    field: &str,
) -> Result<i64, ReceiptPayloadError> {
    match object.get(field) {
        None => Err(ReceiptPayloadError::malformed(
            cxt,
            format!("missing field `{field}`"),
        )),
        Some(v) => v.as_i64().ok_or_else(|| {
            ReceiptPayloadError::malformed(
                cxt,
                format!("field `{field}` should be an integer, got {v}"),
            )
        }),
    }
}

/// Builds a date from its three wire members (`x`, `x_ms`, `x_pst`). Either
/// all three are present, or none are.
pub(crate) fn optional_date(
    cxt: &str,
    field: &str,
    date: Option<String>,
    date_ms: Option<String>,
    date_pst: Option<String>,
) -> Result<Option<AppleDate>, ReceiptPayloadError> {
    match (date, date_ms, date_pst) {
        (Some(date), Some(date_ms), Some(date_pst)) => Ok(Some(AppleDate {
            date,
            date_ms,
            date_pst,
        })),
        (None, None, None) => Ok(None),
        (date, date_ms, date_pst) => Err(ReceiptPayloadError::malformed(
            cxt,
            format!(
                "incomplete date `{field}` (`{field}`: {}, `{field}_ms`: {}, `{field}_pst`: {})",
                presence(&date),
                presence(&date_ms),
                presence(&date_pst),
            ),
        )),
    }
}

/// Same as `optional_date`, but the date must be present.
pub(crate) fn required_date(
    cxt: &str,
    field: &str,
    date: Option<String>,
    date_ms: Option<String>,
    date_pst: Option<String>,
) -> Result<AppleDate, ReceiptPayloadError> {
    optional_date(cxt, field, date, date_ms, date_pst)?.ok_or_else(|| {
        ReceiptPayloadError::malformed(cxt, format!("missing required date `{field}`"))
    })
}

pub(crate) fn non_empty(
    cxt: &str,
    field: &str,
    value: String,
) -> Result<String, ReceiptPayloadError> {
    if value.is_empty() {
        return Err(ReceiptPayloadError::malformed(
            cxt,
            format!("field `{field}` is empty"),
        ));
    }
    Ok(value)
}

fn presence(v: &Option<String>) -> &'static str {
    if v.is_some() {
        "present"
    } else {
        "missing"
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
