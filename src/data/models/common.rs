use serde::{de, Deserialize, Deserializer};

/// Deserializes an optional `"0"` / `"1"` string into a boolean.
pub(crate) fn numeric_flag_option<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"\"0\" or \"1\"",
        )),
    }
}

/// Deserializes a list that may be absent or `null` into a possibly empty
/// `Vec`. Use together with `#[serde(default)]`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
