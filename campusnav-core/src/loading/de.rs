use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Integer(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Node ids may be written as strings or integers; both become strings
pub(super) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match IdValue::deserialize(deserializer)? {
        IdValue::Text(text) => Ok(text),
        IdValue::Integer(number) => Ok(number.to_string()),
    }
}

/// Edge weights are coerced to floats, numeric strings included
pub(super) fn deserialize_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(weight)) => Ok(Some(weight)),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid weight '{text}': {e}"))),
    }
}
