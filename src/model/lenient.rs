//! Field decoders that never fail on odd upstream values.
//!
//! The source records are produced by hand-maintained JSON exports, so fields
//! go missing, arrive as `null`, or carry numbers as strings. These helpers are
//! used with `#[serde(default, deserialize_with = "...")]` and map anything
//! unusable to a neutral value instead of rejecting the whole record.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Numeric field: absent, `null` or non-numeric becomes `0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64).unwrap_or(0.0))
}

/// Optional area: absent, `null`, non-numeric or zero becomes `None`.
pub fn optional_area<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .filter(|area| *area != 0.0))
}

/// Text field: strings pass through, numbers and booleans are stringified,
/// anything else becomes empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// List field: `null` or absent becomes an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Nested object: decoded when it is an object, dropped otherwise.
///
/// Failed records often carry an error string in place of the payload, so a
/// non-object is not an error. A malformed object still is.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        value: f64,
        #[serde(default, deserialize_with = "optional_area")]
        area: Option<f64>,
        #[serde(default, deserialize_with = "text")]
        label: String,
        #[serde(default, deserialize_with = "list")]
        items: Vec<u32>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).expect("probe decodes")
    }

    #[test]
    fn missing_and_null_numbers_become_zero() {
        assert_eq!(probe("{}").value, 0.0);
        assert_eq!(probe(r#"{"value": null}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": "n/a"}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": [1]}"#).value, 0.0);
    }

    #[test]
    fn numeric_strings_are_read_as_numbers() {
        assert_eq!(probe(r#"{"value": " 120.5 "}"#).value, 120.5);
        assert_eq!(probe(r#"{"value": 42}"#).value, 42.0);
    }

    #[test]
    fn zero_or_missing_area_is_absent() {
        assert_eq!(probe("{}").area, None);
        assert_eq!(probe(r#"{"area": 0}"#).area, None);
        assert_eq!(probe(r#"{"area": "unknown"}"#).area, None);
        assert_eq!(probe(r#"{"area": 850}"#).area, Some(850.0));
    }

    #[test]
    fn text_accepts_numbers() {
        assert_eq!(probe(r#"{"label": 3}"#).label, "3");
        assert_eq!(probe(r#"{"label": null}"#).label, "");
    }

    #[test]
    fn null_list_is_empty() {
        assert_eq!(probe(r#"{"items": null}"#).items, Vec::<u32>::new());
        assert_eq!(probe(r#"{"items": [1, 2]}"#).items, vec![1, 2]);
    }
}
