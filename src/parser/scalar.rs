//! Lenient scalar deserializers for hand-written JSON.
//!
//! Layout files are edited by hand, so values that are conceptually CSS text
//! (`"items": 3`, `"min": 540`) show up as numbers as often as strings. These
//! helpers normalize them to strings at the serde boundary.

use indexmap::IndexMap;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Converts a JSON scalar to the text CSS would see.
///
/// Returns `None` for `null`, arrays and objects.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Formats a number without a trailing `.0` on whole floats.
///
/// JSON5 sources hand every number over as a float, so `540` must not become
/// `"540.0"`.
pub fn number_to_string(number: &Number) -> String {
    match (number.as_i64(), number.as_f64()) {
        (Some(int), _) => int.to_string(),
        (None, Some(float)) => float.to_string(),
        (None, None) => number.to_string(),
    }
}

/// Deserializes a required scalar as a string.
pub fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a string or number, got {value}")))
}

/// Deserializes an optional scalar as a string. `null` maps to `None`.
pub fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => scalar_to_string(&v)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a string or number, got {v}"))),
    }
}

/// Deserializes an optional CSS length.
///
/// Bare numbers are read as pixels. Empty strings and a bare `0` count as
/// absent, so a breakpoint with `"min": 0` has no lower bound.
pub fn deserialize_optional_length<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(format!("{}px", number_to_string(&n)))),
        Some(other) => Err(D::Error::custom(format!(
            "expected a CSS length, got {other}"
        ))),
    }
}

/// Deserializes a CSS property map, stringifying scalar values in order.
pub fn deserialize_css_properties<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(property, value)| {
            scalar_to_string(&value)
                .map(|text| (property.clone(), text))
                .ok_or_else(|| {
                    D::Error::custom(format!("property '{property}' must be a scalar, got {value}"))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "deserialize_optional_length")]
        min: Option<String>,
        #[serde(default, deserialize_with = "deserialize_css_properties")]
        properties: IndexMap<String, String>,
    }

    #[test]
    fn test_numeric_length_reads_as_pixels() {
        let fields: Fields = serde_json::from_value(json!({ "min": 540 })).unwrap();
        assert_eq!(fields.min.as_deref(), Some("540px"));
    }

    #[test]
    fn test_whole_float_has_no_fraction() {
        assert_eq!(scalar_to_string(&json!(720.0)).as_deref(), Some("720"));
        assert_eq!(scalar_to_string(&json!(66.67)).as_deref(), Some("66.67"));
        assert_eq!(scalar_to_string(&json!(-1)).as_deref(), Some("-1"));
    }

    #[test]
    fn test_empty_length_is_absent() {
        let fields: Fields = serde_json::from_value(json!({ "min": "" })).unwrap();
        assert_eq!(fields.min, None);

        let fields: Fields = serde_json::from_value(json!({ "min": 0 })).unwrap();
        assert_eq!(fields.min, None);

        let fields: Fields = serde_json::from_value(json!({ "min": 0.0 })).unwrap();
        assert_eq!(fields.min, None);

        let fields: Fields = serde_json::from_value(json!({})).unwrap();
        assert_eq!(fields.min, None);
    }

    #[test]
    fn test_properties_keep_order_and_stringify() {
        let fields: Fields = serde_json::from_value(json!({
            "properties": { "--layout-ga": "1 / 1 / 3 / 2", "--_ci": 3, "order": -1 }
        }))
        .unwrap();

        let entries: Vec<_> = fields.properties.iter().collect();
        assert_eq!(entries[0], (&"--layout-ga".to_string(), &"1 / 1 / 3 / 2".to_string()));
        assert_eq!(entries[1], (&"--_ci".to_string(), &"3".to_string()));
        assert_eq!(entries[2], (&"order".to_string(), &"-1".to_string()));
    }

    #[test]
    fn test_nested_property_value_is_rejected() {
        let result: Result<Fields, _> =
            serde_json::from_value(json!({ "properties": { "grid": { "a": 1 } } }));
        assert!(result.is_err());
    }
}
