//! Forgiving deserializers for backend columns
//!
//! Views return ids and counts as numbers, numeric strings or null depending
//! on the column type. Missing or malformed values fall back instead of
//! failing the whole read.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text or id column: strings pass through, numbers and booleans are
/// stringified, anything else is `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Count column: numbers and numeric strings are truncated to integers;
/// null, missing or unparseable values count as zero.
pub fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "opt_text")]
        id: Option<String>,
        #[serde(default, deserialize_with = "count")]
        total: i64,
    }

    fn row(value: Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_accept_numbers_and_strings() {
        assert_eq!(row(json!({"id": 7})).id.as_deref(), Some("7"));
        assert_eq!(row(json!({"id": "7"})).id.as_deref(), Some("7"));
        assert_eq!(row(json!({"id": null})).id, None);
        assert_eq!(row(json!({})).id, None);
    }

    #[test]
    fn test_counts_default_to_zero() {
        assert_eq!(row(json!({"total": 10})).total, 10);
        assert_eq!(row(json!({"total": "12"})).total, 12);
        assert_eq!(row(json!({"total": 3.0})).total, 3);
        assert_eq!(row(json!({"total": "many"})).total, 0);
        assert_eq!(row(json!({"total": null})).total, 0);
        assert_eq!(row(json!({})).total, 0);
    }
}
