//! Field decoders for response bodies.
//!
//! Failed calls come back with most fields set to `null`, and the platform
//! is loose about quoting codes and amounts. A `null` decodes to the field's
//! default; numbers and numeric strings are accepted interchangeably.

use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// Renders a scalar the way the platform would have quoted it.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_text(&value).ok_or_else(|| D::Error::custom(format!("expected text, got {value}")))
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("{n} is out of range"))),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected a number, got {other}"))),
    }
}

pub(crate) fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected an integer, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, Default, PartialEq)]
    #[serde(default)]
    struct Body {
        #[serde(deserialize_with = "text")]
        code: String,
        #[serde(deserialize_with = "number")]
        fee: f64,
        #[serde(deserialize_with = "integer")]
        withdrawal_code: i64,
    }

    fn body(json: &str) -> Result<Body, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn nulls_read_as_defaults() {
        assert_eq!(
            body(r#"{"code":null,"fee":null,"withdrawal_code":null}"#).unwrap(),
            Body::default()
        );
    }

    #[test]
    fn numbers_and_numeric_strings_are_interchangeable() {
        let parsed = body(r#"{"code":0,"fee":"52.50","withdrawal_code":"551903"}"#).unwrap();
        assert_eq!(parsed.code, "0");
        assert_eq!(parsed.fee, 52.5);
        assert_eq!(parsed.withdrawal_code, 551903);

        let parsed = body(r#"{"code":"-1","fee":10,"withdrawal_code":551903.0}"#).unwrap();
        assert_eq!(parsed.code, "-1");
        assert_eq!(parsed.fee, 10.0);
        assert_eq!(parsed.withdrawal_code, 551903);
    }

    #[test]
    fn structured_values_are_still_rejected() {
        assert!(body(r#"{"code":{"value":"0"}}"#).is_err());
        assert!(body(r#"{"fee":"ten naira"}"#).is_err());
        assert!(body(r#"{"withdrawal_code":12.5}"#).is_err());
    }
}
