use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::business::ServiceResponse;

use super::lenient;

const COMMON_KEYS: [&str; 5] = [
    "responseCode",
    "refernceNumber",
    "referenceNumber",
    "message",
    "Message",
];

/// Response body for methods the platform has not published a shape for.
///
/// The payload is kept as-is apart from the common code/reference/message
/// fields, which are stored as text so they can be read back uniformly.
#[derive(serde::Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RawResponse(pub Value);

impl From<Value> for RawResponse {
    fn from(mut value: Value) -> Self {
        if let Value::Object(fields) = &mut value {
            for key in COMMON_KEYS {
                let Some(field) = fields.get_mut(key) else {
                    continue;
                };
                if !field.is_string() {
                    if let Some(text) = lenient::scalar_text(field) {
                        *field = Value::String(text);
                    }
                }
            }
        }
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RawResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl RawResponse {
    fn text(&self, keys: &[&str]) -> &str {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl ServiceResponse for RawResponse {
    fn response_code(&self) -> &str {
        self.text(&["responseCode"])
    }
    fn reference_number(&self) -> &str {
        self.text(&["refernceNumber", "referenceNumber"])
    }
    fn message(&self) -> &str {
        self.text(&["message", "Message"])
    }
}
