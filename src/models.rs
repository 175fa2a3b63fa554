use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Payload returned by `GET /sensor_data`.
///
/// Field names depend on the backend variant, so the reading is kept as a raw
/// JSON object. A body that is valid JSON but not an object fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorReading {
    pub fields: Map<String, Value>,
}

impl SensorReading {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Backend-reported failure, if the payload carries a truthy `error` field.
    ///
    /// `null`, `false`, `0` and `""` count as no error.
    #[must_use]
    pub fn error(&self) -> Option<DomainError> {
        let value = self.fields.get("error")?;
        let truthy = match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        truthy.then(|| DomainError(display_value(value)))
    }
}

impl From<Map<String, Value>> for SensorReading {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Text for a payload value as a browser would stringify it.
///
/// Strings are shown verbatim and integral floats lose their fractional part
/// (`25.0` shows as `25`).
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.0}")
                } else {
                    f.to_string()
                }
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
