//! Declarative field schemas.
//!
//! The backend ships two incompatible payload shapes. Both are described here
//! as data so the render path stays a single loop:
//!
//! | Schema | Payload | Rendered into |
//! |--------|---------|---------------|
//! | `key_value` | `{key, value}` | status field, one `Label: value` line each |
//! | `environment` | `{Temperature, Humidity, Moisture, CO2}` | one target per field |

/// Status/primary display field.
pub const STATUS_TARGET: &str = "sensor-data";
pub const VIDEO_TARGET: &str = "video-feed";
pub const PLACEHOLDER_TARGET: &str = "video-placeholder";

/// Text shown in sensor fields when no valid value is available.
pub const NOT_AVAILABLE: &str = "N/A";

/// One payload key and where it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    /// Key in the JSON payload (case-sensitive).
    pub key: &'static str,
    /// Label used when the field is folded into the status summary.
    pub label: &'static str,
    /// Dedicated target, or `None` to render into the status summary.
    pub target: Option<&'static str>,
}

const KEY_VALUE_FIELDS: &[FieldBinding] = &[
    FieldBinding {
        key: "key",
        label: "Key",
        target: None,
    },
    FieldBinding {
        key: "value",
        label: "Value",
        target: None,
    },
];

const ENVIRONMENT_FIELDS: &[FieldBinding] = &[
    FieldBinding {
        key: "Temperature",
        label: "Temperature",
        target: Some("temperature"),
    },
    FieldBinding {
        key: "Humidity",
        label: "Humidity",
        target: Some("humidity"),
    },
    FieldBinding {
        key: "Moisture",
        label: "Moisture",
        target: Some("moisture"),
    },
    FieldBinding {
        key: "CO2",
        label: "CO2",
        target: Some("co2"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    KeyValue,
    Environment,
}

impl Schema {
    /// Parse a schema name as accepted in `SENSOR_SCHEMA`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "key_value" | "keyvalue" | "kv" => Some(Self::KeyValue),
            "environment" | "env" => Some(Self::Environment),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::KeyValue => "key_value",
            Self::Environment => "environment",
        }
    }

    #[must_use]
    pub fn fields(self) -> &'static [FieldBinding] {
        match self {
            Self::KeyValue => KEY_VALUE_FIELDS,
            Self::Environment => ENVIRONMENT_FIELDS,
        }
    }

    /// Fields folded into the status summary.
    pub fn summary_fields(self) -> impl Iterator<Item = &'static FieldBinding> {
        self.fields().iter().filter(|f| f.target.is_none())
    }

    /// Fields with a dedicated display target, paired with that target.
    pub fn sensor_fields(self) -> impl Iterator<Item = (&'static FieldBinding, &'static str)> {
        self.fields()
            .iter()
            .filter_map(|f| f.target.map(|target| (f, target)))
    }

    /// Every element id the panel binds to for this schema.
    #[must_use]
    pub fn target_ids(self) -> Vec<&'static str> {
        let mut ids = vec![STATUS_TARGET, VIDEO_TARGET, PLACEHOLDER_TARGET];
        ids.extend(self.sensor_fields().map(|(_, target)| target));
        ids
    }
}
