//! Payload transform rules
//!
//! Every topic decodes through one of a fixed set of named transforms,
//! selected per descriptor via [`DecodeRule`]; writable topics encode back
//! through an [`EncodeRule`]. Each rule is total over the string domain:
//! malformed input resolves to [`EntityValue::Null`] (or a descriptive
//! placeholder for the enumerated lookups), never to an error.

use aquamon_core::EntityValue;

use crate::models::read_heatpump_model;

/// Operating mode code table. Only a curated subset of the protocol's codes
/// is mapped — the cooling modes (1, 5, 7, 8) are intentionally excluded
/// and stay unmapped.
pub const OPERATING_MODES: &[(&str, &str)] = &[
    ("0", "Heat only"),
    ("2", "Auto(Heat)"),
    ("3", "DHW only"),
    ("4", "Heat+DHW"),
    ("6", "Auto(Heat)+DHW"),
];

/// Select options for the operating mode, in table order.
pub const OPERATING_MODE_OPTIONS: &[&str] = &[
    "Heat only",
    "Auto(Heat)",
    "DHW only",
    "Heat+DHW",
    "Auto(Heat)+DHW",
];

/// Select options for the quiet mode level.
pub const QUIET_MODE_OPTIONS: &[&str] = &["Off", "1", "2", "3", "Scheduled"];

/// `"1"` → true, `"0"` → false, anything else → `None`.
pub fn bit_to_bool(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

/// Map an operating mode code to its human-readable name.
///
/// Unmapped codes keep their raw value visible in a descriptive string so
/// diagnostics can tell an intentionally excluded mode apart from plain
/// `Null`.
pub fn read_operating_mode(value: &str) -> String {
    OPERATING_MODES
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Unknown operating mode value: {value}"))
}

/// Reverse lookup: mode name back to its wire code. Names outside the
/// curated table (including the "Unknown …" decode placeholder) have no
/// code.
pub fn operating_mode_to_code(name: &str) -> Option<&'static str> {
    OPERATING_MODES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}

/// Quiet mode levels range 0–4; 0 and 4 carry semantic labels, the middle
/// levels pass through as their own string.
pub fn read_quiet_mode(value: &str) -> String {
    match value {
        "4" => "Scheduled".to_string(),
        "0" => "Off".to_string(),
        other => other.to_string(),
    }
}

/// Exact inverse of [`read_quiet_mode`] over the declared option list.
pub fn write_quiet_mode(selected: &str) -> Option<String> {
    match selected {
        "Off" => Some("0".to_string()),
        "Scheduled" => Some("4".to_string()),
        other => other.trim().parse::<i64>().ok().map(|n| n.to_string()),
    }
}

/// `"0"` → Room, `"1"` → Tank, anything else is logged and dropped.
pub fn read_threeway_valve(value: &str) -> Option<&'static str> {
    match value {
        "0" => Some("Room"),
        "1" => Some("Tank"),
        other => {
            tracing::info!(value = other, "unhandled three-way valve state");
            None
        }
    }
}

/// The device reports powerful mode in 30-minute increments.
pub fn read_powerful_mode_time(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().map(|n| n * 30)
}

/// Extract one numeric field from the HeishaMon stats JSON document.
///
/// A present-but-zero field decodes to `None` exactly like an absent one.
/// That conflation is the established contract of this topic set; keep it.
pub fn read_stats_field(field: &str, json_doc: &str) -> Option<f64> {
    let doc: serde_json::Value = serde_json::from_str(json_doc).ok()?;
    let value = match doc.get(field)? {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if value == 0.0 {
        return None;
    }
    Some(value)
}

/// Millisecond readings scale to seconds; `None` (and zero, see
/// [`read_stats_field`]) propagates.
pub fn ms_to_secs(value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v != 0.0 => Some(v / 1000.0),
        _ => None,
    }
}

/// How to decode a raw payload into an [`EntityValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRule {
    /// Payload passes through as a string
    Text,
    /// Parse as `i64`
    Integer,
    /// Parse as `f64`
    Float,
    /// `"1"`/`"0"` bit flag
    BitToBool,
    /// Operating mode code table
    OperatingMode,
    /// Quiet mode level with labeled endpoints
    QuietModeLevel,
    /// Three-way valve position
    ThreeWayValve,
    /// Powerful mode remaining time (30-minute steps)
    PowerfulModeTime,
    /// Heat pump model table lookup
    HeatPumpModel,
    /// Named numeric field of the stats JSON document
    StatsField(&'static str),
    /// Stats field reported in milliseconds, scaled to seconds
    StatsFieldMsToSecs(&'static str),
}

impl DecodeRule {
    /// Decode a raw payload. Total: malformed input yields `Null`, the
    /// enumerated lookups yield their descriptive fallback strings.
    pub fn apply(&self, payload: &str) -> EntityValue {
        match self {
            Self::Text => EntityValue::String(payload.to_string()),
            Self::Integer => payload.trim().parse::<i64>().ok().into(),
            Self::Float => payload.trim().parse::<f64>().ok().into(),
            Self::BitToBool => bit_to_bool(payload).into(),
            Self::OperatingMode => EntityValue::String(read_operating_mode(payload)),
            Self::QuietModeLevel => EntityValue::String(read_quiet_mode(payload)),
            Self::ThreeWayValve => read_threeway_valve(payload).into(),
            Self::PowerfulModeTime => read_powerful_mode_time(payload).into(),
            Self::HeatPumpModel => EntityValue::String(read_heatpump_model(payload)),
            Self::StatsField(field) => read_stats_field(field, payload).into(),
            Self::StatsFieldMsToSecs(field) => {
                ms_to_secs(read_stats_field(field, payload)).into()
            }
        }
    }
}

/// How to encode a validated user-chosen value into an outbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeRule {
    /// Render the value back as a decimal integer
    Integer,
    /// Inverse of [`DecodeRule::QuietModeLevel`]
    QuietModeLevel,
    /// Inverse of [`DecodeRule::OperatingMode`]
    OperatingMode,
}

impl EncodeRule {
    /// Produce the exact payload string for a value, or `None` when the
    /// value has no wire representation.
    pub fn apply(&self, value: &str) -> Option<String> {
        match self {
            Self::Integer => value.trim().parse::<i64>().ok().map(|n| n.to_string()),
            Self::QuietModeLevel => write_quiet_mode(value),
            Self::OperatingMode => operating_mode_to_code(value).map(|code| code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_to_bool() {
        assert_eq!(bit_to_bool("1"), Some(true));
        assert_eq!(bit_to_bool("0"), Some(false));
        assert_eq!(bit_to_bool(""), None);
        assert_eq!(bit_to_bool("2"), None);
        assert_eq!(bit_to_bool("on"), None);
    }

    #[test]
    fn test_operating_mode_known_codes() {
        assert_eq!(read_operating_mode("0"), "Heat only");
        assert_eq!(read_operating_mode("6"), "Auto(Heat)+DHW");
    }

    #[test]
    fn test_operating_mode_unmapped_code_is_descriptive() {
        assert_eq!(
            read_operating_mode("5"),
            "Unknown operating mode value: 5"
        );
        // The placeholder never encodes back to a code.
        assert_eq!(operating_mode_to_code("Unknown operating mode value: 5"), None);
    }

    #[test]
    fn test_operating_mode_round_trip() {
        for code in ["0", "2", "3", "4", "6"] {
            let name = read_operating_mode(code);
            assert_eq!(operating_mode_to_code(&name), Some(code));
        }
        for code in ["1", "5", "7", "8"] {
            let name = read_operating_mode(code);
            assert!(name.starts_with("Unknown operating mode value"));
            assert_eq!(operating_mode_to_code(&name), None);
        }
    }

    #[test]
    fn test_mode_options_match_table() {
        let names: Vec<&str> = OPERATING_MODES.iter().map(|(_, n)| *n).collect();
        assert_eq!(names, OPERATING_MODE_OPTIONS);
    }

    #[test]
    fn test_quiet_mode_round_trip() {
        for code in ["0", "1", "2", "3", "4"] {
            let label = read_quiet_mode(code);
            assert_eq!(write_quiet_mode(&label).as_deref(), Some(code));
        }
        assert_eq!(read_quiet_mode("0"), "Off");
        assert_eq!(read_quiet_mode("4"), "Scheduled");
        assert_eq!(read_quiet_mode("2"), "2");
    }

    #[test]
    fn test_write_quiet_mode_rejects_junk() {
        assert_eq!(write_quiet_mode("Sometimes"), None);
    }

    #[test]
    fn test_threeway_valve() {
        assert_eq!(read_threeway_valve("0"), Some("Room"));
        assert_eq!(read_threeway_valve("1"), Some("Tank"));
        assert_eq!(read_threeway_valve("2"), None);
        assert_eq!(read_threeway_valve("banana"), None);
    }

    #[test]
    fn test_powerful_mode_time() {
        assert_eq!(read_powerful_mode_time("2"), Some(60));
        assert_eq!(read_powerful_mode_time("0"), Some(0));
        assert_eq!(read_powerful_mode_time("x"), None);
    }

    #[test]
    fn test_stats_field_extraction() {
        assert_eq!(read_stats_field("wifi", r#"{"wifi": 42}"#), Some(42.0));
        // Present-but-zero conflates with absent. Established behavior.
        assert_eq!(read_stats_field("wifi", r#"{"wifi": 0}"#), None);
        assert_eq!(read_stats_field("wifi", r#"{"uptime": 5000}"#), None);
        assert_eq!(read_stats_field("wifi", "not json"), None);
    }

    #[test]
    fn test_ms_to_secs() {
        assert_eq!(ms_to_secs(Some(1500.0)), Some(1.5));
        assert_eq!(ms_to_secs(Some(0.0)), None);
        assert_eq!(ms_to_secs(None), None);
    }

    #[test]
    fn test_decode_rule_dispatch() {
        assert_eq!(DecodeRule::BitToBool.apply("1"), EntityValue::Boolean(true));
        assert_eq!(DecodeRule::BitToBool.apply("7"), EntityValue::Null);
        assert_eq!(DecodeRule::Float.apply("21.5"), EntityValue::Float(21.5));
        assert_eq!(DecodeRule::Float.apply(""), EntityValue::Null);
        assert_eq!(DecodeRule::Integer.apply("17"), EntityValue::Integer(17));
        assert_eq!(
            DecodeRule::PowerfulModeTime.apply("2"),
            EntityValue::Integer(60)
        );
        assert_eq!(
            DecodeRule::StatsField("wifi").apply(r#"{"wifi": 10}"#),
            EntityValue::Float(10.0)
        );
        assert_eq!(
            DecodeRule::StatsFieldMsToSecs("uptime").apply(r#"{"uptime": 5000}"#),
            EntityValue::Float(5.0)
        );
    }

    #[test]
    fn test_encode_rule_dispatch() {
        assert_eq!(EncodeRule::Integer.apply("55").as_deref(), Some("55"));
        assert_eq!(EncodeRule::Integer.apply("warm"), None);
        assert_eq!(
            EncodeRule::OperatingMode.apply("DHW only").as_deref(),
            Some("3")
        );
        assert_eq!(
            EncodeRule::QuietModeLevel.apply("Scheduled").as_deref(),
            Some("4")
        );
    }
}
