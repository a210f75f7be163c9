//! Heat pump model table
//!
//! HeishaMon publishes the detected hardware as a small numeric code; this
//! table maps the codes it knows about to the commercial model names.

/// Placeholder returned for codes not present in the table. Never `Null`:
/// an unrecognized model is still a reading worth displaying.
pub const UNKNOWN_MODEL: &str = "Unknown model for HeishaMon";

/// Model code → commercial model name.
pub const HEATPUMP_MODELS: &[(&str, &str)] = &[
    ("0", "WH-MDC05H3E5"),
    ("1", "WH-MDC07H3E5"),
    ("2", "WH-MDC09H3E5"),
    ("3", "WH-MXC09H3E5"),
    ("4", "WH-MXC12H6E5"),
    ("5", "WH-SDC07H3E8"),
    ("6", "WH-SDC09H3E8"),
    ("7", "WH-SXC09H3E5"),
    ("8", "WH-SXC12H9E8"),
    ("9", "WH-SXC16H9E8"),
    ("10", "WH-UD03HE5"),
    ("11", "WH-UD05HE5"),
    ("12", "WH-UD07HE5"),
    ("13", "WH-UD09HE5"),
];

/// Resolve a model code to its name, falling back to [`UNKNOWN_MODEL`].
pub fn read_heatpump_model(value: &str) -> String {
    HEATPUMP_MODELS
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| {
            tracing::warn!(code = value, "unrecognized heat pump model code");
            UNKNOWN_MODEL.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model() {
        assert_eq!(read_heatpump_model("0"), "WH-MDC05H3E5");
        assert_eq!(read_heatpump_model("13"), "WH-UD09HE5");
    }

    #[test]
    fn test_unknown_model_is_placeholder_not_null() {
        assert_eq!(read_heatpump_model("255"), UNKNOWN_MODEL);
        assert_eq!(read_heatpump_model(""), UNKNOWN_MODEL);
        assert_eq!(read_heatpump_model("garbage"), UNKNOWN_MODEL);
    }

    #[test]
    fn test_model_codes_are_unique() {
        for (i, (code, _)) in HEATPUMP_MODELS.iter().enumerate() {
            assert!(
                !HEATPUMP_MODELS[i + 1..].iter().any(|(c, _)| c == code),
                "duplicate model code {code}"
            );
        }
    }
}
