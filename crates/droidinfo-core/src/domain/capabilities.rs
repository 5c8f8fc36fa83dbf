//! Capability metadata captured for a single network
//!
//! Also holds the null-formatting rule shared by every optional field in the
//! response: absent values and empty strings become JSON null.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Capability metadata for one network handle
///
/// The three best-effort fields are kept as raw JSON values because they are
/// read through the safe extractor and may hold any platform representation.
/// Unavailable values are an explicit `Value::Null`, never a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    /// Every transport code the network advertises
    #[serde(rename = "transportTypes")]
    pub transport_types: Vec<u32>,
    /// Names of the boolean capabilities currently set
    #[serde(rename = "networkCapabilities")]
    pub capability_names: Vec<String>,
    /// Upstream bandwidth estimate in kbps; `-1` means unknown and is kept as is
    #[serde(rename = "linkUpstreamBandwidthKbps")]
    pub link_upstream_kbps: i32,
    /// Downstream bandwidth estimate in kbps; `-1` means unknown and is kept as is
    #[serde(rename = "linkDownBandwidthKbps")]
    pub link_downstream_kbps: i32,
    #[serde(rename = "signalStrength")]
    pub signal_strength: Value,
    #[serde(rename = "networkSpecifier")]
    pub network_specifier: Value,
    #[serde(rename = "SSID")]
    pub ssid: Value,
}

/// Applies the null-formatting rule to a JSON value.
///
/// Empty strings collapse to null; every other value passes through.
pub fn format_null(value: Value) -> Value {
    match value {
        Value::String(s) if s.is_empty() => Value::Null,
        other => other,
    }
}

/// Applies the null-formatting rule to an optional string.
pub fn null_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> CapabilitySnapshot {
        CapabilitySnapshot {
            transport_types: vec![1, 4],
            capability_names: vec!["INTERNET".to_string(), "NOT_METERED".to_string()],
            link_upstream_kbps: -1,
            link_downstream_kbps: 30000,
            signal_strength: json!(-55),
            network_specifier: Value::Null,
            ssid: json!("\"lab-wifi\""),
        }
    }

    #[test]
    fn test_format_null() {
        assert_eq!(format_null(json!("")), Value::Null);
        assert_eq!(format_null(Value::Null), Value::Null);
        assert_eq!(format_null(json!("x")), json!("x"));
        assert_eq!(format_null(json!(0)), json!(0));
        assert_eq!(format_null(json!(false)), json!(false));
    }

    #[test]
    fn test_null_if_empty() {
        assert_eq!(null_if_empty(Some(String::new())), None);
        assert_eq!(null_if_empty(None), None);
        assert_eq!(null_if_empty(Some("a".into())), Some("a".to_string()));
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "SSID",
                "linkDownBandwidthKbps",
                "linkUpstreamBandwidthKbps",
                "networkCapabilities",
                "networkSpecifier",
                "signalStrength",
                "transportTypes",
            ]
        );
        assert_eq!(obj["linkUpstreamBandwidthKbps"], json!(-1));
        assert_eq!(obj["networkSpecifier"], Value::Null);
    }
}
