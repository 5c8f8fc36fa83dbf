//! Per-network connectivity records and platform state enums
//!
//! A [`ConnectivityRecord`] carries the fields common to both resolution
//! strategies (`type`, `typeName`, `capabilities`) plus exactly one
//! strategy-specific group: [`LegacyState`] from the info-object strategy or
//! [`CellState`] from the capability strategy. The common fields are always
//! serialized, null when unavailable. The group that was not produced is
//! omitted; fields inside a produced group are always present.

use serde::{Deserialize, Serialize};

use super::capabilities::CapabilitySnapshot;
use super::transport::TransportDescriptor;

// ============================================================================
// Platform state enums
// ============================================================================

/// Coarse network state reported by the legacy info object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkState {
    Connecting,
    Connected,
    Suspended,
    Disconnecting,
    Disconnected,
    Unknown,
}

impl NetworkState {
    /// Platform name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkState::Connecting => "CONNECTING",
            NetworkState::Connected => "CONNECTED",
            NetworkState::Suspended => "SUSPENDED",
            NetworkState::Disconnecting => "DISCONNECTING",
            NetworkState::Disconnected => "DISCONNECTED",
            NetworkState::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for NetworkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained network state reported by the legacy info object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailedState {
    Idle,
    Scanning,
    Connecting,
    Authenticating,
    ObtainingIpaddr,
    Connected,
    Suspended,
    Disconnecting,
    Disconnected,
    Failed,
    Blocked,
    VerifyingPoorLink,
    CaptivePortalCheck,
}

impl DetailedState {
    /// Platform name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailedState::Idle => "IDLE",
            DetailedState::Scanning => "SCANNING",
            DetailedState::Connecting => "CONNECTING",
            DetailedState::Authenticating => "AUTHENTICATING",
            DetailedState::ObtainingIpaddr => "OBTAINING_IPADDR",
            DetailedState::Connected => "CONNECTED",
            DetailedState::Suspended => "SUSPENDED",
            DetailedState::Disconnecting => "DISCONNECTING",
            DetailedState::Disconnected => "DISCONNECTED",
            DetailedState::Failed => "FAILED",
            DetailedState::Blocked => "BLOCKED",
            DetailedState::VerifyingPoorLink => "VERIFYING_POOR_LINK",
            DetailedState::CaptivePortalCheck => "CAPTIVE_PORTAL_CHECK",
        }
    }
}

impl std::fmt::Display for DetailedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Telephony data-connection state
///
/// Built from the raw platform code; every code outside the four known
/// states maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataState {
    Disconnected,
    Connecting,
    Connected,
    Suspended,
    Unknown,
}

impl DataState {
    pub const DATA_DISCONNECTED: i32 = 0;
    pub const DATA_CONNECTING: i32 = 1;
    pub const DATA_CONNECTED: i32 = 2;
    pub const DATA_SUSPENDED: i32 = 3;

    /// Maps a raw telephony data-state code
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::DATA_DISCONNECTED => DataState::Disconnected,
            Self::DATA_CONNECTING => DataState::Connecting,
            Self::DATA_CONNECTED => DataState::Connected,
            Self::DATA_SUSPENDED => DataState::Suspended,
            _ => DataState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataState::Disconnected => "DISCONNECTED",
            DataState::Connecting => "CONNECTING",
            DataState::Connected => "CONNECTED",
            DataState::Suspended => "SUSPENDED",
            DataState::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for DataState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Telephony read policy
// ============================================================================

/// When the capability strategy reads telephony and active-network fields
///
/// The deployed behaviour reads them only when the phone-state permission is
/// *denied* and emits nothing when it is granted. Both readings are supported;
/// the choice comes from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelephonyReadPolicy {
    /// Read when the permission is denied, skip when granted
    #[default]
    WhenDenied,
    /// Read when the permission is granted, skip when denied
    WhenGranted,
}

impl TelephonyReadPolicy {
    /// Decides whether to read, given the permission check result
    pub fn should_read(&self, permission_granted: bool) -> bool {
        match self {
            TelephonyReadPolicy::WhenDenied => !permission_granted,
            TelephonyReadPolicy::WhenGranted => permission_granted,
        }
    }
}

impl std::fmt::Display for TelephonyReadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TelephonyReadPolicy::WhenDenied => "when_denied",
            TelephonyReadPolicy::WhenGranted => "when_granted",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for TelephonyReadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "when_denied" => Ok(TelephonyReadPolicy::WhenDenied),
            "when_granted" => Ok(TelephonyReadPolicy::WhenGranted),
            other => Err(format!(
                "unknown telephony read policy '{other}' (expected when_denied or when_granted)"
            )),
        }
    }
}

// ============================================================================
// Record field groups
// ============================================================================

/// Fields produced by the legacy info-object strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyState {
    pub subtype: i32,
    pub subtype_name: String,
    pub is_connected: bool,
    pub detailed_state: DetailedState,
    pub state: NetworkState,
    pub extra_info: Option<String>,
    pub is_available: bool,
    pub is_failover: bool,
    pub is_roaming: bool,
}

/// Fields produced by the capability strategy from telephony
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellState {
    pub cell_state: DataState,
    /// Signal severity level, null when the platform reports none
    pub cell_signal_strength: Option<i32>,
}

// ============================================================================
// ConnectivityRecord
// ============================================================================

/// The per-network output record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectivityRecord {
    /// Null when no transport could be classified
    #[serde(rename = "type")]
    pub type_code: Option<i64>,
    #[serde(rename = "typeName")]
    pub type_name: Option<String>,
    #[serde(flatten)]
    pub legacy: Option<LegacyState>,
    #[serde(flatten)]
    pub cell: Option<CellState>,
    /// Always serialized; null when the network has no capability data
    pub capabilities: Option<CapabilitySnapshot>,
}

impl ConnectivityRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `type`/`typeName` from a transport classification
    pub fn with_transport(mut self, transport: TransportDescriptor) -> Self {
        self.type_code = Some(i64::from(transport.code));
        self.type_name = Some(transport.name.to_string());
        self
    }

    /// Attaches capability metadata (or clears it)
    pub fn with_capabilities(mut self, capabilities: Option<CapabilitySnapshot>) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns true if no field of the record is populated.
    ///
    /// Empty records are dropped from the network report.
    pub fn is_empty(&self) -> bool {
        self.type_code.is_none()
            && self.type_name.is_none()
            && self.legacy.is_none()
            && self.cell.is_none()
            && self.capabilities.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn legacy_state() -> LegacyState {
        LegacyState {
            subtype: 13,
            subtype_name: "LTE".to_string(),
            is_connected: true,
            detailed_state: DetailedState::Connected,
            state: NetworkState::Connected,
            extra_info: None,
            is_available: true,
            is_failover: false,
            is_roaming: false,
        }
    }

    #[test]
    fn test_data_state_from_code() {
        assert_eq!(DataState::from_code(0), DataState::Disconnected);
        assert_eq!(DataState::from_code(1), DataState::Connecting);
        assert_eq!(DataState::from_code(2), DataState::Connected);
        assert_eq!(DataState::from_code(3), DataState::Suspended);
        assert_eq!(DataState::from_code(4), DataState::Unknown);
        assert_eq!(DataState::from_code(-1), DataState::Unknown);
    }

    #[test]
    fn test_state_names_match_serialization() {
        for state in [DetailedState::ObtainingIpaddr, DetailedState::CaptivePortalCheck] {
            assert_eq!(
                serde_json::to_value(state).unwrap(),
                Value::String(state.as_str().to_string())
            );
        }
        assert_eq!(
            serde_json::to_value(DataState::Suspended).unwrap(),
            json!("SUSPENDED")
        );
        assert_eq!(NetworkState::Disconnecting.to_string(), "DISCONNECTING");
    }

    #[test]
    fn test_policy_should_read() {
        assert!(TelephonyReadPolicy::WhenDenied.should_read(false));
        assert!(!TelephonyReadPolicy::WhenDenied.should_read(true));
        assert!(TelephonyReadPolicy::WhenGranted.should_read(true));
        assert!(!TelephonyReadPolicy::WhenGranted.should_read(false));
    }

    #[test]
    fn test_policy_parse_roundtrip() {
        for policy in [TelephonyReadPolicy::WhenDenied, TelephonyReadPolicy::WhenGranted] {
            assert_eq!(policy.to_string().parse::<TelephonyReadPolicy>(), Ok(policy));
        }
        assert!("always".parse::<TelephonyReadPolicy>().is_err());
    }

    #[test]
    fn test_empty_record() {
        let record = ConnectivityRecord::new();
        assert!(record.is_empty());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"type": null, "typeName": null, "capabilities": null})
        );
    }

    #[test]
    fn test_legacy_record_serialization() {
        let record = ConnectivityRecord {
            type_code: Some(0),
            type_name: Some("MOBILE".to_string()),
            legacy: Some(legacy_state()),
            ..Default::default()
        };
        assert!(!record.is_empty());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], json!(0));
        assert_eq!(value["typeName"], json!("MOBILE"));
        assert_eq!(value["isConnected"], json!(true));
        assert_eq!(value["isRoaming"], json!(false));
        assert_eq!(value["detailedState"], json!("CONNECTED"));
        assert_eq!(value["extraInfo"], Value::Null);
        assert!(value.get("cellState").is_none());
        assert_eq!(value["capabilities"], Value::Null);
    }

    #[test]
    fn test_cell_record_serialization() {
        let record = ConnectivityRecord::new()
            .with_transport(TransportDescriptor::classify(|t| t == 1));
        let record = ConnectivityRecord {
            cell: Some(CellState {
                cell_state: DataState::Connected,
                cell_signal_strength: None,
            }),
            ..record
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], json!(1));
        assert_eq!(value["typeName"], json!("WIFI"));
        assert_eq!(value["cellState"], json!("CONNECTED"));
        assert_eq!(value["cellSignalStrength"], Value::Null);
        assert!(value.get("isConnected").is_none());
    }
}
