//! Device properties port
//!
//! Plain getters for identity, display and locale. None of these carry
//! branching logic; the snapshot use case copies them verbatim.

use crate::domain::DisplaySize;

/// Port trait for identity, display and locale properties
pub trait IDeviceProperties: Send + Sync {
    /// Per-device identifier (`Settings.Secure.ANDROID_ID`)
    fn android_id(&self) -> String;

    fn manufacturer(&self) -> String;

    fn model(&self) -> String;

    fn brand(&self) -> String;

    /// SDK level as a decimal string, e.g. `"34"`
    fn api_version(&self) -> String;

    /// Release name, e.g. `"14"`
    fn platform_version(&self) -> String;

    /// Network operator name; `None` (or empty) when no SIM is present
    fn carrier_name(&self) -> Option<String>;

    /// Physical display size in pixels, ignoring decorations
    fn real_display_size(&self) -> DisplaySize;

    /// Display density in dots per inch
    fn display_density(&self) -> f64;

    /// Default locale, e.g. `"en_US"`
    fn locale(&self) -> String;

    /// Default time zone ID, e.g. `"Europe/Berlin"`
    fn time_zone(&self) -> String;
}
