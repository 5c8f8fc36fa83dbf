//! Telephony port

/// Port trait for telephony state reads
pub trait ITelephonyService: Send + Sync {
    /// Raw data-connection state code
    ///
    /// Mapped through [`crate::domain::DataState::from_code`]; unknown codes
    /// are reported as `UNKNOWN`.
    fn data_state(&self) -> i32;

    /// Signal severity level (0-4), `None` when no signal strength is available
    fn signal_level(&self) -> Option<i32>;
}
