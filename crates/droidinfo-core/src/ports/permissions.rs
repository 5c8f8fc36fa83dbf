//! Runtime permission port

/// Permission gating the telephony reads of the capability strategy
pub const READ_PHONE_STATE: &str = "android.permission.READ_PHONE_STATE";

/// Port trait for runtime permission checks
pub trait IPermissionChecker: Send + Sync {
    /// Returns true if the instrumented target holds `permission`
    fn has_permission(&self, permission: &str) -> bool;
}
