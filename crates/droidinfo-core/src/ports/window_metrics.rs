//! Window metrics port
//!
//! Feeds the system-bars endpoint. Newer platforms expose the status bar
//! height as the top of the visible display frame; older ones only through
//! the `status_bar_height` dimension resource.

/// Port trait for window geometry reads
pub trait IWindowMetrics: Send + Sync {
    /// Top edge of the window's visible display frame, in pixels
    fn visible_display_frame_top(&self) -> Option<i32>;

    /// Pixel size of the `status_bar_height` dimension resource, `None` if
    /// the resource does not exist
    fn status_bar_height_resource(&self) -> Option<i32>;
}
