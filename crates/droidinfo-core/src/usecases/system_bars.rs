//! System bars use case
//!
//! Reports the status bar height. From API 26 on it is the top edge of the
//! window's visible display frame; earlier platforms only expose it as the
//! `status_bar_height` dimension resource.

use tracing::{debug, info};

use crate::domain::SystemBars;
use crate::ports::PlatformServices;

/// First API level that reads the visible display frame
pub const VISIBLE_FRAME_API_LEVEL: u32 = 26;

/// Use case for the system-bars request
pub struct SystemBarsUseCase {
    platform: PlatformServices,
}

impl SystemBarsUseCase {
    pub fn new(platform: PlatformServices) -> Self {
        Self { platform }
    }

    /// Status bar height in pixels; 0 when it cannot be determined
    pub fn status_bar_height(&self) -> i32 {
        let Some(window) = self.platform.window.as_deref() else {
            debug!("Window metrics unavailable");
            return 0;
        };

        let height = if self.platform.api_level >= VISIBLE_FRAME_API_LEVEL {
            window.visible_display_frame_top()
        } else {
            window.status_bar_height_resource()
        };
        height.unwrap_or(0)
    }

    pub fn build(&self) -> SystemBars {
        info!("Get status bar height of the device");
        SystemBars {
            status_bar: self.status_bar_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::usecases::test_support::{platform, FakeWindow};

    fn usecase(api_level: u32, window: Option<FakeWindow>) -> SystemBarsUseCase {
        let mut services = platform(api_level, false, None, None);
        if let Some(window) = window {
            services = services.with_window(Arc::new(window));
        }
        SystemBarsUseCase::new(services)
    }

    #[test]
    fn test_visible_frame_on_newer_platforms() {
        let bars = usecase(
            26,
            Some(FakeWindow {
                frame_top: Some(84),
                resource: Some(63),
            }),
        )
        .build();
        assert_eq!(bars.status_bar, 84);
    }

    #[test]
    fn test_resource_on_older_platforms() {
        let bars = usecase(
            25,
            Some(FakeWindow {
                frame_top: Some(84),
                resource: Some(63),
            }),
        )
        .build();
        assert_eq!(bars.status_bar, 63);
    }

    #[test]
    fn test_missing_resource_is_zero() {
        let height = usecase(
            21,
            Some(FakeWindow {
                frame_top: None,
                resource: None,
            }),
        )
        .status_bar_height();
        assert_eq!(height, 0);
    }

    #[test]
    fn test_missing_window_is_zero() {
        assert_eq!(usecase(34, None).status_bar_height(), 0);
    }
}
