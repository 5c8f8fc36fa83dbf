//! Request path parsing

use hyper::Method;

/// A parsed request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /session/{sessionId}/appium/device/info`
    DeviceInfo { session_id: String },
    /// `GET /session/{sessionId}/appium/device/system_bars`
    SystemBars { session_id: String },
    /// `GET /metrics`
    Metrics,
    /// A known path requested with a method other than GET
    MethodNotAllowed { session_id: Option<String> },
    /// Anything else
    Unknown { session_id: Option<String> },
}

impl Route {
    /// Parse a request method and path
    pub fn parse(method: &Method, path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        let (known, session_id) = match segments.as_slice() {
            ["metrics"] => (Some(Route::Metrics), None),
            ["session", id, "appium", "device", "info"] if !id.is_empty() => (
                Some(Route::DeviceInfo {
                    session_id: id.to_string(),
                }),
                Some(id.to_string()),
            ),
            ["session", id, "appium", "device", "system_bars"] if !id.is_empty() => (
                Some(Route::SystemBars {
                    session_id: id.to_string(),
                }),
                Some(id.to_string()),
            ),
            ["session", id, ..] if !id.is_empty() => (None, Some(id.to_string())),
            _ => (None, None),
        };

        match known {
            Some(route) if method == Method::GET => route,
            Some(_) => Route::MethodNotAllowed { session_id },
            None => Route::Unknown { session_id },
        }
    }

    /// Metric label for this route
    pub fn label(&self) -> &'static str {
        match self {
            Route::DeviceInfo { .. } => "device_info",
            Route::SystemBars { .. } => "system_bars",
            Route::Metrics => "metrics",
            Route::MethodNotAllowed { .. } => "method_not_allowed",
            Route::Unknown { .. } => "unknown",
        }
    }
}
