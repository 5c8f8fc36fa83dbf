//! droidinfo Server - HTTP endpoint for device snapshots
//!
//! Provides:
//! - `DeviceInfoServer`: hyper 1 server answering the device-info and
//!   system-bars routes inside the Appium `{sessionId, value}` envelope
//! - `RequestMetrics`: Prometheus request counters and build-duration
//!   histogram, served on `/metrics`
//! - `Route`: request path parsing

pub mod metrics;
pub mod response;
pub mod routes;
pub mod server;

pub use metrics::RequestMetrics;
pub use routes::Route;
pub use server::DeviceInfoServer;
