//! HTTP server for the device snapshot endpoint
//!
//! Listens on `127.0.0.1:6790` by default. Each request opens a fresh
//! `PlatformServices` bundle through the provider, runs one use case to
//! completion and drops the bundle before the response is written. Provider
//! and use case calls are synchronous and run on the blocking pool.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use droidinfo_core::config::NetworkConfig;
use droidinfo_core::ports::IPlatformProvider;
use droidinfo_core::usecases::{DeviceSnapshotUseCase, SystemBarsUseCase};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::metrics::RequestMetrics;
use crate::response::{self, Body, UNKNOWN_COMMAND, UNKNOWN_ERROR, UNKNOWN_METHOD};
use crate::routes::Route;

/// HTTP server answering device-info, system-bars and metrics requests.
pub struct DeviceInfoServer {
    provider: Arc<dyn IPlatformProvider>,
    network: NetworkConfig,
    metrics: Option<Arc<RequestMetrics>>,
    addr: SocketAddr,
}

impl DeviceInfoServer {
    /// Creates a new `DeviceInfoServer`.
    ///
    /// # Arguments
    /// * `provider` - Opens the platform services for each request
    /// * `network` - Connectivity resolution settings
    /// * `metrics` - Request metrics; `None` disables `/metrics`
    /// * `endpoint` - Address to bind, e.g. `"127.0.0.1:6790"`
    pub fn new(
        provider: Arc<dyn IPlatformProvider>,
        network: NetworkConfig,
        metrics: Option<Arc<RequestMetrics>>,
        endpoint: &str,
    ) -> anyhow::Result<Self> {
        let addr: SocketAddr = endpoint.parse()?;
        Ok(Self {
            provider,
            network,
            metrics,
            addr,
        })
    }

    /// Binds the configured address.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        Ok(TcpListener::bind(self.addr).await?)
    }

    /// Binds and serves until the cancellation token is triggered.
    pub async fn run(self: Arc<Self>, shutdown: CancellationToken) -> anyhow::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }

    /// Serves connections from an already bound listener until the
    /// cancellation token is triggered.
    pub async fn serve(
        self: Arc<Self>,
        listener: TcpListener,
        shutdown: CancellationToken,
    ) -> anyhow::Result<()> {
        info!(addr = %listener.local_addr()?, "Device info server listening");

        loop {
            tokio::select! {
                result = listener.accept() => {
                    let (stream, peer) = result?;
                    let io = TokioIo::new(stream);
                    let server = Arc::clone(&self);

                    tokio::spawn(async move {
                        let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                            let server = Arc::clone(&server);
                            let method = req.method().clone();
                            let path = req.uri().path().to_string();
                            async move { Ok::<_, Infallible>(server.handle(method, path).await) }
                        });

                        if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                            error!(error = %e, %peer, "HTTP connection error");
                        }
                    });
                }
                _ = shutdown.cancelled() => {
                    info!("Device info server shutting down");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Answers one request on the blocking pool.
    pub async fn handle(self: Arc<Self>, method: Method, path: String) -> Response<Body> {
        tokio::task::spawn_blocking(move || self.dispatch(&method, &path))
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Request handler failed");
                response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    UNKNOWN_ERROR,
                    "Request handler failed",
                )
            })
    }

    /// Answers one request.
    pub fn dispatch(&self, method: &Method, path: &str) -> Response<Body> {
        let started = Instant::now();
        let route = Route::parse(method, path);

        let response = match &route {
            Route::DeviceInfo { session_id } => {
                self.payload(&route, session_id, || self.device_info())
            }
            Route::SystemBars { session_id } => {
                self.payload(&route, session_id, || self.system_bars())
            }
            Route::Metrics => self.metrics_response(),
            Route::MethodNotAllowed { session_id } => response::error(
                StatusCode::METHOD_NOT_ALLOWED,
                session_id.as_deref(),
                UNKNOWN_METHOD,
                &format!("Method {method} is not supported for {path}"),
            ),
            Route::Unknown { session_id } => response::error(
                StatusCode::NOT_FOUND,
                session_id.as_deref(),
                UNKNOWN_COMMAND,
                &format!("The requested resource {path} could not be found"),
            ),
        };

        let status = response.status().as_u16();
        if let Some(metrics) = &self.metrics {
            metrics.record_request(route.label(), status);
        }
        info!(
            %method,
            path,
            status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Handled request"
        );
        response
    }

    fn payload(
        &self,
        route: &Route,
        session_id: &str,
        build: impl FnOnce() -> anyhow::Result<Value>,
    ) -> Response<Body> {
        let started = Instant::now();
        let result = build();
        if let Some(metrics) = &self.metrics {
            metrics.observe_build_duration(route.label(), started.elapsed().as_secs_f64());
        }

        match result {
            Ok(value) => response::success(session_id, value),
            Err(e) => {
                warn!(route = route.label(), error = %format!("{e:#}"), "Failed to build response");
                response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some(session_id),
                    UNKNOWN_ERROR,
                    &format!("{e:#}"),
                )
            }
        }
    }

    fn device_info(&self) -> anyhow::Result<Value> {
        let platform = self.provider.open()?;
        Ok(DeviceSnapshotUseCase::new(platform, &self.network).build_json()?)
    }

    fn system_bars(&self) -> anyhow::Result<Value> {
        let platform = self.provider.open()?;
        Ok(serde_json::to_value(SystemBarsUseCase::new(platform).build())?)
    }

    fn metrics_response(&self) -> Response<Body> {
        let Some(metrics) = &self.metrics else {
            return response::error(
                StatusCode::NOT_FOUND,
                None,
                UNKNOWN_COMMAND,
                "Metrics are disabled",
            );
        };
        match metrics.encode() {
            Ok(body) => response::metrics(body),
            Err(e) => response::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
                UNKNOWN_ERROR,
                &format!("Failed to encode metrics: {e}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Mutex};
    use std::time::Duration;

    use droidinfo_core::domain::DisplaySize;
    use droidinfo_core::ports::{IDeviceProperties, IPermissionChecker, PlatformServices};
    use http_body_util::BodyExt;
    use serde_json::json;

    use super::*;

    struct Emulator;

    impl IDeviceProperties for Emulator {
        fn android_id(&self) -> String {
            "emulator-5554".to_string()
        }
        fn manufacturer(&self) -> String {
            "Google".to_string()
        }
        fn model(&self) -> String {
            "sdk_gphone64_arm64".to_string()
        }
        fn brand(&self) -> String {
            "google".to_string()
        }
        fn api_version(&self) -> String {
            "30".to_string()
        }
        fn platform_version(&self) -> String {
            "11".to_string()
        }
        fn carrier_name(&self) -> Option<String> {
            None
        }
        fn real_display_size(&self) -> DisplaySize {
            DisplaySize::new(1080, 1920)
        }
        fn display_density(&self) -> f64 {
            440.0
        }
        fn locale(&self) -> String {
            "en_US".to_string()
        }
        fn time_zone(&self) -> String {
            "UTC".to_string()
        }
    }

    struct Denied;

    impl IPermissionChecker for Denied {
        fn has_permission(&self, _permission: &str) -> bool {
            false
        }
    }

    /// Counts opens and fails on demand
    #[derive(Default)]
    struct CountingProvider {
        opened: AtomicUsize,
        fail: bool,
    }

    impl IPlatformProvider for CountingProvider {
        fn open(&self) -> anyhow::Result<PlatformServices> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("device offline");
            }
            Ok(PlatformServices::new(30, Arc::new(Emulator), Arc::new(Denied)))
        }
    }

    /// Blocks in `open` until the test releases it
    struct GatedProvider {
        entered: Mutex<mpsc::Sender<()>>,
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl IPlatformProvider for GatedProvider {
        fn open(&self) -> anyhow::Result<PlatformServices> {
            self.entered.lock().unwrap().send(())?;
            self.release
                .lock()
                .unwrap()
                .recv_timeout(Duration::from_secs(5))
                .map_err(|_| anyhow::anyhow!("open was never released"))?;
            Ok(PlatformServices::new(30, Arc::new(Emulator), Arc::new(Denied)))
        }
    }

    fn server(provider: Arc<CountingProvider>, metrics: bool) -> DeviceInfoServer {
        let metrics = metrics.then(|| Arc::new(RequestMetrics::new().unwrap()));
        DeviceInfoServer::new(provider, NetworkConfig::default(), metrics, "127.0.0.1:0").unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_server_invalid_addr() {
        let result = DeviceInfoServer::new(
            Arc::new(CountingProvider::default()),
            NetworkConfig::default(),
            None,
            "not-an-address",
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_device_info_opens_fresh_platform_per_request() {
        let provider = Arc::new(CountingProvider::default());
        let server = server(Arc::clone(&provider), false);

        for _ in 0..2 {
            let response = server.dispatch(&Method::GET, "/session/s-42/appium/device/info");
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["sessionId"], json!("s-42"));
            assert_eq!(body["value"]["networks"], json!([]));
            assert_eq!(body["value"]["carrierName"], Value::Null);
            assert_eq!(body["value"]["realDisplaySize"], json!("1080x1920"));
        }
        assert_eq!(provider.opened.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_slow_provider_does_not_block_runtime() {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let provider = GatedProvider {
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        };
        let server = Arc::new(
            DeviceInfoServer::new(Arc::new(provider), NetworkConfig::default(), None, "127.0.0.1:0")
                .unwrap(),
        );

        let pending = tokio::spawn(Arc::clone(&server).handle(
            Method::GET,
            "/session/s-1/appium/device/system_bars".to_string(),
        ));

        // The single-threaded test runtime keeps running while `open` waits.
        tokio::time::timeout(Duration::from_secs(5), async {
            while entered_rx.try_recv().is_err() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
        release_tx.send(()).unwrap();

        let response = pending.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["value"], json!({"statusBar": 0}));
    }

    #[tokio::test]
    async fn test_system_bars_without_window() {
        let server = server(Arc::new(CountingProvider::default()), false);
        let response = server.dispatch(&Method::GET, "/session/s-1/appium/device/system_bars");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"sessionId": "s-1", "value": {"statusBar": 0}})
        );
    }

    #[tokio::test]
    async fn test_provider_failure_is_unknown_error() {
        let provider = Arc::new(CountingProvider {
            fail: true,
            ..Default::default()
        });
        let server = server(provider, false);
        let response = server.dispatch(&Method::GET, "/session/s-1/appium/device/info");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["value"]["error"], json!("unknown error"));
        assert_eq!(body["value"]["message"], json!("device offline"));
        assert_eq!(body["value"]["stacktrace"], json!(""));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let provider = Arc::new(CountingProvider::default());
        let server = server(Arc::clone(&provider), false);
        let response = server.dispatch(&Method::GET, "/session/s-1/appium/device/battery_info");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["sessionId"], json!("s-1"));
        assert_eq!(body["value"]["error"], json!("unknown command"));
        assert_eq!(provider.opened.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let server = server(Arc::new(CountingProvider::default()), false);
        let response = server.dispatch(&Method::POST, "/session/s-1/appium/device/info");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["value"]["error"], json!("unknown method"));
    }

    #[tokio::test]
    async fn test_metrics_route() {
        let server = server(Arc::new(CountingProvider::default()), true);
        server.dispatch(&Method::GET, "/session/s-1/appium/device/info");

        let response = server.dispatch(&Method::GET, "/metrics");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("droidinfo_requests_total{route=\"device_info\",status=\"200\"} 1"));
        assert!(text.contains("droidinfo_build_duration_seconds"));
    }

    #[tokio::test]
    async fn test_metrics_disabled() {
        let server = server(Arc::new(CountingProvider::default()), false);
        let response = server.dispatch(&Method::GET, "/metrics");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
