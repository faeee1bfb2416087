//! HTTP surface: routes, shared state and error rendering.

mod handler;

pub use handler::{liveness, package, run_package, PackageRequest};

use crate::config::Config;
use crate::error::PackagerError;
use crate::packager::{PackageOrchestrator, PackagerRegistry};
use crate::transfer::ContainerRuntime;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<dyn ContainerRuntime>,
    pub orchestrator: Arc<PackageOrchestrator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, config: Config) -> Self {
        let orchestrator = PackageOrchestrator::new(PackagerRegistry::new(), config.build.clone());
        Self {
            runtime,
            orchestrator: Arc::new(orchestrator),
            config: Arc::new(config),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let timeout_secs = state.config.server.request_timeout_secs;

    let mut router = Router::new()
        .route("/package", post(package))
        .route("/test", get(liveness))
        .with_state(state);

    if timeout_secs > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)));
    }

    router.layer(TraceLayer::new_for_http())
}

impl IntoResponse for PackagerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::info!(error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
