//! HTTP transport: loop detection and constellation endpoints plus plain
//! health and info routes.

use axum::{
    BoxError, Json, Router,
    body::{Body, Bytes},
    error_handling::HandleErrorLayer,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::analysis::ConstellationRecord;
use crate::compose::LoopResponse;
use crate::error::{Result, ThoughtLoopsError};
use crate::service::{LoopRequest, ThoughtLoopService, parse_entries};

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct HttpState {
    pub service: Arc<ThoughtLoopService>,
}

fn parse_body(body: &Bytes) -> Result<Value> {
    serde_json::from_slice(body)
        .map_err(|e| ThoughtLoopsError::validation(format!("Request body is not valid JSON: {}", e)))
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

pub async fn info_handler(State(state): State<HttpState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.service.info().to_string(),
    )
}

pub async fn analyze_handler(
    State(state): State<HttpState>,
    body: Bytes,
) -> Result<Json<LoopResponse>> {
    let request = LoopRequest::from_value(&parse_body(&body)?)?;
    Ok(Json(state.service.detect_loop(&request).await?))
}

pub async fn constellation_handler(
    State(state): State<HttpState>,
    body: Bytes,
) -> Result<Json<Vec<ConstellationRecord>>> {
    let entries = parse_entries(&parse_body(&body)?)?;
    Ok(Json(state.service.constellation(&entries).await?))
}

async fn log_latency(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = std::time::Instant::now();
    let resp = next.run(req).await;
    tracing::debug!(
        %method,
        %path,
        status = resp.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );
    resp
}

/// Build the router. Every request is bounded by `server.request_timeout_ms`.
pub fn router(service: Arc<ThoughtLoopService>) -> Router {
    let server = service.config().server.clone();
    let timeout_ms = server.request_timeout_ms;

    let cors = if server.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/process_for_constellation", post(constellation_handler))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    if err.is::<tower::timeout::error::Elapsed>() {
                        ThoughtLoopsError::Timeout {
                            operation: "request".into(),
                            timeout_ms,
                        }
                    } else {
                        ThoughtLoopsError::Internal {
                            message: err.to_string(),
                        }
                    }
                }))
                .timeout(Duration::from_millis(timeout_ms)),
        )
        .layer(middleware::from_fn(log_latency))
        .layer(cors)
        .with_state(HttpState { service })
}

/// Bind and serve until the process exits
pub async fn start_http_server(service: Arc<ThoughtLoopService>) -> anyhow::Result<()> {
    let bind = service.config().server.bind;
    if !bind.ip().is_loopback() && service.config().server.cors_allow_any {
        tracing::warn!(
            "Listening on {} with permissive CORS; journal text may be posted from any origin",
            bind
        );
    }

    let app = router(service);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!("Starting HTTP server on {}", bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
