//! HTTP gateway over the prize registry.
//!
//! - `GET  /api/prizes`       current set
//! - `POST /api/prizes`       replace the set (`{"prizes": [...]}`), 400 on rejection
//! - `POST /api/draw`         one weighted draw from the current set
//! - `GET  /api/prizes/odds`  normalized chance of each prize
//! - `GET  /health`

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use slot_prizes::{Prize, PrizeOdds, PrizeRegistry, RandomSource, ValidationError, total_weight};
use tokio::net::TcpListener;

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

const REPLACE_SUCCESS_MESSAGE: &str = "prizes updated";

/// Shared state for the HTTP server: registry + randomness for draws.
#[derive(Clone)]
pub struct GatewayState {
    pub registry: Arc<PrizeRegistry>,
    pub rng: Arc<dyn RandomSource>,
}

impl GatewayState {
    #[must_use]
    pub fn new(registry: PrizeRegistry, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            registry: Arc::new(registry),
            rng,
        }
    }
}

/// Response body for `GET /api/prizes`.
#[derive(Debug, Serialize)]
pub struct PrizesResponse {
    pub prizes: Vec<Prize>,
    pub revision: u64,
}

/// Response body for an accepted `POST /api/prizes`.
#[derive(Debug, Serialize)]
pub struct ReplaceResponse {
    pub success: bool,
    pub message: &'static str,
    pub prizes: Vec<Prize>,
    pub revision: u64,
}

/// Response body for `POST /api/draw`.
#[derive(Debug, Serialize)]
pub struct DrawResponse {
    pub prize: Prize,
}

/// Response body for `GET /api/prizes/odds`.
#[derive(Debug, Serialize)]
pub struct OddsResponse {
    pub odds: Vec<PrizeOdds>,
    pub total_weight: f64,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct GatewayHealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub revision: u64,
    pub prize_count: usize,
}

/// Error body for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn rejection(error: &ValidationError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            kind: error.kind(),
        }),
    )
}

/// Pull the candidate list out of a replace request body.
///
/// The body must be a JSON object with a `prizes` key; the list itself is
/// checked by the registry.
pub fn extract_candidate(body: &[u8]) -> Result<Value, ValidationError> {
    let mut payload: Value = serde_json::from_slice(body).map_err(|error| {
        ValidationError::MalformedPayload(format!("request body is not valid JSON: {error}"))
    })?;
    payload
        .get_mut("prizes")
        .map(Value::take)
        .ok_or_else(|| {
            ValidationError::MalformedPayload(
                "request body must be an object with a `prizes` list".to_string(),
            )
        })
}

async fn handle_get_prizes(State(state): State<GatewayState>) -> Json<PrizesResponse> {
    let snapshot = state.registry.snapshot();
    Json(PrizesResponse {
        prizes: snapshot.to_vec(),
        revision: snapshot.revision,
    })
}

async fn handle_replace_prizes(
    State(state): State<GatewayState>,
    body: Bytes,
) -> Result<Json<ReplaceResponse>, ApiError> {
    let candidate = extract_candidate(&body).map_err(|error| rejection(&error))?;
    let snapshot = state
        .registry
        .replace_from_json(&candidate)
        .map_err(|error| rejection(&error))?;
    Ok(Json(ReplaceResponse {
        success: true,
        message: REPLACE_SUCCESS_MESSAGE,
        prizes: snapshot.to_vec(),
        revision: snapshot.revision,
    }))
}

async fn handle_draw(State(state): State<GatewayState>) -> Result<Json<DrawResponse>, ApiError> {
    match state.registry.draw(state.rng.as_ref()) {
        Ok(prize) => Ok(Json(DrawResponse { prize })),
        Err(error) => {
            tracing::error!(error = %error, "draw failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: error.to_string(),
                    kind: "selection_failed",
                }),
            ))
        }
    }
}

async fn handle_odds(State(state): State<GatewayState>) -> Json<OddsResponse> {
    let snapshot = state.registry.snapshot();
    Json(OddsResponse {
        odds: slot_prizes::odds(&snapshot),
        total_weight: total_weight(&snapshot),
    })
}

async fn handle_health(State(state): State<GatewayState>) -> Json<GatewayHealthResponse> {
    let snapshot = state.registry.snapshot();
    Json(GatewayHealthResponse {
        status: "healthy",
        backend: state.registry.backend_name(),
        revision: snapshot.revision,
        prize_count: snapshot.len(),
    })
}

/// Build the gateway router.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/prizes",
            get(handle_get_prizes).post(handle_replace_prizes),
        )
        .route("/api/prizes/odds", get(handle_odds))
        .route("/api/draw", post(handle_draw))
        .with_state(state)
}

/// Run the HTTP server; binds to `bind_addr` (e.g. `0.0.0.0:8080`).
/// Graceful shutdown on Ctrl+C (SIGINT) and SIGTERM (Unix); in-flight requests complete before exit.
pub async fn run_http(state: GatewayState, bind_addr: &str) -> Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(
        "gateway listening on {} (Ctrl+C/SIGTERM to stop)",
        bind_addr
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "failed to listen for SIGTERM; Ctrl+C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
