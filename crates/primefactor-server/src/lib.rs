//! HTTP front end for primefactor.
//!
//! Exposes the factorization engine over GET. Each request is factored on a
//! blocking worker thread and abandoned with `504 Gateway Timeout` if it runs
//! past the configured deadline; the engine itself has no early exit.
//!
//! An abandoned worker keeps computing until it finishes, and holds one of
//! `max_workers` slots while it does. When every slot is taken, new requests
//! wait for one until their own deadline and then get
//! `503 Service Unavailable`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::time::{Instant, timeout_at};

use primefactor_core::{BigInt, DEFAULT_NUMBER, PrimeFactor, find_factor, parse_number};

/// Server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Deadline for a single factorization.
    pub timeout: Duration,
    /// Factorizations allowed to run at once, including abandoned ones.
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            timeout: Duration::from_secs(30),
            max_workers: 8,
        }
    }
}

/// Shared server state.
struct AppState {
    timeout: Duration,
    workers: Arc<Semaphore>,
    max_workers: usize,
}

#[derive(Deserialize)]
struct FactorParams {
    /// Decimal integer to factor; empty or missing means [`DEFAULT_NUMBER`].
    number: Option<String>,
    /// If true, trace every step to the server log.
    logging: Option<bool>,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

trait JsonWithStatus<T> {
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<T>);
}

impl<T> JsonWithStatus<T> for Json<T> {
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<T>) {
        (status, self)
    }
}

fn error_response(status: StatusCode, error: impl Into<String>) -> ApiError {
    Json(ErrorResponse {
        success: false,
        error: error.into(),
    })
    .with_status(status)
}

async fn handle_prime_factor(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FactorParams>,
) -> Result<Json<PrimeFactor>, ApiError> {
    let number = match params.number.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => parse_number(text)
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?,
        _ => BigInt::from(DEFAULT_NUMBER),
    };
    let logging = params.logging.unwrap_or(false);
    let deadline = Instant::now() + state.timeout;

    let permit = match timeout_at(deadline, Arc::clone(&state.workers).acquire_owned()).await {
        Ok(Ok(permit)) => permit,
        Ok(Err(_closed)) => {
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "factorization workers unavailable",
            ));
        }
        Err(_) => {
            log::warn!("no free factorization worker for {number}");
            return Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                format!(
                    "all {} factorization workers are busy, retry later",
                    state.max_workers
                ),
            ));
        }
    };

    let worker = tokio::task::spawn_blocking({
        let number = number.clone();
        move || {
            let _permit = permit;
            find_factor(&number, logging)
        }
    });

    match timeout_at(deadline, worker).await {
        Ok(Ok(Ok(record))) => Ok(Json(record)),
        Ok(Ok(Err(e))) if e.is_client_error() => {
            Err(error_response(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Ok(Ok(Err(e))) => Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
        Ok(Err(join_err)) => {
            log::error!("factorization worker for {number} failed: {join_err}");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "factorization worker failed",
            ))
        }
        Err(_) => {
            log::warn!(
                "factorization of {number} exceeded {:.1}s deadline",
                state.timeout.as_secs_f64()
            );
            Err(error_response(
                StatusCode::GATEWAY_TIMEOUT,
                format!(
                    "factorization of {number} exceeded {:.1}s deadline",
                    state.timeout.as_secs_f64()
                ),
            ))
        }
    }
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Primefactor Server",
        "version": primefactor_core::VERSION,
        "timeout_sec": state.timeout.as_secs_f64(),
        "max_workers": state.max_workers,
        "endpoints": {
            "/": "This API index",
            "/primeFactor": {
                "method": "GET",
                "description": "Prime factorization of an arbitrary-precision integer",
                "params": {
                    "number": format!("Decimal integer >= 1 (default: {DEFAULT_NUMBER})"),
                    "logging": "Trace every step to the server log (default: false)",
                }
            },
            "/health": "Health check",
        },
        "examples": {
            "default": "/primeFactor",
            "large": "/primeFactor?number=3121121111111121130",
            "traced": "/primeFactor?number=12&logging=true",
        }
    }))
}

/// Build the axum router.
fn build_router(timeout: Duration, max_workers: usize) -> Router {
    let max_workers = max_workers.max(1);
    let state = Arc::new(AppState {
        timeout,
        workers: Arc::new(Semaphore::new(max_workers)),
        max_workers,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/primeFactor", get(handle_prime_factor))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP factorization server until the listener fails.
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let app = build_router(config.timeout, config.max_workers);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
