//! HTTP front end for the [`Optimizer`].
//!
//! - `GET /` — liveness probe
//! - `POST /optimize` — [`OptimizeRequest`] in, [`OptimizeResponse`] out
//!
//! Solver errors are rejected with `400` (`408` for a timeout) and a
//! `{"detail": "..."}` body.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::error::AssignError;
use crate::sampler::TeleportSampler;
use crate::service::{OptimizeRequest, OptimizeResponse, Optimizer};
use crate::solver::{Solver, SolverConfig, Strategy};

/// Server configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `8080`).
    pub port: u16,
    /// Per-request solve budget (`SOLVER_TIME_LIMIT_MS`, unset = unlimited).
    pub time_limit: Option<Duration>,
    /// Solver strategy (`SOLVER_STRATEGY`: `exhaustive`, `hungarian` or `auto`).
    pub strategy: Strategy,
    /// Auxiliary sampler seed (`SAMPLER_SEED`, default `2`).
    pub sampler_seed: u64,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080)?;
        let time_limit = lookup("SOLVER_TIME_LIMIT_MS")
            .map(|value| parse_value("SOLVER_TIME_LIMIT_MS", &value).map(Duration::from_millis))
            .transpose()?;
        let strategy = match lookup("SOLVER_STRATEGY").as_deref() {
            None | Some("exhaustive") => Strategy::Exhaustive,
            Some("hungarian") => Strategy::Hungarian,
            Some("auto") => Strategy::Auto,
            Some(other) => {
                return Err(ServerError::Config(format!(
                    "invalid SOLVER_STRATEGY: {other}"
                )))
            }
        };
        let sampler_seed = parse_or(&lookup, "SAMPLER_SEED", 2)?;

        Ok(Self {
            host,
            port,
            time_limit,
            strategy,
            sampler_seed,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|err| ServerError::Config(format!("invalid HOST {}: {err}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Builds the optimizer described by this configuration.
    pub fn optimizer(&self) -> Optimizer {
        let mut solver_config = SolverConfig::default().with_strategy(self.strategy);
        if let Some(limit) = self.time_limit {
            solver_config = solver_config.with_time_limit(limit);
        }
        Optimizer::new(Solver::new(solver_config))
            .with_sampler(TeleportSampler::new(self.sampler_seed, 1))
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ServerError> {
    value
        .trim()
        .parse()
        .map_err(|_| ServerError::Config(format!("invalid value for {key}: {value}")))
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ServerError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

/// Failure to start or run the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Socket or runtime I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The solver rejected the request.
    #[error(transparent)]
    Rejected(#[from] AssignError),
    /// The blocking solve task failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Rejected(AssignError::Timeout { .. }) => StatusCode::REQUEST_TIMEOUT,
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();
        if status.is_server_error() {
            error!("request error: {message}");
        } else {
            warn!("request rejected: {message}");
        }
        (status, Json(serde_json::json!({ "detail": message }))).into_response()
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "u-assign alive" }))
}

async fn optimize(
    State(optimizer): State<Arc<Optimizer>>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let response = tokio::task::spawn_blocking(move || optimizer.optimize(&request))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))??;
    Ok(Json(response))
}

/// Builds the application router with permissive CORS.
pub fn router(optimizer: Optimizer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/optimize", post(optimize))
        .with_state(Arc::new(optimizer))
        .layer(cors)
}

/// Binds the configured address and serves until the process exits.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let addr = config.bind_addr()?;
    let app = router(config.optimizer());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, strategy = ?config.strategy, "u-assign server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
