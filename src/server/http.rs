use crate::app::dto::*;
use crate::app::engine::{ClassNotFound, GodClassEngine};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct HttpState {
    pub engine: GodClassEngine,
}

#[derive(Debug, Clone, Deserialize)]
struct ScanQuery {
    pattern: Option<String>,
    #[serde(default)]
    include_clean: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ApiErrorBody {
    error: String,
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> axum::response::Response {
    (status, Json(ApiErrorBody { error: msg.into() })).into_response()
}

/// Runs a blocking engine call and maps its outcome to a JSON response; `status_of` picks the
/// status for engine errors.
async fn run_blocking<T, F>(
    status_of: fn(&anyhow::Error) -> StatusCode,
    f: F,
) -> axum::response::Response
where
    T: Serialize + Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    match spawn_blocking(f).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => api_error(status_of(&e), format!("{e:#}")),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        ),
    }
}

fn internal_error(_: &anyhow::Error) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

fn bad_request(_: &anyhow::Error) -> StatusCode {
    StatusCode::BAD_REQUEST
}

/// 404 for unknown classes only; anything else is a server fault.
fn lookup_error(e: &anyhow::Error) -> StatusCode {
    if e.downcast_ref::<ClassNotFound>().is_some() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn build_router(engine: GodClassEngine) -> Router {
    let state = Arc::new(HttpState { engine });

    Router::new()
        .route("/health", get(health))
        .route("/evaluate", post(evaluate))
        .route("/measure", post(measure))
        .route("/scan", get(scan))
        .route("/reload", post(reload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(engine: GodClassEngine, addr: SocketAddr) -> Result<()> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    match state.engine.health() {
        Ok(res) => Json(res).into_response(),
        Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

async fn reload(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let engine = state.engine.clone();
    run_blocking(internal_error, move || engine.reload()).await
}

async fn evaluate(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<EvaluateRequest>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    run_blocking(lookup_error, move || engine.evaluate(req)).await
}

async fn measure(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<MeasureRequest>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    run_blocking(bad_request, move || engine.measure(req)).await
}

async fn scan(
    State(state): State<Arc<HttpState>>,
    Query(q): Query<ScanQuery>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    let req = ScanRequest {
        pattern: q.pattern,
        include_clean: q.include_clean,
    };
    run_blocking(bad_request, move || engine.scan(req)).await
}
