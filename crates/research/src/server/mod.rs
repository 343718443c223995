mod cli;

pub use cli::App;

use crate::gemini::GeminiClient;
use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use research_core::research::ResearchRequest;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const PROCESS_PATH: &str = "/api/research/process";

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let client = Arc::new(global.gemini_client()?);
    let addr = format!("{}:{}", app.host, app.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Research API listening on http://{}", addr);
    if global.verbose {
        eprintln!("Research API listening on http://{}", addr);
        eprintln!("Process endpoint: http://{}{}", addr, PROCESS_PATH);
    }

    axum::serve(listener, router(client))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(client: Arc<GeminiClient>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(PROCESS_PATH, post(process_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(client)
}

async fn process_handler(
    State(client): State<Arc<GeminiClient>>,
    Json(request): Json<ResearchRequest>,
) -> std::result::Result<String, Error> {
    client.process_content(&request).await
}

async fn health_handler() -> &'static str {
    "ok"
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        };

        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Rejected request: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}
