mod cli;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{middleware, routing::get, Json, Router};
use clap::Parser;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use semi_static::{serve_semi_static, Config};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "semi_static=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let addr = format!("{}:{}", cli.host(), cli.port());

    tracing::info!("Template directory: {}", config.folder_path);
    tracing::info!("Starting semi-static on http://{}", addr);

    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("semi-static");
    println!("  pages:   http://{}/<page>", addr);
    println!("  health:  http://{}/health", addr);

    axum::serve(listener, app).await.unwrap();
}

fn router(config: Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            Arc::new(config),
            serve_semi_static,
        ))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "NoSuchPage",
            "message": "No template or route matches this path",
        })),
    )
}
