use std::sync::{Arc, Mutex};

use axum::{Router, routing::get};
use rusqlite::Connection;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod chat;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod validation;

use crate::chat::ChatClient;
use crate::handlers::AppState;

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("salesdash_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let db_path = std::env::var("SALESDASH_DB").unwrap_or_else(|_| "salesdash.db".to_string());
    let conn = Connection::open(&db_path).expect("Failed to open database");
    db::init_db(&conn).expect("Failed to create database schema");
    db::seed_db(&conn).expect("Failed to seed database");

    let state = AppState {
        db: Arc::new(Mutex::new(conn)),
        chat: Arc::new(ChatClient::from_env()),
    };

    let app = Router::new()
        .route("/", get(|| async { "SalesDash API Server" }))
        .merge(routes::scenario_routes())
        .merge(routes::preset_routes())
        .merge(routes::metrics_routes())
        .merge(routes::sales_routes())
        .merge(routes::chat_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3001")
        .await
        .expect("Failed to bind listener");
    tracing::info!(
        "listening on {}",
        listener.local_addr().expect("listener has an address")
    );
    axum::serve(listener, app).await.expect("server failed");
}
