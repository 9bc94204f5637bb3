// src/routes/mod.rs
pub mod chat;
pub mod extract;
pub mod greeting;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_gen_handler;
use greeting::{get_example_handler, home_handler, post_example_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/get_example", get(get_example_handler))
        .route("/post_example", post(post_example_handler))
        .route("/chat_gen", post(chat_gen_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
