// src/routes/greeting.rs
use axum::{Json, extract::Query};

use crate::{
    error::AppResult,
    message::{GreetingQuery, MessageResponse, NameRequest, greeting},
    routes::extract::JsonBody,
};

pub const WELCOME: &str = "Welcome to the Flask API!";

pub async fn home_handler() -> &'static str {
    WELCOME
}

pub async fn get_example_handler(Query(pairs): Query<Vec<(String, String)>>) -> String {
    greeting(GreetingQuery::from_pairs(pairs).name_or_default())
}

pub async fn post_example_handler(
    JsonBody(payload): JsonBody<NameRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(MessageResponse {
        message: greeting(payload.name_or_default()),
    }))
}
