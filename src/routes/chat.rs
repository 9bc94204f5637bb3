// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    message::{AnswerResponse, PromptRequest},
    routes::extract::JsonBody,
    state::SharedState,
};

pub async fn chat_gen_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<PromptRequest>,
) -> AppResult<Json<AnswerResponse>> {
    let prompt = payload.prompt_or_default();
    let ans = state.generator.generate_answer(prompt).await?;
    tracing::debug!(answer_len = ans.len(), "answer generated");
    Ok(Json(AnswerResponse { ans }))
}
