// src/state.rs
use std::sync::Arc;

use crate::services::generator::AnswerGenerator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: Box<dyn AnswerGenerator>,
}

impl AppState {
    pub fn new(generator: Box<dyn AnswerGenerator>) -> Self {
        Self { generator }
    }

    pub fn shared(generator: impl AnswerGenerator + 'static) -> SharedState {
        Arc::new(Self::new(Box::new(generator)))
    }
}
