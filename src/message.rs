// src/message.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Guest";

#[derive(Debug)]
pub struct GreetingQuery {
    pub name: Option<String>,
}

impl GreetingQuery {
    /// Takes the first `name` parameter; repeated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);
        Self { name }
    }

    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl NameRequest {
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl PromptRequest {
    /// The prompt falls back to the same default as the greeting name.
    pub fn prompt_or_default(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_NAME)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub ans: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_fall_back_to_guest() {
        let req: NameRequest = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert_eq!(req.name_or_default(), "Guest");

        let req: PromptRequest = serde_json::from_str(r#"{"prompt": null}"#).unwrap();
        assert_eq!(req.prompt_or_default(), "Guest");
    }

    #[test]
    fn first_query_name_wins() {
        let query = GreetingQuery::from_pairs(vec![
            ("other".to_string(), "x".to_string()),
            ("name".to_string(), "a".to_string()),
            ("name".to_string(), "b".to_string()),
        ]);
        assert_eq!(query.name_or_default(), "a");
        assert_eq!(GreetingQuery::from_pairs(vec![]).name_or_default(), "Guest");
    }

    #[test]
    fn empty_string_is_kept() {
        let req: NameRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(greeting(req.name_or_default()), "Hello, !");
    }
}
