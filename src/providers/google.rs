use crate::config::ProviderConfig;
use crate::providers::LlmProvider;
use crate::RecipeError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, RecipeError> {
        // Try config first, then fall back to environment variable
        let api_key = config.resolve_api_key().ok_or(RecipeError::MissingApiKey)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(GoogleProvider {
            client,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }]
        });

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = self.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = self.max_tokens {
            generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }

        body
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Google Gemini response ({}): {}", status, body);

        let response_body: Value = serde_json::from_str(&body).map_err(|_| {
            RecipeError::GenerationFailed(format!(
                "Google Gemini returned a non-JSON response ({})",
                status
            ))
        })?;

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let error_code = error["code"].as_i64().unwrap_or(status.as_u16() as i64);
            let error_message = error["message"].as_str().unwrap_or("Unknown error");
            return Err(RecipeError::GenerationFailed(format!(
                "Google Gemini API error ({}): {}",
                error_code, error_message
            )));
        }

        if !status.is_success() {
            return Err(RecipeError::GenerationFailed(format!(
                "Google Gemini request failed with status: {}",
                status
            )));
        }

        let reply = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                RecipeError::GenerationFailed(
                    "Failed to extract content from Google Gemini response".to_string(),
                )
            })?
            .to_string();

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn test_config(base_url: &str) -> ProviderConfig {
        ProviderConfig {
            model: "gemini-2.0-flash".to_string(),
            api_key: Some("test-key".to_string()),
            base_url: Some(base_url.to_string()),
            temperature: None,
            max_tokens: None,
        }
    }

    fn provider(base_url: &str) -> GoogleProvider {
        GoogleProvider::new(&test_config(base_url), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = provider("http://localhost");
        assert_eq!(provider.provider_name(), "google");
        assert_eq!(provider.model(), "gemini-2.0-flash");
    }

    #[test]
    fn test_request_body_without_generation_config() {
        let body = provider("http://localhost").request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_request_body_with_generation_config() {
        let mut config = test_config("http://localhost/");
        config.temperature = Some(0.5);
        config.max_tokens = Some(800);
        let provider = GoogleProvider::new(&config, Duration::from_secs(5)).unwrap();

        let body = provider.request_body("hello");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 800);
        assert_eq!(
            provider.endpoint(),
            format!("http://localhost{}", ENDPOINT)
        );
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT)
            .match_header("x-goog-api-key", "test-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "contents": [{ "parts": [{ "text": "a prompt" }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "parts": [{ "text": "Here is your recipe" }]
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let reply = provider(&server.url()).generate("a prompt").await.unwrap();
        assert_eq!(reply, "Here is your recipe");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
            .create_async()
            .await;

        let result = provider(&server.url()).generate("a prompt").await;
        match result {
            Err(RecipeError::GenerationFailed(message)) => {
                assert!(message.contains("API key not valid"))
            }
            other => panic!("expected GenerationFailed, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_server_error_without_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT)
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let result = provider(&server.url()).generate("a prompt").await;
        assert!(matches!(result, Err(RecipeError::GenerationFailed(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_missing_reply_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let result = provider(&server.url()).generate("a prompt").await;
        match result {
            Err(RecipeError::GenerationFailed(message)) => {
                assert!(message.contains("Failed to extract content"))
            }
            other => panic!("expected GenerationFailed, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = test_config("http://localhost");
        config.api_key = Some("  ".to_string());

        let result = GoogleProvider::new(&config, Duration::from_secs(5));
        match config.resolve_api_key() {
            // GOOGLE_API_KEY is set in this environment
            Some(key) => assert_eq!(result.unwrap().api_key, key),
            None => assert!(matches!(result, Err(RecipeError::MissingApiKey))),
        }
    }
}
