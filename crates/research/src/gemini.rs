use crate::error::Error;
use research_core::research::{build_prompt, extract_answer, GenerateContentRequest, ResearchRequest};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API key. Never printed by `Debug`.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Endpoint up to and including the key parameter, e.g. `...:generateContent?key=`.
    pub api_url: String,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("research-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.api_url, self.config.api_key.expose())
    }

    /// Send a single prompt and return the raw response body.
    ///
    /// Exactly one request is issued. Non-2xx statuses are returned as
    /// [`Error::Status`].
    pub async fn generate_content(&self, prompt: &str) -> Result<String, Error> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self.http.post(self.endpoint()).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        log::debug!("Model API responded with {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }

    /// Build the prompt, query the model, and extract the answer.
    ///
    /// Unsupported operations fail before any request is made. Malformed
    /// model responses are not errors; they come back as diagnostic strings.
    pub async fn process_content(&self, request: &ResearchRequest) -> Result<String, Error> {
        let prompt = build_prompt(request)?;

        log::info!(
            "Processing '{}' request ({} chars of content, {} chars of prompt)",
            request.operation,
            request.content.len(),
            prompt.len()
        );

        let raw = self.generate_content(&prompt).await?;

        Ok(extract_answer(&raw))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        routing::post,
        Json, Router,
    };
    use research_core::research::{prompt::SUGGEST_TEMPLATE, ResearchError, NO_CONTENT_FOUND};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Canned behavior for the stand-in model API.
    #[derive(Clone)]
    pub(crate) struct FakeGemini {
        pub status: StatusCode,
        pub body: String,
        pub delay: Duration,
        pub calls: Arc<Mutex<Vec<(HashMap<String, String>, serde_json::Value)>>>,
    }

    impl FakeGemini {
        pub fn answering(text: &str) -> Self {
            let body = serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
            });
            Self::raw(StatusCode::OK, &body.to_string())
        }

        pub fn raw(status: StatusCode, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                delay: Duration::ZERO,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Serve on an ephemeral port and return the URL to append the key to.
        pub async fn serve(&self) -> String {
            async fn handler(
                State(fake): State<FakeGemini>,
                Query(query): Query<HashMap<String, String>>,
                Json(body): Json<serde_json::Value>,
            ) -> (StatusCode, String) {
                fake.calls.lock().unwrap().push((query, body));
                tokio::time::sleep(fake.delay).await;
                (fake.status, fake.body.clone())
            }

            let router = Router::new()
                .route("/v1beta/models/gemini:generateContent", post(handler))
                .with_state(self.clone());
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

            format!("http://{addr}/v1beta/models/gemini:generateContent?key=")
        }

        /// Serve on an ephemeral port and return a client pointed at it.
        pub async fn spawn(&self) -> GeminiClient {
            GeminiClient::new(GeminiConfig {
                api_url: self.serve().await,
                api_key: ApiKey::from("secret-key".to_string()),
                timeout: Duration::from_secs(5),
            })
            .unwrap()
        }
    }

    #[tokio::test]
    async fn test_process_content_returns_first_text() {
        let fake = FakeGemini::answering("Hello world");
        let client = fake.spawn().await;

        let answer = client
            .process_content(&ResearchRequest::new("suggest", "Photosynthesis"))
            .await
            .unwrap();

        assert_eq!(answer, "Hello world");
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_key_and_prompt() {
        let fake = FakeGemini::answering("ok");
        let client = fake.spawn().await;

        client
            .process_content(&ResearchRequest::new("suggest", "Photosynthesis"))
            .await
            .unwrap();

        let calls = fake.calls.lock().unwrap();
        let (query, body) = &calls[0];
        assert_eq!(query.get("key").map(String::as_str), Some("secret-key"));
        assert_eq!(
            body,
            &serde_json::json!({
                "contents": [{"parts": [{"text": format!("{SUGGEST_TEMPLATE}Photosynthesis")}]}]
            })
        );
    }

    #[tokio::test]
    async fn test_unsupported_operation_makes_no_call() {
        let fake = FakeGemini::answering("unused");
        let client = fake.spawn().await;

        let err = client
            .process_content(&ResearchRequest::new("translate", "Hola"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Research(ResearchError::UnsupportedOperation(ref op)) if op == "translate"
        ));
        assert!(err.is_client_error());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_error_status_is_a_transport_error() {
        let fake = FakeGemini::raw(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        let client = fake.spawn().await;

        let err = client
            .process_content(&ResearchRequest::new("summarize", "text"))
            .await
            .unwrap_err();

        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_diagnostic_string() {
        let fake = FakeGemini::raw(StatusCode::OK, "<html>not json</html>");
        let client = fake.spawn().await;

        let answer = client
            .process_content(&ResearchRequest::new("summarize", "text"))
            .await
            .unwrap();

        assert!(answer.starts_with("Error Parsing: "));
    }

    #[tokio::test]
    async fn test_empty_candidates_becomes_sentinel() {
        let fake = FakeGemini::raw(StatusCode::OK, r#"{"candidates":[]}"#);
        let client = fake.spawn().await;

        let answer = client
            .process_content(&ResearchRequest::new("suggest", "text"))
            .await
            .unwrap();

        assert_eq!(answer, NO_CONTENT_FOUND);
    }

    #[tokio::test]
    async fn test_timeout_is_a_network_error_without_key() {
        let mut fake = FakeGemini::answering("late");
        fake.delay = Duration::from_secs(2);
        let mut client = fake.spawn().await;
        client = GeminiClient::new(GeminiConfig {
            timeout: Duration::from_millis(100),
            ..client.config.clone()
        })
        .unwrap();

        let err = client
            .process_content(&ResearchRequest::new("suggest", "text"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Network(_)));
        assert!(!err.to_string().contains("secret-key"));
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GeminiClient::new(GeminiConfig {
            api_url: format!("http://{addr}/generate?key="),
            api_key: ApiKey::from("secret-key".to_string()),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let err = client.generate_content("prompt").await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
        assert!(!err.to_string().contains("secret-key"));
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let config = GeminiConfig {
            api_url: "https://example.com?key=".to_string(),
            api_key: ApiKey::from("secret-key".to_string()),
            timeout: Duration::from_secs(1),
        };

        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
