/// Together AI completions client — the single point of entry for all
/// text-generation calls in Mizan.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All generation MUST go through this module.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const TOGETHER_API_URL: &str = "https://api.together.xyz/v1/completions";
/// Default completion model; override with the TOGETHER_MODEL env var.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Sampling parameters for one generation call. Each prompt template in
/// `explainer::prompts` carries its own fixed pair.
#[derive(Debug, Clone, Copy)]
pub struct GenParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Error)]
pub enum GenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion API returned no choices")]
    EmptyCompletion,
}

impl GenError {
    /// Renders the failure as the degraded `"Error: ..."` text the endpoints
    /// return in place of model output. Handlers choose this over surfacing
    /// a 5xx so a failed generation still produces a readable response.
    pub fn degraded_text(&self) -> String {
        match self {
            GenError::Api { status, .. } => format!("Error: {status}"),
            GenError::Http(e) => format!("Error: {e}"),
            GenError::EmptyCompletion => "Error: empty completion".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// The single completion client used by all handlers.
/// Stateless per request; no retry, no caching, no streaming.
#[derive(Clone)]
pub struct TogetherClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl TogetherClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, TOGETHER_API_URL.to_string())
    }

    /// Points the client at an alternative endpoint. Tests use this to
    /// target a simulated completion server.
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
            model,
        }
    }

    /// One completion call. Failures come back as `GenError`; callers decide
    /// whether to surface them or degrade to sentinel text.
    pub async fn generate(&self, prompt: &str, params: GenParams) -> Result<String, GenError> {
        debug!(
            "Sending completion request (model: {}): {}...",
            self.model,
            prefix(prompt)
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                prompt,
                max_tokens: params.max_tokens,
                temperature: params.temperature,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Completion API returned {status}: {body}");
            return Err(GenError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or(GenError::EmptyCompletion)?;

        debug!("Completion received: {}...", prefix(&text));

        Ok(text)
    }
}

/// First 100 characters of `text`, for trace lines only. Char-boundary safe
/// because prompts and completions carry Arabic text.
fn prefix(text: &str) -> &str {
    match text.char_indices().nth(100) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PARAMS: GenParams = GenParams {
        max_tokens: 64,
        temperature: 0.5,
    };

    async fn client_for(server: &MockServer) -> TogetherClient {
        TogetherClient::with_base_url(
            "test-key".to_string(),
            DEFAULT_MODEL.to_string(),
            format!("{}/v1/completions", server.uri()),
        )
    }

    #[tokio::test]
    async fn success_returns_first_choice_text_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(
                serde_json::json!({"model": DEFAULT_MODEL, "max_tokens": 64}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"choices": [{"text": "X"}, {"text": "ignored"}]}),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let text = client.generate("prompt", PARAMS).await.unwrap();
        assert_eq!(text, "X");
    }

    #[tokio::test]
    async fn non_success_status_degrades_without_panicking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.generate("prompt", PARAMS).await.unwrap_err();
        let degraded = err.degraded_text();
        assert!(degraded.starts_with("Error:"));
        assert!(degraded.contains("503"));
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.generate("prompt", PARAMS).await.unwrap_err();
        assert!(matches!(err, GenError::EmptyCompletion));
        assert!(err.degraded_text().starts_with("Error:"));
    }

    #[tokio::test]
    async fn malformed_body_degrades_without_panicking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.generate("prompt", PARAMS).await.unwrap_err();
        assert!(err.degraded_text().starts_with("Error:"));
    }

    #[test]
    fn prefix_respects_arabic_char_boundaries() {
        let long = "م".repeat(150);
        assert_eq!(prefix(&long).chars().count(), 100);
        assert_eq!(prefix("short"), "short");
    }
}
