use std::time::Duration;

use kamus_types::PromptSpec;
use serde::{Deserialize, Serialize};

use crate::{InferenceClient, InferenceError, InferenceParams};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

/// Response shapes the completion endpoints are known to return.
///
/// Variants are tried in declaration order; each yields the same generated
/// text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CompletionPayload {
    /// `/api/generate`
    Generate {
        response: String,
        done_reason: Option<String>,
    },
    /// `/api/chat`
    Chat {
        message: ChatMessage,
        done_reason: Option<String>,
    },
    /// Older completion servers
    Completion {
        content: String,
        done_reason: Option<String>,
    },
    /// No text at all, only a completion reason
    Status { done_reason: String },
}

impl CompletionPayload {
    fn into_parts(self) -> (String, Option<String>) {
        match self {
            CompletionPayload::Generate {
                response,
                done_reason,
            } => (response, done_reason),
            CompletionPayload::Chat {
                message,
                done_reason,
            } => (message.content, done_reason),
            CompletionPayload::Completion {
                content,
                done_reason,
            } => (content, done_reason),
            CompletionPayload::Status { done_reason } => (String::new(), Some(done_reason)),
        }
    }
}

/// Decode a completion body into the generated text
pub(crate) fn decode_completion(body: &str, model: &str) -> Result<String, InferenceError> {
    let payload: CompletionPayload = serde_json::from_str(body).map_err(|e| {
        InferenceError::MalformedPayload(format!("no known response shape ({e})"))
    })?;

    let (text, done_reason) = payload.into_parts();
    if !text.trim().is_empty() {
        return Ok(text);
    }

    match done_reason.as_deref() {
        Some("load") => Err(InferenceError::ModelLoading(model.to_string())),
        Some(reason) => Err(InferenceError::MalformedPayload(format!(
            "no content returned, reason: {reason}"
        ))),
        None => Err(InferenceError::MalformedPayload(
            "no content found in response".to_string(),
        )),
    }
}

/// Client for an Ollama-compatible completion endpoint
#[derive(Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    request_timeout: Duration,
}

impl OllamaClient {
    pub fn new(
        api_url: String,
        model: String,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_url,
            model,
            request_timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl InferenceClient for OllamaClient {
    async fn complete(
        &self,
        prompt: &PromptSpec,
        params: &InferenceParams,
    ) -> Result<String, InferenceError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt.user_prompt,
            system: &prompt.system_instruction,
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                num_predict: params.max_tokens,
            },
        };

        tracing::debug!(
            "Sending completion for '{}' to {} (model {})",
            prompt.subject,
            self.api_url,
            self.model
        );

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api(format!("HTTP {status}: {body}")));
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        tracing::debug!("Received {} bytes from {}", body.len(), self.api_url);

        decode_completion(&body, &self.model)
    }

    fn backend(&self) -> &str {
        "ollama"
    }
}

impl OllamaClient {
    fn map_send_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(self.request_timeout)
        } else {
            if e.is_connect() {
                tracing::error!(
                    "Connection refused: make sure Ollama is running at {}",
                    self.api_url
                );
            }
            InferenceError::Transport(e)
        }
    }
}
