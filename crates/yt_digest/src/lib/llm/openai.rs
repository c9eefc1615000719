use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

/// Client for OpenAI compatible `chat/completions` endpoints (OpenAI, OpenRouter).
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyResponse,
}

impl OpenAIClient {
    const SYSTEM_PROMPT: &'static str = "You summarize YouTube video transcripts.";

    pub const OPENROUTER_BASE_URL: &'static str = "https://openrouter.ai/api/v1";
    pub const OPENROUTER_MODEL: &'static str = "meta-llama/llama-3.3-70b-instruct";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            model: <Self as Summarizer>::SUMMARIZER_MODEL.into(),
            temperature: None,
        }
    }

    /// OpenRouter gateway with its default model and a fixed temperature of 0.7.
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self::new(api_key)
            .with_base_url(Self::OPENROUTER_BASE_URL)
            .with_model(Self::OPENROUTER_MODEL)
            .with_temperature(0.7)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn send_completion_request(
        &self,
        model_name: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let mut body = serde_json::json!({
            "model": model_name.into(),
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: Option<String>,
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// Text of the first choice, if the model produced any.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|content| !content.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for OpenAIClient {
    const SUMMARIZER_MODEL: &'static str = "gpt-4o-mini";
    type Error = OpenAIError;

    #[tracing::instrument(skip_all, fields(model = %self.model))]
    async fn summarize(&self, prompt: &str) -> Result<SummaryResponse, Self::Error> {
        let response = self
            .send_completion_request(&self.model, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response.content().ok_or(OpenAIError::EmptyResponse)?;

        Ok(SummaryResponse::new(summary))
    }
}
