/// LLM Client: the single point of entry for all generative-service calls in MissionBridge.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through a `GenerativeBackend`.
///
/// Each call is exactly one HTTP request, with no retry and no client-side timeout.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
pub mod schema;

use schema::Schema;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model for schema-constrained calls.
pub const FLASH_MODEL: &str = "gemini-3-flash-preview";
/// Model for free-text rewriting, run with a thinking budget.
pub const PRO_MODEL: &str = "gemini-3-pro-preview";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured for the generative service")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// How the service is asked to shape its output.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode<'a> {
    /// JSON text conforming to the schema.
    Structured(&'a Schema),
    /// Arbitrary text.
    FreeText { thinking_budget: Option<u32> },
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub prompt: &'a str,
    pub mode: OutputMode<'a>,
}

/// A generative-text service. `Ok(None)` means the call succeeded but produced no text.
///
/// Carried by the gateway as `Arc<dyn GenerativeBackend>`.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<Option<String>, LlmError>;

    /// Whether the backend has credentials. Calls still fail at call time when it has not.
    fn is_configured(&self) -> bool;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    system_instruction: GeminiSystem<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiSystem<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GeminiResponse {
    /// Joins the answer text of the first candidate, skipping thought summaries.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl<'a> GeminiRequest<'a> {
    fn build(request: &GenerationRequest<'a>) -> Self {
        let generation_config = match request.mode {
            OutputMode::Structured(schema) => Some(GenerationConfig {
                response_mime_type: Some("application/json"),
                response_schema: Some(schema.to_wire()),
                thinking_config: None,
            }),
            OutputMode::FreeText {
                thinking_budget: Some(budget),
            } => Some(GenerationConfig {
                response_mime_type: None,
                response_schema: None,
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: budget,
                }),
            }),
            OutputMode::FreeText {
                thinking_budget: None,
            } => None,
        };

        Self {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
            system_instruction: GeminiSystem {
                parts: vec![GeminiPart {
                    text: request.system,
                }],
            },
            generation_config,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// reqwest-backed client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .user_agent(concat!("missionbridge-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<Option<String>, LlmError> {
        if !self.is_configured() {
            return Err(LlmError::MissingApiKey);
        }

        let body = GeminiRequest::build(request);

        let response = self
            .client
            .post(self.endpoint(request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Gemini API returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response.json().await?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!("Gemini blocked the prompt: {}", reason);
        }
        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .filter(|r| *r != "STOP")
        {
            warn!("Gemini finished with reason {}", reason);
        }
        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, output_tokens={}",
                request.model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed.text())
    }

    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
