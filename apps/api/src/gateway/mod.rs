//! Career Gateway: turns a typed request into one generative-service call and
//! returns a typed, schema-validated result.
//!
//! Four use cases, one file each: skill translation, resume optimization,
//! roadmap generation and interview questions. The gateway holds no mutable
//! state; concurrent calls from different screens need no coordination.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::schema::Schema;
use crate::llm_client::{
    strip_json_fences, GenerationRequest, GenerativeBackend, LlmError, OutputMode, FLASH_MODEL,
};

pub mod handlers;
pub mod interview;
pub mod prompts;
pub mod resume;
pub mod roadmap;
pub mod skills;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The call could not be completed: network, authentication or non-success status.
    #[error("generative service unavailable: {0}")]
    ServiceUnavailable(#[from] LlmError),

    /// The call succeeded but the text is not JSON or does not match the schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Clone)]
pub struct CareerGateway {
    backend: Arc<dyn GenerativeBackend>,
}

impl CareerGateway {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_configured()
    }

    /// One schema-constrained call. Any parse or validation failure discards the whole result.
    async fn call_structured<T: DeserializeOwned>(
        &self,
        system: &str,
        prompt: &str,
        schema: &Schema,
    ) -> Result<T, GatewayError> {
        let request = GenerationRequest {
            model: FLASH_MODEL,
            system,
            prompt,
            mode: OutputMode::Structured(schema),
        };

        let text = self.backend.generate(&request).await?.ok_or_else(|| {
            GatewayError::MalformedResponse("service returned no text".to_string())
        })?;

        parse_structured(&text, schema)
    }

    /// One free-text call. Missing text comes back as an empty string.
    async fn call_free_text(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
        thinking_budget: Option<u32>,
    ) -> Result<String, GatewayError> {
        let request = GenerationRequest {
            model,
            system,
            prompt,
            mode: OutputMode::FreeText { thinking_budget },
        };

        Ok(self.backend.generate(&request).await?.unwrap_or_default())
    }
}

/// Parses raw service text against `schema` and deserializes it into `T`.
pub(crate) fn parse_structured<T: DeserializeOwned>(
    text: &str,
    schema: &Schema,
) -> Result<T, GatewayError> {
    let value: serde_json::Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| GatewayError::MalformedResponse(format!("not valid JSON: {e}")))?;

    schema
        .validate(&value)
        .map_err(|v| GatewayError::MalformedResponse(format!("schema violation at {v}")))?;

    debug!("Structured response passed schema validation");

    serde_json::from_value(value)
        .map_err(|e| GatewayError::MalformedResponse(format!("unexpected shape: {e}")))
}

#[cfg(test)]
pub(crate) mod testing {
    //! A recording stand-in for the generative service.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use super::CareerGateway;
    use crate::llm_client::{GenerationRequest, GenerativeBackend, LlmError, OutputMode};

    #[derive(Debug, Clone)]
    pub enum StubReply {
        Text(String),
        Empty,
        Unavailable,
    }

    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub model: String,
        pub system: String,
        pub prompt: String,
        pub schema: Option<Value>,
        pub thinking_budget: Option<u32>,
    }

    /// Replies are served in order; the last one repeats.
    pub struct StubBackend {
        replies: Mutex<VecDeque<StubReply>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl StubBackend {
        pub fn new(replies: Vec<StubReply>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn text(text: &str) -> Arc<Self> {
            Self::new(vec![StubReply::Text(text.to_string())])
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeBackend for StubBackend {
        async fn generate(
            &self,
            request: &GenerationRequest<'_>,
        ) -> Result<Option<String>, LlmError> {
            let (schema, thinking_budget) = match request.mode {
                OutputMode::Structured(schema) => (Some(schema.to_wire()), None),
                OutputMode::FreeText { thinking_budget } => (None, thinking_budget),
            };
            self.calls.lock().unwrap().push(RecordedCall {
                model: request.model.to_string(),
                system: request.system.to_string(),
                prompt: request.prompt.to_string(),
                schema,
                thinking_budget,
            });

            let reply = {
                let mut replies = self.replies.lock().unwrap();
                if replies.len() > 1 {
                    replies.pop_front()
                } else {
                    replies.front().cloned()
                }
            };

            match reply.unwrap_or(StubReply::Empty) {
                StubReply::Text(text) => Ok(Some(text)),
                StubReply::Empty => Ok(None),
                StubReply::Unavailable => Err(LlmError::Api {
                    status: 503,
                    message: "stub outage".to_string(),
                }),
            }
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    pub fn gateway(backend: &Arc<StubBackend>) -> CareerGateway {
        CareerGateway::new(backend.clone())
    }
}
