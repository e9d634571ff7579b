//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::Result;
use crate::provider::LLMProvider;
use async_trait::async_trait;

/// Canned response: a minimal valid narrative payload, so the mock drives
/// the full overlay path end-to-end.
const DEFAULT_RESPONSE: &str = r#"{
  "summary": "Mock narrative summary of the portfolio assessment.",
  "strengths": ["Mock strength"],
  "concerns": ["Mock concern"],
  "recommendations": ["Mock recommendation"],
  "tokenizationAssessment": "Mock assessment"
}"#;

/// Mock LLM provider for testing
pub struct MockProvider {
    name: String,
    default_response: String,
}

impl MockProvider {
    /// Create a new mock provider with a valid narrative response
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            default_response: DEFAULT_RESPONSE.to_string(),
        }
    }

    /// Create with custom response text
    pub fn with_response(response: String) -> Self {
        Self {
            name: "mock".to_string(),
            default_response: response,
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        Ok(LLMResponse::new(self.default_response.clone(), request.model)
            .with_tokens(10)
            .with_finish_reason("stop".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl LLMProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "Mock"
    }
}
