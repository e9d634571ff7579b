//! Configuration types for the assessment engine

use serde::{Deserialize, Serialize};

/// Default model for the Anthropic narrative backend
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";
/// Default bound on the single narrative request, in seconds
pub const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 30;

/// Main engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Narrative overlay configuration; `None` disables the overlay
    pub narrative: Option<NarrativeConfig>,
}

impl AssessmentConfig {
    /// Create a new configuration with the overlay disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Set narrative configuration
    pub fn with_narrative(mut self, narrative: NarrativeConfig) -> Self {
        self.narrative = Some(narrative);
        self
    }
}

/// Narrative overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Text-generation provider
    pub provider: NarrativeProvider,

    /// API key; an empty key downgrades the overlay to a no-op
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// Upper bound on the narrative request
    pub timeout_secs: u64,
}

impl NarrativeConfig {
    /// Anthropic-backed narrative with default model and timeout
    pub fn anthropic(api_key: impl Into<String>) -> Self {
        Self {
            provider: NarrativeProvider::Anthropic,
            api_key: api_key.into(),
            model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            timeout_secs: DEFAULT_NARRATIVE_TIMEOUT_SECS,
        }
    }

    /// Mock-backed narrative for tests and demos
    pub fn mock() -> Self {
        Self {
            provider: NarrativeProvider::Mock,
            api_key: String::new(),
            model: "mock-model".to_string(),
            timeout_secs: DEFAULT_NARRATIVE_TIMEOUT_SECS,
        }
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Narrative provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeProvider {
    Anthropic,
    Mock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = AssessmentConfig::new()
            .with_narrative(NarrativeConfig::anthropic("sk-test").with_timeout_secs(10));

        let narrative = config.narrative.unwrap();
        assert_eq!(narrative.provider, NarrativeProvider::Anthropic);
        assert_eq!(narrative.model, DEFAULT_ANTHROPIC_MODEL);
        assert_eq!(narrative.timeout_secs, 10);
    }

    #[test]
    fn test_default_disables_overlay() {
        let config = AssessmentConfig::default();
        assert!(config.narrative.is_none());
    }

    #[test]
    fn test_provider_serde() {
        assert_eq!(
            serde_json::to_string(&NarrativeProvider::Anthropic).unwrap(),
            "\"anthropic\""
        );
    }
}
