//! Builder pattern for the assessment engine

use crate::assessment::AssessmentEngine;
use crate::config::{AssessmentConfig, NarrativeConfig, NarrativeProvider};
use crate::error::{Result, SdkError};
use std::sync::Arc;
use std::time::Duration;
use tranche_llm::{
    AnthropicProvider, LLMNarrativeGenerator, MockProvider, NarrativeGenerator,
    NoopNarrativeGenerator,
};

/// Builder for [`AssessmentEngine`]
///
/// # Example
///
/// ```rust,ignore
/// use tranche_sdk::{AssessmentEngineBuilder, NarrativeConfig};
///
/// // Deterministic engine, no narrative overlay
/// let engine = AssessmentEngineBuilder::new().build()?;
///
/// // With the Anthropic-backed overlay
/// let engine = AssessmentEngineBuilder::new()
///     .with_narrative(NarrativeConfig::anthropic(api_key))
///     .build()?;
/// ```
pub struct AssessmentEngineBuilder {
    config: AssessmentConfig,
    generator: Option<Arc<dyn NarrativeGenerator>>,
}

impl AssessmentEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: AssessmentConfig::new(),
            generator: None,
        }
    }

    /// Replace the full configuration
    pub fn with_config(mut self, config: AssessmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Set narrative configuration
    pub fn with_narrative(mut self, narrative: NarrativeConfig) -> Self {
        self.config.narrative = Some(narrative);
        self
    }

    /// Inject a narrative generator directly, bypassing configuration.
    /// Intended for tests and custom backends.
    pub fn with_generator(mut self, generator: Arc<dyn NarrativeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Build the engine. Whether narrative generation is live is decided
    /// here: no configuration or missing credentials mean the no-op
    /// generator, never a runtime failure.
    pub fn build(self) -> Result<AssessmentEngine> {
        let generator = match self.generator {
            Some(generator) => generator,
            None => Self::generator_from_config(self.config.narrative.as_ref())?,
        };
        Ok(AssessmentEngine::new(generator))
    }

    fn generator_from_config(
        narrative: Option<&NarrativeConfig>,
    ) -> Result<Arc<dyn NarrativeGenerator>> {
        let Some(config) = narrative else {
            return Ok(Arc::new(NoopNarrativeGenerator));
        };
        if config.model.trim().is_empty() {
            return Err(SdkError::ConfigError(
                "narrative model must not be empty".to_string(),
            ));
        }
        let timeout = Duration::from_secs(config.timeout_secs);

        match config.provider {
            NarrativeProvider::Mock => Ok(Arc::new(LLMNarrativeGenerator::new(
                Arc::new(MockProvider::new()),
                config.model.clone(),
                timeout,
            ))),
            NarrativeProvider::Anthropic => {
                if config.api_key.trim().is_empty() {
                    tracing::warn!("narrative overlay disabled: no API key configured");
                    return Ok(Arc::new(NoopNarrativeGenerator));
                }
                Ok(Arc::new(LLMNarrativeGenerator::new(
                    Arc::new(AnthropicProvider::new(config.api_key.clone())),
                    config.model.clone(),
                    timeout,
                )))
            }
        }
    }
}

impl Default for AssessmentEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_narrative() {
        let engine = AssessmentEngineBuilder::new().build().unwrap();
        assert_eq!(engine.generator_name(), "noop");
    }

    #[test]
    fn test_missing_api_key_downgrades_to_noop() {
        let engine = AssessmentEngineBuilder::new()
            .with_narrative(NarrativeConfig::anthropic(""))
            .build()
            .unwrap();
        assert_eq!(engine.generator_name(), "noop");
    }

    #[test]
    fn test_anthropic_generator_with_key() {
        let engine = AssessmentEngineBuilder::new()
            .with_narrative(NarrativeConfig::anthropic("sk-test"))
            .build()
            .unwrap();
        assert_eq!(engine.generator_name(), "anthropic");
    }

    #[test]
    fn test_mock_generator() {
        let engine = AssessmentEngineBuilder::new()
            .with_narrative(NarrativeConfig::mock())
            .build()
            .unwrap();
        assert_eq!(engine.generator_name(), "mock");
    }

    #[test]
    fn test_empty_model_is_config_error() {
        let result = AssessmentEngineBuilder::new()
            .with_narrative(NarrativeConfig::mock().with_model(""))
            .build();
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }
}
