//! Narrative generation
//!
//! The [`NarrativeGenerator`] trait is the seam between the deterministic
//! engine and the text-generation backend: `analyze` returns `Some` only
//! when a usable narrative came back, and `None` for every failure mode.
//! Which implementation to inject (real vs no-op) is a constructor-time
//! decision of the caller.

mod json_extractor;
mod merge;
mod prompt;

pub use json_extractor::extract_json_object;
pub use merge::{apply_narrative, merge_items};

use crate::client::{LLMClient, LLMRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tranche_core::{AssessmentResult, PortfolioMetrics, RedFlag};

/// Qualitative narrative parsed from the model's JSON reply. All fields
/// default so a partial reply still merges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Narrative {
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    /// Parsed for forward compatibility; not merged into the result
    pub tokenization_assessment: Option<String>,
}

/// One category's score as presented to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryContext {
    pub category: String,
    pub score: u32,
    pub grade: String,
}

/// Everything the model is shown: the deterministic result minus the
/// baseline narrative it is about to augment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeContext {
    pub overall_score: u32,
    pub grade: String,
    pub readiness: String,
    pub metrics: PortfolioMetrics,
    pub category_scores: Vec<CategoryContext>,
    pub red_flags: Vec<RedFlag>,
}

impl NarrativeContext {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            overall_score: result.overall_score,
            grade: result.grade.clone(),
            readiness: result.readiness.to_string(),
            metrics: result.metrics.clone(),
            category_scores: result
                .scores
                .all()
                .iter()
                .map(|s| CategoryContext {
                    category: s.category.key().to_string(),
                    score: s.score,
                    grade: s.grade.clone(),
                })
                .collect(),
            red_flags: result.red_flags.clone(),
        }
    }
}

/// Narrative generation seam. Implementations must never fail the
/// assessment: all errors degrade to `None`.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Produce a narrative for the given context, or `None`
    async fn analyze(&self, context: &NarrativeContext) -> Option<Narrative>;

    /// Get the name of this generator
    fn name(&self) -> &str;
}

/// Generator used when no backend is configured; always `None`
pub struct NoopNarrativeGenerator;

#[async_trait]
impl NarrativeGenerator for NoopNarrativeGenerator {
    async fn analyze(&self, _context: &NarrativeContext) -> Option<Narrative> {
        None
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// LLM-backed generator: one bounded request per assessment
pub struct LLMNarrativeGenerator {
    client: Arc<dyn LLMClient>,
    model: String,
    timeout: Duration,
}

impl LLMNarrativeGenerator {
    pub fn new(client: Arc<dyn LLMClient>, model: String, timeout: Duration) -> Self {
        Self {
            client,
            model,
            timeout,
        }
    }
}

#[async_trait]
impl NarrativeGenerator for LLMNarrativeGenerator {
    async fn analyze(&self, context: &NarrativeContext) -> Option<Narrative> {
        let prompt = match prompt::build_prompt(context) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build narrative prompt");
                return None;
            }
        };

        let request = LLMRequest::new(prompt, self.model.clone())
            .with_system(prompt::SYSTEM_PROMPT.to_string())
            .with_max_tokens(1500)
            .with_temperature(0.4);

        let response = match tokio::time::timeout(self.timeout, self.client.call(request)).await {
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "narrative request timed out");
                return None;
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "narrative request failed");
                return None;
            }
            Ok(Ok(response)) => response,
        };

        let Some(json) = extract_json_object(&response.content) else {
            tracing::warn!("no JSON object found in narrative response");
            return None;
        };
        match serde_json::from_str::<Narrative>(json) {
            Ok(narrative) => Some(narrative),
            Err(e) => {
                tracing::warn!(error = %e, "narrative response did not match expected shape");
                None
            }
        }
    }

    fn name(&self) -> &str {
        self.client.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockProvider;

    fn context() -> NarrativeContext {
        NarrativeContext {
            overall_score: 78,
            grade: "B-".to_string(),
            readiness: "conditional".to_string(),
            metrics: PortfolioMetrics::empty(),
            category_scores: vec![],
            red_flags: vec![],
        }
    }

    #[tokio::test]
    async fn test_noop_generator_yields_none() {
        let generator = NoopNarrativeGenerator;
        assert!(generator.analyze(&context()).await.is_none());
    }

    #[tokio::test]
    async fn test_mock_backed_generator_yields_narrative() {
        let generator = LLMNarrativeGenerator::new(
            Arc::new(MockProvider::new()),
            "mock-model".to_string(),
            Duration::from_secs(5),
        );

        let narrative = generator.analyze(&context()).await.unwrap();
        assert!(narrative.summary.unwrap().contains("Mock narrative"));
        assert_eq!(narrative.strengths, vec!["Mock strength".to_string()]);
        assert_eq!(
            narrative.tokenization_assessment,
            Some("Mock assessment".to_string())
        );
    }

    #[tokio::test]
    async fn test_unparsable_response_degrades_to_none() {
        let generator = LLMNarrativeGenerator::new(
            Arc::new(MockProvider::with_response("I am not JSON at all".to_string())),
            "mock-model".to_string(),
            Duration::from_secs(5),
        );
        assert!(generator.analyze(&context()).await.is_none());
    }

    #[tokio::test]
    async fn test_json_wrapped_in_prose_still_parses() {
        let wrapped = "Sure! Here it is:\n{\"summary\": \"Solid pool\", \"strengths\": []}\nHope that helps.";
        let generator = LLMNarrativeGenerator::new(
            Arc::new(MockProvider::with_response(wrapped.to_string())),
            "mock-model".to_string(),
            Duration::from_secs(5),
        );

        let narrative = generator.analyze(&context()).await.unwrap();
        assert_eq!(narrative.summary, Some("Solid pool".to_string()));
        assert!(narrative.concerns.is_empty());
    }
}
