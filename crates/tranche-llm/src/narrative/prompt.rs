//! Prompt construction for the narrative overlay

use super::NarrativeContext;
use crate::error::Result;

pub(crate) const SYSTEM_PROMPT: &str = "You are a senior credit analyst reviewing a loan \
portfolio for tokenization readiness. You write precise, factual prose grounded in the \
numbers you are given, and you respond with JSON only.";

/// Embed the full assessment context and request a strict JSON reply
pub(crate) fn build_prompt(context: &NarrativeContext) -> Result<String> {
    let context_json = serde_json::to_string_pretty(context)?;
    Ok(format!(
        r#"Below is the deterministic assessment of a loan portfolio, including its
normalized metrics, the six weighted category scores, and every red flag
that fired.

{context_json}

Write a qualitative analysis of this portfolio. Respond with a single JSON
object and nothing else, using exactly these keys:

{{
  "summary": "2-3 sentence portfolio overview",
  "strengths": ["up to 4 specific strengths, each citing a number from the context"],
  "concerns": ["up to 4 specific concerns, each citing a number from the context"],
  "recommendations": ["up to 4 concrete next steps"],
  "tokenizationAssessment": "one sentence on readiness"
}}

Do not restate the numeric scores as your own judgment; explain what drives
them. Do not invent figures that are not in the context."#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tranche_core::PortfolioMetrics;

    #[test]
    fn test_prompt_embeds_context() {
        let context = NarrativeContext {
            overall_score: 82,
            grade: "B".to_string(),
            readiness: "conditional".to_string(),
            metrics: PortfolioMetrics::empty(),
            category_scores: vec![],
            red_flags: vec![],
        };
        let prompt = build_prompt(&context).unwrap();
        assert!(prompt.contains("\"overall_score\": 82"));
        assert!(prompt.contains("tokenizationAssessment"));
    }
}
