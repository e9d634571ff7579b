//! TRANCHE LLM Integration
//!
//! Narrative overlay for the TRANCHE assessment engine: given a finished
//! deterministic [`AssessmentResult`], request a qualitative
//! summary/strengths/concerns/recommendations from a text-generation
//! backend and merge it additively with the auto-generated baseline.
//!
//! **Note**: the overlay never overrides numeric fields, and every failure
//! mode (missing credentials, network errors, unparsable responses,
//! timeouts) degrades to "no narrative" rather than failing the assessment.
//!
//! [`AssessmentResult`]: tranche_core::AssessmentResult

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{AnthropicProvider, LLMProvider, MockProvider};

// Re-export the narrative surface
pub use narrative::{
    apply_narrative, LLMNarrativeGenerator, Narrative, NarrativeContext, NarrativeGenerator,
    NoopNarrativeGenerator,
};

pub mod client;
pub mod error;
pub mod narrative;
pub mod provider;
