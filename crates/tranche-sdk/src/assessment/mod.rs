//! The assessment engine facade

mod engine;
mod types;

pub use engine::AssessmentEngine;
pub use types::{AssessmentRequest, AssessmentResponse};
