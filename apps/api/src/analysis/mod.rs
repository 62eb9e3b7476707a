// Resume analysis: document extraction, fit scoring and LLM suggestions for one
// resume / job description pair. Nothing is stored between requests.

pub mod extraction;
pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::scoring::FitScorer;
use crate::suggestions::SuggestionRelay;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: String,
    pub job_description: String,
}

/// Successful analysis. Either all three fields are returned or only an error.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub fit_score: f64,
    pub missing_keywords: Vec<String>,
    pub suggestions: String,
}

#[derive(Debug, Deserialize)]
pub struct FollowupRequest {
    pub suggestions: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowupAnswer {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores the pair locally, then asks the LLM for suggestions on the raw text.
/// The suggestions call is the only step that can fail.
pub async fn analyze(
    scorer: &FitScorer,
    relay: &SuggestionRelay,
    resume: &str,
    job_description: &str,
) -> Result<AnalysisReport, AppError> {
    let summary = scorer.evaluate(resume, job_description);
    info!(
        "Fit score {:.2}, {} missing keywords",
        summary.fit_score,
        summary.missing_keywords.len()
    );

    let suggestions = relay.generate_suggestions(resume, job_description).await?;

    Ok(AnalysisReport {
        fit_score: summary.fit_score,
        missing_keywords: summary.missing_keywords,
        suggestions,
    })
}
