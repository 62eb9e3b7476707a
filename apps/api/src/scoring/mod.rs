//! Fit Scoring — TF-IDF similarity and keyword gaps between a resume and a job description.
//!
//! Everything here is pure and synchronous. The only shared input is the
//! `StopwordSet`, which is immutable after startup.

pub mod keywords;
pub mod normalizer;
pub mod stopwords;
pub mod tfidf;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use self::keywords::missing_keywords;
use self::normalizer::clean_text;
use self::stopwords::StopwordSet;
use self::tfidf::PairVectors;

/// Content-based part of an analysis: everything except the LLM suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitSummary {
    pub fit_score: f64,             // 0 – 100, two decimals
    pub missing_keywords: Vec<String>,
}

/// Scores resume / job description pairs. Cheap to clone; carried in `AppState`.
#[derive(Debug, Clone)]
pub struct FitScorer {
    stopwords: Arc<StopwordSet>,
}

impl FitScorer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    pub fn clean(&self, text: &str) -> String {
        clean_text(text, &self.stopwords)
    }

    /// Cosine similarity of the TF-IDF vectors × 100, rounded half away from
    /// zero to two decimals. `0.0` when either side normalizes to nothing.
    pub fn fit_score(&self, resume: &str, job_description: &str) -> f64 {
        score_cleaned(&self.clean(resume), &self.clean(job_description))
    }

    pub fn missing_keywords(&self, resume: &str, job_description: &str) -> Vec<String> {
        missing_keywords(&self.clean(resume), &self.clean(job_description))
    }

    /// Computes both the score and the keyword gaps for one pair.
    pub fn evaluate(&self, resume: &str, job_description: &str) -> FitSummary {
        FitSummary {
            fit_score: self.fit_score(resume, job_description),
            missing_keywords: self.missing_keywords(resume, job_description),
        }
    }
}

fn score_cleaned(resume_clean: &str, jd_clean: &str) -> f64 {
    let vectors = PairVectors::build(resume_clean, jd_clean);
    let similarity = vectors.cosine_similarity();
    debug!(
        "Cosine similarity {similarity:.4} over {} vocabulary terms",
        vectors.vocabulary.len()
    );
    round_to_hundredths(similarity * 100.0).clamp(0.0, 100.0)
}

/// `f64::round` rounds half away from zero.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
