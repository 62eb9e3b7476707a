//! Suggestion Relay — formats the suggestion and follow-up prompts and relays them
//! through a `ChatModel`.
//!
//! Replies are returned exactly as the model produced them. Any model failure is
//! logged here and surfaced as one generic `AppError::Llm`.

pub mod prompts;

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::ChatModel;

use self::prompts::{followup_prompt, suggestions_prompt};

#[derive(Clone)]
pub struct SuggestionRelay {
    model: Arc<dyn ChatModel>,
}

impl SuggestionRelay {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Asks the model which keywords are missing, what phrasing to improve and
    /// how to restructure `resume` for `job_description`.
    pub async fn generate_suggestions(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<String, AppError> {
        let prompt = suggestions_prompt(resume, job_description);
        self.relay(&prompt, "suggestions").await
    }

    /// Answers `question` in the context of earlier `suggestions`, which may be empty.
    pub async fn answer_followup(
        &self,
        suggestions: &str,
        question: &str,
    ) -> Result<String, AppError> {
        let prompt = followup_prompt(suggestions, question);
        self.relay(&prompt, "follow-up").await
    }

    async fn relay(&self, prompt: &str, purpose: &str) -> Result<String, AppError> {
        match self.model.chat(prompt).await {
            Ok(text) => {
                info!("LLM {purpose} reply received ({} chars)", text.len());
                Ok(text)
            }
            Err(e) => {
                error!("LLM {purpose} call failed: {e}");
                Err(AppError::Llm(format!("{purpose} request failed")))
            }
        }
    }
}
