use crate::config::Config;
use crate::scoring::FitScorer;
use crate::suggestions::SuggestionRelay;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// TF-IDF scorer holding the process-wide stopword set.
    pub scorer: FitScorer,
    /// Relay to the chat model for suggestions and follow-ups.
    pub relay: SuggestionRelay,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(model: std::sync::Arc<dyn crate::llm_client::ChatModel>) -> Self {
        use crate::scoring::stopwords::StopwordSet;

        Self {
            config: Config::default(),
            scorer: FitScorer::new(std::sync::Arc::new(StopwordSet::english())),
            relay: SuggestionRelay::new(model),
        }
    }
}
