use crate::config::Config;
use crate::summarizer::Summarizer;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable startup configuration
    pub config: Arc<Config>,

    /// Summary generator (OpenAI-backed, with mock fallback)
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let summarizer = Summarizer::new(config.openai_api_key.clone());
        Self::with_summarizer(config, summarizer)
    }

    /// Wire in a pre-built summarizer (used by tests to point at a mock server).
    pub fn with_summarizer(config: Config, summarizer: Summarizer) -> Self {
        Self {
            config: Arc::new(config),
            summarizer,
        }
    }
}
