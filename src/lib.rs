pub mod config;
pub mod http;
pub mod mailer;
pub mod summarizer;

pub use config::Config;
pub use http::{create_router, AppState};
pub use summarizer::{Summarizer, MOCK_SUMMARY_NO_KEY, MOCK_SUMMARY_REQUEST_FAILED};
