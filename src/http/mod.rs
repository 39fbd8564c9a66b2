//! HTTP API server for the Meeting Notes backend
//!
//! This module provides the REST API:
//! - POST /api/generate-summary - Summarize a transcript
//! - POST /api/send-email - Email a summary to recipients
//! - GET / - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
