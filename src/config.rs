use anyhow::Result;
use serde::Deserialize;

/// Process-wide configuration, read once from the environment at startup
/// and immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// OPENAI_API_KEY - enables real summarization when present
    pub openai_api_key: Option<String>,

    /// EMAIL_USER - SMTP account, also used as the From address
    pub email_user: Option<String>,

    /// EMAIL_PASS - SMTP password (app password recommended)
    pub email_pass: Option<String>,

    /// PORT - HTTP listen port (default: 5001)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5001
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// True when an OpenAI key was present at startup.
    pub fn openai_enabled(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Both SMTP credentials, or None when either is missing.
    pub fn email_credentials(&self) -> Option<(&str, &str)> {
        match (self.email_user.as_deref(), self.email_pass.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }
}
