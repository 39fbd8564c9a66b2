//! One-shot SMTP delivery of summary emails via Gmail.

use anyhow::Result;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

const SMTP_RELAY: &str = "smtp.gmail.com";

/// Split a comma-separated recipient string into trimmed addresses,
/// preserving order and dropping empty segments.
pub fn parse_recipients(recipients: &str) -> Vec<String> {
    recipients
        .split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(String::from)
        .collect()
}

/// Send one plain-text summary email.
///
/// A fresh transport is constructed per call; nothing is pooled or reused.
pub async fn send_summary(
    user: &str,
    pass: &str,
    recipients: &[String],
    subject: &str,
    summary: &str,
) -> Result<()> {
    let mut builder = Message::builder()
        .from(user.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN);

    for recipient in recipients {
        builder = builder.to(recipient.parse()?);
    }

    let message = builder.body(summary.to_string())?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_RELAY)?
        .credentials(Credentials::new(user.to_string(), pass.to_string()))
        .build();

    transport.send(message).await?;
    info!("Email sent to {} recipient(s)", recipients.len());

    Ok(())
}
