//! Feedback notification — formats the evaluation summary and dispatches it
//! to the detected address over SMTP.
//!
//! `AppState` holds an `Arc<dyn Mailer>` so the transport can be swapped
//! without touching the handler (tests use a mock). Transport failure is a
//! recoverable outcome: the score handler catches it and reports a
//! delivery-failed status alongside the already-computed report.

pub mod template;

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::Config;
use crate::scoring::report::ScoreReport;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("message build failed: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// The mail transport collaborator. One message per run, exactly one recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_feedback(
        &self,
        to: &str,
        display_name: &str,
        report: &ScoreReport,
    ) -> Result<(), DeliveryError>;
}

/// SMTP mailer over implicit TLS. Credentials come from `Config`, never
/// from literals. The transport call is bounded by a timeout; expiry is a
/// non-fatal delivery failure like any other transport error.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self, DeliveryError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .timeout(Some(SMTP_TIMEOUT))
            .build();
        let from = config.smtp_from.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_feedback(
        &self,
        to: &str,
        display_name: &str,
        report: &ScoreReport,
    ) -> Result<(), DeliveryError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(template::SUBJECT)
            .body(template::render_feedback(display_name, report))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
