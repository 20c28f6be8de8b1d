use std::sync::Arc;

use crate::notify::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Reference job description every upload is scored against.
    /// Loaded once at startup, read-only for the lifetime of the process.
    pub reference: Arc<str>,
    /// Pluggable mail transport. Default: SmtpMailer. Swapped for a mock in tests.
    pub mailer: Arc<dyn Mailer>,
}
