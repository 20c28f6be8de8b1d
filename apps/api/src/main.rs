mod config;
mod errors;
mod notify;
mod redaction;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notify::SmtpMailer;
use crate::routes::build_router;
use crate::scoring::reference::load_reference;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sift API v{}", env!("CARGO_PKG_VERSION"));

    // Load the reference job description (file-backed if configured)
    let reference = load_reference(config.reference_jd_path.as_deref())?;
    info!("Reference JD loaded ({} chars)", reference.len());

    // Initialize the SMTP mailer
    let mailer = Arc::new(SmtpMailer::new(&config).context("failed to build SMTP mailer")?);
    info!("SMTP mailer initialized (relay: {})", config.smtp_host);

    // Build app state
    let state = AppState { reference, mailer };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
