//! Operational CLI for the bills API.
//!
//! Two binaries: `list_bills` prints the connected employee's bills,
//! `submit_bill` runs the full two-phase submission for a receipt file.
//! Both read the API location from `BILLFOLD_API_URL`/`BILLFOLD_API_TOKEN`
//! and the connected user from `BILLFOLD_SESSION`.

use anyhow::{Context, Result};
use billfold_services::SessionContext;

/// Environment variable holding the JSON session blob, e.g.
/// `{"type":"Employee","email":"employee@test.tld"}`.
pub const SESSION_ENV: &str = "BILLFOLD_SESSION";

/// Load the connected user from the environment.
pub fn session_from_env() -> Result<SessionContext> {
    let raw = std::env::var(SESSION_ENV)
        .with_context(|| format!("Missing session. Set {}", SESSION_ENV))?;
    SessionContext::from_json(&raw).context("Invalid session JSON")
}

/// Initialize tracing with RUST_LOG-style filtering, defaulting to info.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
