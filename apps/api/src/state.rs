use crate::advisor::Advisor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Configured Gemini client, or the fallback responder when no key is set.
    pub advisor: Advisor,
}
