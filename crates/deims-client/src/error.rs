use thiserror::Error;

/// Top-level error type for the `deims-client` crate.
///
/// Covers every failure mode: identifier normalization, transport,
/// response parsing, and registry-reported errors. No variant is ever
/// retried internally -- each failure surfaces to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    // ── Input validation ────────────────────────────────────────────
    /// The normalizer found no identifier in the input string.
    #[error("no DEIMS identifier found in {input:?}")]
    InvalidIdentifier { input: String },

    /// Base URL parsing error (client construction only).
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (DNS failure, connection refused, timeout).
    #[error("registry unreachable: {0}")]
    RemoteUnavailable(#[from] reqwest::Error),

    // ── Registry responses ──────────────────────────────────────────
    /// The registry reported no record for the given identifier (HTTP 404).
    #[error("no site found for id {id}")]
    SiteNotFound { id: String },

    /// Any other non-2xx status from the registry.
    #[error("registry error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// A 2xx body that does not match the expected record shape.
    /// Carries the raw body for debugging.
    #[error("malformed registry response: {message}")]
    MalformedResponse { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::SiteNotFound { .. } | Self::Api { status: 404, .. } => true,
            Self::RemoteUnavailable(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient transport failure that a
    /// caller might reasonably retry on its own schedule.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RemoteUnavailable(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
