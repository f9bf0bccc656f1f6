// DEIMS-SDR HTTP client
//
// Wraps `reqwest::Client` with registry URL construction and uniform
// response handling. Endpoint groups (sites, networks, geoserver) are
// implemented as inherent methods in separate files to keep this module
// focused on transport mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Base URL of the public DEIMS-SDR registry.
pub const DEFAULT_BASE_URL: &str = "https://deims.org/";

/// Async client for the DEIMS-SDR registry API.
///
/// Holds the HTTP connection pool explicitly -- there is no process-wide
/// shared session. All operations take `&self`; the pool is internally
/// synchronized, so concurrent calls are safe. No response is cached
/// across calls and no request is ever retried.
pub struct DeimsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DeimsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Client for the public registry at [`DEFAULT_BASE_URL`] with
    /// default transport settings.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, &TransportConfig::default())
    }

    /// Client for an alternative registry deployment.
    pub fn with_base_url(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages pool and
    /// transport settings).
    pub fn from_reqwest(http: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Parse the base URL and guarantee a trailing slash so that
    /// relative joins append rather than replace the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The registry base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"api/sites"`) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining a relative path works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and parse the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// Send a GET request with query parameters and parse the JSON body.
    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Map a response to a parsed body, [`Error::Api`] on non-2xx, or
    /// [`Error::MalformedResponse`] when a 2xx body fails to parse.
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    preview(&body).to_owned()
                },
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = preview(&body);
            Error::MalformedResponse {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

/// Truncate a body to a short preview for error messages.
///
/// Bodies can hold arbitrary remote text; the cut must land on a char
/// boundary, not a raw byte index, or multi-byte characters panic the
/// slice.
fn preview(body: &str) -> &str {
    const PREVIEW_LEN: usize = 200;
    if body.len() <= PREVIEW_LEN {
        return body;
    }
    let mut end = PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
