use std::time::Duration;

use futures_util::StreamExt;
use intro_logging::{intro_debug, intro_trace};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{FetchError, FetchedPage};

/// Agent string sent with every request; article servers refuse anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("wiki-intro/", env!("CARGO_PKG_VERSION"));

const HTML_MEDIA_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    /// Bytes kept from the body; the rest of a longer page is dropped.
    pub max_body_bytes: usize,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 10,
            max_body_bytes: 8 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Single-GET article fetcher.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .user_agent(self.settings.user_agent.as_str())
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        intro_debug!("GET {}", url);
        let response = self
            .client()?
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if let Some(declared) = content_type.as_deref().filter(|ct| !is_html(ct)) {
            return Err(FetchError::UnsupportedContentType(declared.to_string()));
        }

        let (body, truncated) = read_capped(response, self.settings.max_body_bytes).await?;
        if truncated {
            intro_debug!("kept first {} bytes of {}", body.len(), final_url);
        }

        Ok(FetchedPage {
            final_url,
            content_type,
            body,
            truncated,
        })
    }
}

/// Media type without parameters, compared case-insensitively.
fn is_html(content_type: &str) -> bool {
    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    HTML_MEDIA_TYPES
        .iter()
        .any(|html| html.eq_ignore_ascii_case(media_type))
}

/// Stream the body, stopping once `cap` bytes are held.
async fn read_capped(
    response: reqwest::Response,
    cap: usize,
) -> Result<(Vec<u8>, bool), FetchError> {
    let mut body = Vec::new();
    let mut chunks = response.bytes_stream();
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(transport_error)?;
        let room = cap - body.len();
        if chunk.len() > room {
            body.extend_from_slice(&chunk[..room]);
            return Ok((body, true));
        }
        body.extend_from_slice(&chunk);
        intro_trace!("body at {} bytes", body.len());
    }
    Ok((body, false))
}

fn transport_error(err: reqwest::Error) -> FetchError {
    let detail = err.to_string();
    if err.is_timeout() {
        FetchError::Timeout(detail)
    } else if err.is_redirect() {
        FetchError::TooManyRedirects(detail)
    } else {
        FetchError::Network(detail)
    }
}
