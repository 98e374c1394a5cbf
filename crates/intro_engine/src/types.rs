/// Article page as received. `body` stops at the size cap when `truncated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid article url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("too many redirects: {0}")]
    TooManyRedirects(String),
    #[error("not an html page: {0}")]
    UnsupportedContentType(String),
    #[error("network failure: {0}")]
    Network(String),
}

impl FetchError {
    /// Any HTTP error status means there is no article for the topic.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}
