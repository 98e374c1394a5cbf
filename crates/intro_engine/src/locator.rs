use url::Url;

use crate::FetchError;

/// Article path prefix of the English encyclopedia.
pub const DEFAULT_ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Builds article URLs by appending a normalized topic to a base prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLocator {
    base: String,
}

impl ArticleLocator {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Plain concatenation of base and topic. The topic is not escaped here;
    /// URL parsing percent-encodes what it must and treats `#` as a fragment.
    pub fn article_url(&self, topic: &str) -> Result<Url, FetchError> {
        let raw = format!("{}{}", self.base, topic);
        Url::parse(&raw).map_err(|err| FetchError::InvalidUrl {
            reason: err.to_string(),
            url: raw,
        })
    }
}

impl Default for ArticleLocator {
    fn default() -> Self {
        Self::new(DEFAULT_ARTICLE_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_english_articles() {
        let url = ArticleLocator::default()
            .article_url("Albert_Einstein")
            .unwrap();
        assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/Albert_Einstein");
    }

    #[test]
    fn punctuation_passes_through() {
        let url = ArticleLocator::default().article_url("C++").unwrap();
        assert_eq!(url.path(), "/wiki/C++");
    }

    #[test]
    fn hash_starts_a_fragment() {
        let url = ArticleLocator::default().article_url("C#").unwrap();
        assert_eq!(url.path(), "/wiki/C");
        assert_eq!(url.fragment(), Some(""));
    }

    #[test]
    fn custom_base_is_used_verbatim() {
        let locator = ArticleLocator::new("http://127.0.0.1:8080/wiki/");
        assert_eq!(locator.base(), "http://127.0.0.1:8080/wiki/");
        let url = locator.article_url("Moon").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/wiki/Moon");
    }

    #[test]
    fn unparsable_base_is_invalid_url() {
        let err = ArticleLocator::new("not a url/").article_url("Moon").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { ref url, .. } if url == "not a url/Moon"));
        assert!(!err.is_not_found());
    }
}
