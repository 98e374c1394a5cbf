use intro_core::LookupOutcome;
use intro_logging::{intro_debug, intro_info, intro_warn};

use crate::{
    decode_html, ArticleLocator, Extractor, FetchError, FetchSettings, Fetcher, IntroExtractor,
    ReqwestFetcher,
};

/// One article lookup: locate, fetch, decode and extract.
pub struct IntroLookup {
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    locator: ArticleLocator,
}

impl IntroLookup {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_parts(
            Box::new(ReqwestFetcher::new(settings)),
            Box::new(IntroExtractor),
            ArticleLocator::default(),
        )
    }

    pub fn with_parts(
        fetcher: Box<dyn Fetcher>,
        extractor: Box<dyn Extractor>,
        locator: ArticleLocator,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            locator,
        }
    }

    pub fn with_locator(mut self, locator: ArticleLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn locator(&self) -> &ArticleLocator {
        &self.locator
    }

    /// Look up an already normalized topic. Never fails: every error is
    /// folded into [`LookupOutcome::NotFound`] or [`LookupOutcome::IoFailure`].
    pub async fn lookup(&self, topic: &str) -> LookupOutcome {
        let url = match self.locator.article_url(topic) {
            Ok(url) => url,
            Err(err) => return classify_failure(topic, &err),
        };

        let page = match self.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(err) => return classify_failure(topic, &err),
        };
        if page.truncated {
            intro_info!(
                "page for topic={} exceeded the size cap, reading the first {} bytes",
                topic,
                page.body.len()
            );
        }

        let decoded = decode_html(&page.body, page.content_type.as_deref());
        intro_debug!("decoded {} bytes as {}", page.body.len(), decoded.encoding_label);

        let lines = self.extractor.extract(&decoded.html);
        intro_info!(
            "topic={} url={} paragraphs={}",
            topic,
            page.final_url,
            lines.len()
        );
        LookupOutcome::Success(lines)
    }
}

fn classify_failure(topic: &str, err: &FetchError) -> LookupOutcome {
    if err.is_not_found() {
        intro_info!("no article for topic={}: {}", topic, err);
        LookupOutcome::NotFound
    } else {
        intro_warn!("lookup failed for topic={}: {}", topic, err);
        LookupOutcome::IoFailure
    }
}
