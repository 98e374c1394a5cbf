//! Wiki intro engine: article fetching and introduction extraction.
mod decode;
mod extract;
mod fetch;
mod locator;
mod lookup;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use extract::{Extractor, IntroExtractor, CITATION_MARKER_TAG, CONTENTS_MARKER, PARAGRAPH_TAG};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use locator::{ArticleLocator, DEFAULT_ARTICLE_BASE};
pub use lookup::IntroLookup;
pub use types::{FetchError, FetchedPage};
