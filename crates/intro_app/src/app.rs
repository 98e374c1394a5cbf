use std::io::{self, BufRead, Write};

use intro_core::{normalize_topic, InputError, LookupOutcome, TopicResolver};
use intro_engine::IntroLookup;
use intro_logging::{intro_info, intro_warn};

/// Resolve the topic, look it up and render the outcome to `out`.
///
/// The input source is consumed by the resolver and released before any
/// network work starts. Prompts and results share `out`.
pub async fn run<R: BufRead, W: Write>(
    topic_arg: Option<String>,
    input: R,
    out: &mut W,
    lookup: &IntroLookup,
) -> io::Result<LookupOutcome> {
    let resolved = TopicResolver::new(input, &mut *out).resolve(topic_arg);

    let outcome = match resolved {
        Ok(raw) => {
            let topic = normalize_topic(&raw);
            intro_info!("looking up topic={}", topic);
            lookup.lookup(&topic).await
        }
        Err(InputError::Exhausted) => {
            intro_warn!("no input available: standard input closed before a topic was entered");
            LookupOutcome::from(InputError::Exhausted)
        }
        Err(err) => {
            intro_warn!("{}", err);
            LookupOutcome::from(err)
        }
    };

    outcome.render(out)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use intro_engine::{ArticleLocator, FetchSettings};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn lookup_for(server: &MockServer) -> IntroLookup {
        let settings = FetchSettings {
            request_timeout: Duration::from_millis(200),
            ..FetchSettings::default()
        };
        IntroLookup::new(settings).with_locator(ArticleLocator::new(format!("{}/wiki/", server.uri())))
    }

    async fn run_to_string(
        topic: Option<&str>,
        stdin: &str,
        lookup: &IntroLookup,
    ) -> (LookupOutcome, String) {
        let mut out = Vec::new();
        let outcome = run(topic.map(str::to_string), Cursor::new(stdin), &mut out, lookup)
            .await
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn argument_topic_is_normalized_and_printed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Albert_Einstein"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<body><p>Topic is a test subject.<sup>[1]</sup></p><p></p></body>",
                "text/html",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let (outcome, printed) =
            run_to_string(Some("albert einstein"), "ignored\n", &lookup_for(&server)).await;

        assert!(outcome.is_success());
        assert_eq!(printed, "Topic is a test subject.\n");
    }

    #[tokio::test]
    async fn prompted_topic_is_looked_up() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Moon_Landing"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<p>First.</p><p>Contents</p>", "text/html"),
            )
            .mount(&server)
            .await;

        let (_, printed) = run_to_string(None, "\nmoon landing\n", &lookup_for(&server)).await;

        assert_eq!(printed, "Enter the topic\nEnter the topic\nFirst.\n");
    }

    #[tokio::test]
    async fn missing_page_prints_only_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (outcome, printed) = run_to_string(Some("qwxzv"), "", &lookup_for(&server)).await;

        assert_eq!(outcome, LookupOutcome::NotFound);
        assert_eq!(printed, "Not Found\n");
    }

    #[tokio::test]
    async fn slow_server_prints_only_io_exception() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_raw("<p>late</p>", "text/html"),
            )
            .mount(&server)
            .await;

        let (outcome, printed) = run_to_string(Some("slow"), "", &lookup_for(&server)).await;

        assert_eq!(outcome, LookupOutcome::IoFailure);
        assert_eq!(printed, "IO Exception\n");
    }

    #[tokio::test]
    async fn closed_input_terminates_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (outcome, printed) = run_to_string(None, "\n", &lookup_for(&server)).await;

        assert_eq!(outcome, LookupOutcome::IoFailure);
        assert_eq!(printed, "Enter the topic\nEnter the topic\nIO Exception\n");
    }
}
