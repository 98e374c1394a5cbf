use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use intro_logging::intro_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Malformed input was replaced with U+FFFD.
    pub had_replacements: bool,
}

/// Decode a fetched body into UTF-8.
///
/// The encoding is chosen from the byte order mark first, then the
/// `charset` parameter of the Content-Type header, then `chardetng` guessing.
/// Malformed sequences are replaced rather than rejected.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            if name.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim().trim_matches(['"', '\'']))
            } else {
                None
            }
        })
        .find_map(|label| Encoding::for_label(label.as_bytes()))
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedHtml {
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        intro_warn!("body contained malformed {} sequences", used.name());
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: used.name().to_string(),
        had_replacements: had_errors,
    }
}
