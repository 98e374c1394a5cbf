/// Turn a raw topic into an article path segment.
///
/// The steps run in a fixed order: title-case the first letter of every
/// whitespace-delimited word, trim the ends, then replace each space with an
/// underscore. Runs of spaces are kept, so `"a  b"` becomes `"A__B"`. Nothing
/// else is escaped or validated.
pub fn normalize_topic(raw: &str) -> String {
    capitalize_words(raw)
        .trim_matches(|c: char| c <= ' ')
        .replace(' ', "_")
}

/// Title-case the first character of each word, leaving the rest untouched.
fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if is_word_break(ch) {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.push(title_case(ch));
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Separators that start a new word. No-break spaces join words.
fn is_word_break(ch: char) -> bool {
    match ch {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => ch.is_whitespace(),
    }
}

/// One-to-one title case. Characters whose upper case needs several
/// characters (like `ß`) stay as they are.
fn title_case(ch: char) -> char {
    match ch {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        }
    }
}
