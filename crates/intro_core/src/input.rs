use std::io::{self, BufRead, Write};

use intro_logging::{intro_debug, intro_trace};
use thiserror::Error;

/// Prompt line written before each read from the line source.
pub const TOPIC_PROMPT: &str = "Enter the topic";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input available: line source reached end of stream")]
    Exhausted,
    #[error("failed to read topic: {0}")]
    Io(#[from] io::Error),
}

/// Resolves the topic from an explicit argument or by prompting a line source.
///
/// The resolver owns its reader and prompt sink. Both are released when
/// [`TopicResolver::resolve`] returns, whichever way it returns.
pub struct TopicResolver<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> TopicResolver<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    /// Return `argument` verbatim when present; otherwise prompt until a
    /// non-empty line is read. End of stream fails instead of re-prompting.
    pub fn resolve(mut self, argument: Option<String>) -> Result<String, InputError> {
        if let Some(topic) = argument {
            intro_debug!("topic taken from argument, len={}", topic.len());
            return Ok(topic);
        }

        loop {
            writeln!(self.prompt, "{TOPIC_PROMPT}")?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Exhausted);
            }
            let line = strip_line_ending(&line);
            if !line.is_empty() {
                intro_debug!("topic read from input, len={}", line.len());
                return Ok(line.to_string());
            }
            intro_trace!("empty input line, prompting again");
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
