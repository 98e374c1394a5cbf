use std::io::{self, Write};

use crate::InputError;

/// Line printed when the server answers with an HTTP error status.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";
/// Line printed for every other failure, including unreadable input.
pub const IO_FAILURE_MESSAGE: &str = "IO Exception";

/// The single result of one program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Introductory paragraphs, in document order. May be empty.
    Success(Vec<String>),
    NotFound,
    IoFailure,
}

impl LookupOutcome {
    /// Write the user-visible lines for this outcome.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            LookupOutcome::Success(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            LookupOutcome::NotFound => writeln!(out, "{NOT_FOUND_MESSAGE}")?,
            LookupOutcome::IoFailure => writeln!(out, "{IO_FAILURE_MESSAGE}")?,
        }
        out.flush()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }
}

impl From<InputError> for LookupOutcome {
    fn from(_: InputError) -> Self {
        LookupOutcome::IoFailure
    }
}
