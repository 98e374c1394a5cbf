//! Wiki intro core: topic resolution, normalization and the outcome model.
mod input;
mod outcome;
mod topic;

pub use input::{InputError, TopicResolver, TOPIC_PROMPT};
pub use outcome::{LookupOutcome, IO_FAILURE_MESSAGE, NOT_FOUND_MESSAGE};
pub use topic::normalize_topic;
