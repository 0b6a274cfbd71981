use thiserror::Error;

use crate::types::Action;

/// Everything that can abort an analysis run. There is no recovery path
/// anywhere: the log is a trusted, already-captured artifact, so a line
/// that cannot be understood means the run's results cannot be trusted.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("unparseable log line: {line:?}")]
    MalformedLine { line: String },

    #[error("{} for message {message_id} has no pending send", .action.as_str())]
    UnmatchedCompletion { message_id: String, action: Action },

    #[error(
        "population {key:?} has {count} observation(s); standard deviation needs at least 2"
    )]
    InsufficientSample { key: String, count: usize },
}
