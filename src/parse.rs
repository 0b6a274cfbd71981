use crate::error::AnalyzeError;
use crate::types::{Action, Event};

/// Parse one log record. Two grammars are in the wild, differing only in
/// the trailing size field:
///
/// ```text
/// (ID: <id>) <ACTION> AT TIME - <int>
/// (ID: <id>) <ACTION> AT TIME - <int> WITH SIZE <int>
/// ```
///
/// Anything else is fatal: skipping a line would silently corrupt the
/// matcher's pairing state, so the run aborts instead.
pub fn parse_line(line: &str) -> Result<Event, AnalyzeError> {
    parse_line_inner(line).ok_or_else(|| AnalyzeError::MalformedLine {
        line: line.to_string(),
    })
}

fn parse_line_inner(line: &str) -> Option<Event> {
    let rest = line.strip_prefix("(ID: ")?;
    let (message_id, rest) = rest.split_once(") ")?;
    if message_id.is_empty() || message_id.chars().any(char::is_whitespace) {
        return None;
    }

    let (action_token, rest) = rest.split_once(" AT TIME - ")?;
    let action = Action::from_token(action_token)?;

    let (timestamp_str, payload_size) = match rest.split_once(" WITH SIZE ") {
        Some((ts, size)) => (ts, Some(size.parse::<u64>().ok()?)),
        None => (rest, None),
    };
    let timestamp = timestamp_str.parse::<i64>().ok()?;

    Some(Event {
        message_id: message_id.to_string(),
        action,
        timestamp,
        payload_size,
    })
}
