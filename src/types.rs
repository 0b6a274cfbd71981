use serde::{Deserialize, Serialize};

/// One action recorded by the system under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Sent,
    Delivered,
    SentUnscheduled,
    ReceivedUnscheduled,
}

impl Action {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SENT" => Some(Action::Sent),
            "DELIVERED" => Some(Action::Delivered),
            "SENT_UNSCHEDULED" => Some(Action::SentUnscheduled),
            "RECEIVED_UNSCHEDULED" => Some(Action::ReceivedUnscheduled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Sent => "SENT",
            Action::Delivered => "DELIVERED",
            Action::SentUnscheduled => "SENT_UNSCHEDULED",
            Action::ReceivedUnscheduled => "RECEIVED_UNSCHEDULED",
        }
    }

    /// True for the send side of a pair, false for the completion side.
    pub fn is_send(self) -> bool {
        matches!(self, Action::Sent | Action::SentUnscheduled)
    }

    pub fn path(self) -> MessagePath {
        match self {
            Action::Sent | Action::Delivered => MessagePath::Scheduled,
            Action::SentUnscheduled | Action::ReceivedUnscheduled => MessagePath::Unscheduled,
        }
    }
}

/// Which send path a message travelled: the normal scheduler or the
/// unscheduled fast path. Ordering puts scheduled first in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessagePath {
    Scheduled,
    Unscheduled,
}

impl MessagePath {
    pub fn as_str(self) -> &'static str {
        match self {
            MessagePath::Scheduled => "scheduled",
            MessagePath::Unscheduled => "unscheduled",
        }
    }
}

/// One parsed log record. Created by parsing exactly one line, consumed
/// once by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub message_id: String,
    pub action: Action,
    pub timestamp: i64,
    /// Absent in the oldest log variant, which predates size tracking.
    pub payload_size: Option<u64>,
}

/// Open matcher state for a message awaiting its completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSend {
    pub timestamp: i64,
    pub payload_size: Option<u64>,
}

/// Output of one matched send/completion pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyObservation {
    /// Completion timestamp minus send timestamp. Negative values are
    /// possible when the log's clocks are inconsistent and are kept as-is.
    pub latency: i64,
    pub payload_size: Option<u64>,
    pub path: MessagePath,
}
