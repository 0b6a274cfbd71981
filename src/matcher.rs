use std::collections::HashMap;

use tracing::debug;

use crate::error::AnalyzeError;
use crate::types::{Event, LatencyObservation, MessagePath, PendingSend};

/// Pairs send events with their completion events by message id.
///
/// Message ids are only unique while a message is in flight; once a pair is
/// consumed the id may be reused, so matched entries are removed
/// immediately. The scheduled and unscheduled paths keep separate
/// keyspaces: an id in flight on both paths at once is two independent
/// pending sends.
#[derive(Debug, Default)]
pub struct EventMatcher {
    pending: HashMap<PendingKey, PendingSend>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PendingKey {
    path: MessagePath,
    message_id: String,
}

impl EventMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event, in strict log order. A send opens (or overwrites,
    /// last-send-wins) the pending entry for its key and yields nothing. A
    /// completion consumes the pending entry and yields the observation;
    /// a completion with no pending send is fatal, since it is
    /// indistinguishable from a log that lost or reordered lines.
    pub fn observe(&mut self, event: &Event) -> Result<Option<LatencyObservation>, AnalyzeError> {
        let key = PendingKey {
            path: event.action.path(),
            message_id: event.message_id.clone(),
        };

        if event.action.is_send() {
            self.pending.insert(
                key,
                PendingSend {
                    timestamp: event.timestamp,
                    payload_size: event.payload_size,
                },
            );
            return Ok(None);
        }

        let Some(send) = self.pending.remove(&key) else {
            return Err(AnalyzeError::UnmatchedCompletion {
                message_id: event.message_id.clone(),
                action: event.action,
            });
        };

        let latency = event.timestamp - send.timestamp;
        debug!(message_id = %event.message_id, latency, "matched pair");

        Ok(Some(LatencyObservation {
            latency,
            payload_size: event.payload_size.or(send.payload_size),
            path: event.action.path(),
        }))
    }

    /// Number of sends still waiting for a completion.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
