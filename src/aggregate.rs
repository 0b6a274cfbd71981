use std::collections::BTreeMap;

use crate::buckets::bucket_for;
use crate::error::AnalyzeError;
use crate::stats::{summarize, SummaryStatistics};
use crate::types::{LatencyObservation, MessagePath};

/// Reporting key for one latency population. The derived order is the
/// report order: overall populations first (scheduled before unscheduled),
/// then size buckets by ascending bound, scheduled before unscheduled at
/// each bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PopulationKey {
    Overall(MessagePath),
    SizeBucket { upper_bound: u64, path: MessagePath },
}

impl PopulationKey {
    pub fn label(&self) -> String {
        match self {
            PopulationKey::Overall(MessagePath::Scheduled) => "overall".to_string(),
            PopulationKey::Overall(MessagePath::Unscheduled) => {
                "overall (unscheduled)".to_string()
            }
            PopulationKey::SizeBucket {
                upper_bound,
                path: MessagePath::Scheduled,
            } => format!("size < {upper_bound}"),
            PopulationKey::SizeBucket {
                upper_bound,
                path: MessagePath::Unscheduled,
            } => format!("size < {upper_bound} (unscheduled)"),
        }
    }
}

/// Accumulates latency observations into per-key populations over a single
/// pass, then summarizes them. One aggregator per run; populations are
/// created on first append, so an empty population never exists and never
/// reaches the report.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    populations: BTreeMap<PopulationKey, Vec<i64>>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the observation to every population it belongs to: always
    /// its path's overall population, plus the size bucket when the
    /// observation carries a size that maps to one. Oversized payloads
    /// (>= the last bucket bound) count toward overall only.
    pub fn record(&mut self, obs: &LatencyObservation) {
        self.populations
            .entry(PopulationKey::Overall(obs.path))
            .or_default()
            .push(obs.latency);

        if let Some(upper_bound) = obs.payload_size.and_then(bucket_for) {
            self.populations
                .entry(PopulationKey::SizeBucket {
                    upper_bound,
                    path: obs.path,
                })
                .or_default()
                .push(obs.latency);
        }
    }

    /// Population contents for one key, in arrival order.
    pub fn population(&self, key: &PopulationKey) -> Option<&[i64]> {
        self.populations.get(key).map(Vec::as_slice)
    }

    pub fn population_count(&self) -> usize {
        self.populations.len()
    }

    /// Summarize every population in report order. Fails on the first
    /// population too small for a standard deviation.
    pub fn finalize(self) -> Result<Vec<(PopulationKey, SummaryStatistics)>, AnalyzeError> {
        self.populations
            .into_iter()
            .map(|(key, latencies)| {
                let summary = summarize(&key.label(), &latencies)?;
                Ok((key, summary))
            })
            .collect()
    }
}
