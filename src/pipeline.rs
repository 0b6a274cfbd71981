use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::aggregate::{PopulationKey, StatsAggregator};
use crate::error::AnalyzeError;
use crate::matcher::EventMatcher;
use crate::parse::parse_line;
use crate::stats::SummaryStatistics;

/// Result of one full analysis run.
#[derive(Debug)]
pub struct RunReport {
    /// Summaries in report order, one per non-empty population.
    pub summaries: Vec<(PopulationKey, SummaryStatistics)>,
    pub matched: usize,
    /// Sends still pending when the log ended. Dropped from the
    /// statistics, surfaced via a warning.
    pub dropped_sends: usize,
}

/// One run's worth of pairing and aggregation state. Constructed fresh per
/// log; there is no cross-run state anywhere.
#[derive(Debug, Default)]
pub struct LatencyPipeline {
    matcher: EventMatcher,
    aggregator: StatsAggregator,
    matched: usize,
}

impl LatencyPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and fold in one log line, in strict log order.
    pub fn push_line(&mut self, line: &str) -> Result<(), AnalyzeError> {
        let event = parse_line(line)?;
        if let Some(obs) = self.matcher.observe(&event)? {
            self.matched += 1;
            self.aggregator.record(&obs);
        }
        Ok(())
    }

    /// End of input: account for unmatched sends and summarize every
    /// population.
    pub fn finish(self) -> Result<RunReport, AnalyzeError> {
        let dropped_sends = self.matcher.pending_len();
        if dropped_sends > 0 {
            warn!(
                dropped_sends,
                "log ended with sends still pending; excluded from statistics"
            );
        }

        Ok(RunReport {
            summaries: self.aggregator.finalize()?,
            matched: self.matched,
            dropped_sends,
        })
    }
}

/// Run the pipeline over in-memory lines.
pub fn analyze_lines<I>(lines: I) -> Result<RunReport, AnalyzeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut pipeline = LatencyPipeline::new();
    for line in lines {
        pipeline.push_line(line.as_ref())?;
    }
    pipeline.finish()
}

/// Run the pipeline over a log file, attaching the 1-based line number to
/// any line-level failure.
pub fn run_file(path: &Path) -> Result<RunReport> {
    let file =
        File::open(path).with_context(|| format!("opening latency log {}", path.display()))?;

    let mut pipeline = LatencyPipeline::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        pipeline
            .push_line(&line)
            .with_context(|| format!("{}:{}", path.display(), idx + 1))?;
    }

    let report = pipeline.finish()?;
    info!(
        matched = report.matched,
        populations = report.summaries.len(),
        dropped_sends = report.dropped_sends,
        "analysis complete"
    );
    Ok(report)
}
