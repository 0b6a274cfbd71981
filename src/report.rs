use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::pipeline::RunReport;
use crate::stats::SummaryStatistics;

/// Render the report as labeled text blocks, one per population, in report
/// order. Labels match the historical script output.
pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    for (i, (key, stats)) in report.summaries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", key.label());
        let _ = writeln!(out, "count: {}", stats.count);
        let _ = writeln!(out, "median: {}", stats.median);
        let _ = writeln!(out, "std: {}", stats.std);
        let _ = writeln!(out, "lower quartile: {}", stats.lower_quartile);
        let _ = writeln!(out, "upper quartile: {}", stats.upper_quartile);
        let _ = writeln!(out, "90th quantile: {}", stats.quantile_90);
        let _ = writeln!(out, "99.5th quantile: {}", stats.quantile_995);
        let _ = writeln!(out, "min: {}", stats.min);
        let _ = writeln!(out, "max: {}", stats.max);
    }
    out
}

#[derive(Serialize)]
struct PopulationBlock<'a> {
    population: String,
    #[serde(flatten)]
    stats: &'a SummaryStatistics,
}

/// Render the report as a JSON array of population blocks, same order as
/// the text rendering.
pub fn render_json(report: &RunReport) -> Result<String> {
    let blocks: Vec<PopulationBlock<'_>> = report
        .summaries
        .iter()
        .map(|(key, stats)| PopulationBlock {
            population: key.label(),
            stats,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&blocks)?)
}
