use serde::Serialize;

use crate::error::AnalyzeError;

/// Summary of one latency population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub median: f64,
    pub std: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
    pub quantile_90: f64,
    pub quantile_995: f64,
    pub min: f64,
    pub max: f64,
}

/// Quantile by linear interpolation over the sorted sample: the estimate
/// sits at fractional rank `q * (n - 1)`. For `[1, 2, 3, 4]` the 0.25
/// quantile is 1.75, not 2. Callers must pass a non-empty sorted slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}

/// Sample standard deviation (n - 1 denominator). Undefined below two
/// samples; the caller turns that into the population-level error.
fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
    Some((sum_sq / (n - 1) as f64).sqrt())
}

/// Compute the full statistic set for one population. `label` names the
/// population in the under-two-samples error.
pub fn summarize(label: &str, latencies: &[i64]) -> Result<SummaryStatistics, AnalyzeError> {
    let mut sorted: Vec<f64> = latencies.iter().map(|&v| v as f64).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let std = sample_std(&sorted).ok_or_else(|| AnalyzeError::InsufficientSample {
        key: label.to_string(),
        count: latencies.len(),
    })?;

    Ok(SummaryStatistics {
        count: sorted.len(),
        median: quantile(&sorted, 0.5),
        std,
        lower_quartile: quantile(&sorted, 0.25),
        upper_quartile: quantile(&sorted, 0.75),
        quantile_90: quantile(&sorted, 0.90),
        quantile_995: quantile(&sorted, 0.995),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}
