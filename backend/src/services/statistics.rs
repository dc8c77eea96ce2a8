//! Distribution and descriptive statistics for a single subject.
//!
//! All aggregates run through the repository so the full score column is
//! never materialized in process memory; the median in particular is
//! selected positionally from a sorted range query.

use crate::api::{
    DistributionCounts, DistributionReport, LevelCount, ReportLevels, SubjectStatistics,
};
use crate::db::repository::{RepositoryError, RepositoryResult, ScoreRepository};
use crate::models::{ScoreBand, Subject};

/// Round to one decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places, half away from zero.
///
/// `f64::round` rounds halfway cases away from zero, which matches the
/// reference behavior for means, medians, and percentages.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `count` in `total` formatted with two decimals and a trailing
/// `%`. An empty population yields the literal `"0.00%"` rather than an
/// error.
fn percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", round2(count as f64 / total as f64 * 100.0))
}

/// Four-band distribution for `subject`.
///
/// The bands partition `[0, 10]`, so the bucket counts always sum to
/// `total`. A subject nobody sat yields a well-formed report with zero
/// counts and `"0.00%"` percentages.
pub async fn compute_distribution(
    repo: &dyn ScoreRepository,
    subject: Subject,
) -> RepositoryResult<DistributionReport> {
    let total = repo.count_scores(subject).await?;
    let excellent = repo
        .count_scores_in_band(subject, ScoreBand::Excellent)
        .await?;
    let good = repo.count_scores_in_band(subject, ScoreBand::Good).await?;
    let average = repo
        .count_scores_in_band(subject, ScoreBand::Average)
        .await?;
    let poor = repo.count_scores_in_band(subject, ScoreBand::Poor).await?;

    let level = |count: u64| LevelCount {
        count,
        percentage: percentage(count, total),
    };

    Ok(DistributionReport {
        subject: subject.display_name().to_string(),
        levels: ReportLevels {
            excellent: level(excellent),
            good: level(good),
            average: level(average),
            poor: level(poor),
        },
        total,
    })
}

/// Descriptive statistics for `subject`, or `None` when no student sat it.
///
/// The mean and median are rounded to two decimals, half away from zero;
/// `highest`/`lowest` keep the source precision of one decimal.
pub async fn compute_statistics(
    repo: &dyn ScoreRepository,
    subject: Subject,
) -> RepositoryResult<Option<SubjectStatistics>> {
    let summary = match repo.score_summary(subject).await? {
        Some(summary) if summary.total > 0 => summary,
        _ => return Ok(None),
    };

    let median = compute_median(repo, subject, summary.total).await?;

    Ok(Some(SubjectStatistics {
        subject: subject.display_name().to_string(),
        total: summary.total,
        average: round2(summary.sum / summary.total as f64),
        highest: summary.max,
        lowest: summary.min,
        median,
        distribution: DistributionCounts {
            excellent: summary.excellent,
            good: summary.good,
            average: summary.average,
            poor: summary.poor,
        },
    }))
}

/// Exact median over the sorted subject column.
///
/// Odd count: the value at position `total / 2` (0-indexed ascending).
/// Even count: the mean of the values at `total / 2 - 1` and `total / 2`.
/// Either way only one or two values cross the repository boundary.
async fn compute_median(
    repo: &dyn ScoreRepository,
    subject: Subject,
    total: u64,
) -> RepositoryResult<f64> {
    let middle = total / 2;
    let values = if total % 2 == 0 {
        repo.scores_sorted_range(subject, middle - 1, 2).await?
    } else {
        repo.scores_sorted_range(subject, middle, 1).await?
    };

    if values.is_empty() {
        // The aggregate said the column is non-empty; an empty sorted range
        // means the backend contradicted itself.
        return Err(RepositoryError::internal(format!(
            "Sorted range for {} returned no values despite a count of {}",
            subject.key(),
            total
        )));
    }

    let median = values.iter().sum::<f64>() / values.len() as f64;
    Ok(round2(median))
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
