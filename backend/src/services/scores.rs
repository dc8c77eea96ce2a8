//! The public query operations over the score dataset.
//!
//! Each operation validates its input, consults the cache where one
//! applies, delegates to the statistics engine, and returns a typed result.
//! `InvalidInput`, `InvalidSubject`, and `NotFound` are expected,
//! user-facing outcomes; only `Repository` indicates a genuine fault.

use thiserror::Error;

use crate::api::{
    DistributionReport, GroupABlock, GroupAScores, ScoreLookup, ScoreSheet, SubjectStatistics,
    TopEntry,
};
use crate::db::repository::{RepositoryError, ScoreRepository};
use crate::models::{normalize_sbd, Subject};

use super::cache::ResultCache;
use super::{ranking, statistics};

/// Failures surfaced by the query operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed required parameter.
    #[error("{0}")]
    InvalidInput(String),
    /// Subject key outside the fixed set; the message lists the valid keys.
    #[error("Invalid subject. Valid subjects: {0}")]
    InvalidSubject(String),
    /// Valid request with no matching data.
    #[error("{0}")]
    NotFound(String),
    /// Unexpected fault in the dataset accessor.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

fn parse_subject(key: &str) -> Result<Subject, ServiceError> {
    Subject::from_key(key).ok_or_else(|| ServiceError::InvalidSubject(Subject::valid_keys()))
}

/// Look up one student's scores by registration number.
///
/// Raw input is normalized by left-padding with zeros to eight digits, so
/// `"5"` and `"00000005"` address the same record. The response embeds a
/// Group A block when all three Group A subjects are present.
pub async fn check_score(
    repo: &dyn ScoreRepository,
    raw_sbd: &str,
) -> ServiceResult<ScoreLookup> {
    let raw = raw_sbd.trim();
    if raw.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Registration number (SBD) is required".to_string(),
        ));
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ServiceError::InvalidInput(
            "Registration number (SBD) must be numeric".to_string(),
        ));
    }

    let sbd = normalize_sbd(raw);
    let student = repo
        .find_by_sbd(&sbd)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Student with SBD {} not found", sbd)))?;

    let scores = ScoreSheet::from(&student);
    let group_a = match (
        student.group_a_total(),
        student.toan,
        student.vat_li,
        student.hoa_hoc,
    ) {
        (Some(total), Some(toan), Some(vat_li), Some(hoa_hoc)) => Some(GroupABlock {
            total,
            subjects: GroupAScores {
                toan,
                vat_li,
                hoa_hoc,
            },
        }),
        _ => None,
    };

    Ok(ScoreLookup {
        sbd: student.sbd,
        scores,
        group_a,
    })
}

/// Four-level distribution report for a subject key.
///
/// Reports are recomputed on every call; only statistics and the ranking
/// are memoized. A subject nobody sat still yields a valid zero-count
/// report, but an entirely empty dataset means nothing has been loaded and
/// reads as `NotFound`.
pub async fn score_report(
    repo: &dyn ScoreRepository,
    subject_key: &str,
) -> ServiceResult<DistributionReport> {
    let subject = parse_subject(subject_key)?;

    if repo.student_count().await? == 0 {
        return Err(ServiceError::NotFound("Report not found".to_string()));
    }

    Ok(statistics::compute_distribution(repo, subject).await?)
}

/// Descriptive statistics for a subject key, memoized under the cache TTL.
///
/// `NotFound` when no student sat the subject: statistics are genuinely
/// undefined there, unlike the report case. The absent result is cached
/// under the same TTL as any other.
pub async fn subject_statistics(
    repo: &dyn ScoreRepository,
    cache: &ResultCache,
    subject_key: &str,
) -> ServiceResult<SubjectStatistics> {
    let subject = parse_subject(subject_key)?;

    let stats = match cache.get_statistics(subject) {
        Some(cached) => cached,
        None => {
            let computed = statistics::compute_statistics(repo, subject).await?;
            cache.put_statistics(subject, computed.clone());
            computed
        }
    };

    stats.ok_or_else(|| ServiceError::NotFound("Statistics not found".to_string()))
}

/// Group A top-10 ranking, memoized under the cache TTL.
///
/// Never fails on an empty dataset; fewer than ten qualifying students
/// simply shortens the list.
pub async fn top10_group_a(
    repo: &dyn ScoreRepository,
    cache: &ResultCache,
) -> ServiceResult<Vec<TopEntry>> {
    if let Some(cached) = cache.get_top_group_a() {
        return Ok(cached);
    }

    let entries = ranking::compute_top10_group_a(repo).await?;
    cache.put_top_group_a(entries.clone());
    Ok(entries)
}
