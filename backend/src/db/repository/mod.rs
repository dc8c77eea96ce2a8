//! Repository contract for the score dataset.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::db::models::ScoreSummary;
use crate::models::{ScoreBand, StudentRecord, Subject};

/// Read-mostly access to the score dataset.
///
/// The dataset is immutable after bulk load: there are no update or delete
/// operations. Any backend able to look up by registration number and to
/// count, filter, sort, and aggregate by a subject column satisfies this
/// contract; the in-memory [`LocalRepository`] and the Diesel-backed
/// Postgres implementation both do.
///
/// [`LocalRepository`]: crate::db::repositories::LocalRepository
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Look up a single record by its normalized registration number.
    async fn find_by_sbd(&self, sbd: &str) -> RepositoryResult<Option<StudentRecord>>;

    /// Number of records with a score for `subject`.
    async fn count_scores(&self, subject: Subject) -> RepositoryResult<u64>;

    /// Number of records whose `subject` score falls into `band`.
    async fn count_scores_in_band(
        &self,
        subject: Subject,
        band: ScoreBand,
    ) -> RepositoryResult<u64>;

    /// One-pass aggregate (count, sum, min, max, band counts) over the
    /// non-null scores of `subject`. `None` when no record has a score
    /// for the subject.
    async fn score_summary(&self, subject: Subject) -> RepositoryResult<Option<ScoreSummary>>;

    /// Non-null scores of `subject` sorted ascending, starting at `offset`,
    /// at most `limit` values.
    ///
    /// This is the order-statistic primitive: callers select the median by
    /// position without materializing the whole column.
    async fn scores_sorted_range(
        &self,
        subject: Subject,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<f64>>;

    /// Records holding all three Group A subjects, ordered by composite
    /// total descending with ascending `sbd` as the tie-break, at most
    /// `limit` rows.
    async fn top_by_group_a(&self, limit: usize) -> RepositoryResult<Vec<StudentRecord>>;

    /// Bulk-load records, returning the number inserted. Duplicate
    /// registration numbers are rejected.
    async fn insert_students(&self, students: Vec<StudentRecord>) -> RepositoryResult<usize>;

    /// Total number of records in the dataset.
    async fn student_count(&self) -> RepositoryResult<u64>;

    /// Cheap connectivity probe for health endpoints.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
