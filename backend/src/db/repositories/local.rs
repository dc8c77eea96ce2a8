//! In-memory repository for unit testing and local development.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::models::ScoreSummary;
use crate::db::repository::{RepositoryError, RepositoryResult, ScoreRepository};
use crate::models::{ScoreBand, StudentRecord, Subject};

/// Score dataset held in process memory.
///
/// Aggregate queries are linear scans and the sorted-range query sorts the
/// subject column on each call, which is fine for tests and development
/// datasets. Production deployments use the Postgres backend, where the
/// same operations run as indexed SQL.
pub struct LocalRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    students: Vec<StudentRecord>,
    by_sbd: HashMap<String, usize>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store::default()),
        }
    }

    /// Repository pre-populated with `students`.
    pub fn with_students(students: Vec<StudentRecord>) -> RepositoryResult<Self> {
        let repo = Self::new();
        repo.insert_sync(students)?;
        Ok(repo)
    }

    fn insert_sync(&self, students: Vec<StudentRecord>) -> RepositoryResult<usize> {
        let mut store = self.inner.write();

        // Reject the whole batch up front so a duplicate cannot leave the
        // store partially loaded.
        let mut incoming: HashSet<&str> = HashSet::with_capacity(students.len());
        for student in &students {
            if store.by_sbd.contains_key(&student.sbd) || !incoming.insert(&student.sbd) {
                return Err(RepositoryError::validation(format!(
                    "Duplicate registration number: {}",
                    student.sbd
                )));
            }
        }

        let inserted = students.len();
        for student in students {
            let index = store.students.len();
            store.by_sbd.insert(student.sbd.clone(), index);
            store.students.push(student);
        }
        Ok(inserted)
    }

    fn subject_scores(&self, subject: Subject) -> Vec<f64> {
        self.inner
            .read()
            .students
            .iter()
            .filter_map(|s| s.score(subject))
            .collect()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreRepository for LocalRepository {
    async fn find_by_sbd(&self, sbd: &str) -> RepositoryResult<Option<StudentRecord>> {
        let store = self.inner.read();
        Ok(store
            .by_sbd
            .get(sbd)
            .and_then(|&index| store.students.get(index))
            .cloned())
    }

    async fn count_scores(&self, subject: Subject) -> RepositoryResult<u64> {
        Ok(self.subject_scores(subject).len() as u64)
    }

    async fn count_scores_in_band(
        &self,
        subject: Subject,
        band: ScoreBand,
    ) -> RepositoryResult<u64> {
        Ok(self
            .subject_scores(subject)
            .into_iter()
            .filter(|&score| band.contains(score))
            .count() as u64)
    }

    async fn score_summary(&self, subject: Subject) -> RepositoryResult<Option<ScoreSummary>> {
        let scores = self.subject_scores(subject);
        if scores.is_empty() {
            return Ok(None);
        }

        let mut summary = ScoreSummary {
            total: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            excellent: 0,
            good: 0,
            average: 0,
            poor: 0,
        };
        for score in scores {
            summary.total += 1;
            summary.sum += score;
            summary.min = summary.min.min(score);
            summary.max = summary.max.max(score);
            match ScoreBand::classify(score) {
                ScoreBand::Excellent => summary.excellent += 1,
                ScoreBand::Good => summary.good += 1,
                ScoreBand::Average => summary.average += 1,
                ScoreBand::Poor => summary.poor += 1,
            }
        }
        Ok(Some(summary))
    }

    async fn scores_sorted_range(
        &self,
        subject: Subject,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<f64>> {
        let mut scores = self.subject_scores(subject);
        scores.sort_by(f64::total_cmp);
        Ok(scores
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn top_by_group_a(&self, limit: usize) -> RepositoryResult<Vec<StudentRecord>> {
        let mut ranked: Vec<(f64, StudentRecord)> = self
            .inner
            .read()
            .students
            .iter()
            .filter_map(|s| s.group_a_total().map(|total| (total, s.clone())))
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.sbd.cmp(&b.1.sbd)));
        ranked.truncate(limit);
        Ok(ranked.into_iter().map(|(_, student)| student).collect())
    }

    async fn insert_students(&self, students: Vec<StudentRecord>) -> RepositoryResult<usize> {
        self.insert_sync(students)
    }

    async fn student_count(&self) -> RepositoryResult<u64> {
        Ok(self.inner.read().students.len() as u64)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
