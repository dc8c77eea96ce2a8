//! Data Transfer Objects for API responses.
//!
//! These types define the wire shapes returned by the query operations and
//! are consumed by both the service layer and the HTTP handlers.

use serde::{Deserialize, Serialize};

use crate::models::StudentRecord;

/// Per-subject scores of one student as returned by the lookup endpoint.
/// Subjects the student did not sit serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub toan: Option<f64>,
    pub ngu_van: Option<f64>,
    pub ngoai_ngu: Option<f64>,
    pub vat_li: Option<f64>,
    pub hoa_hoc: Option<f64>,
    pub sinh_hoc: Option<f64>,
    pub lich_su: Option<f64>,
    pub dia_li: Option<f64>,
    pub gdcd: Option<f64>,
    pub ma_ngoai_ngu: Option<String>,
}

impl From<&StudentRecord> for ScoreSheet {
    fn from(student: &StudentRecord) -> Self {
        Self {
            toan: student.toan,
            ngu_van: student.ngu_van,
            ngoai_ngu: student.ngoai_ngu,
            vat_li: student.vat_li,
            hoa_hoc: student.hoa_hoc,
            sinh_hoc: student.sinh_hoc,
            lich_su: student.lich_su,
            dia_li: student.dia_li,
            gdcd: student.gdcd,
            ma_ngoai_ngu: student.ma_ngoai_ngu.clone(),
        }
    }
}

/// The three Group A constituent scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupAScores {
    pub toan: f64,
    pub vat_li: f64,
    pub hoa_hoc: f64,
}

/// Group A block embedded in a lookup response when the student holds all
/// three Group A subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupABlock {
    /// Composite total, rounded to one decimal.
    pub total: f64,
    pub subjects: GroupAScores,
}

/// Lookup result for one registration number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreLookup {
    pub sbd: String,
    pub scores: ScoreSheet,
    /// Present only when all three Group A subjects are present.
    #[serde(rename = "groupA", skip_serializing_if = "Option::is_none")]
    pub group_a: Option<GroupABlock>,
}

/// Count and share of one band within a distribution report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCount {
    pub count: u64,
    /// Share of the non-null population, two decimals with a trailing `%`.
    pub percentage: String,
}

/// The four named levels of a distribution report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLevels {
    pub excellent: LevelCount,
    pub good: LevelCount,
    pub average: LevelCount,
    pub poor: LevelCount,
}

/// Four-level score distribution for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// Display name of the subject.
    pub subject: String,
    pub levels: ReportLevels,
    /// Number of students with a score for the subject.
    pub total: u64,
}

/// Band counts block of a statistics response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionCounts {
    pub excellent: u64,
    pub good: u64,
    pub average: u64,
    pub poor: u64,
}

/// Descriptive statistics for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStatistics {
    /// Display name of the subject.
    pub subject: String,
    pub total: u64,
    /// Mean, rounded to two decimals.
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    /// Median, rounded to two decimals.
    pub median: f64,
    pub distribution: DistributionCounts,
}

/// One row of the Group A top-10 ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEntry {
    /// Dense 1-based rank matching the output position.
    pub rank: usize,
    pub sbd: String,
    /// Composite total, rounded to one decimal.
    pub total: f64,
    pub scores: GroupAScores,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
