//! Group A composite ranking.

use crate::api::{GroupAScores, TopEntry};
use crate::db::repository::{RepositoryResult, ScoreRepository};
use crate::models::StudentRecord;

use super::statistics::round1;

/// Number of entries in the Group A ranking.
pub const TOP_GROUP_A_LIMIT: usize = 10;

/// Top students by Group A composite (toán + vật lý + hóa học).
///
/// Only students holding all three subjects qualify. The repository orders
/// by composite descending with ascending registration number breaking
/// ties, so equal composites rank identically across runs. Ranks are dense,
/// 1-based, and match the output position.
pub async fn compute_top10_group_a(
    repo: &dyn ScoreRepository,
) -> RepositoryResult<Vec<TopEntry>> {
    let students = repo.top_by_group_a(TOP_GROUP_A_LIMIT).await?;

    let mut entries: Vec<TopEntry> = students.into_iter().filter_map(to_entry).collect();
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    Ok(entries)
}

fn to_entry(student: StudentRecord) -> Option<TopEntry> {
    match (student.toan, student.vat_li, student.hoa_hoc) {
        (Some(toan), Some(vat_li), Some(hoa_hoc)) => Some(TopEntry {
            rank: 0,
            sbd: student.sbd,
            total: round1(toan + vat_li + hoa_hoc),
            scores: GroupAScores {
                toan,
                vat_li,
                hoa_hoc,
            },
        }),
        // The repository already filters to complete Group A rows; an
        // incomplete row here would be a backend bug and is dropped.
        _ => None,
    }
}
