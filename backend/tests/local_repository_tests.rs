//! Contract tests for the in-memory repository.

use gscores_rust::db::repositories::LocalRepository;
use gscores_rust::db::repository::ScoreRepository;
use gscores_rust::models::{ScoreBand, StudentRecord, Subject};

fn student(sbd: &str, toan: Option<f64>, vat_li: Option<f64>, hoa_hoc: Option<f64>) -> StudentRecord {
    let mut record = StudentRecord::new(sbd);
    record.toan = toan;
    record.vat_li = vat_li;
    record.hoa_hoc = hoa_hoc;
    record
}

fn fixture() -> LocalRepository {
    LocalRepository::with_students(vec![
        student("00000001", Some(9.0), Some(8.5), Some(8.0)),
        student("00000002", Some(4.5), None, Some(6.0)),
        student("00000003", None, Some(2.0), None),
        student("00000004", Some(7.0), Some(7.0), Some(7.0)),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_find_by_sbd() {
    let repo = fixture();

    let found = repo.find_by_sbd("00000002").await.unwrap();
    assert_eq!(found.unwrap().toan, Some(4.5));

    let missing = repo.find_by_sbd("99999999").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_count_scores_ignores_nulls() {
    let repo = fixture();

    assert_eq!(repo.count_scores(Subject::Toan).await.unwrap(), 3);
    assert_eq!(repo.count_scores(Subject::VatLi).await.unwrap(), 3);
    assert_eq!(repo.count_scores(Subject::HoaHoc).await.unwrap(), 3);
    assert_eq!(repo.count_scores(Subject::NguVan).await.unwrap(), 0);
}

#[tokio::test]
async fn test_count_scores_in_band() {
    let repo = fixture();

    assert_eq!(
        repo.count_scores_in_band(Subject::Toan, ScoreBand::Excellent)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        repo.count_scores_in_band(Subject::Toan, ScoreBand::Good)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        repo.count_scores_in_band(Subject::Toan, ScoreBand::Average)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        repo.count_scores_in_band(Subject::Toan, ScoreBand::Poor)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_score_summary() {
    let repo = fixture();

    let summary = repo.score_summary(Subject::Toan).await.unwrap().unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.sum, 9.0 + 4.5 + 7.0);
    assert_eq!(summary.min, 4.5);
    assert_eq!(summary.max, 9.0);
    assert_eq!(
        summary.excellent + summary.good + summary.average + summary.poor,
        summary.total
    );

    let empty = repo.score_summary(Subject::Gdcd).await.unwrap();
    assert!(empty.is_none());
}

#[tokio::test]
async fn test_scores_sorted_range_selects_by_position() {
    let repo = fixture();

    let all = repo
        .scores_sorted_range(Subject::Toan, 0, 10)
        .await
        .unwrap();
    assert_eq!(all, vec![4.5, 7.0, 9.0]);

    let middle = repo.scores_sorted_range(Subject::Toan, 1, 1).await.unwrap();
    assert_eq!(middle, vec![7.0]);

    let beyond = repo
        .scores_sorted_range(Subject::Toan, 5, 2)
        .await
        .unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_top_by_group_a_filters_and_orders() {
    let repo = fixture();

    let top = repo.top_by_group_a(10).await.unwrap();
    // Students 2 and 3 lack a full Group A set
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].sbd, "00000001");
    assert_eq!(top[1].sbd, "00000004");
}

#[tokio::test]
async fn test_top_by_group_a_tie_breaks_by_sbd() {
    let repo = LocalRepository::with_students(vec![
        student("00000020", Some(8.0), Some(8.0), Some(8.0)),
        student("00000010", Some(8.0), Some(8.0), Some(8.0)),
    ])
    .unwrap();

    let top = repo.top_by_group_a(10).await.unwrap();
    assert_eq!(top[0].sbd, "00000010");
    assert_eq!(top[1].sbd, "00000020");
}

#[tokio::test]
async fn test_top_by_group_a_respects_limit() {
    let students: Vec<StudentRecord> = (1..=15)
        .map(|i| {
            student(
                &format!("{:08}", i),
                Some(5.0 + i as f64 * 0.1),
                Some(5.0),
                Some(5.0),
            )
        })
        .collect();
    let repo = LocalRepository::with_students(students).unwrap();

    let top = repo.top_by_group_a(10).await.unwrap();
    assert_eq!(top.len(), 10);
    // Highest composite belongs to the last generated student
    assert_eq!(top[0].sbd, "00000015");
}

#[tokio::test]
async fn test_insert_rejects_duplicate_sbd() {
    let repo = fixture();

    let result = repo
        .insert_students(vec![student("00000001", None, None, None)])
        .await;
    assert!(result.is_err());

    // Failed batch must not change the dataset
    assert_eq!(repo.student_count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_insert_rejects_duplicates_within_batch() {
    let repo = LocalRepository::new();

    let result = repo
        .insert_students(vec![
            student("00000008", None, None, None),
            student("00000008", None, None, None),
        ])
        .await;
    assert!(result.is_err());
    assert_eq!(repo.student_count().await.unwrap(), 0);
}
