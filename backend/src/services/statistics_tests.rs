use super::*;
use crate::db::repositories::LocalRepository;
use crate::models::StudentRecord;

fn student_with_toan(sbd: &str, toan: f64) -> StudentRecord {
    let mut student = StudentRecord::new(sbd);
    student.toan = Some(toan);
    student
}

fn repo_with_toan(scores: &[f64]) -> LocalRepository {
    let students = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| student_with_toan(&format!("{:08}", i + 1), score))
        .collect();
    LocalRepository::with_students(students).unwrap()
}

#[test]
fn test_round_half_away_from_zero() {
    // 0.125 and 0.25 are exact in binary, so these exercise the tie rule
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.13);
    assert_eq!(round1(0.25), 0.3);
    assert_eq!(round1(-0.25), -0.3);
}

#[test]
fn test_percentage_formatting() {
    assert_eq!(percentage(1, 4), "25.00%");
    assert_eq!(percentage(1, 3), "33.33%");
    assert_eq!(percentage(0, 100), "0.00%");
    assert_eq!(percentage(100, 100), "100.00%");
}

#[test]
fn test_percentage_zero_total_sentinel() {
    assert_eq!(percentage(0, 0), "0.00%");
}

#[tokio::test]
async fn test_distribution_counts_sum_to_total() {
    let repo = repo_with_toan(&[9.5, 8.0, 7.0, 6.0, 5.5, 4.0, 3.0, 0.0, 10.0]);
    let report = compute_distribution(&repo, Subject::Toan).await.unwrap();

    let sum = report.levels.excellent.count
        + report.levels.good.count
        + report.levels.average.count
        + report.levels.poor.count;
    assert_eq!(sum, report.total);
    assert_eq!(report.total, 9);
    assert_eq!(report.subject, "Toán");
}

#[tokio::test]
async fn test_distribution_band_boundaries() {
    // 8.0 and 10.0 are excellent, 6.0 good, 4.0 average, 0.0 poor
    let repo = repo_with_toan(&[8.0, 10.0, 6.0, 4.0, 0.0]);
    let report = compute_distribution(&repo, Subject::Toan).await.unwrap();

    assert_eq!(report.levels.excellent.count, 2);
    assert_eq!(report.levels.good.count, 1);
    assert_eq!(report.levels.average.count, 1);
    assert_eq!(report.levels.poor.count, 1);
}

#[tokio::test]
async fn test_distribution_empty_subject_is_well_formed() {
    let repo = repo_with_toan(&[5.0, 7.5]);
    let report = compute_distribution(&repo, Subject::LichSu).await.unwrap();

    assert_eq!(report.total, 0);
    assert_eq!(report.levels.excellent.count, 0);
    assert_eq!(report.levels.excellent.percentage, "0.00%");
    assert_eq!(report.levels.poor.percentage, "0.00%");
}

#[tokio::test]
async fn test_statistics_median_odd() {
    let repo = repo_with_toan(&[6.0, 2.0, 4.0]);
    let stats = compute_statistics(&repo, Subject::Toan)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stats.median, 4.00);
    assert_eq!(stats.average, 4.00);
}

#[tokio::test]
async fn test_statistics_median_even() {
    let repo = repo_with_toan(&[8.0, 2.0, 6.0, 4.0]);
    let stats = compute_statistics(&repo, Subject::Toan)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stats.median, 5.00);
}

#[tokio::test]
async fn test_statistics_min_median_max_ordering() {
    let repo = repo_with_toan(&[1.5, 9.0, 3.25, 7.75, 5.0, 6.5, 2.0]);
    let stats = compute_statistics(&repo, Subject::Toan)
        .await
        .unwrap()
        .unwrap();

    assert!(stats.lowest <= stats.median);
    assert!(stats.median <= stats.highest);
    assert_eq!(stats.lowest, 1.5);
    assert_eq!(stats.highest, 9.0);
    assert_eq!(stats.total, 7);
}

#[tokio::test]
async fn test_statistics_absent_when_no_scores() {
    let repo = repo_with_toan(&[5.0]);
    let stats = compute_statistics(&repo, Subject::Gdcd).await.unwrap();
    assert!(stats.is_none());
}

#[tokio::test]
async fn test_statistics_distribution_matches_bands() {
    let repo = repo_with_toan(&[9.0, 8.0, 7.0, 5.0, 1.0]);
    let stats = compute_statistics(&repo, Subject::Toan)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stats.distribution.excellent, 2);
    assert_eq!(stats.distribution.good, 1);
    assert_eq!(stats.distribution.average, 1);
    assert_eq!(stats.distribution.poor, 1);
    assert_eq!(
        stats.distribution.excellent
            + stats.distribution.good
            + stats.distribution.average
            + stats.distribution.poor,
        stats.total
    );
}

#[tokio::test]
async fn test_statistics_mean_rounded_to_two_decimals() {
    // mean of 1.0, 2.0, 2.0 = 1.666..., displayed as 1.67
    let repo = repo_with_toan(&[1.0, 2.0, 2.0]);
    let stats = compute_statistics(&repo, Subject::Toan)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stats.average, 1.67);
}
