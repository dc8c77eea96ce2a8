use super::*;

fn sample_student() -> StudentRecord {
    let mut student = StudentRecord::new("01000001");
    student.toan = Some(8.4);
    student.vat_li = Some(9.0);
    student.hoa_hoc = Some(7.75);
    student.ngu_van = Some(6.5);
    student.ma_ngoai_ngu = Some("N1".to_string());
    student
}

#[test]
fn test_score_sheet_from_record() {
    let student = sample_student();
    let sheet = ScoreSheet::from(&student);

    assert_eq!(sheet.toan, Some(8.4));
    assert_eq!(sheet.ngu_van, Some(6.5));
    assert_eq!(sheet.lich_su, None);
    assert_eq!(sheet.ma_ngoai_ngu.as_deref(), Some("N1"));
}

#[test]
fn test_lookup_omits_group_a_when_absent() {
    let lookup = ScoreLookup {
        sbd: "00000001".to_string(),
        scores: ScoreSheet::from(&StudentRecord::new("00000001")),
        group_a: None,
    };

    let json = serde_json::to_value(&lookup).unwrap();
    assert!(json.get("groupA").is_none());
    // Absent scores still serialize as explicit nulls
    assert!(json["scores"]["toan"].is_null());
}

#[test]
fn test_lookup_serializes_group_a_block() {
    let lookup = ScoreLookup {
        sbd: "01000001".to_string(),
        scores: ScoreSheet::from(&sample_student()),
        group_a: Some(GroupABlock {
            total: 25.2,
            subjects: GroupAScores {
                toan: 8.4,
                vat_li: 9.0,
                hoa_hoc: 7.75,
            },
        }),
    };

    let json = serde_json::to_value(&lookup).unwrap();
    assert_eq!(json["groupA"]["total"], 25.2);
    assert_eq!(json["groupA"]["subjects"]["vat_li"], 9.0);
}

#[test]
fn test_distribution_report_shape() {
    let level = |count: u64, percentage: &str| LevelCount {
        count,
        percentage: percentage.to_string(),
    };
    let report = DistributionReport {
        subject: "Toán".to_string(),
        levels: ReportLevels {
            excellent: level(1, "25.00%"),
            good: level(1, "25.00%"),
            average: level(1, "25.00%"),
            poor: level(1, "25.00%"),
        },
        total: 4,
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["subject"], "Toán");
    assert_eq!(json["levels"]["excellent"]["count"], 1);
    assert_eq!(json["levels"]["poor"]["percentage"], "25.00%");
    assert_eq!(json["total"], 4);
}

#[test]
fn test_top_entry_shape() {
    let entry = TopEntry {
        rank: 1,
        sbd: "01000001".to_string(),
        total: 28.5,
        scores: GroupAScores {
            toan: 9.5,
            vat_li: 9.5,
            hoa_hoc: 9.5,
        },
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["rank"], 1);
    assert_eq!(json["sbd"], "01000001");
    assert_eq!(json["total"], 28.5);
    assert_eq!(json["scores"]["hoa_hoc"], 9.5);
}
