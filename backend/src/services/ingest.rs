//! Bulk CSV ingestion for the score dataset.
//!
//! The loader consumes a delimited file with a header row naming the nine
//! subject columns, the registration-number column, and the optional
//! foreign-language code. Value-level problems never abort a load:
//! unparseable or out-of-range scores are stored as absent, and rows
//! without a registration number are skipped.

use std::path::Path;

use serde::Deserialize;

use crate::db::repository::ScoreRepository;
use crate::models::StudentRecord;

/// Rows per insert batch and per progress message during bulk load.
const BATCH_SIZE: usize = 1000;

/// Raw CSV row addressed by header name; column order does not matter.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    sbd: String,
    #[serde(default)]
    toan: Option<String>,
    #[serde(default)]
    ngu_van: Option<String>,
    #[serde(default)]
    ngoai_ngu: Option<String>,
    #[serde(default)]
    vat_li: Option<String>,
    #[serde(default)]
    hoa_hoc: Option<String>,
    #[serde(default)]
    sinh_hoc: Option<String>,
    #[serde(default)]
    lich_su: Option<String>,
    #[serde(default)]
    dia_li: Option<String>,
    #[serde(default)]
    gdcd: Option<String>,
    #[serde(default)]
    ma_ngoai_ngu: Option<String>,
}

impl CsvRow {
    fn into_record(self) -> Option<StudentRecord> {
        let sbd = self.sbd.trim();
        if sbd.is_empty() {
            return None;
        }

        Some(StudentRecord {
            sbd: sbd.to_string(),
            toan: parse_score(self.toan.as_deref()),
            ngu_van: parse_score(self.ngu_van.as_deref()),
            ngoai_ngu: parse_score(self.ngoai_ngu.as_deref()),
            vat_li: parse_score(self.vat_li.as_deref()),
            hoa_hoc: parse_score(self.hoa_hoc.as_deref()),
            sinh_hoc: parse_score(self.sinh_hoc.as_deref()),
            lich_su: parse_score(self.lich_su.as_deref()),
            dia_li: parse_score(self.dia_li.as_deref()),
            gdcd: parse_score(self.gdcd.as_deref()),
            ma_ngoai_ngu: self
                .ma_ngoai_ngu
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
        })
    }
}

/// Parse one raw score cell.
///
/// Empty cells, the literal `NULL`, unparseable values, and scores outside
/// `[0, 10]` all mean "did not sit", never an error.
fn parse_score(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return None;
    }
    let score: f64 = raw.parse().ok()?;
    (0.0..=10.0).contains(&score).then_some(score)
}

/// Read student records from a headered CSV file.
///
/// Rows without a registration number are skipped and counted in a single
/// warning; structural problems (unreadable file, malformed CSV) abort the
/// load.
pub fn load_csv(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<CsvRow>() {
        match row?.into_record() {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} rows without a registration number", skipped);
    }
    Ok(records)
}

/// Parse `path` and bulk-insert into `repo`, logging progress per batch.
pub async fn load_into(repo: &dyn ScoreRepository, path: &Path) -> anyhow::Result<usize> {
    let records = load_csv(path)?;

    let mut total = 0usize;
    for chunk in records.chunks(BATCH_SIZE) {
        total += repo.insert_students(chunk.to_vec()).await?;
        log::info!("Inserted {} students...", total);
    }

    log::info!("Successfully loaded {} students", total);
    Ok(total)
}
