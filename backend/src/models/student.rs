//! Immutable student score records.

use serde::{Deserialize, Serialize};

use super::subject::Subject;

/// Fixed width of a normalized registration number.
pub const SBD_WIDTH: usize = 8;

/// Left-pad a raw registration number with zeros to the fixed width, so
/// `"5"` and `"00000005"` address the same record. Inputs already at or
/// beyond the width are returned unchanged.
pub fn normalize_sbd(raw: &str) -> String {
    format!("{:0>width$}", raw, width = SBD_WIDTH)
}

/// One student's exam results.
///
/// Records are immutable once loaded; there is no update or delete path.
/// Derived values such as the Group A composite are pure functions of the
/// record value rather than stateful attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Registration number (số báo danh), unique across the dataset.
    pub sbd: String,
    pub toan: Option<f64>,
    pub ngu_van: Option<f64>,
    pub ngoai_ngu: Option<f64>,
    pub vat_li: Option<f64>,
    pub hoa_hoc: Option<f64>,
    pub sinh_hoc: Option<f64>,
    pub lich_su: Option<f64>,
    pub dia_li: Option<f64>,
    pub gdcd: Option<f64>,
    /// Foreign language variant code (e.g. "N1").
    pub ma_ngoai_ngu: Option<String>,
}

impl StudentRecord {
    /// Record with the given registration number and no scores.
    pub fn new(sbd: impl Into<String>) -> Self {
        Self {
            sbd: sbd.into(),
            toan: None,
            ngu_van: None,
            ngoai_ngu: None,
            vat_li: None,
            hoa_hoc: None,
            sinh_hoc: None,
            lich_su: None,
            dia_li: None,
            gdcd: None,
            ma_ngoai_ngu: None,
        }
    }

    /// Score for `subject`, `None` when the student did not sit it.
    pub fn score(&self, subject: Subject) -> Option<f64> {
        match subject {
            Subject::Toan => self.toan,
            Subject::NguVan => self.ngu_van,
            Subject::NgoaiNgu => self.ngoai_ngu,
            Subject::VatLi => self.vat_li,
            Subject::HoaHoc => self.hoa_hoc,
            Subject::SinhHoc => self.sinh_hoc,
            Subject::LichSu => self.lich_su,
            Subject::DiaLi => self.dia_li,
            Subject::Gdcd => self.gdcd,
        }
    }

    /// True when all three Group A subjects (math, physics, chemistry)
    /// are present.
    pub fn has_group_a(&self) -> bool {
        self.toan.is_some() && self.vat_li.is_some() && self.hoa_hoc.is_some()
    }

    /// Group A composite (toán + vật lý + hóa học) rounded to one decimal,
    /// defined only when all three subjects are present.
    pub fn group_a_total(&self) -> Option<f64> {
        match (self.toan, self.vat_li, self.hoa_hoc) {
            (Some(toan), Some(vat_li), Some(hoa_hoc)) => {
                Some(((toan + vat_li + hoa_hoc) * 10.0).round() / 10.0)
            }
            _ => None,
        }
    }
}
