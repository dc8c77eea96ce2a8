//! The fixed subject set and score bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the nine exam subjects.
///
/// The exam format fixes this set, so the registry is an enum rather than an
/// extensible map: a subject that does not exist cannot be constructed, and
/// runtime registration is impossible by design of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Toan,
    NguVan,
    NgoaiNgu,
    VatLi,
    HoaHoc,
    SinhHoc,
    LichSu,
    DiaLi,
    Gdcd,
}

impl Subject {
    /// All subjects in the stable order used for listings and the
    /// "valid subjects" error message.
    pub const ALL: [Subject; 9] = [
        Subject::Toan,
        Subject::NguVan,
        Subject::NgoaiNgu,
        Subject::VatLi,
        Subject::HoaHoc,
        Subject::SinhHoc,
        Subject::LichSu,
        Subject::DiaLi,
        Subject::Gdcd,
    ];

    /// Key used for the dataset column and in API paths.
    pub fn key(&self) -> &'static str {
        match self {
            Subject::Toan => "toan",
            Subject::NguVan => "ngu_van",
            Subject::NgoaiNgu => "ngoai_ngu",
            Subject::VatLi => "vat_li",
            Subject::HoaHoc => "hoa_hoc",
            Subject::SinhHoc => "sinh_hoc",
            Subject::LichSu => "lich_su",
            Subject::DiaLi => "dia_li",
            Subject::Gdcd => "gdcd",
        }
    }

    /// Human-readable subject name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Toan => "Toán",
            Subject::NguVan => "Ngữ Văn",
            Subject::NgoaiNgu => "Ngoại Ngữ",
            Subject::VatLi => "Vật Lý",
            Subject::HoaHoc => "Hóa Học",
            Subject::SinhHoc => "Sinh Học",
            Subject::LichSu => "Lịch Sử",
            Subject::DiaLi => "Địa Lý",
            Subject::Gdcd => "GDCD",
        }
    }

    /// Parse a subject key, `None` for anything outside the fixed set.
    pub fn from_key(key: &str) -> Option<Subject> {
        Subject::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Comma-separated list of all valid keys, in [`Subject::ALL`] order.
    pub fn valid_keys() -> String {
        Subject::ALL
            .iter()
            .map(|s| s.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::from_key(s).ok_or_else(|| format!("Unknown subject: {}", s))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the four reporting bands.
///
/// `Excellent` is closed at both ends (`[8, 10]`); the remaining bands are
/// closed-open (`[6, 8)`, `[4, 6)`, `[0, 4)`). Together they partition the
/// valid score range, so band counts over a subject sum to its non-null
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    /// All bands, highest first.
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Excellent,
        ScoreBand::Good,
        ScoreBand::Average,
        ScoreBand::Poor,
    ];

    /// Inclusive lower bound.
    pub fn lower(&self) -> f64 {
        match self {
            ScoreBand::Excellent => 8.0,
            ScoreBand::Good => 6.0,
            ScoreBand::Average => 4.0,
            ScoreBand::Poor => 0.0,
        }
    }

    /// Upper bound; inclusive only for `Excellent`.
    pub fn upper(&self) -> f64 {
        match self {
            ScoreBand::Excellent => 10.0,
            ScoreBand::Good => 8.0,
            ScoreBand::Average => 6.0,
            ScoreBand::Poor => 4.0,
        }
    }

    /// Whether the upper bound belongs to the band.
    pub fn upper_inclusive(&self) -> bool {
        matches!(self, ScoreBand::Excellent)
    }

    pub fn contains(&self, score: f64) -> bool {
        if self.upper_inclusive() {
            score >= self.lower() && score <= self.upper()
        } else {
            score >= self.lower() && score < self.upper()
        }
    }

    /// Band a stored score falls into. Ingestion validates scores to
    /// `[0, 10]`, so every stored score classifies.
    pub fn classify(score: f64) -> ScoreBand {
        if score >= 8.0 {
            ScoreBand::Excellent
        } else if score >= 6.0 {
            ScoreBand::Good
        } else if score >= 4.0 {
            ScoreBand::Average
        } else {
            ScoreBand::Poor
        }
    }
}
