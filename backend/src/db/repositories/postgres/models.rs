//! Diesel row types for the `students` table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::students;
use crate::models::StudentRecord;

/// Full row as stored in Postgres.
#[derive(Debug, Clone, Queryable, QueryableByName)]
#[diesel(table_name = students)]
pub struct StudentRow {
    pub id: i64,
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
    pub ma_ngoai_ngu: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        StudentRecord {
            sbd: row.sbd,
            toan: row.toan,
            ngu_van: row.ngu_van,
            ngoai_ngu: row.ngoai_ngu,
            vat_li: row.vat_li,
            hoa_hoc: row.hoa_hoc,
            sinh_hoc: row.sinh_hoc,
            lich_su: row.lich_su,
            dia_li: row.dia_li,
            gdcd: row.gdcd,
            ma_ngoai_ngu: row.ma_ngoai_ngu,
        }
    }
}

/// Insert shape; `id` and the timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudentRow {
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
    pub ma_ngoai_ngu: Option<String>,
}

impl From<StudentRecord> for NewStudentRow {
    fn from(record: StudentRecord) -> Self {
        NewStudentRow {
            sbd: record.sbd,
            toan: record.toan,
            ngu_van: record.ngu_van,
            ngoai_ngu: record.ngoai_ngu,
            vat_li: record.vat_li,
            hoa_hoc: record.hoa_hoc,
            sinh_hoc: record.sinh_hoc,
            lich_su: record.lich_su,
            dia_li: record.dia_li,
            gdcd: record.gdcd,
            ma_ngoai_ngu: record.ma_ngoai_ngu,
        }
    }
}
