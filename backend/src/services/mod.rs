//! Service layer: statistics engine, ranking, result cache, ingestion, and
//! the query façade.
//!
//! Services orchestrate repository calls and implement the business logic.
//! They take the repository as an argument rather than reaching for the
//! global singleton, so tests can run them against fixture datasets.

pub mod cache;

pub mod ingest;

pub mod ranking;

pub mod scores;

pub mod statistics;

pub use cache::ResultCache;
pub use scores::{
    check_score, score_report, subject_statistics, top10_group_a, ServiceError, ServiceResult,
};
