//! # G-Scores Rust Backend
//!
//! Read-only statistical query service over the national high-school exam
//! score dataset.
//!
//! This crate serves score lookups and aggregate statistics for roughly a
//! million student records across nine subjects. The REST API exposes
//! per-student score lookup, four-level distribution reports, descriptive
//! statistics (mean, median, min/max, distribution), and a top-10 ranking by
//! the Group A composite (math + physics + chemistry).
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Immutable domain types: student records, the fixed subject
//!   set, and score bands
//! - [`db`]: Repository pattern over the score dataset with in-memory and
//!   PostgreSQL backends
//! - [`services`]: Statistics engine, Group A ranking, TTL result cache,
//!   CSV ingestion, and the query façade
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Dataset semantics
//!
//! The dataset is immutable after bulk load. Scores are decimals in
//! `[0, 10]` with one decimal of precision; a missing score means the
//! student did not sit that subject. Aggregates over a subject always range
//! over the non-null scores only.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
