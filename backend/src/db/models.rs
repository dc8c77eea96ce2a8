//! Aggregate row types produced by repository queries.

/// Single-pass aggregate over the non-null scores of one subject.
///
/// Invariant: `excellent + good + average + poor == total`, since the four
/// bands partition the valid score range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Number of non-null scores.
    pub total: u64,
    /// Sum of the non-null scores.
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub excellent: u64,
    pub good: u64,
    pub average: u64,
    pub poor: u64,
}
