// SPDX-License-Identifier: MPL-2.0
//! Severity trend analyzer.
//!
//! Compares the ordinal severity ranks of the two most recent analyses in
//! a patient's history. This is a deliberate two-point comparison, not a
//! regression: everything older than the two most recent records is ignored.

use super::analysis::AcneAnalysis;
use std::cmp::Ordering;
use std::fmt;

/// Directional comparison between the two most recent severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTrend {
    Improving,
    Stable,
    Worsening,
    /// Fewer than two analyses exist. A legitimate "insufficient data"
    /// outcome, not an error.
    NoTrend,
}

impl SeverityTrend {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SeverityTrend::Improving => "Improving",
            SeverityTrend::Stable => "Stable",
            SeverityTrend::Worsening => "Worsening",
            SeverityTrend::NoTrend => "Not enough data",
        }
    }
}

impl fmt::Display for SeverityTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes the trend over a patient's analyses.
///
/// The input order is irrelevant: the sequence is sorted descending by
/// `date` first. With fewer than two entries the result is
/// [`SeverityTrend::NoTrend`].
#[must_use]
pub fn severity_trend(analyses: &[AcneAnalysis]) -> SeverityTrend {
    if analyses.len() < 2 {
        return SeverityTrend::NoTrend;
    }

    let mut by_recency: Vec<&AcneAnalysis> = analyses.iter().collect();
    by_recency.sort_by(|a, b| b.date.cmp(&a.date));

    let latest = by_recency[0].severity.rank();
    let previous = by_recency[1].severity.rank();

    match latest.cmp(&previous) {
        Ordering::Less => SeverityTrend::Improving,
        Ordering::Equal => SeverityTrend::Stable,
        Ordering::Greater => SeverityTrend::Worsening,
    }
}
