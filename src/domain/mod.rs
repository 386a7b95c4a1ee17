// SPDX-License-Identifier: MPL-2.0
//! Domain model for skin analysis records: the analysis/region data types,
//! the per-patient history, and the severity trend analyzer.

pub mod analysis;
pub mod history;
pub mod trend;

pub use analysis::{AcneAnalysis, AcneRegion, AcneType, AnalysisStatus, Severity};
pub use history::AnalysisHistory;
pub use trend::{severity_trend, SeverityTrend};
