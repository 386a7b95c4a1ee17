// SPDX-License-Identifier: MPL-2.0
//! Per-patient analysis history, loaded from a JSON document.
//!
//! The document is either a single analysis object or an array of them.
//! All records must belong to the same patient; relative image paths are
//! resolved against the document's directory at load time.

use super::analysis::AcneAnalysis;
use super::trend::{severity_trend, SeverityTrend};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Ordered history of analyses for one patient, most recent first.
#[derive(Debug, Clone, Default)]
pub struct AnalysisHistory {
    analyses: Vec<AcneAnalysis>,
}

impl AnalysisHistory {
    /// Builds a history from in-memory records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] when the records span more than one
    /// patient or violate region invariants.
    pub fn from_analyses(mut analyses: Vec<AcneAnalysis>) -> Result<Self> {
        if let Some(first) = analyses.first() {
            let patient_id = first.patient_id.clone();
            if let Some(other) = analyses.iter().find(|a| a.patient_id != patient_id) {
                return Err(Error::Document(format!(
                    "history mixes patients {} and {}",
                    patient_id, other.patient_id
                )));
            }
        }
        for analysis in &analyses {
            analysis.validate().map_err(Error::Document)?;
        }

        analyses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(Self { analyses })
    }

    /// Loads a history document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;

        // A document holds either an array of analyses or a single record.
        let mut analyses: Vec<AcneAnalysis> = match serde_json::from_str(&content) {
            Ok(list) => list,
            Err(_) => vec![serde_json::from_str::<AcneAnalysis>(&content)?],
        };

        if let Some(base) = path.parent() {
            for analysis in &mut analyses {
                analysis.image_url = resolve_image_url(&analysis.image_url, base);
            }
        }

        Self::from_analyses(analyses)
    }

    /// All analyses, sorted most recent first.
    #[must_use]
    pub fn analyses(&self) -> &[AcneAnalysis] {
        &self.analyses
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AcneAnalysis> {
        self.analyses.get(index)
    }

    /// The most recent analysis, if any.
    #[must_use]
    pub fn most_recent(&self) -> Option<&AcneAnalysis> {
        self.analyses.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    #[must_use]
    pub fn patient_id(&self) -> Option<&str> {
        self.analyses.first().map(|a| a.patient_id.as_str())
    }

    /// Directional severity trend over this history.
    #[must_use]
    pub fn trend(&self) -> SeverityTrend {
        severity_trend(&self.analyses)
    }
}

/// Resolves a relative file locator against the document's directory.
/// Remote URLs and data URIs pass through untouched.
fn resolve_image_url(image_url: &str, base: &Path) -> String {
    let lower = image_url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:")
    {
        return image_url.to_string();
    }
    let path = Path::new(image_url);
    if path.is_absolute() {
        return image_url.to_string();
    }
    base.join(path).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisStatus, Severity};
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::tempdir;

    fn analysis(id: &str, patient: &str, day: u32, severity: Severity) -> AcneAnalysis {
        AcneAnalysis {
            id: id.to_string(),
            patient_id: patient.to_string(),
            doctor_id: None,
            image_url: "photo.png".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            severity,
            regions: Vec::new(),
            notes: None,
            status: AnalysisStatus::Reviewed,
        }
    }

    #[test]
    fn history_sorts_most_recent_first() {
        let history = AnalysisHistory::from_analyses(vec![
            analysis("a1", "p1", 1, Severity::Mild),
            analysis("a3", "p1", 20, Severity::Severe),
            analysis("a2", "p1", 10, Severity::Moderate),
        ])
        .expect("valid history");

        let ids: Vec<&str> = history.analyses().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a2", "a1"]);
        assert_eq!(history.most_recent().unwrap().id, "a3");
    }

    #[test]
    fn mixed_patients_are_rejected() {
        let result = AnalysisHistory::from_analyses(vec![
            analysis("a1", "p1", 1, Severity::Mild),
            analysis("a2", "p2", 2, Severity::Mild),
        ]);
        match result {
            Err(Error::Document(message)) => assert!(message.contains("patients")),
            other => panic!("expected Document error, got {other:?}"),
        }
    }

    #[test]
    fn load_accepts_single_record_document() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("analysis.json");
        let mut file = fs::File::create(&path).expect("create fixture");
        write!(
            file,
            r#"{{"id": "a1", "patientId": "p1", "imageUrl": "photo.png",
                "date": "2024-03-01T10:00:00Z", "severity": "mild",
                "regions": [], "status": "pending"}}"#
        )
        .expect("write fixture");

        let history = AnalysisHistory::load(&path).expect("should load");
        assert_eq!(history.len(), 1);
        assert_eq!(history.patient_id(), Some("p1"));
    }

    #[test]
    fn load_resolves_relative_image_paths() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[{"id": "a1", "patientId": "p1", "imageUrl": "images/photo.png",
                 "date": "2024-03-01T10:00:00Z", "severity": "mild",
                 "regions": [], "status": "pending"},
                {"id": "a2", "patientId": "p1",
                 "imageUrl": "https://example.com/remote.png",
                 "date": "2024-03-02T10:00:00Z", "severity": "mild",
                 "regions": [], "status": "pending"}]"#,
        )
        .expect("write fixture");

        let history = AnalysisHistory::load(&path).expect("should load");
        let by_id = |id: &str| {
            history
                .analyses()
                .iter()
                .find(|a| a.id == id)
                .unwrap()
                .image_url
                .clone()
        };
        assert_eq!(
            by_id("a1"),
            dir.path().join("images/photo.png").to_string_lossy()
        );
        assert_eq!(by_id("a2"), "https://example.com/remote.png");
    }

    #[test]
    fn load_rejects_malformed_document() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("write fixture");

        match AnalysisHistory::load(&path) {
            Err(Error::Document(_)) => {}
            other => panic!("expected Document error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_region_geometry_is_rejected_at_load() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[{"id": "a1", "patientId": "p1", "imageUrl": "photo.png",
                 "date": "2024-03-01T10:00:00Z", "severity": "mild",
                 "regions": [{"id": "r1", "x": 5, "y": 5, "width": 0,
                              "height": 10, "confidence": 0.5, "type": "cyst"}],
                 "status": "pending"}]"#,
        )
        .expect("write fixture");

        match AnalysisHistory::load(&path) {
            Err(Error::Document(message)) => assert!(message.contains("extent")),
            other => panic!("expected Document error, got {other:?}"),
        }
    }

    #[test]
    fn trend_delegates_to_analyzer() {
        let history = AnalysisHistory::from_analyses(vec![
            analysis("a1", "p1", 1, Severity::Severe),
            analysis("a2", "p1", 10, Severity::Moderate),
        ])
        .expect("valid history");
        assert_eq!(history.trend(), SeverityTrend::Improving);
    }
}
