// SPDX-License-Identifier: MPL-2.0
//! Analysis record types.
//!
//! Region geometry is expressed in the *unscaled* source-image pixel
//! coordinate system; the viewport transform is the only place scale and
//! pan are applied, so regions never need recomputation on zoom/pan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal severity classification: `Mild < Moderate < Severe`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Ordinal rank used by the trend analyzer (`mild=1, moderate=2, severe=3`).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Severity::Mild => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Review status of an analysis record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Pending,
    Reviewed,
    Archived,
}

/// The six detected region categories, plus a catch-all for documents
/// produced by a newer classifier than this viewer knows about. `Unknown`
/// keeps deserialization total; the style table maps it to an explicit
/// fallback style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AcneType {
    Papule,
    Pustule,
    Blackhead,
    Whitehead,
    Nodule,
    Cyst,
    Unknown,
}

impl From<String> for AcneType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "papule" => AcneType::Papule,
            "pustule" => AcneType::Pustule,
            "blackhead" => AcneType::Blackhead,
            "whitehead" => AcneType::Whitehead,
            "nodule" => AcneType::Nodule,
            "cyst" => AcneType::Cyst,
            _ => AcneType::Unknown,
        }
    }
}

impl AcneType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AcneType::Papule => "papule",
            AcneType::Pustule => "pustule",
            AcneType::Blackhead => "blackhead",
            AcneType::Whitehead => "whitehead",
            AcneType::Nodule => "nodule",
            AcneType::Cyst => "cyst",
            AcneType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AcneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected rectangular area of interest on the source image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcneRegion {
    /// Opaque identifier, unique within the parent analysis.
    pub id: String,
    /// Top-left corner in source-image pixel space.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f32,
    #[serde(rename = "type")]
    pub kind: AcneType,
}

impl AcneRegion {
    /// The overlay label: `"<type> (<confidence·100 rounded>%)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.kind, (self.confidence * 100.0).round() as i32)
    }

    /// Checks the geometric and confidence invariants of the data model.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.x < 0.0 || self.y < 0.0 {
            return Err(format!("region {}: negative origin", self.id));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(format!("region {}: non-positive extent", self.id));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("region {}: confidence out of [0, 1]", self.id));
        }
        Ok(())
    }
}

/// One immutable analysis record, owned by the external collaborator and
/// passed by reference to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcneAnalysis {
    pub id: String,
    pub patient_id: String,
    /// Absent until a clinician has reviewed the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    /// Locator for the source image: file path, remote URL, or data URI.
    pub image_url: String,
    pub date: DateTime<Utc>,
    pub severity: Severity,
    /// Ordered sequence of regions; order is draw order (later entries on top).
    pub regions: Vec<AcneRegion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: AnalysisStatus,
}

impl AcneAnalysis {
    /// Validates all region invariants.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for region in &self.regions {
            region
                .validate()
                .map_err(|e| format!("analysis {}: {}", self.id, e))?;
        }
        Ok(())
    }

    /// Distinct region categories with their occurrence counts, in
    /// first-seen order.
    #[must_use]
    pub fn region_type_counts(&self) -> Vec<(AcneType, usize)> {
        let mut counts: Vec<(AcneType, usize)> = Vec::new();
        for region in &self.regions {
            match counts.iter_mut().find(|(kind, _)| *kind == region.kind) {
                Some((_, count)) => *count += 1,
                None => counts.push((region.kind, 1)),
            }
        }
        counts
    }
}
