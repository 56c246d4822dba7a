// src/domain/coin.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value used for `country` and `year` when the user saves without one.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// A persisted catalogue entry for one physical coin.
///
/// The photo is stored inline as a `data:image/jpeg;base64,...` URI so a
/// record is fully self-contained. Field names in the stored JSON are
/// camelCase, matching the collection document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    pub id: String,
    pub title: String,
    pub country: String,
    pub year: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
    pub date_added: DateTime<Utc>,
}

/// Transient AI-derived draft used to pre-fill a new record.
///
/// `title`, `country`, `year` and `description` are required by the analysis
/// schema; a response missing any of them fails to deserialize, so a partial
/// object never reaches the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinAnalysisResult {
    pub title: String,
    pub country: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub estimated_value: Option<String>,
}

/// Editable capture state: the analysis fields plus the prepared photo.
///
/// Starts empty for manual entry, or pre-filled from an analysis result.
/// Either way the user can overwrite every field before saving.
#[derive(Debug, Clone, Default)]
pub struct CoinDraft {
    pub title: String,
    pub country: String,
    pub year: String,
    pub description: String,
    pub image: Option<String>,
    pub composition: Option<String>,
    pub estimated_value: Option<String>,
}

impl CoinDraft {
    /// Manual-entry draft: photo set, all identification fields empty.
    pub fn new(image: String) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    pub fn from_analysis(analysis: CoinAnalysisResult, image: String) -> Self {
        Self {
            title: analysis.title,
            country: analysis.country,
            year: analysis.year,
            description: analysis.description,
            image: Some(image),
            composition: analysis.composition,
            estimated_value: analysis.estimated_value,
        }
    }
}
