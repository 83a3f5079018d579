use serde::{Deserialize, Serialize};

/// Attribute table of one exported search result.
///
/// Every column is always present; the export format has no nulls, so
/// missing text becomes `""` and missing numbers become `0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureAttributes {
    /// 1-based position in the result set
    pub objectid: usize,
    pub id: String,
    pub title: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Comma separated tags, or the JSON text of a tag array
    pub tags: String,
    pub thumbnail: String,
    pub rrf_score: f64,
    pub score: f64,
    pub prettyurl: String,
    pub mapurl: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub attributes: FeatureAttributes,
}
