use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const DEFAULT_KIND: &str = "Layer";

/// Canonical result record, every field resolved and defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Item type, e.g. "Feature Layer" or "Web Map"
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Relevance score; `None` means the endpoint gave none, not zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "detailUrl")]
    pub detail_url: String,
    #[serde(rename = "mapUrl", skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl Default for NormalizedResult {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: UNTITLED.to_string(),
            description: String::new(),
            kind: DEFAULT_KIND.to_string(),
            tags: Vec::new(),
            thumbnail: None,
            score: None,
            detail_url: String::new(),
            map_url: None,
        }
    }
}
