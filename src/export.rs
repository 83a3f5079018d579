use std::io::Write;

use anyhow::Result;
use serde_json::Value;

use crate::models::{FeatureAttributes, FeatureRecord, RawHit};
use crate::normalize::{coerce_number, normalize};

/// Maps raw hits onto the flat attribute table consumers expect.
pub fn to_features(hits: &[RawHit]) -> Vec<FeatureRecord> {
    hits.iter()
        .enumerate()
        .map(|(index, hit)| to_feature(index, hit))
        .collect()
}

fn to_feature(index: usize, hit: &RawHit) -> FeatureRecord {
    let result = normalize(hit);

    let tags = match hit.get("tags") {
        Some(Value::String(tags)) => tags.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let rrf_score = hit
        .get("rrf_score")
        .and_then(coerce_number)
        .filter(|score| *score != 0.0)
        .or_else(|| hit.get("similarity").and_then(Value::as_f64))
        .unwrap_or_default();

    FeatureRecord {
        attributes: FeatureAttributes {
            objectid: index + 1,
            id: result.id,
            title: result.title,
            name: hit.text("name").unwrap_or_default(),
            description: result.description,
            kind: result.kind,
            tags,
            thumbnail: result.thumbnail.unwrap_or_default(),
            rrf_score,
            score: hit.get("score").and_then(coerce_number).unwrap_or_default(),
            prettyurl: result.detail_url,
            mapurl: result.map_url.unwrap_or_default(),
            url: hit.first_text(&["url", "service_url"]).unwrap_or_default(),
        },
    }
}

/// Sink for exported feature records.
pub trait Publisher {
    fn publish(&mut self, features: &[FeatureRecord]) -> Result<()>;
}

/// Writes the records as one pretty-printed JSON array.
pub struct JsonPublisher<W: Write> {
    writer: W,
}

impl<W: Write> JsonPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Publisher for JsonPublisher<W> {
    fn publish(&mut self, features: &[FeatureRecord]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, features)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        log::info!("Published {} feature records", features.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_feature_attributes() {
        let hits = vec![
            RawHit(json!({
                "id": "a1",
                "name": "bike_lanes",
                "snippet": "Cycling network",
                "tags": "mobility, bikes",
                "rrf_score": "0.032",
                "score": 12,
                "url": "https://example.com/item",
                "mapurl": "https://example.com/map"
            })),
            RawHit(json!({"title": "Parks", "tags": ["green"], "service_url": "https://example.com/fs"})),
        ];

        let features = to_features(&hits);
        let first = &features[0].attributes;
        assert_eq!(first.objectid, 1);
        assert_eq!(first.id, "a1");
        assert_eq!(first.title, "bike_lanes");
        assert_eq!(first.name, "bike_lanes");
        assert_eq!(first.description, "Cycling network");
        assert_eq!(first.kind, "Layer");
        assert_eq!(first.tags, "mobility, bikes");
        assert_eq!(first.rrf_score, 0.032);
        assert_eq!(first.score, 12.0);
        assert_eq!(first.prettyurl, "https://example.com/item");
        assert_eq!(first.url, "https://example.com/item");
        assert_eq!(first.mapurl, "https://example.com/map");

        let second = &features[1].attributes;
        assert_eq!(second.objectid, 2);
        assert_eq!(second.name, "");
        assert_eq!(second.tags, r#"["green"]"#);
        assert_eq!(second.rrf_score, 0.0);
        assert_eq!(second.score, 0.0);
        assert_eq!(second.url, "https://example.com/fs");
    }

    #[test]
    fn test_similarity_fills_rrf_score() {
        let features = to_features(&[RawHit(json!({"similarity": 0.7}))]);
        assert_eq!(features[0].attributes.rrf_score, 0.7);
    }

    #[test]
    fn test_json_publisher_writes_attributes() {
        let features = to_features(&[RawHit(json!({"title": "Roads", "type": "Web Map"}))]);
        let mut publisher = JsonPublisher::new(Vec::new());
        publisher.publish(&features).unwrap();

        let written: Value = serde_json::from_slice(&publisher.into_inner()).unwrap();
        assert_eq!(written[0]["attributes"]["title"], "Roads");
        assert_eq!(written[0]["attributes"]["type"], "Web Map");
        assert_eq!(written[0]["attributes"]["objectid"], 1);
    }
}
