use serde_json::Value;

use crate::models::search_result::{DEFAULT_KIND, UNTITLED};
use crate::models::{NormalizedResult, RawHit};

const TITLE_KEYS: &[&str] = &["title", "name"];
const DESCRIPTION_KEYS: &[&str] = &["description", "snippet"];
const DETAIL_URL_KEYS: &[&str] = &["prettyurl", "url"];

/// Resolves one raw hit into its canonical shape. Never fails.
pub fn normalize(hit: &RawHit) -> NormalizedResult {
    NormalizedResult {
        id: hit.text("id").unwrap_or_default(),
        title: hit
            .first_text(TITLE_KEYS)
            .unwrap_or_else(|| UNTITLED.to_string()),
        description: hit.first_text(DESCRIPTION_KEYS).unwrap_or_default(),
        kind: hit.text("type").unwrap_or_else(|| DEFAULT_KIND.to_string()),
        tags: hit.get("tags").map(parse_tags).unwrap_or_default(),
        thumbnail: hit.text("thumbnail"),
        score: resolve_score(hit),
        detail_url: hit.first_text(DETAIL_URL_KEYS).unwrap_or_default(),
        map_url: hit.text("mapurl"),
    }
}

pub fn normalize_all(hits: &[RawHit]) -> Vec<NormalizedResult> {
    hits.iter().map(normalize).collect()
}

/// `rrf_score` (coerced), then `similarity` (numbers only), then `score` (coerced).
pub fn resolve_score(hit: &RawHit) -> Option<f64> {
    hit.get("rrf_score")
        .and_then(coerce_number)
        .or_else(|| {
            hit.get("similarity")
                .filter(|value| value.is_number())
                .and_then(coerce_number)
        })
        .or_else(|| hit.get("score").and_then(coerce_number))
}

/// Numbers pass through, strings are parsed as floats, anything else is absent.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

/// Tags arrive either as an array or as one comma separated string.
pub fn parse_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(value: Value) -> RawHit {
        RawHit(value)
    }

    #[test]
    fn test_empty_hit_is_fully_defaulted() {
        let result = normalize(&hit(json!({})));
        assert_eq!(result, NormalizedResult::default());
        assert_eq!(result.title, "Untitled");
        assert_eq!(result.kind, "Layer");
        assert_eq!(result.description, "");
        assert_eq!(result.detail_url, "");
        assert_eq!(result.score, None);
    }

    #[test]
    fn test_scalar_hit_is_fully_defaulted() {
        assert_eq!(normalize(&hit(json!("loose"))), NormalizedResult::default());
    }

    #[test]
    fn test_fallback_order() {
        let result = normalize(&hit(json!({
            "title": "",
            "name": "Bike lanes",
            "snippet": "Cycling network",
            "url": "https://example.com/item",
            "mapurl": "https://example.com/map",
            "type": "Feature Layer",
            "id": "abc"
        })));
        assert_eq!(result.title, "Bike lanes");
        assert_eq!(result.description, "Cycling network");
        assert_eq!(result.detail_url, "https://example.com/item");
        assert_eq!(result.map_url.as_deref(), Some("https://example.com/map"));
        assert_eq!(result.kind, "Feature Layer");
        assert_eq!(result.id, "abc");
    }

    #[test]
    fn test_prettyurl_wins_over_url() {
        let result = normalize(&hit(json!({
            "prettyurl": "https://example.com/pretty",
            "url": "https://example.com/raw"
        })));
        assert_eq!(result.detail_url, "https://example.com/pretty");
    }

    #[test]
    fn test_string_tags_are_split_and_trimmed() {
        let result = normalize(&hit(json!({"tags": "a, b ,c"})));
        assert_eq!(result.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_string_tags_drop_empty_pieces() {
        assert_eq!(parse_tags(&json!(" ,water,, ,roads,")), vec!["water", "roads"]);
    }

    #[test]
    fn test_array_tags_pass_through() {
        let result = normalize(&hit(json!({"tags": ["x", "y"]})));
        assert_eq!(result.tags, vec!["x", "y"]);
    }

    #[test]
    fn test_rrf_score_string_is_coerced() {
        let result = normalize(&hit(json!({"rrf_score": "0.83"})));
        assert_eq!(result.score, Some(0.83));
    }

    #[test]
    fn test_unparsable_score_is_absent() {
        let result = normalize(&hit(json!({"score": "abc"})));
        assert_eq!(result.score, None);
    }

    #[test]
    fn test_zero_score_is_kept() {
        let result = normalize(&hit(json!({"score": 0})));
        assert_eq!(result.score, Some(0.0));
    }

    #[test]
    fn test_score_resolution_order() {
        let both = hit(json!({"rrf_score": 0.5, "similarity": 0.9, "score": 0.1}));
        assert_eq!(resolve_score(&both), Some(0.5));

        let bad_rrf = hit(json!({"rrf_score": "n/a", "similarity": 0.9}));
        assert_eq!(resolve_score(&bad_rrf), Some(0.9));

        let string_similarity = hit(json!({"similarity": "0.9", "score": "0.2"}));
        assert_eq!(resolve_score(&string_similarity), Some(0.2));
    }

    #[test]
    fn test_coerce_number_rejects_non_numbers() {
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!(["1"])), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!(" 1.5 ")), Some(1.5));
    }
}
