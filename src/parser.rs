use serde_json::Value;

use crate::error::SearchError;
use crate::models::RawHit;

/// Decodes a response body into raw hits.
///
/// Accepts a JSON array, a single JSON value, or newline-delimited JSON.
/// A top-level scalar is wrapped as a one element sequence. The NDJSON
/// fallback is all-or-nothing: one bad line fails the whole body.
pub fn parse_response(body: &str) -> Result<Vec<RawHit>, SearchError> {
    let body = body.trim();
    if body.is_empty() {
        log::debug!("Empty response body");
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => {
            log::debug!("Parsed JSON array with {} items", items.len());
            Ok(items.into_iter().map(RawHit).collect())
        }
        Ok(value) => {
            if !value.is_object() {
                log::warn!("Response is a bare JSON scalar, wrapping it as a single hit");
            }
            Ok(vec![RawHit(value)])
        }
        Err(err) => {
            log::debug!("Body is not a single JSON value ({}), trying NDJSON", err);
            parse_ndjson(body)
        }
    }
}

fn parse_ndjson(body: &str) -> Result<Vec<RawHit>, SearchError> {
    let hits = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str::<Value>(line)
                .map(RawHit)
                .map_err(|source| SearchError::MalformedResponse {
                    line: line.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} NDJSON lines", hits.len());
    Ok(hits)
}
