use async_trait::async_trait;

use crate::error::SearchError;
use crate::models::RawHit;
use crate::parser::parse_response;

#[async_trait]
pub trait SearchEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw response body for an already trimmed, non-empty query.
    async fn fetch(&self, query: &str) -> Result<String, SearchError>;

    async fn search(&self, query: &str) -> Result<Vec<RawHit>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        log::info!("Searching {} for {:?}", self.name(), query);
        let body = self.fetch(query).await?;
        let hits = parse_response(&body)?;

        log::info!("{} hits from {}", hits.len(), self.name());
        if let Some(first) = hits.first()
            && let Some(fields) = first.0.as_object()
        {
            log::debug!(
                "Sample hit fields: {}",
                fields.keys().cloned().collect::<Vec<String>>().join(", ")
            );
        }

        Ok(hits)
    }
}

pub mod fme;

pub use fme::FmeSearch;

pub type BoxedSearchEngine = Box<dyn SearchEngine>;
