use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};

use crate::config::Api;
use crate::engines::SearchEngine;
use crate::error::SearchError;

pub const DEFAULT_BASE_URL: &str =
    "https://fme-docker.tensing.app:443/fmedatastreaming/embeddings/search.fmw";

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// FME data streaming search service.
#[derive(Clone, Debug)]
pub struct FmeSearch {
    client: Client,
    base_url: String,
    token: String,
    timeout: Option<Duration>,
}

impl FmeSearch {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                log::error!("Failed to build HTTP client, using defaults: {}", err);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
        }
    }

    pub fn from_config(api: &Api) -> Self {
        let engine = Self::new(api.base_url.clone(), api.token.clone());
        match api.timeout {
            Some(seconds) => engine.with_timeout(Duration::from_secs(seconds)),
            None => engine,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl SearchEngine for FmeSearch {
    fn name(&self) -> &'static str {
        "fme"
    }

    async fn fetch(&self, query: &str) -> Result<String, SearchError> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("search_term", query), ("token", self.token.as_str())])
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref());

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::error!("{} answered {}", self.base_url, status);
            return Err(SearchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
